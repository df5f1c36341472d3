pub mod command;
pub mod dispatcher;
pub mod display;
pub mod elevator;
