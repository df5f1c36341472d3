pub mod call;
pub mod config;
pub mod debug;
pub mod direction;
pub mod elevator_status;
pub mod error;
pub mod event;
pub mod request;
