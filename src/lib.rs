pub mod modules;
pub mod utilities;

pub use modules::dispatcher::Dispatcher;
pub use modules::elevator::Elevator;
pub use utilities::direction::MotionState;
pub use utilities::event::DispatchEvent;
