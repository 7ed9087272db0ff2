pub mod event;
pub mod handler;
pub mod processor;
pub mod signal;


pub use event::GameEvent;
pub use handler::SignalHandler;
pub use processor::EventProcessor;
pub use signal::{MarkSignal, MarkSource};
