pub mod logging;
pub mod reader;
pub mod replay;
pub mod script;

pub use reader::{ReadError, read_script};
pub use replay::{Countdown, Replay};
pub use script::{ScriptCommand, ScriptError, parse_line};
