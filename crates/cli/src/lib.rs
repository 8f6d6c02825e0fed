pub mod command;
pub mod console;
pub mod session;

pub use command::{Command, CommandError};
pub use console::ConsoleSink;
pub use session::run;
