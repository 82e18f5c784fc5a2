//! Command dispatcher for the interactive assistant.
//!
//! - **command**: command words and input tokenization
//! - **session**: executes commands against an owned `ContactDirectory`
//! - **repl**: the blocking read-eval-print loop

pub mod command;
pub mod repl;
pub mod session;

pub use command::{parse_input, Command};
pub use repl::run;
pub use session::{Assistant, Reply};
