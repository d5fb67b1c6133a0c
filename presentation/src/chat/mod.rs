//! Interactive chat with a single domain assistant

pub mod repl;

pub use repl::{ChatRepl, ReplCommand};
