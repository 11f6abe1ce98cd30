//! Interactive chat module
//!
//! Provides a readline-based interactive shell around the agent turn.

mod repl;

pub use repl::{ChatRepl, LoopControl, ShellCommand};
