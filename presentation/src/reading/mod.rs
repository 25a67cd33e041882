//! Interactive reading loop

pub mod command;
pub mod repl;
