pub mod commands;
pub mod parser;
pub mod repl;
pub mod session;
