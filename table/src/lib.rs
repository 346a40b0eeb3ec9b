pub mod command;
pub mod probe;
