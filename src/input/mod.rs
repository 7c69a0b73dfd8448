//! Line-based input for the terminal driver

pub mod command;

pub use command::{parse_command, Command, HELP};
