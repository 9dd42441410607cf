//! Line-oriented command layer on top of the filesystem tree.

mod command;
mod render;
mod shell;

pub use command::{Command, CommandError};
pub use shell::{DEFAULT_PROMPT, Flow, SessionError, Shell, ShellSettings};
