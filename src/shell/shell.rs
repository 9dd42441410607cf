use std::io::{self, BufRead, Write};

use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::filesystem::{Clock, SystemClock, Tree};
use crate::shell::command::Command;
use crate::shell::render::write_listing;

pub const DEFAULT_PROMPT: &str = "$ ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    pub prompt: String,
    pub color: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            color: false,
        }
    }
}

/// Whether the session keeps reading commands after the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// An interactive session over a single [`Tree`].
pub struct Shell<C = SystemClock> {
    tree: Tree<C>,
    settings: ShellSettings,
}

impl<C: Clock> Shell<C> {
    pub fn new(tree: Tree<C>, settings: ShellSettings) -> Self {
        Self { tree, settings }
    }

    pub fn tree(&self) -> &Tree<C> {
        &self.tree
    }

    /// Prompts, reads and executes lines until `exit`/`quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<(), SessionError> {
        let mut lines = input.lines();

        loop {
            write!(output, "{}", self.settings.prompt).context(WriteSnafu)?;
            output.flush().context(WriteSnafu)?;

            let Some(line) = lines.next() else {
                info!("Reached end of input, closing session");
                writeln!(output).context(WriteSnafu)?;
                break;
            };
            let line = line.context(ReadSnafu)?;

            if self.execute_line(&line, &mut output).context(WriteSnafu)? == Flow::Exit {
                info!("Session closed by user");
                break;
            }
        }

        output.flush().context(WriteSnafu)
    }

    /// Parses and executes one line. Parse failures are reported on `output`.
    pub fn execute_line(&mut self, line: &str, output: &mut impl Write) -> io::Result<Flow> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(&command, output),
            Ok(None) => Ok(Flow::Continue),
            Err(error) => {
                debug!("Rejected input {:?}: {:?}", line, error);
                writeln!(output, "{error}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: &Command, output: &mut impl Write) -> io::Result<Flow> {
        debug!("Executing {:?}", command);

        let result = match command {
            Command::PrintWorkingDirectory => {
                writeln!(output, "{}", self.tree.current_path())?;
                Ok(())
            }
            Command::List { long_format } => {
                write_listing(
                    &mut *output,
                    self.tree.list(),
                    *long_format,
                    self.settings.color,
                )?;
                Ok(())
            }
            Command::MakeDirectory { name } => self.tree.make_directory(name),
            Command::Touch { name } => self.tree.touch(name),
            Command::ChangeDirectory { name } => self.tree.change_directory(name),
            Command::Remove { name } => self.tree.remove_file(name),
            Command::RemoveDirectory { name } => self.tree.remove_directory(name),
            Command::Exit => return Ok(Flow::Exit),
        };

        if let Err(error) = result {
            debug!("Command '{}' failed: {}", command.program(), error);
            writeln!(output, "{}", command.failure_message(&error))?;
        }

        Ok(Flow::Continue)
    }
}

#[derive(Debug, Snafu)]
pub enum SessionError {
    #[snafu(display("Failed to read from the session input"))]
    ReadError { source: io::Error },
    #[snafu(display("Failed to write to the session output"))]
    WriteError { source: io::Error },
}
