use snafu::{OptionExt, Snafu};

use crate::filesystem::TreeError;

const LONG_FORMAT_FLAG: &str = "-l";

/// A parsed shell command. Operands beyond the first are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PrintWorkingDirectory,
    List { long_format: bool },
    MakeDirectory { name: String },
    Touch { name: String },
    ChangeDirectory { name: String },
    Remove { name: String },
    RemoveDirectory { name: String },
    Exit,
}

impl Command {
    /// Splits a line on whitespace and resolves the first token to a command.
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(program) = tokens.next() else {
            return Ok(None);
        };
        let operand = tokens.next().map(str::to_string);

        let command = match program {
            "pwd" => Command::PrintWorkingDirectory,
            "ls" => Command::List {
                long_format: operand.as_deref() == Some(LONG_FORMAT_FLAG),
            },
            "mkdir" => Command::MakeDirectory {
                name: operand.context(MkdirMissingOperandSnafu)?,
            },
            "touch" => Command::Touch {
                name: operand.context(TouchMissingOperandSnafu)?,
            },
            "cd" => Command::ChangeDirectory {
                name: operand.context(CdMissingOperandSnafu)?,
            },
            "rm" => Command::Remove {
                name: operand.context(RmMissingOperandSnafu)?,
            },
            "rmdir" => Command::RemoveDirectory {
                name: operand.context(RmdirMissingOperandSnafu)?,
            },
            "exit" | "quit" => Command::Exit,
            _ => return UnknownCommandSnafu { name: program }.fail(),
        };

        Ok(Some(command))
    }

    pub fn program(&self) -> &'static str {
        match self {
            Command::PrintWorkingDirectory => "pwd",
            Command::List { .. } => "ls",
            Command::MakeDirectory { .. } => "mkdir",
            Command::Touch { .. } => "touch",
            Command::ChangeDirectory { .. } => "cd",
            Command::Remove { .. } => "rm",
            Command::RemoveDirectory { .. } => "rmdir",
            Command::Exit => "exit",
        }
    }

    /// The message printed when this command fails with `error`.
    pub fn failure_message(&self, error: &TreeError) -> String {
        match (self, error) {
            (Command::MakeDirectory { .. }, TreeError::AlreadyExists { .. }) => {
                "mkdir: directory already exists".to_string()
            }
            (Command::ChangeDirectory { .. }, TreeError::NotFound { .. }) => {
                "cd: no such file or directory".to_string()
            }
            (Command::ChangeDirectory { .. }, TreeError::NotADirectory { .. }) => {
                "cd: not a directory".to_string()
            }
            (Command::Remove { .. }, TreeError::NotFound { .. }) => {
                "rm: file does not exist".to_string()
            }
            (Command::Remove { .. }, TreeError::IsADirectory { name }) => {
                format!("rm: cannot remove '{name}': is a directory")
            }
            (Command::RemoveDirectory { .. }, TreeError::NotFound { .. }) => {
                "rmdir: directory does not exist".to_string()
            }
            (Command::RemoveDirectory { .. }, TreeError::NotADirectory { name }) => {
                format!("rmdir: '{name}' is not a directory")
            }
            (Command::RemoveDirectory { .. }, TreeError::NotEmpty { .. }) => {
                "rmdir: directory not empty".to_string()
            }
            _ => format!("{}: {}", self.program(), error),
        }
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum CommandError {
    #[snafu(display("mkdir: missing operand"))]
    MkdirMissingOperand,
    #[snafu(display("touch: missing file name"))]
    TouchMissingOperand,
    #[snafu(display("cd: missing operand"))]
    CdMissingOperand,
    #[snafu(display("rm: missing file operand"))]
    RmMissingOperand,
    #[snafu(display("rmdir: missing directory operand"))]
    RmdirMissingOperand,
    #[snafu(display("Unknown command"))]
    UnknownCommand { name: String },
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("pwd", Command::PrintWorkingDirectory)]
    #[case("ls", Command::List { long_format: false })]
    #[case("ls -l", Command::List { long_format: true })]
    #[case("ls -a", Command::List { long_format: false })]
    #[case("ls docs -l", Command::List { long_format: false })]
    #[case("mkdir docs", Command::MakeDirectory { name: "docs".into() })]
    #[case("touch a.txt extra", Command::Touch { name: "a.txt".into() })]
    #[case("cd ..", Command::ChangeDirectory { name: "..".into() })]
    #[case("  rm   a.txt  ", Command::Remove { name: "a.txt".into() })]
    #[case("rmdir docs", Command::RemoveDirectory { name: "docs".into() })]
    #[case("exit", Command::Exit)]
    #[case("quit", Command::Exit)]
    fn parses_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(Command::parse(line), Ok(Some(expected)));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t")]
    fn blank_lines_parse_to_nothing(#[case] line: &str) {
        assert_eq!(Command::parse(line), Ok(None));
    }

    #[rstest]
    #[case("mkdir", "mkdir: missing operand")]
    #[case("touch", "touch: missing file name")]
    #[case("cd", "cd: missing operand")]
    #[case("rm", "rm: missing file operand")]
    #[case("rmdir  ", "rmdir: missing directory operand")]
    #[case("mv a b", "Unknown command")]
    #[case("PWD", "Unknown command")]
    fn parse_errors_render_legacy_messages(#[case] line: &str, #[case] message: &str) {
        let error = Command::parse(line).unwrap_err();
        assert_eq!(error.to_string(), message);
    }

    #[rstest]
    #[case(Command::MakeDirectory { name: "d".into() }, TreeError::AlreadyExists { name: "d".into() }, "mkdir: directory already exists")]
    #[case(Command::ChangeDirectory { name: "d".into() }, TreeError::NotFound { name: "d".into() }, "cd: no such file or directory")]
    #[case(Command::ChangeDirectory { name: "d".into() }, TreeError::NotADirectory { name: "d".into() }, "cd: not a directory")]
    #[case(Command::Remove { name: "d".into() }, TreeError::NotFound { name: "d".into() }, "rm: file does not exist")]
    #[case(Command::Remove { name: "d".into() }, TreeError::IsADirectory { name: "d".into() }, "rm: cannot remove 'd': is a directory")]
    #[case(Command::RemoveDirectory { name: "d".into() }, TreeError::NotFound { name: "d".into() }, "rmdir: directory does not exist")]
    #[case(Command::RemoveDirectory { name: "d".into() }, TreeError::NotADirectory { name: "d".into() }, "rmdir: 'd' is not a directory")]
    #[case(Command::RemoveDirectory { name: "d".into() }, TreeError::NotEmpty { name: "d".into() }, "rmdir: directory not empty")]
    #[case(Command::Touch { name: "".into() }, TreeError::InvalidName, "touch: entry name must not be empty")]
    fn failure_messages(
        #[case] command: Command,
        #[case] error: TreeError,
        #[case] expected: &str,
    ) {
        assert_eq!(command.failure_message(&error), expected);
    }
}
