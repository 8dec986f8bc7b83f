//! The ex-style textual command language.
//!
//! Commands are entered in Command mode, collected into the session's command buffer,
//! and parsed here on submit. Tokens are case-sensitive and matched after trimming.

/// A parsed ex-style command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExCommand {
    /// `q` / `quit`: close the active pane, or request session close on the last one.
    Quit,
    /// `w` / `write`: save the active pane.
    Write,
    /// `wq`: save, then quit.
    WriteQuit,
    /// `vsp` / `vsplit`: vertical split.
    VerticalSplit,
    /// `sp` / `split`: horizontal split.
    HorizontalSplit,
    /// `close`: close the active pane.
    Close,
    /// `goto <n>`: move the cursor to 1-based line `n`.
    Goto(usize),
    /// `help`: show a usage hint in the status line.
    Help,
}

/// Command-language errors. All are user-input errors: the session reports them as
/// status text and leaves all state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The token is not a known command.
    Unknown(String),
    /// The `goto` argument is missing or not a number.
    BadLineNumber(String),
    /// The `goto` argument is outside `[1, line_count]`.
    LineOutOfRange {
        /// The requested 1-based line.
        line: usize,
        /// The buffer's line count.
        line_count: usize,
    },
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Unknown(cmd) => write!(f, "Unknown command: {}", cmd),
            CommandError::BadLineNumber(arg) => {
                write!(f, "goto: not a line number: {}", arg)
            }
            CommandError::LineOutOfRange { line, line_count } => {
                write!(f, "goto: line {} out of range (1-{})", line, line_count)
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Parse a trimmed command string into an [`ExCommand`].
///
/// `goto` is validated for numeric form here; the range check against the buffer
/// happens at execution time.
pub fn parse(input: &str) -> Result<ExCommand, CommandError> {
    let trimmed = input.trim();
    match trimmed {
        "q" | "quit" => Ok(ExCommand::Quit),
        "w" | "write" => Ok(ExCommand::Write),
        "wq" => Ok(ExCommand::WriteQuit),
        "vsp" | "vsplit" => Ok(ExCommand::VerticalSplit),
        "sp" | "split" => Ok(ExCommand::HorizontalSplit),
        "close" => Ok(ExCommand::Close),
        "help" => Ok(ExCommand::Help),
        _ => {
            if let Some(arg) = trimmed.strip_prefix("goto ") {
                let arg = arg.trim();
                return arg
                    .parse::<usize>()
                    .map(ExCommand::Goto)
                    .map_err(|_| CommandError::BadLineNumber(arg.to_string()));
            }
            if trimmed == "goto" {
                return Err(CommandError::BadLineNumber(String::new()));
            }
            Err(CommandError::Unknown(trimmed.to_string()))
        }
    }
}

/// Usage hint shown by `help`.
pub const HELP_TEXT: &str =
    "Commands: :w (save), :q (quit), :wq, :vsp, :sp, :close, :goto <n>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_case_sensitive() {
        assert_eq!(parse("q"), Ok(ExCommand::Quit));
        assert_eq!(parse("Q"), Err(CommandError::Unknown("Q".to_string())));
    }

    #[test]
    fn goto_requires_a_number() {
        assert_eq!(parse("goto 12"), Ok(ExCommand::Goto(12)));
        assert!(matches!(parse("goto abc"), Err(CommandError::BadLineNumber(_))));
        assert!(matches!(parse("goto"), Err(CommandError::BadLineNumber(_))));
    }
}
