use std::fmt;

/// Errors that can occur while loading a banner message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuddenDeathError {
    /// Directive error at specific line of a configuration file
    ParseError {
        line: usize,
        message: String,
        suggestion: Option<String>,
    },
    /// A configuration or message file could not be read
    Io { path: String, message: String },
}

impl SuddenDeathError {
    pub(crate) fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        SuddenDeathError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for SuddenDeathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuddenDeathError::ParseError {
                line,
                message,
                suggestion,
            } => {
                write!(f, "Line {}: {}", line, message)?;
                if let Some(sug) = suggestion {
                    write!(f, " (Suggestion: {})", sug)?;
                }
                Ok(())
            }
            SuddenDeathError::Io { path, message } => write!(f, "{}: {}", path, message),
        }
    }
}

impl std::error::Error for SuddenDeathError {}
