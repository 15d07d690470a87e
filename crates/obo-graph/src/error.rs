use thiserror::Error;

/// All possible errors that can occur while loading an OBO file
#[derive(Error, Debug)]
pub enum OboError {
    /// The path was rejected before any parsing started
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed OBO content
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number of the offending line or stanza header
        line: usize,
        /// What was wrong with it
        message: String,
    },

    /// Reading the file failed after it was opened
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OboError {
    /// Shorthand for a parse error at `line`
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        OboError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            OboError::InvalidInput(_) => "ERR_OBO_INVALID_INPUT",
            OboError::Parse { .. } => "ERR_OBO_PARSE",
            OboError::Io(_) => "ERR_OBO_IO",
        }
    }
}
