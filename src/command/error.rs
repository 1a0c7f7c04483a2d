#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatternParseError {
    #[error("unclosed angle bracket at position {0}")]
    UnclosedBracket(usize),
    #[error("unclosed square bracket at position {0}")]
    UnclosedSquareBracket(usize),
    #[error("nested square brackets are not allowed")]
    NestedSquareBracket,
    #[error("unexpected closing bracket at position {0}")]
    UnexpectedClosingBracket(usize),
    #[error("empty placeholder name at position {0}")]
    EmptyPlaceholder(usize),
    #[error("invalid placeholder name '{0}'")]
    InvalidPlaceholderName(String),
    #[error("placeholder '{0}' must be separated from the previous placeholder by literal text")]
    AdjacentPlaceholders(String),
    #[error("duplicate placeholder '{0}'")]
    DuplicatePlaceholder(String),
    #[error("unexpected text after optional clause at position {0}")]
    TrailingText(usize),
}

/// Failure to match an input line against a pattern.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("expected format: {pattern}")]
    PatternMismatch { pattern: String },
}

impl MatchError {
    /// The declared pattern, for showing the expected syntax to the user.
    pub fn pattern(&self) -> &str {
        match self {
            MatchError::PatternMismatch { pattern } => pattern,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("missing argument '{0}'")]
    Missing(String),
    #[error("invalid value '{value}' for argument '{name}': {message}")]
    Invalid {
        name: String,
        value: String,
        message: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("pattern parse error: {0}")]
    PatternParse(#[from] PatternParseError),
    #[error(transparent)]
    Mismatch(#[from] MatchError),
}
