mod arguments;
pub mod command_match;
mod error;
pub mod pattern;
pub mod pattern_lexer;
pub mod pattern_matcher;

pub use arguments::Arguments;
pub use command_match::{Command, CommandMatch};
pub use error::*;
pub use pattern::{OptionalGroup, Pattern, Segment};

impl Pattern {
    /// Match `input` against this pattern. See [`pattern_matcher::matches`].
    pub fn match_input(&self, input: &str) -> Result<Arguments, MatchError> {
        pattern_matcher::matches(self, input)
    }
}

/// Parse `pattern` and match `input` against it in one step.
pub fn match_pattern(pattern: &str, input: &str) -> Result<Arguments, CommandError> {
    Ok(Pattern::parse(pattern)?.match_input(input)?)
}
