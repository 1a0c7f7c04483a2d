use super::{Arguments, CommandError, Pattern};

/// A command that can be matched against user input.
pub trait Command {
    /// Pattern describing the expected input, e.g. `create stream <stream-id> [ttl <ttl>]`.
    fn pattern(&self) -> &str;

    /// Human-readable summary shown alongside the pattern.
    fn description(&self) -> &str {
        ""
    }
}

/// Pairs a [`Command`] with the input line it was selected for.
#[derive(Debug)]
pub struct CommandMatch<'a, C: Command + ?Sized> {
    command: &'a C,
    input: String,
}

impl<'a, C: Command + ?Sized> CommandMatch<'a, C> {
    pub fn new(command: &'a C, input: impl Into<String>) -> Self {
        Self {
            command,
            input: input.into(),
        }
    }

    pub fn command(&self) -> &'a C {
        self.command
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Parse the command's pattern and extract arguments from the input.
    pub fn arguments(&self) -> Result<Arguments, CommandError> {
        let pattern = Pattern::parse(self.command.pattern())?;
        Ok(pattern.match_input(&self.input)?)
    }
}
