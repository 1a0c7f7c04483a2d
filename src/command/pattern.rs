use std::collections::HashSet;

use super::PatternParseError;
use super::pattern_lexer::{LexToken, tokenize};

/// One piece of a pattern: verbatim text or a named slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text that must appear verbatim in the input (e.g. "create stream ")
    Literal(String),
    /// Named slot bound to a substring of the input (e.g. `<stream-id>`)
    Placeholder(String),
}

/// A bracketed group of the optional clause, e.g. `[ttl <ttl>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalGroup {
    delimiter: String,
    segments: Vec<Segment>,
}

impl OptionalGroup {
    /// Literal text that introduces this group in the input. Its presence
    /// decides whether the group is matched at all. May be empty when the
    /// group starts with a placeholder and nothing separates it from the
    /// mandatory part.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Segments of the group, starting with the delimiter literal when it
    /// is non-empty.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// A parsed command pattern such as `create stream <stream-id> [ttl <ttl>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    mandatory: Vec<Segment>,
    optional: Vec<OptionalGroup>,
}

impl Pattern {
    /// Parse a pattern string.
    ///
    /// Everything before the first `[` is the mandatory part; the bracket
    /// groups after it form the optional clause. Trailing whitespace of the
    /// mandatory part separates it from the optional clause and is prefixed
    /// to each group's delimiter unless the group already begins with
    /// whitespace.
    pub fn parse(source: &str) -> Result<Self, PatternParseError> {
        let trimmed = source.trim();
        let leading = source.len() - source.trim_start().len();
        let tokens = tokenize(trimmed)?;

        let split = tokens
            .iter()
            .position(|(_, token)| *token == LexToken::OpenBracket)
            .unwrap_or(tokens.len());
        let (mandatory_tokens, optional_tokens) = tokens.split_at(split);

        let mut names = HashSet::new();
        let mut mandatory = to_segments(mandatory_tokens, &mut names)?;
        let separator = split_trailing_whitespace(&mut mandatory);
        let optional = parse_optional_clause(optional_tokens, &separator, leading, &mut names)?;

        Ok(Self {
            source: source.to_string(),
            mandatory,
            optional,
        })
    }

    /// The pattern string as declared.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn mandatory(&self) -> &[Segment] {
        &self.mandatory
    }

    pub fn optional(&self) -> &[OptionalGroup] {
        &self.optional
    }

    /// True when the pattern has no optional clause.
    pub fn is_full(&self) -> bool {
        self.optional.is_empty()
    }

    /// Names of all placeholders, mandatory first, in declaration order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.mandatory
            .iter()
            .chain(self.optional.iter().flat_map(|g| g.segments.iter()))
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
    }

    /// Leading literal text before the first placeholder, with surrounding
    /// whitespace removed (e.g. "create stream"). Used as the completion
    /// candidate for this pattern.
    pub fn prefix(&self) -> &str {
        match self.mandatory.first() {
            Some(Segment::Literal(text)) => text.trim(),
            _ => "",
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Convert lexer tokens of one bracket-free region into segments, rejecting
/// placeholders with no literal between them and names already in use.
fn to_segments(
    tokens: &[(usize, LexToken)],
    names: &mut HashSet<String>,
) -> Result<Vec<Segment>, PatternParseError> {
    let mut segments: Vec<Segment> = Vec::with_capacity(tokens.len());
    for (_, token) in tokens {
        match token {
            LexToken::Text(text) => segments.push(Segment::Literal(text.clone())),
            LexToken::Placeholder(name) => {
                if matches!(segments.last(), Some(Segment::Placeholder(_))) {
                    return Err(PatternParseError::AdjacentPlaceholders(name.clone()));
                }
                if !names.insert(name.clone()) {
                    return Err(PatternParseError::DuplicatePlaceholder(name.clone()));
                }
                segments.push(Segment::Placeholder(name.clone()));
            }
            // Brackets never reach this point: callers split on them first.
            LexToken::OpenBracket | LexToken::CloseBracket => {}
        }
    }
    Ok(segments)
}

/// Remove trailing whitespace from the last literal of `segments` and return it.
fn split_trailing_whitespace(segments: &mut Vec<Segment>) -> String {
    let Some(Segment::Literal(text)) = segments.last_mut() else {
        return String::new();
    };
    let kept = text.trim_end().len();
    let separator = text.split_off(kept);
    if text.is_empty() {
        segments.pop();
    }
    separator
}

fn parse_optional_clause(
    tokens: &[(usize, LexToken)],
    separator: &str,
    offset: usize,
    names: &mut HashSet<String>,
) -> Result<Vec<OptionalGroup>, PatternParseError> {
    let mut groups = Vec::new();
    let mut rest = tokens;

    while let Some(((pos, first), tail)) = rest.split_first() {
        match first {
            LexToken::OpenBracket => {
                // The lexer guarantees every `[` has a matching `]`.
                let close = tail
                    .iter()
                    .position(|(_, token)| *token == LexToken::CloseBracket)
                    .unwrap_or(tail.len());
                let segments = to_segments(&tail[..close], names)?;
                if let Some(group) = build_group(segments, separator) {
                    groups.push(group);
                }
                rest = tail.get(close + 1..).unwrap_or_default();
            }
            LexToken::Text(text) if text.trim().is_empty() => rest = tail,
            _ => return Err(PatternParseError::TrailingText(pos + offset)),
        }
    }

    Ok(groups)
}

fn build_group(mut segments: Vec<Segment>, separator: &str) -> Option<OptionalGroup> {
    if segments.is_empty() {
        return None;
    }
    let delimiter = match segments.first_mut() {
        Some(Segment::Literal(text)) => {
            if !text.starts_with(char::is_whitespace) {
                text.insert_str(0, separator);
            }
            text.clone()
        }
        _ => {
            if !separator.is_empty() {
                segments.insert(0, Segment::Literal(separator.to_string()));
            }
            separator.to_string()
        }
    };
    Some(OptionalGroup {
        delimiter,
        segments,
    })
}
