//! Input-to-pattern matching engine.
//!
//! Scans an input line strictly left to right against the mandatory
//! segments of a [`Pattern`], then against whichever optional groups
//! appear in the remainder, ordered by where their delimiters occur.
//! Each placeholder binds the text up to the literal that follows it.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::pattern::{OptionalGroup, Pattern, Segment};
use super::{Arguments, MatchError};

/// Match `input` against `pattern` and extract the placeholder values.
///
/// Surrounding whitespace of `input` is ignored for matching; the returned
/// [`Arguments`] keeps the raw input.
pub fn matches(pattern: &Pattern, input: &str) -> Result<Arguments, MatchError> {
    let line = input.trim();
    let mut scanner = Scanner::new(pattern, line);

    let delimiters: Vec<&str> = pattern
        .optional()
        .iter()
        .map(OptionalGroup::delimiter)
        .filter(|d| !d.is_empty())
        .collect();
    scanner.scan(pattern.mandatory(), |from| {
        earliest_delimiter(line, from, &delimiters).unwrap_or(line.len())
    })?;

    if !pattern.is_full() {
        let rest_start = scanner.cursor;
        let groups = order_optional_groups(pattern.optional(), &line[rest_start..]);
        trace!(
            pattern = pattern.source(),
            found = groups.len(),
            "ordered optional groups"
        );
        for (i, (_, group)) in groups.iter().enumerate() {
            let end = groups
                .get(i + 1)
                .map_or(line.len(), |(offset, _)| rest_start + offset);
            scanner.scan(group.segments(), |_| end)?;
        }
    }

    Ok(Arguments::new(scanner.bindings, input))
}

/// Position of the first occurrence of any delimiter at or after `from`.
/// An occurrence at `from` leaves the placeholder empty, which `bind` rejects.
fn earliest_delimiter(line: &str, from: usize, delimiters: &[&str]) -> Option<usize> {
    let haystack = &line[from..];
    delimiters
        .iter()
        .filter_map(|d| haystack.find(d))
        .min()
        .map(|i| from + i)
}

/// Keep the optional groups whose delimiter occurs in `rest`, sorted by
/// first occurrence. Groups declared earlier win ties.
fn order_optional_groups<'p>(
    groups: &'p [OptionalGroup],
    rest: &str,
) -> Vec<(usize, &'p OptionalGroup)> {
    let mut found: Vec<(usize, &OptionalGroup)> = groups
        .iter()
        .filter_map(|group| first_occurrence(group.delimiter(), rest).map(|at| (at, group)))
        .collect();
    found.sort_by_key(|(offset, _)| *offset);
    found
}

fn first_occurrence(delimiter: &str, rest: &str) -> Option<usize> {
    if delimiter.is_empty() {
        return (!rest.is_empty()).then_some(0);
    }
    rest.find(delimiter)
}

struct Scanner<'a> {
    pattern: &'a Pattern,
    line: &'a str,
    cursor: usize,
    bindings: HashMap<String, String>,
}

impl<'a> Scanner<'a> {
    fn new(pattern: &'a Pattern, line: &'a str) -> Self {
        Self {
            pattern,
            line,
            cursor: 0,
            bindings: HashMap::new(),
        }
    }

    /// Scan `segments` from the cursor. A placeholder followed by a literal
    /// ends where that literal next occurs; a trailing placeholder ends at
    /// `tail_end(cursor)`.
    fn scan(
        &mut self,
        segments: &[Segment],
        tail_end: impl Fn(usize) -> usize,
    ) -> Result<(), MatchError> {
        let mut iter = segments.iter().peekable();
        while let Some(segment) = iter.next() {
            match segment {
                Segment::Literal(text) => self.expect_literal(text)?,
                Segment::Placeholder(name) => {
                    let end = match iter.peek() {
                        Some(Segment::Literal(next)) => self
                            .line
                            .get(self.cursor..)
                            .and_then(|rest| rest.find(next.as_str()))
                            .map(|i| self.cursor + i)
                            .ok_or_else(|| self.mismatch("delimiter after placeholder not found"))?,
                        _ => tail_end(self.cursor),
                    };
                    self.bind(name, end)?;
                }
            }
        }
        Ok(())
    }

    fn expect_literal(&mut self, text: &str) -> Result<(), MatchError> {
        if !self.line[self.cursor..].starts_with(text) {
            return Err(self.mismatch("literal not found at cursor"));
        }
        self.cursor += text.len();
        Ok(())
    }

    fn bind(&mut self, name: &str, end: usize) -> Result<(), MatchError> {
        if end <= self.cursor {
            return Err(self.mismatch("empty value for placeholder"));
        }
        let value = &self.line[self.cursor..end];
        trace!(name, value, "bound placeholder");
        self.bindings.insert(name.to_string(), value.to_string());
        self.cursor = end;
        Ok(())
    }

    fn mismatch(&self, reason: &str) -> MatchError {
        debug!(
            pattern = self.pattern.source(),
            cursor = self.cursor,
            reason,
            "input does not match pattern"
        );
        MatchError::PatternMismatch {
            pattern: self.pattern.source().to_string(),
        }
    }
}
