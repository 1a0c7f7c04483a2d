use super::PatternParseError;

/// Raw token produced by the pattern lexer, paired with its byte offset
/// in the source pattern. The parser in [`super::pattern`] turns these into
/// mandatory segments and optional groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexToken {
    /// Verbatim text between markers (e.g. "create stream ")
    Text(String),
    /// Angle-bracket placeholder name (e.g. "<stream-id>" -> "stream-id")
    Placeholder(String),
    /// Opening square bracket `[`
    OpenBracket,
    /// Closing square bracket `]`
    CloseBracket,
}

/// Tokenize a pattern string into a sequence of `(offset, LexToken)` pairs.
///
/// Whitespace is significant: it is kept inside `Text` tokens because
/// literals are matched verbatim against the input line.
pub fn tokenize(pattern: &str) -> Result<Vec<(usize, LexToken)>, PatternParseError> {
    let mut tokens = Vec::new();
    let mut chars = pattern.char_indices().peekable();
    let mut bracket_start: Option<usize> = None;

    while let Some(&(pos, ch)) = chars.peek() {
        match ch {
            '<' => {
                chars.next(); // consume '<'
                let mut name = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '>' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(PatternParseError::UnclosedBracket(pos));
                }
                if name.is_empty() {
                    return Err(PatternParseError::EmptyPlaceholder(pos));
                }
                if !name.chars().all(is_name_char) {
                    return Err(PatternParseError::InvalidPlaceholderName(name));
                }
                tokens.push((pos, LexToken::Placeholder(name)));
            }

            '[' => {
                if bracket_start.is_some() {
                    return Err(PatternParseError::NestedSquareBracket);
                }
                bracket_start = Some(pos);
                tokens.push((pos, LexToken::OpenBracket));
                chars.next();
            }

            ']' => {
                if bracket_start.take().is_none() {
                    return Err(PatternParseError::UnexpectedClosingBracket(pos));
                }
                tokens.push((pos, LexToken::CloseBracket));
                chars.next();
            }

            _ => {
                let mut text = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if matches!(c, '<' | '[' | ']') {
                        break;
                    }
                    text.push(c);
                    chars.next();
                }
                tokens.push((pos, LexToken::Text(text)));
            }
        }
    }

    if let Some(start) = bracket_start {
        return Err(PatternParseError::UnclosedSquareBracket(start));
    }

    Ok(tokens)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}
