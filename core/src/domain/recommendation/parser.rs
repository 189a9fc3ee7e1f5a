use crate::domain::recommendation::entities::MealSuggestion;

pub const SEPARATOR: char = '|';

/// A non-blank reply line that does not have the `emoji | name` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based position in the raw reply, blank lines included.
    pub line_number: usize,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Suggestion(MealSuggestion),
    Malformed(MalformedLine),
}

/// Splits a line on its first separator. Both halves are trimmed and must be
/// non-empty; any further separators stay in the name.
pub fn parse_line(line: &str) -> Option<MealSuggestion> {
    let (image, name) = line.split_once(SEPARATOR)?;
    let (image, name) = (image.trim(), name.trim());

    if image.is_empty() || name.is_empty() {
        return None;
    }

    Some(MealSuggestion::new(image, name))
}

/// Parses every non-blank line of a model reply, in order.
pub fn parse_reply(reply: &str) -> Vec<ParsedLine> {
    reply
        .split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| match parse_line(line) {
            Some(suggestion) => ParsedLine::Suggestion(suggestion),
            None => ParsedLine::Malformed(MalformedLine {
                line_number: index + 1,
                content: line.to_string(),
            }),
        })
        .collect()
}

/// Separates well-formed suggestions from malformed lines, keeping order.
pub fn partition_reply(reply: &str) -> (Vec<MealSuggestion>, Vec<MalformedLine>) {
    let mut suggestions = Vec::new();
    let mut malformed = Vec::new();

    for parsed in parse_reply(reply) {
        match parsed {
            ParsedLine::Suggestion(suggestion) => suggestions.push(suggestion),
            ParsedLine::Malformed(line) => malformed.push(line),
        }
    }

    (suggestions, malformed)
}
