use crate::fonts::FontMetrics;

/// Greedily packs whitespace-delimited words into lines no wider than
/// `max_width`.
///
/// A line accepts the next word only if the word plus a separating space
/// still fits. A word that is wider than `max_width` on its own is placed
/// alone on a line, unmodified. Empty or blank input yields no lines.
pub fn wrap(text: &str, max_width: f32, font: &dyn FontMetrics, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{} {}", current, word);
        if font.text_width(&candidate, size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Flows tokens left-to-right into rows, with a separator of
/// `separator_width` between neighbours on the same row.
///
/// A row takes the next token only if the token plus its separator still
/// fits in `max_width`; tokens are never split. An oversized token gets a row
/// of its own.
pub fn pack_tokens<'a, S: AsRef<str>>(
    tokens: &'a [S],
    max_width: f32,
    separator_width: f32,
    font: &dyn FontMetrics,
    size: f32,
) -> Vec<Vec<&'a str>> {
    let mut rows: Vec<Vec<&'a str>> = Vec::new();
    let mut row: Vec<&'a str> = Vec::new();
    let mut row_width = 0.0;

    for token in tokens {
        let token: &'a str = token.as_ref();
        if token.trim().is_empty() {
            continue;
        }
        let token_width = font.text_width(token, size);
        if row.is_empty() {
            row.push(token);
            row_width = token_width;
        } else if row_width + separator_width + token_width <= max_width {
            row.push(token);
            row_width += separator_width + token_width;
        } else {
            rows.push(std::mem::take(&mut row));
            row.push(token);
            row_width = token_width;
        }
    }

    if !row.is_empty() {
        rows.push(row);
    }
    rows
}
