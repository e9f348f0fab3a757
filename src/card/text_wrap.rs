//! Word splitting and line packing for card content.
//!
//! Pure helpers with no knowledge of borders or card height. Widths are
//! counted in `char`s: every character occupies one column.

/// Break `text` into wrappable tokens.
///
/// Splits on every single space (so consecutive spaces yield empty tokens),
/// then after every hyphen inside a word. The hyphen stays on the token
/// before the break: `"well-known"` becomes `["well-", "known"]`.
pub fn split_words(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for word in text.split(' ') {
        if word.is_empty() {
            tokens.push(word);
        } else {
            tokens.extend(word.split_inclusive('-'));
        }
    }
    tokens
}

/// Greedily pack tokens into lines shorter than `interior_width`.
///
/// Tokens are joined with a single space, except after a token ending in
/// `-`. The last column is kept for the split hyphen: a line that reaches
/// or exceeds `interior_width` (a single long token, or the leftover of
/// one) is cut to `interior_width - 1` chars plus a `-`, and the remainder
/// is carried to the start of the next line.
///
/// Always returns at least one line. `interior_width` must be at least 2.
pub fn pack_lines(tokens: &[&str], interior_width: usize) -> Vec<String> {
    debug_assert!(interior_width >= 2, "cannot force-split below width 2");

    let mut rows = Vec::new();
    let mut carry = String::new();
    let mut remaining = tokens.iter().peekable();

    loop {
        let mut line = std::mem::take(&mut carry);
        // A fresh line always takes one token so every pass makes progress
        let mut fresh = line.is_empty();

        while let Some(token) = remaining.peek() {
            let separator = if fresh || line.ends_with('-') { "" } else { " " };
            let len = char_len(&line) + separator.len() + char_len(token);
            if !fresh && len >= interior_width {
                break;
            }
            line.push_str(separator);
            line.push_str(token);
            remaining.next();
            fresh = false;
        }

        if char_len(&line) >= interior_width {
            let cut = byte_offset(&line, interior_width - 1);
            carry = line.split_off(cut);
            line.push('-');
        }
        rows.push(line);

        if carry.is_empty() && remaining.peek().is_none() {
            break;
        }
    }

    rows
}

/// Split and pack `text` in one step.
pub fn wrap_text(text: &str, interior_width: usize) -> Vec<String> {
    pack_lines(&split_words(text), interior_width)
}

/// Number of columns `text` occupies.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the `index`-th char in `text`, or `text.len()` past the end.
pub(crate) fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
