//! Word boundaries for cursor jumps and word deletion.
//!
//! A word is a run of non-whitespace. Moving left stops at the first
//! character of a word; moving right stops just past the last character of
//! a word. Both directions fall back to the buffer edge.

#[inline]
fn is_blank(c: char) -> bool {
    c.is_whitespace()
}

/// Start of the word at or before `from`, strictly left of `from`.
pub fn previous_boundary(content: &[char], from: usize) -> usize {
    let from = from.min(content.len());
    (1..from)
        .rev()
        .find(|&p| !is_blank(content[p]) && is_blank(content[p - 1]))
        .unwrap_or(0)
}

/// End of the word at or after `from`, strictly right of `from`.
pub fn next_boundary(content: &[char], from: usize) -> usize {
    let len = content.len();
    if from >= len {
        return len;
    }
    (from + 1..len)
        .find(|&p| !is_blank(content[p - 1]) && is_blank(content[p]))
        .unwrap_or(len)
}
