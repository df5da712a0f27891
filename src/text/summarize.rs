// Naive title summarizer — whitespace word truncation.

/// Titles with at most this many words are returned as-is.
pub const MAX_WORDS: usize = 15;
/// Longer titles are cut down to this many words.
pub const KEEP_WORDS: usize = 12;
/// Appended to a truncated title.
pub const ELLIPSIS: &str = " ...";

/// Shorten `text` to its first twelve words plus `" ..."` when it has more
/// than fifteen whitespace-separated words. Shorter text is unchanged.
pub fn summarize(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= MAX_WORDS {
        return text.to_string();
    }
    format!("{}{ELLIPSIS}", words[..KEEP_WORDS].join(" "))
}
