// Word tokenizer — lowercase alphabetic words on word boundaries.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Candidate ASCII letter runs. regex-lite's `\b` only knows ASCII word
/// characters, so candidates are re-checked against their Unicode
/// neighbours in [`tokenize`].
static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[a-z]+\b").expect("word pattern is valid")
});

/// Letters (any script), digits and underscore all continue a word.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lazily yield the lowercase words of `text`, in order, duplicates kept.
///
/// A word is a run of ASCII letters with no word character on either side,
/// so "co2", "müller" and "naïve" contribute nothing.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD.find_iter(text)
        .filter(move |m| {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
        .map(|m| m.as_str().to_ascii_lowercase())
}
