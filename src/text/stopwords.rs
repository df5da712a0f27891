// Stopword filter for keyword statistics.
//
// The list mixes ordinary English function words with words that appear in
// nearly every publication title ("effects", "study") and so carry no signal.

/// Words excluded from keyword frequency analysis. Already lowercase.
pub const STOPWORDS: [&str; 20] = [
    "of", "the", "and", "in", "for", "to", "on", "a", "an", "with", "by", "at", "from", "into",
    "during", "after", "effect", "effects", "study", "studies",
];

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Drop every stopword, passing all other tokens through in order.
pub fn filter_stopwords<I>(tokens: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = String>,
{
    tokens.into_iter().filter(|t| !is_stopword(t))
}
