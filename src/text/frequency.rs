// Frequency ranking — count tokens and keep the most common.
//
// Ties are broken by first appearance: of two tokens with the same count,
// the one seen earlier in the input ranks higher. This keeps the ranking
// deterministic regardless of hash iteration order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How many keywords the Manager view charts by default.
pub const DEFAULT_TOP_K: usize = 10;

/// A token and the number of times it occurred (always at least 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub token: String,
    pub count: usize,
}

/// Count `tokens` and return at most `k` entries, most frequent first.
///
/// An empty input gives an empty result; callers should treat that as
/// "not enough data" rather than an error.
pub fn top_k<I>(tokens: I, k: usize) -> Vec<FrequencyEntry>
where
    I: IntoIterator<Item = String>,
{
    // Position in `entries` for each distinct token, in first-seen order
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<FrequencyEntry> = Vec::new();

    for token in tokens {
        match index.get(&token).copied() {
            Some(i) => entries[i].count += 1,
            None => {
                index.insert(token.clone(), entries.len());
                entries.push(FrequencyEntry { token, count: 1 });
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(k);
    entries
}
