//! Fuzzy lookup against a knowledge base.
//!
//! Matching makes three attempts per key, in insertion order: exact equality
//! after normalization, substring containment in either direction, then a
//! Levenshtein-distance fallback gated at 40% of the key length.

use tracing::debug;

use super::KnowledgeBase;

/// Edit-distance budget as a fraction of the key length. Inherited from the
/// original widget's observed behavior; a tunable, not a contract.
const DISTANCE_RATIO: f64 = 0.4;

/// Lowercase, strip everything but word characters and whitespace, trim.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Minimum number of single-character insert/delete/substitute edits
/// between `a` and `b`. Two-row dynamic programming over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut current = Vec::with_capacity(b.len() + 1);
        current.push(i + 1);
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = current[j] + 1;
            current.push(substitution.min(deletion).min(insertion));
        }
        prev = current;
    }
    prev[b.len()]
}

impl KnowledgeBase {
    /// Find the best answer for a user message.
    ///
    /// Keys are scanned in insertion order. An exact or substring hit returns
    /// immediately; otherwise the closest key within the edit-distance budget
    /// wins, with ties going to the first-encountered candidate. Returns None
    /// when nothing qualifies (callers substitute their fallback message) and
    /// for input that normalizes to the empty string.
    pub fn best_match(&self, input: &str) -> Option<&str> {
        let needle = normalize(input);
        if needle.is_empty() {
            return None;
        }

        let mut best: Option<(usize, usize)> = None; // (distance, entry index)
        for (index, entry) in self.entry_slice().iter().enumerate() {
            let key = entry.question.as_str();
            if needle == key {
                return Some(&entry.answer);
            }
            if needle.contains(key) || key.contains(&needle) {
                return Some(&entry.answer);
            }

            let budget = (DISTANCE_RATIO * key.chars().count() as f64).floor() as usize;
            let distance = levenshtein(&needle, key);
            if distance <= budget && best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, index));
            }
        }

        best.map(|(distance, index)| {
            let entry = &self.entry_slice()[index];
            debug!(
                question = %entry.question,
                distance,
                "fuzzy-matched knowledge-base entry"
            );
            entry.answer.as_str()
        })
    }
}
