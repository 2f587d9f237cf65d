//! Canned responses for the site-wide helper.
//!
//! The router keeps trigger phrases in insertion order and answers with the
//! response whose trigger is the longest substring of the (normalized) input.
//! Ties on length go to the earlier trigger. Anything unmatched falls back to
//! the table's default response.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lowercase, strip sentence punctuation (`.,!?`), trim.
///
/// Deliberately narrower than the knowledge-base normalization: triggers may
/// carry symbols that matter ("c++", "c#"), so only the punctuation a typed
/// question picks up is removed.
fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '!' | '?'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// A trigger phrase and the reply it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedResponse {
    pub trigger: String,
    pub response: String,
}

/// Insertion-ordered trigger table with a fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTable {
    responses: Vec<CannedResponse>,
    default_response: String,
}

impl ResponseTable {
    pub fn new(default_response: impl Into<String>) -> Self {
        Self {
            responses: Vec::new(),
            default_response: default_response.into(),
        }
    }

    /// Add a trigger/response pair. The trigger is normalized before storage;
    /// triggers that normalize to the empty string are dropped.
    pub fn with_response(
        mut self,
        trigger: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        let trigger = normalize(&trigger.into());
        if trigger.is_empty() {
            debug!("dropping canned response with empty trigger");
            return self;
        }
        self.responses.push(CannedResponse {
            trigger,
            response: response.into(),
        });
        self
    }

    pub fn default_response(&self) -> &str {
        &self.default_response
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// The response whose trigger appears in the input, preferring longer
    /// triggers. Returns None when no trigger matches.
    pub fn lookup(&self, input: &str) -> Option<&str> {
        let needle = normalize(input);
        if needle.is_empty() {
            return None;
        }

        let mut best: Option<&CannedResponse> = None;
        for candidate in &self.responses {
            if !needle.contains(&candidate.trigger) {
                continue;
            }
            let longer = best.map_or(true, |b| {
                candidate.trigger.chars().count() > b.trigger.chars().count()
            });
            if longer {
                best = Some(candidate);
            }
        }
        best.map(|c| c.response.as_str())
    }

    /// Like [`lookup`](Self::lookup) but substitutes the default response.
    pub fn route(&self, input: &str) -> &str {
        match self.lookup(input) {
            Some(response) => response,
            None => {
                debug!("no canned trigger matched, using default response");
                &self.default_response
            }
        }
    }
}
