//! Question/answer knowledge bases for the per-language helper bots.
//!
//! A knowledge base is immutable once built and keeps its entries in
//! insertion order; the fuzzy matcher's tie-break rule depends on that
//! order, which is why the JSON form is an array rather than a map.

mod matcher;

pub use matcher::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a knowledge base.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("failed to parse knowledge base: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate question after normalization: {0:?}")]
    DuplicateQuestion(String),

    #[error("question is empty after normalization: {0:?}")]
    EmptyQuestion(String),
}

/// A single question/answer pair. The question is stored normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

/// Immutable, insertion-ordered set of question/answer pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBase {
    entries: Vec<QaEntry>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair, normalizing the question. Empty questions and duplicates
    /// of an existing question are dropped; the first entry wins.
    pub fn with_entry(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        let question = normalize(&question.into());
        if question.is_empty() {
            debug!("dropping knowledge-base entry with empty question");
            return self;
        }
        if self.entries.iter().any(|e| e.question == question) {
            debug!(question = %question, "dropping duplicate knowledge-base entry");
            return self;
        }
        self.entries.push(QaEntry {
            question,
            answer: answer.into(),
        });
        self
    }

    /// Strict constructor: empty or duplicate questions are errors.
    pub fn from_entries<I, Q, A>(entries: I) -> Result<Self, KnowledgeBaseError>
    where
        I: IntoIterator<Item = (Q, A)>,
        Q: Into<String>,
        A: Into<String>,
    {
        let mut kb = Self::new();
        for (question, answer) in entries {
            let raw = question.into();
            let question = normalize(&raw);
            if question.is_empty() {
                return Err(KnowledgeBaseError::EmptyQuestion(raw));
            }
            if kb.entries.iter().any(|e| e.question == question) {
                return Err(KnowledgeBaseError::DuplicateQuestion(question));
            }
            kb.entries.push(QaEntry {
                question,
                answer: answer.into(),
            });
        }
        Ok(kb)
    }

    /// Load from a JSON array of `{"question": ..., "answer": ...}` objects.
    pub fn from_json_str(text: &str) -> Result<Self, KnowledgeBaseError> {
        let raw: Vec<QaEntry> = serde_json::from_str(text)?;
        Self::from_entries(raw.into_iter().map(|e| (e.question, e.answer)))
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &QaEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entry_slice(&self) -> &[QaEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_are_normalized_on_insert() {
        let kb = KnowledgeBase::new().with_entry("What is HTML?", "HyperText Markup Language.");

        let entry = kb.entries().next().unwrap();
        assert_eq!(entry.question, "what is html");
    }

    #[test]
    fn test_duplicates_keep_the_first_entry() {
        let kb = KnowledgeBase::new()
            .with_entry("what is java", "first")
            .with_entry("What is Java?", "second");

        assert_eq!(kb.len(), 1);
        assert_eq!(kb.entries().next().unwrap().answer, "first");
    }

    #[test]
    fn test_strict_loader_rejects_duplicates() {
        let result = KnowledgeBase::from_entries([
            ("what is java", "first"),
            ("What is Java?", "second"),
        ]);
        assert!(matches!(
            result,
            Err(KnowledgeBaseError::DuplicateQuestion(_))
        ));
    }

    #[test]
    fn test_from_json_preserves_order() {
        let kb = KnowledgeBase::from_json_str(
            r#"[
                {"question": "what is html", "answer": "markup"},
                {"question": "what is a div", "answer": "container"}
            ]"#,
        )
        .unwrap();

        let questions: Vec<&str> = kb.entries().map(|e| e.question.as_str()).collect();
        assert_eq!(questions, ["what is html", "what is a div"]);
    }

    #[test]
    fn test_bad_json_is_a_parse_error() {
        assert!(matches!(
            KnowledgeBase::from_json_str("{"),
            Err(KnowledgeBaseError::Parse(_))
        ));
    }
}
