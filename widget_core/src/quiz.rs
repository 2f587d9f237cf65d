//! Mini quizzes from the learning hub.

use serde::{Deserialize, Serialize};

/// A multiple-choice question. `answer` indexes into `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: usize,
}

impl QuizQuestion {
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = String>,
        answer: usize,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().collect(),
            answer,
        }
    }

    pub fn answer_text(&self) -> Option<&str> {
        self.options.get(self.answer).map(String::as_str)
    }
}

/// Running totals across a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    pub answered: usize,
    pub correct: usize,
    pub total: usize,
}

/// One player's pass through a set of questions.
///
/// The first answer per question locks in; later attempts and out-of-range
/// indexes are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
    selections: Vec<Option<usize>>,
}

impl Quiz {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let selections = vec![None; questions.len()];
        Self {
            questions,
            selections,
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Answer a question. Returns whether the pick was correct, or None when
    /// the attempt was ignored.
    pub fn answer(&mut self, question: usize, option: usize) -> Option<bool> {
        let q = self.questions.get(question)?;
        if option >= q.options.len() || self.selections[question].is_some() {
            return None;
        }
        self.selections[question] = Some(option);
        Some(option == q.answer)
    }

    /// The locked-in pick for a question, if any.
    pub fn selection(&self, question: usize) -> Option<usize> {
        self.selections.get(question).copied().flatten()
    }

    /// Whether a question was answered correctly. None until answered.
    pub fn is_correct(&self, question: usize) -> Option<bool> {
        let selected = self.selection(question)?;
        Some(selected == self.questions[question].answer)
    }

    pub fn score(&self) -> QuizScore {
        let answered = self.selections.iter().filter(|s| s.is_some()).count();
        let correct = (0..self.questions.len())
            .filter(|&i| self.is_correct(i) == Some(true))
            .count();
        QuizScore {
            answered,
            correct,
            total: self.questions.len(),
        }
    }

    /// Forget every answer.
    pub fn reset(&mut self) {
        self.selections = vec![None; self.questions.len()];
    }
}
