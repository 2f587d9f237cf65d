//! Step-by-step tutorial walkthroughs.

use serde::{Deserialize, Serialize};

/// One step of a tutorial: explanation plus an optional code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialStep {
    pub title: String,
    pub content: String,
    pub code: String,
}

/// A complete tutorial as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub description: String,
    pub steps: Vec<TutorialStep>,
}

impl Tutorial {
    /// A stepper positioned at this tutorial's first step.
    pub fn stepper(&self) -> Stepper {
        Stepper::new(self.steps.len())
    }
}

/// Cursor over a tutorial's steps. Navigation clamps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stepper {
    step_count: usize,
    index: usize,
}

impl Stepper {
    pub fn new(step_count: usize) -> Self {
        Self {
            step_count,
            index: 0,
        }
    }

    /// Zero-based index of the current step.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.step_count == 0 || self.index == self.step_count - 1
    }

    /// Advance one step; false when already at the end.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Go back one step; false when already at the start.
    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Jump straight to a step; false and unchanged when out of range.
    pub fn jump(&mut self, index: usize) -> bool {
        if index >= self.step_count {
            return false;
        }
        self.index = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut stepper = Stepper::new(3);
        assert!(stepper.is_first());
        assert!(!stepper.prev());

        assert!(stepper.next());
        assert!(stepper.next());
        assert!(stepper.is_last());
        assert!(!stepper.next());
        assert_eq!(stepper.index(), 2);
    }

    #[test]
    fn test_jump() {
        let mut stepper = Stepper::new(4);
        assert!(stepper.jump(3));
        assert_eq!(stepper.index(), 3);
        assert!(!stepper.jump(4));
        assert_eq!(stepper.index(), 3);
    }

    #[test]
    fn test_empty_tutorial() {
        let tutorial = Tutorial {
            id: "empty".to_string(),
            title: "Empty".to_string(),
            description: String::new(),
            steps: Vec::new(),
        };
        let mut stepper = tutorial.stepper();
        assert!(stepper.is_last());
        assert!(!stepper.next());
    }
}
