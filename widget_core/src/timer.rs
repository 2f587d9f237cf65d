//! Cancellable delayed tasks tied to a widget's lifetime.
//!
//! Widgets never mutate state from a bare timer callback. Delayed work (the
//! "bot is typing" pause, the memory-match reveal delay) is queued here with a
//! logical-millisecond deadline; the owning widget drains due tasks from its
//! own event handling, and whatever is still pending simply dies with the
//! queue when the widget is torn down.

use serde::{Deserialize, Serialize};

/// Handle for a scheduled task, usable to cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Scheduled<T> {
    id: TaskId,
    due_at: u64,
    payload: T,
}

/// Queue of delayed tasks on a logical millisecond clock.
///
/// Tasks fire in deadline order, FIFO within the same deadline. The clock is
/// whatever monotonic "now" the caller passes in, so tests can drive time
/// explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerQueue<T> {
    next_id: u64,
    tasks: Vec<Scheduled<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            tasks: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to fire `delay` milliseconds after `now`.
    pub fn schedule(&mut self, now: u64, delay: u64, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Scheduled {
            id,
            due_at: now.saturating_add(delay),
            payload,
        });
        id
    }

    /// Cancel a pending task. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() < before
    }

    /// Remove and return every task due at or before `now`.
    pub fn drain_due(&mut self, now: u64) -> Vec<T> {
        let mut due = Vec::new();
        let mut rest = Vec::new();
        for task in self.tasks.drain(..) {
            if task.due_at <= now {
                due.push(task);
            } else {
                rest.push(task);
            }
        }
        self.tasks = rest;
        due.sort_by_key(|task| (task.due_at, task.id.0));
        due.into_iter().map(|task| task.payload).collect()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Deadline of the soonest pending task, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.tasks.iter().map(|task| task.due_at).min()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_and_drain() {
        let mut queue = TimerQueue::new();
        queue.schedule(0, 500, "typing");
        queue.schedule(0, 100, "flip");

        assert!(queue.drain_due(50).is_empty());
        assert_eq!(queue.drain_due(100), vec!["flip"]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.drain_due(500), vec!["typing"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_fifo_within_same_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule(0, 10, "first");
        queue.schedule(0, 10, "second");

        assert_eq!(queue.drain_due(10), vec!["first", "second"]);
    }

    #[test]
    fn test_cancel() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(0, 10, "doomed");
        queue.schedule(0, 10, "kept");

        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert_eq!(queue.drain_due(10), vec!["kept"]);
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut queue = TimerQueue::new();
        queue.schedule(0, 10, 1);
        queue.schedule(0, 20, 2);

        queue.clear();
        assert!(queue.drain_due(100).is_empty());
        assert_eq!(queue.next_deadline(), None);
    }
}
