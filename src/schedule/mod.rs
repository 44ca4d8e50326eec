//! Delayed task scheduling on a virtual clock.
//!
//! The game is single-threaded and cooperative. The only suspension points
//! are timer callbacks: the one-second flip-back, the one-second win check
//! and the repeating one-second clock tick. They are modelled as data
//! (`TaskKind`) on a virtual clock, not as closures on an event loop. The
//! owner advances the clock and executes whatever matures, in order.
//!
//! ## Ordering
//!
//! Tasks mature in `(due, scheduling order)` order. A repeating task is
//! re-queued behind everything already scheduled for its next due time.
//!
//! ## Cancellation
//!
//! Every scheduled task returns a `TaskId` that cancels it. A repeating task
//! keeps its id across repetitions.
//!
//! ```
//! use std::time::Duration;
//! use rust_pairs::schedule::{Scheduler, TaskKind};
//!
//! let mut scheduler = Scheduler::new();
//! let tick = scheduler.schedule_repeating(Duration::from_secs(1), TaskKind::Tick);
//! scheduler.schedule_once(Duration::from_secs(1), TaskKind::FlipBack);
//!
//! let until = Duration::from_secs(2);
//! let mut fired = Vec::new();
//! while let Some(task) = scheduler.pop_due(until) {
//!     fired.push(task.kind);
//! }
//! scheduler.advance_to(until);
//!
//! assert_eq!(fired, vec![TaskKind::Tick, TaskKind::FlipBack, TaskKind::Tick]);
//! assert!(scheduler.cancel(tick));
//! assert!(scheduler.is_idle());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Cancellation token for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u32);

impl TaskId {
    /// Create a new task ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// What a task does when it matures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    /// Advance the game clock by one second.
    Tick,
    /// Turn unmatched revealed cards face down and end the turn cycle.
    FlipBack,
    /// Lock the board, show the win banner and stop the clock.
    Win,
}

/// A task waiting on the clock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Cancellation token.
    pub id: TaskId,

    /// What to run.
    pub kind: TaskKind,

    /// Virtual time at which the task matures.
    pub due: Duration,

    /// Repeat interval. `None` for one-shot tasks.
    pub interval: Option<Duration>,

    /// Tie-breaker for tasks due at the same instant.
    seq: u64,
}

/// Single-threaded virtual-time scheduler.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scheduler {
    /// Current virtual time.
    now: Duration,

    /// Pending tasks (unordered).
    tasks: Vec<ScheduledTask>,

    /// Next task ID.
    next_id: u32,

    /// Next scheduling sequence number.
    next_seq: u64,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Check if a task is still pending.
    #[must_use]
    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Count pending tasks of a kind.
    #[must_use]
    pub fn count_kind(&self, kind: TaskKind) -> usize {
        self.tasks.iter().filter(|t| t.kind == kind).count()
    }

    /// Schedule a task to run once after `delay`.
    pub fn schedule_once(&mut self, delay: Duration, kind: TaskKind) -> TaskId {
        self.push(kind, delay, None)
    }

    /// Schedule a task to run every `interval`, first after one interval.
    pub fn schedule_repeating(&mut self, interval: Duration, kind: TaskKind) -> TaskId {
        assert!(!interval.is_zero(), "Repeat interval must be non-zero");
        self.push(kind, interval, Some(interval))
    }

    /// Cancel a pending task.
    ///
    /// Returns true if the task was pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let cancelled = self.tasks.len() != before;
        if cancelled {
            trace!(task = %id, "cancelled task");
        }
        cancelled
    }

    /// Cancel every pending task. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks.iter().map(|t| t.due).min()
    }

    /// Pop the earliest task due at or before `until`.
    ///
    /// Moves the clock to the task's due time. Repeating tasks are re-queued
    /// for their next occurrence before being returned, unless that occurrence
    /// would lie past `Duration::MAX`.
    pub fn pop_due(&mut self, until: Duration) -> Option<ScheduledTask> {
        let (pos, _) = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.seq))?;

        let task = self.tasks.swap_remove(pos);
        self.now = self.now.max(task.due);

        if let Some(due) = task.interval.and_then(|interval| task.due.checked_add(interval)) {
            let seq = self.bump_seq();
            self.tasks.push(ScheduledTask {
                due,
                seq,
                ..task.clone()
            });
        }

        trace!(task = %task.id, kind = ?task.kind, at = ?task.due, "task matured");
        Some(task)
    }

    /// Move the clock forward to `until` (never backwards).
    ///
    /// Call after draining `pop_due(until)`.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    fn push(&mut self, kind: TaskKind, delay: Duration, interval: Option<Duration>) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();

        self.tasks.push(ScheduledTask {
            id,
            kind,
            due: self.now.saturating_add(delay),
            interval,
            seq,
        });
        trace!(task = %id, kind = ?kind, ?delay, "scheduled task");
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
