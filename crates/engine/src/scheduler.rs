//! Timer scheduling for the engine.
//!
//! The engine never sleeps or spawns threads. It asks a [`Scheduler`] for
//! timers and later pulls the ones that are due, in deadline order. This keeps
//! the three mutating entry points (movement, food, rotation end) strictly
//! serialized with input handling on one thread.

/// Which engine callback a timer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Movement tick (self-rescheduling one-shot at the current speed).
    Move,
    /// Food spawn attempt (fixed-period repeat).
    Food,
    /// End of the head rotation animation (one-shot).
    Rotation,
}

/// Owned handle to a scheduled timer.
///
/// Deliberately not `Clone`/`Copy`: [`Scheduler::cancel`] consumes it, so a
/// handle can be released at most once.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// One-shot and repeating timer primitive consumed by the engine.
pub trait Scheduler {
    /// Fire `kind` once, `delay_ms` after the scheduler's current time.
    fn schedule_once(&mut self, kind: TimerKind, delay_ms: u32) -> TimerHandle;

    /// Fire `kind` every `period_ms`, starting one period from now.
    fn schedule_every(&mut self, kind: TimerKind, period_ms: u32) -> TimerHandle;

    /// Release a timer. Returns false if it had already fired (one-shot) or
    /// was unknown.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Pop the earliest timer due at or before `now_ms`.
    ///
    /// The scheduler clock moves to that timer's deadline, so anything the
    /// caller schedules in response is measured from when the timer was due,
    /// not from `now_ms`. When nothing is due the clock moves to `now_ms`.
    fn next_due(&mut self, now_ms: u64) -> Option<TimerKind>;

    /// Deadline of the earliest pending timer.
    fn next_deadline(&self) -> Option<u64>;

    /// Current scheduler time in milliseconds.
    fn now_ms(&self) -> u64;

    /// Number of live timers.
    fn active_count(&self) -> usize;
}

#[derive(Debug, Clone)]
struct Entry {
    id: u64,
    kind: TimerKind,
    due_at: u64,
    period_ms: Option<u32>,
}

/// Deterministic virtual-time scheduler.
///
/// Time only moves through [`Scheduler::next_due`], which makes the engine
/// fully reproducible in tests; the run loop feeds it wall-clock milliseconds.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: TimerKind, delay_ms: u32, period_ms: Option<u32>) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            kind,
            due_at: self.now_ms + delay_ms as u64,
            period_ms,
        });
        TimerHandle(id)
    }

    /// Index of the earliest entry; ties go to the one scheduled first.
    fn earliest(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .min_by_key(|(_, e)| (e.due_at, e.id))
            .map(|(i, _)| i)
    }
}

impl Scheduler for TimerQueue {
    fn schedule_once(&mut self, kind: TimerKind, delay_ms: u32) -> TimerHandle {
        self.push(kind, delay_ms, None)
    }

    fn schedule_every(&mut self, kind: TimerKind, period_ms: u32) -> TimerHandle {
        // A zero period would fire forever within one `next_due` sweep.
        let period_ms = period_ms.max(1);
        self.push(kind, period_ms, Some(period_ms))
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != handle.0);
        self.entries.len() != before
    }

    fn next_due(&mut self, now_ms: u64) -> Option<TimerKind> {
        let Some(i) = self.earliest().filter(|&i| self.entries[i].due_at <= now_ms) else {
            self.now_ms = self.now_ms.max(now_ms);
            return None;
        };

        let entry = &mut self.entries[i];
        let kind = entry.kind;
        self.now_ms = self.now_ms.max(entry.due_at);
        match entry.period_ms {
            Some(period) => entry.due_at += period as u64,
            None => {
                self.entries.swap_remove(i);
            }
        }
        Some(kind)
    }

    fn next_deadline(&self) -> Option<u64> {
        self.earliest().map(|i| self.entries[i].due_at)
    }

    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn active_count(&self) -> usize {
        self.entries.len()
    }
}
