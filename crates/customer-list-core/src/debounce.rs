//! Debounced value holder (latest-wins, full delay)
//!
//! Each `push` (re)starts the delay and supersedes any pending value. When
//! the delay elapses with no further pushes, the latest value is committed and
//! reported exactly once. The first push also waits the full delay.
//!
//! The holder only tracks state; the caller owns the actual timer. A timer
//! callback hands back the `Ticket` it was armed with, and stale tickets are
//! ignored, so a superseded timer that still fires is harmless.

/// Identifies one armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline_ms: u64,
    ticket: Ticket,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    value: T,
    pending: Option<Pending<T>>,
    generation: u64,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    /// The initial value is held immediately, without waiting.
    pub fn new(initial: T, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            value: initial,
            pending: None,
            generation: 0,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Last committed value
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value, if any
    pub fn deadline_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline_ms)
    }

    /// Record a new input and restart the delay. Any earlier ticket becomes stale.
    pub fn push(&mut self, value: T, now_ms: u64) -> Ticket {
        self.generation += 1;
        let ticket = Ticket(self.generation);
        self.pending = Some(Pending {
            value,
            deadline_ms: now_ms.saturating_add(self.delay_ms),
            ticket,
        });
        ticket
    }

    /// Timer callback. Commits the pending value if `ticket` is still current.
    ///
    /// Returns the new value when it differs from the previous one.
    pub fn fire(&mut self, ticket: Ticket) -> Option<&T> {
        if !self.pending.as_ref().is_some_and(|p| p.ticket == ticket) {
            return None;
        }
        self.commit()
    }

    /// Tick-driven alternative to `fire`: commits once the deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<&T> {
        if !self.pending.as_ref().is_some_and(|p| now_ms >= p.deadline_ms) {
            return None;
        }
        self.commit()
    }

    /// Drop the pending value without committing it. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    fn commit(&mut self) -> Option<&T> {
        let pending = self.pending.take()?;
        if pending.value == self.value {
            return None;
        }
        self.value = pending.value;
        Some(&self.value)
    }
}
