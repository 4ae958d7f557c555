//! Countdown timer driven by the elapsed time its owner reports.
//!
//! The first tick fires on `start` with the full duration remaining. After
//! that one tick fires per interval while time remains, and `Finish` fires
//! once when the countdown reaches zero. A 10 s countdown with a 1 s interval
//! therefore delivers ten ticks (10000 ms down to 1000 ms) and then `Finish`.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    Tick { remaining_ms: u64 },
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStatus {
    Idle,
    Running,
    Finished,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    total_ms: u64,
    interval_ms: u64,
    elapsed_ms: u64,
    next_tick_at: u64,
    status: CountdownStatus,
}

impl Countdown {
    #[must_use]
    pub fn new(total_ms: u64, interval_ms: u64) -> Self {
        Self {
            total_ms,
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            next_tick_at: 0,
            status: CountdownStatus::Idle,
        }
    }

    /// Arms the countdown and returns the events due immediately.
    /// Starting twice is a no-op.
    pub fn start(&mut self) -> Vec<ClockEvent> {
        if self.status != CountdownStatus::Idle {
            return Vec::new();
        }
        debug!(
            "Countdown started: {} ms, interval {} ms",
            self.total_ms, self.interval_ms
        );
        self.status = CountdownStatus::Running;
        self.advance(0)
    }

    /// Moves the countdown forward and returns the events that became due, in order.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<ClockEvent> {
        if self.status != CountdownStatus::Running {
            return Vec::new();
        }

        self.elapsed_ms = self
            .elapsed_ms
            .saturating_add(elapsed_ms)
            .min(self.total_ms);

        let mut events = Vec::new();
        while self.next_tick_at <= self.elapsed_ms && self.next_tick_at < self.total_ms {
            events.push(ClockEvent::Tick {
                remaining_ms: self.total_ms - self.next_tick_at,
            });
            self.next_tick_at = self.next_tick_at.saturating_add(self.interval_ms);
        }

        if self.elapsed_ms >= self.total_ms {
            debug!("Countdown finished");
            self.status = CountdownStatus::Finished;
            events.push(ClockEvent::Finish);
        }

        events
    }

    /// Drops every pending event. Nothing is delivered after this returns.
    pub fn cancel(&mut self) {
        if matches!(self.status, CountdownStatus::Idle | CountdownStatus::Running) {
            debug!("Countdown cancelled at {} ms remaining", self.remaining_ms());
            self.status = CountdownStatus::Cancelled;
        }
    }

    #[must_use]
    pub const fn status(&self) -> CountdownStatus {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == CountdownStatus::Running
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status == CountdownStatus::Cancelled
    }

    #[must_use]
    pub const fn remaining_ms(&self) -> u64 {
        self.total_ms.saturating_sub(self.elapsed_ms)
    }

    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}
