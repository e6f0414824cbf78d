//! Countdown tick sources.
//!
//! The controller owns a [`Clock`] and only ever has one subscription open: it calls
//! [`Clock::stop`] before every [`Clock::start`]. The clock itself does not call back
//! into the controller; whoever drives the event loop forwards each delivered tick to
//! [`crate::game::GameController::tick`].

use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;

/// Period of one countdown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A cancelable recurring one-second signal.
pub trait Clock {
    /// Open a new subscription. Only called when no subscription is active.
    fn start(&mut self);

    /// Cancel the active subscription, if any. Idempotent.
    fn stop(&mut self);

    fn is_active(&self) -> bool;
}

/// A clock that never fires on its own; ticks are delivered by calling
/// [`crate::game::GameController::tick`] directly.
///
/// Records how it was driven so callers can check subscription hygiene.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    active: u32,
    peak_active: u32,
    starts: u32,
    stops: u32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest number of simultaneously open subscriptions seen so far.
    pub fn peak_active(&self) -> u32 {
        self.peak_active
    }

    pub fn starts(&self) -> u32 {
        self.starts
    }

    pub fn stops(&self) -> u32 {
        self.stops
    }
}

impl Clock for ManualClock {
    fn start(&mut self) {
        self.starts += 1;
        self.active += 1;
        self.peak_active = self.peak_active.max(self.active);
    }

    fn stop(&mut self) {
        if self.active > 0 {
            self.stops += 1;
            self.active -= 1;
        }
    }

    fn is_active(&self) -> bool {
        self.active > 0
    }
}

/// Wall-clock ticks backed by [`crossbeam_channel::tick`].
///
/// Dropping the receiver cancels the subscription, so replacing it on `start` can
/// never leave a second source running.
#[derive(Debug)]
pub struct IntervalClock {
    period: Duration,
    ticks: Option<Receiver<Instant>>,
}

impl IntervalClock {
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            ticks: None,
        }
    }

    /// The active tick channel, or a channel that never fires when stopped.
    pub fn receiver(&self) -> Receiver<Instant> {
        match &self.ticks {
            Some(rx) => rx.clone(),
            None => crossbeam_channel::never(),
        }
    }
}

impl Default for IntervalClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for IntervalClock {
    fn start(&mut self) {
        self.ticks = Some(crossbeam_channel::tick(self.period));
    }

    fn stop(&mut self) {
        self.ticks = None;
    }

    fn is_active(&self) -> bool {
        self.ticks.is_some()
    }
}
