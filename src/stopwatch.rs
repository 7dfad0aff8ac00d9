use crate::clock::{Clock, SystemClock};
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
  Running,
  Paused,
}

impl RunState {
  pub fn label(self) -> &'static str {
    match self {
      RunState::Running => "RUNNING",
      RunState::Paused => "PAUSED",
    }
  }
}

impl fmt::Display for RunState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Elapsed-time bookkeeping with pause support.
///
/// Paused intervals are excluded by pushing `start` forward on resume, so
/// `now - start` is always the running time.
#[derive(Debug)]
pub struct Stopwatch<C = SystemClock> {
  clock: C,
  start: Instant,
  paused: bool,
  pause_instant: Option<Instant>,
  elapsed: Duration,
}

impl Stopwatch<SystemClock> {
  pub fn system() -> Self {
    Self::new(SystemClock::new())
  }
}

impl<C: Clock> Stopwatch<C> {
  pub fn new(clock: C) -> Self {
    let start = clock.now();

    Stopwatch {
      clock,
      start,
      paused: false,
      pause_instant: None,
      elapsed: Duration::ZERO,
    }
  }

  pub fn state(&self) -> RunState {
    if self.paused {
      RunState::Paused
    } else {
      RunState::Running
    }
  }

  pub fn is_paused(&self) -> bool {
    self.paused
  }

  /// Flips between running and paused and returns the new state.
  ///
  /// Entering pause freezes the elapsed value at this instant.
  pub fn toggle_pause(&mut self) -> RunState {
    let now = self.clock.now();

    if self.paused {
      if let Some(pause_instant) = self.pause_instant.take() {
        self.start += now.saturating_duration_since(pause_instant);
      }

      self.paused = false;
    } else {
      self.compute_elapsed(now);

      self.pause_instant = Some(now);
      self.paused = true;
    }

    self.state()
  }

  pub fn compute_elapsed(&mut self, now: Instant) -> Duration {
    if !self.paused {
      self.elapsed = now.saturating_duration_since(self.start);
    }

    self.elapsed
  }

  pub fn elapsed(&mut self) -> Duration {
    let now = self.clock.now();

    self.compute_elapsed(now)
  }

  pub fn last_elapsed(&self) -> Duration {
    self.elapsed
  }
}
