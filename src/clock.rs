use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub trait Clock: Send + Debug {
  fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
  pub fn new() -> Self {
    Self
  }
}

impl Clock for SystemClock {
  fn now(&self) -> Instant {
    Instant::now()
  }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one copy and hand another to
/// a `Stopwatch`.
#[derive(Debug, Clone)]
pub struct ManualClock {
  current_time: Arc<Mutex<Instant>>,
}

impl ManualClock {
  pub fn new(start: Instant) -> Self {
    Self {
      current_time: Arc::new(Mutex::new(start)),
    }
  }

  pub fn advance(&self, duration: Duration) {
    let mut time = self.lock();

    *time += duration;
  }

  pub fn set(&self, instant: Instant) {
    *self.lock() = instant;
  }

  // a poisoned lock still holds a valid instant
  fn lock(&self) -> std::sync::MutexGuard<'_, Instant> {
    self
      .current_time
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
  }
}

impl Default for ManualClock {
  fn default() -> Self {
    Self::new(Instant::now())
  }
}

impl Clock for ManualClock {
  fn now(&self) -> Instant {
    *self.lock()
  }
}
