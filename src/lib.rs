//! A terminal stopwatch.
//!
//! A [`Runner`] owns a [`Stopwatch`] and redraws it as large ASCII-art digits
//! once per tick. Space pauses and resumes, `q` quits, and an interrupt signal
//! stops it with a non-zero exit code.
//!
//! ```no_run
//! use term_stopwatch::Runner;
//!
//! let exit = Runner::new()?.run()?;
//!
//! std::process::exit(exit.code());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod banner;
pub mod clock;
pub mod format;
pub mod input;
pub mod logging;
pub mod runner;
pub mod screen;
pub mod stopwatch;

pub use clock::{Clock, ManualClock, SystemClock};
pub use format::format_duration;
pub use input::{Command, Controller};
pub use runner::{watch_signals, Exit, Runner, DEFAULT_TICK_RATE};
pub use stopwatch::{RunState, Stopwatch};
