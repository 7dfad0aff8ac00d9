use crate::banner;
use crate::format::format_duration;
use crate::stopwatch::RunState;
use anyhow::Context;
use crossterm::{
  cursor::{Hide, MoveTo, Show},
  execute, queue,
  style::{Color, Print, ResetColor, SetForegroundColor},
  terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
  pub text: String,
  pub state: RunState,
}

impl Frame {
  pub fn new(elapsed: Duration, state: RunState) -> Self {
    Frame {
      text: format_duration(elapsed),
      state,
    }
  }

  pub fn color(&self) -> Color {
    match self.state {
      RunState::Running => Color::Yellow,
      RunState::Paused => Color::Red,
    }
  }

  pub fn status_line(&self) -> &'static str {
    match self.state {
      RunState::Running => "RUNNING - Press SPACE to pause",
      RunState::Paused => "PAUSED - Press SPACE to resume",
    }
  }
}

/// Clears the screen and draws `frame` from the top-left corner.
pub fn draw<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
  queue!(
    out,
    Clear(ClearType::All),
    MoveTo(0, 0),
    SetForegroundColor(frame.color())
  )?;

  for line in banner::render(&frame.text) {
    queue!(out, Print(line), Print("\r\n"))?;
  }

  queue!(out, ResetColor, Print("\r\n"), Print(frame.status_line()), Print("\r\n"))?;

  out.flush()
}

/// Raw mode and a hidden cursor for as long as it lives.
///
/// Dropping it shows the cursor again and hands the terminal back, whichever
/// way the program is leaving.
#[derive(Debug)]
pub struct TerminalGuard {
  _private: (),
}

impl TerminalGuard {
  pub fn enter() -> anyhow::Result<Self> {
    terminal::enable_raw_mode().context("Failed to switch the terminal to raw mode.")?;

    // From here on Drop undoes whatever did get applied.
    let guard = TerminalGuard { _private: () };

    execute!(io::stdout(), Hide).context("Failed to hide the cursor.")?;

    log::debug!("terminal in raw mode, cursor hidden");

    Ok(guard)
  }
}

impl Drop for TerminalGuard {
  fn drop(&mut self) {
    let _ = execute!(io::stdout(), ResetColor, Show);
    let _ = terminal::disable_raw_mode();

    log::debug!("terminal restored");
  }
}
