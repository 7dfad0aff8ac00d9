use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::thread;
use std::time::Duration;
use term_stopwatch::{banner, Command, Exit, ManualClock, Runner, Stopwatch};

// long enough that only the immediate first tick fires during a test
const SLOW_TICK: Duration = Duration::from_secs(60);
const FAST_TICK: Duration = Duration::from_millis(20);

const RUNNING_STATUS: &str = "RUNNING - Press SPACE to pause";
const PAUSED_STATUS: &str = "PAUSED - Press SPACE to resume";

fn shows(frame: &str, text: &str) -> bool {
  banner::render(text).iter().all(|line| frame.contains(line.as_str()))
}

// every draw starts by clearing the screen
fn frames(output: &str) -> Vec<&str> {
  output.split("\u{1b}[2J").skip(1).collect()
}

fn runner() -> Runner {
  Runner::custom(SLOW_TICK)
    .unwrap_or_else(|error| panic!("An error has occurred while creating the runner: '{error}'"))
}

#[cfg(test)]
mod commands {
  use super::*;

  #[test]
  fn space_toggles() {
    let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);

    assert_eq!(Command::from_key(key), Some(Command::TogglePause));
  }

  #[test]
  fn q_quits_in_either_case() {
    let lower = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    let upper = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);

    assert_eq!(Command::from_key(lower), Some(Command::Quit));
    assert_eq!(Command::from_key(upper), Some(Command::Quit));
  }

  #[test]
  fn ctrl_c_interrupts() {
    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

    assert_eq!(Command::from_key(key), Some(Command::Interrupt));
  }

  #[test]
  fn other_keys_and_releases_are_ignored() {
    let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    let mut release = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;

    assert_eq!(Command::from_key(plain_c), None);
    assert_eq!(Command::from_key(enter), None);
    assert_eq!(Command::from_key(release), None);
  }
}

#[cfg(test)]
mod runner {
  use super::*;

  #[test]
  fn exit_codes() {
    assert_eq!(Exit::Quit.code(), 0);
    assert_eq!(Exit::Interrupted.code(), 1);
  }

  #[test]
  fn zero_tick_rate_is_rejected() {
    assert!(Runner::custom(Duration::ZERO).is_err());
  }

  #[test]
  fn default_tick_is_one_second() {
    let runner = Runner::new()
      .unwrap_or_else(|error| panic!("An error has occurred while creating the runner: '{error}'"));

    assert_eq!(runner.tick_rate(), Duration::from_secs(1));
  }

  #[test]
  fn quit_after_first_frame() {
    let runner = runner();
    let controller = runner.spawn_controller();
    let clock = ManualClock::default();
    let stopwatch = Stopwatch::new(clock.clone());
    let mut out = Vec::new();

    clock.advance(Duration::from_secs(65));
    assert!(controller.quit());

    let exit = runner
      .run_with(stopwatch, &mut out)
      .unwrap_or_else(|error| panic!("An error has occurred while running: '{error}'"));
    let output = String::from_utf8_lossy(&out);

    assert_eq!(exit, Exit::Quit);
    assert!(output.contains("RUNNING - Press SPACE to pause"));

    for line in banner::render("1:05") {
      assert!(output.contains(&line));
    }
  }

  #[test]
  fn interrupt_exits_with_failure_code() {
    let runner = runner();
    let controller = runner.spawn_controller();

    controller.interrupt();

    let exit = runner
      .run_with(Stopwatch::new(ManualClock::default()), io::sink())
      .unwrap_or_else(|error| panic!("An error has occurred while running: '{error}'"));

    assert_eq!(exit, Exit::Interrupted);
    assert_eq!(exit.code(), 1);
  }

  #[test]
  fn toggle_redraws_as_paused() {
    let runner = runner();
    let controller = runner.spawn_controller();
    let mut out = Vec::new();

    controller.toggle_pause();
    controller.quit();

    runner
      .run_with(Stopwatch::new(ManualClock::default()), &mut out)
      .unwrap_or_else(|error| panic!("An error has occurred while running: '{error}'"));

    let output = String::from_utf8_lossy(&out);
    let running = output
      .find("RUNNING - Press SPACE to pause")
      .unwrap_or_else(|| panic!("No running frame was drawn."));
    let paused = output
      .find("PAUSED - Press SPACE to resume")
      .unwrap_or_else(|| panic!("No paused frame was drawn."));

    assert!(running < paused);
  }

  #[test]
  fn keyboard_failure_is_an_error() {
    let runner = runner();
    let controller = runner.spawn_controller();

    controller.fail(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"));

    let error = runner
      .run_with(Stopwatch::new(ManualClock::default()), io::sink())
      .expect_err("a keyboard failure should stop the runner");

    assert!(format!("{error:#}").contains("stdin closed"));
  }

  #[test]
  fn losing_every_controller_is_an_error() {
    let runner = runner();

    assert!(runner
      .run_with(Stopwatch::new(ManualClock::default()), io::sink())
      .is_err());
  }

  #[test]
  fn controller_reports_a_finished_runner() {
    let runner = runner();
    let controller = runner.spawn_controller();

    controller.quit();
    runner
      .run_with(Stopwatch::new(ManualClock::default()), io::sink())
      .unwrap_or_else(|error| panic!("An error has occurred while running: '{error}'"));

    assert!(controller.is_closed());
    assert!(!controller.toggle_pause());
  }

  #[test]
  fn ticks_keep_redrawing_and_pause_holds_the_value() {
    let runner = Runner::custom(FAST_TICK)
      .unwrap_or_else(|error| panic!("An error has occurred while creating the runner: '{error}'"));
    let controller = runner.spawn_controller();
    let clock = ManualClock::default();
    let stopwatch = Stopwatch::new(clock.clone());
    let mut out = Vec::new();

    let handle = thread::spawn(move || {
      let settle = || thread::sleep(FAST_TICK * 5);

      clock.advance(Duration::from_secs(3));
      settle();
      controller.toggle_pause();

      clock.advance(Duration::from_secs(5));
      settle();
      controller.toggle_pause();

      clock.advance(Duration::from_secs(2));
      settle();
      controller.quit();
    });

    let exit = runner
      .run_with(stopwatch, &mut out)
      .unwrap_or_else(|error| panic!("An error has occurred while running: '{error}'"));

    handle
      .join()
      .unwrap_or_else(|_| panic!("The controlling thread panicked."));

    let output = String::from_utf8_lossy(&out);
    let frames = frames(&output);
    let paused: Vec<&&str> = frames
      .iter()
      .filter(|frame| frame.contains(PAUSED_STATUS))
      .collect();
    let last = frames
      .last()
      .unwrap_or_else(|| panic!("No frame was drawn."));

    assert_eq!(exit, Exit::Quit);
    assert!(frames.len() > 6, "only {} frames were drawn", frames.len());
    assert!(paused.len() > 1, "only {} paused frames were drawn", paused.len());

    for frame in paused {
      assert!(shows(frame, "3"));
      assert!(!shows(frame, "5"));
    }

    assert!(last.contains(RUNNING_STATUS));
    assert!(shows(last, "5"));
  }
}
