use crate::clock::Clock;
use crate::input::{self, Command, CommandResult, Controller};
use crate::screen::{self, Frame, TerminalGuard};
use crate::stopwatch::Stopwatch;
use anyhow::{bail, Context};
use std::io::{self, Write};
use tokio::runtime::{Handle, Runtime};
#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

pub const DEFAULT_TICK_RATE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
  Quit,
  /// SIGINT, SIGTERM, or Ctrl+C typed in raw mode.
  Interrupted,
}

impl Exit {
  pub fn code(self) -> i32 {
    match self {
      Exit::Quit => 0,
      Exit::Interrupted => 1,
    }
  }
}

/// Owns the stopwatch for the whole run.
///
/// Key presses and signals reach it only as commands sent through a
/// `Controller`, so the stopwatch is never shared between threads.
#[derive(Debug)]
pub struct Runner {
  runtime: Runtime,
  command_sender: UnboundedSender<CommandResult>,
  command_receiver: UnboundedReceiver<CommandResult>,
  tick_rate: Duration,
}

impl Runner {
  pub fn new() -> anyhow::Result<Self> {
    Runner::new_runner(None)
  }

  pub fn custom(tick_rate: Duration) -> anyhow::Result<Self> {
    Runner::new_runner(Some(tick_rate))
  }

  fn new_runner(tick_rate: Option<Duration>) -> anyhow::Result<Self> {
    let tick_rate = tick_rate.unwrap_or(DEFAULT_TICK_RATE);

    if tick_rate.is_zero() {
      bail!("The tick rate must be greater than zero.");
    }

    let runtime = Runtime::new().context("Failed to build the async runtime.")?;
    let (command_sender, command_receiver) = mpsc::unbounded_channel();

    Ok(Runner {
      runtime,
      command_sender,
      command_receiver,
      tick_rate,
    })
  }

  pub fn tick_rate(&self) -> Duration {
    self.tick_rate
  }

  pub fn spawn_controller(&self) -> Controller {
    Controller::new(self.command_sender.clone())
  }

  pub fn handle(&self) -> Handle {
    self.runtime.handle().clone()
  }

  /// Runs the stopwatch on the real terminal until quit, interrupt, or a
  /// keyboard failure.
  ///
  /// The cursor is visible again by the time this returns, on every path.
  pub fn run(self) -> anyhow::Result<Exit> {
    let exit = {
      let _terminal = TerminalGuard::enter()?;

      input::spawn_listener(self.spawn_controller()).context("Failed to start the key listener.")?;
      watch_signals(&self.handle(), self.spawn_controller())
        .context("Failed to listen for interrupt signals.")?;

      self.run_with(Stopwatch::system(), io::stdout())
    };

    // errors are left for the caller to report
    if let Ok(exit) = &exit {
      log::debug!("stopwatch finished: {exit:?}");
    }

    exit
  }

  /// Drives the render loop with a caller-supplied stopwatch and output,
  /// without touching terminal modes or spawning listeners.
  pub fn run_with<C, W>(self, stopwatch: Stopwatch<C>, out: W) -> anyhow::Result<Exit>
  where
    C: Clock,
    W: Write,
  {
    let Runner {
      runtime,
      command_sender,
      command_receiver,
      tick_rate,
    } = self;

    // only controllers keep the channel open now
    drop(command_sender);

    runtime.block_on(Self::render_loop(stopwatch, command_receiver, out, tick_rate))
  }

  async fn render_loop<C, W>(
    mut stopwatch: Stopwatch<C>,
    mut command_receiver: UnboundedReceiver<CommandResult>,
    mut out: W,
    tick_rate: Duration,
  ) -> anyhow::Result<Exit>
  where
    C: Clock,
    W: Write,
  {
    let mut ticker = interval(tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
      tokio::select! {
        biased;

        _ = ticker.tick() => Self::redraw(&mut stopwatch, &mut out)?,

        command = command_receiver.recv() => match command {
          Some(Ok(Command::TogglePause)) => {
            let state = stopwatch.toggle_pause();

            log::info!("stopwatch {state} at {:?}", stopwatch.last_elapsed());

            Self::redraw(&mut stopwatch, &mut out)?;
          }
          Some(Ok(Command::Quit)) => return Ok(Exit::Quit),
          Some(Ok(Command::Interrupt)) => return Ok(Exit::Interrupted),
          Some(Err(error)) => {
            return Err(anyhow::Error::new(error).context("The keyboard input stream failed."));
          }
          None => bail!("Every input source has stopped."),
        },
      }
    }
  }

  fn redraw<C: Clock, W: Write>(stopwatch: &mut Stopwatch<C>, out: &mut W) -> anyhow::Result<()> {
    let frame = Frame::new(stopwatch.elapsed(), stopwatch.state());

    screen::draw(out, &frame).context("Failed to draw the clock.")
  }
}

/// Turns SIGINT and SIGTERM into `Command::Interrupt`.
///
/// The handlers are installed before this returns, so a signal sent right
/// after it no longer takes the default action.
pub fn watch_signals(handle: &Handle, controller: Controller) -> io::Result<JoinHandle<()>> {
  let _entered = handle.enter();
  let mut shutdown = ShutdownSignal::register()?;

  Ok(handle.spawn(async move {
    shutdown.recv().await;

    log::info!("interrupt signal received");

    controller.interrupt();
  }))
}

#[cfg(unix)]
struct ShutdownSignal {
  interrupt: Signal,
  terminate: Signal,
}

#[cfg(unix)]
impl ShutdownSignal {
  fn register() -> io::Result<Self> {
    Ok(ShutdownSignal {
      interrupt: signal(SignalKind::interrupt())?,
      terminate: signal(SignalKind::terminate())?,
    })
  }

  async fn recv(&mut self) {
    tokio::select! {
      _ = self.interrupt.recv() => {}
      _ = self.terminate.recv() => {}
    }
  }
}

#[cfg(not(unix))]
struct ShutdownSignal;

#[cfg(not(unix))]
impl ShutdownSignal {
  fn register() -> io::Result<Self> {
    Ok(ShutdownSignal)
  }

  async fn recv(&mut self) {
    if let Err(error) = tokio::signal::ctrl_c().await {
      log::warn!("not listening for Ctrl+C: {error}");

      std::future::pending::<()>().await;
    }
  }
}
