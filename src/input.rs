use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  TogglePause,
  Quit,
  Interrupt,
}

impl Command {
  pub fn from_key(key: KeyEvent) -> Option<Self> {
    if key.kind == KeyEventKind::Release {
      return None;
    }

    match key.code {
      KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
        Some(Command::Interrupt)
      }
      KeyCode::Char(' ') => Some(Command::TogglePause),
      KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
      _ => None,
    }
  }
}

pub type CommandResult = io::Result<Command>;

/// Sending half handed to everything that is not the render loop.
///
/// Sends return `false` once the render loop has stopped listening.
#[derive(Debug, Clone)]
pub struct Controller {
  command_sender: UnboundedSender<CommandResult>,
}

impl Controller {
  pub(crate) fn new(command_sender: UnboundedSender<CommandResult>) -> Self {
    Controller { command_sender }
  }

  pub fn toggle_pause(&self) -> bool {
    self.send(Ok(Command::TogglePause))
  }

  pub fn quit(&self) -> bool {
    self.send(Ok(Command::Quit))
  }

  pub fn interrupt(&self) -> bool {
    self.send(Ok(Command::Interrupt))
  }

  pub fn fail(&self, error: io::Error) -> bool {
    self.send(Err(error))
  }

  pub fn send(&self, command: CommandResult) -> bool {
    self.command_sender.send(command).is_ok()
  }

  pub fn is_closed(&self) -> bool {
    self.command_sender.is_closed()
  }
}

/// Reads keys on a dedicated thread and forwards the ones that mean something.
///
/// A plain OS thread is used because `event::read` blocks indefinitely.
pub fn spawn_listener(controller: Controller) -> io::Result<JoinHandle<()>> {
  thread::Builder::new()
    .name("key-listener".into())
    .spawn(move || while forward_event(&controller, event::read()) {})
}

/// Handles one read from the terminal. Returns whether to keep reading.
pub fn forward_event(controller: &Controller, event: io::Result<Event>) -> bool {
  let event = match event {
    Ok(event) => event,
    Err(error) => {
      log::debug!("keyboard read failed, stopping the listener");

      controller.fail(error);

      return false;
    }
  };

  let Event::Key(key) = event else {
    return true;
  };

  match Command::from_key(key) {
    Some(command) => {
      log::debug!("key {:?} -> {command:?}", key.code);

      controller.send(Ok(command))
    }
    None => !controller.is_closed(),
  }
}
