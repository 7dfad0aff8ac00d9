use env_logger::{Builder, Logger, Target, WriteStyle};
use log::LevelFilter;
use std::io::Write;
use std::sync::Once;

/// Where log lines go and how much of them.
///
/// The clock owns stdout and keeps the terminal in raw mode, so lines go to
/// stderr and end in `\r\n` to start at column zero.
#[derive(Debug)]
pub struct LoggingConfig {
  /// `env_logger` filter syntax, e.g. "term_stopwatch=debug". Falls back to
  /// `RUST_LOG`, then to `default_level`.
  pub env_filter: Option<String>,
  pub default_level: LevelFilter,
  pub write_style: WriteStyle,
  pub target: Target,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      env_filter: None,
      default_level: LevelFilter::Warn,
      write_style: WriteStyle::Auto,
      target: Target::Stderr,
    }
  }
}

pub fn build_logger(config: LoggingConfig) -> Logger {
  let mut builder = Builder::new();

  match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
    Some(filter) => builder.parse_filters(&filter),
    None => builder.filter_level(config.default_level),
  };

  builder
    .target(config.target)
    .write_style(config.write_style)
    .format(|buf, record| {
      write!(
        buf,
        "[{} {}] {}\r\n",
        record.level(),
        record.target(),
        record.args()
      )
    });

  builder.build()
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls do nothing.
pub fn init_logging(config: LoggingConfig) {
  INIT.call_once(|| {
    let logger = build_logger(config);
    let max_level = logger.filter();

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
      log::set_max_level(max_level);

      log::debug!("logging initialized");
    }
  });
}
