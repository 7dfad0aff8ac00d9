use term_stopwatch::logging::{init_logging, LoggingConfig};
use term_stopwatch::Runner;

fn main() -> anyhow::Result<()> {
  init_logging(LoggingConfig::default());

  let exit = Runner::new()?.run()?;

  // the terminal has been restored by now
  std::process::exit(exit.code());
}
