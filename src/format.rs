use std::time::Duration;

const HALF_SECOND_NANOS: u32 = 500_000_000;

pub fn round_to_seconds(duration: Duration) -> u64 {
  let seconds = duration.as_secs();

  if duration.subsec_nanos() >= HALF_SECOND_NANOS {
    seconds.saturating_add(1)
  } else {
    seconds
  }
}

/// Renders a duration the way the clock face shows it.
///
/// `H:MM:SS` once there are hours, `M:SS` once there are minutes, otherwise
/// bare seconds with no padding.
pub fn format_duration(duration: Duration) -> String {
  let total = round_to_seconds(duration);
  let hours = total / 3600;
  let minutes = (total / 60) % 60;
  let seconds = total % 60;

  if hours > 0 {
    format!("{hours}:{minutes:02}:{seconds:02}")
  } else if minutes > 0 {
    format!("{minutes}:{seconds:02}")
  } else {
    format!("{seconds}")
  }
}
