// Text formatting helpers for reports
// Author: Gabriel Demetrios Lafis

use std::time::Duration;

const SECONDS_PER_DAY: i64 = 86_400;

/// Render seconds as `H:MM:SS`, prefixed with the day count when the
/// duration spans a day or more (`1 day, 2:03:04`).
pub fn format_duration(seconds: i64) -> String {
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    let rest = seconds.rem_euclid(SECONDS_PER_DAY);
    let clock = format!("{}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);

    match days {
        0 => clock,
        1 | -1 => format!("{} day, {}", days, clock),
        _ => format!("{} days, {}", days, clock),
    }
}

/// Elapsed wall-clock time in seconds
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.6}", elapsed.as_secs_f64())
}

/// Horizontal rule of `width` copies of `ch`
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}
