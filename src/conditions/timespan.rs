//! Human readable "time ago" strings.

use chrono::NaiveDateTime;

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60.0 * SECOND_MS;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;

/// Round `value` to the nearest integer, except that an exact half rounds
/// down. `finer` is the same span in the next smaller unit and `per_unit` the
/// number of finer units in one unit, which tells whether we sit on a half.
fn round_half_down(value: f64, finer: f64, per_unit: f64) -> i64 {
    if finer % per_unit == per_unit / 2.0 {
        value.floor() as i64
    } else {
        value.round() as i64
    }
}

/// Describe the time elapsed from `start` to `end` the way a feed would.
///
/// | difference    | result                          |
/// |---------------|---------------------------------|
/// | up to 45 s    | `a few seconds ago`             |
/// | up to 90 s    | `a minute ago`                  |
/// | up to 45 min  | `2 minutes ago` .. `45 minutes ago` |
/// | up to 90 min  | `an hour ago`                   |
/// | up to 22 h    | `2 hours ago` .. `22 hours ago` |
/// | up to 36 h    | `a day ago`                     |
/// | up to 25 days | `2 days ago` .. `25 days ago`   |
/// | up to 45 days | `a month ago`                   |
/// | up to 345 days| `2 months ago` .. `11 months ago` |
/// | up to 545 days| `a year ago`                    |
/// | beyond        | `2 years ago` ..                |
pub fn timespan_to_human_string(start: NaiveDateTime, end: NaiveDateTime) -> String {
    let interval = (end - start).num_milliseconds() as f64;
    let seconds = interval / SECOND_MS;
    let minutes = interval / MINUTE_MS;
    let hours = interval / HOUR_MS;
    let days = interval / DAY_MS;

    if seconds <= 45.0 {
        "a few seconds ago".to_string()
    } else if seconds <= 90.0 {
        "a minute ago".to_string()
    } else if minutes <= 45.0 {
        format!("{} minutes ago", round_half_down(minutes, seconds, 60.0))
    } else if minutes <= 90.0 {
        "an hour ago".to_string()
    } else if hours <= 22.0 {
        format!("{} hours ago", round_half_down(hours, minutes, 60.0))
    } else if hours <= 36.0 {
        "a day ago".to_string()
    } else if days <= 25.0 {
        format!("{} days ago", round_half_down(days, hours, 24.0))
    } else if days <= 45.0 {
        "a month ago".to_string()
    } else if days <= 345.0 {
        format!("{} months ago", (days / 30.0).round() as i64)
    } else if days <= 545.0 {
        "a year ago".to_string()
    } else {
        format!("{} years ago", (days / 360.0).round() as i64)
    }
}
