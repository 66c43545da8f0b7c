// Clock-time helpers for no-use windows.
//
// The evaluator never consults the wall clock: a usage snapshot carries no
// time-of-day data, so window goals are reported as achieved once a
// snapshot exists (see evaluator.rs). These helpers back goal validation
// and the "window active right now" display in the status view.

use chrono::NaiveTime;

use crate::types::TimeSlot;

/// Parse a clock time in `HH:MM` format.
pub fn parse_clock(time_str: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(time_str, "%H:%M")
        .map_err(|e| format!("invalid time '{}': {}", time_str, e))
}

impl TimeSlot {
    /// Whether the given clock time falls inside the window.
    ///
    /// A window whose end is earlier than its start wraps past midnight:
    /// 22:00-07:00 contains 23:30 and 06:00 but not 12:00.
    pub fn contains(&self, at: NaiveTime) -> bool {
        let (start, end) = match (parse_clock(&self.start), parse_clock(&self.end)) {
            (Ok(s), Ok(e)) => (s, e),
            _ => return false,
        };

        if start <= end {
            at >= start && at < end
        } else {
            at >= start || at < end
        }
    }
}
