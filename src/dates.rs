use chrono::{DateTime, Duration, Utc};
use clap::ValueEnum;
use std::collections::BTreeSet;

/// Date format templates applied to every lookback offset, from the naming
/// conventions seen in real rotated-log and backup filenames.
pub const DEFAULT_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d", "%Y%m%d%H", "%Y%m%d%H%M"];

/// Hard upper bound on generated date strings. Day x format x hour x minute
/// nesting scales multiplicatively; generation stops once this many strings
/// exist, regardless of the requested window.
pub const MAX_DATE_PATTERNS: usize = 20_000;

/// Sub-day resolution for date patterns. Minutes advance in 15-minute steps.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    /// Date-only patterns; formats with hour/minute specifiers are skipped.
    Day,
    /// One pattern per hour of the day.
    Hour,
    /// One pattern per 15-minute step.
    Quarter,
}

const MINUTE_STEPS: [u32; 4] = [0, 15, 30, 45];

fn push(out: &mut BTreeSet<String>, s: String) -> bool {
    if out.len() >= MAX_DATE_PATTERNS {
        return false;
    }
    out.insert(s);
    true
}

/// Expand date/time strings over a lookback window.
///
/// Produces one string per `(offset, format)` pair for offsets
/// `0..lookback_days` back from `now` (day 0 inclusive, never a future
/// date), widened per `granularity` for formats carrying `%H`/`%M`.
///
/// `now` is injected so the output is a pure function of the arguments; the
/// system clock is never read here. Output size is capped at
/// [`MAX_DATE_PATTERNS`].
pub fn expand(
    now: DateTime<Utc>,
    lookback_days: u32,
    formats: &[&str],
    granularity: Granularity,
) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    for off in 0..lookback_days {
        let date = (now - Duration::days(off as i64)).date_naive();
        for fmt in formats {
            let sub_day = fmt.contains("%H") || fmt.contains("%M");
            if !sub_day {
                if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                    if !push(&mut out, dt.format(fmt).to_string()) {
                        return out;
                    }
                }
                continue;
            }
            let minutes: &[u32] = match granularity {
                Granularity::Day => continue,
                Granularity::Hour => &MINUTE_STEPS[..1],
                Granularity::Quarter => &MINUTE_STEPS[..],
            };
            for hour in 0..24 {
                for &minute in minutes {
                    if let Some(dt) = date.and_hms_opt(hour, minute, 0) {
                        if !push(&mut out, dt.format(fmt).to_string()) {
                            return out;
                        }
                    }
                }
            }
        }
    }
    out
}
