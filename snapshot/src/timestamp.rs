//! Local-time ISO-8601 timestamps for the generated module's provenance
//! comment.
//!
//! `DateTime::to_rfc3339` would do for most offsets, but the provenance line
//! has a fixed shape (always milliseconds, always `±HH:MM`, never `Z`) so the
//! fields are padded by hand.

use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the machine's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Format `time` as `YYYY-MM-DDTHH:MM:SS.mmm±HH:MM` in its own offset.
pub fn to_local_iso_string(time: &DateTime<FixedOffset>) -> String {
    // Whole minutes east of UTC; seconds in historical offsets are dropped.
    let offset_minutes = time.offset().local_minus_utc() / 60;
    let sign = if offset_minutes >= 0 { '+' } else { '-' };
    let offset_abs = offset_minutes.unsigned_abs();

    // chrono folds a leap second into nanoseconds >= 1e9.
    let millis = (time.nanosecond() / 1_000_000).min(999);

    format!(
        "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}{}{:02}:{:02}",
        time.year(),
        time.month(),
        time.day(),
        time.hour(),
        time.minute(),
        time.second(),
        millis,
        sign,
        offset_abs / 60,
        offset_abs % 60,
    )
}
