//! Wall-clock source for greeting timestamps.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC clock that never runs backwards.
///
/// Readings are kept at millisecond resolution. If the system clock steps
/// back, the last reading is returned until real time catches up.
#[derive(Debug)]
pub struct DeployClock {
    last_millis: AtomicI64,
}

impl Default for DeployClock {
    fn default() -> Self {
        Self::new()
    }
}

impl DeployClock {
    pub fn new() -> Self {
        Self {
            last_millis: AtomicI64::new(i64::MIN),
        }
    }

    /// Current time, never earlier than any previous reading.
    pub fn now(&self) -> DateTime<Utc> {
        self.observe(Utc::now())
    }

    fn observe(&self, reading: DateTime<Utc>) -> DateTime<Utc> {
        let millis = reading.timestamp_millis();
        let previous = self.last_millis.fetch_max(millis, Ordering::AcqRel);
        if previous > millis {
            DateTime::from_timestamp_millis(previous).unwrap_or(reading)
        } else {
            DateTime::from_timestamp_millis(millis).unwrap_or(reading)
        }
    }
}

/// Format a timestamp like JavaScript's `toISOString`: `2024-05-01T12:00:00.000Z`.
pub fn iso8601(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso8601_format() {
        let time = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 5).unwrap();
        assert_eq!(iso8601(&time), "2024-05-01T12:30:05.000Z");
    }

    #[test]
    fn test_iso8601_keeps_milliseconds() {
        let time = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        assert_eq!(iso8601(&time), "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn test_now_is_non_decreasing() {
        let clock = DeployClock::new();
        let mut previous = clock.now();
        for _ in 0..1000 {
            let current = clock.now();
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_backwards_step_is_clamped() {
        let clock = DeployClock::new();
        let later = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2029, 12, 31, 23, 59, 0).unwrap();

        assert_eq!(clock.observe(later), later);
        assert_eq!(clock.observe(earlier), later);
    }

    #[test]
    fn test_truncates_to_milliseconds() {
        let clock = DeployClock::new();
        let reading = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let observed = clock.observe(reading);
        assert_eq!(observed.timestamp_subsec_nanos(), 123_000_000);
    }
}
