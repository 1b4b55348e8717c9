use std::time::{SystemTime, UNIX_EPOCH};

/// Source of wall-clock time for timestamps.
pub type Clock = fn() -> SystemTime;

/// Broken-down calendar time, second precision.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Stamp {
    /// Year
    pub year: i32,
    /// Month, 1..=12
    pub month: u8,
    /// Day of month, 1..=31
    pub day: u8,
    /// Hour, 0..=23
    pub hour: u8,
    /// Minute, 0..=59
    pub minute: u8,
    /// Second, 0..=59
    pub second: u8,
}

/// Correct Gregorian Y-M-D from days since 1970-01-01 (no deps).
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn civil_from_days(days_since_unix_epoch: i64) -> (i32, u8, u8) {
    // Howard Hinnant’s algorithm
    let z = days_since_unix_epoch + 719_468; // days since 0000-03-01
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0,399]
    let yd = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * yd + 2) / 153; // [0, 11]
    let d = yd - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = mp + 3 - 12 * (mp / 10); // [1, 12]
    let y = 100 * era + yoe + (m <= 2) as i64;
    (y as i32, m as u8, d as u8)
}

impl Stamp {
    /// UTC breakdown of `t`. Times before the epoch are handled.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn utc(t: SystemTime) -> Self {
        let secs = match t.duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(e) => -(e.duration().as_secs_f64().ceil() as i64),
        };
        Self::from_unix(secs)
    }

    /// Breakdown of a Unix timestamp already shifted to the wanted zone.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_unix(secs: i64) -> Self {
        let days = secs.div_euclid(86_400);
        let sod = secs.rem_euclid(86_400);
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: (sod / 3_600) as u8,
            minute: (sod % 3_600 / 60) as u8,
            second: (sod % 60) as u8,
        }
    }

    /// Local-time breakdown of `t`, falling back to UTC when the local
    /// offset cannot be determined.
    #[cfg(feature = "localtime")]
    #[must_use]
    pub fn local(t: SystemTime) -> Self {
        let offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
        let now = time::OffsetDateTime::from(t).to_offset(offset);
        Self {
            year: now.year(),
            month: u8::from(now.month()),
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }

    /// Breakdown used for log lines: local time with the `localtime` feature,
    /// UTC otherwise.
    #[must_use]
    pub fn of(t: SystemTime) -> Self {
        #[cfg(feature = "localtime")]
        {
            Self::local(t)
        }
        #[cfg(not(feature = "localtime"))]
        {
            Self::utc(t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn epoch() {
        assert_eq!(
            Stamp::utc(UNIX_EPOCH),
            Stamp { year: 1970, month: 1, day: 1, hour: 0, minute: 0, second: 0 }
        );
    }

    #[test]
    fn known_dates() {
        // 2024-03-07 09:05:03 UTC
        assert_eq!(
            Stamp::utc(at(1_709_802_303)),
            Stamp { year: 2024, month: 3, day: 7, hour: 9, minute: 5, second: 3 }
        );
        // leap day
        assert_eq!(
            Stamp::utc(at(951_825_600)),
            Stamp { year: 2000, month: 2, day: 29, hour: 12, minute: 0, second: 0 }
        );
        // last second of a year
        assert_eq!(
            Stamp::utc(at(1_704_067_199)),
            Stamp { year: 2023, month: 12, day: 31, hour: 23, minute: 59, second: 59 }
        );
    }

    #[test]
    fn before_epoch() {
        let t = UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(
            Stamp::utc(t),
            Stamp { year: 1969, month: 12, day: 31, hour: 23, minute: 59, second: 59 }
        );
    }
}
