use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, Offset, SecondsFormat, TimeZone,
    Utc,
};
use chrono_tz::Tz;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::common::error::{CoreError, Result};

/// A point in time as it was extracted, keeping whatever timezone
/// information the source actually provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateTimeValue {
    /// Wall-clock time without any zone information.
    Naive(NaiveDateTime),
    /// Explicit non-zero UTC offset, no zone.
    Offset(DateTime<FixedOffset>),
    Utc(DateTime<Utc>),
    /// Fully qualified with an IANA timezone.
    Zoned(DateTime<Tz>),
}

impl DateTimeValue {
    pub fn naive(date: NaiveDate, hour: u32, min: u32, sec: u32) -> Option<Self> {
        date.and_hms_opt(hour, min, sec).map(DateTimeValue::Naive)
    }

    /// True only for values carrying an IANA timezone.
    pub fn has_timezone(&self) -> bool {
        matches!(self, DateTimeValue::Zoned(_))
    }

    pub fn is_utc(&self) -> bool {
        match self {
            DateTimeValue::Utc(_) => true,
            DateTimeValue::Zoned(dt) => matches!(dt.timezone(), Tz::UTC | Tz::Etc__UTC),
            _ => false,
        }
    }

    pub fn timezone(&self) -> Option<Tz> {
        match self {
            DateTimeValue::Zoned(dt) => Some(dt.timezone()),
            _ => None,
        }
    }

    /// Offset from UTC in seconds, `None` for naive values.
    pub fn offset_seconds(&self) -> Option<i32> {
        match self {
            DateTimeValue::Naive(_) => None,
            DateTimeValue::Offset(dt) => Some(dt.offset().local_minus_utc()),
            DateTimeValue::Utc(_) => Some(0),
            DateTimeValue::Zoned(dt) => Some(dt.offset().fix().local_minus_utc()),
        }
    }

    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            DateTimeValue::Naive(ndt) => *ndt,
            DateTimeValue::Offset(dt) => dt.naive_local(),
            DateTimeValue::Utc(dt) => dt.naive_utc(),
            DateTimeValue::Zoned(dt) => dt.naive_local(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.naive_local().date()
    }

    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        self.date().year()
    }

    /// Replaces the calendar date, keeping time of day and zone.
    pub fn with_date(&self, date: NaiveDate) -> Option<Self> {
        let local = date.and_time(self.naive_local().time());
        match self {
            DateTimeValue::Naive(_) => Some(DateTimeValue::Naive(local)),
            DateTimeValue::Offset(dt) => dt
                .offset()
                .from_local_datetime(&local)
                .single()
                .map(DateTimeValue::Offset),
            DateTimeValue::Utc(_) => Some(DateTimeValue::Utc(Utc.from_utc_datetime(&local))),
            DateTimeValue::Zoned(dt) => dt
                .timezone()
                .from_local_datetime(&local)
                .earliest()
                .map(DateTimeValue::Zoned),
        }
    }

    /// Instant used for ordering and comparison. Naive values are read as UTC.
    pub fn to_utc_instant(&self) -> DateTime<Utc> {
        match self {
            DateTimeValue::Naive(ndt) => Utc.from_utc_datetime(ndt),
            DateTimeValue::Offset(dt) => dt.with_timezone(&Utc),
            DateTimeValue::Utc(dt) => *dt,
            DateTimeValue::Zoned(dt) => dt.with_timezone(&Utc),
        }
    }

    pub fn same_instant(&self, other: &DateTimeValue) -> bool {
        self.to_utc_instant() == other.to_utc_instant()
    }

    pub fn seconds_to(&self, other: &DateTimeValue) -> i64 {
        (other.to_utc_instant() - self.to_utc_instant()).num_seconds()
    }

    /// Moves the value by whole days on the wall clock.
    pub fn add_days(&self, days: i64) -> Self {
        let delta = Duration::days(days);
        match self {
            DateTimeValue::Naive(ndt) => DateTimeValue::Naive(*ndt + delta),
            DateTimeValue::Offset(dt) => DateTimeValue::Offset(*dt + delta),
            DateTimeValue::Utc(dt) => DateTimeValue::Utc(*dt + delta),
            DateTimeValue::Zoned(dt) => dt
                .timezone()
                .from_local_datetime(&(dt.naive_local() + delta))
                .earliest()
                .map(DateTimeValue::Zoned)
                .unwrap_or(DateTimeValue::Zoned(*dt + delta)),
        }
    }

    /// Converts the instant into `tz`.
    pub fn in_timezone(&self, tz: Tz) -> Self {
        DateTimeValue::Zoned(self.to_utc_instant().with_timezone(&tz))
    }

    /// Reads the wall-clock time as local time in `tz`.
    pub fn assume_timezone(&self, tz: Tz) -> Option<Self> {
        tz.from_local_datetime(&self.naive_local())
            .earliest()
            .map(DateTimeValue::Zoned)
    }

    fn plain_string(&self) -> String {
        match self {
            DateTimeValue::Naive(ndt) => ndt.format("%Y-%m-%dT%H:%M:%S").to_string(),
            DateTimeValue::Offset(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, false),
            DateTimeValue::Utc(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
            DateTimeValue::Zoned(dt) => dt
                .with_timezone(&dt.offset().fix())
                .to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeValue::Zoned(dt) => write!(f, "{} [{}]", self.plain_string(), dt.timezone().name()),
            _ => f.write_str(&self.plain_string()),
        }
    }
}

impl From<DateTime<Utc>> for DateTimeValue {
    fn from(dt: DateTime<Utc>) -> Self {
        DateTimeValue::Utc(dt)
    }
}

impl From<DateTime<Tz>> for DateTimeValue {
    fn from(dt: DateTime<Tz>) -> Self {
        DateTimeValue::Zoned(dt)
    }
}

impl From<NaiveDateTime> for DateTimeValue {
    fn from(ndt: NaiveDateTime) -> Self {
        DateTimeValue::Naive(ndt)
    }
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

impl FromStr for DateTimeValue {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            if s.ends_with('Z') || s.ends_with('z') || dt.offset().local_minus_utc() == 0 {
                return Ok(DateTimeValue::Utc(dt.with_timezone(&Utc)));
            }
            return Ok(DateTimeValue::Offset(dt));
        }
        for format in NAIVE_FORMATS {
            if let Ok(ndt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(DateTimeValue::Naive(ndt));
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| DateTimeValue::naive(date, 0, 0, 0))
            .ok_or_else(|| CoreError::InvalidDateTime(s.to_string()))
    }
}

#[derive(Serialize, Deserialize)]
struct ZonedRepr {
    #[serde(rename = "@type")]
    kind: String,
    #[serde(rename = "@value")]
    value: String,
    timezone: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DateTimeRepr {
    Plain(String),
    Zoned(ZonedRepr),
}

impl ZonedRepr {
    fn into_value(self) -> Result<DateTimeValue> {
        let tz: Tz = self
            .timezone
            .parse()
            .map_err(|_| CoreError::UnknownTimezone(self.timezone.clone()))?;
        let parsed: DateTimeValue = self.value.parse()?;
        match parsed {
            DateTimeValue::Naive(_) => parsed
                .assume_timezone(tz)
                .ok_or(CoreError::InvalidDateTime(self.value)),
            other => Ok(other.in_timezone(tz)),
        }
    }
}

impl Serialize for DateTimeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            DateTimeValue::Zoned(dt) => ZonedRepr {
                kind: "QDateTime".to_string(),
                value: self.plain_string(),
                timezone: dt.timezone().name().to_string(),
            }
            .serialize(serializer),
            _ => serializer.serialize_str(&self.plain_string()),
        }
    }
}

impl<'de> Deserialize<'de> for DateTimeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match DateTimeRepr::deserialize(deserializer)? {
            DateTimeRepr::Plain(s) => s.parse().map_err(de::Error::custom),
            DateTimeRepr::Zoned(repr) => repr.into_value().map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert!(matches!("2024-05-01T09:00:00Z".parse::<DateTimeValue>(), Ok(DateTimeValue::Utc(_))));
        assert!(matches!(
            "2024-05-01T09:00:00+02:00".parse::<DateTimeValue>(),
            Ok(DateTimeValue::Offset(_))
        ));
        assert!(matches!("2024-05-01T09:00".parse::<DateTimeValue>(), Ok(DateTimeValue::Naive(_))));
        assert!(matches!("2024-05-01".parse::<DateTimeValue>(), Ok(DateTimeValue::Naive(_))));
        assert!("yesterday".parse::<DateTimeValue>().is_err());
    }

    #[test]
    fn test_zoned_json_round_trip() {
        let value = "2024-05-01T09:00:00"
            .parse::<DateTimeValue>()
            .unwrap()
            .assume_timezone(chrono_tz::Europe::Berlin)
            .unwrap();
        let json = serde_json::to_value(value).unwrap();
        assert_eq!(json["@type"], "QDateTime");
        assert_eq!(json["@value"], "2024-05-01T09:00:00+02:00");
        assert_eq!(json["timezone"], "Europe/Berlin");

        let back: DateTimeValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_utc_conversion_and_offsets() {
        let utc: DateTimeValue = "2024-01-15T12:00:00Z".parse().unwrap();
        let berlin = utc.in_timezone(chrono_tz::Europe::Berlin);
        assert!(berlin.has_timezone());
        assert!(!berlin.is_utc());
        assert_eq!(berlin.offset_seconds(), Some(3600));
        assert!(berlin.same_instant(&utc));
        assert_eq!(berlin.naive_local().format("%H:%M").to_string(), "13:00");
    }

    #[test]
    fn test_with_date_and_add_days() {
        let value: DateTimeValue = "1970-01-01T08:30:00".parse().unwrap();
        let patched = value
            .with_date(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap())
            .unwrap();
        assert_eq!(patched.to_string(), "2024-03-02T08:30:00");
        assert_eq!(patched.add_days(1).to_string(), "2024-03-03T08:30:00");
        assert_eq!(value.seconds_to(&value.add_days(1)), 86400);
    }
}
