//! Tolerant decoding of Gamma API date-time fields.
//!
//! The API is not consistent in how it formats timestamps: depending on the
//! endpoint (and on when a record was written) a field may hold an RFC 3339
//! string, a space-separated date-time, an offset truncated to `+00`, a bare
//! date or a long-form `November 1, 2022` date. [`NormalizedTime`] accepts all
//! of them and always writes RFC 3339 back out.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, ParseResult, SecondsFormat, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimestampFormatError;

/// A candidate input layout.
#[derive(Debug, Clone, Copy)]
enum Layout {
    /// RFC 3339 with `Z` or a numeric offset.
    Rfc3339,
    /// A layout that carries its own numeric offset.
    Offset(&'static str),
    /// A layout without an offset, read as UTC.
    Utc(&'static str),
    /// A date without a time of day, read as midnight UTC.
    Date(&'static str),
}

/// Tried first; most records use it.
const PRIMARY_LAYOUT: Layout = Layout::Rfc3339;

/// Tried in order once [`PRIMARY_LAYOUT`] fails. The first one that parses wins.
const FALLBACK_LAYOUTS: &[Layout] = &[
    Layout::Offset("%Y-%m-%dT%H:%M:%S%.f%:z"),
    Layout::Utc("%Y-%m-%dT%H:%M:%SZ"),
    Layout::Utc("%Y-%m-%dT%H:%M:%S%.fZ"),
    Layout::Offset("%Y-%m-%d %H:%M:%S%.f%:z"),
    Layout::Utc("%Y-%m-%d %H:%M:%S%.f+00:00"),
    Layout::Date("%Y-%m-%d"),
    Layout::Date("%B %d, %Y"),
];

impl Layout {
    fn parse(self, input: &str) -> ParseResult<DateTime<Utc>> {
        match self {
            Layout::Rfc3339 => {
                DateTime::parse_from_rfc3339(input).map(|instant| instant.with_timezone(&Utc))
            }
            Layout::Offset(format) => {
                DateTime::parse_from_str(input, format).map(|instant| instant.with_timezone(&Utc))
            }
            Layout::Utc(format) => NaiveDateTime::parse_from_str(input, format).map(|t| t.and_utc()),
            Layout::Date(format) => NaiveDate::parse_from_str(input, format)
                .map(|date| date.and_time(NaiveTime::MIN).and_utc()),
        }
    }
}

/// A timestamp decoded from any of the layouts the Gamma API is known to emit.
///
/// `null`, an empty string or a missing field decode to the *zero* value, which
/// is distinct from every real instant (including the Unix epoch). The zero
/// value serializes back to `null`; any other value serializes as an RFC 3339
/// UTC string such as `"2024-11-06T15:17:41Z"`.
///
/// ```
/// use polymarket_gamma_client::types::NormalizedTime;
///
/// let truncated: NormalizedTime = "2020-11-02 16:31:01+00".parse()?;
/// let full: NormalizedTime = "2020-11-02T16:31:01Z".parse()?;
/// assert_eq!(truncated, full);
///
/// let missing: NormalizedTime = "".parse()?;
/// assert!(missing.is_zero());
/// # Ok::<(), polymarket_gamma_client::error::TimestampFormatError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedTime(Option<DateTime<Utc>>);

impl NormalizedTime {
    /// The zero value, representing an absent timestamp.
    pub const ZERO: Self = Self(None);

    /// Parses a timestamp string, with or without surrounding JSON quotes.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampFormatError`] when no supported layout matches.
    pub fn parse(input: &str) -> Result<Self, TimestampFormatError> {
        let unquoted = input.trim_matches('"');
        if unquoted.is_empty() || unquoted == "null" {
            return Ok(Self::ZERO);
        }

        let normalized = normalize_offset(unquoted);

        FALLBACK_LAYOUTS
            .iter()
            .fold(PRIMARY_LAYOUT.parse(&normalized), |parsed, layout| {
                parsed.or_else(|_| layout.parse(&normalized))
            })
            .map(|instant| Self(Some(instant)))
            .map_err(|source| TimestampFormatError {
                input: normalized.into_owned(),
                source,
            })
    }

    /// Returns `true` for the zero (absent) value.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    /// The decoded instant, or `None` for the zero value.
    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Formats the instant with a `chrono` format string, or `None` for the zero value.
    #[must_use]
    pub fn format(&self, format: &str) -> Option<String> {
        self.0.map(|instant| instant.format(format).to_string())
    }
}

fn canonical(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Repairs offsets truncated to whole hours (`+00` becomes `+00:00`).
///
/// Short inputs are left alone so a bare date such as `2024-11-06`, whose
/// tail `-06` looks like an offset, survives intact.
fn normalize_offset(input: &str) -> Cow<'_, str> {
    if input.len() <= 10 {
        return Cow::Borrowed(input);
    }

    match input.as_bytes() {
        [.., b'+' | b'-', tens, units] if tens.is_ascii_digit() && units.is_ascii_digit() => {
            #[cfg(feature = "tracing")]
            tracing::debug!(input, "normalizing truncated timezone offset");

            Cow::Owned(format!("{input}:00"))
        }
        _ => Cow::Borrowed(input),
    }
}

impl FromStr for NormalizedTime {
    type Err = TimestampFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<DateTime<Utc>> for NormalizedTime {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(Some(instant))
    }
}

impl From<Option<DateTime<Utc>>> for NormalizedTime {
    fn from(instant: Option<DateTime<Utc>>) -> Self {
        Self(instant)
    }
}

impl From<NormalizedTime> for Option<DateTime<Utc>> {
    fn from(time: NormalizedTime) -> Self {
        time.0
    }
}

/// Writes the canonical RFC 3339 form; the zero value writes nothing.
impl fmt::Display for NormalizedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(instant) => f.write_str(&canonical(instant)),
            None => Ok(()),
        }
    }
}

impl Serialize for NormalizedTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(instant) => serializer.serialize_str(&canonical(instant)),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for NormalizedTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NormalizedTimeVisitor;

        impl<'de> Visitor<'de> for NormalizedTimeVisitor {
            type Value = NormalizedTime;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a timestamp string or null")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                NormalizedTime::parse(v).map_err(E::custom)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(NormalizedTime::ZERO)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(NormalizedTime::ZERO)
            }

            fn visit_some<D: Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error> {
                deserializer.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(NormalizedTimeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use serde_json::json;

    use super::*;

    fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .expect("valid date")
    }

    fn parse(input: &str) -> NormalizedTime {
        NormalizedTime::parse(input).expect("timestamp should parse")
    }

    #[test]
    fn rfc3339_with_offset() {
        let time = parse("2024-11-06T15:17:41+07:00");
        assert_eq!(time.as_datetime(), Some(utc(2024, 11, 6, 8, 17, 41)));
    }

    #[test]
    fn rfc3339_with_fractional_seconds() {
        let time = parse("2024-11-06T15:17:41.123456+00:00");
        let instant = time.as_datetime().expect("non-zero");
        assert_eq!(instant.timestamp(), utc(2024, 11, 6, 15, 17, 41).timestamp());
        assert_eq!(instant.timestamp_subsec_micros(), 123_456);
    }

    #[test]
    fn explicit_utc_suffix() {
        let time = parse("2024-11-06T15:17:41Z");
        assert_eq!(time.as_datetime(), Some(utc(2024, 11, 6, 15, 17, 41)));
    }

    #[test]
    fn fractional_seconds_with_utc_suffix() {
        let time = parse("2024-11-06T15:17:41.5Z");
        let instant = time.as_datetime().expect("non-zero");
        assert_eq!(instant.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn space_separated_with_offset() {
        let plain = parse("2020-11-02 16:31:01-05:00");
        assert_eq!(plain.as_datetime(), Some(utc(2020, 11, 2, 21, 31, 1)));

        let fractional = parse("2020-11-02 16:31:01.654321-05:00");
        assert_eq!(
            fractional.as_datetime().map(|t| t.timestamp()),
            Some(utc(2020, 11, 2, 21, 31, 1).timestamp())
        );
    }

    #[test]
    fn space_separated_with_utc_offset() {
        let time = parse("2020-11-02 16:31:01+00:00");
        assert_eq!(time.as_datetime(), Some(utc(2020, 11, 2, 16, 31, 1)));
    }

    #[test]
    fn bare_date() {
        let time = parse("2024-11-06");
        assert_eq!(time.as_datetime(), Some(utc(2024, 11, 6, 0, 0, 0)));
    }

    #[test]
    fn long_month_name() {
        let time = parse("November 1, 2022");
        assert_eq!(time.as_datetime(), Some(utc(2022, 11, 1, 0, 0, 0)));
    }

    #[test]
    fn truncated_offset_matches_full_offset() {
        assert_eq!(
            parse("2020-11-02 16:31:01+00"),
            parse("2020-11-02 16:31:01+00:00")
        );
        assert_eq!(
            parse("2020-11-02 16:31:01-05"),
            parse("2020-11-02 21:31:01+00:00")
        );
    }

    #[test]
    fn normalize_offset_leaves_other_inputs_alone() {
        assert_eq!(normalize_offset("2024-11-06"), "2024-11-06");
        assert_eq!(
            normalize_offset("2020-11-02 16:31:01+00:00"),
            "2020-11-02 16:31:01+00:00"
        );
        assert_eq!(
            normalize_offset("2020-11-02 16:31:01+00"),
            "2020-11-02 16:31:01+00:00"
        );
        assert_eq!(normalize_offset("November 1, 2022"), "November 1, 2022");
    }

    #[test]
    fn quoted_input_is_unquoted() {
        assert_eq!(parse("\"2024-11-06\""), parse("2024-11-06"));
    }

    #[test]
    fn null_and_empty_are_zero() {
        assert!(parse("").is_zero());
        assert!(parse("null").is_zero());
        assert!(parse("\"\"").is_zero());
        assert_eq!(parse("null"), NormalizedTime::default());
    }

    #[test]
    fn zero_is_not_the_epoch() {
        let epoch = parse("1970-01-01T00:00:00Z");
        assert!(!epoch.is_zero());
        assert_ne!(epoch, NormalizedTime::ZERO);
    }

    #[test]
    fn unknown_format_fails() {
        let err = NormalizedTime::parse("not-a-date").unwrap_err();
        assert_eq!(err.input, "not-a-date");
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn deserialize_accepts_null_and_strings() {
        let zero: NormalizedTime = serde_json::from_value(json!(null)).expect("null decodes");
        assert!(zero.is_zero());

        let time: NormalizedTime =
            serde_json::from_value(json!("2020-11-02 16:31:01+00")).expect("string decodes");
        assert_eq!(time.as_datetime(), Some(utc(2020, 11, 2, 16, 31, 1)));
    }

    #[test]
    fn deserialize_failure_is_reported() {
        let result: Result<NormalizedTime, _> = serde_json::from_value(json!("tomorrow-ish"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("tomorrow-ish"));
    }

    #[test]
    fn deserialize_rejects_non_strings() {
        let result: Result<NormalizedTime, _> = serde_json::from_value(json!(12));
        result.unwrap_err();
    }

    #[test]
    fn missing_field_defaults_to_zero() {
        #[derive(Deserialize)]
        struct Record {
            #[serde(default)]
            created_at: NormalizedTime,
        }

        let record: Record = serde_json::from_value(json!({})).expect("record decodes");
        assert!(record.created_at.is_zero());
    }

    #[test]
    fn serialize_is_canonical_utc() {
        let time = parse("2024-11-06 22:17:41.250+07:00");
        assert_eq!(
            serde_json::to_value(time).expect("serializes"),
            json!("2024-11-06T15:17:41Z")
        );
        assert_eq!(time.to_string(), "2024-11-06T15:17:41Z");
    }

    #[test]
    fn serialize_zero_is_null() {
        assert_eq!(
            serde_json::to_value(NormalizedTime::ZERO).expect("serializes"),
            json!(null)
        );
        assert_eq!(NormalizedTime::ZERO.to_string(), "");
    }

    #[test]
    fn canonical_output_parses_back() {
        let time = parse("November 1, 2022");
        let encoded = serde_json::to_string(&time).expect("serializes");
        let decoded: NormalizedTime = serde_json::from_str(&encoded).expect("decodes");
        assert_eq!(decoded, time);
    }

    #[test]
    fn format_and_conversions() {
        let time = parse("2024-11-06T15:17:41Z");
        assert_eq!(time.format("%Y/%m/%d").as_deref(), Some("2024/11/06"));
        assert_eq!(NormalizedTime::ZERO.format("%Y"), None);

        let instant = utc(2024, 1, 2, 3, 4, 5);
        let converted = NormalizedTime::from(instant);
        assert_eq!(Option::<DateTime<Utc>>::from(converted), Some(instant));
        assert!(NormalizedTime::ZERO < converted);
    }
}
