//! Serde helpers shared by the Gamma response types.
//!
//! With the `tracing` feature, response decoding also reports fields the
//! response types do not capture, which is how upstream schema drift shows up.

use std::fmt;

use serde::de::{self, DeserializeOwned, Visitor};
use serde_json::Value;

/// A `serde_as` adapter reading an identifier sent either as a string or an integer.
///
/// Gamma is inconsistent about IDs (`"id": "12"` vs `"tagID": 12`); fields use
/// `#[serde_as(as = "StringFromAny")]` or `#[serde_as(as = "Option<StringFromAny>")]`.
pub struct StringFromAny;

struct IdentifierVisitor;

impl Visitor<'_> for IdentifierVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string or an integer identifier")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }
}

impl<'de> serde_with::DeserializeAs<'de, String> for StringFromAny {
    fn deserialize_as<D: de::Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_any(IdentifierVisitor)
    }
}

impl serde_with::SerializeAs<String> for StringFromAny {
    fn serialize_as<S: serde::Serializer>(source: &String, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(source)
    }
}

/// Decodes a response body, logging every field `T` ignores.
///
/// Unknown fields are reported with `warn!` and never fail decoding. When
/// decoding does fail, the offending path and value are logged with `error!`
/// before the error is returned as [`Kind::Decode`](crate::error::Kind::Decode).
#[cfg(feature = "tracing")]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    tracing::trace!(type_name = %type_name::<T>(), json = %value, "decoding response");

    let original = value.clone();
    let mut ignored: Vec<String> = Vec::new();

    let decoded: T = serde_ignored::deserialize(value, |path| ignored.push(path.to_string()))
        .inspect_err(|_| log_failure_path::<T>(&original))?;

    for path in ignored {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %format_value(lookup_value(&original, &path)),
            "unknown field in API response"
        );
    }

    Ok(decoded)
}

/// Re-runs the decode through `serde_path_to_error` to name the failing field.
#[cfg(feature = "tracing")]
fn log_failure_path<T: DeserializeOwned>(original: &Value) {
    let json = original.to_string();
    let deserializer = &mut serde_json::Deserializer::from_str(&json);

    if let Err(err) = serde_path_to_error::deserialize::<_, T>(deserializer) {
        let path = err.path().to_string();
        tracing::error!(
            type_name = %std::any::type_name::<T>(),
            path = %path,
            value = %format_value(lookup_value(original, &path)),
            error = %err.inner(),
            "response decoding failed"
        );
    }
}

#[cfg(not(feature = "tracing"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Resolves a `serde_ignored` / `serde_path_to_error` path such as
/// `markets[3].events.?.0.title` against `value`. `?` marks an `Option` and is skipped.
#[cfg(feature = "tracing")]
fn lookup_value<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty() && *segment != "?")
        .try_fold(value, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
            _ => None,
        })
}

#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "<unable to retrieve>".to_owned(), Value::to_string)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use serde_with::serde_as;

    use super::*;
    use crate::error::Kind;
    use crate::types::NormalizedTime;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Listing {
        slug: String,
        #[serde(default)]
        end_date: NormalizedTime,
        tag: Option<Label>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Label {
        label: String,
    }

    #[serde_as]
    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Ids {
        #[serde_as(as = "StringFromAny")]
        id: String,
        #[serde_as(as = "Option<StringFromAny>")]
        #[serde(default)]
        parent: Option<String>,
    }

    #[test]
    fn decodes_known_fields() {
        let listing: Listing = deserialize_with_warnings(json!({
            "slug": "will-it-rain",
            "endDate": "2024-11-05T12:00:00Z",
            "tag": { "label": "Weather" }
        }))
        .expect("listing decodes");

        assert_eq!(listing.slug, "will-it-rain");
        assert!(!listing.end_date.is_zero());
        assert_eq!(listing.tag.map(|t| t.label).as_deref(), Some("Weather"));
    }

    #[test]
    fn unknown_fields_do_not_fail() {
        let listing: Listing = deserialize_with_warnings(json!({
            "slug": "s",
            "newField": true,
            "tag": { "label": "l", "nestedNew": 1 }
        }))
        .expect("listing decodes");

        assert_eq!(listing.slug, "s");
        assert!(listing.end_date.is_zero());
    }

    #[test]
    fn missing_required_field_is_decode_error() {
        let err = deserialize_with_warnings::<Listing>(json!({ "endDate": null })).unwrap_err();
        assert_eq!(err.kind(), Kind::Decode);
    }

    #[test]
    fn bad_timestamp_is_decode_error() {
        let err = deserialize_with_warnings::<Listing>(json!({
            "slug": "s",
            "endDate": "not-a-date"
        }))
        .unwrap_err();

        assert_eq!(err.kind(), Kind::Decode);
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn decodes_top_level_arrays() {
        let labels: Vec<Label> =
            deserialize_with_warnings(json!([{ "label": "a" }, { "label": "b" }]))
                .expect("labels decode");
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn string_from_any_accepts_strings_and_integers() {
        let cases = [
            (json!({ "id": "abc" }), "abc"),
            (json!({ "id": 12345 }), "12345"),
            (json!({ "id": -42 }), "-42"),
            (json!({ "id": u64::MAX }), "18446744073709551615"),
            (json!({ "id": "" }), ""),
        ];

        for (input, expected) in cases {
            let ids: Ids = serde_json::from_value(input).expect("ids decode");
            assert_eq!(ids.id, expected);
            assert_eq!(ids.parent, None);
        }
    }

    #[test]
    fn string_from_any_rejects_other_shapes() {
        serde_json::from_value::<Ids>(json!({ "id": 1.5 })).unwrap_err();
        serde_json::from_value::<Ids>(json!({ "id": [1] })).unwrap_err();
    }

    #[test]
    fn string_from_any_serializes_as_string() {
        let ids: Ids = serde_json::from_value(json!({ "id": 7, "parent": 8 })).expect("decode");
        assert_eq!(
            serde_json::to_value(&ids).expect("encode"),
            json!({ "id": "7", "parent": "8" })
        );
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn lookup_follows_mixed_paths() {
        let value = json!({
            "markets": [{ "events": [{ "title": "Election" }] }],
            "outer": { "inner": "v" }
        });

        assert_eq!(
            lookup_value(&value, "markets[0].events.?.0.title"),
            Some(&json!("Election"))
        );
        assert_eq!(lookup_value(&value, "?.outer.?.inner"), Some(&json!("v")));
        assert_eq!(lookup_value(&value, ""), Some(&value));
        assert_eq!(lookup_value(&value, "outer..inner"), Some(&json!("v")));
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn lookup_misses_return_none() {
        let value = json!({ "items": [1, 2, 3], "name": "x" });

        assert_eq!(lookup_value(&value, "items.abc"), None);
        assert_eq!(lookup_value(&value, "items.100"), None);
        assert_eq!(lookup_value(&value, "name.length"), None);
        assert_eq!(format_value(None), "<unable to retrieve>");
        assert_eq!(format_value(Some(&json!([1, 2]))), "[1,2]");
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn warning_is_emitted_for_unknown_fields() {
        use std::io;
        use std::sync::{Arc, Mutex};

        use tracing_subscriber::layer::SubscriberExt as _;

        #[derive(Clone)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Capture {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().expect("lock").extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let capture = Capture(Arc::default());
        let writer = capture.clone();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_writer(move || writer.clone())
                .with_ansi(false),
        );

        tracing::subscriber::with_default(subscriber, || {
            let _listing: Listing =
                deserialize_with_warnings(json!({ "slug": "s", "surpriseField": 42 }))
                    .expect("listing decodes");
        });

        let output = String::from_utf8(capture.0.lock().expect("lock").clone()).expect("utf8");
        assert!(output.contains("unknown field"), "got: {output}");
        assert!(output.contains("surpriseField"), "got: {output}");
    }
}
