//! Decoding for list fields the Gamma API encodes inconsistently.
//!
//! Fields such as `outcomes`, `outcomePrices` and `clobTokenIds` arrive in
//! several shapes depending on the endpoint and market type:
//!
//! | Wire value | Decoded |
//! |------------|---------|
//! | `null`, `""`, `[]` | `[]` |
//! | `"Yes"` | `["Yes"]` |
//! | `"[\"Yes\", \"No\"]"` | `["Yes", "No"]` |
//! | `["Yes", "No"]` | `["Yes", "No"]` |
//! | `[["0.5", "0.5"]]` | `["0.5", "0.5"]` |
//! | `["[\"Up\", \"Down\"]"]` | `["Up", "Down"]` |
//!
//! Anything else (numbers, objects, arrays nested three deep, mixed arrays)
//! decodes to an empty list rather than failing the whole record.

use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// An ordered list of strings decoded from any of the shapes the Gamma API uses
/// for list-valued fields.
///
/// Decoding never fails on well-formed JSON: unrecognized shapes become an empty
/// list, so an empty value means "absent or unrecognized". Elements that are
/// themselves JSON-encoded string arrays are spliced in place, keeping positions
/// aligned between paired fields such as outcomes and their prices.
///
/// Serialization always writes a flat JSON array of strings.
///
/// ```
/// use polymarket_gamma_client::types::StringOrArray;
///
/// let outcomes: StringOrArray = serde_json::from_str(r#""[\"Yes\", \"No\"]""#)?;
/// assert_eq!(outcomes.as_slice(), ["Yes", "No"]);
/// assert_eq!(serde_json::to_string(&outcomes)?, r#"["Yes","No"]"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringOrArray(Vec<String>);

impl StringOrArray {
    #[must_use]
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    /// Decodes an already-parsed JSON value.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let values = match value {
            Value::Null => Vec::new(),
            Value::String(s) if s.is_empty() => Vec::new(),
            Value::String(s) => {
                let mut out = Vec::new();
                push_resolved(&mut out, s.clone());
                out
            }
            Value::Array(items) => decode_array(items).unwrap_or_else(|| {
                #[cfg(feature = "tracing")]
                tracing::debug!(value = %value, "unsupported array shape, decoding as empty");
                Vec::new()
            }),
            Value::Bool(_) | Value::Number(_) | Value::Object(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(value = %value, "expected a string or an array, decoding as empty");
                Vec::new()
            }
        };

        Self(values)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// A one-dimensional array (with encoded elements spliced in), else a
/// two-dimensional array flattened in order.
fn decode_array(items: &[Value]) -> Option<Vec<String>> {
    let strings = strings_1d(items).or_else(|| strings_2d(items))?;

    let mut out = Vec::with_capacity(strings.len());
    for element in strings {
        push_resolved(&mut out, element);
    }
    Some(out)
}

/// Pushes `element`, or the strings it encodes when it is a JSON string array.
///
/// Encoded elements are resolved recursively; each level is strictly shorter
/// than the one enclosing it.
fn push_resolved(out: &mut Vec<String>, element: String) {
    match decode_encoded(&element) {
        Some(inner) => {
            for value in inner {
                push_resolved(out, value);
            }
        }
        None => out.push(element),
    }
}

/// Decodes `s` when it is bracketed and holds a 1-D or 2-D JSON string array.
fn decode_encoded(s: &str) -> Option<Vec<String>> {
    if s.len() < 2 || !s.starts_with('[') || !s.ends_with(']') {
        return None;
    }

    match serde_json::from_str::<Value>(s) {
        Ok(Value::Array(items)) => strings_1d(&items).or_else(|| strings_2d(&items)),
        _ => None,
    }
}

/// `null` elements read as empty strings.
fn strings_1d(items: &[Value]) -> Option<Vec<String>> {
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Null => Some(String::new()),
            _ => None,
        })
        .collect()
}

/// `null` inner arrays contribute nothing.
fn strings_2d(items: &[Value]) -> Option<Vec<String>> {
    let mut out = Vec::new();
    for item in items {
        match item {
            Value::Array(inner) => out.extend(strings_1d(inner)?),
            Value::Null => {}
            _ => return None,
        }
    }
    Some(out)
}

impl Deref for StringOrArray {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for StringOrArray {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<StringOrArray> for Vec<String> {
    fn from(values: StringOrArray) -> Self {
        values.0
    }
}

impl<S: Into<String>> FromIterator<S> for StringOrArray {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for StringOrArray {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StringOrArray {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for StringOrArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.0)
    }
}

impl<'de> Deserialize<'de> for StringOrArray {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn decode(value: &Value) -> Vec<String> {
        StringOrArray::from_value(value).into_inner()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|&s| s.to_owned()).collect()
    }

    fn assert_no_encoded_arrays(values: &[String]) {
        for value in values {
            assert!(
                decode_encoded(value).is_none(),
                "element {value:?} is still an encoded array"
            );
        }
    }

    #[test]
    fn null_is_empty() {
        assert!(decode(&json!(null)).is_empty());
    }

    #[test]
    fn plain_string_is_single_element() {
        assert_eq!(decode(&json!("hello")), strings(&["hello"]));
        assert_eq!(decode(&json!("hello, world")), strings(&["hello, world"]));
    }

    #[test]
    fn empty_string_is_empty() {
        assert!(decode(&json!("")).is_empty());
    }

    #[test]
    fn encoded_string_array() {
        assert_eq!(decode(&json!("[\"Yes\",\"No\"]")), strings(&["Yes", "No"]));
        assert_eq!(decode(&json!("[\"Yes\", \"No\"]")), strings(&["Yes", "No"]));
        assert!(decode(&json!("[]")).is_empty());
    }

    #[test]
    fn encoded_two_dimensional_string() {
        assert_eq!(
            decode(&json!("[[\"a\",\"b\"],[\"c\"]]")),
            strings(&["a", "b", "c"])
        );
    }

    #[test]
    fn bracketed_string_that_is_not_json_is_kept() {
        assert_eq!(decode(&json!("[not json]")), strings(&["[not json]"]));
        assert_eq!(decode(&json!("[1, 2]")), strings(&["[1, 2]"]));
    }

    #[test]
    fn one_dimensional_array() {
        assert_eq!(decode(&json!(["a", "b", "c"])), strings(&["a", "b", "c"]));
        assert_eq!(decode(&json!(["single"])), strings(&["single"]));
        assert_eq!(decode(&json!(["0.1", "0.2"])), strings(&["0.1", "0.2"]));
        assert_eq!(decode(&json!(["", "a", ""])), strings(&["", "a", ""]));
        assert!(decode(&json!([])).is_empty());
    }

    #[test]
    fn array_wrapping_encoded_array_is_flattened() {
        let decoded = decode(&json!(["[\"Up\", \"Down\"]"]));
        assert_eq!(decoded, strings(&["Up", "Down"]));
    }

    #[test]
    fn encoded_elements_are_spliced_in_place() {
        let decoded = decode(&json!(["first", "[\"a\", \"b\"]", "last"]));
        assert_eq!(decoded, strings(&["first", "a", "b", "last"]));

        let decoded = decode(&json!(["[[\"a\"], [\"b\", \"c\"]]", "d"]));
        assert_eq!(decoded, strings(&["a", "b", "c", "d"]));
    }

    #[test]
    fn doubly_encoded_elements_are_resolved() {
        let once = serde_json::to_string(&["Up", "Down"]).expect("encodes");
        let twice = serde_json::to_string(&[once]).expect("encodes");
        let decoded = decode(&json!([twice]));
        assert_eq!(decoded, strings(&["Up", "Down"]));
    }

    #[test]
    fn two_dimensional_array_is_flattened() {
        assert_eq!(decode(&json!([["a", "b"]])), strings(&["a", "b"]));
        assert_eq!(
            decode(&json!([["a", "b"], ["c", "d"]])),
            strings(&["a", "b", "c", "d"])
        );
        assert_eq!(decode(&json!([["single"]])), strings(&["single"]));
        assert_eq!(
            decode(&json!([[
                "0.0000004113679809846114013590098187297978",
                "0.9999995886320190153885986409901813"
            ]])),
            strings(&[
                "0.0000004113679809846114013590098187297978",
                "0.9999995886320190153885986409901813"
            ])
        );
    }

    #[test]
    fn three_dimensional_array_is_empty() {
        assert!(decode(&json!([[["a"]]])).is_empty());
    }

    #[test]
    fn unsupported_shapes_are_empty() {
        assert!(decode(&json!(42)).is_empty());
        assert!(decode(&json!(true)).is_empty());
        assert!(decode(&json!({"outcomes": ["Yes"]})).is_empty());
        assert!(decode(&json!(["a", 1])).is_empty());
        assert!(decode(&json!([["a"], "b"])).is_empty());
    }

    #[test]
    fn null_elements() {
        assert_eq!(decode(&json!(["a", null])), strings(&["a", ""]));
        assert_eq!(decode(&json!([["a"], null, ["b"]])), strings(&["a", "b"]));
    }

    #[test]
    fn decoded_values_hold_no_encoded_arrays() {
        let inputs = [
            json!(["[\"Up\", \"Down\"]"]),
            json!("[\"Yes\", \"No\"]"),
            json!([["0.5", "0.5"]]),
            json!(["[[\"a\"], [\"b\"]]"]),
            json!([["[\"x\"]"]]),
            json!("[\"[\\\"nested\\\"]\"]"),
        ];

        for input in &inputs {
            let decoded = decode(input);
            assert!(!decoded.is_empty(), "{input} decoded as empty");
            assert_no_encoded_arrays(&decoded);
        }
    }

    #[test]
    fn serializes_as_flat_array() {
        let value = StringOrArray::from_value(&json!([["a", "b"], ["c"]]));
        assert_eq!(
            serde_json::to_string(&value).expect("serializes"),
            r#"["a","b","c"]"#
        );
        assert_eq!(
            serde_json::to_string(&StringOrArray::default()).expect("serializes"),
            "[]"
        );
    }

    #[test]
    fn round_trip_preserves_values() {
        let cases = [
            strings(&[]),
            strings(&["hello"]),
            strings(&["a", "b", "c"]),
            strings(&["", "a", ""]),
        ];

        for case in cases {
            let original = StringOrArray::new(case);
            let encoded = serde_json::to_string(&original).expect("serializes");
            let decoded: StringOrArray = serde_json::from_str(&encoded).expect("decodes");
            assert_eq!(decoded, original);
        }
    }

    #[test]
    fn record_fields_decode_independently() {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Record {
            #[serde(default)]
            outcomes: StringOrArray,
            #[serde(default)]
            outcome_prices: StringOrArray,
            #[serde(default)]
            short_outcomes: StringOrArray,
        }

        let record: Record = serde_json::from_value(json!({
            "outcomes": "[\"Yes\", \"No\"]",
            "outcomePrices": ["0.52", "0.48"]
        }))
        .expect("record decodes");

        assert_eq!(record.outcomes.as_slice(), ["Yes", "No"]);
        assert_eq!(record.outcome_prices.as_slice(), ["0.52", "0.48"]);
        assert!(record.short_outcomes.is_empty());
    }

    #[test]
    fn collection_conversions() {
        let value: StringOrArray = ["a", "b"].into_iter().collect();
        assert_eq!(value.len(), 2);
        assert_eq!(value.first().map(String::as_str), Some("a"));
        assert_eq!((&value).into_iter().count(), 2);
        assert_eq!(Vec::from(value), strings(&["a", "b"]));
    }
}
