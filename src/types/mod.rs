//! Types for the Polymarket Gamma API.
//!
//! - **Decoding types**: [`NormalizedTime`] and [`StringOrArray`] absorb the
//!   inconsistent encodings the API uses for timestamps and list fields.
//!
//! - **Request types**: Builder-pattern structs for each endpoint
//!   (e.g., [`request::EventsRequest`], [`request::MarketsRequest`]).
//!
//! - **Response types**: Structs representing API responses
//!   (e.g., [`response::Event`], [`response::Market`], [`response::Tag`]).
//!
//! # Request Building
//!
//! All request types use the builder pattern via the [`bon`](https://docs.rs/bon) crate:
//!
//! ```
//! use polymarket_gamma_client::types::request::{EventsRequest, MarketsRequest};
//!
//! let events = EventsRequest::builder().build();
//!
//! let markets = MarketsRequest::builder()
//!     .limit(10)
//!     .closed(false)
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;
mod string_or_array;
mod timestamp;

/// Date and time types used by request filters.
pub use chrono::{DateTime, NaiveDate, Utc};
/// Arbitrary precision decimal type for prices, volumes, and liquidity.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use polymarket_gamma_client::types::dec;
/// let price = dec!(0.55);
/// ```
pub use rust_decimal_macros::dec;
pub use string_or_array::StringOrArray;
pub use timestamp::NormalizedTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum RelatedTagsStatus {
    Active,
    Closed,
    All,
    /// Unknown status from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn related_tags_status_display_matches_wire() {
        assert_eq!(RelatedTagsStatus::Active.to_string(), "active");
        assert_eq!(RelatedTagsStatus::All.to_string(), "all");
        assert_eq!(
            serde_json::to_string(&RelatedTagsStatus::Closed).expect("serializes"),
            r#""closed""#
        );
    }

    #[test]
    fn related_tags_status_unknown_keeps_raw_value() {
        let status: RelatedTagsStatus = serde_json::from_str(r#""archived""#).expect("decodes");
        assert_eq!(status, RelatedTagsStatus::Unknown("archived".to_owned()));
    }
}
