#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

//! Records returned by the Gamma API.
//!
//! Every timestamp field is a [`NormalizedTime`] (zero when absent or `null`)
//! and every list field the API encodes inconsistently is a [`StringOrArray`]
//! (empty when absent). Remaining optional scalars are `Option`s.

use serde::{Deserialize, Serialize};
use serde_with::{
    DisplayFromStr, NoneAsEmptyString, StringWithSeparator, formats::CommaSeparator, serde_as,
};

use crate::Result;
use crate::error::Error;
use crate::serde_helpers::StringFromAny;
use crate::types::{Decimal, NormalizedTime, StringOrArray};

/// Health check response from `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct HealthResponse {
    /// Typically `"OK"`.
    pub data: String,
}

/// Image optimization metadata.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageOptimization {
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default)]
    pub id: Option<String>,
    pub image_url_source: Option<String>,
    pub image_url_optimized: Option<String>,
    pub image_size_kb_source: Option<f64>,
    pub image_size_kb_optimized: Option<f64>,
    pub image_optimized_complete: Option<bool>,
    #[serde(default)]
    pub image_optimized_last_updated: NormalizedTime,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default, rename = "relID")]
    pub rel_id: Option<String>,
    pub field: Option<String>,
    pub relname: Option<String>,
}

/// Pagination information attached to search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Pagination {
    pub has_more: Option<bool>,
    pub total_results: Option<i32>,
}

/// A sports team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Team {
    pub id: i32,
    pub name: Option<String>,
    pub league: Option<String>,
    pub record: Option<String>,
    pub logo: Option<String>,
    pub abbreviation: Option<String>,
    pub alias: Option<String>,
    #[serde(default)]
    pub created_at: NormalizedTime,
    #[serde(default)]
    pub updated_at: NormalizedTime,
    pub color: Option<String>,
    pub provider_id: Option<i32>,
}

/// Metadata for one sport: its tag IDs and series.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SportsMetadata {
    pub id: Option<i32>,
    pub sport: String,
    pub image: Option<String>,
    pub resolution: Option<String>,
    pub ordering: Option<String>,
    /// Tag IDs, sent by the API as one comma-separated string.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(default)]
    pub tags: Vec<String>,
    pub series: Option<String>,
    #[serde(default)]
    pub created_at: NormalizedTime,
}

/// A tag for categorizing events and markets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Tag {
    pub id: String,
    pub label: Option<String>,
    pub slug: Option<String>,
    pub force_show: Option<bool>,
    #[serde(default)]
    pub published_at: NormalizedTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    #[serde(default)]
    pub created_at: NormalizedTime,
    #[serde(default)]
    pub updated_at: NormalizedTime,
    pub force_hide: Option<bool>,
    pub is_carousel: Option<bool>,
    pub requires_translation: Option<bool>,
}

/// A ranked relationship between two tags.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RelatedTag {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default, rename = "tagID")]
    pub tag_id: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default, rename = "relatedTagID")]
    pub related_tag_id: Option<String>,
    pub rank: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Category {
    pub id: String,
    pub label: Option<String>,
    pub parent_category: Option<String>,
    pub slug: Option<String>,
    #[serde(default)]
    pub published_at: NormalizedTime,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    #[serde(default)]
    pub created_at: NormalizedTime,
    #[serde(default)]
    pub updated_at: NormalizedTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct EventCreator {
    pub id: String,
    pub creator_name: Option<String>,
    pub creator_handle: Option<String>,
    pub creator_url: Option<String>,
    pub creator_image: Option<String>,
    #[serde(default)]
    pub created_at: NormalizedTime,
    #[serde(default)]
    pub updated_at: NormalizedTime,
}

/// A chat or live stream attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Chat {
    pub id: String,
    pub channel_id: Option<String>,
    pub channel_name: Option<String>,
    pub channel_image: Option<String>,
    pub live: Option<bool>,
    #[serde(default)]
    pub start_time: NormalizedTime,
    #[serde(default)]
    pub end_time: NormalizedTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Template {
    pub id: String,
    pub event_title: Option<String>,
    pub event_slug: Option<String>,
    pub event_image: Option<String>,
    pub market_title: Option<String>,
    pub description: Option<String>,
    pub resolution_source: Option<String>,
    pub neg_risk: Option<bool>,
    pub sort_by: Option<String>,
    pub show_market_images: Option<bool>,
    pub series_slug: Option<String>,
    #[serde(default)]
    pub outcomes: StringOrArray,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Collection {
    pub id: String,
    pub ticker: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub collection_type: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub header_image: Option<String>,
    pub layout: Option<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub new: Option<bool>,
    pub featured: Option<bool>,
    pub restricted: Option<bool>,
    pub is_template: Option<bool>,
    pub template_variables: Option<String>,
    #[serde(default)]
    pub published_at: NormalizedTime,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    #[serde(default)]
    pub created_at: NormalizedTime,
    #[serde(default)]
    pub updated_at: NormalizedTime,
    pub comments_enabled: Option<bool>,
    pub image_optimized: Option<ImageOptimization>,
    pub icon_optimized: Option<ImageOptimization>,
    pub header_image_optimized: Option<ImageOptimization>,
}

/// A prediction market event grouping one or more markets.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Event {
    pub id: String,
    pub ticker: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub resolution_source: Option<String>,
    #[serde(default)]
    pub start_date: NormalizedTime,
    #[serde(default)]
    pub creation_date: NormalizedTime,
    #[serde(default)]
    pub end_date: NormalizedTime,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub new: Option<bool>,
    pub featured: Option<bool>,
    pub restricted: Option<bool>,
    pub liquidity: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub open_interest: Option<Decimal>,
    pub sort_by: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub is_template: Option<bool>,
    pub template_variables: Option<String>,
    #[serde(default, alias = "published_at")]
    pub published_at: NormalizedTime,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    #[serde(default)]
    pub created_at: NormalizedTime,
    #[serde(default)]
    pub updated_at: NormalizedTime,
    pub comments_enabled: Option<bool>,
    pub competitive: Option<Decimal>,
    pub volume_24hr: Option<Decimal>,
    pub volume_1wk: Option<Decimal>,
    pub volume_1mo: Option<Decimal>,
    pub volume_1yr: Option<Decimal>,
    pub featured_image: Option<String>,
    pub disqus_thread: Option<String>,
    pub parent_event: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default)]
    pub parent_event_id: Option<String>,
    pub sportsradar_match_id: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default)]
    pub turn_provider_id: Option<String>,
    pub enable_order_book: Option<bool>,
    pub liquidity_amm: Option<Decimal>,
    pub liquidity_clob: Option<Decimal>,
    pub neg_risk: Option<bool>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, rename = "negRiskMarketID")]
    pub neg_risk_market_id: Option<String>,
    pub neg_risk_fee_bips: Option<i32>,
    pub comment_count: Option<i32>,
    pub image_optimized: Option<ImageOptimization>,
    pub icon_optimized: Option<ImageOptimization>,
    pub featured_image_optimized: Option<ImageOptimization>,
    pub sub_events: Option<Vec<String>>,
    pub markets: Option<Vec<Market>>,
    pub series: Option<Vec<Series>>,
    pub categories: Option<Vec<Category>>,
    pub collections: Option<Vec<Collection>>,
    pub tags: Option<Vec<Tag>>,
    pub cyom: Option<bool>,
    #[serde(default)]
    pub closed_time: NormalizedTime,
    pub show_all_outcomes: Option<bool>,
    pub show_market_images: Option<bool>,
    pub automatically_resolved: Option<bool>,
    pub enable_neg_risk: Option<bool>,
    pub automatically_active: Option<bool>,
    #[serde(default)]
    pub event_date: NormalizedTime,
    #[serde(default)]
    pub start_time: NormalizedTime,
    pub event_week: Option<i32>,
    pub series_slug: Option<String>,
    pub score: Option<String>,
    pub elapsed: Option<String>,
    pub period: Option<String>,
    pub live: Option<bool>,
    pub ended: Option<bool>,
    #[serde(default)]
    pub finished_timestamp: NormalizedTime,
    pub gmp_chart_mode: Option<String>,
    pub event_creators: Option<Vec<EventCreator>>,
    pub tweet_count: Option<i32>,
    pub chats: Option<Vec<Chat>>,
    pub featured_order: Option<i32>,
    pub estimate_value: Option<bool>,
    pub cant_estimate: Option<bool>,
    pub estimated_value: Option<String>,
    pub templates: Option<Vec<Template>>,
    pub spreads_main_line: Option<Decimal>,
    pub totals_main_line: Option<Decimal>,
    pub carousel_map: Option<String>,
    pub pending_deployment: Option<bool>,
    pub deploying: Option<bool>,
    #[serde(default)]
    pub deploying_timestamp: NormalizedTime,
    #[serde(default)]
    pub scheduled_deployment_timestamp: NormalizedTime,
    pub game_status: Option<String>,
    pub requires_translation: Option<bool>,
    pub neg_risk_augmented: Option<bool>,
    pub game_id: Option<i64>,
    pub election_type: Option<String>,
    pub country_name: Option<String>,
    pub color: Option<String>,
    pub cumulative_markets: Option<bool>,
    pub away_team_name: Option<String>,
    pub home_team_name: Option<String>,
}

/// A prediction market.
///
/// `outcomes`, `outcome_prices`, `clob_token_ids` and `short_outcomes` are
/// positionally aligned: index `i` of each refers to the same outcome.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Market {
    pub id: String,
    pub question: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub condition_id: Option<String>,
    pub slug: Option<String>,
    pub twitter_card_image: Option<String>,
    pub resolution_source: Option<String>,
    #[serde(default)]
    pub end_date: NormalizedTime,
    pub category: Option<String>,
    pub amm_type: Option<String>,
    pub liquidity: Option<Decimal>,
    pub sponsor_name: Option<String>,
    pub sponsor_image: Option<String>,
    #[serde(default)]
    pub start_date: NormalizedTime,
    pub x_axis_value: Option<String>,
    pub y_axis_value: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default)]
    pub denomination_token: Option<String>,
    pub fee: Option<Decimal>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub lower_bound: Option<String>,
    pub upper_bound: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub outcomes: StringOrArray,
    /// Prices as sent by the API; see [`Market::priced_outcomes`].
    #[serde(default)]
    pub outcome_prices: StringOrArray,
    pub volume: Option<Decimal>,
    pub active: Option<bool>,
    pub market_type: Option<String>,
    pub format_type: Option<String>,
    #[serde(default)]
    pub lower_bound_date: NormalizedTime,
    #[serde(default)]
    pub upper_bound_date: NormalizedTime,
    pub closed: Option<bool>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub market_maker_address: Option<String>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    #[serde(default)]
    pub created_at: NormalizedTime,
    #[serde(default)]
    pub updated_at: NormalizedTime,
    #[serde(default)]
    pub closed_time: NormalizedTime,
    pub wide_format: Option<bool>,
    pub new: Option<bool>,
    pub mailchimp_tag: Option<String>,
    pub featured: Option<bool>,
    pub archived: Option<bool>,
    pub resolved_by: Option<String>,
    pub restricted: Option<bool>,
    pub market_group: Option<i32>,
    pub group_item_title: Option<String>,
    pub group_item_threshold: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, rename = "questionID")]
    pub question_id: Option<String>,
    #[serde(default)]
    pub uma_end_date: NormalizedTime,
    pub enable_order_book: Option<bool>,
    pub order_price_min_tick_size: Option<Decimal>,
    pub order_min_size: Option<Decimal>,
    pub uma_resolution_status: Option<String>,
    pub curation_order: Option<i32>,
    pub volume_num: Option<Decimal>,
    pub liquidity_num: Option<Decimal>,
    #[serde(default)]
    pub end_date_iso: NormalizedTime,
    #[serde(default)]
    pub start_date_iso: NormalizedTime,
    #[serde(default)]
    pub uma_end_date_iso: NormalizedTime,
    pub has_reviewed_dates: Option<bool>,
    pub ready_for_cron: Option<bool>,
    pub comments_enabled: Option<bool>,
    pub volume_24hr: Option<Decimal>,
    pub volume_1wk: Option<Decimal>,
    pub volume_1mo: Option<Decimal>,
    pub volume_1yr: Option<Decimal>,
    #[serde(default)]
    pub game_start_time: NormalizedTime,
    pub seconds_delay: Option<i32>,
    #[serde(default)]
    pub clob_token_ids: StringOrArray,
    pub disqus_thread: Option<String>,
    #[serde(default)]
    pub short_outcomes: StringOrArray,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default, rename = "teamAID")]
    pub team_a_id: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default, rename = "teamBID")]
    pub team_b_id: Option<String>,
    pub uma_bond: Option<String>,
    pub uma_reward: Option<Decimal>,
    pub fpmm_live: Option<bool>,
    pub volume_24hr_amm: Option<Decimal>,
    pub volume_1wk_amm: Option<Decimal>,
    pub volume_1mo_amm: Option<Decimal>,
    pub volume_1yr_amm: Option<Decimal>,
    pub volume_24hr_clob: Option<Decimal>,
    pub volume_1wk_clob: Option<Decimal>,
    pub volume_1mo_clob: Option<Decimal>,
    pub volume_1yr_clob: Option<Decimal>,
    pub volume_amm: Option<Decimal>,
    pub volume_clob: Option<Decimal>,
    pub liquidity_amm: Option<Decimal>,
    pub liquidity_clob: Option<Decimal>,
    pub maker_base_fee: Option<i32>,
    pub taker_base_fee: Option<i32>,
    pub maker_rebates_fee_share_bps: Option<i32>,
    pub custom_liveness: Option<i32>,
    pub accepting_orders: Option<bool>,
    pub notifications_enabled: Option<bool>,
    pub score: Option<i32>,
    pub image_optimized: Option<ImageOptimization>,
    pub icon_optimized: Option<ImageOptimization>,
    pub events: Option<Vec<Event>>,
    pub categories: Option<Vec<Category>>,
    pub tags: Option<Vec<Tag>>,
    pub creator: Option<String>,
    pub ready: Option<bool>,
    pub funded: Option<bool>,
    pub past_slugs: Option<String>,
    #[serde(default)]
    pub ready_timestamp: NormalizedTime,
    #[serde(default)]
    pub funded_timestamp: NormalizedTime,
    #[serde(default)]
    pub accepting_orders_timestamp: NormalizedTime,
    pub competitive: Option<Decimal>,
    pub rewards_min_size: Option<Decimal>,
    pub rewards_max_spread: Option<Decimal>,
    pub spread: Option<Decimal>,
    pub automatically_resolved: Option<bool>,
    pub one_day_price_change: Option<Decimal>,
    pub one_hour_price_change: Option<Decimal>,
    pub one_week_price_change: Option<Decimal>,
    pub one_month_price_change: Option<Decimal>,
    pub one_year_price_change: Option<Decimal>,
    pub last_trade_price: Option<Decimal>,
    pub best_bid: Option<Decimal>,
    pub best_ask: Option<Decimal>,
    pub automatically_active: Option<bool>,
    pub clear_book_on_start: Option<bool>,
    pub chart_color: Option<String>,
    pub series_color: Option<String>,
    pub show_gmp_series: Option<bool>,
    pub show_gmp_outcome: Option<bool>,
    pub manual_activation: Option<bool>,
    pub neg_risk_other: Option<bool>,
    pub game_id: Option<String>,
    pub group_item_range: Option<String>,
    pub sports_market_type: Option<String>,
    pub line: Option<Decimal>,
    pub uma_resolution_statuses: Option<String>,
    pub pending_deployment: Option<bool>,
    pub deploying: Option<bool>,
    #[serde(default)]
    pub deploying_timestamp: NormalizedTime,
    #[serde(default)]
    pub scheduled_deployment_timestamp: NormalizedTime,
    pub rfq_enabled: Option<bool>,
    #[serde(default)]
    pub event_start_time: NormalizedTime,
    #[serde(alias = "submitted_by")]
    pub submitted_by: Option<String>,
    pub requires_translation: Option<bool>,
    pub pager_duty_notification_enabled: Option<bool>,
    pub approved: Option<bool>,
    pub cyom: Option<bool>,
    pub fees_enabled: Option<bool>,
    pub holding_rewards_enabled: Option<bool>,
    pub neg_risk: Option<bool>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, rename = "negRiskRequestID")]
    pub neg_risk_request_id: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, rename = "negRiskMarketID")]
    pub neg_risk_market_id: Option<String>,
    pub sent_discord: Option<bool>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub twitter_card_last_refreshed: Option<i64>,
    pub twitter_card_location: Option<String>,
    pub twitter_card_last_validated: Option<String>,
    pub clob_rewards: Option<Vec<ClobReward>>,
    pub category_mailchimp_tag: Option<String>,
    pub subcategory: Option<String>,
}

impl Market {
    /// Pairs each outcome with its price by position.
    ///
    /// An empty result means the market carries no outcomes.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `outcomes` and `outcome_prices` differ
    /// in length, or when a price is not a decimal number.
    pub fn priced_outcomes(&self) -> Result<Vec<(String, Decimal)>> {
        if self.outcomes.len() != self.outcome_prices.len() {
            return Err(Error::validation(format!(
                "market {} has {} outcomes but {} prices",
                self.id,
                self.outcomes.len(),
                self.outcome_prices.len()
            )));
        }

        self.outcomes
            .iter()
            .zip(self.outcome_prices.iter())
            .map(|(outcome, price)| Ok((outcome.clone(), parse_price(&self.id, price)?)))
            .collect()
    }

    /// Spread expressed in ticks: `spread / order_price_min_tick_size`.
    ///
    /// `None` when either value is missing or the tick size is zero.
    #[must_use]
    pub fn spread_ratio(&self) -> Option<Decimal> {
        let tick_size = self.order_price_min_tick_size?;
        if tick_size.is_zero() {
            return None;
        }
        self.spread?.checked_div(tick_size)
    }
}

/// Accepts plain (`"0.52"`) and scientific (`"4.1e-7"`) notation.
fn parse_price(market_id: &str, price: &str) -> Result<Decimal> {
    let trimmed = price.trim();
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| {
            Error::validation(format!(
                "market {market_id} has invalid outcome price {price:?}: {e}"
            ))
        })
}

/// CLOB rewards configuration for a market.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClobReward {
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default)]
    pub id: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub asset_address: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub condition_id: Option<String>,
    #[serde(default)]
    pub start_date: NormalizedTime,
    #[serde(default)]
    pub end_date: NormalizedTime,
    pub rewards_amount: Option<Decimal>,
    pub rewards_daily_rate: Option<Decimal>,
}

/// A series of recurring events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Series {
    pub id: String,
    pub ticker: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub series_type: Option<String>,
    pub recurrence: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub layout: Option<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub new: Option<bool>,
    pub featured: Option<bool>,
    pub restricted: Option<bool>,
    pub is_template: Option<bool>,
    pub template_variables: Option<bool>,
    #[serde(default)]
    pub published_at: NormalizedTime,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    #[serde(default)]
    pub created_at: NormalizedTime,
    #[serde(default)]
    pub updated_at: NormalizedTime,
    pub comments_enabled: Option<bool>,
    pub competitive: Option<Decimal>,
    pub volume_24hr: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub liquidity: Option<Decimal>,
    #[serde(default)]
    pub start_date: NormalizedTime,
    #[serde(rename = "pythTokenID")]
    pub pyth_token_id: Option<String>,
    pub cg_asset_name: Option<String>,
    pub score: Option<i32>,
    pub events: Option<Vec<Event>>,
    pub collections: Option<Vec<Collection>>,
    pub categories: Option<Vec<Category>>,
    pub tags: Option<Vec<Tag>>,
    pub comment_count: Option<i32>,
    pub chats: Option<Vec<Chat>>,
    pub requires_translation: Option<bool>,
}

/// A tag matched by a search query.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchTag {
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default)]
    pub id: Option<String>,
    pub label: Option<String>,
    pub slug: Option<String>,
    #[serde(alias = "event_count")]
    pub event_count: Option<i32>,
}

/// A user profile matched by a search query.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Profile {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    pub name: Option<String>,
    pub user: Option<i32>,
    pub referral: Option<String>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    #[serde(default)]
    pub created_at: NormalizedTime,
    #[serde(default)]
    pub updated_at: NormalizedTime,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_content: Option<String>,
    pub utm_term: Option<String>,
    pub wallet_activated: Option<bool>,
    pub pseudonym: Option<String>,
    pub display_username_public: Option<bool>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub proxy_wallet: Option<String>,
    pub profile_image_optimized: Option<ImageOptimization>,
    pub is_close_only: Option<bool>,
    pub is_cert_req: Option<bool>,
    #[serde(default)]
    pub cert_req_date: NormalizedTime,
}

/// Results of `GET /public-search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SearchResults {
    pub events: Option<Vec<Event>>,
    pub tags: Option<Vec<SearchTag>>,
    pub profiles: Option<Vec<Profile>>,
    pub pagination: Option<Pagination>,
}
