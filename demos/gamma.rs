//! Walks every Gamma endpoint against the live API.
//!
//! Lists are fetched first and the IDs and slugs they return drive the lookups.
//!
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example gamma --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=gamma.log RUST_LOG=info cargo run --example gamma --features tracing
//! ```

use std::fs::File;

use polymarket_gamma_client::Client;
use polymarket_gamma_client::types::RelatedTagsStatus;
use polymarket_gamma_client::types::request::{
    EventByIdRequest, EventBySlugRequest, EventTagsRequest, EventsRequest, MarketByIdRequest,
    MarketBySlugRequest, MarketTagsRequest, MarketsRequest, RelatedTagsByIdRequest,
    RelatedTagsBySlugRequest, SearchRequest, SeriesByIdRequest, SeriesListRequest,
    TagByIdRequest, TagBySlugRequest, TagsRequest, TeamsRequest,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    }

    let client = Client::default();

    match client.health().await {
        Ok(h) => info!(endpoint = "health", data = %h.data),
        Err(e) => debug!(endpoint = "health", error = %e),
    }

    match client.sports().await {
        Ok(v) => info!(endpoint = "sports", count = v.len()),
        Err(e) => debug!(endpoint = "sports", error = %e),
    }

    match client
        .teams(&TeamsRequest::builder().limit(5).build())
        .await
    {
        Ok(v) => info!(endpoint = "teams", count = v.len()),
        Err(e) => debug!(endpoint = "teams", error = %e),
    }

    match client.tags(&TagsRequest::builder().limit(10).build()).await {
        Ok(v) => info!(endpoint = "tags", count = v.len()),
        Err(e) => debug!(endpoint = "tags", error = %e),
    }

    let tag_slug = "politics";
    let tag_id = match client
        .tag_by_slug(&TagBySlugRequest::builder().slug(tag_slug).build())
        .await
    {
        Ok(tag) => {
            info!(endpoint = "tag_by_slug", slug = tag_slug, id = %tag.id);
            Some(tag.id)
        }
        Err(e) => {
            debug!(endpoint = "tag_by_slug", slug = tag_slug, error = %e);
            None
        }
    };

    if let Some(id) = &tag_id {
        match client
            .tag_by_id(&TagByIdRequest::builder().id(id).build())
            .await
        {
            Ok(_) => info!(endpoint = "tag_by_id", id = %id),
            Err(e) => debug!(endpoint = "tag_by_id", id = %id, error = %e),
        }

        let request = RelatedTagsByIdRequest::builder()
            .id(id)
            .status(RelatedTagsStatus::Active)
            .build();

        match client.related_tags_by_id(&request).await {
            Ok(v) => info!(endpoint = "related_tags_by_id", id = %id, count = v.len()),
            Err(e) => debug!(endpoint = "related_tags_by_id", id = %id, error = %e),
        }

        match client.tags_related_to_tag_by_id(&request).await {
            Ok(v) => info!(endpoint = "tags_related_to_tag_by_id", id = %id, count = v.len()),
            Err(e) => debug!(endpoint = "tags_related_to_tag_by_id", id = %id, error = %e),
        }
    }

    let request = RelatedTagsBySlugRequest::builder().slug(tag_slug).build();

    match client.related_tags_by_slug(&request).await {
        Ok(v) => info!(endpoint = "related_tags_by_slug", slug = tag_slug, count = v.len()),
        Err(e) => debug!(endpoint = "related_tags_by_slug", slug = tag_slug, error = %e),
    }

    match client.tags_related_to_tag_by_slug(&request).await {
        Ok(v) => info!(endpoint = "tags_related_to_tag_by_slug", slug = tag_slug, count = v.len()),
        Err(e) => debug!(endpoint = "tags_related_to_tag_by_slug", slug = tag_slug, error = %e),
    }

    let events = client
        .events(
            &EventsRequest::builder()
                .limit(5)
                .active(true)
                .closed(false)
                .build(),
        )
        .await;

    match &events {
        Ok(v) => info!(endpoint = "events", count = v.len()),
        Err(e) => debug!(endpoint = "events", error = %e),
    }

    if let Some(event) = events.ok().and_then(|v| v.into_iter().next()) {
        let id = event.id;

        match client
            .event_by_id(&EventByIdRequest::builder().id(&id).build())
            .await
        {
            Ok(e) => info!(endpoint = "event_by_id", id = %id, end_date = %e.end_date),
            Err(e) => debug!(endpoint = "event_by_id", id = %id, error = %e),
        }

        match client
            .event_tags(&EventTagsRequest::builder().id(&id).build())
            .await
        {
            Ok(v) => info!(endpoint = "event_tags", id = %id, count = v.len()),
            Err(e) => debug!(endpoint = "event_tags", id = %id, error = %e),
        }

        if let Some(slug) = event.slug {
            match client
                .event_by_slug(&EventBySlugRequest::builder().slug(&slug).build())
                .await
            {
                Ok(_) => info!(endpoint = "event_by_slug", slug = %slug),
                Err(e) => debug!(endpoint = "event_by_slug", slug = %slug, error = %e),
            }
        }
    }

    let markets = client
        .markets(&MarketsRequest::builder().limit(5).closed(false).build())
        .await;

    match &markets {
        Ok(v) => info!(endpoint = "markets", count = v.len()),
        Err(e) => debug!(endpoint = "markets", error = %e),
    }

    if let Some(market) = markets.ok().and_then(|v| v.into_iter().next()) {
        let id = market.id;

        match client
            .market_by_id(&MarketByIdRequest::builder().id(&id).build())
            .await
        {
            Ok(m) => match m.priced_outcomes() {
                Ok(outcomes) => info!(endpoint = "market_by_id", id = %id, outcomes = ?outcomes),
                Err(e) => debug!(endpoint = "market_by_id", id = %id, error = %e),
            },
            Err(e) => debug!(endpoint = "market_by_id", id = %id, error = %e),
        }

        match client
            .market_tags(&MarketTagsRequest::builder().id(&id).build())
            .await
        {
            Ok(v) => info!(endpoint = "market_tags", id = %id, count = v.len()),
            Err(e) => debug!(endpoint = "market_tags", id = %id, error = %e),
        }

        if let Some(slug) = market.slug {
            match client
                .market_by_slug(&MarketBySlugRequest::builder().slug(&slug).build())
                .await
            {
                Ok(_) => info!(endpoint = "market_by_slug", slug = %slug),
                Err(e) => debug!(endpoint = "market_by_slug", slug = %slug, error = %e),
            }
        }
    }

    let series = client
        .series(&SeriesListRequest::builder().limit(5).build())
        .await;

    match &series {
        Ok(v) => info!(endpoint = "series", count = v.len()),
        Err(e) => debug!(endpoint = "series", error = %e),
    }

    if let Some(id) = series.ok().and_then(|v| v.into_iter().next()).map(|s| s.id) {
        match client
            .series_by_id(&SeriesByIdRequest::builder().id(&id).build())
            .await
        {
            Ok(s) => info!(endpoint = "series_by_id", id = %id, title = ?s.title),
            Err(e) => debug!(endpoint = "series_by_id", id = %id, error = %e),
        }
    }

    match client
        .search(
            &SearchRequest::builder()
                .q("bitcoin")
                .limit_per_type(3)
                .build(),
        )
        .await
    {
        Ok(r) => info!(
            endpoint = "search",
            events = r.events.map_or(0, |v| v.len()),
            tags = r.tags.map_or(0, |v| v.len()),
            profiles = r.profiles.map_or(0, |v| v.len())
        ),
        Err(e) => debug!(endpoint = "search", error = %e),
    }

    Ok(())
}
