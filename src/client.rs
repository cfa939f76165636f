//! HTTP client for the Polymarket Gamma API.
//!
//! | Endpoint | Method |
//! |----------|--------|
//! | `/` | [`Client::health`] |
//! | `/teams` | [`Client::teams`] |
//! | `/sports` | [`Client::sports`] |
//! | `/tags` | [`Client::tags`] |
//! | `/tags/{id}` | [`Client::tag_by_id`] |
//! | `/tags/slug/{slug}` | [`Client::tag_by_slug`] |
//! | `/tags/{id}/related-tags` | [`Client::related_tags_by_id`] |
//! | `/tags/slug/{slug}/related-tags` | [`Client::related_tags_by_slug`] |
//! | `/tags/{id}/related-tags/tags` | [`Client::tags_related_to_tag_by_id`] |
//! | `/tags/slug/{slug}/related-tags/tags` | [`Client::tags_related_to_tag_by_slug`] |
//! | `/events` | [`Client::events`] |
//! | `/events/{id}` | [`Client::event_by_id`] |
//! | `/events/slug/{slug}` | [`Client::event_by_slug`] |
//! | `/events/{id}/tags` | [`Client::event_tags`] |
//! | `/markets` | [`Client::markets`] |
//! | `/markets/{id}` | [`Client::market_by_id`] |
//! | `/markets/slug/{slug}` | [`Client::market_by_slug`] |
//! | `/markets/{id}/tags` | [`Client::market_tags`] |
//! | `/series` | [`Client::series`] |
//! | `/series/{id}` | [`Client::series_by_id`] |
//! | `/public-search` | [`Client::search`] |
//!
//! # Example
//!
//! ```no_run
//! use polymarket_gamma_client::{Client, types::request::EventsRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! let request = EventsRequest::builder()
//!     .active(true)
//!     .limit(10)
//!     .build();
//!
//! for event in client.events(&request).await? {
//!     println!("{}: {:?} ends {}", event.id, event.title, event.end_date);
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::{
    Client as ReqwestClient, Method,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Error;
use crate::types::request::{
    EventByIdRequest, EventBySlugRequest, EventTagsRequest, EventsRequest, MarketByIdRequest,
    MarketBySlugRequest, MarketTagsRequest, MarketsRequest, RelatedTagsByIdRequest,
    RelatedTagsBySlugRequest, SearchRequest, SeriesByIdRequest, SeriesListRequest, TagByIdRequest,
    TagBySlugRequest, TagsRequest, TeamsRequest,
};
use crate::types::response::{
    Event, HealthResponse, Market, RelatedTag, SearchResults, Series, SportsMetadata, Tag, Team,
};
use crate::{Result, ToQueryParams as _};

/// Production Gamma API endpoint.
pub const GAMMA_API_URL: &str = "https://gamma-api.polymarket.com";

/// HTTP client for the Polymarket Gamma API.
///
/// Each method issues exactly one `GET`. IDs and slugs are percent-encoded as
/// single path segments, so values containing `/`, `?` or spaces are safe.
///
/// ```no_run
/// use polymarket_gamma_client::Client;
///
/// let client = Client::default();
///
/// let staging = Client::new("https://gamma-staging.example.com").unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(GAMMA_API_URL).expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a client for `host` with default headers.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not a valid base URL or the HTTP client
    /// cannot be created.
    pub fn new(host: &str) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("polymarket-gamma-client/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Self::with_http_client(host, client)
    }

    /// Creates a client for `host` that sends requests through `client`.
    ///
    /// Use this to configure timeouts, proxies or connection pooling.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not a valid base URL.
    pub fn with_http_client(host: &str, client: ReqwestClient) -> Result<Client> {
        let host = Url::parse(host)?;
        if host.cannot_be_a_base() {
            return Err(Error::validation(format!(
                "host {host} cannot be used as a base URL"
            )));
        }

        Ok(Self { host, client })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Appends `segments` to the host path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str], query: &str) -> Result<Url> {
        let mut url = self.host.clone();
        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|()| {
                    Error::validation(format!("host {} cannot be used as a base URL", self.host))
                })?
                .pop_if_empty()
                .extend(segments);
        }
        url.set_query(query.strip_prefix('?'));

        Ok(url)
    }

    async fn get<Req: Serialize, Res: DeserializeOwned>(
        &self,
        segments: &[&str],
        req: &Req,
    ) -> Result<Res> {
        let url = self.endpoint(segments, &req.query_params())?;
        let request = self.client.request(Method::GET, url).build()?;
        crate::request(&self.client, request).await
    }

    /// Checks that the API is up. A healthy API answers `{"data": "OK"}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API is unreachable or returns a non-2xx status.
    pub async fn health(&self) -> Result<HealthResponse> {
        self.get(&[], &()).await
    }

    /// Lists sports teams.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn teams(&self, request: &TeamsRequest) -> Result<Vec<Team>> {
        self.get(&["teams"], request).await
    }

    /// Lists metadata (tag IDs, series, artwork) for every supported sport.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn sports(&self) -> Result<Vec<SportsMetadata>> {
        self.get(&["sports"], &()).await
    }

    /// Lists tags.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn tags(&self, request: &TagsRequest) -> Result<Vec<Tag>> {
        self.get(&["tags"], request).await
    }

    /// # Errors
    ///
    /// Returns a [`Status`](crate::error::Kind::Status) error if the tag does not exist.
    pub async fn tag_by_id(&self, request: &TagByIdRequest) -> Result<Tag> {
        self.get(&["tags", &request.id], request).await
    }

    /// # Errors
    ///
    /// Returns a [`Status`](crate::error::Kind::Status) error if the tag does not exist.
    pub async fn tag_by_slug(&self, request: &TagBySlugRequest) -> Result<Tag> {
        self.get(&["tags", "slug", &request.slug], request).await
    }

    /// Lists the relationships from a tag to its related tags.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn related_tags_by_id(
        &self,
        request: &RelatedTagsByIdRequest,
    ) -> Result<Vec<RelatedTag>> {
        self.get(&["tags", &request.id, "related-tags"], request)
            .await
    }

    /// Lists the relationships from a tag, addressed by slug, to its related tags.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn related_tags_by_slug(
        &self,
        request: &RelatedTagsBySlugRequest,
    ) -> Result<Vec<RelatedTag>> {
        self.get(&["tags", "slug", &request.slug, "related-tags"], request)
            .await
    }

    /// Lists the full tags related to a tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn tags_related_to_tag_by_id(
        &self,
        request: &RelatedTagsByIdRequest,
    ) -> Result<Vec<Tag>> {
        self.get(&["tags", &request.id, "related-tags", "tags"], request)
            .await
    }

    /// Lists the full tags related to a tag addressed by slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn tags_related_to_tag_by_slug(
        &self,
        request: &RelatedTagsBySlugRequest,
    ) -> Result<Vec<Tag>> {
        self.get(
            &["tags", "slug", &request.slug, "related-tags", "tags"],
            request,
        )
        .await
    }

    /// Lists events with optional filters and caller-driven `offset`/`limit` paging.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn events(&self, request: &EventsRequest) -> Result<Vec<Event>> {
        self.get(&["events"], request).await
    }

    /// # Errors
    ///
    /// Returns a [`Status`](crate::error::Kind::Status) error if the event does not exist.
    pub async fn event_by_id(&self, request: &EventByIdRequest) -> Result<Event> {
        self.get(&["events", &request.id], request).await
    }

    /// # Errors
    ///
    /// Returns a [`Status`](crate::error::Kind::Status) error if the event does not exist.
    pub async fn event_by_slug(&self, request: &EventBySlugRequest) -> Result<Event> {
        self.get(&["events", "slug", &request.slug], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn event_tags(&self, request: &EventTagsRequest) -> Result<Vec<Tag>> {
        self.get(&["events", &request.id, "tags"], request).await
    }

    /// Lists markets with optional filters and caller-driven `offset`/`limit` paging.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn markets(&self, request: &MarketsRequest) -> Result<Vec<Market>> {
        self.get(&["markets"], request).await
    }

    /// # Errors
    ///
    /// Returns a [`Status`](crate::error::Kind::Status) error if the market does not exist.
    pub async fn market_by_id(&self, request: &MarketByIdRequest) -> Result<Market> {
        self.get(&["markets", &request.id], request).await
    }

    /// # Errors
    ///
    /// Returns a [`Status`](crate::error::Kind::Status) error if the market does not exist.
    pub async fn market_by_slug(&self, request: &MarketBySlugRequest) -> Result<Market> {
        self.get(&["markets", "slug", &request.slug], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn market_tags(&self, request: &MarketTagsRequest) -> Result<Vec<Tag>> {
        self.get(&["markets", &request.id, "tags"], request).await
    }

    /// Lists series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn series(&self, request: &SeriesListRequest) -> Result<Vec<Series>> {
        self.get(&["series"], request).await
    }

    /// # Errors
    ///
    /// Returns a [`Status`](crate::error::Kind::Status) error if the series does not exist.
    pub async fn series_by_id(&self, request: &SeriesByIdRequest) -> Result<Series> {
        self.get(&["series", &request.id], request).await
    }

    /// Searches events, tags and profiles.
    ///
    /// # Errors
    ///
    /// Returns a [`Validation`](crate::error::Kind::Validation) error without
    /// sending anything when `q` is blank, otherwise any request or decode error.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResults> {
        if request.q.trim().is_empty() {
            return Err(Error::validation("search query (q) is required"));
        }

        self.get(&["public-search"], request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;

    fn client(host: &str) -> Client {
        Client::new(host).expect("valid host")
    }

    #[test]
    fn default_points_at_production() {
        assert_eq!(Client::default().host().as_str(), "https://gamma-api.polymarket.com/");
    }

    #[test]
    fn endpoint_appends_segments() {
        let url = client("https://gamma.example.com")
            .endpoint(&["markets", "slug", "will-it-rain"], "")
            .expect("url");

        assert_eq!(url.as_str(), "https://gamma.example.com/markets/slug/will-it-rain");
    }

    #[test]
    fn endpoint_keeps_host_path_prefix() {
        let url = client("https://example.com/gamma/")
            .endpoint(&["events"], "?limit=1")
            .expect("url");

        assert_eq!(url.as_str(), "https://example.com/gamma/events?limit=1");
    }

    #[test]
    fn endpoint_percent_encodes_segments() {
        let url = client("https://gamma.example.com")
            .endpoint(&["events", "slug", "who wins?/2024#1"], "")
            .expect("url");

        assert_eq!(url.path(), "/events/slug/who%20wins%3F%2F2024%231");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn endpoint_without_segments_is_root() {
        let url = client("https://gamma.example.com").endpoint(&[], "").expect("url");
        assert_eq!(url.path(), "/");
    }

    #[test]
    fn invalid_hosts_are_rejected() {
        assert_eq!(Client::new("not a url").unwrap_err().kind(), Kind::Internal);
        assert_eq!(
            Client::new("mailto:gamma@example.com").unwrap_err().kind(),
            Kind::Validation
        );
    }
}
