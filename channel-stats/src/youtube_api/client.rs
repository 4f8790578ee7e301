//! Core YouTube API client functionality.

use crate::youtube_api::{
    channels::{Channel, ChannelListResponse},
    search::{SearchListResponse, SearchResult},
};
use eyre::Context;
use http::Method;
use tracing::instrument;

/// Where the public YouTube Data API v3 lives.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Client for interacting with the public endpoints of the YouTube Data API v3.
///
/// Requests are authorized with an API key passed as the `key` query parameter. The key is
/// never checked locally; a missing or invalid key surfaces as a failed request.
#[derive(Clone)]
pub struct YouTubeClient {
    /// API key sent with every request.
    api_key: String,
    /// Base URL of the API, without a trailing slash.
    base_url: String,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl YouTubeClient {
    /// Creates a new client that talks to [`DEFAULT_BASE_URL`].
    ///
    /// # Arguments
    ///
    /// * `api_key` - The API key used to authorize requests
    /// * `client` - Shared HTTP client for making API requests
    pub fn new(api_key: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        }
    }

    /// Points the client at a different API root, such as a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes an HTTP request to the YouTube API with common error handling.
    ///
    /// This method consolidates the shared logic across all YouTube API requests:
    /// - URL construction from the base URL and endpoint
    /// - The `key` query parameter
    /// - Status code validation and error handling
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method to use
    /// * `endpoint` - The API resource path, e.g. `channels`
    /// * `query_params` - Query parameters besides the API key
    ///
    /// # Returns
    ///
    /// The raw [`reqwest::Response`] for method-specific JSON parsing.
    #[instrument(skip(self), level = tracing::Level::TRACE)]
    async fn make_request(
        &self,
        method: Method,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .request(method.clone(), &url)
            .query(query_params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("send {} request to YouTube API: {}", method, url))?;

        let status_code = response.status();
        if !status_code.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(eyre::eyre!(
                "YouTube API {} request failed with status {}: {}",
                method,
                status_code,
                error_text
            ));
        }

        Ok(response)
    }

    /// Gets the snippet and statistics of a single channel by its ID.
    ///
    /// Uses the `channels.list` API with `part=snippet,statistics`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(channel))` - The first channel YouTube returned for the ID
    /// * `Ok(None)` - No channel has that ID
    /// * `Err(_)` - The request failed or the response could not be parsed
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self), ret)]
    pub async fn get_channel(&self, channel_id: &str) -> eyre::Result<Option<Channel>> {
        let query_params = [("part", "snippet,statistics"), ("id", channel_id)];

        let response = self
            .make_request(Method::GET, "channels", &query_params)
            .await?;

        let mut channels: ChannelListResponse = response
            .json()
            .await
            .context("parse YouTube channels API response as JSON")?;

        tracing::debug!(
            total_results = channels.page_info.total_results,
            returned_items = channels.items.len(),
            "fetched channels"
        );

        Ok(channels.items.pop_front())
    }

    /// Searches for channels matching a free-text query.
    ///
    /// Uses the `search.list` API with `type=channel`. Only the first page is fetched, and
    /// results are returned in the order YouTube ranked them. Callers should still check
    /// [`SearchResult::channel_id`] since the `type` filter is advisory.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self))]
    pub async fn search_channels(&self, query: &str) -> eyre::Result<Vec<SearchResult>> {
        let query_params = [("part", "snippet"), ("q", query), ("type", "channel")];

        let response = self
            .make_request(Method::GET, "search", &query_params)
            .await?;

        let results: SearchListResponse = response
            .json()
            .await
            .context("parse YouTube search API response as JSON")?;

        tracing::debug!(
            total_results = results.page_info.total_results,
            returned_items = results.items.len(),
            "searched channels"
        );

        Ok(results.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> YouTubeClient {
        YouTubeClient::new("test-key", reqwest::Client::new()).with_base_url(server.uri())
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let yt = YouTubeClient::new("k", reqwest::Client::new())
            .with_base_url("http://localhost:1234/youtube/v3/");
        assert_eq!(yt.base_url(), "http://localhost:1234/youtube/v3");
    }

    #[test]
    fn debug_hides_api_key() {
        let yt = YouTubeClient::new("super-secret", reqwest::Client::new());
        assert!(!format!("{yt:?}").contains("super-secret"));
    }

    #[tokio::test]
    async fn get_channel_sends_id_and_key() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/channels"))
            .and(query_param("part", "snippet,statistics"))
            .and(query_param("id", "UCX6OQ3DkcsbYNE6H8uQQuVA"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "kind": "youtube#channelListResponse",
                "pageInfo": { "totalResults": 1, "resultsPerPage": 5 },
                "items": [{
                    "id": "UCX6OQ3DkcsbYNE6H8uQQuVA",
                    "snippet": { "title": "MrBeast" },
                    "statistics": { "subscriberCount": "1000", "viewCount": "5", "videoCount": "2" }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let channel = client(&server)
            .get_channel("UCX6OQ3DkcsbYNE6H8uQQuVA")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(channel.snippet.title, "MrBeast");
        assert_eq!(channel.statistics.unwrap().subscribers(), Some(1000));
    }

    #[tokio::test]
    async fn get_channel_without_items_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/channels"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "kind": "youtube#channelListResponse",
                "pageInfo": { "totalResults": 0, "resultsPerPage": 5 }
            })))
            .mount(&server)
            .await;

        let channel = client(&server).get_channel("UCnope").await.unwrap();
        assert!(channel.is_none());
    }

    #[tokio::test]
    async fn search_encodes_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Mark Rober & friends"))
            .and(query_param("type", "channel"))
            .and(query_param("part", "snippet"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "kind": "youtube#searchListResponse",
                "pageInfo": { "totalResults": 1, "resultsPerPage": 5 },
                "items": [{
                    "id": { "kind": "youtube#channel", "channelId": "UCY1kMZp36IQSyNx_9h4mpCg" }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let results = client(&server)
            .search_channels("Mark Rober & friends")
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].channel_id(), Some("UCY1kMZp36IQSyNx_9h4mpCg"));
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("quotaExceeded"))
            .mount(&server)
            .await;

        let err = client(&server).search_channels("anything").await.unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("403"), "{msg}");
        assert!(msg.contains("quotaExceeded"), "{msg}");
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = client(&server).get_channel("UCx").await.unwrap_err();
        assert!(format!("{err:#}").contains("parse YouTube channels API response"));
    }
}
