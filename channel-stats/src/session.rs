//! View state for one user looking up channels, one query at a time.

use crate::{ChannelResolver, ChannelStats, Resolution};

/// Where a [`Session`] is in the query lifecycle.
///
/// `Idle -> Searching -> {Found, NotFound, TransportError, ValidationError}`, and the next
/// submission goes straight back to `Searching`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Searching,
    Found,
    NotFound,
    TransportError,
    ValidationError,
}

/// What the user currently sees: the last query, its statistics or its error, and whether a
/// lookup is in flight.
///
/// Statistics and error are replaced together, so the displayed values always come from a
/// single resolution.
#[derive(Debug, Default)]
pub struct Session {
    query: String,
    stats: Option<ChannelStats>,
    error: Option<&'static str>,
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The results panel contents; only set after a successful lookup.
    pub fn stats(&self) -> Option<&ChannelStats> {
        self.stats.as_ref()
    }

    /// The error banner text; only set after a failed lookup.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Whether a new query may be submitted.
    pub fn can_submit(&self) -> bool {
        self.phase != Phase::Searching
    }

    /// Starts a new query, clearing the previous results.
    ///
    /// Returns `false` without touching any state if a query is already in flight.
    pub fn begin(&mut self, query: &str) -> bool {
        if !self.can_submit() {
            tracing::debug!(query, "ignoring submission while a lookup is in flight");
            return false;
        }
        self.query = query.to_string();
        self.stats = None;
        self.error = None;
        self.phase = Phase::Searching;
        true
    }

    /// Commits the outcome of the in-flight query.
    pub fn finish(&mut self, resolution: Resolution) {
        self.error = resolution.message();
        (self.phase, self.stats) = match resolution {
            Resolution::Found(stats) => (Phase::Found, Some(stats)),
            Resolution::NotFound => (Phase::NotFound, None),
            Resolution::InvalidQuery => (Phase::ValidationError, None),
            Resolution::TransportError(_) => (Phase::TransportError, None),
        };
    }

    /// Resolves `query` and records the outcome.
    ///
    /// Returns the resulting phase, or [`Phase::Searching`] if the submission was ignored
    /// because another one is still in flight.
    pub async fn submit(&mut self, resolver: &ChannelResolver, query: &str) -> Phase {
        if !self.begin(query) {
            return self.phase;
        }
        let resolution = resolver.resolve(query).await;
        self.finish(resolution);
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube_api::YouTubeClient;
    use crate::{NOT_FOUND_MESSAGE, TRANSPORT_ERROR_MESSAGE};
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn stats(name: &str) -> ChannelStats {
        ChannelStats {
            id: "UCX6OQ3DkcsbYNE6H8uQQuVA".to_string(),
            name: name.to_string(),
            created: None,
            subscribers: Some(1),
            total_views: Some(2),
            video_count: Some(3),
        }
    }

    #[test]
    fn starts_idle() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.can_submit());
        assert!(session.stats().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn only_one_query_in_flight() {
        let mut session = Session::new();
        assert!(session.begin("first"));
        assert_eq!(session.phase(), Phase::Searching);
        assert!(!session.can_submit());

        assert!(!session.begin("second"));
        assert_eq!(session.query(), "first");

        session.finish(Resolution::NotFound);
        assert!(session.begin("second"));
        assert_eq!(session.query(), "second");
    }

    #[test]
    fn new_query_clears_previous_results() {
        let mut session = Session::new();
        session.begin("a");
        session.finish(Resolution::Found(stats("a")));
        assert_eq!(session.stats().map(|s| s.name.as_str()), Some("a"));

        session.begin("b");
        assert!(session.stats().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn errors_replace_stats() {
        let mut session = Session::new();
        session.begin("a");
        session.finish(Resolution::Found(stats("a")));

        session.begin("b");
        session.finish(Resolution::TransportError(eyre::eyre!("boom")));
        assert_eq!(session.phase(), Phase::TransportError);
        assert_eq!(session.error(), Some(TRANSPORT_ERROR_MESSAGE));
        assert!(session.stats().is_none());

        session.begin("c");
        session.finish(Resolution::Found(stats("c")));
        assert_eq!(session.phase(), Phase::Found);
        assert_eq!(session.error(), None);
        assert_eq!(session.stats(), Some(&stats("c")));
    }

    #[tokio::test]
    async fn submit_runs_whole_lifecycle() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "kind": "youtube#searchListResponse",
                "items": []
            })))
            .expect(2)
            .mount(&server)
            .await;
        let resolver = ChannelResolver::new(
            YouTubeClient::new("test-key", reqwest::Client::new()).with_base_url(server.uri()),
        );

        let mut session = Session::new();
        assert_eq!(session.submit(&resolver, "   ").await, Phase::ValidationError);

        assert_eq!(
            session.submit(&resolver, "zzzznonexistentxyz").await,
            Phase::NotFound
        );
        assert_eq!(session.error(), Some(NOT_FOUND_MESSAGE));
        assert!(session.stats().is_none());

        // same query against the same data gives the same outcome
        assert_eq!(
            session.submit(&resolver, "zzzznonexistentxyz").await,
            Phase::NotFound
        );
        assert_eq!(session.error(), Some(NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn repeated_lookup_shows_same_stats() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/channels"))
            .and(query_param("id", "UCX6OQ3DkcsbYNE6H8uQQuVA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "kind": "youtube#channelListResponse",
                "items": [{
                    "id": "UCX6OQ3DkcsbYNE6H8uQQuVA",
                    "snippet": { "title": "PewDiePie", "publishedAt": "2010-04-29T10:54:00Z" },
                    "statistics": {
                        "subscriberCount": "110000000",
                        "viewCount": "29000000000",
                        "videoCount": "4700"
                    }
                }]
            })))
            .expect(2)
            .mount(&server)
            .await;
        let resolver = ChannelResolver::new(
            YouTubeClient::new("test-key", reqwest::Client::new()).with_base_url(server.uri()),
        );

        let mut session = Session::new();
        assert_eq!(
            session.submit(&resolver, "UCX6OQ3DkcsbYNE6H8uQQuVA").await,
            Phase::Found
        );
        let first = session.stats().cloned();
        assert!(first.is_some());

        assert_eq!(
            session.submit(&resolver, "UCX6OQ3DkcsbYNE6H8uQQuVA").await,
            Phase::Found
        );
        assert_eq!(session.stats().cloned(), first);
        assert_eq!(session.error(), None);
    }
}
