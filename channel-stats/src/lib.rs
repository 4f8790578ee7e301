use crate::youtube_api::{Channel, YouTubeClient};
use jiff::Timestamp;
use tracing::instrument;

pub mod format;
pub mod session;
pub mod youtube_api;

pub use session::{Phase, Session};

/// Shown when the query is empty.
pub const INVALID_QUERY_MESSAGE: &str = "Please enter a YouTube channel ID or name.";
/// Shown when neither lookup by ID nor search by name turned up a channel.
pub const NOT_FOUND_MESSAGE: &str =
    "No channels found for that name. Please try a different name or a channel ID.";
/// Shown for any failure talking to YouTube.
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "Failed to fetch data. Please check your input or network connection.";

/// Length of every YouTube channel ID.
const CHANNEL_ID_LEN: usize = 24;
const CHANNEL_ID_PREFIX: &str = "UC";

/// Identity and statistics of one resolved channel.
///
/// Counts are `None` when YouTube did not report them or reported something that isn't a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelStats {
    pub id: String,
    pub name: String,
    pub created: Option<Timestamp>,
    pub subscribers: Option<u64>,
    pub total_views: Option<u64>,
    pub video_count: Option<u64>,
}

impl From<Channel> for ChannelStats {
    fn from(channel: Channel) -> Self {
        let statistics = channel.statistics.unwrap_or_default();
        Self {
            subscribers: statistics.subscribers(),
            total_views: statistics.views(),
            video_count: statistics.videos(),
            id: channel.id,
            name: channel.snippet.title,
            created: channel.snippet.published_at,
        }
    }
}

/// The result of resolving one query.
#[derive(Debug)]
pub enum Resolution {
    Found(ChannelStats),
    NotFound,
    /// The query was empty; no request was made.
    InvalidQuery,
    TransportError(eyre::Report),
}

impl Resolution {
    /// The error banner text for this outcome, if it is an error.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Resolution::Found(_) => None,
            Resolution::NotFound => Some(NOT_FOUND_MESSAGE),
            Resolution::InvalidQuery => Some(INVALID_QUERY_MESSAGE),
            Resolution::TransportError(_) => Some(TRANSPORT_ERROR_MESSAGE),
        }
    }
}

impl From<eyre::Result<Option<ChannelStats>>> for Resolution {
    fn from(result: eyre::Result<Option<ChannelStats>>) -> Self {
        match result {
            Ok(Some(stats)) => Resolution::Found(stats),
            Ok(None) => Resolution::NotFound,
            Err(e) => Resolution::TransportError(e),
        }
    }
}

/// Whether `query` has the shape of a channel ID.
///
/// This is only a guess: a 24-character name starting with `UC` also passes.
pub fn looks_like_channel_id(query: &str) -> bool {
    query.starts_with(CHANNEL_ID_PREFIX) && query.chars().count() == CHANNEL_ID_LEN
}

/// Turns user input into a channel and its statistics.
#[derive(Debug, Clone)]
pub struct ChannelResolver {
    yt: YouTubeClient,
}

impl ChannelResolver {
    pub fn new(yt: YouTubeClient) -> Self {
        Self { yt }
    }

    /// Resolves `query` as a channel ID or, failing that, as a channel name.
    ///
    /// Queries shaped like a channel ID are looked up directly first. If that finds nothing,
    /// or the query isn't ID-shaped, the first channel in YouTube's name search results is
    /// looked up instead. At most two requests are made, one after the other.
    #[instrument(skip(self))]
    pub async fn resolve(&self, query: &str) -> Resolution {
        let query = query.trim();
        if query.is_empty() {
            return Resolution::InvalidQuery;
        }

        let resolution = Resolution::from(self.resolve_inner(query).await);
        match &resolution {
            Resolution::Found(stats) => {
                tracing::debug!(channel_id = stats.id, name = stats.name, "resolved channel");
            }
            Resolution::NotFound => tracing::debug!("no channel found"),
            Resolution::TransportError(e) => tracing::warn!("failed to resolve channel: {e:#}"),
            Resolution::InvalidQuery => {}
        }
        resolution
    }

    async fn resolve_inner(&self, query: &str) -> eyre::Result<Option<ChannelStats>> {
        if looks_like_channel_id(query) {
            if let Some(channel) = self.yt.get_channel(query).await? {
                return Ok(Some(channel.into()));
            }
            tracing::debug!("no channel with that ID, searching by name instead");
        }

        let results = self.yt.search_channels(query).await?;
        let Some(channel_id) = results.iter().find_map(|r| r.channel_id()) else {
            return Ok(None);
        };

        Ok(self.yt.get_channel(channel_id).await?.map(ChannelStats::from))
    }
}
