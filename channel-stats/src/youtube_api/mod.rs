//! YouTube Data API v3 client library.
//!
//! Covers the two public, API-key authorized endpoints needed to resolve a channel:
//!
//! - [`channels`]: `channels.list` by ID, returning the channel's snippet and statistics.
//! - [`search`]: `search.list` restricted to channels, used to turn a free-text name into
//!   a channel ID.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use channel_stats::youtube_api::YouTubeClient;
//!
//! # async fn example() -> eyre::Result<()> {
//! let client = YouTubeClient::new("my-api-key", reqwest::Client::new());
//!
//! for result in client.search_channels("MrBeast").await? {
//!     if let Some(id) = result.channel_id() {
//!         if let Some(channel) = client.get_channel(id).await? {
//!             println!("{} ({})", channel.snippet.title, channel.id);
//!         }
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod client;
pub mod search;
pub mod types;

// Re-export main types for convenience
pub use client::{DEFAULT_BASE_URL, YouTubeClient};
pub use types::{CHANNEL_KIND, PageInfo};

pub use channels::{Channel, ChannelSnippet, ChannelStatistics};
pub use search::{ResourceId, SearchResult};
