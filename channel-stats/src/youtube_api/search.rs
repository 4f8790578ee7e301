//! YouTube Search API types.

use crate::youtube_api::types::{CHANNEL_KIND, PageInfo};
use serde::{Deserialize, Serialize};

/// Response structure for the `search.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#searchListResponse`.
    pub kind: String,
    /// A list of results that match the search criteria, in the order YouTube ranked them.
    #[serde(default)]
    pub items: Vec<SearchResult>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A search result contains information about a YouTube video, channel, or playlist
/// that matches the search parameters.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Identifies the resource that matched the search request.
    pub id: ResourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<SearchResultSnippet>,
}

impl SearchResult {
    /// The channel ID, if this result is a channel.
    pub fn channel_id(&self) -> Option<&str> {
        if self.id.kind == CHANNEL_KIND {
            self.id.channel_id.as_deref()
        } else {
            None
        }
    }
}

/// Identifies the resource that matched a search.
///
/// Exactly one of the `*_id` fields is set, depending on `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceId {
    /// The type of the API resource, e.g. `youtube#channel`.
    pub kind: String,
    #[serde(rename = "channelId", default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(rename = "videoId", default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(rename = "playlistId", default, skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultSnippet {
    /// The title of the search result.
    pub title: String,
    #[serde(rename = "channelTitle", default, skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
}
