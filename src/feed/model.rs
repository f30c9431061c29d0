use serde::Serialize;

/// One `<item>` of an RSS channel. Missing elements are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Raw `pubDate` text, passed through as the feed wrote it.
    pub published_at: String,
    pub author: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    pub last_build_date: String,
    pub published_at: String,
    pub managing_editor: String,
    pub categories: Vec<String>,
    pub items: Vec<FeedItem>,
}
