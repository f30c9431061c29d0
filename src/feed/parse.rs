use super::model::{Channel, FeedItem};
use crate::error::{FeedError, Result};
use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

const DUBLIN_CORE_NS: &str = "http://purl.org/dc/elements/1.1/";

/// Parse an RSS 2.0 document into its items, in document order.
pub fn parse(xml: &str) -> Result<Vec<FeedItem>> {
    parse_channel(xml).map(|channel| channel.items)
}

/// Parse an RSS 2.0 document into channel metadata plus items.
///
/// The whole document is parsed before anything is extracted, so a
/// malformed document never yields a partial item list.
pub fn parse_channel(xml: &str) -> Result<Channel> {
    let xml = xml.trim_start_matches('\u{feff}');
    let opts = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, opts)?;

    let channel = child(doc.root_element(), "channel")
        .ok_or_else(|| FeedError::MalformedFeed("missing <channel> element".into()))?;

    let items: Vec<FeedItem> = children(channel, "item").map(parse_item).collect();
    debug!(items = items.len(), "parsed channel");

    Ok(Channel {
        title: child_text(channel, "title"),
        link: child_text(channel, "link"),
        description: child_text(channel, "description"),
        language: child_text(channel, "language"),
        last_build_date: child_text(channel, "lastBuildDate"),
        published_at: child_text(channel, "pubDate"),
        managing_editor: child_text(channel, "managingEditor"),
        categories: children(channel, "category").map(text_of).collect(),
        items,
    })
}

fn parse_item(item: Node<'_, '_>) -> FeedItem {
    let mut author = child_text(item, "author");
    if author.is_empty() {
        author = item
            .children()
            .find(|n| n.is_element() && n.has_tag_name((DUBLIN_CORE_NS, "creator")))
            .map(text_of)
            .unwrap_or_default();
    }
    FeedItem {
        title: child_text(item, "title"),
        link: child_text(item, "link"),
        description: child_text(item, "description"),
        published_at: child_text(item, "pubDate"),
        author,
        categories: children(item, "category").map(text_of).collect(),
    }
}

// RSS elements carry no namespace; this keeps `<atom:link>` from being
// taken for `<link>`.
fn is_rss_element(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().namespace().is_none() && node.tag_name().name() == name
}

fn children<'a, 'input: 'a>(
    parent: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    parent.children().filter(move |n| is_rss_element(n, name))
}

fn child<'a, 'input: 'a>(parent: Node<'a, 'input>, name: &'a str) -> Option<Node<'a, 'input>> {
    children(parent, name).next()
}

fn child_text(parent: Node<'_, '_>, name: &str) -> String {
    child(parent, name).map(text_of).unwrap_or_default()
}

/// All text under `node` (CDATA included), trimmed and entity-decoded.
fn text_of(node: Node<'_, '_>) -> String {
    let raw: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    html_escape::decode_html_entities(raw.trim()).into_owned()
}
