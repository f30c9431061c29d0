use super::model::{Channel, FeedItem};
use crate::util::sanitize::sanitize_for_terminal;
use serde::Serialize;

/// Apply `--limit`: a positive limit keeps that many leading items, anything
/// else keeps them all.
pub fn truncate(items: &[FeedItem], limit: Option<i64>) -> &[FeedItem] {
    match limit {
        Some(n) if n > 0 => {
            let n = usize::try_from(n).unwrap_or(usize::MAX);
            &items[..items.len().min(n)]
        }
        _ => items,
    }
}

/// Render items as text blocks or as a pretty JSON array.
pub fn format(items: &[FeedItem], limit: Option<i64>, as_json: bool) -> String {
    let items = truncate(items, limit);
    if as_json {
        to_pretty_json(&items)
    } else {
        render_items(items)
    }
}

/// Like [`format`], with the channel metadata in front of the items.
pub fn format_channel(channel: &Channel, limit: Option<i64>, as_json: bool) -> String {
    let items = truncate(&channel.items, limit);
    if as_json {
        return to_pretty_json(&ChannelView::new(channel, items));
    }

    let mut out = vec![
        format!("Feed: {}", sanitize_for_terminal(&channel.title)),
        format!("Link: {}", sanitize_for_terminal(&channel.link)),
    ];
    let optional = [
        ("Last Build Date", channel.last_build_date.clone()),
        ("Publish Date", channel.published_at.clone()),
        ("Language", channel.language.clone()),
        ("Categories", channel.categories.join(", ")),
        ("Editor", channel.managing_editor.clone()),
        ("Description", channel.description.clone()),
    ];
    for (label, value) in optional {
        if !value.is_empty() {
            out.push(format!("{label}: {}", sanitize_for_terminal(&value)));
        }
    }
    if !items.is_empty() {
        out.push(String::new());
        out.push(render_items(items));
    }
    out.join("\n")
}

fn render_items(items: &[FeedItem]) -> String {
    items
        .iter()
        .map(render_item)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_item(item: &FeedItem) -> String {
    let categories = item
        .categories
        .iter()
        .map(|c| sanitize_for_terminal(c))
        .collect::<Vec<_>>()
        .join(", ");
    [
        format!("Title: {}", sanitize_for_terminal(&item.title)),
        format!("Description: {}", sanitize_for_terminal(&item.description)),
        format!("Published: {}", sanitize_for_terminal(&item.published_at)),
        format!("Link: {}", sanitize_for_terminal(&item.link)),
        format!("Author: {}", sanitize_for_terminal(&item.author)),
        format!("Categories: {categories}"),
    ]
    .join("\n")
}

// `Channel` with its items already truncated.
#[derive(Serialize)]
struct ChannelView<'a> {
    title: &'a str,
    link: &'a str,
    description: &'a str,
    language: &'a str,
    last_build_date: &'a str,
    published_at: &'a str,
    managing_editor: &'a str,
    categories: &'a [String],
    items: &'a [FeedItem],
}

impl<'a> ChannelView<'a> {
    fn new(channel: &'a Channel, items: &'a [FeedItem]) -> Self {
        ChannelView {
            title: &channel.title,
            link: &channel.link,
            description: &channel.description,
            language: &channel.language,
            last_build_date: &channel.last_build_date,
            published_at: &channel.published_at,
            managing_editor: &channel.managing_editor,
            categories: &channel.categories,
            items,
        }
    }
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    // Plain structs of strings always serialize.
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> FeedItem {
        FeedItem {
            title: title.into(),
            ..FeedItem::default()
        }
    }

    #[test]
    fn empty_json_is_bare_array() {
        assert_eq!(format(&[], None, true), "[]");
    }

    #[test]
    fn empty_text_is_empty() {
        assert_eq!(format(&[], Some(3), false), "");
    }

    #[test]
    fn limit_keeps_prefix() {
        let items = vec![item("a"), item("b"), item("c")];
        assert_eq!(truncate(&items, Some(2)).len(), 2);
        assert_eq!(truncate(&items, Some(10)).len(), 3);
        assert_eq!(truncate(&items, Some(0)).len(), 3);
        assert_eq!(truncate(&items, Some(-4)).len(), 3);
        assert_eq!(truncate(&items, None).len(), 3);
        assert_eq!(truncate(&items, Some(1))[0].title, "a");
    }

    #[test]
    fn text_block_has_every_line_in_order() {
        let it = FeedItem {
            title: "Hello".into(),
            link: "http://x".into(),
            ..FeedItem::default()
        };
        assert_eq!(
            format(&[it], None, false),
            "Title: Hello\nDescription: \nPublished: \nLink: http://x\nAuthor: \nCategories: "
        );
    }

    #[test]
    fn blocks_are_separated_by_one_blank_line() {
        let out = format(&[item("a"), item("b")], None, false);
        assert_eq!(out.matches("\n\n").count(), 1);
        assert!(out.starts_with("Title: a\n"));
        assert!(out.contains("\n\nTitle: b\n"));
    }

    #[test]
    fn json_objects_have_exactly_the_six_keys() {
        let it = FeedItem {
            categories: vec!["x".into(), "y".into()],
            ..item("a")
        };
        let out = format(&[it], None, true);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let obj = parsed.as_array().unwrap()[0].as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["author", "categories", "description", "link", "published_at", "title"]
        );
        assert_eq!(obj["categories"], serde_json::json!(["x", "y"]));
    }

    #[test]
    fn text_mode_neutralises_escape_sequences() {
        let out = format(&[item("\x1b[2Jboom\nline")], None, false);
        assert!(out.starts_with("Title: boom line\n"));
    }

    #[test]
    fn channel_json_truncates_items() {
        let ch = Channel {
            title: "News".into(),
            items: vec![item("a"), item("b")],
            ..Channel::default()
        };
        let parsed: serde_json::Value =
            serde_json::from_str(&format_channel(&ch, Some(1), true)).unwrap();
        assert!(parsed.is_object());
        assert_eq!(parsed["title"], "News");
        assert_eq!(parsed["items"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn channel_text_skips_empty_metadata() {
        let ch = Channel {
            title: "News".into(),
            link: "http://news".into(),
            language: "en".into(),
            items: vec![item("a")],
            ..Channel::default()
        };
        let out = format_channel(&ch, None, false);
        assert!(out.starts_with("Feed: News\nLink: http://news\nLanguage: en\n\nTitle: a\n"));
        assert!(!out.contains("Editor:"));
    }
}
