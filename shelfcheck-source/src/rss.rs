//! RSS search-feed parser.
//!
//! Library catalogs publish search results as an RSS 2.0 feed. Each
//! `<item>` carries the title, the creator (`dc:creator`) and a `format`
//! element. Only the first occurrence of each field per item is kept.

use quick_xml::events::{BytesText, Event};
use quick_xml::reader::Reader;
use shelfcheck_match::FeedItem;

use crate::error::SourceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeedField {
    Title,
    Creator,
    Format,
}

impl FeedField {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"title" => Some(Self::Title),
            b"dc:creator" => Some(Self::Creator),
            b"format" => Some(Self::Format),
            _ => None,
        }
    }

    fn tag(self) -> &'static [u8] {
        match self {
            Self::Title => b"title",
            Self::Creator => b"dc:creator",
            Self::Format => b"format",
        }
    }

    fn store(self, item: &mut FeedItem, text: &str) {
        if text.is_empty() {
            return;
        }
        let slot = match self {
            Self::Title => &mut item.title,
            Self::Creator => &mut item.creator,
            Self::Format => &mut item.format,
        };
        if slot.is_none() {
            *slot = Some(text.to_string());
        }
    }
}

/// Unescape text content, falling back to the raw bytes when the feed uses
/// entities XML does not define (`&nbsp;` and friends).
fn unescape_lossy(text: &BytesText<'_>) -> String {
    match text.unescape() {
        Ok(t) => t.into_owned(),
        Err(_) => String::from_utf8_lossy(text).into_owned(),
    }
}

/// Parse an RSS feed body into its items.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedItem>, SourceError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut current: Option<FeedItem> = None;
    let mut field: Option<FeedField> = None;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"item" => {
                    current = Some(FeedItem::default());
                    field = None;
                }
                name if current.is_some() && field.is_none() => {
                    field = FeedField::from_tag(name);
                    text.clear();
                }
                _ => {}
            },
            Event::Text(e) => {
                if field.is_some() {
                    text.push_str(&unescape_lossy(&e));
                }
            }
            Event::CData(e) => {
                if field.is_some() {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"item" => {
                    if let Some(item) = current.take() {
                        items.push(item);
                    }
                    field = None;
                }
                name => {
                    if let (Some(f), Some(item)) = (field, current.as_mut()) {
                        if f.tag() == name {
                            f.store(item, text.trim());
                            field = None;
                        }
                    }
                }
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Search results</title>
    <item>
      <title>Pride and Prejudice</title>
      <dc:creator>Austen, Jane</dc:creator>
      <format>eBook</format>
    </item>
    <item>
      <title><![CDATA[Emma & Persuasion]]></title>
      <dc:creator>Austen, Jane</dc:creator>
      <format>Book</format>
      <format>eBook</format>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_items_and_skips_channel_title() {
        let items = parse_feed(FEED).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("Pride and Prejudice"));
        assert_eq!(items[0].creator.as_deref(), Some("Austen, Jane"));
        assert_eq!(items[0].format.as_deref(), Some("eBook"));
    }

    #[test]
    fn cdata_and_first_occurrence() {
        let items = parse_feed(FEED).unwrap();
        assert_eq!(items[1].title.as_deref(), Some("Emma & Persuasion"));
        assert_eq!(items[1].format.as_deref(), Some("Book"));
    }

    #[test]
    fn escaped_entities_are_decoded() {
        let xml = "<rss><channel><item><title>Salt &amp; Pepper</title></item></channel></rss>";
        let items = parse_feed(xml).unwrap();
        assert_eq!(items[0].title.as_deref(), Some("Salt & Pepper"));
        assert!(items[0].creator.is_none());
    }

    #[test]
    fn unknown_entities_fall_back_to_raw_text() {
        let xml = "<rss><channel><item><title>A&nbsp;Title</title></item></channel></rss>";
        let items = parse_feed(xml).unwrap();
        assert_eq!(items[0].title.as_deref(), Some("A&nbsp;Title"));
    }

    #[test]
    fn empty_feed_has_no_items() {
        let xml = "<rss><channel><title>Nothing</title></channel></rss>";
        assert!(parse_feed(xml).unwrap().is_empty());
    }

    #[test]
    fn mismatched_tags_are_an_error() {
        let xml = "<rss><channel><item><title>Broken</item></channel></rss>";
        assert!(parse_feed(xml).is_err());
    }
}
