use feed_rs::parser;
use html_escape::decode_html_entities;
use tracing::warn;

use crate::app::{CedarError, Result};
use crate::domain::Entry;

#[derive(Clone)]
pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode a raw feed document into entries, preserving document order.
    pub fn decode(&self, body: &[u8]) -> Result<Vec<Entry>> {
        let feed = parser::parse(body).map_err(|e| CedarError::Decode(e.to_string()))?;

        let mut entries = Vec::with_capacity(feed.entries.len());
        for entry in feed.entries {
            let link = entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default();

            // Some feeds omit the id element; fall back to the link.
            let id = if entry.id.is_empty() {
                link.clone()
            } else {
                entry.id
            };

            if id.is_empty() {
                warn!("Skipping feed entry with neither id nor link");
                continue;
            }

            let title = entry
                .title
                .map(|t| decode_html_entities(&t.content).to_string())
                .unwrap_or_default();

            entries.push(Entry { id, title, link });
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATOM_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>News</title>
  <entry>
    <title>First announcement</title>
    <link href="https://example.org/news/first"/>
    <id>tag:example.org,2024:news-1</id>
    <updated>2024-01-01T00:00:00Z</updated>
  </entry>
  <entry>
    <title>Second &amp; final</title>
    <link href="https://example.org/news/second"/>
    <id>tag:example.org,2024:news-2</id>
    <updated>2024-01-02T00:00:00Z</updated>
  </entry>
</feed>"#;

    const RSS_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>News</title>
    <description>A news feed</description>
    <item>
      <title>Item without guid</title>
      <link>https://example.org/item1</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_decode_atom() {
        let entries = Decoder::new().decode(ATOM_SAMPLE.as_bytes()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "tag:example.org,2024:news-1");
        assert_eq!(entries[0].title, "First announcement");
        assert_eq!(entries[0].link, "https://example.org/news/first");
        assert_eq!(entries[1].title, "Second & final");
    }

    #[test]
    fn test_decode_preserves_document_order() {
        let entries = Decoder::new().decode(ATOM_SAMPLE.as_bytes()).unwrap();
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            ["tag:example.org,2024:news-1", "tag:example.org,2024:news-2"]
        );
    }

    #[test]
    fn test_decode_rss_falls_back_to_link_id() {
        let entries = Decoder::new().decode(RSS_SAMPLE.as_bytes()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "https://example.org/item1");
    }

    #[test]
    fn test_decode_empty_feed() {
        let empty = r#"<?xml version="1.0"?>
<feed xmlns="http://www.w3.org/2005/Atom"><title>Empty</title></feed>"#;
        let entries = Decoder::new().decode(empty.as_bytes()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_decode_malformed() {
        let result = Decoder::new().decode(b"this is not a feed");
        assert!(matches!(result, Err(CedarError::Decode(_))));
    }
}
