use crate::util::strip_control_chars;
use serde::Deserialize;
use std::sync::Arc;

/// Placeholder for document fields the store omitted.
pub const MISSING_FIELD: &str = "N/A";

/// A single headline as the application uses it.
///
/// String content is held behind `Arc<str>` so filtered views can clone
/// rows without copying the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub id: String,
    pub title: Arc<str>,
    pub link: Arc<str>,
    pub description: Arc<str>,
    pub category: Arc<str>,
    /// Publish time as unix seconds. Absent when the store document
    /// carried no date; such rows never match a selected day.
    pub published: Option<i64>,
}

/// Result of decoding one store response.
#[derive(Debug)]
pub struct FeedSnapshot {
    pub headlines: Vec<Headline>,
    /// Documents dropped because they carried no usable id.
    pub skipped: usize,
}

/// Wire shape of one document in the `/v1/headlines` array.
///
/// Every field except `id` is optional on the wire; missing text fields
/// decode to [`MISSING_FIELD`] so a partial document still renders.
#[derive(Debug, Deserialize)]
struct HeadlineDoc {
    id: Option<String>,
    #[serde(default = "missing_text")]
    title: String,
    #[serde(default = "missing_text")]
    link: String,
    #[serde(default = "missing_text")]
    description: String,
    #[serde(default = "missing_text")]
    category: String,
    date: Option<i64>,
}

fn missing_text() -> String {
    MISSING_FIELD.to_string()
}

fn clean(s: &str) -> Arc<str> {
    Arc::from(strip_control_chars(s).as_ref())
}

/// Decode a `/v1/headlines` response body.
///
/// Documents without an id cannot be bookmarked or deduplicated and are
/// dropped; the count of dropped documents is reported in the snapshot so
/// the caller can log it.
pub fn decode_headlines(body: &[u8]) -> Result<FeedSnapshot, serde_json::Error> {
    let docs: Vec<HeadlineDoc> = serde_json::from_slice(body)?;
    let total = docs.len();
    let headlines: Vec<Headline> = docs
        .into_iter()
        .filter_map(|doc| {
            let id = doc.id.filter(|id| !id.is_empty())?;
            Some(Headline {
                id,
                title: clean(&doc.title),
                link: Arc::from(doc.link.as_str()),
                description: clean(&doc.description),
                category: clean(&doc.category),
                published: doc.date,
            })
        })
        .collect();
    let skipped = total - headlines.len();
    Ok(FeedSnapshot { headlines, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_document() {
        let body = br#"[{
            "id": "a1",
            "title": "Markets rally",
            "link": "https://example.com/a1",
            "description": "Stocks climbed.",
            "category": "Business",
            "date": 1705276800
        }]"#;
        let snapshot = decode_headlines(body).unwrap();
        assert_eq!(snapshot.skipped, 0);
        assert_eq!(snapshot.headlines.len(), 1);
        let h = &snapshot.headlines[0];
        assert_eq!(h.id, "a1");
        assert_eq!(&*h.title, "Markets rally");
        assert_eq!(&*h.category, "Business");
        assert_eq!(h.published, Some(1705276800));
    }

    #[test]
    fn test_partial_document_gets_placeholders() {
        let body = br#"[{"id": "a2"}]"#;
        let snapshot = decode_headlines(body).unwrap();
        let h = &snapshot.headlines[0];
        assert_eq!(&*h.title, "N/A");
        assert_eq!(&*h.link, "N/A");
        assert_eq!(&*h.description, "N/A");
        assert_eq!(&*h.category, "N/A");
        assert_eq!(h.published, None);
    }

    #[test]
    fn test_null_date_decodes_as_absent() {
        let body = br#"[{"id": "a3", "date": null}]"#;
        let snapshot = decode_headlines(body).unwrap();
        assert_eq!(snapshot.headlines[0].published, None);
    }

    #[test]
    fn test_documents_without_id_are_skipped() {
        let body = br#"[
            {"title": "no id"},
            {"id": "", "title": "empty id"},
            {"id": "ok", "title": "kept"}
        ]"#;
        let snapshot = decode_headlines(body).unwrap();
        assert_eq!(snapshot.skipped, 2);
        assert_eq!(snapshot.headlines.len(), 1);
        assert_eq!(snapshot.headlines[0].id, "ok");
    }

    #[test]
    fn test_empty_array_is_not_an_error() {
        let snapshot = decode_headlines(b"[]").unwrap();
        assert!(snapshot.headlines.is_empty());
        assert_eq!(snapshot.skipped, 0);
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(decode_headlines(b"{not json").is_err());
        // An object where an array is expected also fails.
        assert!(decode_headlines(br#"{"id": "a1"}"#).is_err());
    }

    #[test]
    fn test_control_characters_stripped_from_text() {
        let body = b"[{\"id\": \"a4\", \"title\": \"Breaking\\u001b[31m news\\u0000\"}]";
        let snapshot = decode_headlines(body).unwrap();
        assert_eq!(&*snapshot.headlines[0].title, "Breaking news");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = br#"[{"id": "a5", "source": "wire", "rank": 3}]"#;
        let snapshot = decode_headlines(body).unwrap();
        assert_eq!(snapshot.headlines.len(), 1);
    }
}
