//! Raw Contentful payload shapes.
//!
//! Every field the normalizer reads is optional here; defaulting happens
//! in exactly one pass at this trust boundary and never again deeper in
//! the view layer. One `EntryFields` struct covers both content models —
//! a blog entry simply leaves the portfolio-only fields unset.

use serde::Deserialize;

/// Top-level shape of the delivery API entries response.
#[derive(Debug, Default, Deserialize)]
pub struct EntriesResponse {
    /// Entries in source order; the order is the display order.
    #[serde(default)]
    pub items: Vec<Entry>,

    /// Linked resources included with `include=1`.
    #[serde(default)]
    pub includes: Includes,
}

/// One content entry.
#[derive(Debug, Default, Deserialize)]
pub struct Entry {
    /// Field map; missing entirely for malformed entries.
    #[serde(default)]
    pub fields: EntryFields,
}

/// The union of fields the two content models may carry.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFields {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub slug: Option<String>,
    pub date: Option<String>,
    pub published_at: Option<String>,
    pub excerpt: Option<String>,
    pub image: Option<AssetLink>,
}

/// Reference from an entry to an included asset.
#[derive(Debug, Default, Deserialize)]
pub struct AssetLink {
    #[serde(default)]
    pub sys: Sys,
}

/// System metadata; only the id is read.
#[derive(Debug, Default, Deserialize)]
pub struct Sys {
    pub id: Option<String>,
}

/// The `includes` block of an entries response.
#[derive(Debug, Default, Deserialize)]
pub struct Includes {
    /// Included assets, keyed `Asset` on the wire.
    #[serde(rename = "Asset", default)]
    pub assets: Vec<Asset>,
}

/// One included asset.
#[derive(Debug, Default, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub sys: Sys,

    #[serde(default)]
    pub fields: AssetFields,
}

/// Asset field map; only the file URL is read.
#[derive(Debug, Default, Deserialize)]
pub struct AssetFields {
    pub file: Option<AssetFile>,
}

/// File descriptor of an asset.
#[derive(Debug, Default, Deserialize)]
pub struct AssetFile {
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes() {
        let response: EntriesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
        assert!(response.includes.assets.is_empty());
    }

    #[test]
    fn test_entry_with_sparse_fields() {
        let response: EntriesResponse =
            serde_json::from_str(r#"{"items": [{"fields": {"title": "Hi"}}, {}]}"#).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].fields.title.as_deref(), Some("Hi"));
        assert!(response.items[1].fields.title.is_none());
        assert!(response.items[0].fields.tags.is_empty());
    }

    #[test]
    fn test_includes_asset_shape() {
        let json = r#"{
            "items": [],
            "includes": {
                "Asset": [
                    {"sys": {"id": "a1"}, "fields": {"file": {"url": "//img.test/x.png"}}}
                ]
            }
        }"#;
        let response: EntriesResponse = serde_json::from_str(json).unwrap();
        let asset = &response.includes.assets[0];
        assert_eq!(asset.sys.id.as_deref(), Some("a1"));
        assert_eq!(
            asset.fields.file.as_ref().and_then(|f| f.url.as_deref()),
            Some("//img.test/x.png")
        );
    }
}
