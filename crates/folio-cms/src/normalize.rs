//! Normalization of CMS payloads into view-layer collections.
//!
//! This is the only place raw entry fields are defaulted. Output order
//! preserves source order, which the view layer uses as display order.

use std::collections::HashMap;

use folio_core::{slug_from_link, BlogPost, PortfolioItem};

use crate::payload::{EntriesResponse, EntryFields, Includes};

const DEFAULT_PROJECT_TITLE: &str = "Untitled Project";
const DEFAULT_POST_TITLE: &str = "Untitled Post";
const PLACEHOLDER_LINK: &str = "#";

/// Builds the asset id → URL map from the `includes.Asset` list.
///
/// Assets missing an id or a file URL are skipped silently.
/// Protocol-relative URLs (`//host/...`) are upgraded to explicit https.
pub fn asset_map(includes: &Includes) -> HashMap<String, String> {
    let mut assets = HashMap::new();
    for asset in &includes.assets {
        let id = asset.sys.id.as_ref();
        let url = asset.fields.file.as_ref().and_then(|file| file.url.as_ref());
        let (Some(id), Some(url)) = (id, url) else {
            continue;
        };
        let resolved = if url.starts_with("//") {
            format!("https:{url}")
        } else {
            url.clone()
        };
        assets.insert(id.clone(), resolved);
    }
    assets
}

/// Reshapes a portfolio entries response into display-ready items.
pub fn normalize_projects(response: &EntriesResponse) -> Vec<PortfolioItem> {
    let assets = asset_map(&response.includes);
    response
        .items
        .iter()
        .map(|entry| {
            let fields = &entry.fields;
            let link = fields
                .link
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_LINK.to_string());
            let slug = match fields.slug.as_deref() {
                Some(slug) if !slug.is_empty() => slug.to_string(),
                _ => slug_from_link(fields.link.as_deref().unwrap_or_default()),
            };
            PortfolioItem {
                title: fields
                    .title
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PROJECT_TITLE.to_string()),
                description: fields.description.clone().unwrap_or_default(),
                tags: fields.tags.clone(),
                link,
                image_url: resolve_image(fields, &assets),
                slug,
            }
        })
        .collect()
}

/// Reshapes a blog entries response into display-ready posts.
pub fn normalize_posts(response: &EntriesResponse) -> Vec<BlogPost> {
    let assets = asset_map(&response.includes);
    response
        .items
        .iter()
        .map(|entry| {
            let fields = &entry.fields;
            BlogPost {
                title: fields
                    .title
                    .clone()
                    .unwrap_or_else(|| DEFAULT_POST_TITLE.to_string()),
                date: fields
                    .date
                    .clone()
                    .or_else(|| fields.published_at.clone())
                    .unwrap_or_default(),
                excerpt: fields.excerpt.clone().unwrap_or_default(),
                link: fields
                    .link
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER_LINK.to_string()),
                image_url: resolve_image(fields, &assets),
            }
        })
        .collect()
}

/// Resolved URL for the entry's image reference, empty when the entry has
/// no reference or the referenced asset was not included.
fn resolve_image(fields: &EntryFields, assets: &HashMap<String, String>) -> String {
    fields
        .image
        .as_ref()
        .and_then(|image| image.sys.id.as_ref())
        .and_then(|id| assets.get(id))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> EntriesResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_asset_map_upgrades_protocol_relative_urls() {
        let response = parse(
            r#"{
                "items": [],
                "includes": {"Asset": [
                    {"sys": {"id": "a"}, "fields": {"file": {"url": "//img.test/a.png"}}},
                    {"sys": {"id": "b"}, "fields": {"file": {"url": "https://img.test/b.png"}}}
                ]}
            }"#,
        );
        let assets = asset_map(&response.includes);
        assert_eq!(assets["a"], "https://img.test/a.png");
        assert_eq!(assets["b"], "https://img.test/b.png");
    }

    #[test]
    fn test_asset_map_skips_incomplete_assets() {
        let response = parse(
            r#"{
                "items": [],
                "includes": {"Asset": [
                    {"sys": {}, "fields": {"file": {"url": "//img.test/lost.png"}}},
                    {"sys": {"id": "no-url"}, "fields": {}},
                    {"sys": {"id": "ok"}, "fields": {"file": {"url": "//img.test/ok.png"}}}
                ]}
            }"#,
        );
        let assets = asset_map(&response.includes);
        assert_eq!(assets.len(), 1);
        assert!(assets.contains_key("ok"));
    }

    #[test]
    fn test_missing_title_gets_documented_default() {
        let projects = normalize_projects(&parse(r#"{"items": [{"fields": {}}]}"#));
        assert_eq!(projects[0].title, "Untitled Project");
        assert_eq!(projects[0].description, "");
        assert_eq!(projects[0].link, "#");
        assert!(projects[0].tags.is_empty());

        let posts = normalize_posts(&parse(r#"{"items": [{"fields": {}}]}"#));
        assert_eq!(posts[0].title, "Untitled Post");
        assert_eq!(posts[0].date, "");
    }

    #[test]
    fn test_dangling_image_reference_yields_no_image() {
        let projects = normalize_projects(&parse(
            r#"{
                "items": [{"fields": {"title": "P", "image": {"sys": {"id": "missing"}}}}],
                "includes": {"Asset": []}
            }"#,
        ));
        assert_eq!(projects[0].image_url, "");
    }

    #[test]
    fn test_image_resolution_through_asset_map() {
        let projects = normalize_projects(&parse(
            r#"{
                "items": [{"fields": {"title": "P", "image": {"sys": {"id": "a"}}}}],
                "includes": {"Asset": [
                    {"sys": {"id": "a"}, "fields": {"file": {"url": "//cdn.test/p.png"}}}
                ]}
            }"#,
        ));
        assert_eq!(projects[0].image_url, "https://cdn.test/p.png");
    }

    #[test]
    fn test_explicit_slug_wins_over_link_derivation() {
        let projects = normalize_projects(&parse(
            r#"{"items": [{"fields": {"slug": "explicit", "link": "https://x.test/projects/derived"}}]}"#,
        ));
        assert_eq!(projects[0].slug, "explicit");
    }

    #[test]
    fn test_empty_slug_falls_back_to_link_derivation() {
        let projects = normalize_projects(&parse(
            r#"{"items": [
                {"fields": {"slug": "", "link": "https://x.test/projects/derived"}},
                {"fields": {"link": "/a/b/c"}}
            ]}"#,
        ));
        assert_eq!(projects[0].slug, "derived");
        assert_eq!(projects[1].slug, "c");
    }

    #[test]
    fn test_blog_date_falls_back_to_published_at() {
        let posts = normalize_posts(&parse(
            r#"{"items": [
                {"fields": {"date": "May 1, 2025", "publishedAt": "ignored"}},
                {"fields": {"publishedAt": "2025-05-02"}}
            ]}"#,
        ));
        assert_eq!(posts[0].date, "May 1, 2025");
        assert_eq!(posts[1].date, "2025-05-02");
    }

    #[test]
    fn test_source_order_is_preserved() {
        let projects = normalize_projects(&parse(
            r#"{"items": [
                {"fields": {"title": "First"}},
                {"fields": {"title": "Second"}},
                {"fields": {"title": "Third"}}
            ]}"#,
        ));
        let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_tag_order_is_preserved() {
        let projects = normalize_projects(&parse(
            r#"{"items": [{"fields": {"tags": ["z", "a", "m"]}}]}"#,
        ));
        assert_eq!(projects[0].tags, ["z", "a", "m"]);
    }

    #[test]
    fn test_empty_items_normalizes_to_empty_collection() {
        assert!(normalize_projects(&parse(r#"{"items": []}"#)).is_empty());
        assert!(normalize_posts(&parse("{}")).is_empty());
    }
}
