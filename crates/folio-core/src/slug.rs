//! Slug derivation for portfolio entries that carry a link but no slug.

use url::Url;

/// Base used to resolve relative links. Only path segments are read from
/// the parse result, so the host never shows up in a slug.
const RELATIVE_BASE: &str = "https://folio.invalid/";

/// Derives a short identifier from a URL-like string.
///
/// The link is parsed as a WHATWG URL (relative inputs resolved against a
/// private base). A path segment literally equal to `projects` followed by
/// another segment yields that following segment — the canonical slug
/// position — otherwise the last non-empty segment wins. Inputs that fail
/// URL parsing fall back to a naive `/` split of the raw string. Total:
/// returns an empty string rather than failing when nothing usable exists.
pub fn slug_from_link(link: &str) -> String {
    if link.is_empty() {
        return String::new();
    }

    let parsed = Url::parse(link).or_else(|_| {
        Url::parse(RELATIVE_BASE).and_then(|base| base.join(link))
    });

    match parsed {
        Ok(url) => {
            let segments: Vec<&str> = url
                .path()
                .split('/')
                .filter(|segment| !segment.is_empty())
                .collect();
            if let Some(position) = segments.iter().position(|s| *s == "projects") {
                if let Some(next) = segments.get(position + 1) {
                    return (*next).to_string();
                }
            }
            segments.last().map(|s| (*s).to_string()).unwrap_or_default()
        }
        Err(_) => link
            .split('/')
            .filter(|segment| !segment.is_empty())
            .next_back()
            .map(str::to_string)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_projects_position() {
        assert_eq!(
            slug_from_link("https://x.test/a/projects/my-slug"),
            "my-slug"
        );
    }

    #[test]
    fn test_projects_segment_with_trailing_content() {
        assert_eq!(
            slug_from_link("https://x.test/projects/my-slug/extra"),
            "my-slug"
        );
    }

    #[test]
    fn test_relative_path_uses_last_segment() {
        assert_eq!(slug_from_link("/a/b/c"), "c");
    }

    #[test]
    fn test_trailing_slash_ignored() {
        assert_eq!(slug_from_link("https://x.test/a/b/"), "b");
    }

    #[test]
    fn test_projects_as_final_segment_is_not_special() {
        assert_eq!(slug_from_link("https://x.test/a/projects"), "projects");
    }

    #[test]
    fn test_empty_input_yields_empty_slug() {
        assert_eq!(slug_from_link(""), "");
    }

    #[test]
    fn test_rootless_inputs_yield_empty_slug() {
        assert_eq!(slug_from_link("https://x.test/"), "");
        assert_eq!(slug_from_link("#"), "");
    }

    #[test]
    fn test_malformed_input_never_panics() {
        // Spaces get percent-encoded by the URL parser, exactly as a
        // browser would resolve the same relative reference.
        assert_eq!(slug_from_link("not a url###"), "not%20a%20url");
    }

    #[test]
    fn test_unparseable_absolute_url_falls_back_to_naive_split() {
        // An unterminated IPv6 host fails WHATWG parsing outright.
        assert_eq!(slug_from_link("http://[::1/a/b"), "b");
    }

    #[test]
    fn test_query_and_fragment_are_not_part_of_the_slug() {
        assert_eq!(
            slug_from_link("https://x.test/projects/demo?ref=home#top"),
            "demo"
        );
    }
}
