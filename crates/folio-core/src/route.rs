//! Route derivation from location paths.
//!
//! The same bundle is served from the site root and from a one-segment
//! prefixed deployment; `base_path_from_path` recognizes the prefix and
//! `parse_route` strips it before matching. Both functions are pure and
//! total: any input string maps to exactly one route, no error case.

use percent_encoding::percent_decode_str;

/// First path segment that selects the alternate deployment namespace.
pub const ALT_DEPLOY_SEGMENT: &str = "personal";

/// Base path of the alternate deployment.
pub const ALT_DEPLOY_BASE: &str = "/personal";

/// The view selected by the current location.
///
/// Derived from the path string on every navigation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The single-page home view.
    Home,

    /// Detail view for one portfolio project, keyed by slug.
    ProjectDetail {
        /// Percent-decoded routing key.
        slug: String,
    },
}

/// Base path prefix for a location path.
///
/// Returns [`ALT_DEPLOY_BASE`] when the first segment is the alternate
/// deployment marker, otherwise the empty string. Only the pathname part
/// is inspected: anything from the first `?` or `#` on is ignored, so a
/// query string on the bare base path cannot defeat detection.
pub fn base_path_from_path(path: &str) -> &'static str {
    let pathname = path.split(['?', '#']).next().unwrap_or(path);
    let first = pathname.split('/').find(|segment| !segment.is_empty());
    if first == Some(ALT_DEPLOY_SEGMENT) {
        ALT_DEPLOY_BASE
    } else {
        ""
    }
}

/// Derives the route for a path string.
///
/// The path may still carry a query string or fragment; splitting is on
/// `/` only, so those stay attached to the final segment exactly as the
/// browser-held path would. `/projects/<slug>` (under the optional base
/// path) selects the detail view; everything else is home.
pub fn parse_route(path: &str) -> Route {
    let base = base_path_from_path(path);
    let local = if !base.is_empty() && path.starts_with(base) {
        &path[base.len()..]
    } else {
        path
    };

    let mut segments = local.split('/').filter(|segment| !segment.is_empty());
    if segments.next() == Some("projects") {
        if let Some(raw) = segments.next() {
            return Route::ProjectDetail {
                slug: decode_segment(raw),
            };
        }
    }
    Route::Home
}

/// Percent-decodes a path segment, degrading to the raw segment when the
/// encoded bytes are not valid UTF-8.
fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_home() {
        assert_eq!(parse_route("/"), Route::Home);
        assert_eq!(parse_route(""), Route::Home);
    }

    #[test]
    fn test_project_detail() {
        assert_eq!(
            parse_route("/projects/foo"),
            Route::ProjectDetail {
                slug: "foo".to_string()
            }
        );
    }

    #[test]
    fn test_project_detail_under_base_path() {
        assert_eq!(
            parse_route("/personal/projects/bar"),
            Route::ProjectDetail {
                slug: "bar".to_string()
            }
        );
    }

    #[test]
    fn test_base_path_alone_is_home() {
        assert_eq!(parse_route("/personal"), Route::Home);
        assert_eq!(parse_route("/personal/"), Route::Home);
    }

    #[test]
    fn test_projects_without_slug_is_home() {
        assert_eq!(parse_route("/projects"), Route::Home);
        assert_eq!(parse_route("/projects/"), Route::Home);
    }

    #[test]
    fn test_slug_is_percent_decoded() {
        assert_eq!(
            parse_route("/projects/my%20slug"),
            Route::ProjectDetail {
                slug: "my slug".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_encoding_degrades_to_raw_segment() {
        // %FF is not valid UTF-8 once decoded; the raw text is kept.
        assert_eq!(
            parse_route("/projects/bad%FFslug"),
            Route::ProjectDetail {
                slug: "bad%FFslug".to_string()
            }
        );
    }

    #[test]
    fn test_base_path_detection() {
        assert_eq!(base_path_from_path("/personal/projects/x"), "/personal");
        assert_eq!(base_path_from_path("/personal"), "/personal");
        assert_eq!(base_path_from_path("/projects/x"), "");
        assert_eq!(base_path_from_path(""), "");
        assert_eq!(base_path_from_path("//personal//x"), "/personal");
    }

    #[test]
    fn test_base_path_detection_ignores_query_and_fragment() {
        assert_eq!(base_path_from_path("/personal?utm_source=x"), "/personal");
        assert_eq!(base_path_from_path("/personal#top"), "/personal");
        assert_eq!(base_path_from_path("/?p=personal"), "");
    }

    #[test]
    fn test_parse_route_is_idempotent() {
        for path in ["/", "/projects/foo", "/personal/projects/bar", "garbage"] {
            assert_eq!(parse_route(path), parse_route(path));
        }
    }

    #[test]
    fn test_arbitrary_input_never_panics() {
        for path in [
            "////",
            "/projects//",
            "not a path at all",
            "/personal/personal/projects/x",
            "/a?b=c#d",
            "\u{0}\u{1}",
        ] {
            // Every input maps to one of the two variants.
            match parse_route(path) {
                Route::Home | Route::ProjectDetail { .. } => {}
            }
        }
    }

    #[test]
    fn test_query_and_fragment_stay_attached_to_segment() {
        // Matches the browser-held path semantics: split on '/' only.
        assert_eq!(
            parse_route("/projects/foo?tab=1"),
            Route::ProjectDetail {
                slug: "foo?tab=1".to_string()
            }
        );
    }
}
