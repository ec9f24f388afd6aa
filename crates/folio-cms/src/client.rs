//! HTTP client for the Contentful delivery API.

use folio_core::{BlogPost, CmsConfig, PortfolioItem};
use gloo_net::http::Request;
use log::debug;

use crate::error::{CmsError, Result};
use crate::normalize::{normalize_posts, normalize_projects};
use crate::payload::EntriesResponse;

/// Contentful CDN host.
const CDN_HOST: &str = "https://cdn.contentful.com";

/// One load's worth of live content, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedContent {
    /// Portfolio projects in display order.
    pub projects: Vec<PortfolioItem>,

    /// Blog posts in display order.
    pub posts: Vec<BlogPost>,
}

/// Entries endpoint URL for one content type, requesting one level of
/// linked-entry inclusion.
pub(crate) fn entries_url(config: &CmsConfig, content_type: &str) -> String {
    format!(
        "{CDN_HOST}/spaces/{}/environments/{}/entries?content_type={}&include=1",
        config.space_id, config.environment, content_type
    )
}

/// Fetches and decodes one entries collection.
async fn fetch_entries(config: &CmsConfig, content_type: &str) -> Result<EntriesResponse> {
    let url = entries_url(config, content_type);
    debug!("fetching CMS entries: content_type={content_type}");

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", config.token))
        .send()
        .await
        .map_err(|err| CmsError::Request(err.to_string()))?;

    if !response.ok() {
        return Err(CmsError::Http {
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|err| CmsError::Request(err.to_string()))?;
    Ok(serde_json::from_str(&body)?)
}

/// Fetches both collections concurrently and normalizes them.
///
/// The two fetches are joined: if either fails the whole load fails and
/// the caller keeps its current collections, so a partial replacement can
/// never happen. Called once per application start, never retried.
pub async fn load_content(config: &CmsConfig) -> Result<LoadedContent> {
    let (portfolio, blog) = futures::future::try_join(
        fetch_entries(config, &config.portfolio_content_type),
        fetch_entries(config, &config.blog_content_type),
    )
    .await?;

    Ok(LoadedContent {
        projects: normalize_projects(&portfolio),
        posts: normalize_posts(&blog),
    })
}
