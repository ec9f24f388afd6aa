//! Content records consumed by the view layer.
//!
//! Items are created wholesale — either from the bundled fallback
//! collections below or from a normalization pass over CMS JSON — and
//! replaced wholesale on a successful load. There is no incremental
//! mutation.

use serde::{Deserialize, Serialize};

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    /// Project title.
    pub title: String,

    /// Short description shown on the card and detail page.
    pub description: String,

    /// Tags in display order (source order is significant).
    pub tags: Vec<String>,

    /// External link, or the `"#"` placeholder.
    pub link: String,

    /// Resolved image URL; empty when the entry has no resolvable image.
    pub image_url: String,

    /// Routing key for the project detail page. May be empty, in which
    /// case the card only links externally.
    pub slug: String,
}

impl PortfolioItem {
    /// Internal detail-page path for this project under `base_path`,
    /// or `None` when the item has no slug to route on.
    pub fn detail_path(&self, base_path: &str) -> Option<String> {
        if self.slug.is_empty() {
            None
        } else {
            Some(format!("{base_path}/projects/{}", self.slug))
        }
    }
}

/// A blog post teaser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Post title.
    pub title: String,

    /// Free-form display date; never parsed.
    pub date: String,

    /// Teaser text.
    pub excerpt: String,

    /// Link to the full post, or the `"#"` placeholder.
    pub link: String,

    /// Optional header image URL; empty when absent.
    pub image_url: String,
}

/// First project whose slug equals `slug`.
///
/// Slugs are not deduplicated anywhere, so with colliding slugs the first
/// entry in display order wins. An empty slug never matches, even against
/// items that have none.
pub fn find_by_slug<'a>(items: &'a [PortfolioItem], slug: &str) -> Option<&'a PortfolioItem> {
    if slug.is_empty() {
        return None;
    }
    items.iter().find(|item| item.slug == slug)
}

/// Bundled projects shown until (and unless) live content arrives.
pub fn fallback_projects() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem {
            title: "Transport Demand Forecasting".to_string(),
            description: "An end-to-end ML pipeline to forecast global transport demand, \
                          deployed on Microsoft Fabric."
                .to_string(),
            tags: vec![
                "PySpark".to_string(),
                "MS Fabric".to_string(),
                "Machine Learning".to_string(),
            ],
            link: "#".to_string(),
            image_url: "https://picsum.photos/seed/project1/400/300".to_string(),
            slug: "transport-demand-forecasting".to_string(),
        },
        PortfolioItem {
            title: "AI-Powered Anomaly Detection".to_string(),
            description: "Real-time anomaly detection system for logistics data using Azure \
                          OpenAI and SynapseML."
                .to_string(),
            tags: vec![
                "Azure OpenAI".to_string(),
                "SynapseML".to_string(),
                "Real-time".to_string(),
            ],
            link: "#".to_string(),
            image_url: "https://picsum.photos/seed/project2/400/300".to_string(),
            slug: "ai-powered-anomaly-detection".to_string(),
        },
        PortfolioItem {
            title: "Logistics Control Tower Dashboard".to_string(),
            description: "A unified Power BI dashboard providing real-time visibility into \
                          global supply chain performance."
                .to_string(),
            tags: vec![
                "Power BI".to_string(),
                "Data Visualization".to_string(),
                "SQL".to_string(),
            ],
            link: "#".to_string(),
            image_url: "https://picsum.photos/seed/project3/400/300".to_string(),
            slug: "logistics-control-tower-dashboard".to_string(),
        },
    ]
}

/// Bundled blog posts shown until (and unless) live content arrives.
pub fn fallback_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            title: "Leveraging Microsoft Fabric for Enterprise Data Solutions".to_string(),
            date: "October 25, 2025".to_string(),
            excerpt: "Exploration of how Microsoft Fabric unifies data engineering, data \
                      science, and real-time analytics into a single, cohesive platform."
                .to_string(),
            link: "#".to_string(),
            image_url: String::new(),
        },
        BlogPost {
            title: "Implementing GenAI Agents in Transport Operations".to_string(),
            date: "September 12, 2025".to_string(),
            excerpt: "A case study on using Azure OpenAI to build autonomous agents for root \
                      cause analysis in logistics."
                .to_string(),
            link: "#".to_string(),
            image_url: String::new(),
        },
        BlogPost {
            title: "Best Practices for PySpark on Large-Scale Datasets".to_string(),
            date: "August 5, 2025".to_string(),
            excerpt: "Tips and tricks for optimizing PySpark jobs for performance and \
                      cost-efficiency in a cloud environment."
                .to_string(),
            link: "#".to_string(),
            image_url: String::new(),
        },
    ]
}
