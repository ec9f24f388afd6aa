//! Core types and logic for the portfolio site.
//!
//! Everything in this crate is pure and host-independent: route parsing,
//! slug derivation, CMS configuration, and the bundled fallback content.
//! The wasm-facing crates build on top of it; keeping this layer free of
//! browser APIs means it can be tested on any target.

pub mod config;
pub mod content;
pub mod route;
pub mod slug;

pub use config::CmsConfig;
pub use content::{fallback_posts, fallback_projects, find_by_slug, BlogPost, PortfolioItem};
pub use route::{base_path_from_path, parse_route, Route};
pub use slug::slug_from_link;
