//! Contentful boundary for the portfolio site.
//!
//! `payload` holds the raw response shapes, `normalize` is the single
//! defaulting pass that turns them into view-layer collections, and
//! `client` fetches both collections concurrently. Failures stay inside
//! this boundary: the caller logs them and keeps whatever content it was
//! already showing.

pub mod client;
pub mod error;
pub mod normalize;
pub mod payload;

pub use client::{load_content, LoadedContent};
pub use error::{CmsError, Result};
