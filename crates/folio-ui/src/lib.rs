//! Presentational Leptos components for the portfolio site.
//!
//! Components here consume plain data objects and callbacks; routing and
//! content state live in the application crate. None of them perform I/O.

pub mod blog;
pub mod certifications;
pub mod experience;
pub mod icons;
pub mod marquee;
pub mod motion;
pub mod portfolio;
pub mod project;
pub mod section;

pub use blog::BlogSection;
pub use certifications::{Certification, CertificationsSection};
pub use experience::{Experience, ExperienceAccordion};
pub use icons::{ArrowRight, ChevronDown};
pub use marquee::Marquee;
pub use motion::MotionPreference;
pub use portfolio::PortfolioSection;
pub use project::ProjectDetail;
pub use section::SectionHeader;
