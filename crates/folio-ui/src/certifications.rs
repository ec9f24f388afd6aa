//! Certifications grid.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::section::SectionHeader;

/// One certification card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// Certification title.
    pub title: String,

    /// Issuer and date line, e.g. "Coursera • 06/2023".
    pub issued: String,

    /// Short description.
    pub description: String,

    /// Accent border class for the card, e.g. "border-green-400".
    pub accent: String,
}

impl Certification {
    /// Create a new certification card.
    pub fn new(
        title: impl Into<String>,
        issued: impl Into<String>,
        description: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            issued: issued.into(),
            description: description.into(),
            accent: accent.into(),
        }
    }
}

/// Certifications section: header plus a two-column card grid.
#[component]
pub fn CertificationsSection(
    /// Cards in display order.
    items: Vec<Certification>,
) -> impl IntoView {
    view! {
      <section id="certifications" class="relative z-10 px-4 py-20 max-w-6xl mx-auto mb-20">
        <SectionHeader title="Certifications" number=5 />
        <div class="grid md:grid-cols-2 gap-8">
          {items
            .into_iter()
            .map(|cert| {
              view! {
                <div class=format!(
                  "glass-panel p-8 rounded-2xl hover:scale-[1.02] transition-transform duration-300 border-l-8 {} bg-white shadow-sm",
                  cert.accent,
                )>
                  <h3 class="font-syne text-2xl font-bold mb-2 text-black">{cert.title}</h3>
                  <p class="font-mono text-sm mb-4 text-gray-600">{cert.issued}</p>
                  <p class="font-grotesk text-gray-700">{cert.description}</p>
                </div>
              }
            })
            .collect_view()}
        </div>
      </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certification_builder() {
        let cert = Certification::new("Cert", "Issuer • 2024", "Description", "border-green-400");
        assert_eq!(cert.title, "Cert");
        assert_eq!(cert.accent, "border-green-400");
    }

    #[test]
    fn test_certification_serialization() {
        let cert = Certification::new("Cert", "Issuer", "Desc", "border-orange-400");
        let json = serde_json::to_string(&cert).unwrap();
        assert!(json.contains("\"title\":\"Cert\""));
    }
}
