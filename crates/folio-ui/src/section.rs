//! Numbered section header.

use leptos::prelude::*;

/// Header with a section number and an oversized title.
#[component]
pub fn SectionHeader(
    /// Section title.
    #[prop(into)]
    title: String,
    /// One-based section number, rendered zero-padded.
    number: u8,
) -> impl IntoView {
    view! {
      <div class="flex items-baseline gap-4 mb-12 border-b border-gray-200 pb-4">
        <span class="font-grotesk text-sm md:text-lg font-bold text-blue-600">
          {format!("(0{number})")}
        </span>
        <h2 class="font-syne text-4xl md:text-6xl font-bold uppercase tracking-tighter text-black">
          {title}
        </h2>
      </div>
    }
}
