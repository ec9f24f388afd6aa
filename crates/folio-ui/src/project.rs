//! Project detail view.

use folio_core::PortfolioItem;
use leptos::prelude::*;

use crate::icons::ArrowRight;

/// Detail view for the routed project.
///
/// `project` is the first item matching the routed slug, or `None` when
/// the slug resolves to nothing — the collections may have been replaced
/// by a CMS load since the link was minted, so "not found" is a normal
/// state, not an error.
#[component]
pub fn ProjectDetail(
    /// The resolved project, if any.
    project: Signal<Option<PortfolioItem>>,
) -> impl IntoView {
    view! {
      {move || match project.get() {
        None => {
          view! {
            <section class="relative z-10 px-4 py-24 max-w-4xl mx-auto text-center">
              <p class="font-syne text-3xl font-bold mb-4 text-black">"Project not found"</p>
              <p class="font-grotesk text-gray-700">
                "This project may have been moved or unpublished."
              </p>
            </section>
          }
            .into_any()
        }
        Some(project) => {
          let has_image = !project.image_url.is_empty();
          let has_link = !project.link.is_empty() && project.link != "#";
          let image_url = project.image_url.clone();
          let image_alt = project.title.clone();
          let link = project.link.clone();

          view! {
            <section class="relative z-10 px-4 py-16 max-w-5xl mx-auto">
              <p class="font-mono text-xs text-gray-500 mb-4 uppercase tracking-wide">"Project"</p>
              <h1 class="font-syne text-4xl md:text-6xl font-bold text-black mb-6">
                {project.title.clone()}
              </h1>
              <p class="font-grotesk text-lg md:text-xl text-gray-700 leading-relaxed mb-8">
                {project.description.clone()}
              </p>
              <Show when=move || has_image>
                <img
                  src=image_url.clone()
                  alt=image_alt.clone()
                  class="w-full rounded-2xl mb-8 shadow-lg"
                />
              </Show>
              <div class="flex flex-wrap gap-2 mb-6">
                {project
                  .tags
                  .iter()
                  .map(|tag| {
                    view! {
                      <span class="font-mono text-xs px-3 py-1 bg-gray-100 rounded-full text-gray-600">
                        {tag.clone()}
                      </span>
                    }
                  })
                  .collect_view()}
              </div>
              <Show when=move || has_link>
                <a
                  href=link.clone()
                  target="_blank"
                  rel="noopener noreferrer"
                  class="inline-flex items-center gap-2 font-grotesk font-semibold text-blue-600 hover:underline"
                >
                  "Visit project " <ArrowRight class="w-4 h-4" />
                </a>
              </Show>
            </section>
          }
            .into_any()
        }
      }}
    }
}
