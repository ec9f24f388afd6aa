//! Portfolio grid and cards.

use folio_core::PortfolioItem;
use leptos::prelude::*;

use crate::motion::MotionPreference;
use crate::section::SectionHeader;

/// Portfolio section: header plus a responsive card grid.
#[component]
pub fn PortfolioSection(
    /// Projects in display order.
    projects: Signal<Vec<PortfolioItem>>,
    /// Base path of the current deployment, prepended to internal links.
    base_path: String,
    /// Called with an internal detail-page path when a routed card is
    /// clicked.
    #[prop(into)]
    on_navigate: Callback<String>,
) -> impl IntoView {
    let base_path = StoredValue::new(base_path);

    view! {
      <section id="portfolio" class="relative z-10 px-4 py-20 max-w-6xl mx-auto">
        <SectionHeader title="Portfolio" number=3 />
        <div class="grid md:grid-cols-3 gap-8">
          <For
            each=move || { projects.get().into_iter().enumerate().collect::<Vec<_>>() }
            key=|(index, item)| (*index, item.slug.clone())
            children=move |(_, item)| {
              view! {
                <PortfolioCard item=item base_path=base_path.get_value() on_navigate=on_navigate />
              }
            }
          />

        </div>
      </section>
    }
}

/// One project card.
///
/// Cards with a slug navigate client-side to their detail page; cards
/// without one fall back to their external link in a new tab.
#[component]
fn PortfolioCard(
    /// The project to display.
    item: PortfolioItem,
    /// Base path for internal links.
    base_path: String,
    /// Client-side navigation callback.
    #[prop(into)]
    on_navigate: Callback<String>,
) -> impl IntoView {
    let motion = MotionPreference::from_context();
    let internal_path = item.detail_path(&base_path);

    let href = internal_path.clone().unwrap_or_else(|| {
        if item.link.is_empty() {
            "#".to_string()
        } else {
            item.link.clone()
        }
    });
    let target = if internal_path.is_some() { "_self" } else { "_blank" };

    let nav_path = internal_path.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(path) = &nav_path {
            ev.prevent_default();
            on_navigate.run(path.clone());
        }
    };

    let has_image = !item.image_url.is_empty();
    let image_url = item.image_url.clone();
    let image_alt = item.title.clone();
    let tags = item.tags.clone();

    view! {
      <a href=href target=target rel="noopener noreferrer" class="block group" on:click=on_click>
        <div class=format!(
          "glass-panel p-4 rounded-2xl h-full flex flex-col transition-all duration-300 hover:border-blue-500 hover:shadow-md {}",
          motion.hover_lift_class(),
        )>
          <div class="h-48 mb-4 overflow-hidden rounded-xl bg-gray-100 relative">
            <Show
              when=move || has_image
              fallback=|| {
                view! {
                  <div class="w-full h-full flex items-center justify-center text-gray-400 font-syne text-xl font-bold uppercase bg-gray-50">
                    "Project Image"
                  </div>
                }
              }
            >
              <img
                src=image_url.clone()
                alt=image_alt.clone()
                class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
              />
            </Show>
            <div class="absolute inset-0 bg-black/0 transition-colors duration-300 group-hover:bg-black/5"></div>
          </div>
          <h3 class="font-syne text-2xl font-bold mb-2 text-black group-hover:text-blue-600 transition-colors">
            {item.title.clone()}
          </h3>
          <p class="font-grotesk text-gray-700 mb-4 flex-grow">{item.description.clone()}</p>
          <div class="flex flex-wrap gap-2 mt-auto">
            {tags
              .into_iter()
              .map(|tag| {
                view! {
                  <span class="font-mono text-xs px-2 py-1 bg-gray-100 rounded-full text-gray-600">
                    {tag}
                  </span>
                }
              })
              .collect_view()}
          </div>
        </div>
      </a>
    }
}
