//! Scrolling skill marquee.

use leptos::prelude::*;

use crate::motion::MotionPreference;

/// Tilted marquee band cycling through the given items.
///
/// Items are repeated three times so the scroll loop never shows a gap;
/// with reduced motion the band simply stands still.
#[component]
pub fn Marquee(
    /// Items to cycle through.
    items: Vec<String>,
) -> impl IntoView {
    let motion = MotionPreference::from_context();
    let repeated: Vec<String> = items
        .iter()
        .cycle()
        .take(items.len().saturating_mul(3))
        .cloned()
        .collect();

    view! {
      <div class="relative w-full overflow-hidden bg-black py-4 md:py-6 transform -rotate-1 border-y-4 border-blue-500 shadow-xl my-16">
        <div class=format!("flex whitespace-nowrap {}", motion.marquee_class())>
          {repeated
            .into_iter()
            .map(|item| {
              view! {
                <span class="mx-8 text-2xl md:text-4xl font-syne font-bold text-white uppercase tracking-widest flex items-center">
                  {item} <span class="text-blue-500 ml-8 text-sm">"✦"</span>
                </span>
              }
            })
            .collect_view()}
        </div>
      </div>
    }
}
