//! Inline SVG icons.

use leptos::prelude::*;

/// Right-pointing arrow icon.
#[component]
pub fn ArrowRight(
    /// CSS classes applied to the svg element.
    #[prop(default = String::new(), into)]
    class: String,
) -> impl IntoView {
    view! {
      <svg
        xmlns="http://www.w3.org/2000/svg"
        width="24"
        height="24"
        viewBox="0 0 24 24"
        fill="none"
        stroke="currentColor"
        stroke-width="2"
        stroke-linecap="round"
        stroke-linejoin="round"
        class=class
      >
        <path d="M5 12h14"></path>
        <path d="m12 5 7 7-7 7"></path>
      </svg>
    }
}

/// Downward chevron icon.
#[component]
pub fn ChevronDown(
    /// CSS classes applied to the svg element.
    #[prop(default = String::new(), into)]
    class: String,
) -> impl IntoView {
    view! {
      <svg
        xmlns="http://www.w3.org/2000/svg"
        width="24"
        height="24"
        viewBox="0 0 24 24"
        fill="none"
        stroke="currentColor"
        stroke-width="2"
        stroke-linecap="round"
        stroke-linejoin="round"
        class=class
      >
        <path d="m6 9 6 6 6-6"></path>
      </svg>
    }
}
