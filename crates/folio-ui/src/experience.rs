//! Work-experience accordion.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::motion::MotionPreference;

/// One entry in the work-experience accordion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Role title.
    pub role: String,

    /// Employer name.
    pub company: String,

    /// Free-form period, e.g. "05/2025 – Current".
    pub period: String,

    /// Free-form location.
    pub location: String,

    /// Bullet points shown when the entry is open.
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl Experience {
    /// Create a new experience entry.
    pub fn new(
        role: impl Into<String>,
        company: impl Into<String>,
        period: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            company: company.into(),
            period: period.into(),
            location: location.into(),
            bullets: Vec::new(),
        }
    }

    /// Set the bullet points.
    pub fn with_bullets(mut self, bullets: Vec<String>) -> Self {
        self.bullets = bullets;
        self
    }
}

/// Accordion of experience entries; at most one entry is open.
///
/// Selection is owned by the caller: `on_select` reports the clicked
/// index and `active` says which entry, if any, is currently open.
#[component]
pub fn ExperienceAccordion(
    /// The entries in display order.
    items: Vec<Experience>,
    /// Index of the open entry, if any.
    active: Signal<Option<usize>>,
    /// Called with the index of a clicked entry.
    #[prop(into)]
    on_select: Callback<usize>,
) -> impl IntoView {
    let items = StoredValue::new(items);

    view! {
      <div class="space-y-4">
        <For
          each=move || 0..items.get_value().len()
          key=|index| *index
          children=move |index| {
            let item = items.get_value()[index].clone();
            let is_open = Memo::new(move |_| active.get() == Some(index));
            view! {
              <ExperienceItem
                item=item
                is_open=Signal::from(is_open)
                on_select=move |()| on_select.run(index)
              />
            }
          }
        />

      </div>
    }
}

/// One collapsible experience card.
#[component]
fn ExperienceItem(
    /// The entry to display.
    item: Experience,
    /// Whether this entry is open.
    is_open: Signal<bool>,
    /// Called when the card is clicked.
    #[prop(into)]
    on_select: Callback<()>,
) -> impl IntoView {
    let motion = MotionPreference::from_context();
    let bullets = StoredValue::new(item.bullets.clone());

    view! {
      <div
        class="mb-4 glass-panel p-6 rounded-2xl cursor-pointer transition-all duration-500 overflow-hidden hover:bg-white/80 hover:shadow-sm"
        class:open=is_open
        on:click=move |_| on_select.run(())
      >
        <div class="flex flex-col md:flex-row justify-between md:items-center mb-2">
          <div>
            <h3 class="font-syne text-2xl font-bold text-black">{item.role.clone()}</h3>
            <p class="font-grotesk text-lg text-gray-700 font-semibold">{item.company.clone()}</p>
          </div>
          <div class="text-right md:text-left mt-2 md:mt-0">
            <p class="font-grotesk text-sm font-mono text-gray-600">{item.period.clone()}</p>
            <p class="font-grotesk text-sm text-gray-500">{item.location.clone()}</p>
          </div>
        </div>

        <Show
          when=move || is_open.get()
          fallback=|| {
            view! {
              <div class="flex justify-center mt-2">
                <span class="text-xs font-mono uppercase tracking-widest opacity-50 text-gray-500">
                  "Click to expand"
                </span>
              </div>
            }
          }
        >
          <div class=format!(
            "mt-6 font-grotesk text-gray-800 leading-relaxed {}",
            motion.entrance_class(),
          )>
            <ul class="list-disc pl-5 space-y-2">
              <For
                each=move || bullets.get_value()
                key=|bullet| bullet.clone()
                children=move |bullet| view! { <li class="pl-2">{bullet}</li> }
              />

            </ul>
          </div>
        </Show>
      </div>
    }
}
