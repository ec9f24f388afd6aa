//! Composition root for the portfolio single-page app.
//!
//! Owns the application state, the hand-rolled router (base-path aware
//! path parsing, history push, popstate resync), and the one-per-load
//! CMS fetch. Views are composed from `folio-ui` components.

pub mod browser;
pub mod config;
pub mod data;
pub mod home;
pub mod state;

use folio_core::{base_path_from_path, find_by_slug, PortfolioItem, Route};
use folio_ui::{MotionPreference, ProjectDetail};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Title};

use crate::home::HomePage;
use crate::state::AppState;

/// Application root.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Animation capability is decided once, here, and handed down via
    // context; components never query the platform themselves.
    let motion = if browser::prefers_reduced_motion() {
        MotionPreference::Reduced
    } else {
        MotionPreference::Animated
    };
    provide_context(motion);

    let state = AppState::new(browser::initial_path());
    let base_path = base_path_from_path(&browser::pathname()).to_string();

    // Back/forward resynchronizes the path; this listener is the only
    // mutation of the path outside navigate().
    let popstate = window_event_listener(leptos::ev::popstate, move |_| {
        state.location_synced(browser::current_location_path());
    });
    on_cleanup(move || popstate.remove());

    // One outbound load per application start. Failures are logged and
    // absorbed; whatever is on screen stays on screen.
    let cms_config = config::from_window();
    if cms_config.has_credentials() {
        spawn_local(async move {
            match folio_cms::load_content(&cms_config).await {
                Ok(loaded) => state.content_loaded(loaded),
                Err(err) => log::error!("CMS fetch error: {err}"),
            }
        });
    } else {
        log::info!("no CMS credentials configured; showing bundled content");
    }

    let route = Memo::new(move |_| state.route());
    let detail_project = Signal::derive(move || match route.get() {
        Route::ProjectDetail { slug } => find_by_slug(&state.projects().get(), &slug).cloned(),
        Route::Home => None,
    });

    let on_navigate = Callback::new(move |path: String| state.navigate(&path));

    let home_base = base_path.clone();
    view! {
      <Title text="Luca Deluca — Data Scientist" />
      {move || match route.get() {
        Route::Home => {
          view! {
            <HomePage state=state base_path=home_base.clone() on_navigate=on_navigate />
          }
            .into_any()
        }
        Route::ProjectDetail { .. } => {
          view! {
            <ProjectPage
              project=detail_project
              base_path=base_path.clone()
              on_navigate=on_navigate
            />
          }
            .into_any()
        }
      }}
    }
}

/// Project detail page: slim nav with a back link plus the detail view.
#[component]
fn ProjectPage(
    /// The project resolved from the routed slug, if any.
    project: Signal<Option<PortfolioItem>>,
    /// Base path of the current deployment.
    base_path: String,
    /// Client-side navigation callback.
    #[prop(into)]
    on_navigate: Callback<String>,
) -> impl IntoView {
    let home_path = if base_path.is_empty() {
        "/".to_string()
    } else {
        base_path
    };
    let back_path = home_path.clone();

    view! {
      <div class="relative min-h-screen bg-white">
        <nav class="fixed top-0 left-0 w-full p-6 flex justify-between items-center z-50 bg-white/80 backdrop-blur-md border-b border-gray-100">
          <a href=home_path.clone() class="font-syne font-bold text-xl tracking-tighter text-black">
            "Luca Deluca"
          </a>
          <a
            href="#"
            on:click=move |ev: web_sys::MouseEvent| {
              ev.prevent_default();
              on_navigate.run(back_path.clone());
            }
            class="font-grotesk text-sm border-2 border-black px-4 py-2 rounded-full hover:bg-black hover:text-white transition-colors font-bold"
          >
            "Back to Home"
          </a>
        </nav>
        <div class="pt-24">
          <ProjectDetail project=project />
        </div>
      </div>
    }
}
