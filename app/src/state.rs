//! Application state record and its transitions.

use folio_cms::LoadedContent;
use folio_core::{fallback_posts, fallback_projects, parse_route, BlogPost, PortfolioItem, Route};
use leptos::prelude::*;

use crate::browser;

/// Top-level application state.
///
/// Route state and content state are independent: views read both at
/// render time and content may briefly lag a freshly navigated route.
/// All mutation goes through the transition methods below; nothing else
/// writes these signals.
#[derive(Clone, Copy)]
pub struct AppState {
    path: RwSignal<String>,
    projects: RwSignal<Vec<PortfolioItem>>,
    posts: RwSignal<Vec<BlogPost>>,
    active_experience: RwSignal<Option<usize>>,
}

impl AppState {
    /// Startup state: bundled fallback content, the given initial path,
    /// and the first experience entry open.
    pub fn new(initial_path: String) -> Self {
        Self {
            path: RwSignal::new(initial_path),
            projects: RwSignal::new(fallback_projects()),
            posts: RwSignal::new(fallback_posts()),
            active_experience: RwSignal::new(Some(0)),
        }
    }

    /// Current full path (pathname + search + hash).
    pub fn path(&self) -> Signal<String> {
        self.path.into()
    }

    /// Projects currently shown; never empty.
    pub fn projects(&self) -> Signal<Vec<PortfolioItem>> {
        self.projects.into()
    }

    /// Posts currently shown; never empty.
    pub fn posts(&self) -> Signal<Vec<BlogPost>> {
        self.posts.into()
    }

    /// Index of the open experience entry, if any.
    pub fn active_experience(&self) -> Signal<Option<usize>> {
        self.active_experience.into()
    }

    /// Route derived from the held path.
    pub fn route(&self) -> Route {
        parse_route(&self.path.get())
    }

    /// Navigate to an internal path: push a history entry (back-button
    /// semantics preserved), update the path, reset scroll to the top.
    pub fn navigate(&self, to: &str) {
        browser::push_history(to);
        self.path.set(to.to_string());
        browser::scroll_to_top();
    }

    /// Resynchronize the path from the live location. Only the popstate
    /// listener calls this.
    pub fn location_synced(&self, path: String) {
        self.path.set(path);
    }

    /// Commit a successful load. Each collection is replaced only when
    /// the fetched one is non-empty, so an empty CMS response never
    /// blanks out the UI. Callers only reach this when both fetches
    /// succeeded; a failed load leaves the state untouched entirely.
    pub fn content_loaded(&self, loaded: LoadedContent) {
        self.projects
            .update(|current| merge_collection(current, loaded.projects));
        self.posts
            .update(|current| merge_collection(current, loaded.posts));
    }

    /// Accordion selection; picking the open entry again closes it.
    pub fn select_experience(&self, index: usize) {
        self.active_experience
            .update(|active| *active = toggle_selection(*active, index));
    }
}

/// Replace `current` with `incoming` unless `incoming` is empty.
fn merge_collection<T>(current: &mut Vec<T>, incoming: Vec<T>) {
    if !incoming.is_empty() {
        *current = incoming;
    }
}

/// Selecting the open entry again closes it.
fn toggle_selection(active: Option<usize>, index: usize) -> Option<usize> {
    if active == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_current_when_incoming_is_empty() {
        let mut current = vec!["kept"];
        merge_collection(&mut current, Vec::new());
        assert_eq!(current, vec!["kept"]);
    }

    #[test]
    fn test_merge_replaces_when_incoming_is_nonempty() {
        let mut current = vec!["old"];
        merge_collection(&mut current, vec!["new", "items"]);
        assert_eq!(current, vec!["new", "items"]);
    }

    #[test]
    fn test_toggle_opens_a_closed_entry() {
        assert_eq!(toggle_selection(None, 2), Some(2));
        assert_eq!(toggle_selection(Some(0), 2), Some(2));
    }

    #[test]
    fn test_toggle_closes_the_open_entry() {
        assert_eq!(toggle_selection(Some(2), 2), None);
    }
}
