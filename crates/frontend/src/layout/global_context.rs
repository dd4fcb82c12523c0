use crate::pages::canonical_path;
use contracts::shared::navigation::normalize_path;
use leptos::prelude::*;
use web_sys::window;

/// Application-wide UI state shared through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Sidebar folded down to icons
    pub is_collapse: RwSignal<bool>,
    /// Normalized path of the page being shown
    pub current_path: RwSignal<String>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            is_collapse: RwSignal::new(false),
            current_path: RwSignal::new("/".to_string()),
        }
    }

    pub fn toggle_collapse(&self) {
        self.is_collapse.update(|val| *val = !*val);
        leptos::logging::log!("sidebar collapsed: {}", self.is_collapse.get_untracked());
    }

    /// Picks up the browser path once and follows back/forward navigation.
    pub fn init_router_integration(&self) {
        let initial = browser_path();
        let canonical = canonical_path(&initial);
        if canonical != initial {
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&canonical),
                    );
                }
            }
        }
        self.current_path.set(canonical);

        let this = *self;
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            let path = canonical_path(&browser_path());
            leptos::logging::log!("popstate: path='{}'", path);
            this.current_path.set(path);
        });
    }

    /// Shows `path` (after redirects) and records it in the browser history.
    pub fn navigate(&self, path: &str) {
        let path = canonical_path(path);
        if self.current_path.with_untracked(|current| *current == path) {
            return;
        }
        leptos::logging::log!("navigate: path='{}'", path);

        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
            }
        }
        self.current_path.set(path);
    }

    /// True for the current page and for the section containing it.
    pub fn is_active(&self, path: &str) -> bool {
        self.current_path.with(|current| is_within(current, path))
    }
}

/// `current` is `path` itself or one of its sub-paths.
pub fn is_within(current: &str, path: &str) -> bool {
    let path = normalize_path(path);
    if path == "/" {
        current == "/"
    } else {
        current == path || current.starts_with(&format!("{}/", path))
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn browser_path() -> String {
    let pathname = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    normalize_path(&pathname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_within() {
        assert!(is_within("/product/product-batch", "/product"));
        assert!(is_within("/product", "/product/"));
        assert!(!is_within("/products", "/product"));
        assert!(is_within("/", "/"));
        assert!(!is_within("/staff", "/"));
    }
}
