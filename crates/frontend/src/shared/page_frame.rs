//! PageFrame: standard root wrapper for every page rendered in the center zone.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`: `"{page}--{category}"`, e.g. `"staff--list"`
//!   - `data-page-category`: one of the PAGE_CAT_* constants

use leptos::prelude::*;

/// Table of records with an add form.
pub const PAGE_CAT_LIST: &str = "list";

/// Landing / overview page.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Builds the `{page}--{category}` id.
pub fn page_id(page_key: &str, category: &str) -> String {
    format!("{}--{}", page_key, category)
}

#[component]
pub fn PageFrame(
    /// Key of the page, see `Page::key`
    page_key: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    /// Heading shown above the content
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id(page_key, category) class=class data-page-category=category>
            <div class="page__header">
                <h2 class="page__title">{title}</h2>
            </div>
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}
