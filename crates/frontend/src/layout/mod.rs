pub mod center;
pub mod global_context;
pub mod header;
pub mod left;

use leptos::prelude::*;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// |   (Left)  |          (Center)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <header::Header />

            <div class="app-body">
                // Left sidebar - folds with ctx.is_collapse
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
