use crate::layout::global_context::AppGlobalContext;
use crate::pages::registry::{render_not_found, render_page};
use crate::pages::ROUTES;
use contracts::shared::navigation::resolve_route;
use leptos::prelude::*;

/// Renders the page the route table resolves for the current path.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="center" style="flex: 1; overflow: auto;">
            {move || {
                let path = ctx.current_path.get();
                match resolve_route(ROUTES.as_slice(), &path) {
                    Some(resolved) => render_page(*resolved.component, resolved.entry.name.clone()),
                    None => render_not_found(path),
                }
            }}
        </div>
    }
}
