use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::pages::navigation_tree;
use contracts::shared::navigation::validate_tree;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Center /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    if let Err(e) = validate_tree(&navigation_tree()) {
        log::warn!("navigation tree: {}", e);
    }

    view! { <MainLayout /> }
}
