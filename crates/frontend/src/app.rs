use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    let config = AppConfig::load(None).unwrap_or_else(|e| {
        log::error!("config: {}, falling back to defaults", e);
        AppConfig::default()
    });
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
