use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_collapsed = move || ctx.is_collapse.get();

    view! {
        <div data-zone="left" class="left" class:left--collapsed=is_collapsed>
            {children()}
        </div>
    }
}
