use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <Button
                    appearance=ButtonAppearance::Transparent
                    on_click=move |_: leptos::ev::MouseEvent| ctx.toggle_collapse()
                    attr:class="header__toggle"
                >
                    {move || if ctx.is_collapse.get() { icon("menu-unfold") } else { icon("menu-fold") }}
                </Button>
                <span class="header__title">"Goods Admin"</span>
            </div>
        </header>
    }
}
