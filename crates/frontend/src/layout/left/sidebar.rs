//! Sidebar menu rendered from the navigation tree

use crate::layout::global_context::{is_within, AppGlobalContext};
use crate::pages::{navigation_tree, Page};
use crate::shared::icons::icon;
use contracts::shared::navigation::NavigationEntry;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded_groups = RwSignal::new(Vec::<String>::new());

    view! {
        <nav class="app-sidebar__content" class:app-sidebar__content--collapsed=move || ctx.is_collapse.get()>
            {navigation_tree().into_iter().map(|entry| {
                if entry.is_leaf() {
                    view! { <MenuItem entry=entry /> }.into_any()
                } else {
                    view! { <MenuGroup entry=entry expanded_groups=expanded_groups /> }.into_any()
                }
            }).collect_view()}
        </nav>
    }
}

#[component]
fn MenuItem(entry: NavigationEntry<Page>, #[prop(optional)] nested: bool) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let path = StoredValue::new(entry.path.clone());
    let icon_name = entry.icon.clone().unwrap_or_default();
    let title = entry.name.clone();
    let label = entry.name;
    let padding = if nested { "24px" } else { "12px" };

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.is_active(&path.get_value())
            style:padding-left=padding
            title=title
            on:click=move |_| ctx.navigate(&path.get_value())
        >
            <div class="app-sidebar__item-content">
                {icon(&icon_name)}
                <span class="app-sidebar__label" class:hidden=move || ctx.is_collapse.get()>{label}</span>
            </div>
        </div>
    }
}

#[component]
fn MenuGroup(entry: NavigationEntry<Page>, expanded_groups: RwSignal<Vec<String>>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let group_path = StoredValue::new(entry.path.clone());

    // The section holding the current page starts open
    if ctx.current_path.with_untracked(|current| is_within(current, &entry.path)) {
        expanded_groups.update(|groups| groups.push(entry.path.clone()));
    }

    let is_expanded = move || expanded_groups.with(|groups| groups.contains(&group_path.get_value()));
    let icon_name = entry.icon.clone().unwrap_or_default();
    let label = entry.name.clone();
    let items = StoredValue::new(entry.children.clone().unwrap_or_default());

    view! {
        <div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || ctx.is_active(&group_path.get_value())
                style:padding-left="12px"
                on:click=move |_| {
                    let gid = group_path.get_value();
                    expanded_groups.update(move |groups| {
                        if let Some(pos) = groups.iter().position(|x| *x == gid) {
                            groups.remove(pos);
                        } else {
                            groups.push(gid);
                        }
                    });
                }
            >
                <div class="app-sidebar__item-content">
                    {icon(&icon_name)}
                    <span class="app-sidebar__label" class:hidden=move || ctx.is_collapse.get()>{label}</span>
                </div>
                <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_expanded>
                    {icon("chevron-right")}
                </div>
            </div>

            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {items.get_value().into_iter().map(|child| {
                        view! { <MenuItem entry=child nested=true /> }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
