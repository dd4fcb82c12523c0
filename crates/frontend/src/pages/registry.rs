//! Page registry - maps a resolved `Page` to its view
//!
//! `render_page` is the only place that knows which component renders which
//! section; the route table only carries the `Page` handle.

use super::columns::{columns_for, image_column};
use super::{navigation_tree, Page};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::download::{
    create_object_url, download_blob_from_url_or_file, download_bytes, download_file_from_base64,
    download_name, file_to_base64, read_file, DownloadSource,
};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD, PAGE_CAT_LIST};
use contracts::shared::config::AppConfig;
use contracts::shared::form::{create_empty_rule_form, DataType, FieldValue, FormRecord};
use contracts::shared::media::ImageSource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};
use wasm_bindgen::JsCast;
use web_sys::{File, Url};

/// Renders the view for `page` under the route's display name.
pub fn render_page(page: Page, title: String) -> AnyView {
    match page {
        Page::Home => view! { <HomePage title=title /> }.into_any(),
        _ => view! { <RecordsPage page=page title=title /> }.into_any(),
    }
}

pub fn render_not_found(path: String) -> AnyView {
    view! {
        <div class="page page--not-found">
            <h2 class="page__title">"Page not found"</h2>
            <p>{format!("No section is registered for '{}'", path)}</p>
        </div>
    }
    .into_any()
}

/// Overview with a card per top-level section.
#[component]
fn HomePage(#[prop(into)] title: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let sections: Vec<_> = navigation_tree()
        .into_iter()
        .filter(|entry| entry.path != "/")
        .collect();

    view! {
        <PageFrame page_key=Page::Home.key() category=PAGE_CAT_DASHBOARD title=title>
            <div class="home__sections">
                {sections.into_iter().map(|entry| {
                    let path = entry.path.clone();
                    let icon_name = entry.icon.clone().unwrap_or_default();
                    let subsections = entry
                        .child_entries()
                        .iter()
                        .map(|child| child.name.clone())
                        .collect::<Vec<_>>()
                        .join(", ");
                    view! {
                        <div class="home__card" on:click=move |_| ctx.navigate(&path)>
                            {icon(&icon_name)}
                            <span class="home__card-title">{entry.name}</span>
                            <small class="home__card-hint">{subsections}</small>
                        </div>
                    }
                }).collect_view()}
            </div>
        </PageFrame>
    }
}

fn show_draft(form: &FormRecord, draft: RwSignal<Option<String>>) {
    match serde_json::to_string_pretty(form) {
        Ok(text) => draft.set(Some(text)),
        Err(e) => log::error!("serialize form draft: {}", e),
    }
}

/// Table header and blank "add" form for a CRUD section.
#[component]
fn RecordsPage(page: Page, #[prop(into)] title: String) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let columns = StoredValue::new(columns_for(page));
    let draft = RwSignal::new(None::<String>);

    // Picked image, attached to the draft and previewed via an object URL
    let image_key = columns.with_value(|columns| image_column(columns).map(str::to_string));
    let has_image = image_key.is_some();
    let picked = StoredValue::new_local(None::<File>);
    let preview = RwSignal::new(None::<String>);

    let revoke_preview = move || {
        if let Some(url) = preview.get_untracked() {
            if let Err(e) = Url::revoke_object_url(&url) {
                log::debug!("revoke preview URL: {:?}", e);
            }
        }
    };
    on_cleanup(revoke_preview);

    let on_pick = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            return;
        };

        revoke_preview();
        match create_object_url(&DownloadSource::File(file.clone())) {
            Ok(url) => preview.set(Some(url)),
            Err(e) => {
                log::error!("preview of '{}' failed: {}", file.name(), e);
                preview.set(None);
            }
        }
        picked.set_value(Some(file));
    };

    let on_add = move |_: leptos::ev::MouseEvent| {
        let mut form = create_empty_rule_form(&columns.get_value());
        match picked.get_value().zip(image_key.clone()) {
            None => show_draft(&form, draft),
            Some((file, key)) => spawn_local(async move {
                match read_file(&file).await {
                    Ok(blob) => form.insert(key, FieldValue::Image(Some(ImageSource::File(blob)))),
                    Err(e) => log::error!("attach '{}' failed: {}", file.name(), e),
                }
                show_draft(&form, draft);
            }),
        }
    };

    let on_export = move |_: leptos::ev::MouseEvent| {
        let form = create_empty_rule_form(&columns.get_value());
        let filename = format!("{}-form.json", page.key());
        let result = serde_json::to_vec_pretty(&form)
            .map_err(|e| e.to_string())
            .and_then(|bytes| download_bytes(&bytes, "application/json", &filename));
        if let Err(e) = result {
            log::error!("export of '{}' failed: {}", filename, e);
        }
    };

    let placeholder = config.ui.image_placeholder.clone();
    let on_download_placeholder = move |_: leptos::ev::MouseEvent| {
        let url = placeholder.clone();
        spawn_local(async move {
            // already logged by the download helper
            if let Err(e) = download_blob_from_url_or_file(DownloadSource::Url(url), None).await {
                log::debug!("placeholder download not completed: {}", e);
            }
        });
    };

    let on_download_picked = move |_: leptos::ev::MouseEvent| {
        let Some(file) = picked.get_value() else {
            return;
        };
        spawn_local(async move {
            let filename = download_name(&file.name()).to_string();
            let result = match file_to_base64(&DownloadSource::File(file)).await {
                Ok(data_url) => download_file_from_base64(&data_url, &filename),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                log::error!("download of '{}' failed: {}", filename, e);
            }
        });
    };

    let endpoint = page
        .api()
        .map(|api| format!("{}{}", config.api.base_url, api))
        .unwrap_or_default();
    let image_src = config.ui.image_placeholder.clone();

    view! {
        <PageFrame page_key=page.key() category=PAGE_CAT_LIST title=title>
            <div class="page__toolbar">
                <Button appearance=ButtonAppearance::Primary on_click=on_add>
                    {icon("plus")}
                    "Add"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=on_export>
                    {icon("download")}
                    "Export empty form"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=on_download_placeholder>
                    {icon("download")}
                    "Placeholder image"
                </Button>
                <span class="page__endpoint">{endpoint}</span>
            </div>

            {has_image.then(|| view! {
                <div class="page__picker">
                    <input type="file" accept="image/*" on:change=on_pick />
                    <Show when=move || preview.with(|url| url.is_some())>
                        <img class="page__preview" src=move || preview.get().unwrap_or_default() alt="preview" />
                        <Button appearance=ButtonAppearance::Subtle on_click=on_download_picked>
                            {icon("download")}
                            "Download picked image"
                        </Button>
                    </Show>
                </div>
            })}

            <table class="table">
                <thead>
                    <tr>
                        {columns.get_value().into_iter().map(|column| {
                            let label = column.display_label();
                            view! {
                                <th data-type=column.data_type.as_str() class:table__header--required=column.required>
                                    {label}
                                </th>
                            }
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        {columns.get_value().into_iter().map(|column| {
                            match column.data_type {
                                DataType::Image => view! {
                                    <td><img class="table__image" src=image_src.clone() alt="placeholder" /></td>
                                }.into_any(),
                                _ => view! { <td class="table__cell--empty">"-"</td> }.into_any(),
                            }
                        }).collect_view()}
                    </tr>
                </tbody>
            </table>

            <Show when=move || draft.with(|text| text.is_some())>
                <pre class="page__draft">{move || draft.get().unwrap_or_default()}</pre>
            </Show>
        </PageFrame>
    }
}
