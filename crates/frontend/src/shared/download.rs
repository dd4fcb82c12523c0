//! Browser-side file handling: reading picked files and triggering downloads
use contracts::shared::media::{is_inline_url, to_data_url, FileBlob, ImageSource, DEFAULT_DOWNLOAD_NAME};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, HtmlAnchorElement, Url};

/// What the user asked to download.
#[derive(Clone)]
pub enum DownloadSource {
    Url(String),
    File(File),
}

/// Reads a picked file into memory.
pub async fn read_file(file: &File) -> Result<FileBlob, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    Ok(FileBlob {
        name: file.name(),
        mime_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

/// Data URL of a picked file; strings are returned unchanged.
pub async fn file_to_base64(source: &DownloadSource) -> Result<String, String> {
    match source {
        DownloadSource::Url(url) => Ok(url.clone()),
        DownloadSource::File(file) => {
            let blob = read_file(file).await?;
            Ok(contracts::shared::media::file_to_base64(&ImageSource::File(blob)))
        }
    }
}

/// Object URL for previews; strings are returned unchanged.
///
/// The caller owns the returned object URL and should revoke it.
pub fn create_object_url(source: &DownloadSource) -> Result<String, String> {
    match source {
        DownloadSource::Url(url) => Ok(url.clone()),
        DownloadSource::File(file) => Url::create_object_url_with_blob(file)
            .map_err(|e| format!("Failed to create object URL: {:?}", e)),
    }
}

/// Name to save a picked file under; blank names fall back to the default.
pub fn download_name(file_name: &str) -> &str {
    let trimmed = file_name.trim();
    if trimmed.is_empty() {
        DEFAULT_DOWNLOAD_NAME
    } else {
        trimmed
    }
}

/// Downloads an inline (`data:`) URL under `filename`.
pub fn download_file_from_base64(data_url: &str, filename: &str) -> Result<(), String> {
    click_anchor(data_url, filename, false)
}

/// Downloads a bytes payload as `filename`.
pub fn download_bytes(bytes: &[u8], mime_type: &str, filename: &str) -> Result<(), String> {
    download_file_from_base64(&to_data_url(mime_type, bytes), filename)
}

/// Downloads a URL or a picked file.
///
/// Inline URLs and files go straight through an anchor; remote URLs are
/// fetched first so the browser saves them instead of navigating.
pub async fn download_blob_from_url_or_file(
    source: DownloadSource,
    filename: Option<&str>,
) -> Result<(), String> {
    let filename = filename.unwrap_or(DEFAULT_DOWNLOAD_NAME);
    let result = download_source(&source, filename).await;
    if let Err(e) = &result {
        log::error!("download of '{}' failed: {}", filename, e);
    }
    result
}

async fn download_source(source: &DownloadSource, filename: &str) -> Result<(), String> {
    match source {
        DownloadSource::Url(url) if is_inline_url(url) => click_anchor(url, filename, true),
        DownloadSource::Url(url) => {
            let response = gloo_net::http::Request::get(url)
                .send()
                .await
                .map_err(|e| format!("Failed to fetch {}: {}", url, e))?;
            let bytes = response
                .binary()
                .await
                .map_err(|e| format!("Failed to read response body: {}", e))?;
            download_blob(&bytes_to_blob(&bytes)?, filename)
        }
        DownloadSource::File(file) => download_blob(file, filename),
    }
}

fn bytes_to_blob(bytes: &[u8]) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    Blob::new_with_u8_array_sequence(&parts).map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Downloads through a temporary object URL that is revoked afterwards.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;
    let clicked = click_anchor(&url, filename, false);
    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    clicked
}

/// Appends a hidden anchor to the body, clicks it and removes it again.
fn click_anchor(href: &str, filename: &str, new_tab: bool) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(href);
    anchor.set_download(filename);
    if new_tab {
        anchor.set_target("_blank");
    }
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Ok(())
}
