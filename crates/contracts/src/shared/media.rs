//! Image / file helpers that do not need a browser
//!
//! The download side (anchors, object URLs) lives in the frontend.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

/// File name used when a download has no better one.
pub const DEFAULT_DOWNLOAD_NAME: &str = "image";

const FALLBACK_MIME: &str = "application/octet-stream";

/// File picked by the user, held in memory until it is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileBlob {
    pub name: String,
    pub mime_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// Value of an `image` column: either already stored (URL) or freshly picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ImageSource {
    Url(String),
    File(FileBlob),
}

/// `data:` and `blob:` URLs can be handed to an anchor without fetching.
pub fn is_inline_url(url: &str) -> bool {
    url.starts_with("data:") || url.starts_with("blob:")
}

/// Builds a `data:<mime>;base64,<payload>` URL.
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() {
        FALLBACK_MIME
    } else {
        mime_type
    };
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// A URL is returned as-is, a file is encoded as a data URL.
pub fn file_to_base64(source: &ImageSource) -> String {
    match source {
        ImageSource::Url(url) => url.clone(),
        ImageSource::File(file) => to_data_url(&file.mime_type, &file.bytes),
    }
}

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_uri_component(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Image URL as served by the backend's image endpoint.
pub fn get_full_image_url_path(base_url: &str, uri: &str) -> String {
    format!("{}/images\\{}", base_url, encode_uri_component(uri))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_inline_url() {
        assert!(is_inline_url("data:image/png;base64,AAAA"));
        assert!(is_inline_url("blob:http://localhost/1234"));
        assert!(!is_inline_url("http://127.0.0.1:5000/images/a.png"));
    }

    #[test]
    fn test_file_to_base64() {
        let url = ImageSource::Url("http://host/a.png".into());
        assert_eq!(file_to_base64(&url), "http://host/a.png");

        let file = ImageSource::File(FileBlob {
            name: "a.txt".into(),
            mime_type: "text/plain".into(),
            bytes: b"hello".to_vec(),
        });
        assert_eq!(file_to_base64(&file), "data:text/plain;base64,aGVsbG8=");
    }

    #[test]
    fn test_data_url_without_mime() {
        assert_eq!(to_data_url("", &[]), "data:application/octet-stream;base64,");
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("a b/c.png"), "a%20b%2Fc.png");
        assert_eq!(encode_uri_component("it's(1)*!"), "it's(1)*!");
    }

    #[test]
    fn test_full_image_url_path() {
        assert_eq!(
            get_full_image_url_path("http://127.0.0.1:5000", "batch 1.png"),
            "http://127.0.0.1:5000/images\\batch%201.png"
        );
    }
}
