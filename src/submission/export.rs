//! JSON Export
//!
//! Pretty-printed JSON delivered as a `data:` URL download.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use wasm_bindgen::JsCast;

use super::error::{StoreError, StoreResult};

/// File name of a bulk export
pub const BULK_EXPORT_FILENAME: &str = "grant_submissions_export.json";

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub filename: String,
    pub json: String,
}

impl ExportArtifact {
    pub fn new<T: Serialize + ?Sized>(value: &T, filename: &str) -> StoreResult<Self> {
        let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(Self {
            filename: filename.to_string(),
            json,
        })
    }

    pub fn data_url(&self) -> String {
        format!(
            "data:text/json;charset=utf-8,{}",
            utf8_percent_encode(&self.json, URI_COMPONENT)
        )
    }

    /// Click a temporary anchor to save the file
    pub fn download(&self) -> StoreResult<()> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| StoreError::Unavailable("no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| StoreError::Unavailable("no body".to_string()))?;

        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .unchecked_into();
        anchor.set_href(&self.data_url());
        anchor.set_download(&self.filename);

        body.append_child(&anchor)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;
        anchor.click();
        anchor.remove();

        log::info!("[EXPORT] downloaded {} ({} bytes)", self.filename, self.json.len());
        Ok(())
    }
}

/// `<id>.json` for one record
pub fn single_export<T: Serialize>(record: &T, id: &str) -> StoreResult<ExportArtifact> {
    ExportArtifact::new(record, &format!("{}.json", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_url_encoding() {
        let artifact = ExportArtifact::new(&json!({"a": "x y/é"}), "out.json").unwrap();
        let url = artifact.data_url();
        assert!(url.starts_with("data:text/json;charset=utf-8,%7B%0A"));
        assert!(url.contains("x%20y%2F%C3%A9"));
    }

    #[test]
    fn test_unreserved_chars_untouched() {
        let artifact = ExportArtifact {
            filename: "f".into(),
            json: "a-b_c.d!e~f*g'h(i)".into(),
        };
        assert_eq!(artifact.data_url(), "data:text/json;charset=utf-8,a-b_c.d!e~f*g'h(i)");
    }

    #[test]
    fn test_single_export_name_and_body() {
        let artifact = single_export(&json!({"id": "SUB-1"}), "SUB-1").unwrap();
        assert_eq!(artifact.filename, "SUB-1.json");
        assert_eq!(artifact.json, "{\n  \"id\": \"SUB-1\"\n}");
    }
}
