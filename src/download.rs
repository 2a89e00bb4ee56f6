//! CSV Download
//!
//! Hands generated CSV text to the browser as a file download.

use chrono::Local;
use mmis_core::export::{export_file_name, ExportError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::notify;

fn trigger_download(file_name: &str, content: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.set_attribute("style", "visibility:hidden")?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;
    Ok(())
}

/// Save an export as `{prefix}_{today}.csv`, alerting on empty data
pub fn download_csv(prefix: &str, csv: Result<String, ExportError>) {
    let content = match csv {
        Ok(content) => content,
        Err(ExportError::Empty) => {
            notify::alert(&ExportError::Empty.to_string());
            return;
        }
        Err(e) => {
            log::error!("CSV export failed: {}", e);
            notify::alert("Failed to generate CSV file");
            return;
        }
    };

    let file_name = export_file_name(prefix, Local::now().date_naive());
    match trigger_download(&file_name, &content) {
        Ok(()) => log::info!("downloaded {}", file_name),
        Err(e) => log::error!("download of {} failed: {:?}", file_name, e),
    }
}
