use catalog_lib::error::Error;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static DOCUMENT: Document = WINDOW.with(|w| w.document().unwrap_throw());
}

/// Resolves a page-relative path against the current location
pub fn resolve_url(path: &str) -> Result<String, Error> {
    let base = window()
        .location()
        .href()
        .map_err(|e| Error::Request(format!("error get location: {:?}", e)))?;
    let url = web_sys::Url::new_with_base(path, &base)
        .map_err(|e| Error::Request(format!("error resolve {}: {:?}", path, e)))?;

    Ok(url.href())
}

pub fn window() -> Window {
    WINDOW.with(|s| s.clone())
}

pub fn document() -> Document {
    DOCUMENT.with(|d| d.clone())
}
