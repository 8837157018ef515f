#[macro_use]
extern crate log;

mod catalog;
mod clipboard;
mod events;
mod query;
mod reveal;
mod scroll;
mod utils;

use wasm_bindgen::prelude::*;

use catalog::CatalogPage;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    clipboard::install()?;
    scroll::install()?;

    match CatalogPage::new() {
        Some(page) => CatalogPage::load(page),
        None => error!("no #{} container on this page", catalog::CONTAINER_ID),
    }

    Ok(())
}
