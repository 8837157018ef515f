use dominator::clone;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::utils::document;

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Smooth scrolling for the in-page anchors present at startup
pub fn install() -> Result<(), JsValue> {
    let anchors = document().query_selector_all(ANCHOR_SELECTOR)?;

    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };

        let closure = Closure::wrap(Box::new(clone!(anchor => move |e: Event| {
            e.prevent_default();
            if let Some(href) = anchor.get_attribute("href") {
                scroll_to(&href);
            }
        })) as Box<dyn FnMut(_)>);

        anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

#[allow(deprecated)]
fn scroll_to(selector: &str) {
    // a bare "#" is not a valid selector, same as a missing target
    let Ok(Some(target)) = document().query_selector(selector) else {
        return;
    };

    let mut options = ScrollIntoViewOptions::new();
    options
        .behavior(ScrollBehavior::Smooth)
        .block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
