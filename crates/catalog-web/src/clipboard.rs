use catalog_lib::copy::{BASE_URL_CLASS, COPY_REVERT_MS, CopyFeedback};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, prelude::*};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{HtmlElement, MouseEvent};

use crate::utils::{document, window};

/// Copies the text of any clicked `.base-url` element
pub fn install() -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(|e: MouseEvent| {
        let Some(element) = e.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
            return;
        };

        if element.class_list().contains(BASE_URL_CLASS) {
            spawn_local(copy(element));
        }
    }) as Box<dyn FnMut(_)>);

    document().add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

async fn copy(element: HtmlElement) {
    let feedback = CopyFeedback::new(element.text_content().unwrap_or_default());
    let promise = window().navigator().clipboard().write_text(feedback.payload());

    if let Err(e) = JsFuture::from(promise).await {
        error!("Failed to copy text: {:?}", e);
        return;
    }

    show(&element, &feedback, 0);
    TimeoutFuture::new(COPY_REVERT_MS).await;
    show(&element, &feedback, COPY_REVERT_MS);
}

fn show(element: &HtmlElement, feedback: &CopyFeedback, elapsed_ms: u32) {
    element.set_text_content(Some(feedback.label(elapsed_ms)));
    let _ = element.style().set_property("color", feedback.color(elapsed_ms));
}
