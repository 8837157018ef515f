use catalog_lib::catalog::{VISIBILITY_ROOT_MARGIN, VISIBILITY_THRESHOLD};
use js_sys::Array;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const ANIMATE_CLASS: &str = "animate-in";

/// Adds the entrance animation class to a card the first time it scrolls
/// into view, then stops watching it.
pub struct Reveal {
    observer: IntersectionObserver,
}

impl Reveal {
    #[allow(deprecated)]
    pub fn new() -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    let _ = element.style().set_property("animation-delay", "0s");
                }
                let _ = target.class_list().add_1(ANIMATE_CLASS);
                observer.unobserve(&target);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options
            .threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD))
            .root_margin(VISIBILITY_ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;

        closure.forget();

        Ok(Self { observer })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}
