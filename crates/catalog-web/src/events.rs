use dominator::traits::StaticEvent;

/// `error` as fired by an `<img>` whose resource failed to load
pub struct Error {
    #[allow(dead_code)]
    event: web_sys::Event,
}

impl StaticEvent for Error {
    const EVENT_TYPE: &'static str = "error";

    #[inline]
    fn unchecked_from_event(event: web_sys::Event) -> Self {
        Self { event }
    }
}
