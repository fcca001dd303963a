//! Window scroll helpers.
//!
//! Requires a browser environment; every helper is a no-op during SSR.

use crate::util::viewport::Subscription;

/// Window scroll metrics: `(scroll_y, scroll_height, inner_height)`.
pub fn window_metrics() -> Option<(f64, f64, f64)> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let scroll_y = window.scroll_y().ok()?;
        let inner_height = window.inner_height().ok()?.as_f64()?;
        let scroll_height = f64::from(window.document()?.document_element()?.scroll_height());
        Some((scroll_y, scroll_height, inner_height))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Jump to the top of the document. `smooth` animates the scroll.
pub fn scroll_to_top(smooth: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(if smooth { web_sys::ScrollBehavior::Smooth } else { web_sys::ScrollBehavior::Instant });
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = smooth;
    }
}

/// Run `on_visible` once, the first time at least `threshold` of `element`
/// intersects the viewport. Dropping the subscription stops observing.
#[cfg(feature = "hydrate")]
pub fn observe_first_visible(
    element: &web_sys::Element,
    threshold: f64,
    on_visible: impl FnOnce() + 'static,
) -> Subscription {
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};

    let mut on_visible = Some(on_visible);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
        let visible = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if visible {
            observer.disconnect();
            if let Some(on_visible) = on_visible.take() {
                on_visible();
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Subscription::new(move || {
                observer.disconnect();
                drop(callback);
            })
        }
        Err(err) => {
            leptos::logging::warn!("scroll: IntersectionObserver unavailable: {err:?}");
            Subscription::noop()
        }
    }
}

/// SSR stand-in: nothing is ever visible on the server.
#[cfg(not(feature = "hydrate"))]
pub fn observe_first_visible<T>(element: &T, threshold: f64, on_visible: impl FnOnce() + 'static) -> Subscription {
    let _ = (element, threshold, on_visible);
    Subscription::noop()
}
