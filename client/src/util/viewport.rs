//! Viewport and content-size observation capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The responsive scaler needs two live signals from the host environment:
//! the viewport width and the unscaled height of the content it wraps. This
//! module hides both behind [`ViewportEnv`] so the scaler logic runs against
//! the browser in production and against a scripted fake in tests.
//!
//! TRADE-OFFS
//! ==========
//! The browser implementation measures `offsetHeight`, which reports layout
//! size and ignores CSS transforms. `getBoundingClientRect` would return the
//! already-scaled box and double-apply the scale factor.

use std::rc::Rc;

/// Which observer fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportEvent {
    /// The window was resized.
    Resized,
    /// The observed content element changed size.
    ContentResized,
}

/// Host environment consumed by the scaler.
pub trait ViewportEnv {
    /// Current viewport width in CSS pixels, when available.
    fn viewport_width(&self) -> Option<f64>;

    /// Current unscaled (transform-invariant) content height, when available.
    fn content_height(&self) -> Option<f64>;

    /// Start observing viewport resizes and content size changes. Both stop
    /// when the returned [`Subscription`] is cancelled or dropped.
    fn subscribe(&self, on_change: Rc<dyn Fn(ViewportEvent)>) -> Subscription;
}

/// Handle that detaches observers when cancelled or dropped.
#[must_use = "dropping a Subscription detaches its observers immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A subscription with nothing to detach.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Detach now. Later calls do nothing.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

/// Browser implementation: `window` resize events plus a `ResizeObserver`
/// on the content element.
#[cfg(feature = "hydrate")]
pub struct BrowserViewport {
    content: web_sys::HtmlElement,
}

#[cfg(feature = "hydrate")]
impl BrowserViewport {
    #[must_use]
    pub fn new(content: web_sys::HtmlElement) -> Self {
        Self { content }
    }
}

#[cfg(feature = "hydrate")]
impl ViewportEnv for BrowserViewport {
    fn viewport_width(&self) -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    fn content_height(&self) -> Option<f64> {
        Some(f64::from(self.content.offset_height()))
    }

    fn subscribe(&self, on_change: Rc<dyn Fn(ViewportEvent)>) -> Subscription {
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(window) = web_sys::window() else {
            return Subscription::noop();
        };

        let on_resize = {
            let on_change = Rc::clone(&on_change);
            Closure::wrap(Box::new(move || on_change(ViewportEvent::Resized)) as Box<dyn FnMut()>)
        };
        if let Err(err) = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
            leptos::logging::warn!("viewport: resize listener not attached: {err:?}");
        }

        let on_content = Closure::wrap(Box::new(move |_entries: js_sys::Array, _observer: web_sys::ResizeObserver| {
            on_change(ViewportEvent::ContentResized);
        }) as Box<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>);
        let observer = match web_sys::ResizeObserver::new(on_content.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&self.content);
                Some(observer)
            }
            Err(err) => {
                leptos::logging::warn!("viewport: ResizeObserver unavailable: {err:?}");
                None
            }
        };

        Subscription::new(move || {
            if let Err(err) = window.remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
                leptos::logging::warn!("viewport: resize listener not detached: {err:?}");
            }
            if let Some(observer) = observer {
                observer.disconnect();
            }
            drop(on_resize);
            drop(on_content);
        })
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeInner {
        width: Option<f64>,
        content_height: Option<f64>,
        listeners: Vec<(u64, Rc<dyn Fn(ViewportEvent)>)>,
        next_id: u64,
        subscribe_calls: usize,
    }

    /// Scripted environment: setters update the values and fire the matching
    /// event synchronously to every live listener.
    #[derive(Clone, Default)]
    pub struct FakeViewport {
        inner: Rc<RefCell<FakeInner>>,
    }

    impl FakeViewport {
        #[must_use]
        pub fn new(width: f64, content_height: f64) -> Self {
            let fake = Self::default();
            {
                let mut inner = fake.inner.borrow_mut();
                inner.width = Some(width);
                inner.content_height = Some(content_height);
            }
            fake
        }

        pub fn resize(&self, width: f64) {
            self.inner.borrow_mut().width = Some(width);
            self.fire(ViewportEvent::Resized);
        }

        pub fn set_content_height(&self, height: Option<f64>) {
            self.inner.borrow_mut().content_height = height;
            self.fire(ViewportEvent::ContentResized);
        }

        #[must_use]
        pub fn listener_count(&self) -> usize {
            self.inner.borrow().listeners.len()
        }

        #[must_use]
        pub fn subscribe_calls(&self) -> usize {
            self.inner.borrow().subscribe_calls
        }

        fn fire(&self, event: ViewportEvent) {
            let listeners: Vec<_> = self.inner.borrow().listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            for listener in listeners {
                listener(event);
            }
        }
    }

    impl ViewportEnv for FakeViewport {
        fn viewport_width(&self) -> Option<f64> {
            self.inner.borrow().width
        }

        fn content_height(&self) -> Option<f64> {
            self.inner.borrow().content_height
        }

        fn subscribe(&self, on_change: Rc<dyn Fn(ViewportEvent)>) -> Subscription {
            let id = {
                let mut inner = self.inner.borrow_mut();
                let id = inner.next_id;
                inner.next_id += 1;
                inner.subscribe_calls += 1;
                inner.listeners.push((id, on_change));
                id
            };
            let inner = Rc::downgrade(&self.inner);
            Subscription::new(move || {
                if let Some(inner) = inner.upgrade() {
                    inner.borrow_mut().listeners.retain(|(listener_id, _)| *listener_id != id);
                }
            })
        }
    }
}

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;
