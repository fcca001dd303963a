//! Drives a [`ScalerState`] from a [`ViewportEnv`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller owns the per-instance scaler state and the observer
//! subscription. Each event re-reads the environment, folds the reading into
//! the state and hands the new state to a sink (a signal setter in the
//! component, a recorder in tests).
//!
//! Observer callbacks hold a weak reference to the controller internals, so
//! dropping the controller releases everything even if the environment keeps
//! the callback alive.

#[cfg(test)]
#[path = "scaler_test.rs"]
mod scaler_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::state::scaler::ScalerState;
use crate::util::viewport::{Subscription, ViewportEnv, ViewportEvent};

type Sink = Rc<dyn Fn(ScalerState)>;

struct Inner<E> {
    env: E,
    state: Cell<ScalerState>,
    subscription: RefCell<Option<Subscription>>,
    sink: Sink,
}

/// Mountable scaler bound to one environment.
pub struct ScalerController<E: ViewportEnv + 'static> {
    inner: Rc<Inner<E>>,
}

impl<E: ViewportEnv + 'static> ScalerController<E> {
    pub fn new(env: E, design_width: f64, sink: impl Fn(ScalerState) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                env,
                state: Cell::new(ScalerState::new(design_width)),
                subscription: RefCell::new(None),
                sink: Rc::new(sink),
            }),
        }
    }

    #[must_use]
    pub fn state(&self) -> ScalerState {
        self.inner.state.get()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.inner.subscription.borrow().is_some()
    }

    /// Take the first measurement and start observing. Mounting twice is a
    /// no-op.
    pub fn mount(&self) {
        if self.is_mounted() {
            return;
        }
        let weak: Weak<Inner<E>> = Rc::downgrade(&self.inner);
        let subscription = self.inner.env.subscribe(Rc::new(move |event| {
            if let Some(inner) = weak.upgrade() {
                inner.handle(event);
            }
        }));
        *self.inner.subscription.borrow_mut() = Some(subscription);
        self.inner.measure_all();
    }

    /// Re-measure width and height outside of an observer callback.
    #[cfg(test)]
    pub fn refresh(&self) {
        if self.is_mounted() {
            self.inner.measure_all();
        }
    }

    /// Detach both observers and drop all measurements. Nothing reaches the
    /// sink afterwards until the next [`mount`](Self::mount).
    pub fn unmount(&self) {
        let subscription = self.inner.subscription.borrow_mut().take();
        drop(subscription);
        let mut state = self.inner.state.get();
        state.reset();
        self.inner.state.set(state);
    }
}

impl<E: ViewportEnv> Inner<E> {
    fn handle(&self, event: ViewportEvent) {
        if self.subscription.borrow().is_none() {
            return;
        }
        match event {
            ViewportEvent::Resized => self.measure_all(),
            ViewportEvent::ContentResized => {
                let mut state = self.state.get();
                state.on_content_height(self.env.content_height());
                self.publish(state);
            }
        }
    }

    fn measure_all(&self) {
        let mut state = self.state.get();
        state.on_viewport_width(self.env.viewport_width());
        state.on_content_height(self.env.content_height());
        self.publish(state);
    }

    fn publish(&self, state: ScalerState) {
        self.state.set(state);
        (self.sink)(state);
    }
}

impl<E: ViewportEnv + 'static> Drop for ScalerController<E> {
    fn drop(&mut self) {
        self.unmount();
    }
}
