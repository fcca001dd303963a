//! Fixed-design-width frame scaled uniformly to the viewport.
//!
//! SYSTEM CONTEXT
//! ==============
//! Children are laid out on a stage exactly `design_width` wide. The stage
//! carries a `scale()` transform; the outer frame is sized from the unscaled
//! content height so the document scroll length matches what is on screen.
//! The browser wiring lives in [`ScalerController`]; this component only
//! owns it for the lifetime of the mount and mirrors its state into a signal.
//!
//! During SSR the state stays unmeasured, which renders at scale 1 with an
//! `auto` height until hydration takes the first measurement.

use leptos::prelude::*;

use crate::state::scaler::{DESIGN_WIDTH, ScalerState};

#[cfg(feature = "hydrate")]
use crate::util::{scaler::ScalerController, viewport::BrowserViewport};

#[component]
pub fn ResponsiveScaler(
    /// Width the content is authored against. Defaults to [`DESIGN_WIDTH`].
    #[prop(optional)]
    design_width: Option<f64>,
    children: Children,
) -> impl IntoView {
    let design_width = design_width.unwrap_or(DESIGN_WIDTH);
    let state = RwSignal::new(ScalerState::new(design_width));
    let content_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let controller = StoredValue::new_local(None::<ScalerController<BrowserViewport>>);

        Effect::new(move || {
            let Some(content) = content_ref.get() else {
                return;
            };
            if controller.with_value(Option::is_some) {
                return;
            }
            let env = BrowserViewport::new(web_sys::HtmlElement::from(content));
            let scaler = ScalerController::new(env, design_width, move |next| state.set(next));
            scaler.mount();
            controller.set_value(Some(scaler));
        });

        on_cleanup(move || {
            controller.try_update_value(|slot| {
                if let Some(scaler) = slot.take() {
                    scaler.unmount();
                }
            });
        });
    }

    view! {
        <div class="scaler-frame" style=move || state.with(|s| s.frame_style().to_css())>
            <div class="scaler-stage" style=move || state.with(ScalerState::stage_css)>
                <div class="scaler-content" node_ref=content_ref>
                    {children()}
                </div>
            </div>
        </div>
    }
}
