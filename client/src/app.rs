//! Root application component and view navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root owns the single [`ViewState`] value and hands children a
//! [`Navigator`] through context. Page content renders inside the
//! [`ResponsiveScaler`]; the WhatsApp button sits outside it so it stays
//! fixed to the real viewport at native size.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::progress_bar::ScrollProgress;
use crate::components::responsive_scaler::ResponsiveScaler;
use crate::components::whatsapp_button::WhatsAppButton;
use crate::pages::render_view;
use crate::state::ui::UiState;
use crate::state::view::{Transition, View, ViewState};
use crate::util::scroll;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Read access to the current view plus the one transition function.
#[derive(Clone, Copy)]
pub struct Navigator {
    state: ReadSignal<ViewState>,
    navigate: Callback<Transition>,
}

impl Navigator {
    /// Current view state (tracked).
    pub fn state(&self) -> ViewState {
        self.state.get()
    }

    /// Current view (tracked).
    pub fn view(&self) -> View {
        self.state.with(ViewState::view)
    }

    /// Product selection at the time of the call, without subscribing.
    pub fn selected_product_untracked(&self) -> Option<&'static str> {
        self.state.with_untracked(ViewState::selected_product)
    }

    pub fn go(&self, transition: Transition) {
        self.navigate.run(transition);
    }

    pub fn to(&self, view: View) {
        self.go(Transition::To(view));
    }

    pub fn select_product(&self, id: &'static str) {
        self.go(Transition::SelectProduct(id));
    }

    pub fn back_to_home(&self) {
        self.go(Transition::BackToHome);
    }
}

/// Navigator provided by [`App`].
pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    let (view_state, set_view_state) = signal(ViewState::default());
    let navigate = Callback::new(move |transition: Transition| {
        let mut changed = false;
        set_view_state.update(|state| changed = state.apply(transition));
        ui.update(UiState::close_mobile_menu);
        if changed {
            leptos::logging::log!("view -> {}", view_state.get_untracked().view().slug());
        }
        scroll::scroll_to_top(false);
    });
    provide_context(Navigator { state: view_state, navigate });

    let on_scroll = move || {
        if let Some((scroll_y, scroll_height, viewport_height)) = scroll::window_metrics() {
            ui.update(|u| u.on_scroll(scroll_y, scroll_height, viewport_height));
        }
    };
    let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| on_scroll());
    on_cleanup(move || scroll_handle.remove());

    let current_view = Memo::new(move |_| view_state.with(ViewState::view));

    view! {
        <Stylesheet id="leptos" href="/pkg/rks-site.css"/>
        <Title text="RKS Creations | Premium Labels & Packaging"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=move || {
                        view! {
                            <ResponsiveScaler>
                                <ScrollProgress/>
                                <Header/>
                                <main class="site-main">
                                    {move || {
                                        let view = current_view.get();
                                        view! {
                                            <div class=format!("page-enter page--{}", view.slug())>
                                                {render_view(view)}
                                            </div>
                                        }
                                    }}
                                    <Footer/>
                                </main>
                            </ResponsiveScaler>
                            <WhatsAppButton/>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
