//! Fixed site header: brand mark, primary navigation and the mobile menu.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::app::use_navigator;
use crate::state::ui::UiState;
use crate::state::view::{View, ViewState};

/// Site header.
#[component]
pub fn Header() -> impl IntoView {
    let nav = use_navigator();
    let ui = expect_context::<RwSignal<UiState>>();

    let header_class = move || header_class(ui.with(|u| u.header_scrolled));
    let brand_class = move || brand_title_class(ui.with(|u| u.header_scrolled), nav.view());
    let menu_open = move || ui.with(|u| u.mobile_menu_open);

    view! {
        <header class=header_class>
            <div class="site-header__inner">
                <button class="site-header__brand" on:click=move |_| nav.to(View::Home)>
                    <span class="site-header__logo">"R"<span class="site-header__logo-dot"></span></span>
                    <span class="site-header__brand-text">
                        <span class=brand_class>"RKS Creations"</span>
                        <span class="site-header__tagline">"Premium Branding"</span>
                    </span>
                </button>

                <nav class="site-header__nav">
                    {View::NAV
                        .into_iter()
                        .map(|view| {
                            view! {
                                <button
                                    class=move || nav_link_class(&nav.state(), view)
                                    on:click=move |_| nav.to(view)
                                >
                                    <span>{view.label()}</span>
                                    <span class="site-header__underline"></span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <button
                    class="site-header__hamburger"
                    aria-label="Toggle menu"
                    on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <Show when=menu_open>
                    <div class="site-header__mobile-menu">
                        {View::NAV
                            .into_iter()
                            .map(|view| {
                                view! {
                                    <button class="site-header__mobile-item" on:click=move |_| nav.to(view)>
                                        {view.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </header>
    }
}

fn header_class(scrolled: bool) -> &'static str {
    if scrolled { "site-header site-header--scrolled" } else { "site-header" }
}

/// The brand title turns dark once the header condenses or when a page other
/// than the hero-backed home page is showing.
fn brand_title_class(scrolled: bool, view: View) -> &'static str {
    if scrolled || view != View::Home {
        "site-header__title site-header__title--dark"
    } else {
        "site-header__title"
    }
}

fn nav_link_class(state: &ViewState, view: View) -> &'static str {
    if state.is_active(view) {
        "site-header__link site-header__link--active"
    } else {
        "site-header__link"
    }
}
