//! Scrolling client-logo strip on the home page.

use leptos::prelude::*;

use crate::content::clients::HOME_LOGOS;

#[component]
pub fn ClientsStrip() -> impl IntoView {
    view! {
        <section class="clients-strip">
            <p class="clients-strip__title">"Trusted by 100+ Global Fashion Houses"</p>
            <div class="clients-strip__viewport">
                <div class="clients-strip__track">
                    {HOME_LOGOS
                        .into_iter()
                        .chain(HOME_LOGOS)
                        .map(|client| {
                            view! {
                                <div class="clients-strip__logo">
                                    <img src=client.logo_url() alt=client.name loading="lazy"/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
