//! Home page "Our Portfolio" teaser grid.

use leptos::prelude::*;

use crate::app::use_navigator;
use crate::content::catalog::TEASERS;
use crate::state::view::View;

#[component]
pub fn ProductTeasers() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <section class="teasers">
            <div class="section-head">
                <div>
                    <span class="eyebrow">"Our Portfolio"</span>
                    <h2 class="section-title">"Masterpieces" <br/> "of Brand Craft."</h2>
                </div>
                <button class="link-button" on:click=move |_| nav.to(View::Products)>
                    "View Complete Catalog ↗"
                </button>
            </div>
            <div class="teasers__grid">
                {TEASERS
                    .into_iter()
                    .map(|teaser| {
                        view! {
                            <article class="teaser-card" on:click=move |_| nav.select_product(teaser.product_id)>
                                <img class="teaser-card__image" src=teaser.image alt=teaser.title/>
                                <div class="teaser-card__body">
                                    <span class="eyebrow eyebrow--accent">{teaser.tag}</span>
                                    <h3>{teaser.title}</h3>
                                    <p class="teaser-card__reveal">{teaser.description}</p>
                                    <span class="teaser-card__cta">"Request Detail View"</span>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
