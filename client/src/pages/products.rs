//! Product catalog: the portfolio grid and the per-product detail view.
//!
//! DESIGN
//! ======
//! Which product is open is page-local state, seeded from the navigator's
//! selection so teaser cards on the home page land directly on a detail
//! view. "Back to Catalog" only clears the local selection; the navigator
//! keeps its value until the next `back_to_home`.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;

use crate::app::use_navigator;
use crate::content::catalog::{PRODUCTS, Product, find_product};
use crate::util::scroll;

/// Resolve a selection id to a product. Unknown ids show the grid.
fn resolve_selection(id: Option<&str>) -> Option<&'static Product> {
    id.and_then(find_product)
}

/// Page-local product selection. Follows the navigator only when its id
/// changes, so a closed detail view stays closed when the same id is sent
/// again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct CatalogSelection {
    open: Option<&'static str>,
    last_seen: Option<&'static str>,
}

impl CatalogSelection {
    fn seeded(nav_id: Option<&'static str>) -> Self {
        Self { open: nav_id, last_seen: nav_id }
    }

    fn follow(&mut self, nav_id: Option<&'static str>) {
        if nav_id == self.last_seen {
            return;
        }
        self.last_seen = nav_id;
        if nav_id.is_some() {
            self.open = nav_id;
        }
    }

    fn open(&mut self, id: &'static str) {
        self.open = Some(id);
    }

    fn close(&mut self) {
        self.open = None;
    }

    fn product(&self) -> Option<&'static Product> {
        resolve_selection(self.open)
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let nav = use_navigator();
    let selection = RwSignal::new(CatalogSelection::seeded(nav.selected_product_untracked()));

    // A new selection made while this page is already showing.
    let nav_selection = Memo::new(move |_| nav.state().selected_product());
    Effect::new(move || {
        let id = nav_selection.get();
        selection.update(|s| s.follow(id));
    });

    let open = Callback::new(move |id: &'static str| {
        selection.update(|s| s.open(id));
        scroll::scroll_to_top(true);
    });
    let close = Callback::new(move |()| selection.update(CatalogSelection::close));

    move || match selection.with(CatalogSelection::product) {
        Some(product) => view! { <ProductDetail product=product close=close/> }.into_any(),
        None => view! { <ProductGrid open=open/> }.into_any(),
    }
}

#[component]
fn ProductGrid(open: Callback<&'static str>) -> impl IntoView {
    let nav = use_navigator();

    view! {
        <section class="page-hero">
            <div class="section-head">
                <div>
                    <button class="link-back" on:click=move |_| nav.back_to_home()>"← Back to Home"</button>
                    <h1 class="page-title">"Our Products" <br/> <span class="text-gradient">"Portfolio."</span></h1>
                </div>
                <p class="section-head__aside section-head__aside--quote">
                    "\"Excellence in every fiber. Explore our range of premium branding and packaging solutions.\""
                </p>
            </div>
            <div class="product-grid">
                {PRODUCTS
                    .iter()
                    .map(|product| {
                        let id = product.id;
                        view! {
                            <button class="product-card" on:click=move |_| open.run(id)>
                                <div class="product-card__media">
                                    <img src=product.image alt=product.title/>
                                    <span class="product-card__arrow">"→"</span>
                                </div>
                                <h3>{product.title}</h3>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn spec_list(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="spec-card">
            <h4>{title}</h4>
            <ul>{items.iter().map(|item| view! { <li>"✓ " {*item}</li> }).collect_view()}</ul>
        </div>
    }
}

#[component]
fn ProductDetail(product: &'static Product, close: Callback<()>) -> impl IntoView {
    let nav = use_navigator();
    let tagline = (!product.tagline.is_empty()).then(|| view! { <h2 class="product-detail__tagline">{product.tagline}</h2> });
    let secondary = (!product.secondary_tagline.is_empty())
        .then(|| view! { <p class="product-detail__secondary">{product.secondary_tagline}</p> });

    view! {
        <section class="product-detail">
            <div class="product-detail__nav">
                <button class="link-back link-back--muted" on:click=move |_| close.run(())>"← Back to Catalog"</button>
                <button class="link-exit" on:click=move |_| nav.back_to_home()>"Exit to Home"</button>
            </div>

            <div class="product-detail__hero">
                <div class="product-detail__copy">
                    <span class="eyebrow">"✦ Premium Specification"</span>
                    {tagline}
                    <h1 class="page-title">{product.title}</h1>
                    {secondary}
                    <p class="product-detail__quote">"\"" {product.description} "\""</p>
                    <div class="spec-grid">
                        {spec_list("Materials", product.materials)}
                        {spec_list("Finishing", product.finishing)}
                    </div>
                    <div class="product-detail__cta">
                        <button class="btn btn--dark" on:click=move |_| nav.back_to_home()>"Request Samples"</button>
                        <div class="meta-pair">
                            <span class="eyebrow eyebrow--muted">"Response Time"</span>
                            <strong>"UNDER 12 HOURS"</strong>
                        </div>
                    </div>
                </div>
                <div class="product-detail__media">
                    <img src=product.image alt=product.title/>
                    <span class="product-detail__badge">"Precision QC"</span>
                </div>
            </div>

            <div class="product-detail__features">
                <div class="section-head section-head--center">
                    <span class="eyebrow">"Unmatched Standards"</span>
                    <h2 class="section-title">"Premium Features"</h2>
                    <p class="lead lead--muted">"\"A Showcase of Quality, Innovation, and Custom Labels.\""</p>
                </div>
                <div class="card-grid card-grid--3">
                    {product
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature-card">
                                    <span class="feature-card__icon">{feature.kind.glyph()}</span>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="spec-grid spec-grid--wide">
                {spec_list("Customization", product.customization)}
                {spec_list("Applications", product.applications)}
            </div>

            <div class="product-detail__gallery">
                <h2 class="section-title section-title--md">"Detailed Gallery"</h2>
                <div class="card-grid card-grid--3">
                    {product
                        .gallery
                        .iter()
                        .map(|image| view! { <img class="gallery-tile" src=*image alt="Gallery item"/> })
                        .collect_view()}
                </div>
            </div>

            <div class="cta-panel">
                <span class="eyebrow">"Ready to Transform?"</span>
                <h2>"Enhance your brand with our " <br/> {product.title} "."</h2>
                <p>
                    "Get started today for customized solutions that stand out! Our production team is standing by to bring your vision to life with world-class precision."
                </p>
                <button class="btn btn--primary" on:click=move |_| nav.back_to_home()>"Get Started Today"</button>
            </div>
        </section>
    }
}
