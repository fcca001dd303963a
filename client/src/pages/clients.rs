//! Partner brands, testimonials and certifications.

use leptos::prelude::*;

use crate::app::use_navigator;
use crate::content::clients::{CERTIFICATIONS, PARTNER_LOGOS, TESTIMONIALS};
use crate::state::view::View;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <section class="page-hero page-hero--center">
            <button class="link-back" on:click=move |_| nav.back_to_home()>"← Back to Home"</button>
            <h1 class="page-title">"Powering Global" <br/> <span class="text-gradient">"Identity."</span></h1>
            <p class="lead lead--muted">
                "\"We are judged by the company we keep. From boutique designers to global retail giants, our clients rely on RKS for branding excellence.\""
            </p>
        </section>

        <section class="partners">
            <h2 class="section-title section-title--md">"Strategic Partners"</h2>
            <div class="logo-grid">
                {PARTNER_LOGOS
                    .iter()
                    .map(|client| {
                        view! {
                            <div class="logo-tile">
                                <img src=client.logo_url() alt=client.name loading="lazy"/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="testimonials">
            <div class="section-head section-head--center">
                <span class="eyebrow">"Client Voices"</span>
                <h2 class="section-title">"The Voice of Quality"</h2>
            </div>
            <div class="card-grid card-grid--3">
                {TESTIMONIALS
                    .iter()
                    .map(|review| {
                        view! {
                            <figure class="testimonial">
                                <blockquote>"\"" {review.text} "\""</blockquote>
                                <figcaption>
                                    <img src=review.avatar alt=review.name/>
                                    <div>
                                        <h4>{review.name}</h4>
                                        <span>{format!("{} · {}", review.position, review.brand)}</span>
                                    </div>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="certifications">
            <div>
                <span class="eyebrow">"Hall of Excellence"</span>
                <h2>"Certified for" <br/> <span class="text-blue">"Global Standard."</span></h2>
                <p>
                    "Our manufacturing facility is audited and certified by international bodies to ensure every product meets global compliance."
                </p>
            </div>
            <div class="card-grid card-grid--2">
                {CERTIFICATIONS
                    .iter()
                    .map(|cert| {
                        view! {
                            <div class="card card--dark">
                                <h4>{cert.title}</h4>
                                <p>{cert.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="cta-panel cta-panel--blue">
            <span class="eyebrow">"Exclusive Partnership"</span>
            <h2>"Join the Elite" <br/> "Circle of Brands."</h2>
            <p>
                "Ready to elevate your brand identity with a partner that understands the demands of global retail? Let's start a conversation."
            </p>
            <button class="btn btn--light" on:click=move |_| nav.to(View::Contact)>"Start Project →"</button>
        </section>
    }
}
