//! Company story page.

use leptos::prelude::*;

use crate::app::use_navigator;
use crate::components::slideshow::Slideshow;
use crate::components::stat_counter::StatCounterCard;
use crate::content::company::{ABOUT_SLIDES, ADVANTAGES, CONTACT, MISSION, STATS, VISION};
use crate::state::carousel::ABOUT_INTERVAL_MS;
use crate::state::view::View;

#[component]
pub fn AboutPage() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <section class="page-hero page-hero--split">
            <div>
                <button class="link-back" on:click=move |_| nav.back_to_home()>"← Back to Home"</button>
                <span class="eyebrow">"The RKS Story"</span>
                <h1 class="page-title">"Where Creativity" <br/> <span class="text-gradient">"Meets Quality."</span></h1>
                <p class="lead">
                    "Welcome to RKS Company, where craftsmanship meets innovation in branding and packaging solutions."
                </p>
            </div>
            <Slideshow images=&ABOUT_SLIDES interval_ms=ABOUT_INTERVAL_MS class="slideshow--tall"/>
        </section>

        <section class="stat-band">
            <div class="stat-grid stat-grid--row">
                {STATS.into_iter().map(|stat| view! { <StatCounterCard stat=stat/> }).collect_view()}
            </div>
        </section>

        <section class="advantages">
            <div class="section-head">
                <div>
                    <span class="eyebrow">"Our Advantage"</span>
                    <h2 class="section-title">"Why RKS Company?"</h2>
                </div>
                <p class="section-head__aside">
                    "Choose RKS Company for exceptional labels, tags, and packaging solutions. We offer premium quality, custom designs, and eco-friendly options."
                </p>
            </div>
            <div class="card-grid card-grid--2">
                {ADVANTAGES
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        view! {
                            <div class="card card--numbered">
                                <span class="card__index">{format!("0{}", i + 1)}</span>
                                <h4>{item.title}</h4>
                                <p>{item.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="pillars pillars--page">
            <div class="pillar pillar--dark">
                <h4>"Mission"</h4>
                <p>{MISSION.description}</p>
                <span class="pillar__caption">"STRATEGIC PURPOSE"</span>
            </div>
            <div class="pillar pillar--blue">
                <h4>"Vision"</h4>
                <p>{VISION.description}</p>
                <span class="pillar__caption">"FUTURE TRAJECTORY"</span>
            </div>
        </section>

        <section class="collaborate">
            <div>
                <span class="eyebrow">"Start a Collaboration"</span>
                <h2 class="section-title">"Creative and" <br/> <span class="text-blue">"Customizing Solutions."</span></h2>
                <p class="lead lead--muted">
                    "Reach out to us for premium labels, tags, and packaging solutions that elevate your brand. We're here to help you bring your vision to life."
                </p>
                <div class="collaborate__cta">
                    <button class="btn btn--dark" on:click=move |_| nav.to(View::Contact)>"Get In Touch →"</button>
                    <div class="meta-pair">
                        <span class="eyebrow eyebrow--muted">"Response Guarantee"</span>
                        <strong>"UNDER 24 HOURS"</strong>
                    </div>
                </div>
            </div>
            <div class="contact-cards">
                <a class="contact-card" href=CONTACT.tel()>
                    <span class="eyebrow eyebrow--muted">"Phone Support"</span>
                    <strong>{CONTACT.phones[0]}</strong>
                    <span>{CONTACT.phones[1]}</span>
                </a>
                <div class="contact-card">
                    <span class="eyebrow eyebrow--muted">"Global HQ"</span>
                    <strong>{CONTACT.address}</strong>
                </div>
                <a class="contact-card" href=CONTACT.mailto()>
                    <span class="eyebrow eyebrow--muted">"Email Inquiry"</span>
                    <strong>{CONTACT.email}</strong>
                </a>
            </div>
        </section>
    }
}
