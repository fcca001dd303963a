//! Home page company story: offerings ribbon, headline stats, the "Why RKS
//! Company?" grid, mission and vision, and a WhatsApp call to action.

use leptos::prelude::*;

use crate::app::use_navigator;
use crate::components::stat_counter::StatCounterCard;
use crate::content::company::{ADVANTAGES, CONTACT, MISSION, OFFERINGS, STATS, VISION};
use crate::state::view::View;
use crate::util::whatsapp::{BRANDING_GREETING, site_link};

#[component]
pub fn AboutTeaser() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <section class="about-teaser">
            <div class="ticker">
                <div class="ticker__track">
                    {OFFERINGS
                        .into_iter()
                        .chain(OFFERINGS)
                        .map(|item| view! { <span class="ticker__item">"✦ " {item}</span> })
                        .collect_view()}
                </div>
            </div>

            <div class="about-teaser__story">
                <div>
                    <span class="eyebrow">"About RKS"</span>
                    <h2 class="section-title">
                        "Our Expertise is Built on" <br/> <span class="text-gradient">"Precision and Care."</span>
                    </h2>
                    <p class="lead">
                        "With years of expertise in the industry, " <strong>"RKS Company"</strong>
                        " provides end-to-end solutions that help businesses stand out in a crowded market."
                    </p>
                    <p class="lead lead--muted">
                        "Every label and tag we produce is a testament to our dedication to quality. We collaborate closely with our clients to ensure the final product aligns perfectly with their vision and brand values."
                    </p>
                    <button class="btn btn--dark" on:click=move |_| nav.to(View::About)>
                        "Discuss Your Project →"
                    </button>
                </div>
                <div class="stat-grid">
                    {STATS.into_iter().map(|stat| view! { <StatCounterCard stat=stat/> }).collect_view()}
                </div>
            </div>

            <div class="about-teaser__advantages">
                <div class="section-head">
                    <div>
                        <span class="eyebrow">"Our Promise"</span>
                        <h3 class="section-title section-title--md">"Why RKS Company?"</h3>
                    </div>
                    <p class="section-head__aside">
                        "We offer premium quality, custom designs, and eco-friendly options to enhance your brand’s identity."
                    </p>
                </div>
                <div class="card-grid card-grid--4">
                    {ADVANTAGES
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="card">
                                    <h4>{item.title}</h4>
                                    <p>{item.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="pillars">
                {[(MISSION, "Strategic Purpose"), (VISION, "Future Trajectory")]
                    .into_iter()
                    .map(|(pillar, caption)| {
                        view! {
                            <div class="pillar">
                                <h3>{pillar.title}</h3>
                                <p>{pillar.description}</p>
                                <span class="eyebrow eyebrow--muted">{caption} " ›"</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="cta-panel">
                <h2>"Contact us today for" <br/> <span class="text-gradient">"Creative and customizing solutions."</span></h2>
                <p>
                    "Reach out to us for premium labels, tags, and packaging solutions that elevate your brand. We're here to help you bring your vision to life."
                </p>
                <div class="cta-panel__actions">
                    <a class="btn btn--accent" href=site_link(BRANDING_GREETING) target="_blank" rel="noopener noreferrer">
                        "Get In Touch"
                    </a>
                    <div class="cta-panel__hotline">
                        <span class="eyebrow eyebrow--muted">"Enquiry Hotline"</span>
                        <a href=CONTACT.tel()>{CONTACT.phones[0]}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
