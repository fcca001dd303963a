//! Contact page: slideshow header, headquarters details and the inquiry form.

use leptos::prelude::*;

use crate::app::use_navigator;
use crate::components::inquiry_form::{InquiryForm, Placeholders};
use crate::components::slideshow::Slideshow;
use crate::content::company::{CONTACT, CONTACT_BADGES, CONTACT_SLIDES};
use crate::state::carousel::CONTACT_INTERVAL_MS;

#[component]
pub fn ContactPage() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <section class="page-hero page-hero--slides">
            <Slideshow images=&CONTACT_SLIDES interval_ms=CONTACT_INTERVAL_MS class="slideshow--backdrop"/>
            <div class="page-hero__overlay">
                <button class="link-back" on:click=move |_| nav.back_to_home()>"← Return to Brand Home"</button>
                <span class="eyebrow">"Inquiry & Partnership"</span>
                <h1 class="page-title">"Direct" <br/> <span class="text-gradient">"Liaison."</span></h1>
                <p class="product-detail__quote">
                    "\"We provide high-precision branding consultation to ensure your vision is realized with world-class quality.\""
                </p>
            </div>
        </section>

        <section class="contact-vessel contact-vessel--page">
            <div class="contact-vessel__info contact-vessel__info--dark">
                <span class="eyebrow">"✦ RKS Global Hub"</span>
                <h2>"Reach out to us for any Enquiries"</h2>
                <div class="map-frame">
                    <iframe src=CONTACT.map_embed title="RKS Bengaluru facility" {..::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}></iframe>
                    <span class="map-frame__pin">"VISIT BENGALURU FACILITY"</span>
                </div>
                <div class="contact-lines">
                    <a href=CONTACT.tel()>
                        <span class="eyebrow eyebrow--muted">"Response Hotline"</span>
                        <strong>{CONTACT.phones[0]}</strong>
                        <span>{CONTACT.phones[1]}</span>
                    </a>
                    <a href=CONTACT.mailto()>
                        <span class="eyebrow eyebrow--muted">"Email Channel"</span>
                        <strong>{CONTACT.email}</strong>
                    </a>
                </div>
                <p class="contact-vessel__address">{CONTACT.address}</p>
                <span class="contact-vessel__status">"ISO 9001:2015 CERTIFIED OPS"</span>
            </div>
            <div class="contact-vessel__form">
                <InquiryForm
                    title="Start Your Collaboration"
                    subtitle="Experience the RKS standard of excellence from the first contact."
                    submit_label="Send Inquiry"
                    placeholders=Placeholders {
                        name: "Full Name",
                        phone: "+91 00000 00000",
                        email: "name@company.com",
                        message: "Tell us about your labels, tags or packaging needs...",
                    }
                />
                <div class="meta-pair">
                    <span class="eyebrow eyebrow--muted">"Response Guarantee"</span>
                    <strong>"WITHIN 4 HOURS"</strong>
                </div>
            </div>
        </section>

        <section class="badge-row">
            {CONTACT_BADGES
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="badge">
                            <span class="eyebrow eyebrow--muted">{label}</span>
                            <strong>{value}</strong>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
