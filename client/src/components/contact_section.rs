//! Home page contact block: headquarters details, map and the inquiry form.

use leptos::prelude::*;

use crate::components::inquiry_form::{InquiryForm, Placeholders};
use crate::content::company::CONTACT;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section class="contact-section">
            <div class="section-head">
                <div>
                    <span class="eyebrow">"Direct Engagement"</span>
                    <h2 class="section-title">"Let's Build Your" <br/> <span class="text-gradient">"Brand Identity."</span></h2>
                </div>
            </div>
            <div class="contact-vessel">
                <div class="contact-vessel__info">
                    <h3>"Bengaluru Headquarters"</h3>
                    <p>"Visit our precision facility to witness the intersection of branding technology and craftsmanship."</p>
                    <div class="map-frame">
                        <iframe src=CONTACT.map_embed title="RKS Precision Hub" {..::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}></iframe>
                        <span class="map-frame__pin">"RKS PRECISION HUB"</span>
                    </div>
                    <div class="contact-lines">
                        <a href=CONTACT.tel()>
                            <span class="eyebrow eyebrow--muted">"Direct Line"</span>
                            <strong>{CONTACT.phones[0]}</strong>
                        </a>
                        <a href=CONTACT.mailto()>
                            <span class="eyebrow eyebrow--muted">"Inquiry Mail"</span>
                            <strong>{CONTACT.email}</strong>
                        </a>
                    </div>
                    <span class="contact-vessel__status">"Global Logistics Active"</span>
                </div>
                <InquiryForm
                    title="Master Inquiry Form"
                    subtitle="Please provide your details for a technical consultation."
                    submit_label="Initiate Submission"
                    placeholders=Placeholders {
                        name: "e.g. John Smith",
                        phone: "+91 ...",
                        email: "brand@company.com",
                        message: "Discuss material, quantity, or design needs...",
                    }
                />
            </div>
        </section>
    }
}
