//! Landing page.

use leptos::prelude::*;

use crate::components::about_teaser::AboutTeaser;
use crate::components::clients_strip::ClientsStrip;
use crate::components::contact_section::ContactSection;
use crate::components::hero::Hero;
use crate::components::journey::Journey;
use crate::components::product_teaser::ProductTeasers;
use crate::components::why_choose::WhyChoose;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <ProductTeasers/>
        <Journey/>
        <AboutTeaser/>
        <ClientsStrip/>
        <WhyChoose/>
        <ContactSection/>
    }
}
