//! "Why RKS?" reasons grid and the product showcase video.

use leptos::prelude::*;

use crate::app::use_navigator;
use crate::content::company::WHY_CHOOSE;
use crate::state::view::View;

const SHOWCASE_VIDEO: &str = "https://cloud-1de12d.becdn.net/customfile/51d4fb2aae1e3d9a3e578199dc33f25d8c1373ebb9b62945f17fdf33f6077740/Woven-label-and-tag---R-K-S-LABELS-1080p-h264-.mp4";

#[component]
pub fn WhyChoose() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <section class="why-choose">
            <div class="showcase">
                <div class="showcase__copy">
                    <span class="eyebrow">"Brand Experience"</span>
                    <h2 class="section-title">"Experience our exclusive" <br/> <span class="text-gradient">"range of Products line."</span></h2>
                    <button class="btn btn--dark" on:click=move |_| nav.to(View::Contact)>
                        "Contact Us"
                    </button>
                </div>
                <div class="showcase__video">
                    <video autoplay=true muted=true loop=true playsinline=true>
                        <source src=SHOWCASE_VIDEO type="video/mp4"/>
                    </video>
                </div>
            </div>

            <div class="section-head section-head--center">
                <span class="eyebrow">"Excellence in Every Detail"</span>
                <h2 class="section-title">"Why RKS?"</h2>
            </div>
            <div class="card-grid card-grid--5">
                {WHY_CHOOSE
                    .into_iter()
                    .map(|reason| {
                        view! {
                            <div class="card card--center">
                                <h4>{reason.title}</h4>
                                <p>{reason.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
