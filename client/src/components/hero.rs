//! Home page hero carousel.
//!
//! Three slides advance every [`HERO_INTERVAL_MS`] while the pointer is off
//! the image stage. The arrows step manually in either direction.

use leptos::prelude::*;

use crate::app::use_navigator;
use crate::content::company::HERO_SLIDES;
use crate::state::carousel::{CarouselState, HERO_INTERVAL_MS};
use crate::state::view::View;
use crate::util::timer::use_interval;

#[component]
pub fn Hero() -> impl IntoView {
    let nav = use_navigator();
    let carousel = RwSignal::new(CarouselState::new(HERO_SLIDES.len()));

    use_interval(HERO_INTERVAL_MS, move || {
        carousel.update(|c| {
            c.tick();
        });
        true
    });

    let slide = move || HERO_SLIDES[carousel.with(CarouselState::index)];
    let motion_class =
        move || format!("hero__slide hero__slide--{}", carousel.with(|c| c.direction().class_suffix()));

    view! {
        <section class="hero">
            <div class=move || format!("hero__bloom hero__bloom--{}", slide().accent)></div>
            <div class="hero__inner">
                <div class="hero__copy">
                    {move || {
                        let slide = slide();
                        view! {
                            <div class="hero__copy-slide">
                                <div class="hero__eyebrow">
                                    <span class="hero__category">{slide.category}</span>
                                    <span class="hero__rule"></span>
                                    <span class="hero__phase">{format!("PHASE {}", slide.phase)}</span>
                                </div>
                                <h1 class="hero__title">
                                    {slide.title_lead()}
                                    <br/>
                                    <span class="text-gradient">{slide.title_rest()}</span>
                                </h1>
                                <p class="hero__description">{format!("\u{201c}{}\u{201d}", slide.description)}</p>
                            </div>
                        }
                    }}
                    <div class="hero__actions">
                        <button class="btn btn--dark btn--xl" on:click=move |_| nav.to(View::Contact)>
                            "Start Collaboration"
                            <span class="btn__icon">"→"</span>
                        </button>
                        <div class="hero__badge">
                            <span class="eyebrow eyebrow--muted">"Export Standard"</span>
                            <span class="hero__badge-value">"CERTIFIED QUALITY"</span>
                        </div>
                    </div>
                </div>

                <div
                    class="hero__stage"
                    on:mouseenter=move |_| carousel.update(|c| c.set_paused(true))
                    on:mouseleave=move |_| carousel.update(|c| c.set_paused(false))
                >
                    {move || {
                        let slide = slide();
                        view! {
                            <div class=motion_class>
                                <img class="hero__image" src=slide.image alt=slide.title/>
                                <div class="hero__glass">
                                    <span class="eyebrow eyebrow--light">"Premium QC"</span>
                                    <h4>"RKS AUTHENTIC"</h4>
                                </div>
                            </div>
                        }
                    }}
                    <div class="hero__arrows">
                        <button class="hero__arrow" aria-label="Previous slide" on:click=move |_| carousel.update(CarouselState::prev)>
                            "‹"
                        </button>
                        <button class="hero__arrow" aria-label="Next slide" on:click=move |_| carousel.update(CarouselState::next)>
                            "›"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
