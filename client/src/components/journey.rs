//! "Masterpiece journey": a six-step sequence from raw material to dispatch,
//! advancing on its own every [`JOURNEY_STEP_MS`].

use leptos::prelude::*;

use crate::content::company::JOURNEY_STEPS;
use crate::util::animation::{JOURNEY_STEP_MS, JOURNEY_STEP_COUNT, JourneySequence};
use crate::util::timer::use_interval;
use crate::util::whatsapp::{JOURNEY_GREETING, site_link};

#[component]
pub fn Journey() -> impl IntoView {
    let journey = RwSignal::new(JourneySequence::default());
    use_interval(JOURNEY_STEP_MS, move || {
        journey.update(JourneySequence::advance);
        true
    });

    let step = move || journey.with(JourneySequence::step);
    let copy = move || JOURNEY_STEPS[usize::from(step() - 1)];

    view! {
        <section class="journey">
            <div class="journey__head">
                <span class="eyebrow">"Advanced Manufacturing Journey"</span>
                <h2 class="section-title">
                    "Transforming Concepts" <br/> <span class="text-gradient">"into RKS Masterpieces."</span>
                </h2>
            </div>
            <div class="journey__stage">
                {move || {
                    let step = step();
                    view! {
                        <div class=format!("journey__scene journey__scene--{step}")>
                            <div class="journey__material"></div>
                            <div class="journey__label" class:visible={move || step >= 2}></div>
                            <div class="journey__tag" class:visible={move || step >= 3}></div>
                            <div class="journey__box" class:visible={move || step >= 4}></div>
                            <div class="journey__bag" class:visible={move || step >= 5}></div>
                            <div class="journey__truck" class:visible={move || step >= 6}></div>
                        </div>
                    }
                }}
                <div class="journey__caption">
                    <span class="eyebrow">{move || format!("Step {:02} / 06", step())}</span>
                    <h3>{move || copy().title}</h3>
                    <p>{move || copy().description}</p>
                </div>
                <div class="journey__rail">
                    {(1..=JOURNEY_STEP_COUNT)
                        .map(|i| {
                            view! {
                                <button
                                    class="journey__dot"
                                    class:reached=move || journey.with(|j| j.has_reached(i))
                                    aria-label=format!("Step {i}")
                                    on:click=move |_| journey.update(|j| j.go_to(i))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="journey__footer">
                <div class="journey__facts">
                    <div><span class="eyebrow eyebrow--muted">"Current Stage"</span><strong>"AUTOMATED PRECISION"</strong></div>
                    <div><span class="eyebrow eyebrow--muted">"Quality Control"</span><strong>"ISO CERTIFIED"</strong></div>
                    <div><span class="eyebrow eyebrow--muted">"Final Output"</span><strong>"EXPORT READY"</strong></div>
                </div>
                <a class="btn btn--accent" href=site_link(JOURNEY_GREETING) target="_blank" rel="noopener noreferrer">
                    "Start Your Journey →"
                </a>
            </div>
        </section>
    }
}
