//! Manufacturing floor page: headline metrics, machine cards and the
//! production process.

use leptos::prelude::*;

use crate::app::use_navigator;
use crate::content::infrastructure::{FACILITY_AREA, MACHINES, Machine, PROCESS_STEPS};
use crate::state::view::View;

const METRICS: [(&str, &str); 3] = [("99.8%", "Uptime Efficiency"), ("0.01mm", "Tolerance Level"), ("ISO", "Certified Ops")];

#[component]
pub fn InfrastructurePage() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <section class="page-hero">
            <button class="link-back" on:click=move |_| nav.back_to_home()>"← Back to Home"</button>
            <span class="eyebrow">"Manufacturing Excellence"</span>
            <h1 class="page-title page-title--xl">"The RKS" <br/> <span class="text-gradient">"Forge."</span></h1>
            <p class="product-detail__quote">
                {format!(
                    "\"Inside our {FACILITY_AREA} precision facility in Bengaluru, where advanced engineering meets the highest standards of branding artistry.\""
                )}
            </p>
            <div class="metric-row">
                {METRICS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="metric">
                                <span class="metric__value">{value}</span>
                                <span class="metric__label">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="machines">
            {MACHINES
                .iter()
                .enumerate()
                .map(|(idx, machine)| {
                    let class = if idx % 2 == 0 { "machine" } else { "machine machine--reverse" };
                    view! {
                        <article class=class>
                            <div class="machine__media">
                                <img src=machine.image alt=machine.name/>
                                <span class="machine__unit">{Machine::unit_label(idx)}</span>
                            </div>
                            <div class="machine__body">
                                <h3>{machine.name}</h3>
                                <p>{machine.description}</p>
                                <div class="machine__specs">
                                    {machine
                                        .specs
                                        .iter()
                                        .map(|spec| {
                                            view! {
                                                <div class="machine__spec">
                                                    <span class="eyebrow eyebrow--muted">{spec.label}</span>
                                                    <strong>{spec.value}</strong>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <span class="machine__status">"Operational Readiness Status: " <strong>"ACTIVE"</strong></span>
                            </div>
                        </article>
                    }
                })
                .collect_view()}
        </section>

        <section class="process">
            <div class="section-head section-head--center">
                <span class="eyebrow">"Production Flow"</span>
                <h2 class="section-title">"From Concept to Dispatch"</h2>
            </div>
            <ol class="process__steps">
                {PROCESS_STEPS
                    .into_iter()
                    .enumerate()
                    .map(|(i, step)| {
                        view! {
                            <li class="process__step">
                                <span class="process__index">{format!("{:02}", i + 1)}</span>
                                <h4>{step.title}</h4>
                                <p>{step.description}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>

        <section class="cta-panel cta-panel--blue">
            <span class="eyebrow">"Infrastructure Standard"</span>
            <h2>"Engineered for Global Scale."</h2>
            <p>
                "Our infrastructure is built to handle volume without compromising the micrometer precision that world-class brands rely on."
            </p>
            <div class="cta-panel__row">
                <button class="btn btn--light" on:click=move |_| nav.to(View::Contact)>"Schedule a Facility Visit"</button>
                <div class="meta-pair">
                    <span class="eyebrow">"Production Capacity"</span>
                    <strong>"10M+ UNITS / MO"</strong>
                </div>
            </div>
        </section>
    }
}
