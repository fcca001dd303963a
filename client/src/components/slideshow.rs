//! Auto-advancing image slideshow with progress dots.

use leptos::prelude::*;

use crate::state::carousel::CarouselState;
use crate::util::timer::use_interval;

#[component]
pub fn Slideshow(
    images: &'static [&'static str],
    interval_ms: u32,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let carousel = RwSignal::new(CarouselState::new(images.len()));
    use_interval(interval_ms, move || {
        carousel.update(|c| {
            c.tick();
        });
        true
    });

    let current = move || carousel.with(CarouselState::index);

    view! {
        <div class=format!("slideshow {class}")>
            {move || {
                let image = images.get(current()).copied().unwrap_or_default();
                view! { <img class="slideshow__image" src=image alt=""/> }
            }}
            <div class="slideshow__dots">
                {(0..images.len())
                    .map(|i| {
                        view! {
                            <button
                                class=move || {
                                    if current() == i { "slideshow__dot slideshow__dot--active" } else { "slideshow__dot" }
                                }
                                aria-label=format!("Show slide {}", i + 1)
                                on:click=move |_| carousel.update(|c| c.go_to(i))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
