//! Reading-progress bar pinned to the top of the page.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let style = move || format!("transform: scaleX({});", ui.with(|u| u.scroll_progress));

    view! { <div class="scroll-progress" style=style></div> }
}
