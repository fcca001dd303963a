//! Floating click-to-chat button.

use leptos::prelude::*;

use crate::util::whatsapp::{GREETING, site_link};

#[component]
pub fn WhatsAppButton() -> impl IntoView {
    view! {
        <a
            class="whatsapp-button"
            href=site_link(GREETING)
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Chat on WhatsApp"
        >
            <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M20.52 3.48A11.78 11.78 0 0 0 12.06 0C5.54 0 .25 5.29.25 11.81c0 2.08.54 4.11 1.58 5.9L0 24l6.5-1.7a11.8 11.8 0 0 0 5.56 1.42h.01c6.52 0 11.81-5.29 11.81-11.81 0-3.15-1.23-6.11-3.36-8.43zm-8.46 18.25h-.01a9.8 9.8 0 0 1-4.99-1.36l-.36-.21-3.86 1 1.03-3.76-.23-.39a9.8 9.8 0 0 1-1.5-5.2C2.14 6.45 6.7 1.9 12.06 1.9c2.62 0 5.08 1.02 6.93 2.87a9.73 9.73 0 0 1 2.87 6.94c0 5.36-4.56 10.02-9.8 10.02z"></path>
            </svg>
            <span class="whatsapp-button__label">"WhatsApp"</span>
        </a>
    }
}
