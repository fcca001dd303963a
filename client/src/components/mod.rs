//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and the home page sections. They read
//! the navigator and UI state from Leptos context providers set up by the
//! app root.

pub mod about_teaser;
pub mod clients_strip;
pub mod contact_section;
pub mod footer;
pub mod header;
pub mod hero;
pub mod inquiry_form;
pub mod journey;
pub mod product_teaser;
pub mod progress_bar;
pub mod responsive_scaler;
pub mod slideshow;
pub mod stat_counter;
pub mod whatsapp_button;
pub mod why_choose;
