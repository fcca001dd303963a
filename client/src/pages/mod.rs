//! Page modules, one per [`View`].
//!
//! ARCHITECTURE
//! ============
//! Each page composes sections from `components` and content from
//! `content`. [`render_view`] is the only place a view becomes markup; adding
//! a variant to [`View`] fails to compile until it is handled here.

pub mod about;
pub mod clients;
pub mod contact;
pub mod home;
pub mod infrastructure;
pub mod products;

use leptos::prelude::*;

use crate::state::view::View;

/// Render the page for `view`.
pub fn render_view(view: View) -> AnyView {
    match view {
        View::Home => view! { <home::HomePage/> }.into_any(),
        View::Products => view! { <products::ProductsPage/> }.into_any(),
        View::About => view! { <about::AboutPage/> }.into_any(),
        View::Infrastructure => view! { <infrastructure::InfrastructurePage/> }.into_any(),
        View::Clients => view! { <clients::ClientsPage/> }.into_any(),
        View::Contact => view! { <contact::ContactPage/> }.into_any(),
    }
}
