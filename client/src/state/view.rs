//! In-memory view router state.
//!
//! DESIGN
//! ======
//! The app root owns a single [`ViewState`]. Children never mutate it; they
//! request a [`Transition`] through the navigation callback provided in
//! context, and the root applies it. There is no history and no deep link:
//! a reload always starts at [`View::Home`].

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::{Deserialize, Serialize};

/// Top-level pages of the site, mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Products,
    About,
    Infrastructure,
    Clients,
    Contact,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Home,
        View::Products,
        View::About,
        View::Infrastructure,
        View::Clients,
        View::Contact,
    ];

    /// Header navigation entries, in display order. Every view but `Home`,
    /// which the logo links to.
    pub const NAV: [View; 5] = {
        let mut nav = [View::Contact; 5];
        let mut i = 1;
        while i < Self::ALL.len() {
            nav[i - 1] = Self::ALL[i];
            i += 1;
        }
        nav
    };

    /// Label shown in navigation.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Products => "Products",
            View::About => "About Us",
            View::Infrastructure => "Infrastructure",
            View::Clients => "Our Clients",
            View::Contact => "Contact",
        }
    }

    /// Stable lowercase identifier, also used as the page CSS modifier.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Products => "products",
            View::About => "about",
            View::Infrastructure => "infrastructure",
            View::Clients => "clients",
            View::Contact => "contact",
        }
    }
}

/// A requested change of the current view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Show `View`, keeping any selected product.
    To(View),
    /// Open the products page with a product preselected.
    SelectProduct(&'static str),
    /// Return home and clear the product selection.
    BackToHome,
}

/// The one piece of routing state owned by the app root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    view: View,
    selected_product: Option<&'static str>,
}

impl ViewState {
    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn selected_product(&self) -> Option<&'static str> {
        self.selected_product
    }

    /// Whether a navigation entry should render as active. Home has no
    /// header entry and is never highlighted.
    #[must_use]
    pub fn is_active(&self, view: View) -> bool {
        view != View::Home && self.view == view
    }

    /// Apply a transition. Returns `true` when the visible view changed.
    pub fn apply(&mut self, transition: Transition) -> bool {
        let previous = self.view;
        match transition {
            Transition::To(view) => self.view = view,
            Transition::SelectProduct(id) => {
                self.selected_product = Some(id);
                self.view = View::Products;
            }
            Transition::BackToHome => {
                self.selected_product = None;
                self.view = View::Home;
            }
        }
        self.view != previous
    }
}
