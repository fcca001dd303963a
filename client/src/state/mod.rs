//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`view`, `scaler`, `ui`, etc.) so individual
//! components can depend on small focused models. Every model here is a
//! plain value; components wrap them in `RwSignal`s.

pub mod carousel;
pub mod contact;
pub mod scaler;
pub mod ui;
pub mod view;
