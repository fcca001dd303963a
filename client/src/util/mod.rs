//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod animation;
pub mod scaler;
pub mod scroll;
pub mod timer;
pub mod viewport;
pub mod whatsapp;
