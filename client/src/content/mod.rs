//! Static site content.
//!
//! SYSTEM CONTEXT
//! ==============
//! All copy, imagery links and catalog records are compiled in as `'static`
//! data. Pages read these tables directly; nothing is fetched at runtime.

pub mod catalog;
pub mod clients;
pub mod company;
pub mod infrastructure;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;
