//! Promotion Engine Module
//!
//! Turns the configured promotion rules into discount lines for a basket
//! snapshot. Rules are applied on invoice generation, never while items
//! are being added.

mod engine;
mod rules;

pub use engine::*;
