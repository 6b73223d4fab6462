//! Core domain for the tutoring invoice tool: the invoice data model,
//! pricing rules, and the PDF renderer.
//!
//! The UI crate owns session state and user interaction; everything here
//! is pure and synchronous so it can be exercised directly in tests.

pub mod models;
pub mod pricing;
pub mod render;

pub use models::*;
