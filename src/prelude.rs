//! Prelude module for the date_picker_core crate.
//!
//! Re-exports the derive_more macros used across modules.

pub use derive_more::Display;
