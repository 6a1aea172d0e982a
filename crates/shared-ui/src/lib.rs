//! Dioxus component kit shared by every dashboard screen.
//!
//! Each component lives in `components/<name>/component.rs` next to its
//! `style.css`, which the component links on first render.

pub mod components;

pub use components::*;
