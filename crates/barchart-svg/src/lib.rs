// File: crates/barchart-svg/src/lib.rs
// Summary: SVG backend entry point; element tree, selection, theming, renderer.

pub mod document;
pub mod element;
pub mod renderer;
pub mod theme;

pub use document::Document;
pub use element::Element;
pub use renderer::{BarChart, RenderOptions};
pub use theme::Theme;

// Callers usually want the core types alongside the renderer.
pub use barchart_core::{Dataset, DatasetError, ZeroMaxPolicy};
