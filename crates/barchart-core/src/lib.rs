// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; exports dataset, scale, and bar layout API.

pub mod dataset;
pub mod layout;
pub mod scale;
pub mod types;

pub use dataset::{Dataset, DatasetError};
pub use layout::{layout_bars, Bar, BarLayout, LayoutError, ZeroMaxPolicy};
pub use scale::LinearScale;
