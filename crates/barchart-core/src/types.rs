// File: crates/barchart-core/src/types.rs
// Summary: Shared constants (default surface size, bar gutter, label nudge).

/// Default surface width in pixels.
pub const WIDTH: f64 = 960.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 500.0;
/// Horizontal gap left between adjacent bars, in pixels.
pub const BAR_GUTTER: f64 = 1.0;
/// Downward shift of the value label from the top of its bar, in pixels.
pub const LABEL_NUDGE: f64 = 3.0;
