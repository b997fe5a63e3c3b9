// File: crates/barchart-core/src/layout.rs
// Summary: Per-bar geometry derived from a dataset and surface size.

use thiserror::Error;

use crate::dataset::Dataset;
use crate::scale::LinearScale;
use crate::types::{BAR_GUTTER, LABEL_NUDGE};

/// How to treat a dataset whose maximum is zero (nothing to scale against).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroMaxPolicy {
    /// Refuse to lay out; callers get [`LayoutError::ZeroMax`].
    #[default]
    Reject,
    /// Lay out zero-height bars resting on the baseline.
    FlatBaseline,
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("dataset maximum is zero; pass ZeroMaxPolicy::FlatBaseline to render a flat chart")]
    ZeroMax,
    #[error("surface size must be positive, got {width}x{height}")]
    BadSurface { width: f64, height: f64 },
}

/// One data point's visual record: pixel rect plus label placement.
///
/// `x` is the left edge of the bar's slot (the group translate); `y`,
/// `width`, and `height` describe the rectangle inside the slot. Label
/// coordinates are relative to the slot origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
    pub label_y: f64,
    pub label: String,
}

/// Full layout: slot width plus one [`Bar`] per data point.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub surface_width: f64,
    pub surface_height: f64,
    pub slot_width: f64,
    pub bars: Vec<Bar>,
}

/// Derive bar geometry for `data` on a `width` x `height` surface.
///
/// Each bar occupies `width / data.len()` horizontally minus a 1px gutter;
/// vertically it spans from `scale(value)` down to the baseline.
pub fn layout_bars(
    data: &Dataset,
    width: f64,
    height: f64,
    zero_max: ZeroMaxPolicy,
) -> Result<BarLayout, LayoutError> {
    if !(width > 0.0) || !(height > 0.0) {
        return Err(LayoutError::BadSurface { width, height });
    }

    let max = data.max();
    if max == 0.0 && zero_max == ZeroMaxPolicy::Reject {
        return Err(LayoutError::ZeroMax);
    }

    let scale = LinearScale::vertical(max, height);
    let slot_width = width / data.len() as f64;

    let bars = data
        .values()
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let y = scale.apply(value);
            Bar {
                index,
                value,
                x: index as f64 * slot_width,
                y,
                width: slot_width - BAR_GUTTER,
                height: height - y,
                label_x: slot_width / 2.0,
                label_y: y + LABEL_NUDGE,
                label: format_value(value),
            }
        })
        .collect();

    Ok(BarLayout {
        surface_width: width,
        surface_height: height,
        slot_width,
        bars,
    })
}

/// Format a value for display: whole numbers print bare, fractions in their
/// shortest decimal form.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
