// File: crates/barchart-core/src/scale.rs
// Summary: Linear scale mapping a value domain onto a pixel range.

/// Linear map from `[domain_min, domain_max]` onto `[range_start, range_end]`.
///
/// The range may be inverted: the classic vertical chart scale maps
/// `[0, max]` onto `[height, 0]`, so larger values land closer to the top of
/// the surface and bars grow upward from the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain_min: f64,
    pub domain_max: f64,
    pub range_start: f64,
    pub range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    /// Scale for a vertical bar chart: `[0, max]` onto `[height, 0]`.
    pub fn vertical(max: f64, height: f64) -> Self {
        Self::new((0.0, max), (height, 0.0))
    }

    /// True when the domain has no usable span (e.g. an all-zero dataset).
    pub fn is_degenerate(&self) -> bool {
        (self.domain_max - self.domain_min).abs() < f64::EPSILON
    }

    /// Map a domain value to its range coordinate.
    ///
    /// A degenerate domain collapses to `range_start` (the chart baseline)
    /// instead of producing non-finite output.
    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let span = self.domain_max - self.domain_min;
        if span.abs() < f64::EPSILON {
            return self.range_start;
        }
        self.range_start + (v - self.domain_min) / span * (self.range_end - self.range_start)
    }

    /// Map a range coordinate back to its domain value.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span.abs() < f64::EPSILON {
            return self.domain_min;
        }
        self.domain_min
            + (px - self.range_start) / range_span * (self.domain_max - self.domain_min)
    }
}
