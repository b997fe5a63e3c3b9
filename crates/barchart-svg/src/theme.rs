// File: crates/barchart-svg/src/theme.rs
// Summary: Fill and label styling inlined on rendered bars.

/// Colors and label styling for rendered bars.
///
/// Standalone SVG output carries no stylesheet, so these are inlined as
/// presentation attributes on each element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub bar_fill: &'static str,
    pub label_fill: &'static str,
    pub label_font: &'static str,
    pub label_size: &'static str,
    pub label_anchor: &'static str,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            bar_fill: "steelblue",
            label_fill: "white",
            label_font: "sans-serif",
            label_size: "10",
            label_anchor: "middle",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            bar_fill: "#4a90d9",
            label_fill: "#eeeeee",
            label_font: "sans-serif",
            label_size: "10",
            label_anchor: "middle",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::classic()
}
