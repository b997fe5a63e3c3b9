// File: crates/barchart-svg/src/renderer.rs
// Summary: Binds bar layout geometry to SVG group/rect/text elements.

use anyhow::Result;

use barchart_core::layout::format_value;
use barchart_core::types::{HEIGHT, WIDTH};
use barchart_core::{layout_bars, Dataset, ZeroMaxPolicy};

use crate::document::Document;
use crate::element::Element;
use crate::theme::Theme;

/// Relative vertical offset applied to label glyphs (SVG `dy`).
const LABEL_DY: &str = "1.75em";

pub struct RenderOptions {
    pub width: f64,
    pub height: f64,
    /// Remove any children the container already has before appending bars.
    /// With `false`, re-rendering appends a second set of bars.
    pub clear_existing: bool,
    pub zero_max: ZeroMaxPolicy,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            clear_existing: true,
            zero_max: ZeroMaxPolicy::default(),
            theme: Theme::classic(),
        }
    }
}

pub struct BarChart {
    pub data: Dataset,
}

impl BarChart {
    pub fn new(data: Dataset) -> Self {
        Self { data }
    }

    /// Render one labeled group per data point into `container`, sizing the
    /// container to the configured surface.
    pub fn render(&self, opts: &RenderOptions, container: &mut Element) -> Result<()> {
        let layout = layout_bars(&self.data, opts.width, opts.height, opts.zero_max)?;

        if opts.clear_existing {
            container.clear_children();
        }
        container.set_attr("width", format_value(opts.width));
        container.set_attr("height", format_value(opts.height));

        for bar in &layout.bars {
            let mut group = Element::new("g")
                .with_attr("transform", format!("translate({}, 0)", format_value(bar.x)));

            group.append(
                Element::new("rect")
                    .with_attr("y", format_value(bar.y))
                    .with_attr("width", format_value(bar.width))
                    .with_attr("height", format_value(bar.height))
                    .with_attr("fill", opts.theme.bar_fill),
            );

            let mut label = Element::new("text")
                .with_attr("x", format_value(bar.label_x))
                .with_attr("y", format_value(bar.label_y))
                .with_attr("dy", LABEL_DY)
                .with_attr("fill", opts.theme.label_fill)
                .with_attr("font-family", opts.theme.label_font)
                .with_attr("font-size", opts.theme.label_size)
                .with_attr("text-anchor", opts.theme.label_anchor);
            label.set_text(bar.label.clone());
            group.append(label);

            container.append(group);
        }
        Ok(())
    }

    /// Render into the first element `selector` matches, or silently draw
    /// nothing when the selection comes up empty. Returns whether anything
    /// was drawn.
    pub fn render_into(
        &self,
        opts: &RenderOptions,
        doc: &mut Document,
        selector: &str,
    ) -> Result<bool> {
        match doc.select_mut(selector) {
            Some(container) => {
                self.render(opts, container)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Serialize a standalone chart under a fresh `<svg class="chart">` root.
    pub fn to_svg_string(&self, opts: &RenderOptions) -> Result<String> {
        let mut root = Element::svg().with_attr("class", "chart");
        self.render(opts, &mut root)?;
        Ok(root.to_string())
    }

    /// Render and write a standalone SVG file at `path`.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let markup = self.to_svg_string(opts)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, markup)?;
        Ok(())
    }
}
