//! Static Gauge Renderer
//! Draws a `GaugeSpec` with plotters, to SVG text or PNG bytes.
//!
//! Layout (inside the layout margins):
//! 1. Title centered at the top
//! 2. Half-circle track over the axis range, value bar from the minimum
//! 3. Number above the arc center, delta below it (green up, red down)

use crate::charts::{DeltaDirection, GaugeGeometry, GaugeSpec};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

// Colors
const TRACK: RGBColor = RGBColor(229, 236, 246);
const BAR: RGBColor = RGBColor(31, 119, 180);
const TEXT: RGBColor = RGBColor(42, 63, 95);
const INCREASING: RGBColor = RGBColor(61, 153, 112);
const DECREASING: RGBColor = RGBColor(255, 65, 54);

const FONT: &str = "sans-serif";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Chart backend error: {0}")]
    Backend(String),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported output format `{0}` (expected .svg or .png)")]
    UnsupportedFormat(String),
}

fn backend_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

pub struct GaugeRenderer;

impl GaugeRenderer {
    /// Render to an SVG document.
    pub fn render_svg(spec: &GaugeSpec) -> Result<String, RenderError> {
        let size = (spec.layout.width, spec.layout.height);
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            Self::draw(&root, spec)?;
            root.present().map_err(backend_err)?;
        }
        Ok(svg)
    }

    /// Render to PNG bytes in memory.
    pub fn render_png_bytes(spec: &GaugeSpec) -> Result<Vec<u8>, RenderError> {
        let (width, height) = (spec.layout.width, spec.layout.height);
        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            Self::draw(&root, spec)?;
            root.present().map_err(backend_err)?;
        }

        let img = RgbImage::from_raw(width, height, pixels)
            .ok_or_else(|| RenderError::Backend("pixel buffer size mismatch".to_string()))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render to a file; the format follows the extension.
    pub fn render_to_file(spec: &GaugeSpec, path: &Path) -> Result<(), RenderError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "svg" => std::fs::write(path, Self::render_svg(spec)?)?,
            "png" => std::fs::write(path, Self::render_png_bytes(spec)?)?,
            _ => return Err(RenderError::UnsupportedFormat(ext)),
        }
        tracing::info!(path = %path.display(), "gauge written");
        Ok(())
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        spec: &GaugeSpec,
    ) -> Result<(), RenderError> {
        let g = GaugeGeometry::for_spec(spec);
        let px = |(x, y): (f64, f64)| (x.round() as i32, y.round() as i32);

        root.fill(&WHITE).map_err(backend_err)?;

        // Track over the whole range
        let track: Vec<(i32, i32)> = g.band(0.0, 1.0).into_iter().map(px).collect();
        root.draw(&Polygon::new(track, TRACK.filled()))
            .map_err(backend_err)?;

        // Value bar, absent when the value is not a number
        if let Some(fraction) = g.fraction(spec.value).filter(|f| *f > 0.0) {
            let bar: Vec<(i32, i32)> = g.band(0.0, fraction).into_iter().map(px).collect();
            root.draw(&Polygon::new(bar, BAR.filled()))
                .map_err(backend_err)?;
        }

        let title_style = TextStyle::from((FONT, 18).into_font())
            .color(&TEXT)
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw(&Text::new(spec.title.text.clone(), px(g.title_pos), title_style))
            .map_err(backend_err)?;

        let number_style = TextStyle::from((FONT, 40).into_font())
            .color(&TEXT)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        root.draw(&Text::new(spec.number_text(), px(g.number_pos), number_style))
            .map_err(backend_err)?;

        let delta = spec.delta_text();
        if !delta.is_empty() {
            let color = match spec.delta_direction() {
                DeltaDirection::Increasing => INCREASING,
                DeltaDirection::Decreasing => DECREASING,
                DeltaDirection::Unchanged => TEXT,
            };
            let delta_style = TextStyle::from((FONT, 20).into_font())
                .color(&color)
                .pos(Pos::new(HPos::Center, VPos::Top));
            root.draw(&Text::new(delta, px(g.delta_pos), delta_style))
                .map_err(backend_err)?;
        }

        Ok(())
    }
}
