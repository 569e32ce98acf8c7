//! Rasterization: parse the composed SVG scene and encode lossy WebP.

use anyhow::{Context, Result};
use resvg::{tiny_skia, usvg};

/// Shared rasterizer for one catalog run.
///
/// Holds the parsed font database so repeated renders don't reload
/// system fonts per card.
pub struct Rasterizer {
    options: usvg::Options<'static>,
}

impl Rasterizer {
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        Self { options }
    }

    /// Parse `svg` and render it into a `size` x `size` pixmap,
    /// returning straight (unpremultiplied) RGBA bytes.
    pub fn render(&self, svg: &str, size: u32) -> Result<Vec<u8>> {
        let tree = usvg::Tree::from_str(svg, &self.options)
            .context("failed to parse generated SVG scene")?;
        let mut pixmap =
            tiny_skia::Pixmap::new(size, size).context("invalid raster dimensions")?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        // tiny-skia stores premultiplied alpha; the encoder wants straight RGBA.
        let mut rgba = Vec::with_capacity((size as usize) * (size as usize) * 4);
        for px in pixmap.pixels() {
            let c = px.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Ok(rgba)
    }

    /// Render and encode at the given WebP quality (0-100).
    pub fn encode_webp(&self, svg: &str, size: u32, quality: f32) -> Result<Vec<u8>> {
        let rgba = self.render(svg, size)?;
        let encoder = webp::Encoder::from_rgba(&rgba, size, size);
        Ok(encoder.encode(quality).to_vec())
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}
