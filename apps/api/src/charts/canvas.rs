//! Minimal raster canvas over `image::RgbaImage`: rectangles, wedges and
//! bitmap text, clipped to the image bounds. Coordinates are signed so
//! shapes may hang off the edge.

use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

use crate::charts::glyphs::{glyph, text_width, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::charts::ChartError;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// `0xRRGGBB` to an opaque pixel.
pub const fn rgb(hex: u32) -> Rgba<u8> {
    Rgba([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 0xFF])
}

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, TRANSPARENT),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    fn put(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, color);
    }

    pub fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64, color: Rgba<u8>) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width).min(self.width() as i64);
        let y1 = (y + height).min(self.height() as i64);
        for py in y0..y1 {
            for px in x0..x1 {
                self.image.put_pixel(px as u32, py as u32, color);
            }
        }
    }

    /// Fills the circular sector centred on (`cx`, `cy`) that starts at
    /// `start_deg` and sweeps `sweep_deg` counter-clockwise, 0° pointing right.
    pub fn fill_wedge(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
        color: Rgba<u8>,
    ) {
        if sweep_deg <= 0.0 || radius <= 0.0 {
            return;
        }
        let full = sweep_deg >= 360.0;
        let r2 = radius * radius;
        let y_min = (cy - radius).floor() as i64;
        let y_max = (cy + radius).ceil() as i64;
        let x_min = (cx - radius).floor() as i64;
        let x_max = (cx + radius).ceil() as i64;

        for py in y_min..=y_max {
            for px in x_min..=x_max {
                // sample at pixel centre; image y grows downwards
                let dx = px as f64 + 0.5 - cx;
                let dy = cy - (py as f64 + 0.5);
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                if !full {
                    let angle = dy.atan2(dx).to_degrees();
                    let offset = (angle - start_deg).rem_euclid(360.0);
                    if offset >= sweep_deg {
                        continue;
                    }
                }
                self.put(px, py, color);
            }
        }
    }

    /// Draws `text` with its top-left corner at (`x`, `y`).
    pub fn draw_text(&mut self, x: i64, y: i64, text: &str, scale: u32, color: Rgba<u8>) {
        let scale = scale.max(1) as i64;
        let mut pen_x = x;
        for c in text.chars() {
            for (row, bits) in glyph(c).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        self.fill_rect(
                            pen_x + col as i64 * scale,
                            y + row as i64 * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
            pen_x += GLYPH_ADVANCE as i64 * scale;
        }
    }

    /// Draws `text` horizontally centred on `cx`, vertically centred on `cy`.
    pub fn draw_text_centered(&mut self, cx: i64, cy: i64, text: &str, scale: u32, color: Rgba<u8>) {
        let w = text_width(text, scale) as i64;
        let h = (GLYPH_HEIGHT * scale.max(1)) as i64;
        self.draw_text(cx - w / 2, cy - h / 2, text, scale, color);
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, ChartError> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            self.image.as_raw(),
            self.width(),
            self.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(bytes)
    }
}

/// Truncates `text` so it is at most `max_width` px wide at `scale`, marking
/// the cut with a trailing `.`.
pub fn fit_text(text: &str, scale: u32, max_width: u32) -> String {
    if text_width(text, scale) <= max_width {
        return text.to_string();
    }
    let max_chars = ((max_width / scale.max(1) + 1) / GLYPH_ADVANCE) as usize;
    if max_chars == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('.');
    cut
}
