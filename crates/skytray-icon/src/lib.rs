//! Tray badge rendering for Skytray
//!
//! Rasterizes a weather snapshot into a fixed-size circular PNG badge:
//! condition-tinted background, alpha-masked disc, large centered integer
//! temperature. A missing scalable font is never an error; rendering falls
//! back to built-in bitmap glyphs. Only PNG encoding can fail.

mod font;

use ab_glyph::FontVec;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use thiserror::Error;

use skytray_weather::{Condition, WeatherSnapshot};

/// Badge side length in pixels.
pub const ICON_SIZE: u32 = 64;

/// Icon rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode tray icon PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Renders weather snapshots into tray badge PNGs.
pub struct IconRenderer {
    size: u32,
    font: Option<FontVec>,
}

impl IconRenderer {
    /// Renderer using the best scalable font found on the system, if any.
    pub fn new() -> Self {
        Self {
            size: ICON_SIZE,
            font: font::load_scalable_font(),
        }
    }

    /// Renderer with an explicit font, or none to force the bitmap path.
    pub fn with_font(font: Option<FontVec>) -> Self {
        Self {
            size: ICON_SIZE,
            font,
        }
    }

    pub fn has_scalable_font(&self) -> bool {
        self.font.is_some()
    }

    /// Render the condition-tinted badge for a snapshot.
    pub fn render_badge(&self, snapshot: &WeatherSnapshot) -> Result<Vec<u8>, RenderError> {
        let mut canvas = RgbaImage::from_pixel(
            self.size,
            self.size,
            condition_color(snapshot.condition),
        );
        apply_circle_mask(&mut canvas);
        self.draw_temperature(&mut canvas, snapshot.temperature);
        encode_png(&canvas)
    }

    /// Degraded variant for a bare temperature: neutral gradient instead of
    /// a condition tint.
    pub fn render_plain(&self, temperature: f64) -> Result<Vec<u8>, RenderError> {
        let mut canvas = RgbaImage::new(self.size, self.size);
        fill_gradient(&mut canvas);
        apply_circle_mask(&mut canvas);
        self.draw_temperature(&mut canvas, temperature);
        encode_png(&canvas)
    }

    fn draw_temperature(&self, canvas: &mut RgbaImage, temperature: f64) {
        let text = temperature_text(temperature);
        match &self.font {
            Some(font) => font::draw_scaled_text(canvas, font, &text),
            None => font::draw_bitmap_text(canvas, &text),
        }
    }
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Integer truncation, no decimals, no unit symbol.
fn temperature_text(temperature: f64) -> String {
    format!("{}", temperature.trunc() as i32)
}

/// Background tint per condition. Total: conditions without a dedicated
/// color share the violet default.
fn condition_color(condition: Condition) -> Rgba<u8> {
    let rgb = match condition {
        Condition::ClearSky => [255, 193, 7],
        Condition::PartlyCloudy => [158, 158, 158],
        Condition::Foggy => [189, 189, 189],
        Condition::Drizzle | Condition::Rainy | Condition::RainShowers => [33, 150, 243],
        Condition::Thunderstorm | Condition::ThunderstormWithHail => [63, 81, 181],
        Condition::Snowy
        | Condition::SnowGrains
        | Condition::SnowShowers
        | Condition::FreezingRain => [224, 247, 250],
        Condition::Unknown => [102, 126, 234],
    };
    Rgba([rgb[0], rgb[1], rgb[2], 255])
}

/// Neutral blue-to-purple vertical gradient.
fn fill_gradient(canvas: &mut RgbaImage) {
    let size = canvas.height();
    for y in 0..size {
        let ratio = f64::from(y) / f64::from(size);
        let r = (102.0 + 16.0 * ratio) as u8;
        let g = (126.0 - 51.0 * ratio) as u8;
        let b = (234.0 - 72.0 * ratio) as u8;
        for x in 0..canvas.width() {
            canvas.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }
}

/// Clear every pixel farther from the center than the radius, leaving a
/// circular silhouette.
fn apply_circle_mask(canvas: &mut RgbaImage) {
    let size = canvas.width() as i32;
    let center = size / 2;
    let radius = size / 2;

    for y in 0..size {
        for x in 0..size {
            let dx = x - center;
            let dy = y - center;
            if dx * dx + dy * dy > radius * radius {
                canvas.put_pixel(x as u32, y as u32, Rgba([0, 0, 0, 0]));
            }
        }
    }
}

fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    canvas.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
