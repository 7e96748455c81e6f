//! Glyph drawing for the badge numeral.
//!
//! Primary path rasterizes outlines from a bold system font; when none can
//! be loaded the numeral is drawn from built-in 5x7 bitmap glyphs, repeated
//! over a 3x3 jitter grid to simulate weight.

use ab_glyph::{point, Font, FontVec, Glyph, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

/// Well-known bold faces, one per platform family.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Numeral height relative to the canvas (42px on a 64px badge).
const TEXT_SCALE: f32 = 0.66;

const GLYPH_WIDTH: i32 = 5;
const GLYPH_HEIGHT: i32 = 7;
const BITMAP_SCALE: i32 = 4;

/// Try to load a scalable font from the filesystem.
///
/// Returns `None` when nothing loads; the caller falls back to bitmap
/// glyphs instead of failing the render.
pub(crate) fn load_scalable_font() -> Option<FontVec> {
    for path in FONT_CANDIDATES {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        match FontVec::try_from_vec(bytes) {
            Ok(font) => {
                tracing::debug!("Loaded badge font from {path}");
                return Some(font);
            }
            Err(err) => tracing::debug!("Rejecting badge font {path}: {err}"),
        }
    }

    tracing::info!("No scalable font found, tray badges will use bitmap glyphs");
    None
}

/// Draw `text` centered on the canvas from font outlines.
pub(crate) fn draw_scaled_text(canvas: &mut RgbaImage, font: &FontVec, text: &str) {
    let size = canvas.width() as f32;
    let scale = PxScale::from(size * TEXT_SCALE);
    let scaled = font.as_scaled(scale);

    let width: f32 = text
        .chars()
        .map(|c| scaled.h_advance(scaled.glyph_id(c)))
        .sum();
    let height = scaled.ascent() - scaled.descent();
    let mut caret = point((size - width) / 2.0, (size - height) / 2.0 + scaled.ascent());

    for ch in text.chars() {
        let glyph: Glyph = scaled.glyph_id(ch).with_scale_and_position(scale, caret);
        caret.x += scaled.h_advance(glyph.id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                blend_white(canvas, x, y, coverage);
            });
        }
    }
}

/// Draw `text` centered on the canvas from bitmap glyphs, jittered 3x3 for
/// boldness.
pub(crate) fn draw_bitmap_text(canvas: &mut RgbaImage, text: &str) {
    let advance = (GLYPH_WIDTH + 1) * BITMAP_SCALE;
    let glyph_count = text.chars().count() as i32;
    let text_width = advance * glyph_count - BITMAP_SCALE;
    let start_x = (canvas.width() as i32 - text_width) / 2;
    let start_y = (canvas.height() as i32 - GLYPH_HEIGHT * BITMAP_SCALE) / 2;

    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = glyph_rows(ch) else {
            continue;
        };
        let origin_x = start_x + i as i32 * advance;

        for jitter_y in -1..=1 {
            for jitter_x in -1..=1 {
                draw_glyph(canvas, rows, origin_x + jitter_x, start_y + jitter_y);
            }
        }
    }
}

fn draw_glyph(canvas: &mut RgbaImage, rows: &[u8; 7], origin_x: i32, origin_y: i32) {
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (0x10 >> col) == 0 {
                continue;
            }
            for dy in 0..BITMAP_SCALE {
                for dx in 0..BITMAP_SCALE {
                    let x = origin_x + col * BITMAP_SCALE + dx;
                    let y = origin_y + row as i32 * BITMAP_SCALE + dy;
                    blend_white(canvas, x, y, 1.0);
                }
            }
        }
    }
}

/// Whiten a badge pixel by `coverage`. Pixels outside the masked disc
/// (alpha 0) are left untouched so text never escapes the silhouette.
fn blend_white(canvas: &mut RgbaImage, x: i32, y: i32, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    if pixel[3] == 0 {
        return;
    }

    let alpha = coverage.clamp(0.0, 1.0);
    for channel in 0..3 {
        let base = f32::from(pixel[channel]);
        pixel[channel] = (base + (255.0 - base) * alpha) as u8;
    }
}

/// 5x7 glyph rows for the characters a temperature numeral can contain.
fn glyph_rows(ch: char) -> Option<&'static [u8; 7]> {
    static DIGITS: [[u8; 7]; 10] = [
        [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
        [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
        [0x0E, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1F], // 2
        [0x0E, 0x11, 0x01, 0x06, 0x01, 0x11, 0x0E], // 3
        [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
        [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
        [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
        [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
        [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
        [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
    ];
    static MINUS: [u8; 7] = [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00];

    match ch {
        '0'..='9' => {
            let index = (ch as usize) - ('0' as usize);
            Some(&DIGITS[index])
        }
        '-' => Some(&MINUS),
        _ => None,
    }
}
