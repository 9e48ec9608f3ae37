use super::fonts::SizedFont;
use image::{Rgba, RgbaImage};

/// Rendered ink width of `text` in pixels; 0 when nothing would be drawn
pub fn measure(text: &str, font: SizedFont<'_>) -> u32 {
    font.ink_span(text)
        .map(|(min_x, max_x)| (max_x - min_x).max(0) as u32)
        .unwrap_or(0)
}

/// Draw `text` with its top-left corner at `(x, y)`, alpha-blending `color` by glyph coverage.
pub fn draw_text(canvas: &mut RgbaImage, text: &str, font: SizedFont<'_>, x: i32, y: i32, color: Rgba<u8>) {
    let (w, h) = canvas.dimensions();
    let color_alpha = color[3] as f32 / 255.0;

    font.rasterize(text, x as f32, y as f32, |px, py, coverage| {
        if px < 0 || py < 0 || px as u32 >= w || py as u32 >= h {
            return;
        }
        let a = (coverage * color_alpha).clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let dst = canvas.get_pixel_mut(px as u32, py as u32);
        let inv = 1.0 - a;
        for c in 0..3 {
            dst[c] = (color[c] as f32 * a + dst[c] as f32 * inv).round() as u8;
        }
        dst[3] = (a * 255.0 + dst[3] as f32 * inv).round() as u8;
    });
}

/// Draw `text` horizontally centred on a canvas `canvas_width` wide, top edge at `y`.
pub fn draw_centered(
    canvas: &mut RgbaImage,
    text: &str,
    font: SizedFont<'_>,
    y: i32,
    color: Rgba<u8>,
    canvas_width: u32,
) {
    let Some((min_x, max_x)) = font.ink_span(text) else {
        return;
    };
    let x = (canvas_width as i32 - (max_x - min_x)) / 2 - min_x;
    draw_text(canvas, text, font, x, y, color);
}

/// Greedy word wrap on rendered width.
///
/// Words are never split; a word wider than `max_width` sits alone on its line.
pub fn wrap_by_pixel(text: &str, font: SizedFont<'_>, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure(&candidate, font) as f32 <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
