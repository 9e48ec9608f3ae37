//! Raster primitives. Coverage is decided at pixel centres, no anti-aliasing.

use image::{Pixel, Rgba, RgbaImage};

/// Blend `color` over every pixel of `img` whose centre lies inside the
/// ellipse inscribed in the box `(x0, y0)`–`(x1, y1)`. The box may extend past the image.
pub fn fill_ellipse(img: &mut RgbaImage, (x0, y0, x1, y1): (f32, f32, f32, f32), color: Rgba<u8>) {
    let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
    let (rx, ry) = ((x1 - x0) / 2.0, (y1 - y0) / 2.0);
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }

    let row_start = y0.max(0.0).floor() as u32;
    let row_end = (y1.ceil().max(0.0) as u32).min(img.height());
    let col_start = x0.max(0.0).floor() as u32;
    let col_end = (x1.ceil().max(0.0) as u32).min(img.width());

    for y in row_start..row_end {
        for x in col_start..col_end {
            let dx = (x as f32 + 0.5 - cx) / rx;
            let dy = (y as f32 + 0.5 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                img.get_pixel_mut(x, y).blend(&color);
            }
        }
    }
}

/// Circle outline of outer diameter `diameter` and thickness `stroke`, centred in the
/// square whose top-left corner is `(left, top)`.
pub fn stroke_circle(img: &mut RgbaImage, left: i64, top: i64, diameter: u32, stroke: u32, color: Rgba<u8>) {
    let outer = diameter as f32 / 2.0;
    let inner = (outer - stroke as f32).max(0.0);
    let (cx, cy) = (left as f32 + outer, top as f32 + outer);

    for dy in 0..diameter as i64 {
        for dx in 0..diameter as i64 {
            let (x, y) = (left + dx, top + dy);
            if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
                continue;
            }
            let d = ((x as f32 + 0.5 - cx).powi(2) + (y as f32 + 0.5 - cy).powi(2)).sqrt();
            if d <= outer && d >= inner {
                img.get_pixel_mut(x as u32, y as u32).blend(&color);
            }
        }
    }
}

/// Band of `width` pixels along all four edges of the image.
pub fn stroke_border(img: &mut RgbaImage, width: u32, color: Rgba<u8>) {
    let (w, h) = img.dimensions();
    for (x, y, px) in img.enumerate_pixels_mut() {
        if x < width || y < width || x + width >= w || y + width >= h {
            px.blend(&color);
        }
    }
}

/// Filled rectangle `x0..x1` × `y0..y1` with corners rounded by `radius`.
pub fn fill_rounded_rect(img: &mut RgbaImage, (x0, y0, x1, y1): (u32, u32, u32, u32), radius: u32, color: Rgba<u8>) {
    let x1 = x1.min(img.width());
    let y1 = y1.min(img.height());
    if x1 <= x0 || y1 <= y0 {
        return;
    }
    let r = (radius as f32)
        .min((x1 - x0) as f32 / 2.0)
        .min((y1 - y0) as f32 / 2.0);

    for y in y0..y1 {
        for x in x0..x1 {
            if rounded_rect_contains(x - x0, y - y0, x1 - x0, y1 - y0, r) {
                img.get_pixel_mut(x, y).blend(&color);
            }
        }
    }
}

fn rounded_rect_contains(x: u32, y: u32, w: u32, h: u32, r: f32) -> bool {
    let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
    let cx = px.clamp(r, w as f32 - r);
    let cy = py.clamp(r, h as f32 - r);
    (px - cx).powi(2) + (py - cy).powi(2) <= r * r
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn blank(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 0]))
    }

    #[test]
    fn ellipse_fills_centre_not_corners() {
        let mut img = blank(20, 10);
        fill_ellipse(&mut img, (0.0, 0.0, 20.0, 10.0), RED);
        assert_eq!(*img.get_pixel(10, 5), RED);
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(19, 9)[3], 0);
    }

    #[test]
    fn ellipse_may_overflow_canvas() {
        let mut img = blank(10, 10);
        fill_ellipse(&mut img, (-5.0, -20.0, 15.0, 8.0), RED);
        assert_eq!(*img.get_pixel(5, 0), RED);
    }

    #[test]
    fn ring_leaves_hole() {
        let mut img = blank(40, 40);
        stroke_circle(&mut img, 0, 0, 40, 4, RED);
        assert_eq!(img.get_pixel(20, 20)[3], 0);
        assert_eq!(*img.get_pixel(20, 1), RED);
        assert_eq!(img.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn border_band_only_on_edges() {
        let mut img = blank(10, 10);
        stroke_border(&mut img, 2, RED);
        assert_eq!(*img.get_pixel(0, 5), RED);
        assert_eq!(*img.get_pixel(9, 5), RED);
        assert_eq!(*img.get_pixel(8, 8), RED);
        assert_eq!(img.get_pixel(5, 5)[3], 0);
        assert_eq!(img.get_pixel(2, 2)[3], 0);
    }

    #[test]
    fn rounded_rect_trims_corners() {
        let mut img = blank(30, 10);
        fill_rounded_rect(&mut img, (0, 0, 30, 10), 5, RED);
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(*img.get_pixel(15, 0), RED);
        assert_eq!(*img.get_pixel(0, 5), RED);
    }
}
