use super::shapes::{fill_ellipse, stroke_border};
use crate::constants::{GRADIENT_BOTTOM, GRADIENT_TOP};
use image::{imageops, Rgba, RgbaImage};

const GLOW_COLOR: Rgba<u8> = Rgba([255, 255, 255, 35]);
const GLOW_SIGMA: f32 = 40.0;
const VIGNETTE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 130]);
const VIGNETTE_WIDTH: u32 = 120;
const VIGNETTE_SIGMA: f32 = 18.0;

/// Channel value on row `y` of a gradient spanning `h` rows
fn lerp_channel(top: u8, bottom: u8, y: u32, h: u32) -> u8 {
    if h <= 1 {
        return top;
    }
    let t = y as f32 / (h - 1) as f32;
    (top as f32 + t * (bottom as f32 - top as f32)) as u8
}

/// Opaque vertical gradient from [`GRADIENT_TOP`] to [`GRADIENT_BOTTOM`]
pub fn vertical_gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |_, y| {
        Rgba([
            lerp_channel(GRADIENT_TOP[0], GRADIENT_BOTTOM[0], y, h),
            lerp_channel(GRADIENT_TOP[1], GRADIENT_BOTTOM[1], y, h),
            lerp_channel(GRADIENT_TOP[2], GRADIENT_BOTTOM[2], y, h),
            255,
        ])
    })
}

/// Soft white highlight over the upper-middle region
fn glow_layer(w: u32, h: u32) -> RgbaImage {
    // Transparent white so blurring does not darken the halo
    let mut layer = RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 0]));
    let (wf, hf) = (w as f32, h as f32);
    fill_ellipse(&mut layer, (wf * 0.15, -hf * 0.15, wf * 0.85, hf * 0.55), GLOW_COLOR);
    imageops::fast_blur(&layer, GLOW_SIGMA)
}

/// Dark frame fading into the interior
fn vignette_layer(w: u32, h: u32) -> RgbaImage {
    let mut layer = RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 0]));
    stroke_border(&mut layer, VIGNETTE_WIDTH, VIGNETTE_COLOR);
    imageops::fast_blur(&layer, VIGNETTE_SIGMA)
}

/// Poster backdrop: gradient, then glow, then vignette.
pub fn render_background(w: u32, h: u32) -> RgbaImage {
    let mut base = vertical_gradient(w, h);
    imageops::overlay(&mut base, &glow_layer(w, h), 0, 0);
    imageops::overlay(&mut base, &vignette_layer(w, h), 0, 0);
    base
}
