use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

/// Resize `img` to `size`×`size` and clear every pixel outside the inscribed circle.
///
/// Aspect ratio is not preserved: non-square sources come out stretched.
/// Use [`crop_to_square`] first to avoid that.
pub fn crop_circle(img: &DynamicImage, size: u32) -> RgbaImage {
    let mut out = img.resize_exact(size, size, FilterType::Lanczos3).to_rgba8();
    let r = size as f32 / 2.0;

    for (x, y, px) in out.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - r;
        let dy = y as f32 + 0.5 - r;
        if dx * dx + dy * dy > r * r {
            px[3] = 0;
        }
    }
    out
}

/// Centre crop to the largest square that fits
pub fn crop_to_square(img: &DynamicImage) -> DynamicImage {
    let side = img.width().min(img.height());
    let x = (img.width() - side) / 2;
    let y = (img.height() - side) / 2;
    img.crop_imm(x, y, side, side)
}
