use super::background::render_background;
use super::crop::{crop_circle, crop_to_square};
use super::fonts::FontSet;
use super::sanitize::sanitize_for_poster;
use super::shapes::{fill_rounded_rect, stroke_circle};
use super::text::{draw_centered, draw_text, wrap_by_pixel};
use crate::config::EventDetails;
use crate::constants::*;
use crate::error::{AppError, Result};
use crate::models::ResultRecord;
use image::{imageops, DynamicImage, ImageFormat, ImageReader, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Everything the composer needs besides the photo and the result
#[derive(Debug, Clone, Copy)]
pub struct PosterContext<'a> {
    pub event: &'a EventDetails,
    pub fonts: &'a FontSet,
    pub logo_path: &'a Path,
    pub output_dir: &'a Path,
    pub square_crop: bool,
}

/// Decode an image from disk, sniffing the format from its content.
pub fn decode_photo(path: &Path) -> Result<DynamicImage> {
    ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| AppError::UnreadableImage(format!("{}: {}", path.display(), e)))
}

fn load_logo(path: &Path) -> Option<RgbaImage> {
    if !path.exists() {
        return None;
    }
    match decode_photo(path) {
        Ok(logo) => {
            let logo = if logo.width() > LOGO_MAX || logo.height() > LOGO_MAX {
                logo.thumbnail(LOGO_MAX, LOGO_MAX)
            } else {
                logo
            };
            Some(logo.to_rgba8())
        }
        Err(e) => {
            tracing::warn!("Skipping logo: {}", e);
            None
        }
    }
}

/// Headline and message exactly as the poster prints them
pub fn poster_text(result: &ResultRecord) -> (String, String) {
    (
        sanitize_for_poster(&result.title).to_uppercase(),
        sanitize_for_poster(&result.msg),
    )
}

/// Lay out the full poster in memory.
pub fn render_poster(photo: &DynamicImage, result: &ResultRecord, ctx: &PosterContext<'_>) -> RgbaImage {
    let w = CANVAS_SIZE;
    let mut canvas = render_background(w, w);
    let fonts = ctx.fonts;

    let white = Rgba(WHITE);
    let soft = Rgba(SOFT);
    let accent = Rgba(ACCENT);

    // Logo and header
    let mut header_x = MARGIN;
    if let Some(logo) = load_logo(ctx.logo_path) {
        imageops::overlay(&mut canvas, &logo, MARGIN, MARGIN);
        header_x = MARGIN + logo.width() as i64 + LOGO_TEXT_GAP;
    }
    draw_text(
        &mut canvas,
        &ctx.event.church_name,
        fonts.font(CHURCH_FONT_PX, true),
        header_x as i32,
        CHURCH_NAME_Y,
        white,
    );
    if !ctx.event.tagline.trim().is_empty() {
        draw_text(
            &mut canvas,
            &ctx.event.tagline,
            fonts.font(TAGLINE_FONT_PX, false),
            header_x as i32,
            TAGLINE_Y,
            soft,
        );
    }

    draw_centered(&mut canvas, &ctx.event.event_title, fonts.font(TITLE_FONT_PX, true), TITLE_Y, white, w);

    let divider_x = (w - DIVIDER_WIDTH) / 2;
    fill_rounded_rect(
        &mut canvas,
        (divider_x, DIVIDER_Y, divider_x + DIVIDER_WIDTH, DIVIDER_Y + DIVIDER_HEIGHT),
        DIVIDER_HEIGHT / 2,
        accent,
    );

    // Photo inside its ring
    let ring_x = ((w - RING_DIAMETER) / 2) as i64;
    stroke_circle(&mut canvas, ring_x, RING_Y, RING_DIAMETER, RING_STROKE, accent);
    let circle = if ctx.square_crop {
        crop_circle(&crop_to_square(photo), PHOTO_DIAMETER)
    } else {
        crop_circle(photo, PHOTO_DIAMETER)
    };
    let inset = ((RING_DIAMETER - PHOTO_DIAMETER) / 2) as i64;
    imageops::overlay(&mut canvas, &circle, ring_x + inset, RING_Y + inset);

    // Result
    let (headline, message) = poster_text(result);
    draw_centered(&mut canvas, &headline, fonts.font(HEADLINE_FONT_PX, true), HEADLINE_Y, white, w);

    let message_font = fonts.font(MESSAGE_FONT_PX, false);
    let lines = wrap_by_pixel(&message, message_font, MESSAGE_MAX_WIDTH);
    for (i, line) in lines.iter().take(MESSAGE_MAX_LINES).enumerate() {
        let y = MESSAGE_Y + i as i32 * MESSAGE_LINE_STEP;
        draw_centered(&mut canvas, line, message_font, y, soft, w);
    }

    let footer = ctx.event.footer(FOOTER_SEPARATOR);
    draw_centered(&mut canvas, &footer, fonts.font(FOOTER_FONT_PX, false), FOOTER_Y, soft, w);

    canvas
}

/// Render the poster for the photo at `photo_path` and write it as `<token>.png`
/// under `ctx.output_dir`. The photo is only read.
pub fn compose_poster(photo_path: &Path, result: &ResultRecord, ctx: &PosterContext<'_>) -> Result<PathBuf> {
    let photo = decode_photo(photo_path)?;
    let canvas = render_poster(&photo, result, ctx);

    let out_name = format!("{}.png", uuid::Uuid::new_v4().simple());
    let out_path = ctx.output_dir.join(out_name);
    canvas.save_with_format(&out_path, ImageFormat::Png)?;

    tracing::debug!("Wrote poster {}", out_path.display());
    Ok(out_path)
}
