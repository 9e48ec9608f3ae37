//! Font loading with a total fallback chain.
//!
//! Lookup order for each weight:
//! 1. `<fonts_dir>/DejaVuSans.ttf` / `DejaVuSans-Bold.ttf`
//! 2. the platform DejaVu install under [`PLATFORM_FONTS_DIR`]
//! 3. [`FontFace::Builtin`], a block-glyph face that needs no file at all
//!
//! Loading never fails; a missing or corrupt file only degrades typography.

use rusttype::{point, Font, Scale};
use std::path::Path;

pub const PLATFORM_FONTS_DIR: &str = "/usr/share/fonts/truetype/dejavu";

const REGULAR_FILE: &str = "DejaVuSans.ttf";
const BOLD_FILE: &str = "DejaVuSans-Bold.ttf";

// Builtin face metrics, as fractions of the pixel size
const BUILTIN_ADVANCE: f32 = 0.5;
const BUILTIN_INK_LEFT: f32 = 0.08;
const BUILTIN_INK_RIGHT: f32 = 0.42;
const BUILTIN_INK_TOP: f32 = 0.25;
const BUILTIN_INK_BOTTOM: f32 = 0.8;

pub enum FontFace {
    TrueType(Font<'static>),
    Builtin,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontFace::TrueType(_) => write!(f, "TrueType"),
            FontFace::Builtin => write!(f, "Builtin"),
        }
    }
}

impl FontFace {
    /// First face that loads from `candidates`, or the builtin face
    pub fn load_first(candidates: &[&Path]) -> Self {
        for path in candidates {
            match std::fs::read(path) {
                Ok(bytes) => match Font::try_from_vec(bytes) {
                    Some(font) => {
                        tracing::debug!("Loaded font {}", path.display());
                        return FontFace::TrueType(font);
                    }
                    None => tracing::warn!("Font {} is not a usable TrueType file", path.display()),
                },
                Err(e) => tracing::debug!("Font {} unavailable: {}", path.display(), e),
            }
        }
        tracing::warn!("No TrueType font found, falling back to builtin glyphs");
        FontFace::Builtin
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, FontFace::Builtin)
    }
}

/// Regular and bold faces used by the poster
#[derive(Debug)]
pub struct FontSet {
    regular: FontFace,
    bold: FontFace,
}

impl FontSet {
    pub fn load(fonts_dir: &Path) -> Self {
        let platform = Path::new(PLATFORM_FONTS_DIR);
        let regular = FontFace::load_first(&[
            fonts_dir.join(REGULAR_FILE).as_path(),
            platform.join(REGULAR_FILE).as_path(),
        ]);
        let bold = FontFace::load_first(&[
            fonts_dir.join(BOLD_FILE).as_path(),
            platform.join(BOLD_FILE).as_path(),
        ]);
        Self { regular, bold }
    }

    /// Font set that ignores the filesystem entirely
    pub fn builtin() -> Self {
        Self {
            regular: FontFace::Builtin,
            bold: FontFace::Builtin,
        }
    }

    /// Platform DejaVu faces, or `None` when either weight is missing
    #[cfg(test)]
    pub(crate) fn platform() -> Option<Self> {
        let fonts = Self::load(Path::new(PLATFORM_FONTS_DIR));
        (!fonts.regular.is_builtin() && !fonts.bold.is_builtin()).then_some(fonts)
    }

    pub fn font(&self, px: f32, bold: bool) -> SizedFont<'_> {
        SizedFont {
            face: if bold { &self.bold } else { &self.regular },
            px,
        }
    }
}

/// A face at a given pixel size
#[derive(Debug, Clone, Copy)]
pub struct SizedFont<'a> {
    face: &'a FontFace,
    px: f32,
}

impl SizedFont<'_> {
    pub fn px(&self) -> f32 {
        self.px
    }

    /// Horizontal ink extent `(min_x, max_x)` of `text` laid out from x = 0
    pub fn ink_span(&self, text: &str) -> Option<(i32, i32)> {
        let mut span: Option<(i32, i32)> = None;
        self.for_each_glyph_box(text, 0.0, 0.0, |min_x, _, max_x, _| {
            span = Some(match span {
                Some((lo, hi)) => (lo.min(min_x), hi.max(max_x)),
                None => (min_x, max_x),
            });
        });
        span
    }

    /// Rasterize `text` with its top edge at `y`, calling `plot(x, y, coverage)` per pixel
    pub fn rasterize(&self, text: &str, x: f32, y: f32, mut plot: impl FnMut(i32, i32, f32)) {
        match self.face {
            FontFace::TrueType(font) => {
                let scale = Scale::uniform(self.px);
                let ascent = font.v_metrics(scale).ascent;
                for glyph in font.layout(text, scale, point(x, y + ascent)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        glyph.draw(|gx, gy, v| plot(gx as i32 + bb.min.x, gy as i32 + bb.min.y, v));
                    }
                }
            }
            FontFace::Builtin => {
                self.for_each_glyph_box(text, x, y, |min_x, min_y, max_x, max_y| {
                    for py in min_y..max_y {
                        for px in min_x..max_x {
                            plot(px, py, 1.0);
                        }
                    }
                });
            }
        }
    }

    fn for_each_glyph_box(&self, text: &str, x: f32, y: f32, mut f: impl FnMut(i32, i32, i32, i32)) {
        match self.face {
            FontFace::TrueType(font) => {
                let scale = Scale::uniform(self.px);
                let ascent = font.v_metrics(scale).ascent;
                for glyph in font.layout(text, scale, point(x, y + ascent)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        f(bb.min.x, bb.min.y, bb.max.x, bb.max.y);
                    }
                }
            }
            FontFace::Builtin => {
                let px = self.px;
                for (i, ch) in text.chars().enumerate() {
                    if ch.is_whitespace() {
                        continue;
                    }
                    let caret = x + i as f32 * px * BUILTIN_ADVANCE;
                    f(
                        (caret + px * BUILTIN_INK_LEFT).round() as i32,
                        (y + px * BUILTIN_INK_TOP).round() as i32,
                        (caret + px * BUILTIN_INK_RIGHT).round() as i32,
                        (y + px * BUILTIN_INK_BOTTOM).round() as i32,
                    );
                }
            }
        }
    }
}
