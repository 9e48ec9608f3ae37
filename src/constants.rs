/// Application-wide constants
/// All magic numbers and constant values should be defined here

/// Maximum upload size in bytes (20 MB)
pub const MAX_UPLOAD_SIZE: usize = 20 * 1024 * 1024;

/// Emoji used in startup logs
pub const MISSION_EMOJI: &str = "🎯";

/// Upload extensions accepted by the analyzer (lower-case, with leading dot)
pub const ALLOWED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp"];

/// Body of the 400 response for a disallowed upload extension
pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "Format non supporté. Utilise JPG/PNG/WebP.";

/// Body of the 422 response when the uploaded photo cannot be decoded
pub const UNREADABLE_IMAGE_MESSAGE: &str = "Image illisible. Essaie une autre photo.";

/// Shown when the request body exceeds [`MAX_UPLOAD_SIZE`]
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Photo trop lourde (20 Mo maximum).";

/// Multipart field carrying the photo
pub const PHOTO_FIELD: &str = "photo";

// Event branding defaults

pub const CHURCH_NAME: &str = "ICC Ottawa";
pub const EVENT_TITLE: &str = "GAGNEURS D’ÂMES";
pub const TAGLINE: &str = "Sortie d’évangélisation";
pub const EVENT_DATE_TIME: &str = "Samedi 14 février";
pub const EVENT_LOCATION: &str = "Rideau, Ottawa";

/// Outcome table as (headline, message) pairs
pub const RESULT_TABLE: &[(&str, &str)] = &[
    ("Célibataire détecté", "Mission assignée : Rideau (14 février)."),
    (
        "Statut confirmé",
        "Célibataire & en mission — on se retrouve à Rideau pour l’évangélisation.",
    ),
    ("Mission", "Gagner des âmes à Rideau. 14 février."),
    (
        "Je suis célibataire",
        "Donc ce samedi je serai en mission pour gagner des âmes à Rideau.",
    ),
];

// Poster layout (tuned for a 1080x1080 canvas)

pub const CANVAS_SIZE: u32 = 1080;
pub const MARGIN: i64 = 70;
pub const LOGO_MAX: u32 = 140;
pub const LOGO_TEXT_GAP: i64 = 30;
pub const CHURCH_NAME_Y: i32 = 78;
pub const TAGLINE_Y: i32 = 138;
pub const TITLE_Y: i32 = 170;
pub const DIVIDER_Y: u32 = 280;
pub const DIVIDER_WIDTH: u32 = 560;
pub const DIVIDER_HEIGHT: u32 = 6;
pub const RING_Y: i64 = 310;
pub const RING_DIAMETER: u32 = 470;
pub const RING_STROKE: u32 = 12;
pub const PHOTO_DIAMETER: u32 = 430;
pub const HEADLINE_Y: i32 = 805;
pub const MESSAGE_Y: i32 = 865;
pub const MESSAGE_LINE_STEP: i32 = 40;
pub const MESSAGE_MAX_WIDTH: f32 = 900.0;
pub const MESSAGE_MAX_LINES: usize = 2;
pub const FOOTER_Y: i32 = 1000;
pub const FOOTER_SEPARATOR: &str = " • ";

// Font sizes in pixels

pub const CHURCH_FONT_PX: f32 = 48.0;
pub const TAGLINE_FONT_PX: f32 = 32.0;
pub const TITLE_FONT_PX: f32 = 70.0;
pub const HEADLINE_FONT_PX: f32 = 46.0;
pub const MESSAGE_FONT_PX: f32 = 32.0;
pub const FOOTER_FONT_PX: f32 = 26.0;

// Palette

pub const WHITE: [u8; 4] = [245, 248, 255, 255];
pub const SOFT: [u8; 4] = [200, 210, 230, 235];
pub const ACCENT: [u8; 4] = [90, 180, 255, 255];
pub const GRADIENT_TOP: [u8; 3] = [8, 12, 25];
pub const GRADIENT_BOTTOM: [u8; 3] = [16, 28, 70];
