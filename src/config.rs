use crate::constants::{
    CHURCH_NAME, EVENT_DATE_TIME, EVENT_LOCATION, EVENT_TITLE, TAGLINE,
};
use crate::models::ResultRecord;
use std::env;
use std::path::PathBuf;

/// Branding printed on every poster. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetails {
    pub church_name: String,
    pub event_title: String,
    pub tagline: String,
    pub date_time: String,
    pub location: String,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            church_name: CHURCH_NAME.to_string(),
            event_title: EVENT_TITLE.to_string(),
            tagline: TAGLINE.to_string(),
            date_time: EVENT_DATE_TIME.to_string(),
            location: EVENT_LOCATION.to_string(),
        }
    }
}

impl EventDetails {
    /// Footer line: non-empty date/time and location joined by the separator
    pub fn footer(&self, separator: &str) -> String {
        [self.date_time.trim(), self.location.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub generated_dir: PathBuf,
    pub logo_path: PathBuf,
    pub fonts_dir: PathBuf,
    /// URL prefix under which `static_dir` is served
    pub public_prefix: String,
    pub rng_seed: Option<u64>,
    pub square_crop_photo: bool,
    pub event: EventDetails,
    pub results: Vec<ResultRecord>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let static_dir = PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()));

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| static_dir.join("uploads")),
            generated_dir: env::var("GENERATED_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| static_dir.join("generated")),
            logo_path: env::var("LOGO_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| static_dir.join("logo.png")),
            fonts_dir: env::var("FONTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| static_dir.join("fonts")),
            public_prefix: env::var("PUBLIC_PREFIX").unwrap_or_else(|_| "/static".to_string()),
            rng_seed: match env::var("RNG_SEED") {
                Ok(seed) => Some(seed.parse()?),
                Err(_) => None,
            },
            square_crop_photo: env::var("SQUARE_CROP_PHOTO")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            static_dir,
            event: EventDetails::default(),
            results: ResultRecord::default_table(),
        })
    }

    /// Configuration rooted at `static_dir` with every other setting at its default
    pub fn with_static_dir(static_dir: impl Into<PathBuf>) -> Self {
        let static_dir = static_dir.into();
        Self {
            port: 8080,
            upload_dir: static_dir.join("uploads"),
            generated_dir: static_dir.join("generated"),
            logo_path: static_dir.join("logo.png"),
            fonts_dir: static_dir.join("fonts"),
            public_prefix: "/static".to_string(),
            rng_seed: None,
            square_crop_photo: false,
            static_dir,
            event: EventDetails::default(),
            results: ResultRecord::default_table(),
        }
    }
}
