use crate::config::Config;
use crate::constants::ALLOWED_EXTENSIONS;
use crate::error::{AppError, Result};
use crate::models::{AnalyzeOutcome, PhotoUpload, ResultRecord};
use crate::poster::{compose_poster, poster_text, FontSet, PosterContext};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Lower-cased extension (with leading dot) of the last path component of `filename`.
///
/// Both `/` and `\` count as separators, since browsers on Windows may send full paths.
pub fn upload_extension(filename: &str) -> Option<String> {
    let base = filename.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(filename);
    let (stem, ext) = base.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}

/// Validated extension for an upload, or [`AppError::UnsupportedFormat`]
pub fn allowed_extension(filename: &str) -> Result<String> {
    match upload_extension(filename) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(ext),
        other => Err(AppError::UnsupportedFormat(other.unwrap_or_default())),
    }
}

/// Uniform pick from the outcome table
pub fn pick_result<'a, R: Rng + ?Sized>(results: &'a [ResultRecord], rng: &mut R) -> Result<&'a ResultRecord> {
    results
        .choose(rng)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("result table is empty")))
}

/// Share caption shown next to the poster
pub fn caption_for(headline: &str, message: &str) -> String {
    match (headline.is_empty(), message.is_empty()) {
        (false, false) => format!("{headline} — {message}"),
        (false, true) => headline.to_string(),
        _ => message.to_string(),
    }
}

pub struct PosterService {
    config: Arc<Config>,
    fonts: Arc<FontSet>,
}

impl PosterService {
    pub fn new(config: Arc<Config>, fonts: Arc<FontSet>) -> Self {
        Self { config, fonts }
    }

    /// Store the upload under a fresh token name and return its path
    pub async fn store_upload(&self, data: &[u8], ext: &str) -> Result<PathBuf> {
        let name = format!("{}{}", uuid::Uuid::new_v4().simple(), ext);
        let path = self.config.upload_dir.join(name);

        let mut file = fs::File::create(&path).await?;
        file.write_all(data).await?;
        file.sync_all().await?;

        tracing::info!("Stored upload {} ({} bytes)", path.display(), data.len());
        Ok(path)
    }

    /// Validate, store, pick a result, render. Nothing is written for a rejected extension.
    pub async fn analyze<R: Rng + Send>(&self, upload: PhotoUpload, rng: &Mutex<R>) -> Result<AnalyzeOutcome> {
        let ext = allowed_extension(&upload.filename)?;
        let photo_path = self.store_upload(&upload.data, &ext).await?;
        let result = {
            let mut rng = rng
                .lock()
                .map_err(|_| AppError::Internal(anyhow::anyhow!("rng lock poisoned")))?;
            pick_result(&self.config.results, &mut *rng)?.clone()
        };

        let poster_path = {
            let config = Arc::clone(&self.config);
            let fonts = Arc::clone(&self.fonts);
            let result = result.clone();
            tokio::task::spawn_blocking(move || {
                let ctx = PosterContext {
                    event: &config.event,
                    fonts: &fonts,
                    logo_path: &config.logo_path,
                    output_dir: &config.generated_dir,
                    square_crop: config.square_crop_photo,
                };
                compose_poster(&photo_path, &result, &ctx)
            })
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("poster task failed: {e}")))??
        };

        let poster_url = self.public_url(&poster_path)?;
        tracing::info!("Generated poster {} ({})", poster_url, result.title);

        let (headline, message) = poster_text(&result);
        Ok(AnalyzeOutcome {
            caption: caption_for(&headline, &message),
            headline,
            message,
            poster_path,
            poster_url,
            result,
        })
    }

    /// URL of a file under the static directory
    pub fn public_url(&self, path: &Path) -> Result<String> {
        let relative = path.strip_prefix(&self.config.static_dir).map_err(|_| {
            AppError::Internal(anyhow::anyhow!(
                "{} is outside the static directory",
                path.display()
            ))
        })?;

        let mut url = self.config.public_prefix.trim_end_matches('/').to_string();
        for part in relative.components() {
            url.push('/');
            url.push_str(&part.as_os_str().to_string_lossy());
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn extension_is_lower_cased_last_component() {
        assert_eq!(upload_extension("photo.JPG").as_deref(), Some(".jpg"));
        assert_eq!(upload_extension("archive.tar.webp").as_deref(), Some(".webp"));
        assert_eq!(upload_extension("C:\\Users\\me\\selfie.PnG").as_deref(), Some(".png"));
        assert_eq!(upload_extension("dir.png/noext"), None);
        assert_eq!(upload_extension(".png"), None);
        assert_eq!(upload_extension("trailing."), None);
        assert_eq!(upload_extension(""), None);
    }

    #[test]
    fn allow_list_accepts_exactly_four_extensions() {
        for name in ["a.jpg", "a.JPEG", "a.Png", "a.webp", "x/y/z.WEBP"] {
            assert!(allowed_extension(name).is_ok(), "{name}");
        }
        for name in ["photo.GIF", "a.bmp", "a.jpg.exe", "jpg", "a.tiff", "a.heic", "noext"] {
            assert!(
                matches!(allowed_extension(name), Err(AppError::UnsupportedFormat(_))),
                "{name}"
            );
        }
    }

    #[test]
    fn seeded_pick_is_reproducible() {
        let table = ResultRecord::default_table();
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..16).map(|_| pick_result(&table, &mut rng).unwrap().clone()).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..16).map(|_| pick_result(&table, &mut rng).unwrap().clone()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn pick_reaches_every_entry() {
        let table = ResultRecord::default_table();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let picked = pick_result(&table, &mut rng).unwrap();
            let idx = table.iter().position(|r| r == picked).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn empty_table_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_result(&[], &mut rng).is_err());
    }

    #[test]
    fn caption_uses_sanitized_parts() {
        let (headline, message) = poster_text(&ResultRecord::new("Statut confirmé", "Célibataire & en mission"));
        assert_eq!(headline, "STATUT CONFIRMÉ");
        assert_eq!(message, "Célibataire en mission");
        assert_eq!(caption_for(&headline, &message), "STATUT CONFIRMÉ — Célibataire en mission");
        assert_eq!(caption_for("MISSION", ""), "MISSION");
        assert_eq!(caption_for("", "Rideau"), "Rideau");
    }

    #[test]
    fn public_url_is_relative_to_static_dir() {
        let config = Arc::new(Config::with_static_dir("/srv/static"));
        let service = PosterService::new(config, Arc::new(FontSet::builtin()));
        let url = service
            .public_url(Path::new("/srv/static/generated/abc.png"))
            .unwrap();
        assert_eq!(url, "/static/generated/abc.png");
        assert!(service.public_url(Path::new("/elsewhere/abc.png")).is_err());
    }
}
