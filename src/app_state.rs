//! Shared application state injected into all Axum handlers.

use crate::config::Config;
use crate::poster::FontSet;
use crate::services::PosterService;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Loaded once; font availability is fixed for the process lifetime
    pub fonts: Arc<FontSet>,
    /// Source for result selection, seeded from `RNG_SEED` when set
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let fonts = FontSet::load(&config.fonts_dir);
        Self::with_fonts(config, fonts)
    }

    pub fn with_fonts(config: Config, fonts: FontSet) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config: Arc::new(config),
            fonts: Arc::new(fonts),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn poster_service(&self) -> PosterService {
        PosterService::new(Arc::clone(&self.config), Arc::clone(&self.fonts))
    }
}
