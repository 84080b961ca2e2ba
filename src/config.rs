use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::carousel::CarouselTiming;
use crate::constants::*;
use crate::slide::{onboarding_slides, RegistryError, Slide, SlideRegistry};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("{0} must be greater than zero")]
    InvalidInterval(&'static str),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Carousel settings as written in a RON file. Every field is optional.
///
/// ```text
/// (
///     autoplay_interval_ms: 4500,
///     slides: [
///         (id: 1, image_ref: "one.png", title: "One", description: "First"),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: u64,
    pub resume_cooldown_ms: u64,
    pub slides: Vec<Slide>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL.as_millis() as u64,
            resume_cooldown_ms: RESUME_COOLDOWN.as_millis() as u64,
            slides: onboarding_slides(),
        }
    }
}

impl CarouselConfig {
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron(&text)?;
        info!(path = %path.display(), slides = config.slides.len(), "loaded carousel config");
        Ok(config)
    }

    pub fn timing(&self) -> Result<CarouselTiming, ConfigError> {
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigError::InvalidInterval("autoplay_interval_ms"));
        }
        if self.resume_cooldown_ms == 0 {
            return Err(ConfigError::InvalidInterval("resume_cooldown_ms"));
        }
        Ok(CarouselTiming {
            autoplay_interval: Duration::from_millis(self.autoplay_interval_ms),
            resume_cooldown: Duration::from_millis(self.resume_cooldown_ms),
        })
    }

    pub fn registry(&self) -> Result<SlideRegistry, ConfigError> {
        Ok(SlideRegistry::new(self.slides.clone())?)
    }
}
