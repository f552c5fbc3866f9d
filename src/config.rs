// ABOUTME: Configuration module for the carousel-wizard application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::errors::{CarouselError, Result};
use crate::export::{ExportConfig, DEFAULT_FILE_PREFIX, DEFAULT_PACING_MS, DEFAULT_PIXEL_RATIO};
use crate::generate::{GenerationConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::profile::DEFAULT_MAX_LOGO_BYTES;
use crate::render::RenderConfig;
use std::env;
use std::time::Duration;

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub browser_path: Option<String>,
    pub default_timeout_ms: u64,
    pub pacing_ms: u64,
    pub pixel_ratio: f64,
    pub max_logo_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            browser_path: env::var("BROWSER_PATH").ok().filter(|p| !p.is_empty()),
            default_timeout_ms: 30000, // 30 seconds
            pacing_ms: DEFAULT_PACING_MS,
            pixel_ratio: DEFAULT_PIXEL_RATIO,
            max_logo_bytes: DEFAULT_MAX_LOGO_BYTES,
        }
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse::<T>().ok())
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty());
        let model = env::var("GEMINI_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(defaults.model);
        let pixel_ratio = env_parsed::<f64>("CAROUSEL_PIXEL_RATIO")
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(defaults.pixel_ratio);

        Self {
            api_key,
            model,
            browser_path: defaults.browser_path,
            default_timeout_ms: env_parsed("CAROUSEL_TIMEOUT_MS").unwrap_or(defaults.default_timeout_ms),
            pacing_ms: env_parsed("CAROUSEL_PACING_MS").unwrap_or(defaults.pacing_ms),
            pixel_ratio,
            max_logo_bytes: env_parsed("CAROUSEL_MAX_LOGO_BYTES").unwrap_or(defaults.max_logo_bytes),
        }
    }

    /// Get a render configuration with defaults from this config
    pub fn get_render_config(&self, size: Option<u32>, timeout_ms: Option<u64>) -> RenderConfig {
        let defaults = RenderConfig::default();
        let edge = size.map(|s| s + 200);
        RenderConfig {
            width: edge.unwrap_or(defaults.width),
            height: edge.unwrap_or(defaults.height),
            timeout_ms: timeout_ms.unwrap_or(self.default_timeout_ms),
            browser_path: self.browser_path.clone(),
        }
    }

    /// Get an export configuration with defaults from this config.
    /// The pixel ratio must be a positive, finite number.
    pub fn get_export_config(
        &self,
        pacing_ms: Option<u64>,
        pixel_ratio: Option<f64>,
        file_prefix: Option<String>,
    ) -> Result<ExportConfig> {
        let pixel_ratio = pixel_ratio.unwrap_or(self.pixel_ratio);
        if !(pixel_ratio.is_finite() && pixel_ratio > 0.0) {
            return Err(CarouselError::ValidationError(format!(
                "Invalid pixel ratio {}: must be greater than 0",
                pixel_ratio
            )));
        }

        Ok(ExportConfig {
            pacing: Duration::from_millis(pacing_ms.unwrap_or(self.pacing_ms)),
            pixel_ratio,
            file_prefix: file_prefix.unwrap_or_else(|| DEFAULT_FILE_PREFIX.to_string()),
        })
    }

    /// Get a generation client configuration
    pub fn get_generation_config(&self, model: Option<String>) -> GenerationConfig {
        GenerationConfig {
            api_key: self.api_key.clone(),
            model: model.unwrap_or_else(|| self.model.clone()),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: self.default_timeout_ms,
        }
    }
}
