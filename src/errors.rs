// ABOUTME: Error types for the carousel-wizard application
// ABOUTME: Provides structured error handling for editing, generation and export

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Generation request failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Headless browser error: {message}")]
    BrowserError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to rasterize slide: {0}")]
    RasterizeError(String),

    #[error("Failed to print layout: {0}")]
    PrintError(String),

    #[error("Could not generate valid slides: {0}")]
    GenerationError(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Logo rejected: {0}")]
    LogoError(String),

    #[error("A batch export is already in progress")]
    ExportInProgress,

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CarouselError {
    /// Wrap a headless browser failure with context.
    /// headless_chrome reports everything through anyhow.
    pub fn browser(message: impl Into<String>, err: anyhow::Error) -> Self {
        CarouselError::BrowserError {
            message: format!("{}: {}", message.into(), err),
            source: Some(err.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CarouselError>;
