// ABOUTME: Author profile for the carousel-wizard application
// ABOUTME: Footer identity shared by every slide, including logo image intake

use crate::errors::{CarouselError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use log::info;
use std::fs;
use std::path::Path;

/// Default cap for an uploaded logo
pub const DEFAULT_MAX_LOGO_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub handle: String,
    /// Embedded `data:` URL of the brand logo
    pub logo_url: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Jane Designer".to_string(),
            handle: "@jane_creatives".to_string(),
            logo_url: None,
        }
    }
}

impl Profile {
    pub fn new(name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
            logo_url: None,
        }
    }

    /// Read a local image into memory and use it as the logo, replacing any prior one
    pub fn load_logo(&mut self, path: &Path, max_bytes: u64) -> Result<()> {
        info!("Loading logo from {:?}", path);
        if !path.is_file() {
            return Err(CarouselError::PathNotFoundError(path.to_path_buf()));
        }

        let size = fs::metadata(path).map_err(CarouselError::FileReadError)?.len();
        if size > max_bytes {
            return Err(CarouselError::LogoError(format!(
                "{:?} is {} bytes, the limit is {}",
                path, size, max_bytes
            )));
        }

        let bytes = fs::read(path).map_err(CarouselError::FileReadError)?;
        self.logo_url = Some(logo_data_url(&bytes, max_bytes)?);
        Ok(())
    }

    pub fn clear_logo(&mut self) {
        self.logo_url = None;
    }
}

/// Encode image bytes as a `data:` URL after checking size and format
pub fn logo_data_url(bytes: &[u8], max_bytes: u64) -> Result<String> {
    if bytes.len() as u64 > max_bytes {
        return Err(CarouselError::LogoError(format!(
            "image is {} bytes, the limit is {}",
            bytes.len(),
            max_bytes
        )));
    }

    let format = image::guess_format(bytes)
        .map_err(|e| CarouselError::LogoError(format!("not a recognised image: {}", e)))?;
    let mime = mime_type(format).ok_or_else(|| {
        CarouselError::LogoError(format!("unsupported image format: {:?}", format))
    })?;

    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

fn mime_type(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        ImageFormat::Bmp => Some("image/bmp"),
        ImageFormat::Ico => Some("image/x-icon"),
        _ => None,
    }
}
