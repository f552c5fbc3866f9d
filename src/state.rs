// ABOUTME: Session state for the carousel-wizard application
// ABOUTME: Owns the slide collection, profile and theme; shared read-only with export

use crate::errors::Result;
use crate::generate::SlideGenerator;
use crate::profile::Profile;
use crate::slides::SlideStore;
use crate::theme::ThemeSelection;
use log::{info, warn};
use parking_lot::RwLock;
use std::sync::Arc;

/// Everything one editing session holds in memory
#[derive(Debug, Clone, Default)]
pub struct CarouselState {
    pub slides: SlideStore,
    pub profile: Profile,
    pub theme: ThemeSelection,
}

/// Handle passed to the export pipeline, which re-reads it at every step
pub type SharedState = Arc<RwLock<CarouselState>>;

impl CarouselState {
    pub fn new(slides: SlideStore, profile: Profile, theme: ThemeSelection) -> Self {
        Self {
            slides,
            profile,
            theme,
        }
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Ask the generator for a fresh draft and swap it in whole.
    ///
    /// On any failure the collection is left exactly as it was.
    pub fn apply_generation(&mut self, generator: &dyn SlideGenerator, topic: &str) -> Result<()> {
        let slides = match generator.generate(topic) {
            Ok(slides) => slides,
            Err(e) => {
                warn!("Generation for {:?} failed: {}", topic, e);
                return Err(e);
            }
        };
        self.slides.replace_all(slides)?;
        info!("Applied {} generated slides", self.slides.len());
        Ok(())
    }
}
