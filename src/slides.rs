// ABOUTME: Slide model and the ordered slide store for the carousel-wizard application
// ABOUTME: Handles add/edit/remove/replace of slides and keeps the preview cursor in range

use crate::errors::{CarouselError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const PLACEHOLDER_HEADLINE: &str = "New Slide Title";
pub const PLACEHOLDER_BODY: &str = "Add your amazing content here to engage your audience.";

/// One unit of carousel content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub headline: String,
    pub body: String,
}

impl Slide {
    pub fn new(id: impl Into<String>, headline: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headline: headline.into(),
            body: body.into(),
        }
    }

    /// A slide with a fresh id and the placeholder text
    pub fn placeholder() -> Self {
        Self::new(
            uuid::Uuid::new_v4().to_string(),
            PLACEHOLDER_HEADLINE,
            PLACEHOLDER_BODY,
        )
    }
}

/// Editable text fields of a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideField {
    Headline,
    Body,
}

/// Result of a remove request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    Removed(Slide),
    /// Rejected: the store never drops below one slide
    LastSlide,
    /// No slide with that id; stale references are ignored
    Missing,
}

/// The slides a fresh session starts with
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            "1",
            "Master Social Media Carousels",
            "Discover the secrets to creating high-converting visual content in minutes.",
        ),
        Slide::new(
            "2",
            "The Power of Storytelling",
            "Each slide should lead the user to the next one through curiosity and value.",
        ),
        Slide::new(
            "3",
            "Visual Consistency",
            "Maintain your brand identity using fonts, colors, and consistent profile markers.",
        ),
    ]
}

/// Ordered, never-empty collection of slides plus the focused index.
///
/// Insertion order is display and export order.
#[derive(Debug, Clone)]
pub struct SlideStore {
    slides: Vec<Slide>,
    cursor: usize,
}

impl Default for SlideStore {
    fn default() -> Self {
        Self {
            slides: default_slides(),
            cursor: 0,
        }
    }
}

impl SlideStore {
    /// Create a store from an initial list, validated the same way as `replace_all`
    pub fn with_slides(slides: Vec<Slide>) -> Result<Self> {
        validate_slide_list(&slides)?;
        Ok(Self { slides, cursor: 0 })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the store holds no slides
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.cursor]
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    /// Append a placeholder slide and focus it
    pub fn add_slide(&mut self) -> &Slide {
        let slide = Slide::placeholder();
        debug!("Adding slide {}", slide.id);
        self.slides.push(slide);
        self.cursor = self.slides.len() - 1;
        &self.slides[self.cursor]
    }

    /// Replace one field of the slide with `id`. Returns false for a stale id.
    pub fn update_slide(&mut self, id: &str, field: SlideField, value: impl Into<String>) -> bool {
        match self.slides.iter_mut().find(|s| s.id == id) {
            Some(slide) => {
                match field {
                    SlideField::Headline => slide.headline = value.into(),
                    SlideField::Body => slide.body = value.into(),
                }
                true
            }
            None => {
                debug!("Ignoring edit for unknown slide {}", id);
                false
            }
        }
    }

    pub fn remove_slide(&mut self, id: &str) -> Removal {
        if self.slides.len() <= 1 {
            debug!("Refusing to remove the last slide");
            return Removal::LastSlide;
        }
        let Some(index) = self.position(id) else {
            debug!("Ignoring removal of unknown slide {}", id);
            return Removal::Missing;
        };

        let removed = self.slides.remove(index);
        if self.cursor >= index {
            self.cursor = self.cursor.saturating_sub(1);
        }
        self.clamp_cursor();
        Removal::Removed(removed)
    }

    /// Swap in a whole new collection. Either everything is replaced or nothing is.
    pub fn replace_all(&mut self, slides: Vec<Slide>) -> Result<()> {
        validate_slide_list(&slides)?;
        info!("Replacing {} slides with {}", self.slides.len(), slides.len());
        self.slides = slides;
        self.cursor = 0;
        Ok(())
    }

    pub fn set_cursor(&mut self, index: usize) -> usize {
        self.cursor = index;
        self.clamp_cursor();
        self.cursor
    }

    pub fn next(&mut self) -> usize {
        self.set_cursor(self.cursor + 1)
    }

    pub fn previous(&mut self) -> usize {
        self.set_cursor(self.cursor.saturating_sub(1))
    }

    fn clamp_cursor(&mut self) {
        let last = self.slides.len().saturating_sub(1);
        if self.cursor > last {
            self.cursor = last;
        }
    }
}

/// Check that a list can become the whole collection
pub fn validate_slide_list(slides: &[Slide]) -> Result<()> {
    if slides.is_empty() {
        return Err(CarouselError::ValidationError(
            "A carousel needs at least one slide".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(slides.len());
    for (i, slide) in slides.iter().enumerate() {
        if slide.id.trim().is_empty() {
            return Err(CarouselError::ValidationError(format!(
                "Slide {} has an empty id",
                i + 1
            )));
        }
        if !seen.insert(slide.id.as_str()) {
            return Err(CarouselError::ValidationError(format!(
                "Duplicate slide id: {}",
                slide.id
            )));
        }
    }
    Ok(())
}

/// Parse a JSON array of `{id, headline, body}` records
pub fn parse_slide_list(json: &str) -> Result<Vec<Slide>> {
    let slides: Vec<Slide> = serde_json::from_str(json.trim())?;
    validate_slide_list(&slides)?;
    Ok(slides)
}

/// Load a deck file holding a JSON slide array
pub fn load_deck(path: &Path) -> Result<Vec<Slide>> {
    info!("Loading deck from {:?}", path);
    if !path.exists() {
        return Err(CarouselError::PathNotFoundError(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(CarouselError::FileReadError)?;
    parse_slide_list(&content)
}
