// ABOUTME: Export orchestration for the carousel-wizard application
// ABOUTME: Exports one slide, every slide in paced order, or the print layout

use crate::errors::{CarouselError, Result};
use crate::html::{Renderer, Surface};
use crate::state::SharedState;
use crate::utils;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, info, warn};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

pub const DEFAULT_PACING_MS: u64 = 500;
pub const DEFAULT_PIXEL_RATIO: f64 = 2.0;
pub const DEFAULT_FILE_PREFIX: &str = "carousel-slide";
pub const PRINT_FILE_NAME: &str = "carousel.pdf";

/// Encoded image produced by a rasterizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

impl RasterImage {
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime: "image/png",
        }
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Converts one rendered surface into an image
pub trait Rasterizer {
    fn rasterize(&self, surface: &Surface, pixel_ratio: f64) -> Result<RasterImage>;
}

/// Where exported artifacts end up
pub trait ArtifactSink {
    fn persist(&self, name: &str, bytes: &[u8]) -> Result<()>;
}

/// Native print/save-as-PDF of a whole document
pub trait PrintHost {
    fn print(&self, document: &str) -> Result<Vec<u8>>;
}

impl<T: Rasterizer + ?Sized> Rasterizer for &T {
    fn rasterize(&self, surface: &Surface, pixel_ratio: f64) -> Result<RasterImage> {
        (**self).rasterize(surface, pixel_ratio)
    }
}

impl<T: ArtifactSink + ?Sized> ArtifactSink for &T {
    fn persist(&self, name: &str, bytes: &[u8]) -> Result<()> {
        (**self).persist(name, bytes)
    }
}

/// Writes artifacts into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: &Path) -> Result<Self> {
        utils::validate_directory_writable(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for DirectorySink {
    fn persist(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.dir.join(name);
        info!("Saving {:?}", path);
        fs::write(&path, bytes).map_err(CarouselError::FileReadError)
    }
}

/// Configuration for the export pipeline
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Idle time between two successive exports of a batch
    pub pacing: Duration,
    pub pixel_ratio: f64,
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pacing: Duration::from_millis(DEFAULT_PACING_MS),
            pixel_ratio: DEFAULT_PIXEL_RATIO,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

/// File name for the slide at 0-based `index`
pub fn slide_file_name(prefix: &str, index: usize) -> String {
    format!("{}-{}.png", prefix, index + 1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideOutcome {
    Saved { index: usize, file_name: String },
    /// Nothing mounted for the index; the rasterizer was never called
    Skipped { index: usize },
    Failed { index: usize, reason: String },
}

impl SlideOutcome {
    pub fn index(&self) -> usize {
        match self {
            SlideOutcome::Saved { index, .. }
            | SlideOutcome::Skipped { index }
            | SlideOutcome::Failed { index, .. } => *index,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, SlideOutcome::Saved { .. })
    }
}

/// Per-slide outcomes of one batch, in export order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<SlideOutcome>,
}

impl BatchReport {
    pub fn saved(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SlideOutcome::Failed { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SlideOutcome::Skipped { .. }))
            .count()
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                SlideOutcome::Saved { file_name, .. } => Some(file_name.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportState {
    Idle,
    Exporting,
}

/// Returns the exporter to `Idle` when the batch ends, however it ends
struct BatchGuard<'a> {
    state: &'a Mutex<ExportState>,
}

impl Drop for BatchGuard<'_> {
    fn drop(&mut self) {
        *self.state.lock() = ExportState::Idle;
        debug!("Export state: Idle");
    }
}

/// Drives slide exports against the current session state
pub struct Exporter<R, Z, S> {
    renderer: R,
    rasterizer: Z,
    sink: S,
    config: ExportConfig,
    state: Mutex<ExportState>,
}

impl<R, Z, S> Exporter<R, Z, S>
where
    R: Renderer,
    Z: Rasterizer,
    S: ArtifactSink,
{
    pub fn new(renderer: R, rasterizer: Z, sink: S, config: ExportConfig) -> Self {
        Self {
            renderer,
            rasterizer,
            sink,
            config,
            state: Mutex::new(ExportState::Idle),
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn export_state(&self) -> ExportState {
        *self.state.lock()
    }

    pub fn is_exporting(&self) -> bool {
        self.export_state() == ExportState::Exporting
    }

    /// Export the slide at `index` under its current 1-based position.
    ///
    /// Failures are logged and reported in the outcome, never propagated.
    pub fn export_one(&self, state: &SharedState, index: usize) -> SlideOutcome {
        // Lock only while rendering so edits can land during rasterization
        let surface = {
            let current = state.read();
            self.renderer.surface(&current, index)
        };
        let Some(surface) = surface else {
            debug!("No surface mounted for slide {}, skipping", index + 1);
            return SlideOutcome::Skipped { index };
        };

        let file_name = slide_file_name(&self.config.file_prefix, surface.index);
        info!("Exporting {}", file_name);

        let result = self
            .rasterizer
            .rasterize(&surface, self.config.pixel_ratio)
            .and_then(|image| self.sink.persist(&file_name, &image.bytes));

        match result {
            Ok(()) => SlideOutcome::Saved { index, file_name },
            Err(e) => {
                warn!("Failed to export slide {}: {}", index + 1, e);
                SlideOutcome::Failed {
                    index,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Export every slide in ascending order, one at a time, pacing between exports.
    ///
    /// The collection is re-read before each step, so edits made mid-batch are
    /// honoured. A second batch while one is running is rejected.
    pub fn export_all(&self, state: &SharedState) -> Result<BatchReport> {
        let _guard = self.begin_batch()?;
        let start_time = Instant::now();

        let mut report = BatchReport::default();
        let mut index = 0;
        while index < state.read().slides.len() {
            report.outcomes.push(self.export_one(state, index));
            index += 1;

            if index < state.read().slides.len() {
                thread::sleep(self.config.pacing);
            }
        }

        info!(
            "Batch export complete: {} saved, {} failed, {} skipped in {:.2} seconds",
            report.saved(),
            report.failed(),
            report.skipped(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(report)
    }

    fn begin_batch(&self) -> Result<BatchGuard<'_>> {
        let mut current = self.state.lock();
        if *current == ExportState::Exporting {
            warn!("Rejecting batch export: another batch is running");
            return Err(CarouselError::ExportInProgress);
        }
        *current = ExportState::Exporting;
        debug!("Export state: Exporting");
        Ok(BatchGuard { state: &self.state })
    }
}

/// Render every slide into one print document and save what the host prints.
///
/// Shares nothing with the batch path and never touches a rasterizer.
pub fn export_print_layout<R, S>(
    renderer: &R,
    state: &SharedState,
    host: &dyn PrintHost,
    sink: &S,
) -> Result<String>
where
    R: Renderer + ?Sized,
    S: ArtifactSink + ?Sized,
{
    let document = {
        let current = state.read();
        renderer.print_layout(&current)
    };
    let pdf = host.print(&document)?;
    sink.persist(PRINT_FILE_NAME, &pdf)?;
    info!("Saved print layout as {}", PRINT_FILE_NAME);
    Ok(PRINT_FILE_NAME.to_string())
}
