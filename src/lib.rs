// ABOUTME: Library module for the carousel-wizard program.
// ABOUTME: Contains the slide store, rendering, generation and export pipeline.

// Reexport modules
pub mod config;
pub mod errors;
pub mod export;
pub mod generate;
pub mod html;
pub mod profile;
pub mod render;
pub mod slides;
pub mod state;
pub mod theme;
pub mod utils;

// Reexport common types and functions
pub use config::Config;
pub use errors::{CarouselError, Result};
pub use export::{
    export_print_layout, ArtifactSink, BatchReport, DirectorySink, ExportConfig, ExportState,
    Exporter, PrintHost, RasterImage, Rasterizer, SlideOutcome,
};
pub use generate::{GeminiClient, GenerationConfig, SlideGenerator};
pub use html::{render_print_layout, write_html_to_file, HtmlRenderer, Renderer, Surface};
pub use profile::Profile;
pub use render::{ChromePrintHost, ChromeRasterizer, RenderConfig};
pub use slides::{Removal, Slide, SlideField, SlideStore};
pub use state::{CarouselState, SharedState};
pub use theme::{CustomColors, Theme, ThemeSelection};
