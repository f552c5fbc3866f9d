// ABOUTME: Browser rendering module for the carousel-wizard application
// ABOUTME: Rasterizes slide surfaces and prints the print layout using a headless browser

use crate::errors::{CarouselError, Result};
use crate::export::{PrintHost, RasterImage, Rasterizer};
use crate::html::{Surface, DEFAULT_SLIDE_SIZE, SLIDE_CLASS};
use crate::utils;
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptionsBuilder, Tab};
use log::{debug, info, warn};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Configuration for browser rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub timeout_ms: u64,
    pub browser_path: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            // Room for the slide plus the arrow hanging off its right edge
            width: DEFAULT_SLIDE_SIZE + 200,
            height: DEFAULT_SLIDE_SIZE + 200,
            timeout_ms: 30000, // 30 seconds
            browser_path: None,
        }
    }
}

pub(crate) fn launch_browser(config: &RenderConfig) -> Result<Browser> {
    let mut launch_options_builder = LaunchOptionsBuilder::default();

    launch_options_builder.window_size(Some((config.width, config.height)));
    launch_options_builder.headless(true);

    // Use custom browser path if specified
    if let Some(browser_path) = &config.browser_path {
        launch_options_builder.path(Some(browser_path.into()));
    } else if let Ok(path) = env::var("BROWSER_PATH") {
        if !path.is_empty() {
            launch_options_builder.path(Some(path.into()));
        }
    }

    let launch_options = launch_options_builder
        .build()
        .map_err(|e| CarouselError::BrowserError {
            message: format!("Failed to build browser options: {:?}", e),
            source: None,
        })?;

    info!("Launching headless browser");
    Browser::new(launch_options).map_err(|e| {
        warn!("Failed to launch browser: {}", e);
        CarouselError::browser("Failed to launch browser", e)
    })
}

/// A document written to a scratch file for the browser to load.
/// The file is removed on drop.
struct ScratchPage {
    path: PathBuf,
}

impl ScratchPage {
    fn write(document: &str) -> Result<Self> {
        let path = utils::scratch_file_path("carousel", "html");
        fs::write(&path, document).map_err(CarouselError::FileReadError)?;
        Ok(Self { path })
    }

    fn url(&self) -> Result<String> {
        let abs = utils::get_absolute_path(&self.path)?;
        Ok(format!("file://{}", abs.to_string_lossy()))
    }
}

impl Drop for ScratchPage {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            debug!("Failed to clean up scratch page {:?}: {}", self.path, e);
        }
    }
}

/// Open `url` in a new tab. The tab is closed again if the page fails to load.
pub(crate) fn open_page(browser: &Browser, url: &str, timeout_ms: u64) -> Result<Arc<Tab>> {
    debug!("Opening page at URL: {}", url);

    let tab = browser
        .new_tab()
        .map_err(|e| CarouselError::browser("Failed to create new tab", e))?;
    tab.set_default_timeout(Duration::from_millis(timeout_ms));

    let loaded = tab
        .navigate_to(url)
        .and_then(|tab| tab.wait_until_navigated())
        .map(|_| ());
    if let Err(e) = loaded {
        close_tab(&tab);
        return Err(CarouselError::browser("Failed to load page", e));
    }

    Ok(tab)
}

fn close_tab(tab: &Tab) {
    if let Err(e) = tab.close(true) {
        debug!("Failed to close tab: {}", e);
    }
}

/// Rasterizer backed by one long-lived headless Chrome instance
pub struct ChromeRasterizer {
    browser: Browser,
    config: RenderConfig,
}

impl ChromeRasterizer {
    pub fn launch(config: &RenderConfig) -> Result<Self> {
        Ok(Self {
            browser: launch_browser(config)?,
            config: config.clone(),
        })
    }

    fn capture(&self, tab: &Tab, pixel_ratio: f64) -> Result<Vec<u8>> {
        let selector = format!(".{}", SLIDE_CLASS);
        let element = tab
            .wait_for_element_with_custom_timeout(
                &selector,
                Duration::from_millis(self.config.timeout_ms),
            )
            .map_err(|e| CarouselError::RasterizeError(format!("Slide element missing: {}", e)))?;

        let mut clip = element
            .get_box_model()
            .map_err(|e| CarouselError::RasterizeError(format!("No box model: {}", e)))?
            .border_viewport();
        clip.scale = pixel_ratio;

        tab.capture_screenshot(CaptureScreenshotFormatOption::Png, None, Some(clip), true)
            .map_err(|e| CarouselError::RasterizeError(e.to_string()))
    }
}

impl Rasterizer for ChromeRasterizer {
    fn rasterize(&self, surface: &Surface, pixel_ratio: f64) -> Result<RasterImage> {
        let start_time = Instant::now();
        let page = ScratchPage::write(&surface.document)?;
        let tab = open_page(&self.browser, &page.url()?, self.config.timeout_ms)?;

        let result = self.capture(&tab, pixel_ratio);
        close_tab(&tab);

        let bytes = result?;
        debug!(
            "Rasterized slide {} of {} ({} bytes) in {:.2} seconds",
            surface.index + 1,
            surface.total,
            bytes.len(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(RasterImage::png(bytes))
    }
}

/// Prints documents to PDF through headless Chrome
pub struct ChromePrintHost {
    browser: Browser,
    config: RenderConfig,
}

impl ChromePrintHost {
    pub fn launch(config: &RenderConfig) -> Result<Self> {
        Ok(Self {
            browser: launch_browser(config)?,
            config: config.clone(),
        })
    }
}

impl PrintHost for ChromePrintHost {
    fn print(&self, document: &str) -> Result<Vec<u8>> {
        info!("Printing layout to PDF");
        let page = ScratchPage::write(document)?;
        let tab = open_page(&self.browser, &page.url()?, self.config.timeout_ms)?;

        let result = tab
            .print_to_pdf(None)
            .map_err(|e| CarouselError::PrintError(e.to_string()));
        close_tab(&tab);
        result
    }
}
