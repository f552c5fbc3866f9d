// ABOUTME: HTML rendering module for the carousel-wizard application
// ABOUTME: Turns slides, profile and theme into slide surfaces and the print layout

use crate::errors::{CarouselError, Result};
use crate::profile::Profile;
use crate::slides::Slide;
use crate::state::CarouselState;
use crate::theme::{Theme, ThemeSelection};
use html_escape::encode_double_quoted_attribute as escape_html;
use log::info;
use std::fs;
use std::path::Path;

/// Class carried by the root element of every rendered slide
pub const SLIDE_CLASS: &str = "carousel-slide";

/// Edge length of a rendered slide in CSS pixels
pub const DEFAULT_SLIDE_SIZE: u32 = 500;

const BASE_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: "Inter", "Helvetica Neue", Arial, sans-serif; background: transparent; }
.carousel-slide { position: relative; overflow: hidden; display: flex; flex-direction: column; padding: 40px; }
.carousel-slide .badge { align-self: flex-start; padding: 4px 12px; border-radius: 9999px; font-size: 10px; font-weight: 700; text-transform: uppercase; letter-spacing: .1em; margin-bottom: 16px; }
.carousel-slide .content { flex-grow: 1; display: flex; flex-direction: column; justify-content: center; }
.carousel-slide h2 { font-size: 40px; line-height: 1.15; margin-bottom: 24px; }
.carousel-slide .accent-bar { width: 48px; height: 4px; border-radius: 9999px; opacity: .5; margin-bottom: 24px; }
.carousel-slide p.body { font-size: 20px; line-height: 1.625; font-weight: 500; }
.carousel-slide .arrow { position: absolute; right: 0; top: 50%; transform: translate(50%, -50%); padding: 16px; border-radius: 9999px; background: rgba(255,255,255,.1); border: 1px solid rgba(255,255,255,.2); font-size: 28px; }
.carousel-slide footer { display: flex; justify-content: space-between; align-items: center; margin-top: 40px; padding-top: 24px; border-top: 1px solid rgba(127,127,127,.1); }
.carousel-slide .author { display: flex; align-items: center; gap: 12px; }
.carousel-slide .logo { width: 48px; height: 48px; border-radius: 12px; overflow: hidden; background: #ffffff; padding: 6px; border: 1px solid #f1f5f9; }
.carousel-slide .logo img { width: 100%; height: 100%; object-fit: contain; }
.carousel-slide .name { font-size: 14px; font-weight: 700; line-height: 1; margin-bottom: 4px; }
.carousel-slide .handle { font-size: 10px; opacity: .7; font-weight: 700; text-transform: uppercase; letter-spacing: .05em; }
.carousel-slide .swipe { font-size: 11px; font-weight: 900; font-style: italic; text-transform: uppercase; letter-spacing: .1em; opacity: .8; }
"#;

const PRINT_CSS: &str = r#"
@page { margin: 0; }
.print-page { display: flex; justify-content: center; page-break-after: always; break-after: page; }
.print-page:last-child { page-break-after: auto; break-after: auto; }
"#;

/// A rendered, rasterizable slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    /// Position at render time, 0-based
    pub index: usize,
    pub total: usize,
    pub slide_id: String,
    /// Self-contained HTML document holding exactly one slide
    pub document: String,
}

/// Produces the visual surface for one slide of the current state.
///
/// `None` means nothing is mounted for that index.
pub trait Renderer {
    fn surface(&self, state: &CarouselState, index: usize) -> Option<Surface>;

    /// Every slide in one print-oriented document
    fn print_layout(&self, state: &CarouselState) -> String;
}

impl<T: Renderer + ?Sized> Renderer for &T {
    fn surface(&self, state: &CarouselState, index: usize) -> Option<Surface> {
        (**self).surface(state, index)
    }

    fn print_layout(&self, state: &CarouselState) -> String {
        (**self).print_layout(state)
    }
}

/// Renders slides as standalone HTML documents
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    pub slide_size: u32,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            slide_size: DEFAULT_SLIDE_SIZE,
        }
    }
}

impl Renderer for HtmlRenderer {
    fn surface(&self, state: &CarouselState, index: usize) -> Option<Surface> {
        let slide = state.slides.get(index)?;
        let total = state.slides.len();
        let markup = render_slide(slide, &state.profile, &state.theme, index, total, self.slide_size);
        Some(Surface {
            index,
            total,
            slide_id: slide.id.clone(),
            document: wrap_document(&format!("Slide {}", index + 1), "", &markup),
        })
    }

    fn print_layout(&self, state: &CarouselState) -> String {
        render_print_layout(state, self.slide_size)
    }
}

/// Markup for one slide
pub fn render_slide(
    slide: &Slide,
    profile: &Profile,
    selection: &ThemeSelection,
    index: usize,
    total: usize,
    size: u32,
) -> String {
    let style = selection.theme.style();
    let is_last = index + 1 == total;
    let badge_text = if style.badge_text_dark { "#000000" } else { "#ffffff" };

    let mut html = format!(
        r#"<div class="{class} theme-{theme}" data-slide-id="{id}" style="width:{size}px;height:{size}px;{container}">"#,
        class = SLIDE_CLASS,
        theme = selection.theme.id(),
        id = escape_html(&slide.id),
        size = size,
        container = selection.container_css(),
    );
    html.push('\n');

    html.push_str(&format!(
        r#"<div class="badge" style="background:{};color:{};">{} / {}</div>"#,
        style.accent,
        badge_text,
        index + 1,
        total
    ));
    html.push('\n');

    html.push_str(r#"<div class="content">"#);
    html.push_str(&format!(
        r#"<h2 style="{}">{}</h2>"#,
        style.headline,
        escape_html(&slide.headline)
    ));
    html.push_str(&format!(
        r#"<div class="accent-bar" style="background:{};"></div>"#,
        style.accent
    ));
    html.push_str(&format!(
        r#"<p class="body" style="{}">{}</p>"#,
        style.body,
        escape_html(&slide.body)
    ));
    html.push_str("</div>\n");

    if !is_last {
        html.push_str(&format!(
            r#"<div class="arrow" style="color:{};">&rarr;</div>"#,
            style.profile_text
        ));
        html.push('\n');
    }

    html.push_str(r#"<footer><div class="author">"#);
    if let Some(logo) = &profile.logo_url {
        html.push_str(&format!(
            r#"<div class="logo"><img src="{}" alt="Brand Logo"></div>"#,
            escape_html(logo)
        ));
    }
    html.push_str(&format!(
        r#"<div><h4 class="name" style="color:{color};">{name}</h4><p class="handle" style="color:{color};">{handle}</p></div>"#,
        color = style.profile_text,
        name = escape_html(&profile.name),
        handle = escape_html(&profile.handle),
    ));
    html.push_str("</div>");
    if !is_last {
        html.push_str(&format!(
            r#"<div class="swipe" style="color:{};">Keep Swiping &rsaquo;</div>"#,
            style.profile_text
        ));
    }
    html.push_str("</footer>\n");

    if let Some(decoration) = decoration(selection.theme) {
        html.push_str(decoration);
        html.push('\n');
    }

    html.push_str("</div>");
    html
}

fn decoration(theme: Theme) -> Option<&'static str> {
    match theme {
        Theme::Modern => Some(
            r#"<div style="position:absolute;bottom:-80px;right:-80px;width:256px;height:256px;border-radius:9999px;background:rgba(59,130,246,.05);filter:blur(64px);"></div>"#,
        ),
        Theme::MidnightBlue => Some(
            r#"<div style="position:absolute;top:0;right:0;width:192px;height:192px;border-radius:9999px;background:rgba(96,165,250,.05);filter:blur(40px);"></div>"#,
        ),
        Theme::VibrantYellow => Some(
            r#"<div style="position:absolute;bottom:-24px;left:-24px;width:128px;height:128px;border:12px solid #000000;opacity:.05;transform:rotate(12deg);"></div>"#,
        ),
        Theme::Custom => Some(
            r#"<div style="position:absolute;top:-80px;left:-80px;width:320px;height:320px;border-radius:9999px;background:rgba(255,255,255,.05);filter:blur(64px);"></div>"#,
        ),
        _ => None,
    }
}

/// One document with every slide, one per printed page, in collection order
pub fn render_print_layout(state: &CarouselState, size: u32) -> String {
    let total = state.slides.len();
    info!("Rendering print layout for {} slides", total);

    let mut body = String::new();
    for (index, slide) in state.slides.slides().iter().enumerate() {
        body.push_str(r#"<div class="print-page">"#);
        body.push_str(&render_slide(slide, &state.profile, &state.theme, index, total, size));
        body.push_str("</div>\n");
    }

    wrap_document("Carousel", PRINT_CSS, &body)
}

fn wrap_document(title: &str, extra_css: &str, body: &str) -> String {
    let mut doc = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("<meta charset=\"UTF-8\">\n");
    doc.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    doc.push_str("<style>");
    doc.push_str(BASE_CSS);
    doc.push_str(extra_css);
    doc.push_str("</style>\n</head>\n<body>\n");
    doc.push_str(body);
    doc.push_str("\n</body>\n</html>");
    doc
}

/// Utility function to write HTML content to a file
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML to file: {:?}", output_path);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(CarouselError::FileReadError)?;
        }
    }

    fs::write(output_path, html_content).map_err(CarouselError::FileReadError)?;

    Ok(())
}
