// ABOUTME: Visual themes for the carousel-wizard application
// ABOUTME: Named themes, their style tokens and the custom gradient color pair

use crate::errors::{CarouselError, Result};
use std::fmt;
use std::str::FromStr;

/// Style tokens for one theme, as CSS declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyle {
    pub container: &'static str,
    pub headline: &'static str,
    pub body: &'static str,
    /// Background of the page badge and the accent bar
    pub accent: &'static str,
    pub profile_text: &'static str,
    /// Whether the page badge text is dark on top of `accent`
    pub badge_text_dark: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Modern,
    Dark,
    Gradient,
    Minimal,
    Bold,
    Custom,
    MidnightBlue,
    CleanTech,
    DeepOcean,
    Arctic,
    NoirBlue,
    SummerGlow,
    CitrusBurst,
    RetroOrange,
    GoldenHour,
    VibrantYellow,
}

impl Theme {
    pub const ALL: [Theme; 16] = [
        Theme::Modern,
        Theme::Dark,
        Theme::Gradient,
        Theme::Minimal,
        Theme::Bold,
        Theme::Custom,
        Theme::MidnightBlue,
        Theme::CleanTech,
        Theme::DeepOcean,
        Theme::Arctic,
        Theme::NoirBlue,
        Theme::SummerGlow,
        Theme::CitrusBurst,
        Theme::RetroOrange,
        Theme::GoldenHour,
        Theme::VibrantYellow,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Theme::Modern => "modern",
            Theme::Dark => "dark",
            Theme::Gradient => "gradient",
            Theme::Minimal => "minimal",
            Theme::Bold => "bold",
            Theme::Custom => "custom",
            Theme::MidnightBlue => "midnight_blue",
            Theme::CleanTech => "clean_tech",
            Theme::DeepOcean => "deep_ocean",
            Theme::Arctic => "arctic",
            Theme::NoirBlue => "noir_blue",
            Theme::SummerGlow => "summer_glow",
            Theme::CitrusBurst => "citrus_burst",
            Theme::RetroOrange => "retro_orange",
            Theme::GoldenHour => "golden_hour",
            Theme::VibrantYellow => "vibrant_yellow",
        }
    }

    /// Human label, e.g. "midnight blue"
    pub fn label(&self) -> String {
        self.id().replace('_', " ")
    }

    pub fn style(&self) -> ThemeStyle {
        match self {
            Theme::Modern => ThemeStyle {
                container: "background:#ffffff;border:1px solid #e2e8f0;",
                headline: "color:#0f172a;font-weight:800;",
                body: "color:#475569;",
                accent: "#2563eb",
                profile_text: "#0f172a",
                badge_text_dark: false,
            },
            Theme::Dark => ThemeStyle {
                container: "background:#020617;border:1px solid #1e293b;",
                headline: "color:#ffffff;font-weight:800;",
                body: "color:#94a3b8;",
                accent: "#10b981",
                profile_text: "#ffffff",
                badge_text_dark: true,
            },
            Theme::Gradient => ThemeStyle {
                container: "background:linear-gradient(to bottom right,#4f46e5,#7e22ce);",
                headline: "color:#ffffff;font-weight:800;text-shadow:0 1px 2px rgba(0,0,0,.05);",
                body: "color:#e0e7ff;",
                accent: "#ffffff",
                profile_text: "#ffffff",
                badge_text_dark: true,
            },
            Theme::Minimal => ThemeStyle {
                container: "background:#f8fafc;border-left:4px solid #0f172a;",
                headline: "color:#0f172a;font-weight:700;",
                body: "color:#334155;",
                accent: "#0f172a",
                profile_text: "#0f172a",
                badge_text_dark: false,
            },
            Theme::Bold => ThemeStyle {
                container: "background:#facc15;border:4px solid #000000;box-shadow:8px 8px 0 0 #000000;",
                headline: "color:#000000;font-weight:900;text-transform:uppercase;font-style:italic;",
                body: "color:#000000;font-weight:500;",
                accent: "#000000",
                profile_text: "#000000",
                badge_text_dark: true,
            },
            // Background comes from the custom color pair
            Theme::Custom => ThemeStyle {
                container: "",
                headline: "color:#ffffff;font-weight:800;filter:drop-shadow(0 4px 3px rgba(0,0,0,.07));",
                body: "color:#ffffff;opacity:.9;",
                accent: "#ffffff",
                profile_text: "#ffffff",
                badge_text_dark: true,
            },
            Theme::MidnightBlue => ThemeStyle {
                container: "background:#0f172a;border-top:8px solid #3b82f6;",
                headline: "color:#ffffff;font-weight:900;",
                body: "color:#cbd5e1;",
                accent: "#3b82f6",
                profile_text: "#60a5fa",
                badge_text_dark: true,
            },
            Theme::CleanTech => ThemeStyle {
                container: "background:#ffffff;border-bottom:8px solid #0f172a;",
                headline: "color:#0f172a;font-weight:800;letter-spacing:-0.025em;",
                body: "color:#64748b;line-height:1.375;",
                accent: "#0f172a",
                profile_text: "#0f172a",
                badge_text_dark: false,
            },
            Theme::DeepOcean => ThemeStyle {
                container: "background:linear-gradient(to bottom,#0f172a,#1e3a8a);",
                headline: "color:#ffffff;font-weight:700;font-style:italic;",
                body: "color:rgba(219,234,254,.8);",
                accent: "#22d3ee",
                profile_text: "#ffffff",
                badge_text_dark: true,
            },
            Theme::Arctic => ThemeStyle {
                container: "background:#f8fafc;border:1px solid #dbeafe;",
                headline: "color:#1e3a8a;font-weight:800;",
                body: "color:#64748b;",
                accent: "#bfdbfe",
                profile_text: "#1e40af",
                badge_text_dark: false,
            },
            Theme::NoirBlue => ThemeStyle {
                container: "background:#000000;border-right:8px solid #1d4ed8;",
                headline: "color:#ffffff;font-weight:900;text-transform:uppercase;",
                body: "color:#94a3b8;",
                accent: "#1d4ed8",
                profile_text: "#3b82f6",
                badge_text_dark: true,
            },
            Theme::SummerGlow => ThemeStyle {
                container: "background:#fff7ed;border:1px solid #fed7aa;",
                headline: "color:#431407;font-weight:900;",
                body: "color:rgba(154,52,18,.8);",
                accent: "#f97316",
                profile_text: "#7c2d12",
                badge_text_dark: false,
            },
            Theme::CitrusBurst => ThemeStyle {
                container: "background:linear-gradient(to top right,#facc15,#f97316);",
                headline: "color:#ffffff;font-weight:800;filter:drop-shadow(0 1px 1px rgba(0,0,0,.05));",
                body: "color:#fff7ed;",
                accent: "#ffffff",
                profile_text: "#ffffff",
                badge_text_dark: true,
            },
            Theme::RetroOrange => ThemeStyle {
                container: "background:#ea580c;",
                headline: "color:#ffffff;font-weight:900;letter-spacing:-0.05em;",
                body: "color:#ffedd5;",
                accent: "#facc15",
                profile_text: "#fef08a",
                badge_text_dark: true,
            },
            Theme::GoldenHour => ThemeStyle {
                container: "background:#0f172a;border-left:8px solid #eab308;",
                headline: "color:#eab308;font-weight:900;",
                body: "color:#94a3b8;",
                accent: "#eab308",
                profile_text: "#ffffff",
                badge_text_dark: true,
            },
            Theme::VibrantYellow => ThemeStyle {
                container: "background:#fde047;",
                headline: "color:#000000;font-weight:800;text-transform:uppercase;",
                body: "color:rgba(0,0,0,.7);font-weight:600;",
                accent: "#000000",
                profile_text: "#000000",
                badge_text_dark: false,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        Theme::ALL
            .iter()
            .copied()
            .find(|t| t.id() == wanted)
            .ok_or_else(|| CarouselError::ValidationError(format!("Unknown theme: {}", s)))
    }
}

/// Two hex colors forming the custom theme's gradient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomColors {
    pub color1: String,
    pub color2: String,
}

impl Default for CustomColors {
    fn default() -> Self {
        Self {
            color1: "#3b82f6".to_string(),
            color2: "#9333ea".to_string(),
        }
    }
}

impl CustomColors {
    pub fn new(color1: &str, color2: &str) -> Result<Self> {
        Ok(Self {
            color1: parse_hex_color(color1)?,
            color2: parse_hex_color(color2)?,
        })
    }

    pub fn gradient_css(&self) -> String {
        format!(
            "background:linear-gradient(135deg, {}, {});",
            self.color1, self.color2
        )
    }
}

/// Accept `#rgb` or `#rrggbb`, returning the lowercase form
pub fn parse_hex_color(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(CarouselError::ValidationError(format!(
            "Invalid hex color: {}",
            value
        )));
    }
    Ok(format!("#{}", digits.to_lowercase()))
}

/// Active theme plus the color pair used when it is `custom`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSelection {
    pub theme: Theme,
    pub colors: CustomColors,
}

impl ThemeSelection {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            colors: CustomColors::default(),
        }
    }

    pub fn custom(colors: CustomColors) -> Self {
        Self {
            theme: Theme::Custom,
            colors,
        }
    }

    /// The gradient pair, only when the custom theme is active
    pub fn gradient(&self) -> Option<&CustomColors> {
        (self.theme == Theme::Custom).then_some(&self.colors)
    }

    /// CSS declarations for a slide container under this selection
    pub fn container_css(&self) -> String {
        match self.gradient() {
            Some(colors) => colors.gradient_css(),
            None => self.theme.style().container.to_string(),
        }
    }
}
