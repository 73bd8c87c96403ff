//! Presentation settings: theme, template, accent color and font.
//!
//! The four settings are independent of each other and of the resume
//! content. Each one is stored under its own key.

use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";
pub const TEMPLATE_KEY: &str = "resumeTemplate";
pub const ACCENT_COLOR_KEY: &str = "accentColor";
pub const FONT_FAMILY_KEY: &str = "fontFamily";

pub const DEFAULT_ACCENT_COLOR: &str = "#007BFF";
pub const DEFAULT_FONT_FAMILY: &str = "'Segoe UI', Tahoma, Geneva, Verdana, sans-serif";

/// Light or dark color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Layout variant of the rendered resume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Classic,
    Modern,
    Minimal,
    Creative,
}

impl Template {
    pub const ALL: [Template; 4] = [Self::Classic, Self::Modern, Self::Minimal, Self::Creative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Modern => "modern",
            Self::Minimal => "minimal",
            Self::Creative => "creative",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Modern => "Modern",
            Self::Minimal => "Minimal",
            Self::Creative => "Creative",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// The template after this one, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Current presentation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    pub theme: Theme,
    pub template: Template,
    pub accent_color: String,
    pub font_family: String,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            template: Template::default(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl PresentationState {
    /// Build from stored values, falling back per setting.
    ///
    /// `system_theme` is used only when no theme was ever stored.
    pub fn from_stored(
        theme: Option<&str>,
        template: Option<&str>,
        accent_color: Option<&str>,
        font_family: Option<&str>,
        system_theme: Theme,
    ) -> Self {
        Self {
            theme: theme.and_then(Theme::parse).unwrap_or(system_theme),
            template: template.and_then(Template::parse).unwrap_or_default(),
            accent_color: non_blank(accent_color).unwrap_or(DEFAULT_ACCENT_COLOR).to_string(),
            font_family: non_blank(font_family).unwrap_or(DEFAULT_FONT_FAMILY).to_string(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_cycle_wraps() {
        assert_eq!(Template::Classic.next(), Template::Modern);
        assert_eq!(Template::Creative.next(), Template::Classic);
    }

    #[test]
    fn test_from_stored_prefers_stored_theme() {
        let state = PresentationState::from_stored(Some("light"), None, None, None, Theme::Dark);
        assert_eq!(state.theme, Theme::Light);

        let state = PresentationState::from_stored(None, None, None, None, Theme::Dark);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_from_stored_falls_back_per_setting() {
        let state = PresentationState::from_stored(
            None,
            Some("modern"),
            Some("  "),
            Some("Georgia, serif"),
            Theme::Light,
        );
        assert_eq!(state.template, Template::Modern);
        assert_eq!(state.accent_color, DEFAULT_ACCENT_COLOR);
        assert_eq!(state.font_family, "Georgia, serif");

        let state = PresentationState::from_stored(None, Some("fancy"), None, None, Theme::Light);
        assert_eq!(state.template, Template::Classic);
    }
}
