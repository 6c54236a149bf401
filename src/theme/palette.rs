//! Built-in color themes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ThemeError;

/// Identifier of a built-in theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Coastal,
    Terracotta,
    Lavender,
}

impl ThemeName {
    /// Order used when cycling; wraps from the last back to the first
    pub const CYCLE: [ThemeName; 3] = [ThemeName::Coastal, ThemeName::Terracotta, ThemeName::Lavender];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Coastal => "coastal",
            ThemeName::Terracotta => "terracotta",
            ThemeName::Lavender => "lavender",
        }
    }

    /// The theme after this one in the cycle
    pub fn next(self) -> ThemeName {
        let pos = Self::CYCLE.iter().position(|&t| t == self).unwrap_or(0);
        Self::CYCLE[(pos + 1) % Self::CYCLE.len()]
    }

    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeName::Coastal => &COASTAL,
            ThemeName::Terracotta => &TERRACOTTA,
            ThemeName::Lavender => &LAVENDER,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "coastal" => Ok(ThemeName::Coastal),
            "terracotta" => Ok(ThemeName::Terracotta),
            "lavender" => Ok(ThemeName::Lavender),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

/// Design tokens of a theme. Every theme sets every token, so applying a
/// theme always overwrites all of the previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeTokens {
    pub primary: &'static str,
    pub primary_rgb: &'static str,
    pub accent: &'static str,
    pub accent_rgb: &'static str,
    pub background: &'static str,
    pub background_rgb: &'static str,
    pub text: &'static str,
    pub text_rgb: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_secondary: &'static str,
    pub text_tertiary: &'static str,
    pub border: &'static str,
}

impl ThemeTokens {
    /// Token names, in the order they are applied
    pub const KEYS: [&'static str; 13] = [
        "primary",
        "primary-rgb",
        "accent",
        "accent-rgb",
        "background",
        "background-rgb",
        "text",
        "text-rgb",
        "bg-secondary",
        "bg-tertiary",
        "text-secondary",
        "text-tertiary",
        "border",
    ];

    /// (token name, value) pairs in `KEYS` order
    pub fn entries(&self) -> [(&'static str, &'static str); 13] {
        let values = [
            self.primary,
            self.primary_rgb,
            self.accent,
            self.accent_rgb,
            self.background,
            self.background_rgb,
            self.text,
            self.text_rgb,
            self.bg_secondary,
            self.bg_tertiary,
            self.text_secondary,
            self.text_tertiary,
            self.border,
        ];
        let mut entries = [("", ""); 13];
        for (i, value) in values.into_iter().enumerate() {
            entries[i] = (Self::KEYS[i], value);
        }
        entries
    }
}

/// A named color theme
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: ThemeName,
    pub display_name: &'static str,
    /// Emoji shown on the theme toggle
    pub glyph: &'static str,
    pub description: &'static str,
    pub tokens: ThemeTokens,
}

impl Theme {
    /// Every built-in theme, in cycle order
    pub fn all() -> [&'static Theme; 3] {
        ThemeName::CYCLE.map(ThemeName::theme)
    }

    /// CSS custom property a token is published under
    pub fn css_var(token: &str) -> String {
        format!("--theme-{}", token)
    }

    /// A CSS rule scoping this theme's tokens to `[data-theme="<name>"]`
    pub fn css_rule(&self) -> String {
        let mut css = format!("[data-theme=\"{}\"] {{\n", self.name);
        for (key, value) in self.tokens.entries() {
            css.push_str(&format!("  {}: {};\n", Self::css_var(key), value));
        }
        css.push_str("}\n");
        css
    }
}

/// Stylesheet with one rule per built-in theme
pub fn palette_css() -> String {
    Theme::all()
        .iter()
        .map(|theme| theme.css_rule())
        .collect::<Vec<_>>()
        .join("\n")
}

static COASTAL: Theme = Theme {
    name: ThemeName::Coastal,
    display_name: "Coastal Mist",
    glyph: "🌫️",
    description: "Professional, serene, and clean",
    tokens: ThemeTokens {
        primary: "#A2B9D1",
        primary_rgb: "162, 185, 209",
        accent: "#84A9A6",
        accent_rgb: "132, 169, 166",
        background: "#F0F2F5",
        background_rgb: "240, 242, 245",
        text: "#4D5359",
        text_rgb: "77, 83, 89",
        bg_secondary: "#E8EAED",
        bg_tertiary: "#DFE1E4",
        text_secondary: "#6B7178",
        text_tertiary: "#8A9099",
        border: "#D1D5DB",
    },
};

static TERRACOTTA: Theme = Theme {
    name: ThemeName::Terracotta,
    display_name: "Warm Terracotta",
    glyph: "🍑",
    description: "Warm, inviting, and creative",
    tokens: ThemeTokens {
        primary: "#E8CFC6",
        primary_rgb: "232, 207, 198",
        accent: "#F3D9C3",
        accent_rgb: "243, 217, 195",
        background: "#FCF8F5",
        background_rgb: "252, 248, 245",
        text: "#6B5E5A",
        text_rgb: "107, 94, 90",
        bg_secondary: "#F5EDE8",
        bg_tertiary: "#EFE3DC",
        text_secondary: "#857570",
        text_tertiary: "#9F8D87",
        border: "#E5D5CC",
    },
};

static LAVENDER: Theme = Theme {
    name: ThemeName::Lavender,
    display_name: "Lavender & Mint",
    glyph: "🌿",
    description: "Modern, fresh, and energetic",
    tokens: ThemeTokens {
        primary: "#D6D2E4",
        primary_rgb: "214, 210, 228",
        accent: "#C4E4D4",
        accent_rgb: "196, 228, 212",
        background: "#F9F9F9",
        background_rgb: "249, 249, 249",
        text: "#595959",
        text_rgb: "89, 89, 89",
        bg_secondary: "#F1F1F1",
        bg_tertiary: "#E9E9E9",
        text_secondary: "#737373",
        text_tertiary: "#8C8C8C",
        border: "#D9D9D9",
    },
};
