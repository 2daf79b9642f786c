//! Theme token resolution
//!
//! Tokens are derived from two independent axes:
//!
//! ```text
//!   ThemeStyle ──▶ VariantBase  (corner radius, gradient, card shades)
//!                        │
//!                        ├── merge ──▶ ThemeTokens
//!                        │
//!   dark flag  ──▶ Palette      (background, header, text, borders, inputs)
//! ```
//!
//! Each pass is computed on its own; the merge only picks the shade matching
//! the flag. The single cross-axis rule lives in [`Backdrop`]: when light, the
//! minimal style gets a flat background and a stronger border, while dark mode
//! overrides the style's choice.

use serde::{Deserialize, Serialize};

/// Visual style variant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeStyle {
    #[default]
    Modern,
    Classic,
    Minimal,
}

impl ThemeStyle {
    /// Get all styles for iteration
    pub fn all() -> &'static [ThemeStyle] {
        &[ThemeStyle::Modern, ThemeStyle::Classic, ThemeStyle::Minimal]
    }

    /// Parse a stored style name. Matching is exact; anything else is `Modern`
    pub fn from_name(name: &str) -> Self {
        match name {
            "classic" => ThemeStyle::Classic,
            "minimal" => ThemeStyle::Minimal,
            _ => ThemeStyle::Modern,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeStyle::Modern => "modern",
            ThemeStyle::Classic => "classic",
            ThemeStyle::Minimal => "minimal",
        }
    }
}

impl std::fmt::Display for ThemeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat set of presentation tokens consumed by the views
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub background: String,
    pub header_bg: String,
    pub card_bg: String,
    pub card_hover: String,
    pub text: String,
    pub text_secondary: String,
    pub border: String,
    pub border_hover: String,
    pub input: String,
    pub input_focus: String,
    pub button_secondary: String,
    pub progress_bg: String,
    pub gradient_style: String,
    pub button_style: String,
}

impl ThemeTokens {
    /// Token names paired with values, in declaration order
    pub fn entries(&self) -> [(&'static str, &str); 14] {
        [
            ("background", self.background.as_str()),
            ("headerBg", self.header_bg.as_str()),
            ("cardBg", self.card_bg.as_str()),
            ("cardHover", self.card_hover.as_str()),
            ("text", self.text.as_str()),
            ("textSecondary", self.text_secondary.as_str()),
            ("border", self.border.as_str()),
            ("borderHover", self.border_hover.as_str()),
            ("input", self.input.as_str()),
            ("inputFocus", self.input_focus.as_str()),
            ("buttonSecondary", self.button_secondary.as_str()),
            ("progressBg", self.progress_bg.as_str()),
            ("gradientStyle", self.gradient_style.as_str()),
            ("buttonStyle", self.button_style.as_str()),
        ]
    }
}

/// A value with one variant per colour mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub light: &'static str,
    pub dark: &'static str,
}

impl Shade {
    pub const fn new(light: &'static str, dark: &'static str) -> Self {
        Self { light, dark }
    }

    pub fn pick(&self, is_dark: bool) -> &'static str {
        if is_dark {
            self.dark
        } else {
            self.light
        }
    }
}

/// Style-specific idioms, independent of the colour mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantBase {
    /// Corner radius class shared by inputs and buttons
    pub radius: &'static str,
    pub gradient: &'static str,
    pub card_bg: Shade,
    pub card_hover: Shade,
}

impl VariantBase {
    pub fn for_style(style: ThemeStyle) -> Self {
        match style {
            ThemeStyle::Modern => Self {
                radius: "rounded-xl",
                gradient: "bg-gradient-to-r from-indigo-500 to-purple-600",
                card_bg: Shade::new("bg-white/90", "bg-gray-800/90"),
                card_hover: Shade::new(
                    "hover:shadow-xl hover:shadow-indigo-100/50",
                    "hover:bg-gray-700/90",
                ),
            },
            ThemeStyle::Classic => Self {
                radius: "rounded-lg",
                gradient: "bg-gradient-to-r from-blue-600 to-blue-800",
                card_bg: Shade::new("bg-white", "bg-gray-800"),
                card_hover: Shade::new("hover:shadow-md", "hover:bg-gray-700"),
            },
            ThemeStyle::Minimal => Self {
                radius: "rounded",
                gradient: "bg-gradient-to-r from-gray-800 to-gray-900",
                card_bg: Shade::new("bg-gray-50", "bg-gray-900"),
                card_hover: Shade::new("hover:bg-white", "hover:bg-gray-800"),
            },
        }
    }
}

/// A palette value that differs for the minimal style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    pub standard: &'static str,
    pub minimal: &'static str,
}

impl Backdrop {
    const fn uniform(value: &'static str) -> Self {
        Self { standard: value, minimal: value }
    }

    pub fn pick(&self, style: ThemeStyle) -> &'static str {
        match style {
            ThemeStyle::Minimal => self.minimal,
            ThemeStyle::Modern | ThemeStyle::Classic => self.standard,
        }
    }
}

/// Colour-mode palette, independent of the style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Backdrop,
    pub border: Backdrop,
    pub header_bg: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border_hover: &'static str,
    pub input_colors: &'static str,
    pub input_focus: &'static str,
    pub button_secondary: &'static str,
    pub progress_bg: &'static str,
}

const DARK_PALETTE: Palette = Palette {
    background: Backdrop::uniform("bg-[#0E1117] bg-noise-pattern"),
    border: Backdrop::uniform("border-gray-700"),
    header_bg: "bg-gray-800/80 backdrop-blur-lg border-gray-700",
    text: "text-white",
    text_secondary: "text-gray-300",
    border_hover: "border-gray-600",
    input_colors: "bg-gray-700/70 border-gray-600 text-white placeholder-gray-400",
    input_focus: "focus:ring-indigo-400 focus:border-indigo-400",
    button_secondary: "text-gray-300 hover:bg-gray-700/50",
    progress_bg: "bg-gray-700/50",
};

const LIGHT_PALETTE: Palette = Palette {
    background: Backdrop {
        standard: "bg-gradient-to-br from-indigo-50 via-white to-purple-50 bg-noise-pattern",
        minimal: "bg-gray-100 bg-noise-pattern",
    },
    border: Backdrop {
        standard: "border-gray-100",
        minimal: "border-gray-200",
    },
    header_bg: "bg-white/80 backdrop-blur-lg border-gray-200",
    text: "text-gray-900",
    text_secondary: "text-gray-600",
    border_hover: "border-gray-400",
    input_colors: "bg-white/70 border-gray-300 text-gray-900 placeholder-gray-500",
    input_focus: "focus:ring-indigo-500 focus:border-indigo-500",
    button_secondary: "text-gray-600 hover:bg-gray-50/80",
    progress_bg: "bg-gray-200/70",
};

impl Palette {
    pub fn for_mode(is_dark: bool) -> &'static Palette {
        if is_dark {
            &DARK_PALETTE
        } else {
            &LIGHT_PALETTE
        }
    }
}

/// Resolve the token set for a colour mode and style
pub fn resolve(is_dark: bool, style: ThemeStyle) -> ThemeTokens {
    let base = VariantBase::for_style(style);
    let palette = Palette::for_mode(is_dark);
    merge(&base, palette, is_dark, style)
}

/// Resolve from a stored style name; unknown names resolve like `modern`
pub fn resolve_named(is_dark: bool, style: &str) -> ThemeTokens {
    resolve(is_dark, ThemeStyle::from_name(style))
}

fn merge(base: &VariantBase, palette: &Palette, is_dark: bool, style: ThemeStyle) -> ThemeTokens {
    ThemeTokens {
        background: palette.background.pick(style).to_string(),
        header_bg: palette.header_bg.to_string(),
        card_bg: base.card_bg.pick(is_dark).to_string(),
        card_hover: base.card_hover.pick(is_dark).to_string(),
        text: palette.text.to_string(),
        text_secondary: palette.text_secondary.to_string(),
        border: palette.border.pick(style).to_string(),
        border_hover: palette.border_hover.to_string(),
        input: format!("{} {}", base.radius, palette.input_colors),
        input_focus: palette.input_focus.to_string(),
        button_secondary: palette.button_secondary.to_string(),
        progress_bg: palette.progress_bg.to_string(),
        gradient_style: base.gradient.to_string(),
        button_style: base.radius.to_string(),
    }
}
