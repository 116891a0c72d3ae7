//! Theme tokens: palette colors, spacing and breakpoints.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A CSS hex color such as `#4caf50` or `#fff`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn parse(value: &str) -> Result<Self> {
        Self::channels(value)?;
        Ok(Self(value.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The same color with the given opacity, as an `rgba(...)` value.
    pub fn fade(&self, alpha: f64) -> String {
        // Validated on construction
        let (r, g, b) = Self::channels(&self.0).unwrap_or((0, 0, 0));
        format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0))
    }

    fn channels(value: &str) -> Result<(u8, u8, u8)> {
        let invalid = || Error::InvalidColor(value.to_string());
        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
                Ok((expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub main: Color,
    pub dark: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: PaletteColor,
    /// Used for credits
    pub secondary: PaletteColor,
    /// `error.dark` is used for debits
    pub error: PaletteColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    fn next(self) -> Option<Breakpoint> {
        match self {
            Breakpoint::Xs => Some(Breakpoint::Sm),
            Breakpoint::Sm => Some(Breakpoint::Md),
            Breakpoint::Md => Some(Breakpoint::Lg),
            Breakpoint::Lg => Some(Breakpoint::Xl),
            Breakpoint::Xl => None,
        }
    }
}

/// Breakpoint widths in pixels, smallest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
}

impl Breakpoints {
    const STEP: f64 = 0.05;

    pub fn width(&self, key: Breakpoint) -> u32 {
        match key {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// Media query matching widths at or above `key`.
    pub fn up(&self, key: Breakpoint) -> String {
        format!("@media (min-width:{}px)", self.width(key))
    }

    /// Media query matching widths below the breakpoint after `key`.
    ///
    /// `down(Xl)` matches every width.
    pub fn down(&self, key: Breakpoint) -> String {
        match key.next() {
            Some(next) => {
                let max = f64::from(self.width(next)) - Self::STEP;
                format!("@media (max-width:{:.2}px)", max)
            }
            None => self.up(Breakpoint::Xs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub palette: Palette,
    /// Pixels per spacing unit
    pub spacing_unit: u32,
    pub breakpoints: Breakpoints,
}

impl Theme {
    pub fn spacing(&self, factor: u32) -> String {
        format!("{}px", self.spacing_unit * factor)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Fixture(e.to_string()))
    }
}

impl Default for Theme {
    fn default() -> Self {
        let color = |hex: &str| Color(hex.to_string());
        Self {
            palette: Palette {
                primary: PaletteColor { main: color("#1976d2"), dark: color("#115293") },
                secondary: PaletteColor { main: color("#4caf50"), dark: color("#388e3c") },
                error: PaletteColor { main: color("#f44336"), dark: color("#c62828") },
            },
            spacing_unit: 8,
            breakpoints: Breakpoints { xs: 0, sm: 600, md: 960, lg: 1280, xl: 1920 },
        }
    }
}
