//! Chart color themes.

use plotters::style::RGBColor;

/// Plain RGB triple, convertible to a plotters color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    #[must_use]
    pub const fn to_plotters(self) -> RGBColor {
        RGBColor(self.0, self.1, self.2)
    }
}

pub const DARK_GREEN: Rgb = Rgb(0, 100, 0);
pub const ORANGE: Rgb = Rgb(255, 165, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Dark IDE-like scheme.
    Darcula,
    /// Solarized light scheme.
    SolarizedLight,
}

/// Colors a theme paints the non-data parts of a chart with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: Rgb,
    pub foreground: Rgb,
    pub grid: Rgb,
}

impl Theme {
    #[must_use]
    pub const fn colors(self) -> ThemeColors {
        match self {
            Self::Darcula => ThemeColors {
                background: Rgb(43, 43, 43),
                foreground: Rgb(169, 183, 198),
                grid: Rgb(70, 73, 75),
            },
            Self::SolarizedLight => ThemeColors {
                background: Rgb(253, 246, 227),
                foreground: Rgb(88, 110, 117),
                grid: Rgb(238, 232, 213),
            },
        }
    }
}
