//! Color handling for the dashboard.
//!
//! Location colors are part of the [`ChartSpec`](crate::chart::ChartSpec) and
//! come from a fixed qualitative palette. [`ColorScheme`] only affects the egui
//! window chrome.

use eframe::egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

use crate::chart::Rgb;

/// Qualitative palette used for per-location colors.
pub const LOCATION_PALETTE: [Rgb; 10] = [
    Rgb(99, 110, 250),
    Rgb(239, 85, 59),
    Rgb(0, 204, 150),
    Rgb(171, 99, 250),
    Rgb(255, 161, 90),
    Rgb(25, 211, 243),
    Rgb(255, 102, 146),
    Rgb(182, 232, 128),
    Rgb(255, 151, 255),
    Rgb(254, 203, 82),
];

/// Color for the location at `index` in the dataset's sorted location list.
///
/// Keyed by the dataset-wide index rather than by position in a particular
/// chart, so a location keeps its color when the reference date changes.
pub fn location_color(index: usize) -> Rgb {
    LOCATION_PALETTE[index % LOCATION_PALETTE.len()]
}

/// Color used for single-series charts.
pub const PRIMARY: Rgb = LOCATION_PALETTE[0];

impl From<Rgb> for Color32 {
    fn from(c: Rgb) -> Self {
        Color32::from_rgb(c.0, c.1, c.2)
    }
}

/// Visual theme for the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
    /// ggplot2-inspired: light grey background.
    GgPlot,
}

impl ColorScheme {
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Dark, ColorScheme::Light, ColorScheme::GgPlot]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
            ColorScheme::GgPlot => "ggplot2",
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            ColorScheme::Dark => Visuals::dark(),
            ColorScheme::Light => Visuals::light(),
            ColorScheme::GgPlot => {
                let mut v = Visuals::light();
                let bg = Color32::from_rgb(229, 229, 229);
                let fg = Color32::from_rgb(51, 51, 51);
                v.panel_fill = bg;
                v.window_fill = Color32::WHITE;
                v.extreme_bg_color = bg;
                v.faint_bg_color = Color32::from_rgb(240, 240, 240);
                v.override_text_color = Some(fg);
                v.widgets.noninteractive.bg_fill = Color32::from_rgb(240, 240, 240);
                v.widgets.noninteractive.fg_stroke.color = fg;
                v
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_colors_wrap_around_palette() {
        assert_eq!(location_color(0), PRIMARY);
        assert_eq!(location_color(3), location_color(13));
        assert_ne!(location_color(0), location_color(1));
    }

    #[test]
    fn ggplot_is_a_light_theme() {
        assert!(!ColorScheme::GgPlot.visuals().dark_mode);
        assert!(ColorScheme::Dark.visuals().dark_mode);
    }
}
