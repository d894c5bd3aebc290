//! # GUI Theme
//!
//! Dark theme for the training client: near-black panels, a warm amber accent,
//! and traffic-light status colors for scores and feedback.

use egui::{Color32, Context, Stroke, Visuals};
use egui::Theme as EguiTheme;

use crate::app::ScoreBand;

/// Color palette
#[derive(Clone)]
pub struct Palette {
    /// Panel background
    pub background: Color32,
    /// Card and tile fill
    pub surface: Color32,
    /// Primary text
    pub text: Color32,
    /// Accent (selection, active nav entry)
    pub accent: Color32,
    /// Borders
    pub border: Color32,
    /// Secondary text
    pub secondary: Color32,
    pub green: Color32,
    pub red: Color32,
    pub amber: Color32,
    pub blue: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color32::from_rgb(18, 18, 20),
            surface: Color32::from_rgb(32, 32, 36),
            text: Color32::from_rgb(240, 240, 240),
            accent: Color32::from_rgb(255, 176, 59),    // #FFB03B
            border: Color32::from_rgb(60, 60, 66),
            secondary: Color32::from_rgb(150, 150, 156),
            green: Color32::from_rgb(76, 200, 110),
            red: Color32::from_rgb(235, 80, 80),
            amber: Color32::from_rgb(240, 180, 40),
            blue: Color32::from_rgb(100, 150, 255),
        }
    }
}

/// Application theme
pub struct Theme {
    /// Color palette
    pub colors: Palette,
    /// Normal text color
    pub normal: Color32,
    /// Selected/highlighted items
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    /// Card and tile fill
    pub surface: Color32,
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = Palette::default();
        Theme {
            colors: colors.clone(),
            normal: colors.text,
            selected: colors.accent,
            border: colors.border,
            dim: colors.secondary,
            success: colors.green,
            error: colors.red,
            warning: colors.amber,
            info: colors.blue,
            surface: colors.surface,
            background: colors.background,
        }
    }
}

impl Theme {
    /// Color for a quiz result band
    pub fn band_color(&self, band: ScoreBand) -> Color32 {
        match band {
            ScoreBand::Excellent => self.success,
            ScoreBand::Fair => self.warning,
            ScoreBand::Poor => self.error,
        }
    }

    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.override_text_color = Some(self.normal);

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.faint_bg_color = self.surface;
        visuals.extreme_bg_color = Color32::from_rgb(12, 12, 14);

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.weak_bg_fill = self.surface;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, self.selected);
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, self.selected);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(255, 176, 59, 70);
        visuals.selection.stroke = Stroke::new(1.5, self.selected);
        visuals.hyperlink_color = self.info;

        visuals
    }

    /// Apply the theme to an egui context
    pub fn apply(ctx: &Context) {
        let visuals = Self::default().visuals();
        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::vec2(8.0, 6.0);
                style.spacing.button_padding = egui::vec2(12.0, 6.0);
                style.spacing.interact_size = egui::vec2(40.0, 32.0);
            });
        }
        tracing::debug!("Applied theme visuals");
    }
}
