use eframe::egui::{self, Color32, Stroke, Visuals};

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    pub dark: bool,

    // Base colors
    pub bg_darkest: Color32,
    pub bg_dark: Color32,
    pub bg_medium: Color32,
    pub bg_light: Color32,

    // Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    // Accent colors
    pub accent: Color32,
    pub accent_hover: Color32,
    pub accent_muted: Color32,

    // Semantic colors
    pub success: Color32,
    pub success_bg: Color32,
    pub error: Color32,
    pub error_bg: Color32,

    // UI element colors
    pub border: Color32,
    pub selection: Color32,
}

impl Theme {
    /// Pick the theme for the configured mode
    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    /// Deep blue on slate
    pub fn dark() -> Self {
        Self {
            dark: true,

            bg_darkest: Color32::from_rgb(12, 20, 30),
            bg_dark: Color32::from_rgb(15, 23, 42),
            bg_medium: Color32::from_rgb(22, 33, 54),
            bg_light: Color32::from_rgb(35, 48, 70),

            text_primary: Color32::from_rgb(248, 250, 252),
            text_secondary: Color32::from_rgb(200, 210, 220),
            text_muted: Color32::from_rgb(130, 145, 160),

            accent: Color32::from_rgb(59, 130, 246),        // Blue-500
            accent_hover: Color32::from_rgb(96, 165, 250),  // Blue-400
            accent_muted: Color32::from_rgb(37, 99, 235),   // Blue-600

            success: Color32::from_rgb(74, 222, 128),          // Green-400
            success_bg: Color32::from_rgb(20, 83, 45),         // Green-900
            error: Color32::from_rgb(248, 113, 113),           // Red-400
            error_bg: Color32::from_rgb(127, 29, 29),          // Red-900

            border: Color32::from_rgb(51, 65, 85),
            selection: Color32::from_rgb(59, 130, 246).gamma_multiply(0.3),
        }
    }

    /// White card on a light blue background
    pub fn light() -> Self {
        Self {
            dark: false,

            bg_darkest: Color32::from_rgb(255, 255, 255),
            bg_dark: Color32::from_rgb(219, 234, 254),   // Blue-100
            bg_medium: Color32::from_rgb(255, 255, 255),
            bg_light: Color32::from_rgb(229, 231, 235),  // Gray-200

            text_primary: Color32::from_rgb(17, 24, 39),     // Gray-900
            text_secondary: Color32::from_rgb(55, 65, 81),   // Gray-700
            text_muted: Color32::from_rgb(107, 114, 128),    // Gray-500

            accent: Color32::from_rgb(37, 99, 235),         // Blue-600
            accent_hover: Color32::from_rgb(29, 78, 216),   // Blue-700
            accent_muted: Color32::from_rgb(156, 163, 175), // Gray-400

            success: Color32::from_rgb(21, 128, 61),        // Green-700
            success_bg: Color32::from_rgb(220, 252, 231),   // Green-100
            error: Color32::from_rgb(185, 28, 28),          // Red-700
            error_bg: Color32::from_rgb(254, 226, 226),     // Red-100

            border: Color32::from_rgb(209, 213, 219),       // Gray-300
            selection: Color32::from_rgb(37, 99, 235).gamma_multiply(0.3),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark { Visuals::dark() } else { Visuals::light() };

        // Window and panel backgrounds
        visuals.window_fill = self.bg_dark;
        visuals.panel_fill = self.bg_dark;
        visuals.faint_bg_color = self.bg_medium;
        visuals.extreme_bg_color = self.bg_darkest;

        visuals.widgets.noninteractive.bg_fill = self.bg_medium;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.inactive.bg_fill = self.bg_light;
        visuals.widgets.inactive.weak_bg_fill = self.bg_light;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.bg_fill = self.bg_light;
        visuals.widgets.hovered.weak_bg_fill = self.bg_light;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.bg_fill = self.accent_muted;
        visuals.widgets.active.weak_bg_fill = self.accent_muted;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.accent_hover);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Text edit focus ring
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.hyperlink_color = self.accent;
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_visuals(visuals);
    }
}
