//! Shared UI components

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, Vec2};

use super::theme::Theme;

/// Render content inside a centered card frame
pub fn card<R>(
    ui: &mut egui::Ui,
    theme: &Theme,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let width = ui.available_width().min(520.0);

    ui.vertical_centered(|ui| {
        egui::Frame::new()
            .fill(theme.bg_medium)
            .corner_radius(CornerRadius::same(16))
            .inner_margin(Margin::same(32))
            .stroke(egui::Stroke::new(1.0, theme.border))
            .show(ui, |ui| {
                ui.set_width(width - 64.0); // Account for frame margins
                add_contents(ui)
            })
            .inner
    })
    .inner
}

/// A large full-width button; disabled buttons render muted
pub fn primary_button(ui: &mut egui::Ui, theme: &Theme, label: &str, enabled: bool) -> bool {
    let fill = if enabled { theme.accent } else { theme.accent_muted };
    let button = egui::Button::new(RichText::new(label).color(Color32::WHITE).size(16.0))
        .fill(fill)
        .corner_radius(CornerRadius::same(8))
        .min_size(Vec2::new(ui.available_width(), 40.0));

    ui.add_enabled(enabled, button).clicked()
}

/// A secondary button sized like `primary_button`
pub fn secondary_button(ui: &mut egui::Ui, theme: &Theme, label: &str) -> bool {
    let button = egui::Button::new(RichText::new(label).color(theme.text_primary).size(16.0))
        .fill(theme.bg_light)
        .corner_radius(CornerRadius::same(8))
        .min_size(Vec2::new(ui.available_width(), 40.0));

    ui.add(button).clicked()
}

/// A colored notice box (submit error or success message)
pub fn notice(ui: &mut egui::Ui, text: &str, fg: Color32, bg: Color32) {
    egui::Frame::new()
        .fill(bg)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(fg));
        });
}
