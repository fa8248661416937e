//! Welcome view rendering

use eframe::egui::{self, RichText};
use egui_commonmark::CommonMarkViewer;

use crate::app::SendformApp;
use crate::state::View;
use crate::ui::components::{card, primary_button};

/// Render the welcome view
pub fn render_welcome(app: &mut SendformApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();
    let messages = app.messages();

    ui.add_space(ui.available_height() * 0.2);

    let next_clicked = card(ui, &theme, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(messages.welcome_title)
                    .color(theme.text_primary)
                    .size(28.0)
                    .strong(),
            );
        });
        ui.add_space(16.0);

        CommonMarkViewer::new().show(ui, &mut app.ui.markdown_cache, messages.welcome_body);

        ui.add_space(24.0);
        primary_button(ui, &theme, messages.next, true)
    });

    if next_clicked {
        app.navigate(View::Send);
    }
}
