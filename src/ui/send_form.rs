//! Contact form view rendering

use eframe::egui::{self, RichText};

use crate::app::SendformApp;
use crate::form::{ErrorKey, Field};
use crate::i18n::Messages;
use crate::state::{FormState, View};
use crate::ui::components::{card, notice, primary_button, secondary_button};
use crate::ui::theme::Theme;

/// What the user asked for this frame
enum FormAction {
    None,
    Submit,
    Back,
}

/// Render the form view
pub fn render_send_form(app: &mut SendformApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();
    let messages = app.messages();

    let Some(form) = app.form.as_mut() else {
        // Entered without navigation; start a fresh form
        app.navigate(View::Send);
        return;
    };

    let action = egui::ScrollArea::vertical()
        .id_salt("send_form_scroll")
        .show(ui, |ui| {
            ui.add_space(24.0);
            card(ui, &theme, |ui| render_form_card(form, ui, &theme, messages))
        })
        .inner;

    match action {
        FormAction::Submit => {
            if let Some(event) = form.submit() {
                app.handle_event(event);
            }
        }
        FormAction::Back => app.navigate(View::Welcome),
        FormAction::None => {}
    }
}

fn render_form_card(
    form: &mut FormState,
    ui: &mut egui::Ui,
    theme: &Theme,
    messages: &'static Messages,
) -> FormAction {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(messages.form_title)
                .color(theme.text_primary)
                .size(22.0)
                .strong(),
        );
    });
    ui.add_space(20.0);

    render_field(form, ui, theme, Field::Name, messages.name_label, messages.name_hint, None);
    render_field(
        form,
        ui,
        theme,
        Field::Phone,
        messages.phone_label,
        "+375291234567",
        Some(messages.phone_format),
    );
    render_field(form, ui, theme, Field::Message, messages.message_label, messages.message_hint, None);

    // Notifications
    if let Some(err) = form.controller.error(ErrorKey::Submit) {
        notice(ui, err, theme.error, theme.error_bg);
        ui.add_space(8.0);
    }
    if let Some(msg) = form.controller.success_message() {
        notice(ui, msg, theme.success, theme.success_bg);
        ui.add_space(8.0);
    }

    ui.add_space(8.0);

    let submitting = form.is_submitting();
    let mut action = FormAction::None;

    ui.columns(2, |columns| {
        let label = if submitting { messages.sending } else { messages.send };
        if primary_button(&mut columns[0], theme, label, !submitting) {
            action = FormAction::Submit;
        }
        if secondary_button(&mut columns[1], theme, messages.back) {
            action = FormAction::Back;
        }
    });

    if submitting {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| ui.spinner());
    }

    action
}

/// Render one labelled input with its error line
fn render_field(
    form: &mut FormState,
    ui: &mut egui::Ui,
    theme: &Theme,
    field: Field,
    label: &str,
    hint: &str,
    help: Option<&str>,
) {
    let error = form.controller.error(field.into()).map(str::to_string);

    ui.label(RichText::new(label).color(theme.text_secondary).strong());
    ui.add_space(4.0);

    let mut text = form.controller.values().get(field).to_string();
    let edit = match field {
        Field::Message => egui::TextEdit::multiline(&mut text).desired_rows(4),
        _ => egui::TextEdit::singleline(&mut text),
    }
    .hint_text(hint)
    .desired_width(f32::INFINITY);

    let response = if error.is_some() {
        // Red outline on invalid fields
        ui.scope(|ui| {
            let visuals = &mut ui.visuals_mut().widgets;
            visuals.inactive.bg_stroke = egui::Stroke::new(1.5, theme.error);
            visuals.hovered.bg_stroke = egui::Stroke::new(1.5, theme.error);
            ui.visuals_mut().selection.stroke = egui::Stroke::new(1.5, theme.error);
            ui.add(edit)
        })
        .inner
    } else {
        ui.add(edit)
    };

    if response.changed() {
        form.controller.on_field_change(field, text);
    }

    if let Some(help) = help {
        ui.label(RichText::new(help).color(theme.text_muted).size(11.0));
    }
    if let Some(err) = error {
        ui.label(RichText::new(err).color(theme.error).size(12.0));
    }

    ui.add_space(12.0);
}
