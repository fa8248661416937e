use eframe::egui::{self, RichText};

use crate::config::Config;
use crate::i18n::Messages;
use crate::state::{FormState, StateEvent, UiState, View};
use crate::ui::theme::Theme;

/// Main application state
pub struct SendformApp {
    /// Application configuration, fixed for the lifetime of the app
    pub config: Config,
    /// UI state (theme, active view)
    pub ui: UiState,
    /// Form view state; only exists while the form view is shown
    pub form: Option<FormState>,
    /// Status message for the status bar
    pub status_message: String,
}

impl SendformApp {
    /// Create a new application instance from the startup configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let theme = Theme::for_mode(config.ui.dark_theme);
        let status_message = format!("Endpoint: {}", config.api.base_url);

        Self {
            config,
            ui: UiState::new(theme),
            form: None,
            status_message,
        }
    }

    /// Strings for the configured locale
    pub fn messages(&self) -> &'static Messages {
        self.config.ui.locale.messages()
    }

    /// Switch views. Entering the form always starts from an empty form;
    /// leaving it drops the form state and any in-flight request handle.
    pub fn navigate(&mut self, view: View) {
        tracing::debug!("Navigating to {}", view.route());

        match view {
            View::Send => {
                self.form = Some(FormState::new(self.messages(), &self.config.api.base_url));
            }
            View::Welcome => {
                if self.form.as_ref().is_some_and(|f| f.is_submitting()) {
                    tracing::info!("Leaving form with a submission in flight; its result will be ignored");
                }
                self.form = None;
            }
        }
        self.ui.active_view = view;
    }

    /// Apply an event reported by a state poll method
    pub fn handle_event(&mut self, event: StateEvent) {
        match event {
            StateEvent::StatusMessage(msg) => self.status_message = msg,
            StateEvent::LogError(msg) => tracing::error!("{}", msg),
            StateEvent::LogInfo(msg) => tracing::info!("{}", msg),
        }
    }
}

impl eframe::App for SendformApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ui.theme_dirty {
            self.ui.current_theme.apply(ctx);
            self.ui.theme_dirty = false;
        }

        // Poll async tasks
        let events = match self.form.as_mut() {
            Some(form) => form.poll(ctx),
            None => Vec::new(),
        };
        for event in events {
            self.handle_event(event);
        }

        let theme = self.ui.current_theme.clone();

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&self.status_message).color(theme.text_muted).size(12.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(self.ui.active_view.route())
                            .color(theme.text_muted)
                            .size(12.0),
                    );
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.ui.active_view {
            View::Welcome => crate::ui::render_welcome(self, ui),
            View::Send => crate::ui::render_send_form(self, ui),
        });
    }
}
