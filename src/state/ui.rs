//! UI-related application state

use egui_commonmark::CommonMarkCache;

use crate::ui::theme::Theme;

/// Navigation routes of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// `/`: greeting with a button leading to the form
    #[default]
    Welcome,
    /// `/send`: the contact form
    Send,
}

impl View {
    pub fn route(&self) -> &'static str {
        match self {
            View::Welcome => "/",
            View::Send => "/send",
        }
    }
}

/// UI-related state
pub struct UiState {
    /// Cache for markdown rendering
    pub markdown_cache: CommonMarkCache,
    /// Current theme
    pub current_theme: Theme,
    /// Currently shown view
    pub active_view: View,
    /// Whether theme needs to be applied
    pub theme_dirty: bool,
}

impl UiState {
    /// Create a new UiState with the given theme
    pub fn new(theme: Theme) -> Self {
        Self {
            markdown_cache: CommonMarkCache::default(),
            current_theme: theme,
            active_view: View::default(),
            theme_dirty: true, // Apply theme on first frame
        }
    }
}
