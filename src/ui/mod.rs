//! UI modules for Sendform
//!
//! This module contains the UI rendering code, organized by view.

pub mod components;
mod send_form;
pub mod theme;
mod welcome;

pub use send_form::render_send_form;
pub use welcome::render_welcome;
