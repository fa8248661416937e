//! Application state modules
//!
//! Grouped state structs owned by `SendformApp`. Each owns its fields and
//! poll methods and reports back through `StateEvent`.

mod form;
mod ui;

pub use form::FormState;
pub use ui::{UiState, View};

/// Events that state poll methods can return.
/// These communicate results back to SendformApp without direct mutation.
#[derive(Debug)]
pub enum StateEvent {
    /// Update the status message
    StatusMessage(String),

    /// Log an error message
    LogError(String),

    /// Log an info message
    LogInfo(String),
}
