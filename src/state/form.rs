//! Contact form state: controller plus the in-flight request task

use eframe::egui;
use tokio::task::JoinHandle;

use crate::client::{ServerResponse, SubmissionClient, TransportError};
use crate::form::{FormController, SubmissionStatus, SubmissionTicket, SubmitOutcome};
use crate::i18n::Messages;
use crate::state::StateEvent;
use crate::task::{poll_task, PollResult};

type SubmitResult = (SubmissionTicket, Result<ServerResponse, TransportError>);

/// Form view state. Dropped when the user leaves the form.
pub struct FormState {
    /// Strings for status bar messages
    messages: &'static Messages,
    /// Values, errors and submission status
    pub controller: FormController,
    /// Client for the configured endpoint; `None` if the base URL is unusable
    client: Option<SubmissionClient>,
    /// Async task for the in-flight request
    task: Option<JoinHandle<SubmitResult>>,
}

impl FormState {
    pub fn new(messages: &'static Messages, base_url: &str) -> Self {
        let client = match SubmissionClient::new(base_url) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!("Cannot create submission client: {}", e);
                None
            }
        };

        Self {
            messages,
            controller: FormController::new(messages),
            client,
            task: None,
        }
    }

    /// Check if a request is currently in flight
    pub fn is_submitting(&self) -> bool {
        self.controller.is_pending()
    }

    /// Validate and, if valid, start the request
    pub fn submit(&mut self) -> Option<StateEvent> {
        let pending = match self.controller.on_submit() {
            SubmitOutcome::Ready(pending) => pending,
            SubmitOutcome::Invalid => {
                return Some(StateEvent::StatusMessage(
                    self.messages.status_fix_fields.to_string(),
                ));
            }
            SubmitOutcome::Busy => return None,
        };

        let Some(client) = self.client.clone() else {
            self.controller.on_response(
                pending.ticket,
                Err(TransportError::InvalidUrl("no usable API base URL".to_string())),
            );
            return Some(StateEvent::LogError(
                "Submission skipped: no usable API base URL".to_string(),
            ));
        };

        let endpoint = client.endpoint().to_string();
        let ticket = pending.ticket;
        let values = pending.values;

        tracing::info!("Submitting message to {}", endpoint);

        self.task = Some(tokio::spawn(async move {
            let result = client.submit(&values).await;
            (ticket, result)
        }));

        Some(StateEvent::StatusMessage(format!(
            "{} {}...",
            self.messages.status_sending_to, endpoint
        )))
    }

    /// Poll the request task for completion
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        let mut events = Vec::new();

        match poll_task(&mut self.task) {
            PollResult::Complete(Ok((ticket, result))) => {
                let accepted = matches!(&result, Ok(r) if r.is_success());
                if self.controller.on_response(ticket, result) {
                    if accepted {
                        events.push(StateEvent::StatusMessage(
                            self.messages.status_sent.to_string(),
                        ));
                        events.push(StateEvent::LogInfo("Message accepted by server".to_string()));
                    } else {
                        events.push(StateEvent::StatusMessage(
                            self.messages.status_not_sent.to_string(),
                        ));
                    }
                }
            }
            PollResult::Complete(Err(e)) => {
                let msg = format!("Submit task panicked: {}", e);
                events.push(StateEvent::LogError(msg.clone()));
                if let SubmissionStatus::Pending(ticket) = *self.controller.status() {
                    self.controller
                        .on_response(ticket, Err(TransportError::Task(e.to_string())));
                }
                events.push(StateEvent::StatusMessage(msg));
            }
            PollResult::Pending => ctx.request_repaint(),
            PollResult::NoTask => {}
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_server::{closed_port_url, serve_once};
    use crate::form::{ErrorKey, Field};
    use crate::i18n::{EN, RU};

    fn fill(state: &mut FormState) {
        state.controller.on_field_change(Field::Name, "Al");
        state.controller.on_field_change(Field::Phone, "+375291234567");
        state.controller.on_field_change(Field::Message, "Hi there");
    }

    async fn poll_until_done(state: &mut FormState, ctx: &egui::Context) -> Vec<StateEvent> {
        loop {
            let events = state.poll(ctx);
            if !state.is_submitting() {
                return events;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
    }

    #[tokio::test]
    async fn test_submit_and_poll_success() {
        let (base, server) = serve_once(200, "{}").await;
        let mut state = FormState::new(&EN, &base);
        let ctx = egui::Context::default();
        fill(&mut state);

        assert!(matches!(state.submit(), Some(StateEvent::StatusMessage(_))));
        assert!(state.is_submitting());
        // Second click while in flight does nothing
        assert!(state.submit().is_none());

        let events = poll_until_done(&mut state, &ctx).await;
        assert!(events.iter().any(|e| matches!(e, StateEvent::LogInfo(_))));
        assert!(state.controller.values().is_empty());
        assert_eq!(state.controller.success_message(), Some(EN.sent));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_form_spawns_nothing() {
        let mut state = FormState::new(&EN, "http://127.0.0.1:9");
        let ctx = egui::Context::default();

        state.submit();
        assert!(!state.is_submitting());
        assert!(matches!(state.poll(&ctx).as_slice(), []));
        assert_eq!(state.controller.errors().len(), 3);
    }

    #[tokio::test]
    async fn test_unusable_base_url_reports_connection_error() {
        let mut state = FormState::new(&EN, "not a url");
        fill(&mut state);

        assert!(matches!(state.submit(), Some(StateEvent::LogError(_))));
        assert!(!state.is_submitting());
        assert_eq!(
            state.controller.error(ErrorKey::Submit),
            Some("could not reach server")
        );
    }

    #[test]
    fn test_status_messages_follow_locale() {
        let mut state = FormState::new(&RU, "http://127.0.0.1:9");

        match state.submit() {
            Some(StateEvent::StatusMessage(msg)) => assert_eq!(msg, RU.status_fix_fields),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_repeated_submissions_never_stay_pending() {
        let base = closed_port_url().await;
        let mut state = FormState::new(&EN, &base);
        let ctx = egui::Context::default();

        // The UI thread never awaits between frames; poll the same way
        for attempt in 0..200 {
            fill(&mut state);
            state.submit();
            assert!(state.is_submitting(), "attempt {}: not submitted", attempt);

            while !state.task.as_ref().is_some_and(|h| h.is_finished()) {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            let events = state.poll(&ctx);

            assert!(!state.is_submitting(), "attempt {}: stuck pending", attempt);
            assert!(state.task.is_none());
            assert_eq!(
                state.controller.error(ErrorKey::Submit),
                Some("could not reach server")
            );
            assert!(events.iter().any(
                |e| matches!(e, StateEvent::StatusMessage(m) if m == EN.status_not_sent)
            ));
        }
    }
}
