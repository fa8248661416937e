//! Submission state machine for the contact form.
//!
//! The controller is synchronous: `on_submit` hands back a `PendingSubmission`
//! for the caller to send, and `on_response` applies the result. Each attempt
//! carries a `SubmissionTicket`; results for any other ticket are discarded.

use super::{validate, ErrorKey, ErrorMap, Field, FormValues};
use crate::client::{ServerResponse, SubmissionClient, TransportError};
use crate::i18n::Messages;

/// Identifies one in-flight submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionTicket(u64);

/// Where the form is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// Nothing submitted, or feedback cleared by an edit
    #[default]
    Idle,
    /// A request is in flight
    Pending(SubmissionTicket),
    /// Last attempt was accepted by the server
    Succeeded(String),
    /// Last attempt failed locally or remotely; see the error map
    Failed,
}

/// Values snapshot to send for a ticket
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub values: FormValues,
}

/// Result of asking the controller to submit
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Local validation passed; send these values
    Ready(PendingSubmission),
    /// Local validation failed; errors are stored, nothing to send
    Invalid,
    /// Another submission is still in flight
    Busy,
}

/// Owns form values, errors and submission status
pub struct FormController {
    messages: &'static Messages,
    values: FormValues,
    errors: ErrorMap,
    status: SubmissionStatus,
    next_ticket: u64,
}

impl FormController {
    pub fn new(messages: &'static Messages) -> Self {
        Self {
            messages,
            values: FormValues::default(),
            errors: ErrorMap::new(),
            status: SubmissionStatus::Idle,
            next_ticket: 1,
        }
    }

    /// Start from pre-filled values
    pub fn with_values(messages: &'static Messages, values: FormValues) -> Self {
        Self {
            values,
            ..Self::new(messages)
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, key: ErrorKey) -> Option<&str> {
        self.errors.get(key)
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, SubmissionStatus::Pending(_))
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Succeeded(msg) => Some(msg),
            _ => None,
        }
    }

    /// Update one field. Any edit clears errors and the success message,
    /// whether or not it fixes anything.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.clear_feedback();
    }

    /// Clear errors and success message without touching an in-flight request
    pub fn clear_feedback(&mut self) {
        self.errors.clear();
        if !self.is_pending() {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Validate and, if valid, move to `Pending` with a fresh ticket
    pub fn on_submit(&mut self) -> SubmitOutcome {
        if self.is_pending() {
            tracing::debug!("Submit ignored, a submission is already in flight");
            return SubmitOutcome::Busy;
        }

        let errors = validate(&self.values, self.messages);
        if !errors.is_empty() {
            tracing::debug!(
                "Local validation failed for: {}",
                errors.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>().join(", ")
            );
            self.errors = errors;
            self.status = SubmissionStatus::Failed;
            return SubmitOutcome::Invalid;
        }

        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.errors.clear();
        self.status = SubmissionStatus::Pending(ticket);

        SubmitOutcome::Ready(PendingSubmission {
            ticket,
            values: self.values.clone(),
        })
    }

    /// Apply the result for `ticket`. Returns false if the ticket is stale.
    pub fn on_response(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<ServerResponse, TransportError>,
    ) -> bool {
        if self.status != SubmissionStatus::Pending(ticket) {
            tracing::warn!("Discarding stale response for ticket {:?}", ticket);
            return false;
        }

        match result {
            Err(e) => {
                tracing::error!("Submission failed: {}", e);
                let message = self.messages.connection_failed.to_string();
                self.fail_with(ErrorMap::from_iter([(ErrorKey::Submit, message)]));
            }
            Ok(response) if !response.is_success() => {
                tracing::warn!("Server rejected submission with status {}", response.status);
                let errors = self.server_errors(response);
                self.fail_with(errors);
            }
            Ok(_) => {
                tracing::info!("Submission accepted");
                self.values = FormValues::default();
                self.errors.clear();
                self.status = SubmissionStatus::Succeeded(self.messages.sent.to_string());
            }
        }

        true
    }

    /// Run a full submit cycle against `client`
    pub async fn submit_with(&mut self, client: &SubmissionClient) -> SubmitOutcome {
        let outcome = self.on_submit();
        if let SubmitOutcome::Ready(pending) = &outcome {
            let result = client.submit(&pending.values).await;
            self.on_response(pending.ticket, result);
        }
        outcome
    }

    fn fail_with(&mut self, errors: ErrorMap) {
        self.errors = errors;
        self.status = SubmissionStatus::Failed;
    }

    /// Map a rejected response to displayable errors
    fn server_errors(&self, response: ServerResponse) -> ErrorMap {
        let body = response.body;

        match body.errors {
            Some(fields) => {
                let mut errors = ErrorMap::new();
                for (key, message) in fields {
                    match ErrorKey::parse(&key) {
                        Some(k) => errors.insert(k, message),
                        None => tracing::warn!("Dropping server error for unknown field '{}'", key),
                    }
                }
                // The generic prompt always wins over a server-sent `submit` entry
                errors.insert(ErrorKey::Submit, self.messages.fix_and_retry);
                errors
            }
            None => {
                let message = body
                    .error
                    .unwrap_or_else(|| self.messages.server_error.to_string());
                ErrorMap::from_iter([(ErrorKey::Submit, message)])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::client::test_server::{closed_port_url, serve_once};
    use crate::client::ResponseBody;
    use crate::i18n::EN;

    fn valid_controller() -> FormController {
        FormController::with_values(&EN, FormValues::new("Al", "+375291234567", "Hi there"))
    }

    fn begin(controller: &mut FormController) -> SubmissionTicket {
        match controller.on_submit() {
            SubmitOutcome::Ready(pending) => pending.ticket,
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    fn response(status: u16, body: ResponseBody) -> Result<ServerResponse, TransportError> {
        Ok(ServerResponse { status, body })
    }

    #[test]
    fn test_valid_submit_goes_pending() {
        let mut controller = valid_controller();
        let ticket = begin(&mut controller);

        assert_eq!(controller.status(), &SubmissionStatus::Pending(ticket));
        assert!(controller.errors().is_empty());
    }

    #[test]
    fn test_invalid_submit_stores_errors() {
        let mut controller =
            FormController::with_values(&EN, FormValues::new("A", "12345", ""));

        assert!(matches!(controller.on_submit(), SubmitOutcome::Invalid));
        assert_eq!(controller.status(), &SubmissionStatus::Failed);
        assert_eq!(controller.errors().len(), 3);
        assert!(!controller.is_pending());
    }

    #[test]
    fn test_submit_while_pending_is_busy() {
        let mut controller = valid_controller();
        let ticket = begin(&mut controller);

        assert!(matches!(controller.on_submit(), SubmitOutcome::Busy));
        assert_eq!(controller.status(), &SubmissionStatus::Pending(ticket));
    }

    #[test]
    fn test_success_resets_values() {
        let mut controller = valid_controller();
        let ticket = begin(&mut controller);

        assert!(controller.on_response(ticket, response(201, ResponseBody::default())));
        assert!(controller.values().is_empty());
        assert!(!controller.is_pending());
        assert_eq!(controller.success_message(), Some(EN.sent));
        assert!(controller.errors().is_empty());
    }

    #[test]
    fn test_server_field_errors_are_merged() {
        let mut controller = valid_controller();
        let ticket = begin(&mut controller);

        let mut fields = BTreeMap::new();
        fields.insert("phone".to_string(), "taken".to_string());
        fields.insert("submit".to_string(), "server says no".to_string());
        fields.insert("email".to_string(), "unknown".to_string());
        let body = ResponseBody { errors: Some(fields), error: Some("ignored".to_string()) };

        controller.on_response(ticket, response(400, body));

        let expected = ErrorMap::from_iter([
            (ErrorKey::Phone, "taken".to_string()),
            (ErrorKey::Submit, "fix errors and retry".to_string()),
        ]);
        assert_eq!(controller.errors(), &expected);
        assert_eq!(controller.status(), &SubmissionStatus::Failed);
        // Values are kept for correction
        assert_eq!(controller.values().name, "Al");
    }

    #[test]
    fn test_server_error_message() {
        let mut controller = valid_controller();
        let ticket = begin(&mut controller);
        let body = ResponseBody { errors: None, error: Some("rate limited".to_string()) };

        controller.on_response(ticket, response(429, body));
        assert_eq!(controller.error(ErrorKey::Submit), Some("rate limited"));
        assert_eq!(controller.errors().len(), 1);
    }

    #[test]
    fn test_server_error_default_message() {
        let mut controller = valid_controller();
        let ticket = begin(&mut controller);

        controller.on_response(ticket, response(500, ResponseBody::default()));
        assert_eq!(controller.error(ErrorKey::Submit), Some("server error"));
        assert!(!controller.is_pending());
    }

    #[test]
    fn test_transport_failure() {
        let mut controller = valid_controller();
        let ticket = begin(&mut controller);

        controller.on_response(ticket, Err(TransportError::InvalidUrl("x".to_string())));
        assert_eq!(
            controller.errors(),
            &ErrorMap::from_iter([(ErrorKey::Submit, "could not reach server".to_string())])
        );
        assert!(!controller.is_pending());
    }

    #[test]
    fn test_edit_clears_feedback() {
        let mut controller =
            FormController::with_values(&EN, FormValues::new("A", "12345", ""));
        controller.on_submit();
        assert!(!controller.errors().is_empty());

        // The edit does not fix the phone, errors are cleared anyway
        controller.on_field_change(Field::Name, "Alice");
        assert!(controller.errors().is_empty());
        assert_eq!(controller.status(), &SubmissionStatus::Idle);
        assert_eq!(controller.values().name, "Alice");
    }

    #[test]
    fn test_edit_clears_success_message() {
        let mut controller = valid_controller();
        let ticket = begin(&mut controller);
        controller.on_response(ticket, response(200, ResponseBody::default()));
        assert!(controller.success_message().is_some());

        controller.on_field_change(Field::Message, "again");
        assert_eq!(controller.success_message(), None);
    }

    #[test]
    fn test_edit_while_pending_keeps_ticket() {
        let mut controller = valid_controller();
        let ticket = begin(&mut controller);

        controller.on_field_change(Field::Message, "changed");
        assert_eq!(controller.status(), &SubmissionStatus::Pending(ticket));
        assert!(controller.on_response(ticket, response(200, ResponseBody::default())));
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut controller = valid_controller();
        let first = begin(&mut controller);
        controller.on_response(first, response(500, ResponseBody::default()));

        let second = begin(&mut controller);
        assert_ne!(first, second);

        // A late duplicate for the first attempt must not touch the second
        assert!(!controller.on_response(first, response(200, ResponseBody::default())));
        assert_eq!(controller.status(), &SubmissionStatus::Pending(second));
        assert_eq!(controller.values().name, "Al");
    }

    #[tokio::test]
    async fn test_submit_with_round_trip() {
        let (base, server) = serve_once(400, r#"{"errors":{"phone":"taken"}}"#).await;
        let client = SubmissionClient::new(&base).unwrap();
        let mut controller = valid_controller();

        let outcome = controller.submit_with(&client).await;
        assert!(matches!(outcome, SubmitOutcome::Ready(_)));
        assert_eq!(controller.error(ErrorKey::Phone), Some("taken"));
        assert_eq!(controller.error(ErrorKey::Submit), Some("fix errors and retry"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_submit_with_unreachable_server() {
        let client = SubmissionClient::new(&closed_port_url().await).unwrap();
        let mut controller = valid_controller();

        controller.submit_with(&client).await;
        assert_eq!(controller.error(ErrorKey::Submit), Some("could not reach server"));
        assert!(!controller.is_pending());
    }

    #[tokio::test]
    async fn test_submit_with_invalid_values_makes_no_request() {
        // Nothing listens here; an attempted request would surface as a submit error
        let client = SubmissionClient::new(&closed_port_url().await).unwrap();
        let mut controller = FormController::new(&EN);

        let outcome = controller.submit_with(&client).await;
        assert!(matches!(outcome, SubmitOutcome::Invalid));
        assert!(!controller.errors().contains(ErrorKey::Submit));
    }
}
