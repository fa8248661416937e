//! Submit a message from the command line

use anyhow::Result;
use serde::Serialize;

use super::FieldArgs;
use crate::cli::output::{print_formatted, print_success, OutputFormat};
use crate::client::SubmissionClient;
use crate::config::Config;
use crate::form::{ErrorMap, FormController};

/// JSON-serializable submission result
#[derive(Serialize)]
struct SendResult {
    sent: bool,
    endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "ErrorMap::is_empty")]
    errors: ErrorMap,
}

pub async fn run(
    fields: FieldArgs,
    api_url: Option<String>,
    mut config: Config,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    config.apply_api_url_override(api_url);

    let client = SubmissionClient::new(&config.api.base_url)?;
    let mut controller = FormController::with_values(config.ui.locale.messages(), fields.into());

    if format == OutputFormat::Text {
        print_success(&format!("Sending to {}...", client.endpoint()), quiet);
    }

    controller.submit_with(&client).await;
    let result = build_result(&controller, client.endpoint());

    match (format, result.sent) {
        (OutputFormat::Text, true) => {
            print_success(result.message.as_deref().unwrap_or_default(), quiet);
        }
        _ => print_formatted(&result, format, format_send_text),
    }

    if !result.sent {
        anyhow::bail!("Message was not sent");
    }
    Ok(())
}

fn build_result(controller: &FormController, endpoint: &str) -> SendResult {
    SendResult {
        sent: controller.success_message().is_some(),
        endpoint: endpoint.to_string(),
        message: controller.success_message().map(str::to_string),
        errors: controller.errors().clone(),
    }
}

fn format_send_text(result: &SendResult) -> String {
    match &result.message {
        Some(msg) => msg.clone(),
        None => result.errors.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ResponseBody, ServerResponse};
    use crate::form::{FormValues, SubmitOutcome};
    use crate::i18n::EN;

    fn finished(status: u16) -> FormController {
        let mut controller =
            FormController::with_values(&EN, FormValues::new("Al", "80291234567", "Hi there"));
        let SubmitOutcome::Ready(pending) = controller.on_submit() else {
            panic!("values should pass validation");
        };
        controller.on_response(
            pending.ticket,
            Ok(ServerResponse { status, body: ResponseBody::default() }),
        );
        controller
    }

    #[test]
    fn test_result_for_success() {
        let result = build_result(&finished(201), "http://localhost:4000/api/messages");
        assert!(result.sent);
        assert_eq!(format_send_text(&result), EN.sent);

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_result_for_failure() {
        let result = build_result(&finished(500), "http://localhost:4000/api/messages");
        assert!(!result.sent);
        assert_eq!(format_send_text(&result), "submit: server error");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["errors"]["submit"], "server error");
        assert!(json.get("message").is_none());
    }
}
