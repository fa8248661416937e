//! Run local validation only

use anyhow::Result;
use serde::Serialize;

use super::FieldArgs;
use crate::cli::output::{print_formatted, status_line, OutputFormat};
use crate::config::Config;
use crate::form::{validate, ErrorMap, Field, FormValues};

#[derive(Serialize)]
struct ValidateResult {
    valid: bool,
    errors: ErrorMap,
}

pub fn run(fields: FieldArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let values: FormValues = fields.into();
    let errors = validate(&values, config.ui.locale.messages());

    let result = ValidateResult {
        valid: errors.is_empty(),
        errors,
    };
    print_formatted(&result, format, format_validate_text);

    if !result.valid {
        anyhow::bail!("Validation failed");
    }
    Ok(())
}

fn format_validate_text(result: &ValidateResult) -> String {
    Field::all()
        .iter()
        .map(|field| match result.errors.get((*field).into()) {
            Some(err) => status_line(false, &format!("{}: {}", field.key(), err)),
            None => status_line(true, field.key()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
