//! One form submission, from posted fields to redirect target.

use super::redirect;
use super::schema;
use super::{FieldErrors, FormState, Step};
use crate::submission::{self, CompanyClient};

fn log_rejection(step: Step, errors: &FieldErrors) {
    let fields: Vec<&str> = errors.fields().collect();
    tracing::info!(step = %step, fields = ?fields, "validation failed");
}

/// Validate the posted step and decide where the browser goes next.
///
/// Only a valid final step reaches the company service.
pub async fn process(form: FormState, client: &dyn CompanyClient) -> String {
    let step = form.step();
    tracing::debug!(step = %step, field_count = form.len(), "processing form submission");

    match step {
        Step::Business => match schema::validate_business(&form) {
            Ok(_) => redirect::advanced(form, step),
            Err(errors) => {
                log_rejection(step, &errors);
                redirect::rejected(form, step, &errors)
            }
        },
        Step::Contact => match schema::validate_contact(&form) {
            Ok(_) => redirect::advanced(form, step),
            Err(errors) => {
                log_rejection(step, &errors);
                redirect::rejected(form, step, &errors)
            }
        },
        Step::Review => match schema::validate_registration(&form) {
            Ok(registration) => {
                let outcome = submission::submit(client, &registration).await;
                redirect::submitted(form, &outcome)
            }
            Err(errors) => {
                log_rejection(step, &errors);
                redirect::rejected(form, step, &errors)
            }
        },
    }
}
