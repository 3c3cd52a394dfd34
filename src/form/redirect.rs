//! Redirect targets for form submissions.
//!
//! Every submission ends in a redirect back to the form page. The target's
//! query string carries all submitted values plus whatever the next render
//! needs: the step, field errors, or the remote submission outcome.

use super::errors::FieldErrors;
use super::fields;
use super::{FormState, Step};
use crate::submission::SubmissionOutcome;

/// Validation failed: stay on `step` and report the errors
pub fn rejected(form: FormState, step: Step, errors: &FieldErrors) -> String {
    form.with_step(step)
        .with(fields::ERROR, errors.encode())
        .location()
}

/// Validation passed on an intermediate step: move to the next one
pub fn advanced(form: FormState, from: Step) -> String {
    form.with_step(from.next()).location()
}

/// Final submission finished: stay on the review step and show the outcome
pub fn submitted(form: FormState, outcome: &SubmissionOutcome) -> String {
    form.with_step(Step::Review)
        .with(fields::TYPE, outcome.status.as_str())
        .with(fields::MESSAGE, outcome.message.as_str())
        .location()
}

/// Same state, different step. Used for backward navigation links.
pub fn step_link(form: &FormState, step: Step) -> String {
    format!("?{}", form.clone().with_step(step).to_query_string())
}
