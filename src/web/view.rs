//! View model for the registration page.
//!
//! Everything the template shows is derived here from the query state, so
//! the template itself only loops and branches.

use serde::Serialize;

use crate::catalog::{self, COMPANY_TYPES, COUNTRIES, STATES};
use crate::form::{fields, redirect, FieldErrors, FormState, Step};
use crate::submission::{international_phone, SubmissionStatus};

pub const PAGE_TITLE: &str = "New Company";

/// Status badge next to the page title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagView {
    pub label: &'static str,
    pub tone: &'static str,
}

/// One entry of the progress indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepperItem {
    pub number: u8,
    pub label: &'static str,
    pub completed: bool,
    pub active: bool,
    pub enabled: bool,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// A text input or select with its current value and error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlView {
    pub name: &'static str,
    pub label: Option<&'static str>,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub required: bool,
    pub max_length: Option<u32>,
    /// Non-empty for selects
    pub options: Vec<OptionView>,
    /// Text of the disabled first option of a select
    pub prompt: &'static str,
    pub half_width: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneView {
    pub value: String,
    pub error: Option<String>,
    pub required: bool,
    pub flag_url: &'static str,
    pub placeholder: &'static str,
    pub countries: Vec<OptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewView {
    pub business_name: String,
    pub company_type: String,
    pub address_lines: Vec<String>,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub edit_business_href: Option<String>,
    pub edit_contact_href: Option<String>,
}

/// Everything rendered on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub title: &'static str,
    pub tag: Option<TagView>,
    pub step: u8,
    pub stepper: Vec<StepperItem>,
    pub show_business: bool,
    pub show_contact: bool,
    pub show_review: bool,
    pub business_controls: Vec<ControlView>,
    pub name_controls: Vec<ControlView>,
    pub email: ControlView,
    pub phone: PhoneView,
    pub review: ReviewView,
    pub succeeded: bool,
    pub failed: bool,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
    pub submit_label: &'static str,
}

fn header_tag(step: Step, status: Option<SubmissionStatus>) -> Option<TagView> {
    match status {
        Some(SubmissionStatus::Success) => Some(TagView {
            label: "success",
            tone: "success",
        }),
        Some(SubmissionStatus::Error) => Some(TagView {
            label: "error",
            tone: "error",
        }),
        None => match step {
            Step::Business => None,
            Step::Contact | Step::Review => Some(TagView {
                label: "In Progress",
                tone: "progress",
            }),
        },
    }
}

/// Progress indicator entries.
///
/// Earlier steps are completed and linkable. Once the registration has been
/// accepted every step is completed and navigation is disabled.
pub fn stepper(state: &FormState, current: Step, navigation_disabled: bool) -> Vec<StepperItem> {
    let last = Step::Review;
    Step::all()
        .iter()
        .map(|&step| {
            let completed = step < current || (navigation_disabled && step == last);
            let active = step == current;
            let enabled = !navigation_disabled && (completed || active);
            StepperItem {
                number: step.number(),
                label: step.label(),
                completed,
                active,
                enabled,
                href: enabled.then(|| redirect::step_link(state, step)),
            }
        })
        .collect()
}

struct ControlBuilder<'a> {
    state: &'a FormState,
    errors: &'a FieldErrors,
    step: Step,
}

impl ControlBuilder<'_> {
    fn text(
        &self,
        section: Step,
        name: &'static str,
        label: Option<&'static str>,
        placeholder: &'static str,
    ) -> ControlView {
        ControlView {
            name,
            label,
            input_type: "text",
            placeholder,
            value: self.state.value(name).to_string(),
            error: self.errors.get(name).map(str::to_string),
            required: self.step == section,
            max_length: None,
            options: Vec::new(),
            prompt: "",
            half_width: false,
        }
    }

    fn select(
        &self,
        section: Step,
        name: &'static str,
        label: Option<&'static str>,
        prompt: &'static str,
        choices: impl Iterator<Item = (&'static str, &'static str)>,
    ) -> ControlView {
        let current = self.state.value(name);
        let options = choices
            .map(|(value, label)| OptionView {
                value: value.to_string(),
                label: label.to_string(),
                selected: value == current,
            })
            .collect();
        ControlView {
            options,
            prompt,
            ..self.text(section, name, label, "")
        }
    }
}

fn max_length(mut control: ControlView, max: u32) -> ControlView {
    control.max_length = Some(max);
    control
}

fn half_width(mut control: ControlView) -> ControlView {
    control.half_width = true;
    control
}

fn address_lines(state: &FormState) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(line1) = state.non_empty(fields::ADDRESS_LINE1) {
        lines.push(line1.to_string());
    }
    if let Some(line2) = state.non_empty(fields::ADDRESS_LINE2) {
        lines.push(line2.to_string());
    }

    let city = state.value(fields::CITY);
    let us_state = state.value(fields::STATE);
    let zip = state.value(fields::ZIP);
    if !(city.is_empty() && us_state.is_empty() && zip.is_empty()) {
        let separator = if city.is_empty() { "" } else { ", " };
        lines.push(format!("{city}{separator}{us_state} {zip}").trim().to_string());
    }
    lines
}

impl PageView {
    pub fn from_state(state: &FormState) -> Self {
        let step = state.step();
        let status = state
            .get(fields::TYPE)
            .and_then(SubmissionStatus::from_param);
        let succeeded = status == Some(SubmissionStatus::Success);
        let failed = status == Some(SubmissionStatus::Error);
        let errors = state.field_errors();
        let controls = ControlBuilder {
            state,
            errors: &errors,
            step,
        };

        let business_controls = vec![
            max_length(
                controls.text(
                    Step::Business,
                    fields::BUSINESS_NAME,
                    Some("Business name"),
                    "Registered business name",
                ),
                255,
            ),
            controls.select(
                Step::Business,
                fields::COMPANY_TYPE,
                Some("Type"),
                "Select an option",
                COMPANY_TYPES.iter().map(|t| (*t, *t)),
            ),
            max_length(
                controls.text(
                    Step::Business,
                    fields::ADDRESS_LINE1,
                    Some("Address"),
                    "Address line 1",
                ),
                255,
            ),
            {
                let mut line2 = max_length(
                    controls.text(
                        Step::Business,
                        fields::ADDRESS_LINE2,
                        None,
                        "Address line 2 (optional)",
                    ),
                    255,
                );
                line2.required = false;
                line2
            },
            controls.text(Step::Business, fields::CITY, None, "City"),
            half_width(controls.select(
                Step::Business,
                fields::STATE,
                None,
                "State",
                STATES.iter().map(|s| (s.abbreviation, s.name)),
            )),
            half_width(max_length(
                controls.text(Step::Business, fields::ZIP, None, "Zip"),
                10,
            )),
        ];

        let name_controls = vec![
            controls.text(Step::Contact, fields::FIRST_NAME, Some("Name"), "First Name"),
            controls.text(Step::Contact, fields::LAST_NAME, None, "Last Name"),
        ];

        let email = ControlView {
            input_type: "email",
            ..controls.text(Step::Contact, fields::EMAIL, Some("Email"), "Email")
        };

        let selected_country = state
            .non_empty(fields::COUNTRY)
            .and_then(catalog::country_by_name)
            .unwrap_or_else(catalog::default_country);
        let phone = PhoneView {
            value: state.value(fields::PHONE).to_string(),
            error: errors.get(fields::PHONE).map(str::to_string),
            required: step == Step::Contact,
            flag_url: selected_country.flag_url,
            placeholder: selected_country.placeholder,
            countries: COUNTRIES
                .iter()
                .map(|c| OptionView {
                    value: c.name.to_string(),
                    label: c.phone_code.to_string(),
                    selected: c.name == selected_country.name,
                })
                .collect(),
        };

        let contact_name = format!(
            "{} {}",
            state.value(fields::FIRST_NAME),
            state.value(fields::LAST_NAME)
        )
        .trim()
        .to_string();
        let phone_display = state
            .non_empty(fields::PHONE)
            .map(|p| international_phone(p, state.non_empty(fields::COUNTRY)))
            .unwrap_or_default();

        let review = ReviewView {
            business_name: state.value(fields::BUSINESS_NAME).to_string(),
            company_type: state.value(fields::COMPANY_TYPE).to_string(),
            address_lines: address_lines(state),
            contact_name,
            email: state.value(fields::EMAIL).to_string(),
            phone: phone_display,
            edit_business_href: (!succeeded).then(|| redirect::step_link(state, Step::Business)),
            edit_contact_href: (!succeeded).then(|| redirect::step_link(state, Step::Contact)),
        };

        let message = state.value(fields::MESSAGE).to_string();

        Self {
            title: PAGE_TITLE,
            tag: header_tag(step, status),
            step: step.number(),
            stepper: stepper(state, step, succeeded),
            show_business: step == Step::Business,
            show_contact: step == Step::Contact,
            show_review: step == Step::Review,
            business_controls,
            name_controls,
            email,
            phone,
            review,
            succeeded,
            failed,
            success_message: succeeded.then(|| message.clone()),
            error_message: failed.then_some(message),
            submit_label: if step == Step::Review {
                "Confirm & Submit"
            } else {
                "Continue"
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(pairs: &[(&str, &str)]) -> FormState {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_defaults_to_first_step() {
        let view = PageView::from_state(&FormState::new());
        assert_eq!(view.step, 1);
        assert!(view.show_business && !view.show_contact && !view.show_review);
        assert!(view.tag.is_none());
        assert_eq!(view.submit_label, "Continue");
        assert!(view.business_controls.iter().filter(|c| c.name != "adressLine2").all(|c| c.required));
        assert!(!view.phone.required);
    }

    #[test]
    fn test_header_tag() {
        assert_eq!(header_tag(Step::Business, None), None);
        assert_eq!(header_tag(Step::Contact, None).unwrap().label, "In Progress");
        assert_eq!(
            header_tag(Step::Review, Some(SubmissionStatus::Success))
                .unwrap()
                .label,
            "success"
        );
        assert_eq!(
            header_tag(Step::Review, Some(SubmissionStatus::Error))
                .unwrap()
                .label,
            "error"
        );
    }

    #[test]
    fn test_stepper_allows_backward_navigation_only() {
        let s = state(&[("step", "2"), ("city", "Austin")]);
        let items = stepper(&s, Step::Contact, false);

        assert!(items[0].completed && items[0].enabled);
        assert_eq!(items[0].href.as_deref(), Some("?step=1&city=Austin"));
        assert!(items[1].active && items[1].enabled && !items[1].completed);
        assert!(!items[2].enabled);
        assert!(items[2].href.is_none());
    }

    #[test]
    fn test_stepper_after_success_is_locked() {
        let s = state(&[("step", "3"), ("type", "success")]);
        let items = stepper(&s, Step::Review, true);
        assert!(items.iter().all(|i| i.completed && !i.enabled && i.href.is_none()));
    }

    #[test]
    fn test_values_and_errors_are_populated() {
        let errors: FieldErrors = [("zip", "bad zip"), ("companyType", "Invalid company type")]
            .into_iter()
            .collect();
        let s = state(&[("zip", "1"), ("companyType", "Corporation")])
            .with("error", errors.encode());
        let view = PageView::from_state(&s);

        let zip = view.business_controls.iter().find(|c| c.name == "zip").unwrap();
        assert_eq!(zip.value, "1");
        assert_eq!(zip.error.as_deref(), Some("bad zip"));

        let company_type = view
            .business_controls
            .iter()
            .find(|c| c.name == "companyType")
            .unwrap();
        assert_eq!(company_type.error.as_deref(), Some("Invalid company type"));
        assert!(company_type
            .options
            .iter()
            .any(|o| o.value == "Corporation" && o.selected));
    }

    #[test]
    fn test_malformed_error_param_renders_without_errors() {
        let view = PageView::from_state(&state(&[("error", "{oops")]));
        assert!(view.business_controls.iter().all(|c| c.error.is_none()));
    }

    #[test]
    fn test_phone_country_selection() {
        let view = PageView::from_state(&state(&[("country", "Brazil")]));
        assert_eq!(view.phone.placeholder, "(11) 91234-5678");
        assert!(view
            .phone
            .countries
            .iter()
            .any(|c| c.value == "Brazil" && c.selected && c.label == "+55"));

        let view = PageView::from_state(&FormState::new());
        assert_eq!(view.phone.placeholder, "(555) 000-0000");
    }

    #[test]
    fn test_review_summary() {
        let s = state(&[
            ("step", "3"),
            ("businessName", "Acme LLC"),
            ("adressLine1", "100 Main Street"),
            ("adressLine2", "Suite 5"),
            ("city", "Austin"),
            ("state", "TX"),
            ("zip", "78701"),
            ("firstName", "Jane"),
            ("lastName", "Doe"),
            ("phone", "(555) 123-4567"),
            ("country", "United States"),
        ]);
        let view = PageView::from_state(&s);
        assert!(view.show_review);
        assert_eq!(view.submit_label, "Confirm & Submit");
        assert_eq!(
            view.review.address_lines,
            vec!["100 Main Street", "Suite 5", "Austin, TX 78701"]
        );
        assert_eq!(view.review.contact_name, "Jane Doe");
        assert_eq!(view.review.phone, "+1 (555) 123-4567");
        assert!(view
            .review
            .edit_business_href
            .as_deref()
            .unwrap()
            .contains("step=1"));
    }

    #[test]
    fn test_outcome_messages() {
        let view = PageView::from_state(&state(&[
            ("step", "3"),
            ("type", "success"),
            ("message", "Created"),
        ]));
        assert_eq!(view.success_message.as_deref(), Some("Created"));
        assert!(view.error_message.is_none());
        assert!(view.review.edit_business_href.is_none());

        let view = PageView::from_state(&state(&[
            ("step", "3"),
            ("type", "error"),
            ("message", "Service unavailable"),
        ]));
        assert_eq!(view.error_message.as_deref(), Some("Service unavailable"));
        assert!(view.success_message.is_none());
        assert!(view.review.edit_business_href.is_some());
    }
}
