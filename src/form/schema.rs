//! Per-step validation schemas.
//!
//! Each field runs its rules in order and stops at the first failure, so a
//! field reports at most one message while other fields keep being checked.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use validator::ValidateEmail;

use super::errors::FieldErrors;
use super::fields;
use super::phone;
use super::FormState;
use crate::catalog;

static ZIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}(-\d{4})?$").unwrap());

/// Dotted domain ending in an alphabetic TLD of two or more letters
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

/// Email accepted by the contact step: no leading or doubled dots, no IP
/// literals, no single-label domains
fn well_formed_email(value: &str) -> bool {
    value.validate_email()
        && !value.starts_with('.')
        && !value.contains("..")
        && EMAIL_RE.is_match(value)
}

const REQUIRED: &str = "Required";

/// Validated step 1 fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessInfo {
    pub business_name: String,
    pub company_type: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Validated step 2 fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: Option<String>,
}

/// A fully validated registration, ready to be sent to the company service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyRegistration {
    pub business: BusinessInfo,
    pub contact: ContactInfo,
}

enum Rule {
    MinChars(usize, &'static str),
    MaxChars(usize, &'static str),
    OneOf(fn(&str) -> bool, &'static str),
    Matches(&'static Lazy<Regex>, &'static str),
    Email(&'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), &'static str> {
        let ok = match self {
            Rule::MinChars(min, _) => value.chars().count() >= *min,
            Rule::MaxChars(max, _) => value.chars().count() <= *max,
            Rule::OneOf(accepts, _) => accepts(value),
            Rule::Matches(re, _) => re.is_match(value),
            Rule::Email(_) => well_formed_email(value),
        };
        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Rule::MinChars(_, m)
            | Rule::MaxChars(_, m)
            | Rule::OneOf(_, m)
            | Rule::Matches(_, m)
            | Rule::Email(m) => m,
        }
    }
}

/// Collects values and the first error per field
struct Checker<'a> {
    form: &'a FormState,
    errors: FieldErrors,
    /// Set once any field is absent
    missing: bool,
}

impl<'a> Checker<'a> {
    fn new(form: &'a FormState) -> Self {
        Self {
            form,
            errors: FieldErrors::new(),
            missing: false,
        }
    }

    fn required(&mut self, field: &str, rules: &[Rule]) -> String {
        let Some(value) = self.form.get(field) else {
            self.errors.add(field, REQUIRED);
            self.missing = true;
            return String::new();
        };
        for rule in rules {
            if let Err(message) = rule.check(value) {
                self.errors.add(field, message);
                break;
            }
        }
        value.to_string()
    }

    fn optional(&self, field: &str) -> Option<String> {
        self.form.non_empty(field).map(str::to_string)
    }

    fn passed(&self, field: &str) -> bool {
        !self.errors.contains(field)
    }

    fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    fn finish<T>(self, value: T) -> Result<T, FieldErrors> {
        self.errors.into_result(value)
    }
}

fn check_business(form: &FormState) -> Checker<'_> {
    let mut c = Checker::new(form);
    c.required(
        fields::BUSINESS_NAME,
        &[
            Rule::MinChars(3, "Business name must be at least 3 characters"),
            Rule::MaxChars(255, "Business name must be at most 255 characters"),
        ],
    );
    c.required(
        fields::COMPANY_TYPE,
        &[Rule::OneOf(catalog::is_company_type, "Invalid company type")],
    );
    c.required(
        fields::ADDRESS_LINE1,
        &[
            Rule::MinChars(3, "Address line 1 must be at least 3 characters"),
            Rule::MaxChars(255, "Address line 1 must be at most 255 characters"),
        ],
    );
    c.required(
        fields::CITY,
        &[
            Rule::MinChars(2, "City must be at least 2 characters"),
            Rule::MaxChars(100, "City must be at most 100 characters"),
        ],
    );
    c.required(
        fields::STATE,
        &[Rule::OneOf(
            |v| catalog::state_by_abbreviation(v).is_some(),
            "Invalid state",
        )],
    );
    c.required(
        fields::ZIP,
        &[Rule::Matches(
            &ZIP_RE,
            "ZIP code must be valid (e.g., 12345 or 12345-6789)",
        )],
    );
    c
}

fn business_from(form: &FormState) -> BusinessInfo {
    BusinessInfo {
        business_name: form.value(fields::BUSINESS_NAME).to_string(),
        company_type: form.value(fields::COMPANY_TYPE).to_string(),
        address_line1: form.value(fields::ADDRESS_LINE1).to_string(),
        address_line2: form.non_empty(fields::ADDRESS_LINE2).map(str::to_string),
        city: form.value(fields::CITY).to_string(),
        state: form.value(fields::STATE).to_string(),
        zip: form.value(fields::ZIP).to_string(),
    }
}

fn check_contact(form: &FormState) -> Checker<'_> {
    let mut c = Checker::new(form);
    c.required(
        fields::FIRST_NAME,
        &[Rule::MinChars(3, "First name is required")],
    );
    c.required(
        fields::LAST_NAME,
        &[Rule::MinChars(3, "Last name is required")],
    );
    c.required(
        fields::EMAIL,
        &[Rule::Email("Make sure your email is a well formed address")],
    );
    let phone = c.required(fields::PHONE, &[Rule::MinChars(5, "Phone is required")]);
    let country = c.optional(fields::COUNTRY);

    // country-specific format only applies once the phone checks pass and nothing is missing
    if let Some(country) = country {
        if c.passed(fields::PHONE) && !c.missing {
            if let Err(mask) = phone::check_country_format(&phone, &country) {
                c.fail(
                    fields::PHONE,
                    format!("Phone number must match the format: {mask}"),
                );
            }
        }
    }
    c
}

fn contact_from(form: &FormState) -> ContactInfo {
    ContactInfo {
        first_name: form.value(fields::FIRST_NAME).to_string(),
        last_name: form.value(fields::LAST_NAME).to_string(),
        email: form.value(fields::EMAIL).to_string(),
        phone: form.value(fields::PHONE).to_string(),
        country: form.non_empty(fields::COUNTRY).map(str::to_string),
    }
}

/// Validate the business structure step
pub fn validate_business(form: &FormState) -> Result<BusinessInfo, FieldErrors> {
    check_business(form).finish(business_from(form))
}

/// Validate the contact person step
pub fn validate_contact(form: &FormState) -> Result<ContactInfo, FieldErrors> {
    check_contact(form).finish(contact_from(form))
}

/// Validate every field for the final submission
pub fn validate_registration(form: &FormState) -> Result<CompanyRegistration, FieldErrors> {
    let mut errors = check_business(form).errors;
    errors.merge(check_contact(form).errors);
    errors.into_result(CompanyRegistration {
        business: business_from(form),
        contact: contact_from(form),
    })
}
