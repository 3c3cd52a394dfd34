//! Static reference data for the registration form.
//!
//! Company types, US states and the countries offered by the phone input.
//! Everything here is read-only and shared by validation, rendering and the
//! outbound request builder.

mod countries;
mod states;

pub use countries::{Country, COUNTRIES};
pub use states::{UsState, STATES};

/// Country used when a submission does not name one
pub const DEFAULT_COUNTRY: &str = "United States";

/// Dialing code used when the country is unknown
pub const DEFAULT_PHONE_CODE: &str = "+1";

/// Company types accepted in the `companyType` field, in display order
pub const COMPANY_TYPES: &[&str] = &[
    "Sole Proprietorship",
    "Partnership",
    "Limited Liability Company",
    "Corporation",
    "S Corporation",
    "Nonprofit",
];

/// Check whether a value is one of the accepted company types
pub fn is_company_type(value: &str) -> bool {
    COMPANY_TYPES.contains(&value)
}

/// Look up a state by its two-letter abbreviation
pub fn state_by_abbreviation(abbreviation: &str) -> Option<&'static UsState> {
    STATES.iter().find(|s| s.abbreviation == abbreviation)
}

/// Look up a country by its display name
pub fn country_by_name(name: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.name == name)
}

/// The country preselected in the phone input
pub fn default_country() -> &'static Country {
    &COUNTRIES[0]
}

/// Dialing code for a country name, falling back to [`DEFAULT_PHONE_CODE`]
pub fn phone_code_for(name: &str) -> &'static str {
    country_by_name(name)
        .map(|c| c.phone_code)
        .unwrap_or(DEFAULT_PHONE_CODE)
}
