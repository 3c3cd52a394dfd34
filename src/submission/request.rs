//! Wire types for the company service

use serde::{Deserialize, Serialize};

use crate::catalog::{self, DEFAULT_COUNTRY};
use crate::form::CompanyRegistration;

/// Body of `POST /company`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub company_type: String,
    pub address: AddressBody,
    pub contact: ContactBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBody {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Successful response body
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub message: String,
}

/// Error response body; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Prefix a local number with the country's dialing code.
///
/// Numbers already starting with `+` are left alone. Without a country the
/// default country is assumed.
pub fn international_phone(phone: &str, country: Option<&str>) -> String {
    if phone.starts_with('+') {
        return phone.to_string();
    }
    let country = country.filter(|c| !c.is_empty()).unwrap_or(DEFAULT_COUNTRY);
    format!("{} {}", catalog::phone_code_for(country), phone)
}

impl From<&CompanyRegistration> for CompanyRequest {
    fn from(reg: &CompanyRegistration) -> Self {
        let business = &reg.business;
        let contact = &reg.contact;
        Self {
            name: business.business_name.clone(),
            company_type: business.company_type.clone(),
            address: AddressBody {
                line1: business.address_line1.clone(),
                line2: business.address_line2.clone().unwrap_or_default(),
                city: business.city.clone(),
                state: business.state.clone(),
                zip: business.zip.clone(),
            },
            contact: ContactBody {
                first_name: contact.first_name.clone(),
                last_name: contact.last_name.clone(),
                email: contact.email.clone(),
                phone: international_phone(&contact.phone, contact.country.as_deref()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::schema::{tests::valid_registration, validate_registration};
    use serde_json::json;

    #[test]
    fn test_international_phone() {
        assert_eq!(
            international_phone("(555) 123-4567", Some("United States")),
            "+1 (555) 123-4567"
        );
        assert_eq!(
            international_phone("(11) 91234-5678", Some("Brazil")),
            "+55 (11) 91234-5678"
        );
        assert_eq!(international_phone("+44 7123 456789", Some("Brazil")), "+44 7123 456789");
        assert_eq!(international_phone("555 1234", None), "+1 555 1234");
        assert_eq!(international_phone("555 1234", Some("")), "+1 555 1234");
        assert_eq!(international_phone("555 1234", Some("Atlantis")), "+1 555 1234");
    }

    #[test]
    fn test_request_body_shape() {
        let registration = validate_registration(&valid_registration()).unwrap();
        let body = serde_json::to_value(CompanyRequest::from(&registration)).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Acme LLC",
                "type": "Limited Liability Company",
                "address": {
                    "line1": "100 Main Street",
                    "line2": "",
                    "city": "Austin",
                    "state": "TX",
                    "zip": "78701"
                },
                "contact": {
                    "firstName": "Jane",
                    "lastName": "Doe",
                    "email": "jane@example.com",
                    "phone": "+1 (555) 123-4567"
                }
            })
        );
    }

    #[test]
    fn test_response_status_is_optional() {
        let resp: CompanyResponse = serde_json::from_str(r#"{"message":"Created"}"#).unwrap();
        assert_eq!(resp.message, "Created");
        assert!(resp.status.is_none());
    }
}
