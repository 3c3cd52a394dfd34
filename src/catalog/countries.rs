//! Countries offered by the phone input.

use serde::Serialize;

/// A selectable country for the contact phone number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    /// Display name, also the submitted `country` value
    pub name: &'static str,
    /// International dialing code including the leading `+`
    pub phone_code: &'static str,
    /// Expected local format, `9` marks a digit
    pub phone_mask: Option<&'static str>,
    /// Flag image shown next to the dialing code
    pub flag_url: &'static str,
    /// Example number shown as the input placeholder
    pub placeholder: &'static str,
}

pub static COUNTRIES: &[Country] = &[
    Country {
        name: "United States",
        phone_code: "+1",
        phone_mask: Some("(999) 999-9999"),
        flag_url: "https://flagcdn.com/us.svg",
        placeholder: "(555) 000-0000",
    },
    Country {
        name: "United Kingdom",
        phone_code: "+44",
        phone_mask: Some("99999 999999"),
        flag_url: "https://flagcdn.com/gb.svg",
        placeholder: "07123 456789",
    },
    Country {
        name: "Australia",
        phone_code: "+61",
        phone_mask: Some("9999 999 999"),
        flag_url: "https://flagcdn.com/au.svg",
        placeholder: "0412 345 678",
    },
    Country {
        name: "Germany",
        phone_code: "+49",
        phone_mask: Some("99999 9999999"),
        flag_url: "https://flagcdn.com/de.svg",
        placeholder: "01512 3456789",
    },
    Country {
        name: "France",
        phone_code: "+33",
        phone_mask: Some("99 99 99 99 99"),
        flag_url: "https://flagcdn.com/fr.svg",
        placeholder: "06 12 34 56 78",
    },
    Country {
        name: "Japan",
        phone_code: "+81",
        phone_mask: Some("999-9999-9999"),
        flag_url: "https://flagcdn.com/jp.svg",
        placeholder: "090-1234-5678",
    },
    Country {
        name: "China",
        phone_code: "+86",
        phone_mask: Some("999 9999 9999"),
        flag_url: "https://flagcdn.com/cn.svg",
        placeholder: "138 0013 8000",
    },
    Country {
        name: "India",
        phone_code: "+91",
        phone_mask: Some("99999 999999"),
        flag_url: "https://flagcdn.com/in.svg",
        placeholder: "09876 543210",
    },
    Country {
        name: "Brazil",
        phone_code: "+55",
        phone_mask: Some("(99) 99999-9999"),
        flag_url: "https://flagcdn.com/br.svg",
        placeholder: "(11) 91234-5678",
    },
    Country {
        name: "Mexico",
        phone_code: "+52",
        phone_mask: None,
        flag_url: "https://flagcdn.com/mx.svg",
        placeholder: "55 1234 5678",
    },
];
