//! Phone masks and the regexes derived from them.
//!
//! A mask such as `(999) 999-9999` describes a local number format: each run
//! of `n` nines stands for `n` digits and every other character must appear
//! literally.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::{self, COUNTRIES};

/// Compiled mask regexes for every country that declares a mask
static MASK_REGEXES: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for country in COUNTRIES {
        if let Some(mask) = country.phone_mask {
            match mask_regex(mask) {
                Ok(regex) => {
                    map.insert(country.name, regex);
                }
                Err(e) => tracing::warn!(country = country.name, error = %e, "invalid phone mask"),
            }
        }
    }
    map
});

/// Translate a mask into an anchored regex pattern
pub fn mask_to_pattern(mask: &str) -> String {
    let mut pattern = String::from("^");
    let mut chars = mask.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '9' {
            let mut run = 1;
            while chars.next_if_eq(&'9').is_some() {
                run += 1;
            }
            pattern.push_str(&format!(r"\d{{{run}}}"));
        } else {
            let mut buf = [0u8; 4];
            pattern.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }
    }

    pattern.push('$');
    pattern
}

pub fn mask_regex(mask: &str) -> Result<Regex, regex::Error> {
    Regex::new(&mask_to_pattern(mask))
}

/// Check a phone number against an arbitrary mask
pub fn matches_mask(phone: &str, mask: &str) -> bool {
    mask_regex(mask).is_ok_and(|re| re.is_match(phone))
}

/// The mask a phone number must follow for the named country, if any
pub fn required_mask(country: &str) -> Option<&'static str> {
    catalog::country_by_name(country).and_then(|c| c.phone_mask)
}

/// Validate a phone number for a country.
///
/// Returns the violated mask when the country declares one and the number
/// does not follow it. Unknown countries and countries without a mask accept
/// any number.
pub fn check_country_format(phone: &str, country: &str) -> Result<(), &'static str> {
    let Some(mask) = required_mask(country) else {
        return Ok(());
    };

    let matched = match MASK_REGEXES.get(country) {
        Some(regex) => regex.is_match(phone),
        None => matches_mask(phone, mask),
    };

    if matched {
        Ok(())
    } else {
        Err(mask)
    }
}
