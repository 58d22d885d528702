//! Canonical field rules.
//!
//! Each field has exactly one rule here. The chat wizard, restored
//! conversation state and request bodies all call these functions, so a
//! value accepted by one layer is accepted by every other.

use once_cell::sync::Lazy;
use regex::Regex;

use super::field::FieldName;
use super::sanitize::{address_has_forbidden_content, clean_html};
use crate::domain::foundation::ValidationError;

static CEDULA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{9,10}$").expect("cedula pattern is valid"));

static TELEFONO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[2678][0-9]{7}$").expect("telefono pattern is valid"));

static NOMBRE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]{2,100}$").expect("nombre pattern is valid")
});

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// Minimum length of a delivery address in request bodies.
pub const MIN_DIRECCION_LEN: usize = 10;

/// Removes whitespace and hyphens, leaving the canonical digit string.
///
/// Any other character is kept so the format check can reject it.
pub fn canonical_digits(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Costa Rican national ID: 9 or 10 digits once separators are removed.
pub fn validate_cedula(input: &str) -> Result<String, ValidationError> {
    let digits = canonical_digits(input);
    if digits.is_empty() {
        return Err(ValidationError::empty_field(FieldName::Cedula.as_str()));
    }
    if !CEDULA.is_match(&digits) {
        return Err(ValidationError::invalid_format(
            FieldName::Cedula.as_str(),
            "must contain 9 or 10 digits",
        ));
    }
    Ok(digits)
}

/// Costa Rican phone number: 8 digits starting with 2, 6, 7 or 8.
pub fn validate_telefono(input: &str) -> Result<String, ValidationError> {
    let digits = canonical_digits(input);
    if digits.is_empty() {
        return Err(ValidationError::empty_field(FieldName::Telefono.as_str()));
    }
    if !TELEFONO.is_match(&digits) {
        return Err(ValidationError::invalid_format(
            FieldName::Telefono.as_str(),
            "must contain 8 digits starting with 2, 6, 7 or 8",
        ));
    }
    Ok(digits)
}

/// Name accepted by the wizard's default policy: anything non-empty.
pub fn validate_nombre(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(FieldName::Nombre.as_str()));
    }
    Ok(trimmed.to_string())
}

/// Structural name rule: letters, accents and spaces only, 2 to 4 words of
/// at least 2 characters each.
pub fn validate_nombre_strict(input: &str) -> Result<String, ValidationError> {
    let field = FieldName::Nombre.as_str();
    let trimmed = validate_nombre(input)?;

    if !NOMBRE_CHARS.is_match(&trimmed) {
        return Err(ValidationError::invalid_format(
            field,
            "only letters, accents and spaces are allowed",
        ));
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return Err(ValidationError::invalid_format(
            field,
            "must contain between 2 and 4 words",
        ));
    }
    if words.iter().any(|w| w.chars().count() < 2) {
        return Err(ValidationError::invalid_format(
            field,
            "every word must have at least 2 characters",
        ));
    }

    Ok(words.join(" "))
}

/// Delivery address as the wizard accepts it: any text, trimmed.
pub fn normalize_direccion(input: &str) -> String {
    input.trim().to_string()
}

/// Delivery address as request bodies require it: at least
/// [`MIN_DIRECCION_LEN`] characters and no markup.
pub fn validate_direccion(input: &str) -> Result<String, ValidationError> {
    let field = FieldName::Direccion.as_str();
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if address_has_forbidden_content(trimmed) {
        return Err(ValidationError::forbidden_content(field));
    }

    let sanitized = clean_html(trimmed);
    if sanitized.chars().count() < MIN_DIRECCION_LEN {
        return Err(ValidationError::invalid_format(
            field,
            format!("must have at least {} characters", MIN_DIRECCION_LEN),
        ));
    }
    Ok(sanitized)
}

/// Email address used by the plain form submission.
pub fn validate_email(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    let len = trimmed.chars().count();
    if !(5..=254).contains(&len) || !EMAIL.is_match(trimmed) {
        return Err(ValidationError::invalid_format("email", "not a valid email address"));
    }
    Ok(trimmed.to_string())
}
