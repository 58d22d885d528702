//! Applicant data as submitted in request bodies.

use serde::{Deserialize, Serialize};

use super::rules::{validate_cedula, validate_direccion, validate_nombre_strict, validate_telefono};
use crate::domain::foundation::ValidationError;

/// Applicant fields as sent by the form. Every field is optional; present
/// fields must satisfy their canonical rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantData {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub cedula: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
}

impl ApplicantData {
    /// Validates every present field and returns the canonical values.
    ///
    /// Blank strings count as absent.
    pub fn validate(&self) -> Result<ApplicantData, ValidationError> {
        Ok(ApplicantData {
            nombre: check(&self.nombre, validate_nombre_strict)?,
            cedula: check(&self.cedula, validate_cedula)?,
            telefono: check(&self.telefono, validate_telefono)?,
            direccion: check(&self.direccion, validate_direccion)?,
        })
    }
}

fn check(
    value: &Option<String>,
    rule: fn(&str) -> Result<String, ValidationError>,
) -> Result<Option<String>, ValidationError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => rule(v).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ApplicantData {
        ApplicantData {
            nombre: Some("Ana Pérez".to_string()),
            cedula: Some("1-2345-6789".to_string()),
            telefono: Some("8888 7777".to_string()),
            direccion: Some("200m sur del parque central".to_string()),
        }
    }

    #[test]
    fn empty_data_is_valid() {
        assert_eq!(ApplicantData::default().validate().unwrap(), ApplicantData::default());
    }

    #[test]
    fn complete_data_is_canonicalized() {
        let validated = complete().validate().unwrap();
        assert_eq!(validated.cedula.as_deref(), Some("123456789"));
        assert_eq!(validated.telefono.as_deref(), Some("88887777"));
        assert_eq!(validated.nombre.as_deref(), Some("Ana Pérez"));
    }

    #[test]
    fn blank_fields_count_as_absent() {
        let data = ApplicantData {
            cedula: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(data.validate().unwrap().cedula, None);
    }

    #[test]
    fn first_invalid_field_is_reported() {
        let data = ApplicantData {
            telefono: Some("18887777".to_string()),
            ..complete()
        };
        let err = data.validate().unwrap_err();
        assert_eq!(err.field(), "telefono");
    }

    #[test]
    fn deserializes_partial_body() {
        let data: ApplicantData = serde_json::from_str(r#"{"nombre":"Luis Mora"}"#).unwrap();
        assert_eq!(data.nombre.as_deref(), Some("Luis Mora"));
        assert!(data.cedula.is_none());
    }
}
