//! Names of the fields collected from an applicant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A field of the credit card application.
///
/// Declaration order is collection order; `Ord` follows it so a
/// `BTreeMap<FieldName, _>` iterates in the order answers were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Nombre,
    Cedula,
    Telefono,
    Direccion,
}

impl FieldName {
    /// All fields, in collection order.
    pub const ALL: [FieldName; 4] = [
        FieldName::Nombre,
        FieldName::Cedula,
        FieldName::Telefono,
        FieldName::Direccion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Nombre => "nombre",
            FieldName::Cedula => "cedula",
            FieldName::Telefono => "telefono",
            FieldName::Direccion => "direccion",
        }
    }

    /// Zero-based position in the collection order.
    pub fn position(&self) -> usize {
        match self {
            FieldName::Nombre => 0,
            FieldName::Cedula => 1,
            FieldName::Telefono => 2,
            FieldName::Direccion => 3,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nombre" => Ok(FieldName::Nombre),
            "cedula" => Ok(FieldName::Cedula),
            "telefono" => Ok(FieldName::Telefono),
            "direccion" => Ok(FieldName::Direccion),
            other => Err(ValidationError::invalid_format(
                "collected",
                format!("unknown field '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_collection_order() {
        for (i, field) in FieldName::ALL.iter().enumerate() {
            assert_eq!(field.position(), i);
        }
    }

    #[test]
    fn ord_follows_collection_order() {
        assert!(FieldName::Nombre < FieldName::Cedula);
        assert!(FieldName::Telefono < FieldName::Direccion);
    }

    #[test]
    fn parses_known_names() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>().unwrap(), field);
        }
    }

    #[test]
    fn rejects_unknown_name() {
        assert!("email".parse::<FieldName>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FieldName::Telefono).unwrap(),
            "\"telefono\""
        );
    }
}
