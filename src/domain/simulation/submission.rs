//! Plain contact-form submission.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::backend_validation::numero_solicitud;
use crate::domain::applicant::rules::{validate_email, validate_nombre, validate_telefono};
use crate::domain::applicant::{clean_html, sanitize_message};
use crate::domain::foundation::{Timestamp, ValidationError};

pub const SUBMISSION_STATUS: &str = "procesando";

/// Fields of the contact form, as posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub mensaje: String,
}

impl FormSubmission {
    /// Validates and sanitizes every field.
    pub fn validate(&self) -> Result<FormSubmission, ValidationError> {
        Ok(FormSubmission {
            nombre: clean_html(&validate_nombre(&self.nombre)?),
            email: validate_email(&self.email)?,
            telefono: validate_telefono(&self.telefono)?,
            mensaje: sanitize_message(&self.mensaje)?,
        })
    }

    /// Accepts an already validated submission.
    pub fn receive<R: Rng>(self, rng: &mut R) -> SubmissionReceipt {
        let numero = numero_solicitud(rng);
        SubmissionReceipt {
            success: true,
            message: "Formulario enviado exitosamente",
            numero_solicitud: numero,
            data: SubmissionRecord {
                numero_solicitud: numero,
                submission: self,
                timestamp: Timestamp::now(),
                status: SUBMISSION_STATUS,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionRecord {
    pub numero_solicitud: u32,
    #[serde(flatten)]
    pub submission: FormSubmission,
    pub timestamp: Timestamp,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReceipt {
    pub success: bool,
    pub message: &'static str,
    pub numero_solicitud: u32,
    pub data: SubmissionRecord,
}
