//! Bot prompts emitted by the wizard.

use crate::domain::applicant::FieldName;

pub const WELCOME: &str = "¡Hola! Bienvenido al Banco de Costa Rica. Para solicitar tu tarjeta de crédito, necesito algunos datos. ¿Cuál es tu nombre completo?";

pub const ASK_TELEFONO: &str =
    "Excelente. ¿Cuál es tu número de teléfono? (8 dígitos, empezando con 2, 6, 7 u 8)";

pub const ASK_DIRECCION: &str =
    "Perfecto. ¿Cuál es tu dirección exacta para la entrega de la tarjeta?";

pub const START_VALIDATION: &str =
    "Gracias. Ahora voy a iniciar la validación de tus datos. Esto puede tomar unos segundos...";

pub const NOT_UNDERSTOOD: &str = "Disculpa, no entendí tu mensaje. ¿Podrías repetirlo?";

pub const RETRY_NOMBRE: &str = "Por favor ingresa tu nombre completo.";

pub const RETRY_NOMBRE_STRICT: &str = "Por favor ingresa tu nombre completo (nombre(s) y apellidos). Ejemplo: Juan Carlos Pérez González";

pub const RETRY_CEDULA: &str =
    "La cédula debe tener entre 9 y 10 dígitos. Por favor, ingrésala nuevamente.";

pub const RETRY_TELEFONO: &str =
    "El teléfono debe tener 8 dígitos y comenzar con 2, 6, 7 u 8. Intenta de nuevo.";

/// Prompt after the name is accepted, addressing the applicant by name.
pub fn ask_cedula(nombre: &str) -> String {
    format!(
        "Perfecto {}. Ahora necesito tu número de cédula (9 o 10 dígitos).",
        nombre
    )
}

/// Corrective prompt for a rejected answer.
pub fn retry(field: FieldName, strict_names: bool) -> &'static str {
    match field {
        FieldName::Nombre if strict_names => RETRY_NOMBRE_STRICT,
        FieldName::Nombre => RETRY_NOMBRE,
        FieldName::Cedula => RETRY_CEDULA,
        FieldName::Telefono => RETRY_TELEFONO,
        FieldName::Direccion => NOT_UNDERSTOOD,
    }
}
