//! Static knowledge base and keyword matcher behind the guide chat.

use serde::Serialize;

/// Topics the knowledge base can answer, in lookup priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideTopic {
    Formulario,
    Requisitos,
    Documentos,
    Validacion,
    Tiempo,
    Credito,
    Ayuda,
}

impl GuideTopic {
    pub const ALL: [GuideTopic; 7] = [
        GuideTopic::Formulario,
        GuideTopic::Requisitos,
        GuideTopic::Documentos,
        GuideTopic::Validacion,
        GuideTopic::Tiempo,
        GuideTopic::Credito,
        GuideTopic::Ayuda,
    ];

    /// The topic's own keyword plus its synonyms.
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            GuideTopic::Formulario => &["formulario", "llenar", "completar", "formato"],
            GuideTopic::Requisitos => &["requisito"],
            GuideTopic::Documentos => &["documento"],
            GuideTopic::Validacion => &["validacion", "valida", "proceso", "verifica"],
            GuideTopic::Tiempo => &["tiempo", "demora", "cuanto", "cuando"],
            GuideTopic::Credito => &["credito", "limite", "monto", "cantidad"],
            GuideTopic::Ayuda => &["ayuda", "contacto", "telefono"],
        }
    }

    pub fn answer(&self) -> &'static str {
        match self {
            GuideTopic::Formulario => "Para llenar el formulario correctamente: 1) Ingresa tu nombre completo (1-2 nombres + 2 apellidos), 2) Tu cédula de 9-10 dígitos, 3) Teléfono de 8 dígitos empezando con 2,6,7 u 8, 4) Dirección completa para entrega.",
            GuideTopic::Requisitos => "Requisitos para tarjeta BCR: Mayor de edad, cédula vigente, ingresos demostrables mínimos ₡300,000, no estar en centrales de riesgo, residir en Costa Rica.",
            GuideTopic::Documentos => "Documentos necesarios: Cédula de identidad vigente, comprobante de ingresos (colillas, constancia patronal), comprobante de domicilio (recibo de servicios).",
            GuideTopic::Validacion => "El proceso de validación incluye: verificación en CCSS, consulta en centrales de riesgo, validación en sistema BCR, y confirmación en Ministerio de Hacienda.",
            GuideTopic::Tiempo => "El proceso toma aproximadamente 2-3 minutos. La tarjeta se entrega en 24-48 horas hábiles una vez aprobada.",
            GuideTopic::Credito => "El límite de crédito inicial es de ₡500,000 a ₡2,000,000 dependiendo de tus ingresos y historial crediticio.",
            GuideTopic::Ayuda => "Si necesitas ayuda adicional, puedes contactar al 2295-9595 o visitar cualquier sucursal BCR.",
        }
    }

    fn matches(&self, message: &str) -> bool {
        self.keywords().iter().any(|k| message.contains(k))
    }
}

// Contextual answers, checked in order after the knowledge base misses.
const CONTEXTUAL: &[(&[&str], &str)] = &[
    (
        &["hola", "buenos", "buenas"],
        "¡Hola! Soy tu asistente virtual del BCR. ¿En qué puedo ayudarte con tu solicitud de tarjeta de crédito?",
    ),
    (
        &["gracias"],
        "¡De nada! Estoy aquí para ayudarte. ¿Tienes alguna otra pregunta sobre el proceso?",
    ),
    (
        &["problema", "error", "falla"],
        "Si tienes problemas técnicos, intenta refrescar la página. Si el problema persiste, contacta al 2295-9595.",
    ),
    (
        &["nombre", "completo"],
        "Para el nombre, ingresa de 2 a 4 palabras: tu(s) nombre(s) y tus dos apellidos. Ejemplo: \"Juan Carlos Pérez González\".",
    ),
    (
        &["cedula", "identificacion"],
        "La cédula debe tener 9 o 10 dígitos, solo números. Ejemplo: 123456789 o 1234567890.",
    ),
    (
        &["telefono", "numero"],
        "El teléfono debe tener exactamente 8 dígitos y empezar con 2, 6, 7 u 8. Ejemplo: 88887777.",
    ),
    (
        &["direccion", "entrega"],
        "Proporciona tu dirección completa y detallada para la entrega de la tarjeta. Incluye provincia, cantón, distrito y señas específicas.",
    ),
];

pub const DEFAULT_ANSWER: &str = "No estoy seguro de cómo ayudarte con eso específicamente. ¿Podrías preguntarme sobre: formulario, requisitos, documentos, validación, tiempo de proceso, o límites de crédito?";

/// Answers free-text questions about the application process.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuideAssistant;

impl GuideAssistant {
    pub fn new() -> Self {
        Self
    }

    /// First knowledge-base topic mentioned in the message.
    pub fn topic(&self, message: &str) -> Option<GuideTopic> {
        let message = message.trim().to_lowercase();
        GuideTopic::ALL.into_iter().find(|t| t.matches(&message))
    }

    pub fn answer(&self, message: &str) -> &'static str {
        if let Some(topic) = self.topic(message) {
            return topic.answer();
        }
        let message = message.trim().to_lowercase();
        CONTEXTUAL
            .iter()
            .find(|(words, _)| words.iter().any(|w| message.contains(w)))
            .map(|(_, answer)| *answer)
            .unwrap_or(DEFAULT_ANSWER)
    }
}
