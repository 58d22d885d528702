//! Static improvement catalogues.
//!
//! Two views exist: the per-area implemented/pending lists that feed the
//! exhaustive assessment, and the prioritised category catalogue served on
//! its own.

use serde::Serialize;

/// Importance of a recommendation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Alta,
    Media,
    Baja,
}

/// Progress on a recommendation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Completed,
    InProgress,
    Pending,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [ItemStatus::Completed, ItemStatus::InProgress, ItemStatus::Pending];

    /// Serialized name.
    pub fn key(&self) -> &'static str {
        match self {
            ItemStatus::Completed => "completed",
            ItemStatus::InProgress => "in_progress",
            ItemStatus::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Completed => "Ya implementado",
            ItemStatus::InProgress => "En desarrollo",
            ItemStatus::Pending => "Pendiente",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationItem {
    pub status: ItemStatus,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationCategory {
    pub category: &'static str,
    pub priority: Priority,
    pub items: &'static [RecommendationItem],
}

const fn done(text: &'static str) -> RecommendationItem {
    RecommendationItem { status: ItemStatus::Completed, text }
}

const fn wip(text: &'static str) -> RecommendationItem {
    RecommendationItem { status: ItemStatus::InProgress, text }
}

const fn todo(text: &'static str) -> RecommendationItem {
    RecommendationItem { status: ItemStatus::Pending, text }
}

pub const CATALOGUE: [RecommendationCategory; 6] = [
    RecommendationCategory {
        category: "Seguridad Crítica",
        priority: Priority::Alta,
        items: &[
            done("Implementar autenticación de dos factores (2FA) para usuarios administradores"),
            done("Cifrar datos sensibles en tránsito usando TLS 1.3 y en reposo con AES-256"),
            done("Validar entrada de usuarios contra inyección SQL con prepared statements"),
            wip("Implementar Web Application Firewall (WAF) para filtrar tráfico malicioso"),
            wip("Configurar Content Security Policy (CSP) más restrictivo"),
            wip("Implementar rate limiting avanzado con Redis para prevenir ataques DDoS"),
            todo("Agregar logging de auditoría para todas las transacciones críticas"),
            todo("Implementar detección de anomalías en tiempo real"),
        ],
    },
    RecommendationCategory {
        category: "Performance y Optimización",
        priority: Priority::Media,
        items: &[
            done("Implementar caché Redis para consultas frecuentes de validación"),
            done("Optimizar tiempos de respuesta del backend con async/await"),
            done("Comprimir recursos estáticos usando gzip/brotli"),
            wip("Implementar CDN para recursos estáticos globalmente distribuidos"),
            wip("Configurar connection pooling para base de datos"),
            wip("Implementar lazy loading para componentes pesados"),
            todo("Optimizar queries de base de datos con índices apropiados"),
            todo("Implementar paginación para grandes datasets"),
        ],
    },
    RecommendationCategory {
        category: "UX/UI y Accesibilidad",
        priority: Priority::Media,
        items: &[
            done("Mejorar responsividad en dispositivos móviles con CSS Grid/Flexbox"),
            done("Agregar indicadores de progreso visual para validaciones"),
            done("Implementar validación en tiempo real con debouncing"),
            wip("Implementar modo oscuro/claro para mejor experiencia"),
            wip("Agregar soporte para lectores de pantalla (ARIA labels)"),
            wip("Implementar shortcuts de teclado para navegación rápida"),
            todo("Agregar tooltips informativos para campos complejos"),
            todo("Implementar offline-first con Service Workers"),
        ],
    },
    RecommendationCategory {
        category: "Backend y Infraestructura",
        priority: Priority::Alta,
        items: &[
            done("Implementar logs de auditoría estructurados con ELK Stack"),
            done("Agregar monitoreo de salud del sistema con Prometheus/Grafana"),
            done("Configurar backup automático de datos con versionado"),
            wip("Implementar circuit breaker pattern para servicios externos"),
            wip("Configurar load balancing para alta disponibilidad"),
            wip("Implementar blue-green deployment para actualizaciones sin downtime"),
            todo("Configurar alertas automáticas para métricas críticas"),
            todo("Implementar disaster recovery plan con RTO < 4 horas"),
        ],
    },
    RecommendationCategory {
        category: "Testing y Calidad",
        priority: Priority::Media,
        items: &[
            done("Implementar pruebas automatizadas end-to-end con Playwright"),
            done("Configurar CI/CD pipeline con GitHub Actions"),
            done("Implementar code coverage mínimo del 80%"),
            wip("Agregar pruebas de carga con K6 o Artillery"),
            wip("Implementar mutation testing para calidad de pruebas"),
            wip("Configurar static code analysis with SonarQube"),
            todo("Implementar chaos engineering para resiliencia"),
            todo("Agregar pruebas de accesibilidad automatizadas"),
        ],
    },
    RecommendationCategory {
        category: "Analytics y Monitoreo",
        priority: Priority::Baja,
        items: &[
            wip("Implementar analytics de usuario con Google Analytics 4"),
            wip("Configurar error tracking con Sentry"),
            wip("Implementar métricas de negocio personalizadas"),
            todo("Agregar dashboards de KPIs en tiempo real"),
            todo("Implementar A/B testing para optimizar conversión"),
            todo("Configurar alertas proactivas basadas en patrones"),
        ],
    },
];

/// Number of categories per priority in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PriorityDistribution {
    #[serde(rename = "ALTA")]
    pub alta: usize,
    #[serde(rename = "MEDIA")]
    pub media: usize,
    #[serde(rename = "BAJA")]
    pub baja: usize,
}

impl PriorityDistribution {
    pub fn of(categories: &[RecommendationCategory]) -> Self {
        categories.iter().fold(Self::default(), |mut acc, c| {
            match c.priority {
                Priority::Alta => acc.alta += 1,
                Priority::Media => acc.media += 1,
                Priority::Baja => acc.baja += 1,
            }
            acc
        })
    }
}

pub fn total_items(categories: &[RecommendationCategory]) -> usize {
    categories.iter().map(|c| c.items.len()).sum()
}

/// Implemented and pending work for one assessed area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AreaStatus {
    pub implemented: &'static [&'static str],
    pub pending: &'static [&'static str],
}

impl AreaStatus {
    /// The first `n` pending items.
    pub fn top_pending(&self, n: usize) -> &'static [&'static str] {
        &self.pending[..n.min(self.pending.len())]
    }
}

/// Per-area status lists used by the exhaustive assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemRecommendations {
    pub security: AreaStatus,
    pub performance: AreaStatus,
    pub ux_ui: AreaStatus,
    pub backend: AreaStatus,
}

impl SystemRecommendations {
    pub fn areas(&self) -> [&AreaStatus; 4] {
        [&self.security, &self.performance, &self.ux_ui, &self.backend]
    }

    /// Top `per_area` pending items from each area, in area order.
    pub fn top_pending(&self, per_area: usize) -> Vec<&'static str> {
        self.areas()
            .iter()
            .flat_map(|a| a.top_pending(per_area).iter().copied())
            .collect()
    }
}

pub const SYSTEM_RECOMMENDATIONS: SystemRecommendations = SystemRecommendations {
    security: AreaStatus {
        implemented: &[
            "Validaciones de entrada con sanitización HTML",
            "Rate limiting implementado",
            "Headers de seguridad (CSP, X-Frame-Options)",
            "Validación de tokens y sesiones",
        ],
        pending: &[
            "Implementar autenticación de dos factores (2FA)",
            "Cifrar datos sensibles con AES-256",
            "Agregar WAF (Web Application Firewall)",
            "Implementar logs de auditoría detallados",
            "Monitoreo de intrusiones en tiempo real",
        ],
    },
    performance: AreaStatus {
        implemented: &[
            "Compresión de respuestas HTTP",
            "Optimización de assets estáticos",
            "Conexiones asíncronas",
        ],
        pending: &[
            "Implementar caché Redis para consultas frecuentes",
            "CDN para recursos estáticos",
            "Optimizar consultas de base de datos",
            "Load balancing para alta disponibilidad",
            "Métricas de performance en tiempo real",
        ],
    },
    ux_ui: AreaStatus {
        implemented: &[
            "Diseño responsivo básico",
            "Indicadores de progreso visuales",
            "Validación en tiempo real",
            "Efectos de celebración",
        ],
        pending: &[
            "Optimización avanzada para móviles",
            "Dark mode / Light mode toggle",
            "Mejoras de accesibilidad (ARIA labels)",
            "Feedback de audio personalizable",
            "Chat en vivo para soporte",
        ],
    },
    backend: AreaStatus {
        implemented: &[
            "API RESTful",
            "Validación de datos tipada",
            "Manejo de errores estructurado",
        ],
        pending: &[
            "Dashboard de monitoreo con Grafana",
            "Sistema de backup automático",
            "Replicación de base de datos",
            "Logs estructurados con ELK Stack",
            "Alertas proactivas por email/SMS",
        ],
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_metadata() {
        assert_eq!(CATALOGUE.len(), 6);
        assert_eq!(total_items(&CATALOGUE), 46);
        assert_eq!(
            PriorityDistribution::of(&CATALOGUE),
            PriorityDistribution { alta: 2, media: 3, baja: 1 }
        );
    }

    #[test]
    fn top_pending_takes_two_per_area() {
        let top = SYSTEM_RECOMMENDATIONS.top_pending(2);
        assert_eq!(top.len(), 8);
        assert_eq!(top[0], "Implementar autenticación de dos factores (2FA)");
        assert_eq!(top[7], "Sistema de backup automático");
    }

    #[test]
    fn top_pending_caps_at_available_items() {
        let area = AreaStatus { implemented: &[], pending: &["a"] };
        assert_eq!(area.top_pending(2), &["a"]);
    }

    #[test]
    fn status_and_priority_wire_names() {
        assert_eq!(serde_json::to_string(&ItemStatus::InProgress).unwrap(), "\"in_progress\"");
        assert_eq!(serde_json::to_string(&Priority::Alta).unwrap(), "\"ALTA\"");
        let json = serde_json::to_value(PriorityDistribution::of(&CATALOGUE)).unwrap();
        assert_eq!(json["MEDIA"], 3);
    }

    #[test]
    fn status_key_matches_serialized_name() {
        for status in ItemStatus::ALL {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.key());
        }
    }
}
