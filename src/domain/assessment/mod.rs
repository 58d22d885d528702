//! Assessment module - the simulated exhaustive security assessment.
//!
//! Scenarios and catalogues are static. Scores come from a pluggable
//! scorer (see `ports::SecurityScorer`) and are folded into an
//! `AssessmentReport` here.

mod analysis;
mod recommendations;
mod report;
mod scenario;

pub use analysis::{AnalysisResult, SecurityLevel, ALTO_THRESHOLD, MEDIO_THRESHOLD};
pub use recommendations::{
    total_items, AreaStatus, ItemStatus, Priority, PriorityDistribution, RecommendationCategory,
    RecommendationItem, SystemRecommendations, CATALOGUE, SYSTEM_RECOMMENDATIONS,
};
pub use report::{
    AiAnalysis, AssessmentReport, ReportStatus, ReportSummary, SystemAnalysis, PENDING_PER_AREA,
    REPORT_VERSION,
};
pub use scenario::{resumen, ScenarioCounts, TestScenario, TestStatus, Vulnerability, SCENARIOS};
