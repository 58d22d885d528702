//! Assembles the exhaustive assessment report.

use serde::Serialize;
use std::time::Duration;

use super::analysis::{AnalysisResult, SecurityLevel};
use super::recommendations::SystemRecommendations;
use super::scenario::{ScenarioCounts, TestScenario};
use crate::domain::foundation::{Score, Timestamp};

pub const REPORT_VERSION: &str = "2.1";

/// Pending items taken from each assessed area.
pub const PENDING_PER_AREA: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
    pub security_score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiAnalysis {
    pub security_level: SecurityLevel,
    pub risk_assessment: String,
    pub confidence: Score,
    pub performance_score: Score,
    pub ux_score: Score,
    pub backend_score: Score,
    pub timestamp: Timestamp,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemAnalysis {
    pub security_score: Score,
    pub performance_score: Score,
    pub ux_score: Score,
    pub backend_score: Score,
    pub recommendations: SystemRecommendations,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentReport {
    pub summary: ReportSummary,
    pub detailed_results: Vec<TestScenario>,
    pub recommendations: Vec<&'static str>,
    pub ai_analysis: AiAnalysis,
    pub system_analysis: SystemAnalysis,
    pub status: ReportStatus,
    pub execution_time: String,
    pub version: &'static str,
}

impl AssessmentReport {
    pub fn build(
        scenarios: &[TestScenario],
        analysis: AnalysisResult,
        system: SystemRecommendations,
        elapsed: Duration,
        generated_at: Timestamp,
    ) -> Self {
        let counts = ScenarioCounts::tally(scenarios);
        let security_level = analysis.security_level();
        let risk_assessment = analysis.risk_assessment();

        Self {
            summary: ReportSummary {
                total_tests: counts.total,
                passed: counts.passed,
                failed: counts.failed,
                warnings: counts.warnings,
                security_score: analysis.security_score,
            },
            detailed_results: scenarios.to_vec(),
            recommendations: system.top_pending(PENDING_PER_AREA),
            system_analysis: SystemAnalysis {
                security_score: analysis.security_score,
                performance_score: analysis.performance_score,
                ux_score: analysis.ux_score,
                backend_score: analysis.backend_score,
                recommendations: system,
            },
            ai_analysis: AiAnalysis {
                security_level,
                risk_assessment,
                confidence: analysis.confidence,
                performance_score: analysis.performance_score,
                ux_score: analysis.ux_score,
                backend_score: analysis.backend_score,
                timestamp: generated_at,
                next_steps: analysis.next_steps,
            },
            status: ReportStatus::Completed,
            execution_time: format!("{:.1} seconds", elapsed.as_secs_f64()),
            version: REPORT_VERSION,
        }
    }
}
