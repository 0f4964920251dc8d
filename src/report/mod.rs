pub mod json;
pub mod md;

use crate::engine::{progress, structure_issues};
use crate::error::{EvalError, Result};
use crate::types::config::EvalConfig;
use crate::types::methodology::Methodology;
use crate::types::report::EvaluationReport;
use chrono::Utc;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "json" => Ok(Self::Json),
            "md" => Ok(Self::Md),
            other => Err(EvalError::ConfigParse(format!(
                "unsupported report format: {other}"
            ))),
        }
    }
}

pub fn build_report(path: &Path, methodology: &Methodology, config: &EvalConfig) -> EvaluationReport {
    let score = methodology.score();
    let report = EvaluationReport {
        path: path.display().to_string(),
        title: methodology.title().to_string(),
        kind: methodology.kind(),
        score,
        completion: methodology.completion(),
        progress: progress(methodology),
        passed: score >= config.passing_score(),
        issues: structure_issues(methodology, &config.validation_policy()),
        generated_at: Utc::now().to_rfc3339(),
    };
    tracing::info!(
        path = %report.path,
        score = report.score,
        completion = %report.completion,
        "document evaluated"
    );
    report
}

pub fn render(reports: &[EvaluationReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(reports).map_err(EvalError::Json),
        OutputFormat::Md => Ok(md::to_markdown(reports)),
    }
}
