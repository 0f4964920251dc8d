use crate::engine::ValidationPolicy;
use crate::error::EvalError;
use serde::Deserialize;

pub const DEFAULT_PASSING_SCORE: f64 = 60.0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvalConfig {
    pub scoring: Option<ScoringConfig>,
    pub validation: Option<ValidationConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub passing_score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub strict_weight_sum: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
}

impl EvalConfig {
    pub fn passing_score(&self) -> f64 {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.passing_score)
            .unwrap_or(DEFAULT_PASSING_SCORE)
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            strict_weight_sum: self
                .validation
                .as_ref()
                .map(|validation| validation.strict_weight_sum)
                .unwrap_or(false),
        }
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }

    pub fn validate(&self) -> Result<(), EvalError> {
        let passing_score = self.passing_score();
        if !(0.0..=100.0).contains(&passing_score) {
            return Err(EvalError::ConfigParse(format!(
                "scoring.passing_score must be between 0 and 100 (found {passing_score})"
            )));
        }

        if let Some(format) = self.report_format() {
            if !matches!(format, "md" | "json") {
                return Err(EvalError::ConfigParse(format!(
                    "unsupported report.format: {format}"
                )));
            }
        }

        Ok(())
    }
}
