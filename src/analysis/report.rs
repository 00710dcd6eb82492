use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::compare::Finding;
use super::config::AnalysisConfig;
use super::stable::StableEstimates;
use crate::data::model::Vowel;

// ---------------------------------------------------------------------------
// Report assembly – presentation-shaped values, no further computation
// ---------------------------------------------------------------------------

/// One row of the summary table.  All three numbers are rounded to two
/// decimals; `difference` is participant − normative, computed before
/// rounding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub metric: String,
    pub normative: f64,
    pub participant: f64,
    pub difference: f64,
}

impl MetricRow {
    fn new(metric: String, normative: f64, participant: f64) -> Self {
        MetricRow {
            metric,
            normative: round2(normative),
            participant: round2(participant),
            difference: round2(participant - normative),
        }
    }
}

/// Everything the renderer and exporters need for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VowelSpaceReport {
    pub estimates: StableEstimates,
    pub participant_vsa: f64,
    pub normative_vsa: f64,
    pub findings: Vec<Finding>,
    pub rows: Vec<MetricRow>,
}

impl VowelSpaceReport {
    /// Write the report as pretty-printed JSON.
    pub fn export_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialising report")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing report to {}", path.display()))?;
        Ok(())
    }
}

/// Assemble the final report: F1/F2 rows per vowel in /i/, /a/, /u/ order,
/// then the area row, then the findings as computed.
pub fn assemble(
    estimates: StableEstimates,
    participant_vsa: f64,
    normative_vsa: f64,
    findings: Vec<Finding>,
    config: &AnalysisConfig,
) -> VowelSpaceReport {
    let mut rows = Vec::with_capacity(7);
    for vowel in Vowel::ALL {
        let target = config.reference.target(vowel);
        let estimate = estimates.get(vowel);
        rows.push(MetricRow::new(format!("F1 ({vowel})"), target.f1, estimate.f1));
        rows.push(MetricRow::new(format!("F2 ({vowel})"), target.f2, estimate.f2));
    }
    rows.push(MetricRow::new(
        "Area of Vowel Triangle (VSA)".to_string(),
        normative_vsa,
        participant_vsa,
    ));

    VowelSpaceReport {
        estimates,
        participant_vsa,
        normative_vsa,
        findings,
        rows,
    }
}

/// Round half away from zero to two decimals.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
