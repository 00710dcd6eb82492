/// Analysis layer: from cleaned samples to the clinical report.
///
/// Architecture:
/// ```text
///   FormantDataset (cleaned per-vowel samples)
///        │
///        ▼
///   ┌──────────┐
///   │  stable   │  mode/median per axis → StableEstimates
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   vsa     │  VowelTriangle × 2 → areas (Heron, clamped)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ compare   │  four fixed rules → Vec<Finding>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  report   │  rounding + assembly → VowelSpaceReport
///   └──────────┘
/// ```
///
/// Any error aborts the whole run; a partial report value cannot exist.

pub mod compare;
pub mod config;
pub mod report;
pub mod stable;
pub mod vsa;

use thiserror::Error;

use crate::data::model::{FormantDataset, Vowel};
use config::AnalysisConfig;
use report::VowelSpaceReport;
use stable::StableEstimates;

/// Why an analysis run was aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("no valid formant samples for /{vowel}/; a stable estimate needs at least one frame")]
    InsufficientData { vowel: Vowel },
}

/// Run the full pipeline over a complete dataset.
pub fn analyze(
    dataset: &FormantDataset,
    config: &AnalysisConfig,
) -> Result<VowelSpaceReport, AnalysisError> {
    let estimates = StableEstimates {
        i: stable::stable_estimate(Vowel::I, dataset.samples(Vowel::I), &config.thresholds)?,
        a: stable::stable_estimate(Vowel::A, dataset.samples(Vowel::A), &config.thresholds)?,
        u: stable::stable_estimate(Vowel::U, dataset.samples(Vowel::U), &config.thresholds)?,
    };

    let participant_vsa = estimates.triangle().area();
    let normative_vsa = config.reference.triangle().area();

    let findings = compare::compare(&estimates, participant_vsa, normative_vsa, config);

    Ok(report::assemble(
        estimates,
        participant_vsa,
        normative_vsa,
        findings,
        config,
    ))
}
