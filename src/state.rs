use std::collections::BTreeMap;

use crate::analysis;
use crate::analysis::config::AnalysisConfig;
use crate::analysis::report::VowelSpaceReport;
use crate::color::VowelPalette;
use crate::data::model::{FormantDataset, FormantSample, Vowel};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Where a vowel's samples came from, for the side panel.
#[derive(Debug, Clone)]
pub struct VowelSource {
    pub file_name: String,
    /// Rows in the source table, before cleaning.
    pub total_rows: usize,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Normative reference and thresholds used for analysis.
    pub config: AnalysisConfig,

    /// Cleaned samples per vowel.
    pub dataset: FormantDataset,

    /// Provenance per vowel, in canonical order.
    pub sources: BTreeMap<Vowel, VowelSource>,

    /// Current report (None until all three vowels analyse cleanly).
    pub report: Option<VowelSpaceReport>,

    /// Marker colour per vowel.
    pub palette: VowelPalette,

    /// Whether the normative triangle overlay is drawn.
    pub show_normative: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
            dataset: FormantDataset::default(),
            sources: BTreeMap::new(),
            report: None,
            palette: VowelPalette::new(),
            show_normative: true,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest freshly cleaned samples for one vowel, then re-analyse.
    /// A successful ingest clears any stale error from an earlier load.
    pub fn set_vowel_samples(
        &mut self,
        vowel: Vowel,
        source: VowelSource,
        samples: Vec<FormantSample>,
    ) {
        self.dataset.insert(vowel, samples);
        self.sources.insert(vowel, source);
        self.status_message = None;
        self.reanalyze();
    }

    /// Replace the analysis config (e.g. a loaded reference file), then
    /// re-analyse.
    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
        self.status_message = None;
        self.reanalyze();
    }

    /// Recompute the report from the current dataset.  An incomplete
    /// dataset or a failed analysis leaves no report behind.
    pub fn reanalyze(&mut self) {
        if !self.dataset.is_complete() {
            self.report = None;
            return;
        }
        match analysis::analyze(&self.dataset, &self.config) {
            Ok(report) => {
                log::info!(
                    "analysis complete: participant VSA {:.2} Hz² (normative {:.2})",
                    report.participant_vsa,
                    report.normative_vsa
                );
                self.report = Some(report);
                self.status_message = None;
            }
            Err(err) => {
                log::warn!("analysis aborted: {err}");
                self.report = None;
                self.status_message = Some(format!("Analysis aborted: {err}"));
            }
        }
    }

    /// Drop all loaded vowel data and the report.
    pub fn clear(&mut self) {
        self.dataset.clear();
        self.sources.clear();
        self.report = None;
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compare::Assessment;

    fn source(name: &str, rows: usize) -> VowelSource {
        VowelSource {
            file_name: name.to_string(),
            total_rows: rows,
        }
    }

    fn normative_samples(vowel: Vowel) -> Vec<FormantSample> {
        let target = AnalysisConfig::default().reference.target(vowel);
        vec![FormantSample { f1: target.f1, f2: target.f2 }]
    }

    #[test]
    fn report_appears_once_all_vowels_are_loaded() {
        let mut state = AppState::default();

        state.set_vowel_samples(Vowel::I, source("i.csv", 1), normative_samples(Vowel::I));
        state.set_vowel_samples(Vowel::A, source("a.csv", 1), normative_samples(Vowel::A));
        assert!(state.report.is_none());

        state.set_vowel_samples(Vowel::U, source("u.csv", 1), normative_samples(Vowel::U));
        let report = state.report.as_ref().expect("complete dataset analyses");
        assert!(
            report
                .findings
                .iter()
                .all(|f| f.assessment == Assessment::WithinNormalRange)
        );
    }

    #[test]
    fn empty_vowel_clears_the_report_and_sets_status() {
        let mut state = AppState::default();
        state.set_vowel_samples(Vowel::I, source("i.csv", 1), normative_samples(Vowel::I));
        state.set_vowel_samples(Vowel::A, source("a.csv", 1), normative_samples(Vowel::A));
        // All rows of the /u/ table were dropped during cleaning.
        state.set_vowel_samples(Vowel::U, source("u.csv", 4), vec![]);

        assert!(state.report.is_none());
        let status = state.status_message.as_deref().unwrap();
        assert!(status.contains("/u/"), "{status}");
    }

    #[test]
    fn successful_load_clears_a_stale_error() {
        let mut state = AppState::default();
        // A rejected file leaves its message via the load path.
        state.status_message = Some("Error in i.csv: input table has no 'f1' column".into());

        state.set_vowel_samples(Vowel::I, source("i2.csv", 1), normative_samples(Vowel::I));
        assert!(state.status_message.is_none());
        assert!(state.report.is_none()); // still only one vowel
    }

    #[test]
    fn reloading_a_vowel_recovers() {
        let mut state = AppState::default();
        state.set_vowel_samples(Vowel::I, source("i.csv", 1), normative_samples(Vowel::I));
        state.set_vowel_samples(Vowel::A, source("a.csv", 1), normative_samples(Vowel::A));
        state.set_vowel_samples(Vowel::U, source("u.csv", 4), vec![]);
        assert!(state.report.is_none());

        state.set_vowel_samples(Vowel::U, source("u2.csv", 3), normative_samples(Vowel::U));
        assert!(state.report.is_some());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn changing_the_reference_reanalyses() {
        let mut state = AppState::default();
        for vowel in Vowel::ALL {
            state.set_vowel_samples(vowel, source("x.csv", 1), normative_samples(vowel));
        }

        let mut config = AnalysisConfig::default();
        config.reference.i.f2 = 2400.0;
        state.set_config(config);

        let report = state.report.as_ref().unwrap();
        assert_eq!(report.findings[0].assessment, Assessment::TongueRetracted);
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = AppState::default();
        for vowel in Vowel::ALL {
            state.set_vowel_samples(vowel, source("x.csv", 1), normative_samples(vowel));
        }
        assert!(state.report.is_some());

        state.clear();
        assert!(state.report.is_none());
        assert!(state.sources.is_empty());
        assert_eq!(state.dataset.loaded_count(), 0);
    }
}
