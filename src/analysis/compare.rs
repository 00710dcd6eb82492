use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::config::AnalysisConfig;
use super::stable::StableEstimates;

// ---------------------------------------------------------------------------
// Comparison engine – fixed rules over deltas from the normative reference
// ---------------------------------------------------------------------------

/// The four comparisons, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    /// F2 of /i/: advancement of the front vowel.
    FrontVowelF2,
    /// F2 of /u/: advancement of the back vowel.
    BackVowelF2,
    /// F1 of /a/: openness of the low vowel.
    LowVowelF1,
    /// Triangle area.
    VowelSpaceArea,
}

/// Clinical classification of one metric's deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Assessment {
    WithinNormalRange,
    TongueFronted,
    TongueRetracted,
    TongueExcessivelyFronted,
    TongueLowered,
    TongueRaised,
    ReducedArticulatoryRange,
    IncreasedArticulatoryRange,
}

/// Outcome of one rule.  `delta` is the exact signed difference
/// participant − normative, never rounded; presentation rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finding {
    pub metric: Metric,
    pub assessment: Assessment,
    pub delta: f64,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.delta.abs();
        match self.assessment {
            Assessment::WithinNormalRange => match self.metric {
                Metric::FrontVowelF2 => write!(f, "F2 of /i/ is within the normal range."),
                Metric::BackVowelF2 => write!(f, "F2 of /u/ is within the normal range."),
                Metric::LowVowelF1 => write!(f, "F1 of /a/ is within the normal range."),
                Metric::VowelSpaceArea => {
                    write!(f, "The vowel space area is within the normal range.")
                }
            },
            Assessment::TongueFronted => write!(
                f,
                "F2 of /i/ is {magnitude:.2} Hz above the normative value; \
                 the tongue is positioned further forward than typical."
            ),
            Assessment::TongueRetracted => write!(
                f,
                "F2 of /i/ is {magnitude:.2} Hz below the normative value; \
                 the tongue is positioned further back than typical."
            ),
            Assessment::TongueExcessivelyFronted => write!(
                f,
                "F2 of /u/ is {magnitude:.2} Hz above the normative value; \
                 the back vowel is excessively fronted."
            ),
            Assessment::TongueLowered => write!(
                f,
                "F1 of /a/ is {magnitude:.2} Hz above the normative value; \
                 the tongue is positioned lower than typical."
            ),
            Assessment::TongueRaised => write!(
                f,
                "F1 of /a/ is {magnitude:.2} Hz below the normative value; \
                 the tongue is positioned higher than typical."
            ),
            Assessment::ReducedArticulatoryRange => write!(
                f,
                "The vowel space area is {magnitude:.2} Hz² smaller than the normative \
                 area; the articulatory working range is reduced."
            ),
            Assessment::IncreasedArticulatoryRange => write!(
                f,
                "The vowel space area is {magnitude:.2} Hz² larger than the normative \
                 area; the articulatory working range is expanded."
            ),
        }
    }
}

// Serialized findings carry the rendered sentence alongside the raw parts
// so exported reports are readable without this crate.
impl Serialize for Finding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Finding", 4)?;
        s.serialize_field("metric", &self.metric)?;
        s.serialize_field("assessment", &self.assessment)?;
        s.serialize_field("delta", &self.delta)?;
        s.serialize_field("message", &self.to_string())?;
        s.end()
    }
}

/// Run all four rules.  Every rule always contributes one finding and the
/// order is fixed: /i/ F2, /u/ F2, /a/ F1, VSA.
pub fn compare(
    estimates: &StableEstimates,
    participant_vsa: f64,
    normative_vsa: f64,
    config: &AnalysisConfig,
) -> Vec<Finding> {
    let reference = &config.reference;
    let band = config.thresholds.formant_band_hz;

    let i_f2 = estimates.i.f2 - reference.i.f2;
    let u_f2 = estimates.u.f2 - reference.u.f2;
    let a_f1 = estimates.a.f1 - reference.a.f1;
    let area = participant_vsa - normative_vsa;

    vec![
        Finding {
            metric: Metric::FrontVowelF2,
            assessment: assess_front_vowel(i_f2, band),
            delta: i_f2,
        },
        Finding {
            metric: Metric::BackVowelF2,
            assessment: assess_back_vowel(u_f2, band),
            delta: u_f2,
        },
        Finding {
            metric: Metric::LowVowelF1,
            assessment: assess_low_vowel(a_f1, band),
            delta: a_f1,
        },
        Finding {
            metric: Metric::VowelSpaceArea,
            assessment: assess_area(area, config.thresholds.vsa_band_hz2),
            delta: area,
        },
    ]
}

fn assess_front_vowel(delta: f64, band: f64) -> Assessment {
    if delta > band {
        Assessment::TongueFronted
    } else if delta < -band {
        Assessment::TongueRetracted
    } else {
        Assessment::WithinNormalRange
    }
}

/// One-sided rule: only fronting is flagged for /u/.  A low F2 keeps the
/// back vowel inside its normal band.
fn assess_back_vowel(delta: f64, band: f64) -> Assessment {
    if delta > band {
        Assessment::TongueExcessivelyFronted
    } else {
        Assessment::WithinNormalRange
    }
}

fn assess_low_vowel(delta: f64, band: f64) -> Assessment {
    if delta > band {
        Assessment::TongueLowered
    } else if delta < -band {
        Assessment::TongueRaised
    } else {
        Assessment::WithinNormalRange
    }
}

fn assess_area(delta: f64, band: f64) -> Assessment {
    if delta < -band {
        Assessment::ReducedArticulatoryRange
    } else if delta > band {
        Assessment::IncreasedArticulatoryRange
    } else {
        Assessment::WithinNormalRange
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stable::StableEstimate;

    fn normative_estimates() -> StableEstimates {
        StableEstimates {
            i: StableEstimate { f1: 270.0, f2: 2290.0 },
            a: StableEstimate { f1: 730.0, f2: 1090.0 },
            u: StableEstimate { f1: 300.0, f2: 870.0 },
        }
    }

    #[test]
    fn order_is_fixed_and_all_rules_report() {
        let findings = compare(
            &normative_estimates(),
            308_600.0,
            308_600.0,
            &AnalysisConfig::default(),
        );
        let metrics: Vec<Metric> = findings.iter().map(|f| f.metric).collect();
        assert_eq!(
            metrics,
            vec![
                Metric::FrontVowelF2,
                Metric::BackVowelF2,
                Metric::LowVowelF1,
                Metric::VowelSpaceArea,
            ]
        );
        assert!(
            findings
                .iter()
                .all(|f| f.assessment == Assessment::WithinNormalRange)
        );
        assert!(findings.iter().all(|f| f.delta == 0.0));
    }

    #[test]
    fn front_vowel_bands() {
        assert_eq!(assess_front_vowel(100.0, 100.0), Assessment::WithinNormalRange);
        assert_eq!(assess_front_vowel(100.01, 100.0), Assessment::TongueFronted);
        assert_eq!(assess_front_vowel(-100.0, 100.0), Assessment::WithinNormalRange);
        assert_eq!(assess_front_vowel(-100.01, 100.0), Assessment::TongueRetracted);
    }

    #[test]
    fn back_vowel_flags_only_fronting() {
        assert_eq!(assess_back_vowel(180.0, 100.0), Assessment::TongueExcessivelyFronted);
        // Far below the normative F2 – still unflagged for the back vowel.
        assert_eq!(assess_back_vowel(-170.0, 100.0), Assessment::WithinNormalRange);
        assert_eq!(assess_back_vowel(-1000.0, 100.0), Assessment::WithinNormalRange);
    }

    #[test]
    fn low_vowel_bands() {
        assert_eq!(assess_low_vowel(130.0, 100.0), Assessment::TongueLowered);
        assert_eq!(assess_low_vowel(-130.0, 100.0), Assessment::TongueRaised);
        assert_eq!(assess_low_vowel(99.9, 100.0), Assessment::WithinNormalRange);
    }

    #[test]
    fn area_bands() {
        assert_eq!(assess_area(-10_000.0, 10_000.0), Assessment::WithinNormalRange);
        assert_eq!(assess_area(-10_000.5, 10_000.0), Assessment::ReducedArticulatoryRange);
        assert_eq!(assess_area(10_000.5, 10_000.0), Assessment::IncreasedArticulatoryRange);
    }

    #[test]
    fn fronted_back_vowel_carries_exact_delta() {
        let mut estimates = normative_estimates();
        estimates.u.f2 = 1050.0;

        let findings = compare(&estimates, 300_000.0, 308_600.0, &AnalysisConfig::default());
        let u = &findings[1];
        assert_eq!(u.assessment, Assessment::TongueExcessivelyFronted);
        assert_eq!(u.delta, 180.0);
        assert!(u.to_string().contains("180.00 Hz"));
    }

    #[test]
    fn within_normal_messages_have_no_numbers() {
        let finding = Finding {
            metric: Metric::LowVowelF1,
            assessment: Assessment::WithinNormalRange,
            delta: 42.0,
        };
        assert_eq!(finding.to_string(), "F1 of /a/ is within the normal range.");
    }

    #[test]
    fn area_message_uses_the_magnitude() {
        let finding = Finding {
            metric: Metric::VowelSpaceArea,
            assessment: Assessment::ReducedArticulatoryRange,
            delta: -41_400.0,
        };
        let message = finding.to_string();
        assert!(message.contains("41400.00 Hz²"), "{message}");
        assert!(message.contains("smaller"));
    }

    #[test]
    fn serialized_finding_includes_the_message() {
        let finding = Finding {
            metric: Metric::BackVowelF2,
            assessment: Assessment::TongueExcessivelyFronted,
            delta: 180.0,
        };
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["metric"], "BackVowelF2");
        assert_eq!(json["delta"], 180.0);
        assert!(json["message"].as_str().unwrap().contains("excessively fronted"));
    }
}
