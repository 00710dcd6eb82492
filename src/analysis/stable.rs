use serde::Serialize;

use super::AnalysisError;
use super::config::Thresholds;
use super::vsa::VowelTriangle;
use crate::data::model::{FormantSample, Vowel};

// ---------------------------------------------------------------------------
// Stable value extraction – one representative (F1, F2) per vowel
// ---------------------------------------------------------------------------

/// Representative formant pair derived for one vowel.  Immutable once
/// computed; everything downstream reads, never edits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StableEstimate {
    pub f1: f64,
    pub f2: f64,
}

/// Stable estimates for all three vowels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StableEstimates {
    pub i: StableEstimate,
    pub a: StableEstimate,
    pub u: StableEstimate,
}

impl StableEstimates {
    /// Estimate for one vowel.
    pub fn get(&self, vowel: Vowel) -> StableEstimate {
        match vowel {
            Vowel::I => self.i,
            Vowel::A => self.a,
            Vowel::U => self.u,
        }
    }

    /// The participant's vowel triangle.
    pub fn triangle(&self) -> VowelTriangle {
        VowelTriangle::new(
            (self.i.f1, self.i.f2),
            (self.a.f1, self.a.f2),
            (self.u.f1, self.u.f2),
        )
    }
}

/// Most frequent value, or `None` when no value occurs at least twice.
/// Ties between equally frequent values resolve to the smallest.
pub fn mode(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let mut best: Option<(usize, f64)> = None;
    let mut i = 0;
    while i < sorted.len() {
        let value = sorted[i];
        let mut run = 1;
        while i + run < sorted.len() && sorted[i + run] == value {
            run += 1;
        }
        if run >= 2 && best.map_or(true, |(count, _)| run > count) {
            best = Some((run, value));
        }
        i += run;
    }
    best.map(|(_, value)| value)
}

/// Middle value; the mean of the two middle values for even counts.
///
/// Panics on an empty slice – callers reject empty sample sets first.
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// The mode when it sits strictly within `window` Hz of the median, the
/// median otherwise (including when there is no mode at all).
pub fn stable_value(values: &[f64], window: f64) -> f64 {
    let median = median(values);
    match mode(values) {
        Some(mode) if (mode - median).abs() < window => mode,
        _ => median,
    }
}

/// Derive the stable (F1, F2) estimate for one vowel's cleaned samples.
/// The two axes are reduced independently, each with its own stability
/// window.
pub fn stable_estimate(
    vowel: Vowel,
    samples: &[FormantSample],
    thresholds: &Thresholds,
) -> Result<StableEstimate, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::InsufficientData { vowel });
    }

    let f1: Vec<f64> = samples.iter().map(|s| s.f1).collect();
    let f2: Vec<f64> = samples.iter().map(|s| s.f2).collect();

    Ok(StableEstimate {
        f1: stable_value(&f1, thresholds.f1_stability_hz),
        f2: stable_value(&f2, thresholds.f2_stability_hz),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(pairs: &[(f64, f64)]) -> Vec<FormantSample> {
        pairs
            .iter()
            .map(|&(f1, f2)| FormantSample { f1, f2 })
            .collect()
    }

    #[test]
    fn mode_picks_most_frequent() {
        assert_eq!(mode(&[731.0, 730.0, 730.0, 735.0]), Some(730.0));
    }

    #[test]
    fn mode_is_none_without_repeats() {
        assert_eq!(mode(&[730.0, 731.0, 735.0]), None);
        assert_eq!(mode(&[730.0]), None);
        assert_eq!(mode(&[]), None);
    }

    #[test]
    fn mode_tie_resolves_to_smallest() {
        assert_eq!(mode(&[5.0, 3.0, 5.0, 3.0, 1.0]), Some(3.0));
        // Input order does not matter.
        assert_eq!(mode(&[1.0, 5.0, 5.0, 3.0, 3.0]), Some(3.0));
    }

    #[test]
    fn median_odd_and_even_counts() {
        assert_eq!(median(&[900.0, 730.0, 731.0]), 731.0);
        assert_eq!(median(&[730.0, 730.0, 731.0, 900.0]), 730.5);
    }

    #[test]
    fn stable_value_prefers_a_nearby_mode() {
        // mode 730, median 730.5 – well inside a 50 Hz window.
        assert_eq!(stable_value(&[730.0, 730.0, 731.0, 900.0], 50.0), 730.0);
    }

    #[test]
    fn stable_value_rejects_a_distant_mode() {
        // mode 300, median 205 – |diff| = 95 exceeds the window.
        assert_eq!(stable_value(&[100.0, 110.0, 300.0, 300.0], 50.0), 205.0);
    }

    #[test]
    fn boundary_distance_selects_the_median() {
        // mode 100, median 150 – |diff| equals the window exactly.
        let values = [100.0, 100.0, 200.0, 200.0];
        assert_eq!(mode(&values), Some(100.0));
        assert_eq!(median(&values), 150.0);
        assert_eq!(stable_value(&values, 50.0), 150.0);
    }

    #[test]
    fn no_mode_falls_back_to_median() {
        assert_eq!(stable_value(&[270.0, 280.0, 300.0], 50.0), 280.0);
    }

    #[test]
    fn axes_are_reduced_independently() {
        // F1 has a stable mode; F2 has no repeats and falls to the median.
        let s = samples(&[(730.0, 1080.0), (730.0, 1090.0), (731.0, 1100.0)]);
        let estimate = stable_estimate(Vowel::A, &s, &Thresholds::default()).unwrap();
        assert_eq!(estimate.f1, 730.0);
        assert_eq!(estimate.f2, 1090.0);
    }

    #[test]
    fn steady_vowel_reduces_to_its_plateau() {
        let s = samples(&[
            (730.0, 1090.0),
            (730.0, 1090.0),
            (731.0, 1095.0),
            (900.0, 1300.0),
        ]);
        let estimate = stable_estimate(Vowel::A, &s, &Thresholds::default()).unwrap();
        assert_eq!(estimate.f1, 730.0);
        assert_eq!(estimate.f2, 1090.0);
    }

    #[test]
    fn empty_sample_set_is_insufficient() {
        let err = stable_estimate(Vowel::U, &[], &Thresholds::default()).unwrap_err();
        assert_eq!(err, AnalysisError::InsufficientData { vowel: Vowel::U });
        assert!(err.to_string().contains("/u/"));
    }

    #[test]
    fn estimates_build_the_participant_triangle() {
        let estimates = StableEstimates {
            i: StableEstimate { f1: 270.0, f2: 2290.0 },
            a: StableEstimate { f1: 730.0, f2: 1090.0 },
            u: StableEstimate { f1: 300.0, f2: 870.0 },
        };
        let vertices = estimates.triangle().vertices();
        assert_eq!(vertices[0], (270.0, 2290.0));
        assert_eq!(vertices[1], (730.0, 1090.0));
        assert_eq!(vertices[2], (300.0, 870.0));
    }
}
