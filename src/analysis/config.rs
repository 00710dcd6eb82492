use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::vsa::VowelTriangle;
use crate::data::model::Vowel;

// ---------------------------------------------------------------------------
// NormativeReference – the comparison target
// ---------------------------------------------------------------------------

/// Normative (F1, F2) target in Hz for one vowel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VowelTarget {
    pub f1: f64,
    pub f2: f64,
}

/// Normative formant targets for the three cardinal vowels.  The defaults
/// are the adult reference values the deviation bands were tuned against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormativeReference {
    pub i: VowelTarget,
    pub a: VowelTarget,
    pub u: VowelTarget,
}

impl Default for NormativeReference {
    fn default() -> Self {
        NormativeReference {
            i: VowelTarget { f1: 270.0, f2: 2290.0 },
            a: VowelTarget { f1: 730.0, f2: 1090.0 },
            u: VowelTarget { f1: 300.0, f2: 870.0 },
        }
    }
}

impl NormativeReference {
    /// Target for one vowel.
    pub fn target(&self, vowel: Vowel) -> VowelTarget {
        match vowel {
            Vowel::I => self.i,
            Vowel::A => self.a,
            Vowel::U => self.u,
        }
    }

    /// The normative vowel triangle.
    pub fn triangle(&self) -> VowelTriangle {
        VowelTriangle::new(
            (self.i.f1, self.i.f2),
            (self.a.f1, self.a.f2),
            (self.u.f1, self.u.f2),
        )
    }
}

// ---------------------------------------------------------------------------
// Thresholds – stability windows and deviation bands
// ---------------------------------------------------------------------------

/// All tunable cut-offs, in the units of the value they apply to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Max |mode − median| in Hz for the F1 mode to count as stable.
    pub f1_stability_hz: f64,
    /// Max |mode − median| in Hz for the F2 mode to count as stable.
    pub f2_stability_hz: f64,
    /// Half-width of the unremarkable band around a normative formant.
    pub formant_band_hz: f64,
    /// Half-width of the unremarkable band around the normative area.
    pub vsa_band_hz2: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            f1_stability_hz: 50.0,
            f2_stability_hz: 100.0,
            formant_band_hz: 100.0,
            vsa_band_hz2: 10_000.0,
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisConfig – the injectable bundle, serializable as JSON
// ---------------------------------------------------------------------------

/// Reference values plus thresholds.  A config file may contain either
/// section alone; the missing one falls back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub reference: NormativeReference,
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl AnalysisConfig {
    /// Read a config from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading analysis config from {}", path.display()))?;
        let config = serde_json::from_str(&text).context("parsing analysis config")?;
        Ok(config)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialising analysis config")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing analysis config to {}", path.display()))?;
        Ok(())
    }
}
