use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Vowel – the three cardinal vowels of the triangle
// ---------------------------------------------------------------------------

/// Cardinal vowel label. Variant order is the canonical triangle order
/// /i/ → /a/ → /u/, so `BTreeMap<Vowel, _>` iterates in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Vowel {
    I,
    A,
    U,
}

impl Vowel {
    /// All vowels in canonical order.
    pub const ALL: [Vowel; 3] = [Vowel::I, Vowel::A, Vowel::U];

    /// Lowercase letter used in file names and labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vowel::I => "i",
            Vowel::A => "a",
            Vowel::U => "u",
        }
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RawValue – a single cell of a loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed table cell. Formant tables arrive with whatever
/// columns the tracking tool emitted; cells stay raw until the sample
/// filter coerces the two formant columns.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Float(f64),
    Integer(i64),
    Text(String),
    Bool(bool),
    Null,
}

impl RawValue {
    /// Try to interpret the value as an `f64`. Text is parsed after
    /// trimming; booleans and nulls never coerce.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Float(v) => Some(*v),
            RawValue::Integer(i) => Some(*i as f64),
            RawValue::Text(s) => s.trim().parse().ok(),
            RawValue::Bool(_) | RawValue::Null => None,
        }
    }
}

/// One table row: column name → cell.
pub type RawRecord = BTreeMap<String, RawValue>;

/// A loaded table before any formant-specific processing.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Column names in file order (union of keys for record formats).
    pub columns: Vec<String>,
    pub rows: Vec<RawRecord>,
}

// ---------------------------------------------------------------------------
// FormantSample – one cleaned measurement frame
// ---------------------------------------------------------------------------

/// A single measurement frame. Both values are finite Hz, guaranteed by
/// the sample filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormantSample {
    pub f1: f64,
    pub f2: f64,
}

// ---------------------------------------------------------------------------
// FormantDataset – cleaned samples for all vowels
// ---------------------------------------------------------------------------

/// Per-vowel cleaned samples. Analysis needs all three vowels; the app
/// fills this one vowel at a time.
#[derive(Debug, Clone, Default)]
pub struct FormantDataset {
    samples: BTreeMap<Vowel, Vec<FormantSample>>,
}

impl FormantDataset {
    /// Replace the samples for one vowel.
    pub fn insert(&mut self, vowel: Vowel, samples: Vec<FormantSample>) {
        self.samples.insert(vowel, samples);
    }

    /// Samples for a vowel; empty slice when the vowel has not been loaded.
    pub fn samples(&self, vowel: Vowel) -> &[FormantSample] {
        self.samples.get(&vowel).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True once every vowel has been loaded (possibly with zero valid
    /// frames – insufficiency is the extractor's error, not absence).
    pub fn is_complete(&self) -> bool {
        Vowel::ALL.iter().all(|v| self.samples.contains_key(v))
    }

    /// Number of vowels loaded so far.
    pub fn loaded_count(&self) -> usize {
        self.samples.len()
    }

    /// Remove all loaded samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
