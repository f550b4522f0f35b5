//! The sixteen standard problem sizes T1–T16.

use crate::error::{Error, Result};

const PATIENT_COUNTS: [usize; 4] = [100, 200, 300, 400];
const DOCTOR_COUNTS: [usize; 4] = [10, 20, 30, 40];

/// A named problem size.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub id: String,
    pub patient_count: usize,
    pub doctor_count: usize,
}

impl Scenario {
    pub fn new(id: impl Into<String>, patient_count: usize, doctor_count: usize) -> Self {
        Self {
            id: id.into(),
            patient_count,
            doctor_count,
        }
    }

    /// T1–T16: every patient count crossed with every doctor count,
    /// patient count varying slowest.
    pub fn standard() -> Vec<Scenario> {
        PATIENT_COUNTS
            .iter()
            .flat_map(|&p| DOCTOR_COUNTS.iter().map(move |&d| (p, d)))
            .enumerate()
            .map(|(i, (p, d))| Scenario::new(format!("T{}", i + 1), p, d))
            .collect()
    }

    /// Looks up a standard scenario by id, e.g. `"T5"`.
    pub fn find(id: &str) -> Result<Scenario> {
        Self::standard()
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::UnknownScenario(id.to_string()))
    }
}
