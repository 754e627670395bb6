use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Ordered time/value samples for one trajectory.
///
/// `t_vals` carries no ordering requirement; the curve is drawn sample to
/// sample in the order given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    t_vals: Vec<f64>,
    sol_vals: Vec<f64>,
}

impl Series {
    pub fn new(t_vals: Vec<f64>, sol_vals: Vec<f64>) -> PlotResult<Self> {
        if t_vals.is_empty() || sol_vals.is_empty() {
            return Err(PlotError::InvalidArgument(
                "expected a non-empty list of values but got an empty list".to_owned(),
            ));
        }
        if t_vals.len() != sol_vals.len() {
            return Err(PlotError::InvalidArgument(format!(
                "time and value sequences must have equal length, got {} and {}",
                t_vals.len(),
                sol_vals.len()
            )));
        }
        ensure_finite(&t_vals, "time values")?;
        ensure_finite(&sol_vals, "solution values")?;

        Ok(Self { t_vals, sol_vals })
    }

    #[must_use]
    pub fn t_vals(&self) -> &[f64] {
        &self.t_vals
    }

    #[must_use]
    pub fn sol_vals(&self) -> &[f64] {
        &self.sol_vals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.t_vals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t_vals.is_empty()
    }
}

/// Three co-evolving sub-populations over a shared time axis.
///
/// The bundle owns its time axis; composite rendering always plots against
/// it, so there is no separate time sequence to fall out of sync with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeBundle {
    t_vals: Vec<f64>,
    tumor: Vec<f64>,
    effector_a: Vec<f64>,
    effector_b: Vec<f64>,
}

impl CompositeBundle {
    pub fn new(
        t_vals: Vec<f64>,
        tumor: Vec<f64>,
        effector_a: Vec<f64>,
        effector_b: Vec<f64>,
    ) -> PlotResult<Self> {
        if t_vals.is_empty() {
            return Err(PlotError::InvalidArgument(
                "expected a non-empty list of values but got an empty list".to_owned(),
            ));
        }
        for (values, name) in [
            (&tumor, "tumor"),
            (&effector_a, "effector-a"),
            (&effector_b, "effector-b"),
        ] {
            if values.len() != t_vals.len() {
                return Err(PlotError::InvalidArgument(format!(
                    "{name} population must match the time axis length, got {} and {}",
                    values.len(),
                    t_vals.len()
                )));
            }
        }
        ensure_finite(&t_vals, "time values")?;
        ensure_finite(&tumor, "tumor population")?;
        ensure_finite(&effector_a, "effector-a population")?;
        ensure_finite(&effector_b, "effector-b population")?;

        Ok(Self {
            t_vals,
            tumor,
            effector_a,
            effector_b,
        })
    }

    #[must_use]
    pub fn t_vals(&self) -> &[f64] {
        &self.t_vals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.t_vals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t_vals.is_empty()
    }

    /// Normalizes the three populations into fractions of their per-index
    /// total. A zero total leaves the division undefined, so it fails
    /// before any drawing can happen.
    pub fn fractions(&self) -> PlotResult<CompositeFractions> {
        let len = self.t_vals.len();
        let mut tumor = Vec::with_capacity(len);
        let mut effector_a = Vec::with_capacity(len);
        let mut effector_b = Vec::with_capacity(len);

        for index in 0..len {
            let total = self.tumor[index] + self.effector_a[index] + self.effector_b[index];
            if !total.is_finite() || total == 0.0 {
                return Err(PlotError::InvalidArgument(format!(
                    "population total must be non-zero to normalize, got {total} at index {index}"
                )));
            }
            tumor.push(self.tumor[index] / total);
            effector_a.push(self.effector_a[index] / total);
            effector_b.push(self.effector_b[index] / total);
        }

        Ok(CompositeFractions {
            tumor,
            effector_a,
            effector_b,
        })
    }
}

/// Per-index population fractions derived from a [`CompositeBundle`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeFractions {
    pub tumor: Vec<f64>,
    pub effector_a: Vec<f64>,
    pub effector_b: Vec<f64>,
}

/// Data selected for one render call.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotData {
    /// One curve of solution values against its own time axis.
    Single(Series),
    /// Three normalized sub-population curves against the bundle's time axis.
    Composite(CompositeBundle),
}

/// Validates dosage-event marker times ahead of scene construction.
pub fn validate_marks(marks: &[f64]) -> PlotResult<()> {
    if marks.is_empty() {
        return Err(PlotError::InvalidArgument(
            "expected a non-empty list of marker times".to_owned(),
        ));
    }
    ensure_finite(marks, "marker times")
}

fn ensure_finite(values: &[f64], name: &str) -> PlotResult<()> {
    if values.iter().any(|value| !value.is_finite()) {
        return Err(PlotError::InvalidArgument(format!(
            "{name} must be finite"
        )));
    }
    Ok(())
}
