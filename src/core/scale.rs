use crate::error::{PlotError, PlotResult};

/// Linear mapping between a data domain and the normalized [0, 1] range.
///
/// Axis code composes this with an optional log transform and with the
/// pixel extent of the plot area, so the same scale serves both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> PlotResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(PlotError::InvalidArgument(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps a domain value to its position in [0, 1] over the domain span.
    ///
    /// Values outside the domain map outside [0, 1]; callers decide whether
    /// that is acceptable for the primitive being produced.
    pub fn normalize(self, value: f64) -> PlotResult<f64> {
        if !value.is_finite() {
            return Err(PlotError::InvalidArgument(
                "value must be finite".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        Ok((value - self.domain_start) / span)
    }

    /// Inverse of [`LinearScale::normalize`].
    pub fn denormalize(self, ratio: f64) -> PlotResult<f64> {
        if !ratio.is_finite() {
            return Err(PlotError::InvalidArgument(
                "ratio must be finite".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        Ok(self.domain_start + ratio * span)
    }
}
