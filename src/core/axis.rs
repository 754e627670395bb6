use ordered_float::OrderedFloat;

use crate::core::scale::LinearScale;
use crate::error::{PlotError, PlotResult};

/// Value transform applied before linear pixel mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisTransform {
    Linear,
    /// Log10 spacing. Every value on the axis must be > 0.
    Log10,
}

impl AxisTransform {
    /// Maps a raw value into the transformed domain.
    pub fn apply(self, value: f64) -> PlotResult<f64> {
        if !value.is_finite() {
            return Err(PlotError::InvalidArgument(
                "axis value must be finite".to_owned(),
            ));
        }

        match self {
            Self::Linear => Ok(value),
            Self::Log10 => {
                if value <= 0.0 {
                    return Err(PlotError::InvalidArgument(
                        "log axis requires values > 0".to_owned(),
                    ));
                }
                Ok(value.log10())
            }
        }
    }

    /// Maps a transformed-domain value back to a raw value.
    pub fn invert(self, value: f64) -> PlotResult<f64> {
        if !value.is_finite() {
            return Err(PlotError::InvalidArgument(
                "transformed axis value must be finite".to_owned(),
            ));
        }

        match self {
            Self::Linear => Ok(value),
            Self::Log10 => {
                let raw = 10_f64.powf(value);
                if !raw.is_finite() || raw <= 0.0 {
                    return Err(PlotError::InvalidArgument(
                        "inverted log axis value must be finite and > 0".to_owned(),
                    ));
                }
                Ok(raw)
            }
        }
    }
}

/// Tuning controls for axis domain fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTuning {
    pub padding_ratio: f64,
    pub min_span_absolute: f64,
}

impl Default for AxisTuning {
    fn default() -> Self {
        Self {
            padding_ratio: 0.05,
            min_span_absolute: 1e-9,
        }
    }
}

impl AxisTuning {
    fn validate(self) -> PlotResult<Self> {
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(PlotError::InvalidArgument(
                "axis padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(PlotError::InvalidArgument(
                "axis min span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// One chart axis: a raw data domain mapped through an optional log
/// transform onto the normalized [0, 1] range.
///
/// Padding is applied in the transformed domain so log axes pad by decade
/// fraction rather than raw magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    transform: AxisTransform,
    linear: LinearScale,
    raw_start: f64,
    raw_end: f64,
}

impl AxisScale {
    /// Creates an axis over an explicit raw domain.
    pub fn new(raw_min: f64, raw_max: f64, transform: AxisTransform) -> PlotResult<Self> {
        let transformed_min = transform.apply(raw_min)?;
        let transformed_max = transform.apply(raw_max)?;
        let linear = LinearScale::new(transformed_min, transformed_max)?;
        Ok(Self {
            transform,
            linear,
            raw_start: raw_min,
            raw_end: raw_max,
        })
    }

    /// Fits an axis to data values with default tuning.
    pub fn from_values(values: &[f64], transform: AxisTransform) -> PlotResult<Self> {
        Self::from_values_tuned(values, transform, AxisTuning::default())
    }

    /// Fits an axis to data values using explicit tuning.
    pub fn from_values_tuned(
        values: &[f64],
        transform: AxisTransform,
        tuning: AxisTuning,
    ) -> PlotResult<Self> {
        let tuning = tuning.validate()?;
        let (raw_min, raw_max) = extent(values)?;

        let transformed_min = transform.apply(raw_min)?;
        let transformed_max = transform.apply(raw_max)?;
        let (base_min, base_max) =
            normalize_range(transformed_min, transformed_max, tuning.min_span_absolute)?;
        let span = base_max - base_min;
        let padded_min = base_min - span * tuning.padding_ratio;
        let padded_max = base_max + span * tuning.padding_ratio;

        let domain_min = transform.invert(padded_min)?;
        let domain_max = transform.invert(padded_max)?;
        Self::new(domain_min, domain_max, transform)
    }

    #[must_use]
    pub fn transform(self) -> AxisTransform {
        self.transform
    }

    /// Returns the raw (untransformed) axis domain.
    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.raw_start, self.raw_end)
    }

    /// Maps a raw value to its normalized [0, 1] axis position.
    pub fn value_to_ratio(self, value: f64) -> PlotResult<f64> {
        let transformed = self.transform.apply(value)?;
        self.linear.normalize(transformed)
    }

    /// Inverse of [`AxisScale::value_to_ratio`].
    pub fn ratio_to_value(self, ratio: f64) -> PlotResult<f64> {
        let transformed = self.linear.denormalize(ratio)?;
        self.transform.invert(transformed)
    }

    /// Builds tick values in the raw domain.
    ///
    /// Linear axes space ticks evenly. Log axes walk the 1/2/5 decade
    /// ladder and resample down to the requested count when the domain
    /// spans many decades.
    pub fn ticks(self, tick_count: usize) -> PlotResult<Vec<f64>> {
        if tick_count == 0 {
            return Ok(Vec::new());
        }
        if tick_count == 1 {
            return Ok(vec![self.raw_start]);
        }

        match self.transform {
            AxisTransform::Linear => {
                let mut ticks = Vec::with_capacity(tick_count);
                let denominator = (tick_count - 1) as f64;
                for index in 0..tick_count {
                    let ratio = (index as f64) / denominator;
                    ticks.push(self.ratio_to_value(ratio)?);
                }
                Ok(ticks)
            }
            AxisTransform::Log10 => {
                let mut ticks = log_ladder_ticks(self.raw_start, self.raw_end)?;
                if ticks.len() > tick_count {
                    ticks = evenly_sample_ticks(ticks, tick_count);
                }
                Ok(ticks)
            }
        }
    }
}

/// Total-order min/max over a non-empty finite slice.
pub(crate) fn extent(values: &[f64]) -> PlotResult<(f64, f64)> {
    if values.is_empty() {
        return Err(PlotError::InvalidArgument(
            "axis cannot be fitted from empty data".to_owned(),
        ));
    }

    let mut min = OrderedFloat(f64::INFINITY);
    let mut max = OrderedFloat(f64::NEG_INFINITY);
    for &value in values {
        if !value.is_finite() {
            return Err(PlotError::InvalidArgument(
                "axis values must be finite".to_owned(),
            ));
        }
        min = min.min(OrderedFloat(value));
        max = max.max(OrderedFloat(value));
    }

    Ok((min.into_inner(), max.into_inner()))
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> PlotResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(PlotError::InvalidArgument(
            "axis range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}

fn log_ladder_ticks(start: f64, end: f64) -> PlotResult<Vec<f64>> {
    if start <= 0.0 || end <= 0.0 {
        return Err(PlotError::InvalidArgument(
            "log axis requires values > 0".to_owned(),
        ));
    }

    let min = start.min(end);
    let max = start.max(end);
    let min_exp = min.log10().floor() as i32;
    let max_exp = max.log10().ceil() as i32;

    let mut ticks = Vec::new();
    for exp in min_exp..=max_exp {
        let decade = 10_f64.powi(exp);
        for multiplier in [1.0, 2.0, 5.0] {
            let candidate = decade * multiplier;
            if candidate >= min && candidate <= max {
                ticks.push(candidate);
            }
        }
    }

    if !ticks.iter().any(|value| approx_equal(*value, min)) {
        ticks.push(min);
    }
    if !ticks.iter().any(|value| approx_equal(*value, max)) {
        ticks.push(max);
    }

    ticks.sort_by(|lhs, rhs| lhs.total_cmp(rhs));
    ticks.dedup_by(|lhs, rhs| approx_equal(*lhs, *rhs));
    Ok(ticks)
}

fn evenly_sample_ticks(ticks: Vec<f64>, target: usize) -> Vec<f64> {
    if ticks.len() <= target || target == 0 {
        return ticks;
    }
    if target == 1 {
        return vec![ticks[0]];
    }

    let last_index = ticks.len() - 1;
    let mut sampled = Vec::with_capacity(target);
    for step in 0..target {
        let ratio = (step as f64) / ((target - 1) as f64);
        let index = (ratio * (last_index as f64)).round() as usize;
        let value = ticks[index.min(last_index)];
        if sampled
            .last()
            .map(|prev| approx_equal(*prev, value))
            .unwrap_or(false)
        {
            continue;
        }
        sampled.push(value);
    }

    sampled
}

fn approx_equal(lhs: f64, rhs: f64) -> bool {
    let scale = lhs.abs().max(rhs.abs()).max(1.0);
    (lhs - rhs).abs() <= scale * 1e-12
}
