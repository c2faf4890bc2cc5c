use std::str::FromStr;

use crate::curve::SplineType;
use crate::misc::{EvaluationError, EvaluationResult, FloatingPoint};

/// How the aesthetics of control points reach the sampled points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InterpolationMode {
    /// The sample nearest to each control point copies its aesthetics,
    /// every other sample is marked as interpolated and left unset
    ///
    /// Nearness is measured in the curve parameter: control `i` of `k` sits at
    /// `i / (k - 1)`, or `i / k` on a closed curve. Open and closed splines do
    /// not pass through their control points, so there a carried value can land
    /// about one control away from the drawn point closest to its control.
    #[default]
    Carry,
    /// Numeric aesthetics blend linearly between the control points around each sample,
    /// categorical ones hold the value of the segment start
    LinearPerSegment,
    /// The whole path takes the aesthetics of the group's first control point
    ConstantStyle,
}

impl FromStr for InterpolationMode {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "carry" => Ok(InterpolationMode::Carry),
            "linear" | "linear_per_segment" => Ok(InterpolationMode::LinearPerSegment),
            "constant" | "constant_style" => Ok(InterpolationMode::ConstantStyle),
            other => Err(EvaluationError::invalid_argument(format!(
                "unsupported interpolation mode `{other}`"
            ))),
        }
    }
}

/// Options shared by every path evaluator
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        default,
        bound(deserialize = "T: FloatingPoint + serde::Deserialize<'de>")
    )
)]
pub struct EvaluationOptions<T> {
    /// Number of points produced per group, at least 2
    pub samples: usize,
    /// Degree of the B-spline, lowered per group when it has too few control points
    pub degree: usize,
    /// Knot layout of the B-spline
    pub spline_type: SplineType,
    /// Aesthetic policy
    pub mode: InterpolationMode,
    /// Edge bundling strength in [0, 1], 1 keeps the control points untouched
    pub tension: T,
    /// Evaluate groups on the rayon thread pool
    pub parallel: bool,
}

impl<T: FloatingPoint> Default for EvaluationOptions<T> {
    fn default() -> Self {
        Self {
            samples: 100,
            degree: 3,
            spline_type: SplineType::Clamped,
            mode: InterpolationMode::Carry,
            tension: T::one(),
            parallel: false,
        }
    }
}

impl<T: FloatingPoint> EvaluationOptions<T> {
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    pub fn with_spline_type(mut self, spline_type: SplineType) -> Self {
        self.spline_type = spline_type;
        self
    }

    pub fn with_mode(mut self, mode: InterpolationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_tension(mut self, tension: T) -> Self {
        self.tension = tension;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the options before any group is touched
    pub fn validate(&self) -> EvaluationResult<()> {
        if self.samples < 2 {
            return Err(EvaluationError::invalid_argument(format!(
                "sample count must be at least 2, got {}",
                self.samples
            )));
        }
        if self.degree == 0 {
            return Err(EvaluationError::invalid_argument(
                "spline degree must be at least 1",
            ));
        }
        if !self.tension.is_finite() || self.tension < T::zero() || self.tension > T::one() {
            return Err(EvaluationError::invalid_argument(format!(
                "tension must lie in [0, 1], got {:?}",
                self.tension
            )));
        }
        Ok(())
    }
}
