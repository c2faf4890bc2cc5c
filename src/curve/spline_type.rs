use std::str::FromStr;

use nalgebra::Point2;

use crate::misc::{EvaluationError, FloatingPoint};

use super::BSpline;

/// Knot layout of a B-spline built from a group of control points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SplineType {
    /// End knots repeated `degree + 1` times, the curve touches both end points
    #[default]
    Clamped,
    /// Uniform knots, the curve stays inside the control polygon
    Open,
    /// Uniform knots over wrapped control points, the curve is a loop
    Closed,
}

impl SplineType {
    pub fn build<T: FloatingPoint>(
        &self,
        control_points: Vec<Point2<T>>,
        degree: usize,
    ) -> anyhow::Result<BSpline<T>> {
        match self {
            SplineType::Clamped => BSpline::try_clamped(control_points, degree),
            SplineType::Open => BSpline::try_open(control_points, degree),
            SplineType::Closed => BSpline::try_closed(control_points, degree),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, SplineType::Closed)
    }
}

impl FromStr for SplineType {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clamped" => Ok(SplineType::Clamped),
            "open" => Ok(SplineType::Open),
            "closed" => Ok(SplineType::Closed),
            other => Err(EvaluationError::invalid_argument(format!(
                "unsupported spline type `{other}`"
            ))),
        }
    }
}
