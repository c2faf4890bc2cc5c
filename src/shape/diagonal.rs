use nalgebra::Point2;

use crate::curve::BSpline;
use crate::evaluate::batch::evaluate_groups;
use crate::evaluate::EvaluationOptions;
use crate::misc::{EvaluationError, EvaluationResult, FloatingPoint};
use crate::path::{ControlPointSet, EvaluatedPath, GroupId};

/// Shape of the diagonals drawn between two points
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagonalOptions<T> {
    /// How far the inner control points are pushed along the main axis, 0.5 meets in the middle
    pub strength: T,
    /// Leave the end points vertically instead of horizontally
    pub flipped: bool,
}

impl<T: FloatingPoint> Default for DiagonalOptions<T> {
    fn default() -> Self {
        Self {
            strength: T::from_f64(0.5).unwrap(),
            flipped: false,
        }
    }
}

impl<T: FloatingPoint> DiagonalOptions<T> {
    /// Control polygon of the cubic Bezier running from `from` to `to`
    pub fn control_points(&self, from: &Point2<T>, to: &Point2<T>) -> [Point2<T>; 4] {
        let delta = to - from;
        let (lead, trail) = if self.flipped {
            (
                Point2::new(from.x, from.y + delta.y * self.strength),
                Point2::new(to.x, to.y - delta.y * self.strength),
            )
        } else {
            (
                Point2::new(from.x + delta.x * self.strength, from.y),
                Point2::new(to.x - delta.x * self.strength, to.y),
            )
        };
        [*from, lead, trail, *to]
    }
}

/// Evaluate tree-style diagonals, each group holding a `from` and a `to` point
///
/// The diagonal is a cubic Bezier leaving both end points parallel to the x axis
/// (y axis when flipped). Groups that do not hold exactly two points are dropped,
/// a lone point included.
///
/// # Example
/// ```
/// use curvepath::prelude::*;
/// use nalgebra::Point2;
///
/// let edges = ControlPointSet::from_positions([
///     ("root-leaf", Point2::new(0., 0.)),
///     ("root-leaf", Point2::new(2., 1.)),
/// ]);
/// let options = EvaluationOptions::default().with_samples(3);
/// let path = evaluate_diagonals(&edges, &DiagonalOptions::default(), &options).unwrap();
/// assert_eq!(path.points()[1].position(), &Point2::new(1., 0.5));
/// ```
pub fn evaluate_diagonals<T: FloatingPoint, G: GroupId>(
    points: &ControlPointSet<T, G>,
    diagonal: &DiagonalOptions<T>,
    options: &EvaluationOptions<T>,
) -> EvaluationResult<EvaluatedPath<T, G>> {
    if !diagonal.strength.is_finite() {
        return Err(EvaluationError::invalid_argument(format!(
            "diagonal strength must be finite, got {:?}",
            diagonal.strength
        )));
    }

    evaluate_groups(points, options, false, false, |controls| {
        let [from, to] = controls else {
            anyhow::bail!("a diagonal needs exactly 2 points, got {}", controls.len());
        };
        let bezier = BSpline::try_bezier(diagonal.control_points(from, to).to_vec())?;
        Ok(bezier.sample_regular(options.samples))
    })
}
