use nalgebra::Point2;

use crate::misc::{EvaluationResult, FloatingPoint};
use crate::path::{ControlPointSet, EvaluatedPath, GroupId};

use super::aesthetics::locate;
use super::batch::evaluate_groups;
use super::EvaluationOptions;

/// Interpolate straight segments through each group of points
///
/// A group of two points is a link between its end points; longer groups are
/// walked segment by segment. Samples are spread evenly over the segments, not
/// over the arc length. With [`super::InterpolationMode::LinearPerSegment`] numeric
/// aesthetics blend along each segment while categorical ones hold the start
/// value, the end value being exposed through `end_attributes`.
///
/// # Example
/// ```
/// use curvepath::prelude::*;
/// use nalgebra::Point2;
///
/// let mut links = ControlPointSet::new();
/// links.push("edge", Point2::new(0., 0.)).numeric("alpha", 0.).unwrap();
/// links.push("edge", Point2::new(4., 2.)).numeric("alpha", 1.).unwrap();
/// let options = EvaluationOptions::default()
///     .with_samples(3)
///     .with_mode(InterpolationMode::LinearPerSegment);
/// let path = interpolate_linear(&links, &options).unwrap();
/// assert_eq!(path.points()[1].position(), &Point2::new(2., 1.));
/// assert_eq!(path.points()[1].attribute("alpha"), Some(&AttributeValue::Numeric(0.5)));
/// ```
pub fn interpolate_linear<T: FloatingPoint, G: GroupId>(
    points: &ControlPointSet<T, G>,
    options: &EvaluationOptions<T>,
) -> EvaluationResult<EvaluatedPath<T, G>> {
    evaluate_groups(points, options, false, true, |controls| {
        Ok(polyline_samples(controls, options.samples))
    })
}

/// Sample a polyline of at least two points at evenly spaced parameters
pub(crate) fn polyline_samples<T: FloatingPoint>(
    points: &[Point2<T>],
    samples: usize,
) -> Vec<Point2<T>> {
    let segments = points.len() - 1;
    (0..samples)
        .map(|j| {
            let (segment, t) = locate::<T>(j, samples, segments);
            let (a, b) = (points[segment], points[segment + 1]);
            if t == T::one() {
                b
            } else {
                a + (b - a) * t
            }
        })
        .collect()
}
