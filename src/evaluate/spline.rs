use nalgebra::Point2;

use crate::curve::{apply_tension, BSpline};
use crate::misc::{EvaluationResult, FloatingPoint};
use crate::path::{ControlPointSet, EvaluatedPath, GroupId};

use super::batch::evaluate_groups;
use super::EvaluationOptions;

/// Evaluate each group of control points as a B-spline
///
/// Every group yields exactly `options.samples` points, evenly spaced in the
/// curve parameter. The knot layout follows `options.spline_type` and the
/// degree is lowered for groups with too few points, so a 2 point group is a
/// straight segment. Open curves are bundled by `options.tension` first.
///
/// # Example
/// ```
/// use curvepath::prelude::*;
/// use nalgebra::Point2;
///
/// let points = ControlPointSet::from_positions([
///     (1, Point2::new(0., 0.)),
///     (1, Point2::new(1., 2.)),
///     (1, Point2::new(2., 0.)),
/// ]);
/// let options = EvaluationOptions::default().with_samples(5);
/// let path = evaluate(&points, &options).unwrap();
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.points()[2].position(), &Point2::new(1., 1.));
/// assert_eq!(path.points()[4].index(), 1.);
/// ```
pub fn evaluate<T: FloatingPoint, G: GroupId>(
    points: &ControlPointSet<T, G>,
    options: &EvaluationOptions<T>,
) -> EvaluationResult<EvaluatedPath<T, G>> {
    let closed = options.spline_type.is_closed();
    evaluate_groups(points, options, closed, true, |controls| {
        let controls = bundle(controls, options, closed);
        let spline = options.spline_type.build(controls, options.degree)?;
        Ok(spline.sample_regular(options.samples))
    })
}

/// Evaluate each group as a single Bezier curve of degree `# of points - 1`
/// The `degree` and `spline_type` options are ignored.
pub fn evaluate_bezier<T: FloatingPoint, G: GroupId>(
    points: &ControlPointSet<T, G>,
    options: &EvaluationOptions<T>,
) -> EvaluationResult<EvaluatedPath<T, G>> {
    evaluate_groups(points, options, false, true, |controls| {
        let bezier = BSpline::try_bezier(bundle(controls, options, false))?;
        Ok(bezier.sample_regular(options.samples))
    })
}

fn bundle<T: FloatingPoint>(
    controls: &[Point2<T>],
    options: &EvaluationOptions<T>,
    closed: bool,
) -> Vec<Point2<T>> {
    if closed {
        controls.to_vec()
    } else {
        apply_tension(controls, options.tension)
    }
}
