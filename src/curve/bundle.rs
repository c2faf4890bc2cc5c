use nalgebra::Point2;

use crate::misc::{scalar, FloatingPoint};

/// Pull control points toward the straight line between the first and last point.
///
/// Bundled edges share their inner control points, so lowering `tension` makes
/// them separate again: `1` keeps the points as they are, `0` flattens the
/// polygon onto its chord. End points are never moved.
///
/// # Example
/// ```
/// use curvepath::prelude::*;
/// use nalgebra::Point2;
///
/// let points = vec![Point2::new(0., 0.), Point2::new(1., 2.), Point2::new(2., 0.)];
/// let relaxed = apply_tension(&points, 0.5);
/// assert_eq!(relaxed[1], Point2::new(1., 1.));
/// ```
pub fn apply_tension<T: FloatingPoint>(points: &[Point2<T>], tension: T) -> Vec<Point2<T>> {
    if tension == T::one() || points.len() < 3 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let first = points[0];
    let chord = points[last] - first;
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i == 0 || i == last {
                return *p;
            }
            let straight = first + chord * (scalar::<T>(i) / scalar(last));
            Point2::from(p.coords * tension + straight.coords * (T::one() - tension))
        })
        .collect()
}
