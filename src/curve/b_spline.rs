use itertools::Itertools;
use nalgebra::Point2;

use crate::misc::{scalar, FloatingPoint};
use crate::prelude::KnotVector;

/// Non-rational B-spline curve in the plane
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BSpline<T: FloatingPoint> {
    control_points: Vec<Point2<T>>,
    degree: usize,
    /// knot vector for the B-spline
    /// the length of the knot vector is equal to the `# of control points + degree + 1`
    knots: KnotVector<T>,
}

impl<T: FloatingPoint> BSpline<T> {
    /// Create a new B-spline curve
    /// # Failures
    /// - if the degree is zero
    /// - if the number of control points is not greater than the degree
    /// - the number of knots is not equal to the number of control points + the degree + 1
    /// - the knots are not non-decreasing
    ///
    /// # Example
    /// ```
    /// use curvepath::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let control_points = vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(1., 2.),
    ///     Point2::new(3., 2.),
    ///     Point2::new(4., 0.),
    /// ];
    /// let spline = BSpline::try_new(3, control_points, vec![0., 0., 0., 0., 1., 1., 1., 1.]);
    /// assert!(spline.is_ok());
    /// ```
    pub fn try_new(
        degree: usize,
        control_points: Vec<Point2<T>>,
        knots: Vec<T>,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(degree > 0, "Degree must be at least 1");
        anyhow::ensure!(
            control_points.len() > degree,
            "Too few control points for curve"
        );
        anyhow::ensure!(
            knots.len() == control_points.len() + degree + 1,
            "Invalid number of knots, got {}, expected {}",
            knots.len(),
            control_points.len() + degree + 1
        );
        anyhow::ensure!(
            knots.iter().tuple_windows().all(|(a, b)| a <= b),
            "Knot vector must be non-decreasing"
        );

        Ok(Self {
            degree,
            control_points,
            knots: KnotVector::new(knots),
        })
    }

    /// Create a clamped uniform B-spline passing through the first and last control points
    /// The degree is lowered to `# of control points - 1` when there are too few points for it.
    pub fn try_clamped(control_points: Vec<Point2<T>>, degree: usize) -> anyhow::Result<Self> {
        let degree = effective_degree(control_points.len(), degree)?;
        let knots = KnotVector::clamped(control_points.len(), degree);
        Self::try_new(degree, control_points, knots.to_vec())
    }

    /// Create an open uniform B-spline
    /// The curve starts and ends inside the control polygon instead of at its end points.
    pub fn try_open(control_points: Vec<Point2<T>>, degree: usize) -> anyhow::Result<Self> {
        let degree = effective_degree(control_points.len(), degree)?;
        let knots = KnotVector::open(control_points.len(), degree);
        Self::try_new(degree, control_points, knots.to_vec())
    }

    /// Create a closed (periodic) uniform B-spline
    /// The first `degree` control points are wrapped to the end so the curve closes on itself.
    pub fn try_closed(control_points: Vec<Point2<T>>, degree: usize) -> anyhow::Result<Self> {
        let degree = effective_degree(control_points.len(), degree)?;
        let mut wrapped = control_points.clone();
        wrapped.extend(control_points.iter().take(degree).copied());
        let knots = KnotVector::open(wrapped.len(), degree);
        Self::try_new(degree, wrapped, knots.to_vec())
    }

    /// Create a Bezier curve of degree `# of control points - 1`
    /// # Example
    /// ```
    /// use curvepath::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let bezier = BSpline::try_bezier(vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(1., 2.),
    ///     Point2::new(2., 0.),
    /// ])
    /// .unwrap();
    /// assert_eq!(bezier.degree(), 2);
    /// assert_eq!(bezier.point_at(0.5), Point2::new(1., 1.));
    /// ```
    pub fn try_bezier(control_points: Vec<Point2<T>>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            control_points.len() > 1,
            "Too few control points for curve"
        );
        let degree = control_points.len() - 1;
        Self::try_clamped(control_points, degree)
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn control_points(&self) -> &[Point2<T>] {
        &self.control_points
    }

    pub fn knots(&self) -> &KnotVector<T> {
        &self.knots
    }

    /// Parameter range of the curve
    pub fn knots_domain(&self) -> (T, T) {
        self.knots.domain(self.degree)
    }

    /// Evaluate the curve at a given parameter with de Boor's algorithm
    /// Parameters outside of the domain are evaluated on the nearest end span.
    pub fn point_at(&self, t: T) -> Point2<T> {
        let p = self.degree;
        let n = self.control_points.len() - 1;
        let span = self.knots.find_knot_span_index(n, p, t);

        let mut d: Vec<Point2<T>> = self.control_points[span - p..=span].to_vec();
        for r in 1..=p {
            for j in (r..=p).rev() {
                let lo = self.knots[span + j - p];
                let hi = self.knots[span + j + 1 - r];
                let denom = hi - lo;
                // repeated knots leave the left point in place
                let alpha = if denom > T::zero() {
                    (t - lo) / denom
                } else {
                    T::zero()
                };
                d[j] = Point2::from(d[j - 1].coords * (T::one() - alpha) + d[j].coords * alpha);
            }
        }
        d[p]
    }

    /// Sample the curve at a given number of evenly spaced parameters over its whole domain
    pub fn sample_regular(&self, samples: usize) -> Vec<Point2<T>> {
        let (start, end) = self.knots_domain();
        self.sample_regular_range(start, end, samples)
    }

    /// Sample the curve at a given number of points between the start and end parameters
    /// The last sample is evaluated exactly at `end`.
    pub fn sample_regular_range(&self, start: T, end: T, samples: usize) -> Vec<Point2<T>> {
        let last = samples.saturating_sub(1);
        let divisor: T = scalar(last.max(1));
        (0..samples)
            .map(|i| {
                let t = if i == last {
                    end
                } else {
                    start + (end - start) * scalar::<T>(i) / divisor
                };
                self.point_at(t)
            })
            .collect()
    }
}

/// Lower the degree until the control points can support it
fn effective_degree(count: usize, degree: usize) -> anyhow::Result<usize> {
    anyhow::ensure!(degree > 0, "Degree must be at least 1");
    anyhow::ensure!(count > 1, "Too few control points for curve");
    Ok(degree.min(count - 1))
}
