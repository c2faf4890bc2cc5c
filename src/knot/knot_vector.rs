use std::ops::Index;

use crate::misc::FloatingPoint;

/// Knot vector representation
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnotVector<T>(Vec<T>);

impl<T: FloatingPoint> KnotVector<T> {
    pub fn new(knots: Vec<T>) -> Self {
        Self(knots)
    }

    /// Create a clamped uniform knot vector for `count` control points
    /// a clamped knot vector has a degree + 1 multiplicity at the start and end
    /// # Example
    /// ```
    /// use curvepath::prelude::KnotVector;
    /// let knots: KnotVector<f64> = KnotVector::clamped(5, 2);
    /// assert_eq!(knots.to_vec(), vec![0., 0., 0., 1., 2., 3., 3., 3.]);
    /// ```
    pub fn clamped(count: usize, degree: usize) -> Self {
        let spans = count - degree;
        let mut knots = Vec::with_capacity(count + degree + 1);
        knots.extend(std::iter::repeat_n(T::zero(), degree + 1));
        for i in 1..spans {
            knots.push(T::from_usize(i).unwrap());
        }
        knots.extend(std::iter::repeat_n(T::from_usize(spans).unwrap(), degree + 1));
        Self(knots)
    }

    /// Create an open (unclamped) uniform knot vector for `count` control points
    /// # Example
    /// ```
    /// use curvepath::prelude::KnotVector;
    /// let knots: KnotVector<f64> = KnotVector::open(4, 2);
    /// assert_eq!(knots.to_vec(), vec![0., 1., 2., 3., 4., 5., 6.]);
    /// assert_eq!(knots.domain(2), (2., 4.));
    /// ```
    pub fn open(count: usize, degree: usize) -> Self {
        (0..count + degree + 1)
            .map(|i| T::from_usize(i).unwrap())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.0.clone()
    }

    /// Get the domain of the knot vector by degree
    pub fn domain(&self, degree: usize) -> (T, T) {
        (self.0[degree], self.0[self.0.len() - 1 - degree])
    }

    /// Find the knot span index by binary search
    /// `n` is the index of the last control point.
    /// Parameters at or beyond the end of the domain fall into the last valid span.
    ///
    /// # Example
    /// ```
    /// use curvepath::prelude::KnotVector;
    /// let knots = KnotVector::new(vec![0., 0., 0., 1., 2., 3., 3., 3.]);
    /// assert_eq!(knots.find_knot_span_index(4, 2, 2.5), 4);
    /// assert_eq!(knots.find_knot_span_index(4, 2, 3.0), 4);
    /// assert_eq!(knots.find_knot_span_index(4, 2, 0.0), 2);
    /// ```
    pub fn find_knot_span_index(&self, n: usize, degree: usize, u: T) -> usize {
        if u > self[n + 1] - T::default_epsilon() {
            return n;
        }

        if u < self[degree] + T::default_epsilon() {
            return degree;
        }

        let mut low = degree;
        let mut high = n + 1;
        let mut mid = (low + high) / 2;
        while u < self[mid] || self[mid + 1] <= u {
            if u < self[mid] {
                high = mid;
            } else {
                low = mid;
            }
            let next = (low + high) / 2;
            if mid == next {
                break;
            }
            mid = next;
        }

        mid
    }
}

impl<T> Index<usize> for KnotVector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> FromIterator<T> for KnotVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::KnotVector;

    #[test]
    fn clamped_knots_repeat_end_values() {
        let knots = KnotVector::<f64>::clamped(7, 3);
        assert_eq!(knots.len(), 7 + 3 + 1);
        assert_eq!(knots.to_vec()[..4], [0.; 4]);
        assert_eq!(knots.to_vec()[7..], [4.; 4]);
        assert_eq!(knots.domain(3), (0., 4.));
    }

    #[test]
    fn degree_one_two_points() {
        let knots = KnotVector::<f64>::clamped(2, 1);
        assert_eq!(knots.to_vec(), vec![0., 0., 1., 1.]);
    }

    #[test]
    fn open_knots_are_uniform() {
        let knots = KnotVector::<f64>::open(5, 3);
        assert_eq!(knots[0], 0.);
        assert_eq!(knots[8], 8.);
        assert_eq!(knots.domain(3), (3., 5.));
    }

    #[test]
    fn span_search() {
        let knots = KnotVector::<f64>::clamped(6, 3);
        // [0, 0, 0, 0, 1, 2, 3, 3, 3, 3]
        assert_eq!(knots.find_knot_span_index(5, 3, 0.0), 3);
        assert_eq!(knots.find_knot_span_index(5, 3, 0.5), 3);
        assert_eq!(knots.find_knot_span_index(5, 3, 1.0), 4);
        assert_eq!(knots.find_knot_span_index(5, 3, 2.5), 5);
        assert_eq!(knots.find_knot_span_index(5, 3, 3.0), 5);
    }
}
