use std::fmt::Debug;

use nalgebra::Point2;

use crate::misc::{EvaluationError, FloatingPoint};

use super::{AttributeValue, Attributes, Schema};

/// A sampled point of an evaluated path
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathPoint<T: FloatingPoint, G> {
    pub(crate) position: Point2<T>,
    pub(crate) index: T,
    pub(crate) group: G,
    pub(crate) interpolated: bool,
    pub(crate) attributes: Attributes<T>,
    pub(crate) end_attributes: Attributes<T>,
}

impl<T: FloatingPoint, G> PathPoint<T, G> {
    pub fn position(&self) -> &Point2<T> {
        &self.position
    }

    /// Parametric progress along the path in [0, 1]
    /// Samples are evenly spaced in the curve parameter, not in arc length.
    pub fn index(&self) -> T {
        self.index
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    /// `true` when the aesthetics of this point are unset and left to the renderer
    pub fn is_interpolated(&self) -> bool {
        self.interpolated
    }

    pub fn attributes(&self) -> &Attributes<T> {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeValue<T>> {
        self.attributes.get(name)
    }

    /// Categorical values at the far end of the segment holding this point
    pub fn end_attributes(&self) -> &Attributes<T> {
        &self.end_attributes
    }
}

/// A group left out of an evaluation, with the reason
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroppedGroup<G> {
    pub group: G,
    pub reason: String,
}

impl<G: Debug> DroppedGroup<G> {
    pub fn to_error(&self) -> EvaluationError {
        EvaluationError::malformed_group(&self.group, &self.reason)
    }
}

/// Result of evaluating a batch of groups
///
/// Every evaluated group contributes exactly `samples` consecutive points,
/// in the order the groups first appeared in the input.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluatedPath<T: FloatingPoint, G> {
    points: Vec<PathPoint<T, G>>,
    samples: usize,
    schema: Schema,
    dropped: Vec<DroppedGroup<G>>,
}

impl<T: FloatingPoint, G> EvaluatedPath<T, G> {
    pub(crate) fn new(
        points: Vec<PathPoint<T, G>>,
        samples: usize,
        schema: Schema,
        dropped: Vec<DroppedGroup<G>>,
    ) -> Self {
        Self {
            points,
            samples,
            schema,
            dropped,
        }
    }

    pub fn points(&self) -> &[PathPoint<T, G>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<PathPoint<T, G>> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points per group
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Number of groups that were evaluated
    pub fn group_count(&self) -> usize {
        self.points.len() / self.samples.max(1)
    }

    /// Iterate the points of each group
    pub fn paths(&self) -> std::slice::Chunks<'_, PathPoint<T, G>> {
        self.points.chunks(self.samples.max(1))
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn dropped(&self) -> &[DroppedGroup<G>] {
        &self.dropped
    }
}
