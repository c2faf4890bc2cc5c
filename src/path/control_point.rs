use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use nalgebra::Point2;

use crate::misc::{EvaluationResult, FloatingPoint};

use super::{AttributeValue, Attributes, Schema};

/// Bounds of a group identifier
/// Groups are compared for equality, hashed for grouping and shared across threads.
pub trait GroupId: Clone + Eq + Hash + Debug + Send + Sync {}

impl<G: Clone + Eq + Hash + Debug + Send + Sync> GroupId for G {}

/// A control point of a path: a position, the group it belongs to and its aesthetics
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPoint<T: FloatingPoint, G> {
    position: Point2<T>,
    group: G,
    attributes: Attributes<T>,
}

impl<T: FloatingPoint, G> ControlPoint<T, G> {
    pub fn position(&self) -> &Point2<T> {
        &self.position
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    pub fn attributes(&self) -> &Attributes<T> {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeValue<T>> {
        self.attributes.get(name)
    }

    pub fn is_finite(&self) -> bool {
        self.position.x.is_finite() && self.position.y.is_finite()
    }
}

/// Ordered table of control points
///
/// Points of a group keep the order they were pushed in, that order defines the
/// curve. Groups are reported in the order of their first point.
///
/// # Example
/// ```
/// use curvepath::prelude::*;
/// use nalgebra::Point2;
///
/// let mut set = ControlPointSet::new();
/// set.push("a", Point2::new(0., 0.)).numeric("size", 1.).unwrap();
/// set.push("a", Point2::new(1., 1.)).categorical("colour", "red").unwrap();
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.schema().level("colour", 0), Some("red"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPointSet<T: FloatingPoint, G> {
    points: Vec<ControlPoint<T, G>>,
    schema: Schema,
}

impl<T: FloatingPoint, G> Default for ControlPointSet<T, G> {
    fn default() -> Self {
        Self {
            points: vec![],
            schema: Schema::default(),
        }
    }
}

impl<T: FloatingPoint, G> ControlPointSet<T, G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set without aesthetics from `(group, position)` rows
    pub fn from_positions<I: IntoIterator<Item = (G, Point2<T>)>>(rows: I) -> Self {
        let points = rows
            .into_iter()
            .map(|(group, position)| ControlPoint {
                position,
                group,
                attributes: Attributes::new(),
            })
            .collect();
        Self {
            points,
            schema: Schema::default(),
        }
    }

    /// Append a control point and return a writer for its aesthetics
    pub fn push(&mut self, group: G, position: Point2<T>) -> AttributeWriter<'_, T> {
        self.points.push(ControlPoint {
            position,
            group,
            attributes: Attributes::new(),
        });
        let index = self.points.len() - 1;
        AttributeWriter::new(&mut self.schema, &mut self.points[index].attributes)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ControlPoint<T, G>] {
        &self.points
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Gather the points of each group, groups in first-appearance order
    pub fn groups(&self) -> IndexMap<&G, Vec<&ControlPoint<T, G>>>
    where
        G: Hash + Eq,
    {
        let mut groups: IndexMap<&G, Vec<&ControlPoint<T, G>>> = IndexMap::new();
        for point in self.points.iter() {
            groups.entry(&point.group).or_default().push(point);
        }
        groups
    }
}

/// Writes aesthetics into an attribute map while keeping the owning schema consistent
pub struct AttributeWriter<'a, T> {
    schema: &'a mut Schema,
    attributes: &'a mut Attributes<T>,
}

impl<'a, T: FloatingPoint> AttributeWriter<'a, T> {
    pub(crate) fn new(schema: &'a mut Schema, attributes: &'a mut Attributes<T>) -> Self {
        Self { schema, attributes }
    }

    /// Set a numeric aesthetic
    pub fn numeric(self, name: &str, value: T) -> EvaluationResult<Self> {
        self.schema.declare_numeric(name)?;
        self.attributes
            .insert(name.to_string(), AttributeValue::Numeric(value));
        Ok(self)
    }

    /// Set a categorical aesthetic, adding `label` to the column's domain
    pub fn categorical(self, name: &str, label: &str) -> EvaluationResult<Self> {
        let code = self.schema.intern_level(name, label)?;
        self.attributes
            .insert(name.to_string(), AttributeValue::Categorical(code));
        Ok(self)
    }
}
