use log::trace;
use nalgebra::Point2;

use crate::evaluate::aesthetics::Style;
use crate::evaluate::batch::{assemble, run_batch, GroupOutcome};
use crate::evaluate::{EvaluationOptions, InterpolationMode};
use crate::misc::{scalar, EvaluationError, EvaluationResult, FloatingPoint};
use crate::path::{AttributeWriter, Attributes, DroppedGroup, EvaluatedPath, GroupId, Schema};

/// A circular arc around `center`
/// Angles are in radians, measured clockwise from 12 o'clock.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcSpec<T: FloatingPoint, G> {
    group: G,
    center: Point2<T>,
    radius: T,
    start: T,
    end: T,
    attributes: Attributes<T>,
}

impl<T: FloatingPoint, G> ArcSpec<T, G> {
    pub fn group(&self) -> &G {
        &self.group
    }

    pub fn center(&self) -> &Point2<T> {
        &self.center
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    /// Start and end angles
    pub fn angles(&self) -> (T, T) {
        (self.start, self.end)
    }

    pub fn attributes(&self) -> &Attributes<T> {
        &self.attributes
    }

    /// Point on the arc circle at `angle`
    pub fn point_at(&self, angle: T) -> Point2<T> {
        Point2::new(
            self.center.x + self.radius * angle.sin(),
            self.center.y + self.radius * angle.cos(),
        )
    }

    fn check(&self) -> Result<(), String> {
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err("arc center has a non-finite coordinate".to_string());
        }
        if !self.radius.is_finite() || self.radius < T::zero() {
            return Err(format!(
                "arc radius must be finite and non-negative, got {:?}",
                self.radius
            ));
        }
        if !(self.start.is_finite() && self.end.is_finite()) {
            return Err("arc angles must be finite".to_string());
        }
        Ok(())
    }
}

/// Ordered list of arcs sharing one attribute schema
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcSet<T: FloatingPoint, G> {
    arcs: Vec<ArcSpec<T, G>>,
    schema: Schema,
}

impl<T: FloatingPoint, G> Default for ArcSet<T, G> {
    fn default() -> Self {
        Self {
            arcs: vec![],
            schema: Schema::default(),
        }
    }
}

impl<T: FloatingPoint, G> ArcSet<T, G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arc and return a writer for its aesthetics
    pub fn push(
        &mut self,
        group: G,
        center: Point2<T>,
        radius: T,
        start: T,
        end: T,
    ) -> AttributeWriter<'_, T> {
        self.arcs.push(ArcSpec {
            group,
            center,
            radius,
            start,
            end,
            attributes: Attributes::new(),
        });
        let index = self.arcs.len() - 1;
        AttributeWriter::new(&mut self.schema, &mut self.arcs[index].attributes)
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    pub fn arcs(&self) -> &[ArcSpec<T, G>] {
        &self.arcs
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

/// Sample each arc at `options.samples` evenly spaced angles
///
/// Each arc is its own path, in input order, and every sample carries the arc's
/// aesthetics. An arc has a single attribute record, so
/// [`InterpolationMode::LinearPerSegment`] is rejected.
///
/// # Example
/// ```
/// use curvepath::prelude::*;
/// use nalgebra::Point2;
/// use std::f64::consts::FRAC_PI_2;
///
/// let mut arcs = ArcSet::new();
/// arcs.push("quarter", Point2::new(0., 0.), 2., 0., FRAC_PI_2);
/// let options = EvaluationOptions::default().with_samples(3);
/// let path = evaluate_arcs(&arcs, &options).unwrap();
/// let end = path.points()[2].position();
/// assert!((end.x - 2.).abs() < 1e-12 && end.y.abs() < 1e-12);
/// ```
pub fn evaluate_arcs<T: FloatingPoint, G: GroupId>(
    arcs: &ArcSet<T, G>,
    options: &EvaluationOptions<T>,
) -> EvaluationResult<EvaluatedPath<T, G>> {
    options.validate()?;
    if options.mode == InterpolationMode::LinearPerSegment {
        return Err(EvaluationError::invalid_argument(
            "interpolation mode LinearPerSegment is not supported for arcs",
        ));
    }

    let samples = options.samples;
    let last: T = scalar(samples - 1);
    let evaluate = |arc: &ArcSpec<T, G>| -> GroupOutcome<T, G> {
        arc.check().map_err(|reason| DroppedGroup {
            group: arc.group.clone(),
            reason,
        })?;
        trace!("sampling arc {:?} over {:?}", arc.group, arc.angles());

        let curve = (0..samples)
            .map(|j| {
                let angle = if j == samples - 1 {
                    arc.end
                } else {
                    arc.start + (arc.end - arc.start) * scalar::<T>(j) / last
                };
                arc.point_at(angle)
            })
            .collect();
        let styles = vec![Style::carried(arc.attributes.clone()); samples];
        Ok(assemble(&arc.group, curve, styles))
    };

    Ok(run_batch(
        &arcs.arcs,
        samples,
        options.parallel,
        arcs.schema.clone(),
        evaluate,
    ))
}
