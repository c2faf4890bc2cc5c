use log::{debug, warn};
use nalgebra::Point2;
use rayon::prelude::*;

use crate::misc::{scalar, EvaluationResult, FloatingPoint};
use crate::path::{
    ControlPoint, ControlPointSet, DroppedGroup, EvaluatedPath, GroupId, PathPoint, Schema,
};

use super::aesthetics::{resolve_styles, Style};
use super::EvaluationOptions;

/// Outcome of a single group
pub(crate) type GroupOutcome<T, G> = Result<Vec<PathPoint<T, G>>, DroppedGroup<G>>;

/// Evaluate independent jobs, on the rayon pool when asked to, keeping input order
pub(crate) fn run_batch<J, T, G, F>(
    jobs: &[J],
    samples: usize,
    parallel: bool,
    schema: Schema,
    evaluate: F,
) -> EvaluatedPath<T, G>
where
    J: Sync,
    T: FloatingPoint,
    G: GroupId,
    F: Fn(&J) -> GroupOutcome<T, G> + Sync,
{
    debug!(
        "evaluating {} groups with {} samples each{}",
        jobs.len(),
        samples,
        if parallel { " in parallel" } else { "" }
    );

    let outcomes: Vec<GroupOutcome<T, G>> = if parallel {
        jobs.par_iter().map(&evaluate).collect()
    } else {
        jobs.iter().map(&evaluate).collect()
    };

    let mut points = Vec::with_capacity(outcomes.len() * samples);
    let mut dropped = vec![];
    for outcome in outcomes {
        match outcome {
            Ok(path) => points.extend(path),
            Err(group) => {
                warn!("dropping group {:?}: {}", group.group, group.reason);
                dropped.push(group);
            }
        }
    }

    EvaluatedPath::new(points, samples, schema, dropped)
}

/// Evaluate every group of a control point set
///
/// `geometry` maps the positions of a group to exactly `samples` points on its
/// curve. With `repeat_single` a single point group skips `geometry` and is
/// repeated in place, otherwise `geometry` decides whether it is valid.
/// Groups with non-finite input or output are dropped with a reason.
pub(crate) fn evaluate_groups<T, G, F>(
    set: &ControlPointSet<T, G>,
    options: &EvaluationOptions<T>,
    closed: bool,
    repeat_single: bool,
    geometry: F,
) -> EvaluationResult<EvaluatedPath<T, G>>
where
    T: FloatingPoint,
    G: GroupId,
    F: Fn(&[Point2<T>]) -> anyhow::Result<Vec<Point2<T>>> + Sync,
{
    options.validate()?;
    let samples = options.samples;
    let schema = set.schema();
    let groups: Vec<(&G, Vec<&ControlPoint<T, G>>)> = set.groups().into_iter().collect();

    let evaluate = |(group, controls): &(&G, Vec<&ControlPoint<T, G>>)| -> GroupOutcome<T, G> {
        let dropped = |reason: String| DroppedGroup {
            group: (*group).clone(),
            reason,
        };

        if let Some(i) = controls.iter().position(|c| !c.is_finite()) {
            return Err(dropped(format!("control point {i} has a non-finite coordinate")));
        }

        let positions: Vec<Point2<T>> = controls.iter().map(|c| *c.position()).collect();
        let curve = match positions.as_slice() {
            [single] if repeat_single => vec![*single; samples],
            _ => geometry(&positions).map_err(|e| dropped(e.to_string()))?,
        };
        if curve.len() != samples {
            return Err(dropped(format!(
                "expected {samples} points, got {}",
                curve.len()
            )));
        }
        if curve.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(dropped("evaluation produced non-finite coordinates".to_string()));
        }

        let styles = resolve_styles(controls, closed, samples, options.mode, schema);
        Ok(assemble(*group, curve, styles))
    };

    Ok(run_batch(
        &groups,
        samples,
        options.parallel,
        schema.clone(),
        evaluate,
    ))
}

/// Zip curve points with their styles into path points carrying the parametric index
pub(crate) fn assemble<T: FloatingPoint, G: Clone>(
    group: &G,
    curve: Vec<Point2<T>>,
    styles: Vec<Style<T>>,
) -> Vec<PathPoint<T, G>> {
    let last: T = scalar(curve.len().saturating_sub(1).max(1));
    curve
        .into_iter()
        .zip(styles)
        .enumerate()
        .map(|(j, (position, style))| PathPoint {
            position,
            index: scalar::<T>(j) / last,
            group: group.clone(),
            interpolated: style.interpolated,
            attributes: style.attributes,
            end_attributes: style.end_attributes,
        })
        .collect()
}
