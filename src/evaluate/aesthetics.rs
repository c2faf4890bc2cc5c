use crate::misc::{scalar, FloatingPoint};
use crate::path::{Attributes, ControlPoint, Schema};

use super::InterpolationMode;

/// Resolved aesthetics of one sampled point
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Style<T> {
    pub interpolated: bool,
    pub attributes: Attributes<T>,
    pub end_attributes: Attributes<T>,
}

impl<T> Style<T> {
    pub(crate) fn carried(attributes: Attributes<T>) -> Self {
        Self {
            interpolated: false,
            attributes,
            end_attributes: Attributes::new(),
        }
    }

    fn unset() -> Self {
        Self {
            interpolated: true,
            attributes: Attributes::new(),
            end_attributes: Attributes::new(),
        }
    }
}

/// Segment holding sample `j` of `samples` when the path is cut into `segments`
/// equal parameter ranges, with the position inside it in [0, 1]
pub(crate) fn locate<T: FloatingPoint>(j: usize, samples: usize, segments: usize) -> (usize, T) {
    let last = samples - 1;
    let segment = ((j * segments) / last).min(segments - 1);
    let offset = j * segments - segment * last;
    (segment, scalar::<T>(offset) / scalar(last))
}

/// Aesthetics for the `samples` points of a group whose curve is anchored on `anchors`
///
/// Control point `i` sits at parameter `i / segments`, where a closed curve has
/// one more segment running from the last point back to the first.
pub(crate) fn resolve_styles<T: FloatingPoint, G>(
    anchors: &[&ControlPoint<T, G>],
    closed: bool,
    samples: usize,
    mode: InterpolationMode,
    schema: &Schema,
) -> Vec<Style<T>> {
    let count = anchors.len();
    let segments = match count {
        1 => 0,
        _ if closed => count,
        _ => count - 1,
    };

    match mode {
        InterpolationMode::ConstantStyle => {
            vec![Style::carried(anchors[0].attributes().clone()); samples]
        }
        InterpolationMode::Carry => {
            // (control index, doubled distance to the sample in units of 1 / segments)
            let mut owners: Vec<Option<(usize, usize)>> = vec![None; samples];
            if segments == 0 {
                owners[0] = Some((0, 0));
            } else {
                let last = samples - 1;
                // a closed curve returns to its first point at the very end
                let anchored = if closed { count + 1 } else { count };
                for i in 0..anchored {
                    // nearest sample, halfway rounds down
                    let target = 2 * i * last;
                    let j = (target + segments - 1) / (2 * segments);
                    let distance = target.abs_diff(2 * j * segments);
                    match owners[j] {
                        Some((_, best)) if best <= distance => {}
                        _ => owners[j] = Some((i % count, distance)),
                    }
                }
            }
            owners
                .into_iter()
                .map(|owner| match owner {
                    Some((i, _)) => Style::carried(anchors[i].attributes().clone()),
                    None => Style::unset(),
                })
                .collect()
        }
        InterpolationMode::LinearPerSegment => {
            if segments == 0 {
                let only = anchors[0];
                let style = Style {
                    interpolated: false,
                    attributes: only.attributes().clone(),
                    end_attributes: categorical(only.attributes(), schema),
                };
                return vec![style; samples];
            }
            (0..samples)
                .map(|j| {
                    let (segment, t) = locate::<T>(j, samples, segments);
                    let start = anchors[segment % count];
                    let end = anchors[(segment + 1) % count];
                    Style {
                        interpolated: false,
                        attributes: blend(start.attributes(), end.attributes(), t, schema),
                        end_attributes: categorical(end.attributes(), schema),
                    }
                })
                .collect()
        }
    }
}

/// Blend two attribute maps in schema order
/// A column present on one side only holds that side's value.
fn blend<T: FloatingPoint>(
    start: &Attributes<T>,
    end: &Attributes<T>,
    t: T,
    schema: &Schema,
) -> Attributes<T> {
    schema
        .columns()
        .filter_map(|(name, _)| {
            let value = match (start.get(name), end.get(name)) {
                (Some(a), Some(b)) => a.lerp(b, t),
                (Some(a), None) => *a,
                (None, Some(b)) => *b,
                (None, None) => return None,
            };
            Some((name.to_string(), value))
        })
        .collect()
}

fn categorical<T: FloatingPoint>(attributes: &Attributes<T>, schema: &Schema) -> Attributes<T> {
    schema
        .columns()
        .filter_map(|(name, _)| {
            attributes
                .get(name)
                .filter(|value| value.is_categorical())
                .map(|value| (name.to_string(), *value))
        })
        .collect()
}
