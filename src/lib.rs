#![allow(clippy::needless_range_loop)]
//! Path primitives for plotting.
//!
//! Turns tables of 2D control points into dense, evenly indexed point tables a
//! renderer can draw: B-splines (clamped, open or closed, optionally bundled),
//! Bezier curves, straight links, tree diagonals and circular arcs. Aesthetics
//! attached to the control points are carried, blended or held constant along
//! each path.
//!
//! ```
//! use curvepath::prelude::*;
//! use nalgebra::Point2;
//!
//! let mut points = ControlPointSet::new();
//! points.push("a", Point2::new(0., 0.)).numeric("size", 1.).unwrap();
//! points.push("a", Point2::new(1., 2.)).numeric("size", 2.).unwrap();
//! points.push("a", Point2::new(3., 1.)).numeric("size", 3.).unwrap();
//! points.push("a", Point2::new(4., 3.)).numeric("size", 4.).unwrap();
//!
//! let options = EvaluationOptions::default()
//!     .with_samples(50)
//!     .with_mode(InterpolationMode::LinearPerSegment);
//! let path = evaluate(&points, &options).unwrap();
//! assert_eq!(path.len(), 50);
//! assert_eq!(path.points()[49].position(), &Point2::new(4., 3.));
//! ```

mod curve;
mod evaluate;
mod knot;
mod misc;
mod path;
mod shape;

pub mod prelude {
    pub use crate::curve::*;
    pub use crate::evaluate::*;
    pub use crate::knot::*;
    pub use crate::misc::*;
    pub use crate::path::*;
    pub use crate::shape::*;
}
