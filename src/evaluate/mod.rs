pub(crate) mod aesthetics;
pub(crate) mod batch;
pub mod linear;
pub mod options;
pub mod spline;
pub use linear::*;
pub use options::*;
pub use spline::*;
