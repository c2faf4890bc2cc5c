pub mod b_spline;
pub mod bundle;
pub mod spline_type;
pub use b_spline::*;
pub use bundle::*;
pub use spline_type::*;
