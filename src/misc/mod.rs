pub mod error;
pub mod floating_point;

pub use error::*;
pub use floating_point::*;
