pub mod attribute;
pub mod control_point;
pub mod evaluated_path;
pub use attribute::*;
pub use control_point::*;
pub use evaluated_path::*;
