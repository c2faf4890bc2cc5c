pub mod arc;
pub mod diagonal;
pub use arc::*;
pub use diagonal::*;
