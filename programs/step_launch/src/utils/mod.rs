pub mod curve;
pub mod fees;

pub use curve::*;
pub use fees::*;
