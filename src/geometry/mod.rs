pub mod curve;
pub mod path;

pub use curve::{Curve, CurveDomain, SmoothCurve};
pub use path::{SmoothPath, Waypoint};
