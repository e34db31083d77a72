mod intersect;
mod length;

pub use intersect::{find_first_intersection, CurveCurveIntersect, CurveIntersection};
pub use length::Length;
