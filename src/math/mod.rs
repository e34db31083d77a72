pub mod bezier;
pub mod heading;
pub mod intersect_2d;

/// 3D vector type, used for positions and tangents alike.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Below this length a heading vector is treated as degenerate.
pub const HEADING_EPSILON: f64 = 1e-4;

/// Parallel/boundary tolerance for the planar intersection search.
pub const INTERSECTION_EPSILON: f64 = 0.01;
