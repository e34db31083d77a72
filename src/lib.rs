//! Smooth cubic curves through waypoints.
//!
//! A [`SmoothCurve`] joins two waypoints (position plus tangent) with a cubic
//! Bezier segment; a [`SmoothPath`] chains such segments so that position and
//! direction stay continuous at every waypoint. Curves can be sampled for
//! position and tangent, measured, cut into point lists and tested for a
//! crossing on the XZ ground plane.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{Result, WaypathError};
pub use geometry::{Curve, SmoothCurve, SmoothPath, Waypoint};
pub use math::heading::{decompose, HeadingAngles};
pub use math::Vector3;
pub use operations::query::{find_first_intersection, CurveCurveIntersect, CurveIntersection};
pub use tessellation::{Polyline, SamplingParams, TessellateCurve};
