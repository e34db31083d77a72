use crate::error::{GeometryError, Result};
use crate::math::heading::{decompose, HeadingAngles};
use crate::math::Vector3;
use crate::tessellation::DEFAULT_LENGTH_STEPS;

use super::curve::{Curve, CurveDomain, SmoothCurve};

/// A position plus the direction (and strength) the path passes through it with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Where the path passes.
    pub position: Vector3,
    /// Direction of travel at `position`. Its length sets how far the curve
    /// keeps that direction before bending toward the next waypoint.
    pub tangent: Vector3,
}

impl Waypoint {
    /// Creates a new waypoint.
    #[must_use]
    pub fn new(position: Vector3, tangent: Vector3) -> Self {
        Self { position, tangent }
    }

    /// Returns the heading the path has when passing this waypoint.
    #[must_use]
    pub fn heading(&self) -> HeadingAngles {
        decompose(&self.tangent)
    }
}

/// A chain of [`SmoothCurve`] segments through an ordered list of waypoints.
///
/// Segment `k` runs from waypoint `k` to waypoint `k + 1`, so neighbouring
/// segments share both the position and the tangent at their joint.
///
/// The path parameter runs over `[0, segment_count]`: the integer part picks
/// the segment and the fractional part is the coef within it.
#[derive(Debug, Clone)]
pub struct SmoothPath {
    waypoints: Vec<Waypoint>,
}

impl SmoothPath {
    /// Creates a path through the given waypoints.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two waypoints are given.
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self> {
        if waypoints.len() < 2 {
            return Err(GeometryError::Degenerate(format!(
                "path needs at least 2 waypoints, got {}",
                waypoints.len()
            ))
            .into());
        }
        Ok(Self { waypoints })
    }

    /// Returns the waypoints in path order.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Appends a waypoint, extending the path by one segment.
    pub fn push(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// Returns the number of curve segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// Returns segment `index`, if it exists.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<SmoothCurve> {
        let start = self.waypoints.get(index)?;
        let end = self.waypoints.get(index + 1)?;
        Some(segment_between(start, end))
    }

    /// Iterates over all segments in path order.
    pub fn segments(&self) -> impl Iterator<Item = SmoothCurve> + '_ {
        self.waypoints
            .windows(2)
            .map(|pair| segment_between(&pair[0], &pair[1]))
    }

    /// Position at path parameter `coef`.
    ///
    /// Parameters before the first or past the last segment extrapolate that
    /// segment.
    #[must_use]
    pub fn position_at(&self, coef: f64) -> Vector3 {
        let (segment, local) = self.locate(coef);
        segment.position_at(local)
    }

    /// Derivative at path parameter `coef`.
    #[must_use]
    pub fn tangent_at(&self, coef: f64) -> Vector3 {
        let (segment, local) = self.locate(coef);
        segment.tangent_at(local)
    }

    /// Sum of the per-segment length estimates, `steps` samples each.
    #[must_use]
    pub fn estimate_length(&self, steps: usize) -> f64 {
        self.segments().map(|s| s.estimate_length(steps)).sum()
    }

    /// Discretizes every segment with `steps` points and joins the results.
    ///
    /// Shared waypoints appear once, so the result has
    /// `segment_count * steps + 1` points and ends exactly at the last
    /// waypoint.
    #[must_use]
    pub fn discretize(&self, steps: usize) -> Vec<Vector3> {
        self.discretize_with(steps, DEFAULT_LENGTH_STEPS)
    }

    /// Like [`SmoothPath::discretize`] with an explicit length sampling density.
    #[must_use]
    pub fn discretize_with(&self, steps: usize, length_steps: usize) -> Vec<Vector3> {
        let count = self.segment_count();
        let mut points = Vec::with_capacity(count * steps + 1);
        for (index, segment) in self.segments().enumerate() {
            let mut part = segment.discretize_with(steps, length_steps);
            if index + 1 < count {
                // The next segment starts on this endpoint.
                part.pop();
            }
            points.extend(part);
        }
        tracing::trace!(segments = count, points = points.len(), "discretized path");
        points
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn locate(&self, coef: f64) -> (SmoothCurve, f64) {
        let last = self.segment_count() - 1;
        let index = if coef <= 0.0 {
            0
        } else {
            (coef.floor() as usize).min(last)
        };
        let start = &self.waypoints[index];
        let end = &self.waypoints[index + 1];
        (segment_between(start, end), coef - index as f64)
    }
}

impl Curve for SmoothPath {
    fn evaluate(&self, t: f64) -> Vector3 {
        self.position_at(t)
    }

    fn tangent(&self, t: f64) -> Vector3 {
        self.tangent_at(t)
    }

    #[allow(clippy::cast_precision_loss)]
    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.segment_count() as f64)
    }
}

fn segment_between(start: &Waypoint, end: &Waypoint) -> SmoothCurve {
    SmoothCurve::new(start.position, start.tangent, end.position, end.tangent)
}
