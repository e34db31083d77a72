use crate::math::bezier;
use crate::math::heading::{decompose, HeadingAngles};
use crate::math::Vector3;
use crate::tessellation::DEFAULT_LENGTH_STEPS;

use super::{Curve, CurveDomain};

/// A cubic curve segment between two waypoints.
///
/// The segment starts at `point1` heading along `tang1` and ends at `point2`
/// arriving along `tang2`. Tangent magnitudes steer how strongly the curve
/// bends; a useful range is a few tens of percent of the chord length.
///
/// The Bezier control points are
/// `[point1, point1 + tang1, point2 - tang2, point2]`. Chaining segments so
/// that one segment's `(point2, tang2)` is the next one's `(point1, tang1)`
/// gives a path that is continuous in both position and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothCurve {
    point1: Vector3,
    tang1: Vector3,
    point2: Vector3,
    tang2: Vector3,
}

impl SmoothCurve {
    /// Creates a new curve segment from its start and end position/tangent pairs.
    #[must_use]
    pub fn new(point1: Vector3, tang1: Vector3, point2: Vector3, tang2: Vector3) -> Self {
        Self {
            point1,
            tang1,
            point2,
            tang2,
        }
    }

    /// Returns the start position.
    #[must_use]
    pub fn start(&self) -> &Vector3 {
        &self.point1
    }

    /// Returns the tangent at the start position.
    #[must_use]
    pub fn start_tangent(&self) -> &Vector3 {
        &self.tang1
    }

    /// Returns the end position.
    #[must_use]
    pub fn end(&self) -> &Vector3 {
        &self.point2
    }

    /// Returns the tangent at the end position.
    #[must_use]
    pub fn end_tangent(&self) -> &Vector3 {
        &self.tang2
    }

    /// Returns the four cubic Bezier control points.
    #[must_use]
    pub fn control_points(&self) -> [Vector3; 4] {
        [
            self.point1,
            self.point1 + self.tang1,
            self.point2 - self.tang2,
            self.point2,
        ]
    }

    /// Position at `coef`; `0.0` is `point1` and `1.0` is `point2`.
    ///
    /// `coef` is not clamped.
    #[must_use]
    pub fn position_at(&self, coef: f64) -> Vector3 {
        let [c0, c1, c2, c3] = self.control_points();
        bezier::evaluate(&c0, &c1, &c2, &c3, coef)
    }

    /// Derivative of the position with respect to `coef`.
    #[must_use]
    pub fn tangent_at(&self, coef: f64) -> Vector3 {
        let [c0, c1, c2, c3] = self.control_points();
        bezier::evaluate_derivative(&c0, &c1, &c2, &c3, coef)
    }

    /// Heading of the curve direction at `coef`.
    #[must_use]
    pub fn heading_at(&self, coef: f64) -> HeadingAngles {
        decompose(&self.tangent_at(coef))
    }

    /// Estimates the arc length by summing chords between `steps` samples.
    ///
    /// The samples sit at `k / steps` for `k` in `1..=steps`, chained from
    /// `point1`. The estimate grows toward the true length as `steps`
    /// increases. Zero steps yields `0.0`.
    #[must_use]
    pub fn estimate_length(&self, steps: usize) -> f64 {
        self.sampled_length(steps)
    }

    /// Returns a copy with both tangents multiplied by `factor`.
    #[must_use]
    pub fn with_tangents_scaled(&self, factor: f64) -> Self {
        Self::new(self.point1, self.tang1 * factor, self.point2, self.tang2 * factor)
    }

    /// Returns the same geometry traversed from `point2` back to `point1`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.point2, -self.tang2, self.point1, -self.tang1)
    }

    /// Discretizes the curve into `steps + 1` points, using the default
    /// length sampling density.
    ///
    /// See [`SmoothCurve::discretize_with`].
    #[must_use]
    pub fn discretize(&self, steps: usize) -> Vec<Vector3> {
        self.discretize_with(steps, DEFAULT_LENGTH_STEPS)
    }

    /// Discretizes the curve into `steps + 1` points.
    ///
    /// Both tangents are first rescaled by `length / 3`, where `length` is
    /// [`SmoothCurve::estimate_length`] with `length_steps` samples. With unit
    /// direction tangents this spaces the points close to uniformly in arc
    /// length. Points are taken at `segment / steps` for
    /// `segment` in `0..steps`, and `point2` is appended exactly.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn discretize_with(&self, steps: usize, length_steps: usize) -> Vec<Vector3> {
        let length = self.estimate_length(length_steps);
        let rescaled = self.with_tangents_scaled(length / 3.0);

        let mut points = Vec::with_capacity(steps + 1);
        for segment in 0..steps {
            points.push(rescaled.position_at(segment as f64 / steps as f64));
        }
        points.push(self.point2);
        points
    }
}

impl Curve for SmoothCurve {
    fn evaluate(&self, t: f64) -> Vector3 {
        self.position_at(t)
    }

    fn tangent(&self, t: f64) -> Vector3 {
        self.tangent_at(t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }
}
