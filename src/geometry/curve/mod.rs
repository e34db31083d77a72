mod smooth;

pub use smooth::SmoothCurve;

use crate::math::Vector3;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns the width of the domain.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.t_max - self.t_min
    }
}

/// Trait for parametric curves in 3D space.
///
/// Evaluation is total: parameters outside [`Curve::domain`] extrapolate
/// rather than fail.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    fn evaluate(&self, t: f64) -> Vector3;

    /// Computes the (unnormalized) derivative at parameter `t`.
    fn tangent(&self, t: f64) -> Vector3;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Approximates the arc length by a polyline through `steps` evenly
    /// spaced samples after the domain start.
    ///
    /// Zero steps yields `0.0`.
    #[allow(clippy::cast_precision_loss)]
    fn sampled_length(&self, steps: usize) -> f64 {
        let domain = self.domain();
        let mut previous = self.evaluate(domain.t_min);
        let mut length = 0.0;
        for k in 1..=steps {
            let t = domain.t_min + domain.span() * (k as f64 / steps as f64);
            let current = self.evaluate(t);
            length += (current - previous).norm();
            previous = current;
        }
        length
    }
}
