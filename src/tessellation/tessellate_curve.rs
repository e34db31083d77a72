use crate::error::{require_nonzero, Result};
use crate::geometry::{SmoothCurve, SmoothPath};
use crate::math::Vector3;

use super::{Polyline, SamplingParams};

/// Curves that can be cut into a fixed number of points per segment.
pub trait Discretize {
    /// Returns `steps` points per segment plus the exact final endpoint.
    fn discretize_points(&self, steps: usize, length_steps: usize) -> Vec<Vector3>;
}

impl Discretize for SmoothCurve {
    fn discretize_points(&self, steps: usize, length_steps: usize) -> Vec<Vector3> {
        self.discretize_with(steps, length_steps)
    }
}

impl Discretize for SmoothPath {
    fn discretize_points(&self, steps: usize, length_steps: usize) -> Vec<Vector3> {
        self.discretize_with(steps, length_steps)
    }
}

/// Discretizes a curve or path into a polyline.
pub struct TessellateCurve<'a, C: Discretize + ?Sized> {
    curve: &'a C,
    steps: usize,
    params: SamplingParams,
}

impl<'a, C: Discretize + ?Sized> TessellateCurve<'a, C> {
    /// Creates a new `TessellateCurve` operation with `steps` points per segment.
    #[must_use]
    pub fn new(curve: &'a C, steps: usize) -> Self {
        Self {
            curve,
            steps,
            params: SamplingParams::default(),
        }
    }

    /// Overrides the sampling parameters.
    #[must_use]
    pub fn with_params(mut self, params: SamplingParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero or the sampling parameters are invalid.
    pub fn execute(&self) -> Result<Polyline> {
        require_nonzero("steps", self.steps)?;
        self.params.validate()?;

        let points = self
            .curve
            .discretize_points(self.steps, self.params.length_steps);
        tracing::trace!(steps = self.steps, points = points.len(), "tessellated curve");
        Ok(Polyline { points })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, WaypathError};
    use crate::geometry::Waypoint;
    use approx::assert_relative_eq;

    fn quarter_turn() -> SmoothCurve {
        SmoothCurve::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(10.0, 0.0, -10.0),
            Vector3::new(1.0, 0.0, 0.0),
        )
    }

    #[test]
    fn curve_polyline_matches_discretize() {
        let curve = quarter_turn();
        let polyline = TessellateCurve::new(&curve, 12).execute().unwrap();
        assert_eq!(polyline.points, curve.discretize(12));
        assert_eq!(polyline.points.len(), 13);
    }

    #[test]
    fn polyline_length_approaches_estimate() {
        let curve = quarter_turn();
        let polyline = TessellateCurve::new(&curve, 200).execute().unwrap();
        // The polyline follows the curve with tangents rescaled by length / 3.
        let rescaled = curve.with_tangents_scaled(curve.estimate_length(300) / 3.0);
        let estimate = rescaled.estimate_length(300);
        assert!((polyline.length() - estimate).abs() / estimate < 1e-3);
    }

    #[test]
    fn custom_length_steps_are_used() {
        let curve = quarter_turn();
        let params = SamplingParams {
            length_steps: 7,
            ..SamplingParams::default()
        };
        let polyline = TessellateCurve::new(&curve, 6)
            .with_params(params)
            .execute()
            .unwrap();
        assert_eq!(polyline.points, curve.discretize_with(6, 7));
    }

    #[test]
    fn path_polyline() {
        let path = SmoothPath::new(vec![
            Waypoint::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, -1.0)),
            Waypoint::new(Vector3::new(10.0, 0.0, -10.0), Vector3::new(1.0, 0.0, 0.0)),
            Waypoint::new(Vector3::new(20.0, 2.0, -10.0), Vector3::new(1.0, 0.0, 0.0)),
        ])
        .unwrap();
        let polyline = TessellateCurve::new(&path, 4).execute().unwrap();
        assert_eq!(polyline.points.len(), 9);
        assert_relative_eq!(
            *polyline.points.last().unwrap(),
            Vector3::new(20.0, 2.0, -10.0)
        );
    }

    #[test]
    fn zero_steps_rejected() {
        let err = TessellateCurve::new(&quarter_turn(), 0).execute().unwrap_err();
        assert!(matches!(
            err,
            WaypathError::Geometry(GeometryError::ParameterOutOfRange {
                parameter: "steps",
                ..
            })
        ));
    }

    #[test]
    fn invalid_params_rejected() {
        let params = SamplingParams {
            length_steps: 0,
            part_count: 10,
        };
        let result = TessellateCurve::new(&quarter_turn(), 4)
            .with_params(params)
            .execute();
        assert!(result.is_err());
    }
}
