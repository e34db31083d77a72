mod tessellate_curve;

pub use tessellate_curve::{Discretize, TessellateCurve};

use crate::error::{Result, TessellationError};
use crate::math::Vector3;

/// Default number of samples used to estimate arc length.
pub const DEFAULT_LENGTH_STEPS: usize = 300;

/// Default number of pieces each curve is cut into for intersection search.
pub const DEFAULT_PART_COUNT: usize = 10;

/// Parameters controlling sampling density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingParams {
    /// Samples per curve segment when estimating arc length.
    pub length_steps: usize,
    /// Pieces per curve in the intersection search.
    pub part_count: usize,
}

impl SamplingParams {
    /// Checks that every sample count is non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::InvalidParameters`] naming the first zero field.
    pub fn validate(&self) -> Result<()> {
        if self.length_steps == 0 {
            return Err(
                TessellationError::InvalidParameters("length_steps must be > 0".into()).into(),
            );
        }
        if self.part_count == 0 {
            return Err(
                TessellationError::InvalidParameters("part_count must be > 0".into()).into(),
            );
        }
        Ok(())
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            length_steps: DEFAULT_LENGTH_STEPS,
            part_count: DEFAULT_PART_COUNT,
        }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Vector3>,
}

impl Polyline {
    /// Returns the summed length of the polyline's edges.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}
