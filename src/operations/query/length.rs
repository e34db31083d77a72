use crate::error::{require_nonzero, Result};
use crate::geometry::curve::Curve;
use crate::tessellation::DEFAULT_LENGTH_STEPS;

/// Computes the arc length of a curve by chord sampling.
pub struct Length<'a, C: Curve + ?Sized> {
    curve: &'a C,
    steps: usize,
}

impl<'a, C: Curve + ?Sized> Length<'a, C> {
    /// Creates a new `Length` query with the default sampling density.
    #[must_use]
    pub fn new(curve: &'a C) -> Self {
        Self {
            curve,
            steps: DEFAULT_LENGTH_STEPS,
        }
    }

    /// Sets the number of samples taken over the whole curve domain.
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Executes the query, returning the estimated length.
    ///
    /// # Errors
    ///
    /// Returns an error if the step count is zero.
    pub fn execute(&self) -> Result<f64> {
        require_nonzero("steps", self.steps)?;
        Ok(self.curve.sampled_length(self.steps))
    }
}
