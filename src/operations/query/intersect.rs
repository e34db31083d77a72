use crate::error::{require_nonzero, GeometryError, Result};
use crate::geometry::SmoothCurve;
use crate::math::intersect_2d::{point_at_xz, segment_params_xz};
use crate::math::{Vector3, INTERSECTION_EPSILON};
use crate::tessellation::{SamplingParams, DEFAULT_PART_COUNT};

/// Result of a curve-curve intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveIntersection {
    /// The intersection point. Y is the mean height of the two crossing pieces.
    pub point: Vector3,
    /// Arc-length fraction on the first curve where the crossing piece starts.
    pub coef_a: f64,
    /// Arc-length fraction on the second curve where the crossing piece starts.
    pub coef_b: f64,
}

/// Finds the first crossing of two curve segments on the XZ ground plane.
///
/// Each curve is cut into `part_count` pieces of equal arc length, sampled
/// at `pos / length` on the curve as given, and every pair of pieces is
/// tested as a pair of straight segments. Pieces of curve A are visited in
/// the outer loop.
///
/// Only the first crossing in that order is reported. A crossing that lies
/// at the open start of the first piece or the open end of the last piece
/// of either curve ends the search with no result.
pub struct CurveCurveIntersect<'a> {
    curve_a: &'a SmoothCurve,
    length_a: f64,
    curve_b: &'a SmoothCurve,
    length_b: f64,
    part_count: usize,
}

impl<'a> CurveCurveIntersect<'a> {
    /// Creates a new `CurveCurveIntersect` query.
    ///
    /// `length_a` and `length_b` are the arc lengths of the curves, usually
    /// from [`SmoothCurve::estimate_length`].
    #[must_use]
    pub fn new(
        curve_a: &'a SmoothCurve,
        length_a: f64,
        curve_b: &'a SmoothCurve,
        length_b: f64,
    ) -> Self {
        Self {
            curve_a,
            length_a,
            curve_b,
            length_b,
            part_count: DEFAULT_PART_COUNT,
        }
    }

    /// Sets the number of pieces each curve is cut into.
    #[must_use]
    pub fn with_part_count(mut self, part_count: usize) -> Self {
        self.part_count = part_count;
        self
    }

    /// Takes the piece count from sampling parameters.
    #[must_use]
    pub fn with_params(self, params: &SamplingParams) -> Self {
        self.with_part_count(params.part_count)
    }

    /// Executes the query.
    ///
    /// Curves sharing a start point meet there at coefs `(0, 0)`; curves
    /// sharing an end point meet there at `(1, 1)`. These checks come before
    /// any other.
    ///
    /// # Errors
    ///
    /// Returns an error if the piece count is zero or either length is zero
    /// or not finite. A negative length samples the same fractions as its
    /// absolute value.
    pub fn execute(&self) -> Result<Option<CurveIntersection>> {
        if self.curve_a.start() == self.curve_b.start() {
            return Ok(Some(CurveIntersection {
                point: *self.curve_a.start(),
                coef_a: 0.0,
                coef_b: 0.0,
            }));
        }
        if self.curve_a.end() == self.curve_b.end() {
            return Ok(Some(CurveIntersection {
                point: *self.curve_a.end(),
                coef_a: 1.0,
                coef_b: 1.0,
            }));
        }

        require_nonzero("part_count", self.part_count)?;
        require_usable_length("length_a", self.length_a)?;
        require_usable_length("length_b", self.length_b)?;

        Ok(self.search())
    }

    #[allow(clippy::cast_precision_loss)]
    fn search(&self) -> Option<CurveIntersection> {
        let parts = self.part_count as f64;
        let step_a = self.length_a / parts;
        let step_b = self.length_b / parts;
        let last = self.part_count - 1;

        for i in 0..self.part_count {
            let pos_a = i as f64 * step_a;
            let start_a = self.curve_a.position_at(pos_a / self.length_a);
            let end_a = self.curve_a.position_at((pos_a + step_a) / self.length_a);

            for j in 0..self.part_count {
                let pos_b = j as f64 * step_b;
                let start_b = self.curve_b.position_at(pos_b / self.length_b);
                let end_b = self.curve_b.position_at((pos_b + step_b) / self.length_b);

                let Some((mu_a, mu_b)) =
                    segment_params_xz(&start_a, &end_a, &start_b, &end_b, INTERSECTION_EPSILON)
                else {
                    continue;
                };
                if !(0.0..=1.0).contains(&mu_a) || !(0.0..=1.0).contains(&mu_b) {
                    continue;
                }

                if at_open_end(mu_a, i, last) || at_open_end(mu_b, j, last) {
                    tracing::debug!(i, j, mu_a, mu_b, "crossing at curve end, search stopped");
                    return None;
                }

                let y = (start_a.y + end_a.y + start_b.y + end_b.y) / 4.0;
                let point = point_at_xz(&start_a, &end_a, mu_a, y);
                tracing::debug!(i, j, ?point, "curves cross");
                return Some(CurveIntersection {
                    point,
                    coef_a: pos_a / self.length_a,
                    coef_b: pos_b / self.length_b,
                });
            }
        }

        None
    }
}

/// Finds the first XZ crossing of two curves, see [`CurveCurveIntersect`].
///
/// # Errors
///
/// Returns an error if `part_count` is zero or either length is zero or not
/// finite.
pub fn find_first_intersection(
    curve_a: &SmoothCurve,
    length_a: f64,
    curve_b: &SmoothCurve,
    length_b: f64,
    part_count: usize,
) -> Result<Option<CurveIntersection>> {
    CurveCurveIntersect::new(curve_a, length_a, curve_b, length_b)
        .with_part_count(part_count)
        .execute()
}

/// Whether `mu` sits on the start of piece 0 or the end of the last piece.
fn at_open_end(mu: f64, index: usize, last: usize) -> bool {
    (mu < INTERSECTION_EPSILON && index == 0) || (mu > 1.0 - INTERSECTION_EPSILON && index == last)
}

/// Only the ratio `pos / length` is used, so any non-zero finite length works.
fn require_usable_length(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value == 0.0 {
        return Err(GeometryError::Degenerate(format!(
            "{parameter} must be finite and non-zero, got {value}"
        ))
        .into());
    }
    Ok(())
}
