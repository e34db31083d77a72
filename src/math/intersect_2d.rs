use super::Vector3;

/// Parametric intersection of two segments projected onto the XZ plane.
///
/// Segment A runs from `a0` to `a1`, segment B from `b0` to `b1`; the Y
/// coordinate is ignored. Returns `(mu_a, mu_b)` such that
/// `a0 + mu_a * (a1 - a0)` and `b0 + mu_b * (b1 - b0)` meet in XZ, or `None`
/// when the cross-product denominator is smaller than `epsilon` (parallel or
/// degenerate segments).
///
/// The parameters are not range-checked: values outside `[0, 1]` describe an
/// intersection of the supporting lines beyond the segment ends.
#[must_use]
pub fn segment_params_xz(
    a0: &Vector3,
    a1: &Vector3,
    b0: &Vector3,
    b1: &Vector3,
    epsilon: f64,
) -> Option<(f64, f64)> {
    let (dax, daz) = (a1.x - a0.x, a1.z - a0.z);
    let (dbx, dbz) = (b1.x - b0.x, b1.z - b0.z);
    let (ox, oz) = (a0.x - b0.x, a0.z - b0.z);

    let denom = dbz * dax - dbx * daz;
    if denom.abs() < epsilon {
        return None;
    }

    let nume_a = dbx * oz - dbz * ox;
    let nume_b = dax * oz - daz * ox;
    Some((nume_a / denom, nume_b / denom))
}

/// Linear interpolation in XZ: `a0 + mu * (a1 - a0)`, with Y fixed to `y`.
#[must_use]
pub fn point_at_xz(a0: &Vector3, a1: &Vector3, mu: f64, y: f64) -> Vector3 {
    Vector3::new(
        a0.x + mu * (a1.x - a0.x),
        y,
        a0.z + mu * (a1.z - a0.z),
    )
}
