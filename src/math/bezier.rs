use super::Vector3;

/// Cubic Bernstein basis `((1-t)^3, 3t(1-t)^2, 3t^2(1-t), t^3)` at `t`.
#[must_use]
pub fn bernstein(t: f64) -> [f64; 4] {
    let q = 1.0 - t;
    [q * q * q, 3.0 * t * q * q, 3.0 * t * t * q, t * t * t]
}

/// First derivative of the cubic Bernstein basis at `t`.
///
/// Each entry is the quadratic `(a * t + b) * t + c` in Horner form.
#[must_use]
pub fn bernstein_dt(t: f64) -> [f64; 4] {
    const A: [f64; 4] = [-3.0, 9.0, -9.0, 3.0];
    const B: [f64; 4] = [6.0, -12.0, 6.0, 0.0];
    const C: [f64; 4] = [-3.0, 3.0, 0.0, 0.0];

    std::array::from_fn(|i| (A[i] * t + B[i]) * t + C[i])
}

/// Evaluates the cubic Bezier curve with control points `p0..p3` at `t`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate the polynomial.
#[must_use]
pub fn evaluate(p0: &Vector3, p1: &Vector3, p2: &Vector3, p3: &Vector3, t: f64) -> Vector3 {
    combine(bernstein(t), p0, p1, p2, p3)
}

/// Evaluates the first derivative `dB/dt` of the cubic Bezier curve at `t`.
#[must_use]
pub fn evaluate_derivative(
    p0: &Vector3,
    p1: &Vector3,
    p2: &Vector3,
    p3: &Vector3,
    t: f64,
) -> Vector3 {
    combine(bernstein_dt(t), p0, p1, p2, p3)
}

fn combine(c: [f64; 4], p0: &Vector3, p1: &Vector3, p2: &Vector3, p3: &Vector3) -> Vector3 {
    p0 * c[0] + p1 * c[1] + p2 * c[2] + p3 * c[3]
}
