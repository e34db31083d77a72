use super::{Vector3, HEADING_EPSILON};

/// Euler-style heading of a direction vector, in degrees.
///
/// `roll` is always `0.0`: a single direction vector carries no twist.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadingAngles {
    /// Azimuth around the Y axis, in `[0, 360)`.
    pub yaw: f64,
    /// Elevation above the XZ plane, in `[-90, 90]`.
    pub pitch: f64,
    /// Always zero.
    pub roll: f64,
}

/// Decomposes a forward vector into yaw/pitch/roll.
///
/// The coordinate frame is right-handed and Y-up, with Z as depth and X as
/// the lateral axis. A forward vector along `-Z` has yaw 0, `-X` has yaw 90,
/// `+Z` has yaw 180 and `+X` has yaw 270.
///
/// Vectors shorter than [`HEADING_EPSILON`] produce all-zero angles.
#[must_use]
pub fn decompose(forward: &Vector3) -> HeadingAngles {
    let length = forward.norm();
    if length < HEADING_EPSILON {
        return HeadingAngles::default();
    }

    let pitch = (forward.y / length).clamp(-1.0, 1.0).asin().to_degrees();
    let yaw = yaw_of(forward);

    HeadingAngles {
        yaw,
        pitch,
        roll: 0.0,
    }
}

fn yaw_of(forward: &Vector3) -> f64 {
    // Nearly in the XY plane: atan(x / z) would blow up.
    if forward.z.abs() < HEADING_EPSILON {
        if forward.x < 0.0 {
            return 90.0;
        }
        if forward.x > 0.0 {
            return 270.0;
        }
        return 0.0;
    }

    // atan folds the +Z half-space onto the -Z one, hence the 180 shift.
    let angle = (forward.x / forward.z).atan().to_degrees();
    if forward.z < 0.0 {
        if angle < 0.0 {
            angle + 360.0
        } else {
            angle
        }
    } else {
        angle + 180.0
    }
}
