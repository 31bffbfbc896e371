//! Shared vector math helpers
//!
//! Thin additions on top of cgmath: safe normalization, component clamping,
//! and the yaw/pitch to view-direction conversion used by both the camera
//! rig and the movement controller.

use cgmath::{Angle, Deg, InnerSpace, Vector3};

/// World up axis (+Y).
pub const WORLD_UP: Vector3<f32> = Vector3::new(0.0, 1.0, 0.0);

/// Magnitudes below this are treated as zero-length.
const NORMALIZE_EPSILON: f32 = 1e-6;

/// Normalizes a vector, or returns `None` when its magnitude is ~zero.
///
/// Every normalization on the movement path goes through here; a degenerate
/// direction means "no movement", never NaN.
pub fn try_normalize(v: Vector3<f32>) -> Option<Vector3<f32>> {
    let mag = v.magnitude();
    if mag < NORMALIZE_EPSILON {
        None
    } else {
        Some(v / mag)
    }
}

/// Clamps each component of `v` to `[min, max]`.
pub fn clamp_vec(v: Vector3<f32>, min: f32, max: f32) -> Vector3<f32> {
    Vector3::new(
        v.x.clamp(min, max),
        v.y.clamp(min, max),
        v.z.clamp(min, max),
    )
}

/// Converts yaw/pitch angles into a unit view direction.
///
/// Yaw 0 faces -Z in a right-handed, Y-up world; positive yaw turns right,
/// positive pitch looks up.
pub fn direction_from_angles(yaw: Deg<f32>, pitch: Deg<f32>) -> Vector3<f32> {
    Vector3::new(
        yaw.sin() * pitch.cos(),
        pitch.sin(),
        -yaw.cos() * pitch.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < 1e-5
    }

    #[test]
    fn test_try_normalize_unit() {
        let v = try_normalize(Vector3::new(3.0, 0.0, 4.0)).unwrap();
        assert!(approx_eq(v, Vector3::new(0.6, 0.0, 0.8)));
    }

    #[test]
    fn test_try_normalize_zero() {
        assert!(try_normalize(Vector3::new(0.0, 0.0, 0.0)).is_none());
        assert!(try_normalize(Vector3::new(1e-8, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_clamp_vec() {
        let v = clamp_vec(Vector3::new(-2.0, 0.5, 7.0), 0.0, 1.0);
        assert_eq!(v, Vector3::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_direction_yaw_zero_faces_negative_z() {
        let dir = direction_from_angles(Deg(0.0), Deg(0.0));
        assert!(approx_eq(dir, Vector3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_direction_yaw_right_angle() {
        let dir = direction_from_angles(Deg(90.0), Deg(0.0));
        assert!(approx_eq(dir, Vector3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_direction_pitch_up() {
        let dir = direction_from_angles(Deg(0.0), Deg(90.0));
        assert!(approx_eq(dir, Vector3::new(0.0, 1.0, 0.0)));
    }
}
