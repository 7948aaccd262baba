// 2D math helpers shared by the physics module
//
// Angles are in radians, positive is counter-clockwise.

use glam::{Mat2, Vec2};

/// Rotate a vector counter-clockwise by `angle` radians
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Mat2::from_angle(angle) * v
}

/// 2D cross product of two vectors, returned as the z component
///
/// Positive when `b` lies counter-clockwise of `a`.
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Cross product of a scalar (z axis) with a vector
pub fn cross_scalar(w: f32, v: Vec2) -> Vec2 {
    Vec2::new(-w * v.y, w * v.x)
}

/// Transform a world point into a frame located at `position` and rotated by `angle`
pub fn to_local_frame(world_point: Vec2, position: Vec2, angle: f32) -> Vec2 {
    rotate(world_point - position, -angle)
}

/// Transform a point expressed in a frame at `position`/`angle` back to world space
pub fn to_global_frame(local_point: Vec2, position: Vec2, angle: f32) -> Vec2 {
    rotate(local_point, angle) + position
}

/// Check if two f32 values are approximately equal
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate(Vec2::X, FRAC_PI_2);
        assert!(approx_equal(v.x, 0.0, 1e-6));
        assert!(approx_equal(v.y, 1.0, 1e-6));
    }

    #[test]
    fn test_cross_sign() {
        assert_eq!(cross(Vec2::X, Vec2::Y), 1.0);
        assert_eq!(cross(Vec2::Y, Vec2::X), -1.0);
        assert_eq!(cross(Vec2::new(2.0, 4.0), Vec2::new(1.0, 2.0)), 0.0);
    }

    #[test]
    fn test_cross_scalar_is_perpendicular() {
        let r = Vec2::new(3.0, -1.0);
        let v = cross_scalar(2.0, r);
        assert_eq!(v.dot(r), 0.0);
        assert_eq!(v, Vec2::new(2.0, 6.0));
    }

    #[test]
    fn test_frame_roundtrip() {
        let position = Vec2::new(-4.0, 7.5);
        let angle = 0.3 * PI;
        let p = Vec2::new(1.25, -2.0);

        let back = to_global_frame(to_local_frame(p, position, angle), position, angle);
        assert!(back.abs_diff_eq(p, 1e-5));

        let back = to_local_frame(to_global_frame(p, position, angle), position, angle);
        assert!(back.abs_diff_eq(p, 1e-5));
    }

    #[test]
    fn test_local_frame_translates_then_rotates() {
        // A point one unit "ahead" of a body facing +y is (1, 0) locally
        let local = to_local_frame(Vec2::new(2.0, 4.0), Vec2::new(2.0, 3.0), FRAC_PI_2);
        assert!(local.abs_diff_eq(Vec2::new(1.0, 0.0), 1e-6));
    }

    #[test]
    fn test_approx_equal() {
        assert!(approx_equal(1.0, 1.00001, 0.0001));
        assert!(!approx_equal(1.0, 1.1, 0.01));
    }
}
