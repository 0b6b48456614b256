//! Euler rotation used to tumble comet geometry.

use glam::Vec3;

/// Rotate `point` by `angles` (radians), applying the X, Y and Z axis
/// rotations in that order. Rotations do not commute, so the order is fixed.
pub fn rotate(point: Vec3, angles: Vec3) -> Vec3 {
    let Vec3 { mut x, mut y, mut z } = point;

    // Around X
    let (sin, cos) = angles.x.sin_cos();
    let ry = y * cos - z * sin;
    let rz = y * sin + z * cos;
    y = ry;
    z = rz;

    // Around Y
    let (sin, cos) = angles.y.sin_cos();
    let rx = x * cos + z * sin;
    let rz = -x * sin + z * cos;
    x = rx;
    z = rz;

    // Around Z
    let (sin, cos) = angles.z.sin_cos();
    let rx = x * cos - y * sin;
    let ry = x * sin + y * cos;

    Vec3::new(rx, ry, z)
}

/// Rotate around the X axis only.
#[inline]
pub fn rotate_x(point: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(
        point.x,
        point.y * cos - point.z * sin,
        point.y * sin + point.z * cos,
    )
}

/// Rotate around the Y axis only.
#[inline]
pub fn rotate_y(point: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(
        point.x * cos + point.z * sin,
        point.y,
        -point.x * sin + point.z * cos,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn zero_angles_is_identity() {
        let p = Vec3::new(3.0, -4.0, 5.0);
        assert!(approx(rotate(p, Vec3::ZERO), p));
    }

    #[test]
    fn zero_rotation_after_x_rotation_is_noop() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let once = rotate(p, Vec3::new(0.7, 0.0, 0.0));
        let twice = rotate(once, Vec3::ZERO);
        assert!(approx(once, twice));
    }

    #[test]
    fn quarter_turn_about_each_axis() {
        // X: y -> z
        assert!(approx(rotate(Vec3::Y, Vec3::new(FRAC_PI_2, 0.0, 0.0)), Vec3::Z));
        // Y: z -> x
        assert!(approx(rotate(Vec3::Z, Vec3::new(0.0, FRAC_PI_2, 0.0)), Vec3::X));
        // Z: x -> y
        assert!(approx(rotate(Vec3::X, Vec3::new(0.0, 0.0, FRAC_PI_2)), Vec3::Y));
    }

    #[test]
    fn order_is_x_then_y_then_z() {
        let p = Vec3::new(0.0, 1.0, 0.0);
        let angles = Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0);
        // X takes y to z, then Y takes z to x.
        assert!(approx(rotate(p, angles), Vec3::X));
        // Reversed order would leave y untouched by Y and send it to z.
        let reversed = rotate_x(rotate_y(p, FRAC_PI_2), FRAC_PI_2);
        assert!(approx(reversed, Vec3::Z));
    }

    #[test]
    fn single_axis_helpers_match_rotate() {
        let p = Vec3::new(2.0, -1.0, 0.5);
        assert!(approx(rotate_x(p, 0.3), rotate(p, Vec3::new(0.3, 0.0, 0.0))));
        assert!(approx(rotate_y(p, -1.2), rotate(p, Vec3::new(0.0, -1.2, 0.0))));
    }

    #[test]
    fn rotation_preserves_length() {
        let p = Vec3::new(10.0, 20.0, -30.0);
        let r = rotate(p, Vec3::new(0.4, 1.9, -2.2));
        assert!((r.length() - p.length()).abs() < 1e-3);
    }
}
