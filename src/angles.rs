//! Angle unit helpers and the 2D bone-angle annotation
//!
//! Three angle-producing functions in this crate use three conventions:
//!
//! | source                                   | unit    | offset |
//! |------------------------------------------|---------|--------|
//! | [`Euler`](crate::euler::Euler)           | degrees | +180   |
//! | [`YawPitchRoll`](crate::yaw_pitch_roll::YawPitchRoll) | radians | none |
//! | [`angle_between_points`]                 | degrees | none   |
//!
//! The helpers below convert between the shifted-degree convention and
//! plain radians.

use crate::vector::Point2;

/// Radians to degrees, shifted by +180.
///
/// Maps [-π, π] onto [0, 360]. Values outside that range are neither
/// clamped nor wrapped.
pub fn shifted_degrees(radians: f64) -> f64 {
    radians.to_degrees() + 180.0
}

/// Inverse of [`shifted_degrees`].
pub fn unshifted_radians(shifted: f64) -> f64 {
    (shifted - 180.0).to_radians()
}

/// Angle of the line from `p2` to `p1`, in degrees (-180 to 180].
///
/// `atan2(p1.y - p2.y, p1.x - p2.x)`, no offset. Used to annotate the angle
/// between a child joint's projected axis tip and its parent's.
pub fn angle_between_points(p1: Point2, p2: Point2) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    libm::atan2(dy, dx).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_angle_between_points() {
        let origin = Point2::new(0.0, 0.0);
        assert_abs_diff_eq!(angle_between_points(origin, Point2::new(1.0, 0.0)), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(angle_between_points(origin, Point2::new(0.0, 1.0)), -90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(angle_between_points(Point2::new(1.0, 1.0), origin), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_between_same_point() {
        let p = Point2::new(3.0, 4.0);
        assert_eq!(angle_between_points(p, p), 0.0);
    }

    #[test]
    fn test_shifted_degrees() {
        assert_abs_diff_eq!(shifted_degrees(0.0), 180.0);
        assert_abs_diff_eq!(shifted_degrees(-PI), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shifted_degrees(PI), 360.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shifted_degrees(FRAC_PI_2), 270.0, epsilon = 1e-12);
        // no wrapping
        assert_abs_diff_eq!(shifted_degrees(2.0 * PI), 540.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unshifted_radians() {
        assert_abs_diff_eq!(unshifted_radians(270.0), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(unshifted_radians(shifted_degrees(-1.25)), -1.25, epsilon = 1e-12);
    }
}
