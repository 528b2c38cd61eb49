//! Euler Angle Calculations (shifted degrees)
//!
//! Converts joint orientation quaternions into three angles in degrees,
//! each shifted by +180 so that [-π, π] maps onto [0, 360]:
//! - X: rotation extracted with atan2 over the y/w and x/z terms
//! - Y: rotation extracted with atan2 over the x/w and y/z terms
//! - Z: asin(2(xy + zw)), the axis that hits the singularity
//!
//! When `xy + zw` sits exactly on ±0.5 the orientation is gimbal locked:
//! X absorbs the whole rotation and Y is forced to zero. The exact
//! comparison is the default; [`SingularityTest::Within`] widens it.
//!
//! The asin argument is not clamped. Non-unit quaternions can push it out of
//! [-1, 1], in which case Z is NaN.

use crate::angles::shifted_degrees;
use crate::config::SingularityTest;
use crate::quaternion::Quaternion;

/// Orientation as three Euler angles in degrees, each offset by +180.
///
/// The identity orientation is (180, 180, 180).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Euler {
    /// atan2(2yw - 2xz, 1 - 2y² - 2z²), shifted degrees
    pub x: f64,
    /// atan2(2xw - 2yz, 1 - 2x² - 2z²), shifted degrees (0 rad at the poles)
    pub y: f64,
    /// asin(2xy + 2zw), shifted degrees
    pub z: f64,
}

impl Euler {
    /// Converts with an explicit singularity test.
    pub fn from_quaternion_with(q: Quaternion, singularity: SingularityTest) -> Self {
        let (x, y, z) = raw_angles(q, singularity);
        Self {
            x: shifted_degrees(x),
            y: shifted_degrees(y),
            z: shifted_degrees(z),
        }
    }
}

impl From<Quaternion> for Euler {
    /// Converts a quaternion using the exact ±0.5 singularity test.
    fn from(q: Quaternion) -> Self {
        Self::from_quaternion_with(q, SingularityTest::Exact)
    }
}

/// Converts the components (w, x, y, z) of an orientation into shifted-degree
/// Euler angles.
pub fn quaternion_to_euler(w: f32, x: f32, y: f32, z: f32) -> Euler {
    Euler::from(Quaternion::new(w, x, y, z))
}

/// Same extraction as [`Euler`] with Y and Z swapped, stored as `f32` the
/// way camera-space points are.
///
/// - `x`: atan2 yaw term
/// - `y`: asin(2xy + 2zw)
/// - `z`: atan2 x/w term, 0 rad at the poles
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraSpaceEuler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl CameraSpaceEuler {
    pub fn from_quaternion_with(q: Quaternion, singularity: SingularityTest) -> Self {
        let (x, y, z) = raw_angles(q, singularity);
        Self {
            x: shifted_degrees(x) as f32,
            y: shifted_degrees(z) as f32,
            z: shifted_degrees(y) as f32,
        }
    }
}

impl From<Quaternion> for CameraSpaceEuler {
    fn from(q: Quaternion) -> Self {
        Self::from_quaternion_with(q, SingularityTest::Exact)
    }
}

/// Unshifted radians for (X, Y, Z) as documented on [`Euler`].
///
/// The products feeding the singularity test, the asin argument and the
/// atan2 numerators stay in `f32`, so `xy + zw == ±0.5` matches the sensor's
/// single-precision components. Only the atan2 denominators and the
/// trigonometry run in `f64`.
fn raw_angles(q: Quaternion, singularity: SingularityTest) -> (f64, f64, f64) {
    let test = (q.x * q.y + q.z * q.w) as f64;
    let sin_z = (2.0 * q.x * q.y + 2.0 * q.z * q.w) as f64;
    let num_x = (2.0 * q.y * q.w - 2.0 * q.x * q.z) as f64;
    let num_y = (2.0 * q.x * q.w - 2.0 * q.y * q.z) as f64;

    let (w, x, y, z) = (q.w as f64, q.x as f64, q.y as f64, q.z as f64);

    let mut ax = libm::atan2(num_x, 1.0 - 2.0 * y * y - 2.0 * z * z);
    let az = libm::asin(sin_z);
    let mut ay = libm::atan2(num_y, 1.0 - 2.0 * x * x - 2.0 * z * z);

    if let Some(sign) = singularity.pole(test) {
        log::trace!("euler: gimbal lock at xy + zw = {}", test);
        ax = sign * 2.0 * libm::atan2(x, w);
        ay = 0.0;
    }

    (ax, ay, az)
}
