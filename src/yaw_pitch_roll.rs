//! Conversion between Quaternions and Euler angles (Yaw, Pitch, Roll)
//!
//! While quaternions are used internally for calculations, Euler angles are:
//! - More intuitive for humans to understand
//! - Directly correspond to physical rotations
//!
//! The conversion process:
//! 1. Computes the singularity test value `xy + zw`
//! 2. Near ±0.5 (gimbal lock) pins pitch to ±π/2 and folds all remaining
//!    rotation into yaw
//! 3. Otherwise extracts the angles with atan2/asin
//!
//! Unlike [`Euler`](crate::euler::Euler), results stay in radians with no
//! offset.

use crate::config::YPR_SINGULARITY_THRESHOLD;
use crate::quaternion::Quaternion;
use core::f64::consts::FRAC_PI_2;

/// Represents orientation as three angles in radians.
///
/// Note: within 2^-10 of the singularity the extraction switches to the
/// gimbal-lock form, where roll is reported as 0.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YawPitchRoll {
    /// atan2(2yw - 2xz, 1 - 2y² - 2z²), -π to π radians
    pub yaw: f64,
    /// atan2(2xw - 2yz, 1 - 2x² - 2z²), -π to π radians
    pub pitch: f64,
    /// asin(2(xy + zw)), -π/2 to π/2 radians
    pub roll: f64,
}

impl From<Quaternion> for YawPitchRoll {
    /// Converts a quaternion to Euler angles (Yaw, Pitch, Roll).
    ///
    /// Note: The resulting angles are in radians:
    /// - Yaw: -π to π
    /// - Pitch: -π to π, or exactly ±π/2 when gimbal locked
    /// - Roll: -π/2 to π/2, 0 when gimbal locked
    fn from(q: Quaternion) -> Self {
        let (w, x, y, z) = (q.w as f64, q.x as f64, q.y as f64, q.z as f64);

        let test = x * y + z * w;

        if test > YPR_SINGULARITY_THRESHOLD || test < -YPR_SINGULARITY_THRESHOLD {
            log::trace!("yaw/pitch/roll: gimbal lock at xy + zw = {}", test);
            let sign = if test > 0.0 { 1.0 } else { -1.0 };
            return Self {
                yaw: sign * 2.0 * libm::atan2(x, w),
                pitch: sign * FRAC_PI_2,
                roll: 0.0,
            };
        }

        Self {
            yaw: libm::atan2(2.0 * y * w - 2.0 * x * z, 1.0 - 2.0 * y * y - 2.0 * z * z),
            pitch: libm::atan2(2.0 * x * w - 2.0 * y * z, 1.0 - 2.0 * x * x - 2.0 * z * z),
            roll: libm::asin(2.0 * test),
        }
    }
}

/// Converts the components (w, x, y, z) of an orientation into yaw, pitch
/// and roll in radians.
pub fn quaternion_to_yaw_pitch_roll(w: f32, x: f32, y: f32, z: f32) -> YawPitchRoll {
    YawPitchRoll::from(Quaternion::new(w, x, y, z))
}
