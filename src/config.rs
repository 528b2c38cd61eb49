//! Orientation Math Configuration
//!
//! Tunables shared by the conversion and local-frame code:
//! - How the Euler conversion detects the pitch singularity
//! - How long the drawn local coordinate axes are
//! - Tolerances used when comparing quaternions

/// Component tolerance for quaternion equality.
pub const EQUALITY_TOLERANCE: f32 = 1e-5;

/// Distance of the singularity threshold below 0.5 used by
/// [`YawPitchRoll`](crate::yaw_pitch_roll::YawPitchRoll) (2^-10).
pub const YPR_SINGULARITY_EPSILON: f64 = 0.000_976_562_5;

/// `|xy + zw|` above which yaw/pitch/roll extraction treats the
/// orientation as gimbal locked.
pub const YPR_SINGULARITY_THRESHOLD: f64 = 0.5 - YPR_SINGULARITY_EPSILON;

/// Length of each local coordinate axis in camera space, in meters.
pub const DEFAULT_AXIS_LENGTH: f32 = 0.1;

/// How [`Euler`](crate::euler::Euler) decides that `xy + zw` sits on the
/// pitch singularity (±0.5).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SingularityTest {
    /// Exact floating-point equality with ±0.5
    /// - Only hit by synthetic inputs such as (0.5, 0.5, 0.5, 0.5)
    /// - Sensor data practically never takes this branch
    #[default]
    Exact,

    /// `|(xy + zw) ∓ 0.5| <= epsilon`
    /// - Catches orientations that are numerically near gimbal lock
    /// - Changes results for inputs the exact test passes through
    Within(f64),
}

impl SingularityTest {
    /// Returns `1.0` or `-1.0` when `test` is on the positive or negative
    /// singularity, `None` otherwise.
    pub fn pole(self, test: f64) -> Option<f64> {
        match self {
            Self::Exact => {
                if test == 0.5 {
                    Some(1.0)
                } else if test == -0.5 {
                    Some(-1.0)
                } else {
                    None
                }
            }
            Self::Within(epsilon) => {
                if libm::fabs(test - 0.5) <= epsilon {
                    Some(1.0)
                } else if libm::fabs(test + 0.5) <= epsilon {
                    Some(-1.0)
                } else {
                    None
                }
            }
        }
    }
}

/// Settings for building per-joint local coordinate frames.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameConfig {
    /// Axis length in meters
    pub axis_length: f32,
    /// Singularity test for Euler conversions of joint orientations
    pub singularity: SingularityTest,
}

impl Default for FrameConfig {
    /// 10 cm axes, exact singularity test.
    fn default() -> Self {
        Self {
            axis_length: DEFAULT_AXIS_LENGTH,
            singularity: SingularityTest::Exact,
        }
    }
}
