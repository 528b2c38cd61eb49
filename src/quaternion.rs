use core::ops::{Add, Mul, Neg, Sub};

use crate::config::EQUALITY_TOLERANCE;
use crate::error::{MathError, MathResult};
use crate::vector::Vector3;

/// A quaternion representing 3D rotation/orientation.
///
/// Quaternions provide a way to represent 3D rotations that avoids the
/// gimbal lock problems associated with Euler angles (yaw, pitch, roll).
/// They consist of:
/// - A scalar component (w): represents the amount of rotation
/// - Three vector components (x,y,z): represent the axis of rotation
///
/// Properties:
/// - The sensor reports one orientation quaternion per tracked joint, in
///   camera space
/// - The identity (1, 0, 0, 0) leaves every vector unchanged
/// - Magnitude should be 1 for a pure rotation, but nothing enforces it:
///   callers normalize where orientation semantics require it
///
/// All operations return new values; operands are never mutated.
///
/// Equality is approximate: two quaternions compare equal when every
/// component differs by less than [`EQUALITY_TOLERANCE`]. `!=` is the logical
/// negation of `==`.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "postcard-experimental", derive(postcard::experimental::max_size::MaxSize))]
pub struct Quaternion {
    /// Scalar (real) component
    pub w: f32,
    /// X (i) component
    pub x: f32,
    /// Y (j) component
    pub y: f32,
    /// Z (k) component
    pub z: f32,
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Pure-vector quaternion (0, v).
    pub const fn from_vector(v: Vector3) -> Self {
        Self::new(0.0, v.x, v.y, v.z)
    }

    /// Rotation of `angle` radians around `axis`.
    ///
    /// `axis` must be a unit vector for the result to be a unit quaternion.
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Self {
        let (s, c) = libm::sincosf(angle * 0.5);
        Self::new(c, axis.x * s, axis.y * s, axis.z * s)
    }

    pub fn w(&self) -> f32 {
        self.w
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    /// Vector part (x, y, z).
    pub fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Euclidean norm: the square root of the sum of squares of all components.
    ///
    /// For a pure rotation quaternion (no scaling), the norm should be 1.
    pub fn norm(&self) -> f32 {
        libm::sqrtf(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Conjugate (w, -x, -y, -z). Inverse of a unit quaternion.
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Scales the quaternion to norm 1.
    ///
    /// Fails with [`MathError::DivisionByZero`] for the zero quaternion.
    pub fn normalize(&self) -> MathResult<Self> {
        self.div_scalar(self.norm())
    }

    /// `self / f`, computed as `(1 / f) * self`.
    pub fn div_scalar(&self, f: f32) -> MathResult<Self> {
        if f == 0.0 {
            log::debug!("rejected quaternion division by zero scalar");
            return Err(MathError::DivisionByZero);
        }
        Ok(*self * (1.0 / f))
    }

    /// `f / q`, computed as `f / ‖q‖² * conj(q)`.
    pub fn scalar_div(f: f32, q: &Self) -> MathResult<Self> {
        let norm = q.norm();
        if norm == 0.0 {
            log::debug!("rejected scalar division by zero-norm quaternion");
            return Err(MathError::DivisionByZero);
        }
        Ok(f / (norm * norm) * q.conjugate())
    }

    /// Multiplicative inverse `1 / self`.
    pub fn inverse(&self) -> MathResult<Self> {
        Self::scalar_div(1.0, self)
    }

    /// `self / rhs`, computed as `self * conj(rhs) / ‖rhs‖²`.
    ///
    /// Fails with [`MathError::DivisionByZero`] when `rhs` has zero norm.
    pub fn checked_div(&self, rhs: &Self) -> MathResult<Self> {
        let norm = rhs.norm();
        (*self * rhs.conjugate()).div_scalar(norm * norm)
    }

    /// Rotates `v` by this quaternion.
    ///
    /// Computes `q * (0, v) * conj(q)` and keeps the vector part. Only a unit
    /// quaternion leaves the length of `v` unchanged.
    pub fn rotate(&self, v: Vector3) -> Vector3 {
        (*self * Self::from_vector(v) * self.conjugate()).vector()
    }

    /// Componentwise comparison with an explicit tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        libm::fabsf(self.w - other.w) < tolerance
            && libm::fabsf(self.x - other.x) < tolerance
            && libm::fabsf(self.y - other.y) < tolerance
            && libm::fabsf(self.z - other.z) < tolerance
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EQUALITY_TOLERANCE)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product `self * rhs` (not commutative).
    fn mul(self, rhs: Self) -> Self {
        let (q1, q2) = (self, rhs);
        Self::new(
            q1.w * q2.w - q1.x * q2.x - q1.y * q2.y - q1.z * q2.z,
            q1.w * q2.x + q1.x * q2.w + q1.y * q2.z - q1.z * q2.y,
            q1.w * q2.y + q1.y * q2.w + q1.z * q2.x - q1.x * q2.z,
            q1.w * q2.z + q1.z * q2.w + q1.x * q2.y - q1.y * q2.x,
        )
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    fn mul(self, f: f32) -> Self {
        Self::new(f * self.w, f * self.x, f * self.y, f * self.z)
    }
}

impl Mul<Quaternion> for f32 {
    type Output = Quaternion;

    fn mul(self, q: Quaternion) -> Quaternion {
        q * self
    }
}

impl From<[f32; 4]> for Quaternion {
    /// Components in (w, x, y, z) order.
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Quaternion> for [f32; 4] {
    fn from(q: Quaternion) -> Self {
        [q.w, q.x, q.y, q.z]
    }
}
