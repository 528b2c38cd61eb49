//! Local Coordinate Frames
//!
//! Each tracked joint carries an orientation. Rotating the three unit axes
//! by that orientation, scaling them and placing them at the joint position
//! gives the joint's local coordinate frame. Projecting a child's axis tip
//! and its parent's axis tip onto the image plane gives the per-axis angle
//! annotation drawn next to each joint.
//!
//! Projection from camera space to the image plane belongs to the sensor
//! SDK; it is modelled by [`DepthProjector`].

use crate::angles::angle_between_points;
use crate::config::FrameConfig;
use crate::euler::Euler;
use crate::joint::{JointType, JOINT_COUNT};
use crate::quaternion::Quaternion;
use crate::vector::{Point2, Vector3};

/// Maps camera-space points onto the 2D image plane.
pub trait DepthProjector {
    fn project(&self, point: Vector3) -> Point2;
}

impl<F> DepthProjector for F
where
    F: Fn(Vector3) -> Point2,
{
    fn project(&self, point: Vector3) -> Point2 {
        self(point)
    }
}

/// Tips of a joint's three local axes in camera space.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalFrame {
    pub origin: Vector3,
    pub x_tip: Vector3,
    pub y_tip: Vector3,
    pub z_tip: Vector3,
}

impl LocalFrame {
    /// `origin + orientation.rotate(axis_length * e_i)` for each unit axis.
    pub fn new(origin: Vector3, orientation: Quaternion, axis_length: f32) -> Self {
        let tip = |axis: Vector3| origin + orientation.rotate(axis * axis_length);
        Self {
            origin,
            x_tip: tip(Vector3::UNIT_X),
            y_tip: tip(Vector3::UNIT_Y),
            z_tip: tip(Vector3::UNIT_Z),
        }
    }

    /// Axis tips projected onto the image plane, in x, y, z order.
    pub fn project<P: DepthProjector>(&self, projector: &P) -> [Point2; 3] {
        [
            projector.project(self.x_tip),
            projector.project(self.y_tip),
            projector.project(self.z_tip),
        ]
    }
}

/// Per-axis angle between a child's and its parent's projected axis tips,
/// in degrees (no offset).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisAngles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// One tracked joint: camera-space position and orientation.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointPose {
    pub position: Vector3,
    pub orientation: Quaternion,
}

/// Poses for every joint of one tracked body, indexed by [`JointType`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    joints: [JointPose; JOINT_COUNT],
}

impl Body {
    pub fn new(joints: [JointPose; JOINT_COUNT]) -> Self {
        Self { joints }
    }

    pub fn joint(&self, joint: JointType) -> &JointPose {
        &self.joints[joint.index()]
    }

    pub fn set_joint(&mut self, joint: JointType, pose: JointPose) {
        self.joints[joint.index()] = pose;
    }

    /// Local frame of `joint` with the configured axis length.
    pub fn local_frame(&self, joint: JointType, config: &FrameConfig) -> LocalFrame {
        let pose = self.joint(joint);
        LocalFrame::new(pose.position, pose.orientation, config.axis_length)
    }

    /// Shifted-degree Euler angles of `joint`'s orientation.
    pub fn euler(&self, joint: JointType, config: &FrameConfig) -> Euler {
        Euler::from_quaternion_with(self.joint(joint).orientation, config.singularity)
    }

    /// Angles between `joint`'s projected axis tips and its parent's.
    ///
    /// Returns `None` for the root, which has no parent to compare against.
    pub fn parent_child_angles<P: DepthProjector>(
        &self,
        joint: JointType,
        projector: &P,
        config: &FrameConfig,
    ) -> Option<AxisAngles> {
        if joint.is_root() {
            return None;
        }
        let parent = joint.parent();

        let [cx, cy, cz] = self.local_frame(joint, config).project(projector);
        let [px, py, pz] = self.local_frame(parent, config).project(projector);

        Some(AxisAngles {
            x: angle_between_points(cx, px),
            y: angle_between_points(cy, py),
            z: angle_between_points(cz, pz),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    /// Orthographic projection onto the camera's x/y plane, 1 px per mm.
    fn orthographic(p: Vector3) -> Point2 {
        Point2::new(p.x as f64 * 1000.0, p.y as f64 * 1000.0)
    }

    fn assert_vec_eq(a: Vector3, b: Vector3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = EPS);
        assert_abs_diff_eq!(a.y, b.y, epsilon = EPS);
        assert_abs_diff_eq!(a.z, b.z, epsilon = EPS);
    }

    #[test]
    fn test_identity_frame() {
        let origin = Vector3::new(0.1, 0.5, 2.0);
        let frame = LocalFrame::new(origin, Quaternion::IDENTITY, 0.1);
        assert_vec_eq(frame.x_tip, Vector3::new(0.2, 0.5, 2.0));
        assert_vec_eq(frame.y_tip, Vector3::new(0.1, 0.6, 2.0));
        assert_vec_eq(frame.z_tip, Vector3::new(0.1, 0.5, 2.1));
    }

    #[test]
    fn test_rotated_frame() {
        let q = Quaternion::from_axis_angle(Vector3::UNIT_Z, FRAC_PI_2);
        let frame = LocalFrame::new(Vector3::ZERO, q, 0.1);
        assert_vec_eq(frame.x_tip, Vector3::new(0.0, 0.1, 0.0));
        assert_vec_eq(frame.y_tip, Vector3::new(-0.1, 0.0, 0.0));
        assert_vec_eq(frame.z_tip, Vector3::new(0.0, 0.0, 0.1));
    }

    #[test]
    fn test_root_has_no_parent_angles() {
        let body = Body::default();
        let config = FrameConfig::default();
        assert_eq!(body.parent_child_angles(JointType::SpineBase, &orthographic, &config), None);
    }

    #[test]
    fn test_parent_child_angles() {
        let mut body = Body::default();
        body.set_joint(
            JointType::SpineBase,
            JointPose { position: Vector3::new(0.0, 0.0, 2.0), orientation: Quaternion::IDENTITY },
        );
        body.set_joint(
            JointType::SpineMid,
            JointPose { position: Vector3::new(0.0, 0.3, 2.0), orientation: Quaternion::IDENTITY },
        );
        let config = FrameConfig::default();

        let angles = body
            .parent_child_angles(JointType::SpineMid, &orthographic, &config)
            .unwrap();

        // every child tip sits 300 px straight above the matching parent tip
        assert_abs_diff_eq!(angles.x, 90.0, epsilon = 1e-3);
        assert_abs_diff_eq!(angles.y, 90.0, epsilon = 1e-3);
        assert_abs_diff_eq!(angles.z, 90.0, epsilon = 1e-3);
    }

    #[test]
    fn test_z_angle_uses_z_tips() {
        // child turned about x: its z tip drops 10 cm below its y tip
        let mut body = Body::default();
        body.set_joint(
            JointType::Head,
            JointPose {
                position: Vector3::new(0.2, 0.0, 2.0),
                orientation: Quaternion::from_axis_angle(Vector3::UNIT_X, FRAC_PI_2),
            },
        );
        body.set_joint(
            JointType::Neck,
            JointPose { position: Vector3::new(0.0, 0.0, 2.0), orientation: Quaternion::IDENTITY },
        );
        let angles = body
            .parent_child_angles(JointType::Head, &orthographic, &FrameConfig::default())
            .unwrap();

        // child z tip (200, -100) px, parent z tip (0, 0) px
        let expected = -(0.5_f64.atan().to_degrees());
        assert_abs_diff_eq!(angles.z, expected, epsilon = 1e-3);
        // child y tip (200, 0) px, parent y tip (0, 100) px
        assert_abs_diff_eq!(angles.y, expected, epsilon = 1e-3);
    }

    #[test]
    fn test_local_frame_uses_config_axis_length() {
        let body = Body::default();
        let config = FrameConfig { axis_length: 0.25, ..FrameConfig::default() };
        let frame = body.local_frame(JointType::Head, &config);
        assert_vec_eq(frame.x_tip, Vector3::new(0.25, 0.0, 0.0));
    }

    #[test]
    fn test_body_euler() {
        let body = Body::default();
        let e = body.euler(JointType::HandLeft, &FrameConfig::default());
        assert_eq!(e, Euler { x: 180.0, y: 180.0, z: 180.0 });
    }
}
