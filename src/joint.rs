//! Skeletal Joint Topology
//!
//! The body tracker reports 25 joints per body. Each joint has a structural
//! parent (the next joint toward the spine base); the spine base is the root
//! and is its own parent.
//!
//! ```text
//!                     Head
//!                      |
//!                     Neck
//!                      |
//!   ShoulderRight - SpineShoulder - ShoulderLeft
//!        |             |               |
//!      Elbow        SpineMid         Elbow
//!        |             |               |
//!      Wrist        SpineBase        Wrist
//!        |          /     \            |
//!      Hand    HipRight  HipLeft     Hand
//!     /    \      |         |       /    \
//!  HandTip Thumb Knee      Knee  HandTip Thumb
//!                 |         |
//!               Ankle     Ankle
//!                 |         |
//!               Foot      Foot
//! ```
//!
//! Parents are listed explicitly for every joint. `SpineShoulder` hangs off
//! `SpineBase` directly, and thumbs hang off the hand, not the wrist.

use crate::error::{MathError, MathResult};

/// Number of tracked joints per body.
pub const JOINT_COUNT: usize = 25;

/// Tracked joint identifiers, numbered as the sensor numbers them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum JointType {
    SpineBase = 0,
    SpineMid = 1,
    Neck = 2,
    Head = 3,
    ShoulderLeft = 4,
    ElbowLeft = 5,
    WristLeft = 6,
    HandLeft = 7,
    ShoulderRight = 8,
    ElbowRight = 9,
    WristRight = 10,
    HandRight = 11,
    HipLeft = 12,
    KneeLeft = 13,
    AnkleLeft = 14,
    FootLeft = 15,
    HipRight = 16,
    KneeRight = 17,
    AnkleRight = 18,
    FootRight = 19,
    SpineShoulder = 20,
    HandTipLeft = 21,
    ThumbLeft = 22,
    HandTipRight = 23,
    ThumbRight = 24,
}

impl JointType {
    /// Every joint, in index order.
    pub const ALL: [JointType; JOINT_COUNT] = [
        Self::SpineBase,
        Self::SpineMid,
        Self::Neck,
        Self::Head,
        Self::ShoulderLeft,
        Self::ElbowLeft,
        Self::WristLeft,
        Self::HandLeft,
        Self::ShoulderRight,
        Self::ElbowRight,
        Self::WristRight,
        Self::HandRight,
        Self::HipLeft,
        Self::KneeLeft,
        Self::AnkleLeft,
        Self::FootLeft,
        Self::HipRight,
        Self::KneeRight,
        Self::AnkleRight,
        Self::FootRight,
        Self::SpineShoulder,
        Self::HandTipLeft,
        Self::ThumbLeft,
        Self::HandTipRight,
        Self::ThumbRight,
    ];

    /// The skeleton root.
    pub const ROOT: JointType = Self::SpineBase;

    /// Structural parent of this joint. The root returns itself.
    pub const fn parent(self) -> JointType {
        match self {
            Self::SpineBase => Self::SpineBase,
            Self::SpineMid => Self::SpineBase,
            Self::SpineShoulder => Self::SpineBase,
            Self::Neck => Self::SpineShoulder,
            Self::Head => Self::Neck,

            Self::ShoulderLeft => Self::SpineShoulder,
            Self::ElbowLeft => Self::ShoulderLeft,
            Self::WristLeft => Self::ElbowLeft,
            Self::HandLeft => Self::WristLeft,
            Self::HandTipLeft => Self::HandLeft,
            Self::ThumbLeft => Self::HandLeft,

            Self::ShoulderRight => Self::SpineShoulder,
            Self::ElbowRight => Self::ShoulderRight,
            Self::WristRight => Self::ElbowRight,
            Self::HandRight => Self::WristRight,
            Self::HandTipRight => Self::HandRight,
            Self::ThumbRight => Self::HandRight,

            Self::HipLeft => Self::SpineBase,
            Self::KneeLeft => Self::HipLeft,
            Self::AnkleLeft => Self::KneeLeft,
            Self::FootLeft => Self::AnkleLeft,

            Self::HipRight => Self::SpineBase,
            Self::KneeRight => Self::HipRight,
            Self::AnkleRight => Self::KneeRight,
            Self::FootRight => Self::AnkleRight,
        }
    }

    /// True only for the self-parented root.
    pub const fn is_root(self) -> bool {
        matches!(self, Self::SpineBase)
    }

    /// Sensor index of this joint.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for JointType {
    type Error = MathError;

    fn try_from(raw: u8) -> MathResult<Self> {
        Self::ALL
            .get(raw as usize)
            .copied()
            .ok_or(MathError::UnknownJoint(raw))
    }
}

impl From<JointType> for u8 {
    fn from(joint: JointType) -> Self {
        joint as u8
    }
}

/// Structural parent of `joint`; the root maps to itself.
pub const fn parent_joint(joint: JointType) -> JointType {
    joint.parent()
}

/// Bones drawn between tracked joints, as (from, to) pairs.
pub const BONES: [(JointType, JointType); 24] = {
    use JointType::*;
    [
        // Torso
        (Head, Neck),
        (Neck, SpineShoulder),
        (SpineShoulder, SpineMid),
        (SpineMid, SpineBase),
        (SpineShoulder, ShoulderRight),
        (SpineShoulder, ShoulderLeft),
        (SpineBase, HipRight),
        (SpineBase, HipLeft),
        // Right arm
        (ShoulderRight, ElbowRight),
        (ElbowRight, WristRight),
        (WristRight, HandRight),
        (HandRight, HandTipRight),
        (WristRight, ThumbRight),
        // Left arm
        (ShoulderLeft, ElbowLeft),
        (ElbowLeft, WristLeft),
        (WristLeft, HandLeft),
        (HandLeft, HandTipLeft),
        (WristLeft, ThumbLeft),
        // Right leg
        (HipRight, KneeRight),
        (KneeRight, AnkleRight),
        (AnkleRight, FootRight),
        // Left leg
        (HipLeft, KneeLeft),
        (KneeLeft, AnkleLeft),
        (AnkleLeft, FootLeft),
    ]
};
