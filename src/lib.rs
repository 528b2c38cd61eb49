#![cfg_attr(not(test), no_std)]

pub mod angles;
pub mod config;
pub mod error;
pub mod euler;
pub mod frame;
pub mod joint;
pub mod quaternion;
pub mod vector;
pub mod yaw_pitch_roll;
