pub mod controller;
pub mod event;
pub mod rig;
pub mod winit_input;

// Re-export main types
pub use controller::{Controller, LOOK_SENSITIVITY, MOVE_STEP, PITCH_LIMIT, TICK_INTERVAL};
pub use event::{ControlEvent, KeyAction, MoveKey};
pub use rig::{CameraMode, CameraRig, ViewPose, FOLLOW_DISTANCE};
