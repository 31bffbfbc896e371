//! # Sylva Prelude
//!
//! Convenient single import for the types a typical front-end touches.
//!
//! ```rust
//! use sylva::prelude::*;
//! ```

// Re-export asset loading
pub use crate::asset::{Face, LoadError, LoadOptions, Material, MaterialLibrary, Mesh};

// Re-export scene types
pub use crate::scene::{ForestBuilder, Kind, ObjectHandle, Scatter, Scene, SceneObject};

// Re-export camera and input control
pub use crate::control::{
    CameraMode, CameraRig, ControlEvent, Controller, KeyAction, MoveKey, ViewPose, TICK_INTERVAL,
};

// Re-export the console command surface and simulation state
pub use crate::console::{parse_command, spawn_console, ConsoleCommand};
pub use crate::state::SceneState;
