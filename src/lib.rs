// src/lib.rs
//! Sylva 3D Scene Engine Core
//!
//! Loads OBJ/MTL assets into renderable face lists, scatters them into a
//! scene with seeded determinism, and drives first/third-person camera
//! movement from a flat input-event stream. Rendering and windowing stay
//! outside the crate; front-ends walk the scene and forward events.

pub mod asset;
pub mod console;
pub mod control;
pub mod math;
pub mod prelude;
pub mod scene;
pub mod state;

// Re-export main types for convenience
pub use state::SceneState;

use std::path::Path;

use asset::{LoadError, LoadOptions, Mesh};

/// Loads a geometry file with default options
pub fn load_mesh<P: AsRef<Path>>(path: P) -> Result<Mesh, LoadError> {
    Mesh::load(path.as_ref(), &LoadOptions::default())
}
