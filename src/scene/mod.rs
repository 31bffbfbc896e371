pub mod forest;
pub mod object;
pub mod scene;

// Re-export main types
pub use forest::{ForestBuilder, Kind, Placement, Scatter};
pub use object::SceneObject;
pub use scene::{ObjectHandle, Scene};
