//! Scene object: a positioned, oriented, scaled mesh instance.

use cgmath::{Deg, Matrix4, Vector3, Zero};

use crate::asset::Mesh;
use crate::math::{self, WORLD_UP};

/// One placed instance of a loaded mesh.
///
/// Objects own their mesh exclusively. Position and yaw/pitch are mutated
/// continuously by the controller while the mesh itself stays immutable
/// after load.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub position: Vector3<f32>,
    pub yaw: Deg<f32>,
    pub pitch: Deg<f32>,
    /// Extra yaw applied to the model only, for meshes authored facing an
    /// axis other than the movement convention's -Z.
    pub model_yaw_offset: Deg<f32>,
    pub scale: Vector3<f32>,
    pub mesh: Mesh,
    /// Movement speed multiplier applied per tick.
    pub speed: f32,
    /// Viewpoint height above the object origin, before scaling.
    pub eyes_height: f32,
    pub hidden: bool,
}

impl SceneObject {
    /// Creates an object at the origin with unit scale, facing -Z.
    pub fn new(name: &str, mesh: Mesh) -> Self {
        Self {
            name: name.to_string(),
            position: Vector3::zero(),
            yaw: Deg(0.0),
            pitch: Deg(0.0),
            model_yaw_offset: Deg(0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            mesh,
            speed: 1.0,
            eyes_height: 0.0,
            hidden: false,
        }
    }

    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.position = position;
        self
    }

    pub fn with_yaw(mut self, yaw: Deg<f32>) -> Self {
        self.yaw = yaw;
        self
    }

    pub fn with_model_yaw_offset(mut self, offset: Deg<f32>) -> Self {
        self.model_yaw_offset = offset;
        self
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vector3::new(scale, scale, scale);
        self
    }

    pub fn with_scale(mut self, scale: Vector3<f32>) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_eyes_height(mut self, eyes_height: f32) -> Self {
        self.eyes_height = eyes_height;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Model transform for the renderer: T * R_y(yaw + offset) * S.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let r = Matrix4::from_angle_y(self.yaw + self.model_yaw_offset);
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s
    }

    /// Unit view direction from the object's yaw and pitch.
    pub fn direction(&self) -> Vector3<f32> {
        math::direction_from_angles(self.yaw, self.pitch)
    }

    /// View direction flattened onto the ground plane.
    ///
    /// Returns `None` when the flattened direction degenerates (looking
    /// straight up or down); callers treat that as "no movement".
    pub fn ground_direction(&self) -> Option<Vector3<f32>> {
        let mut dir = self.direction();
        dir.y = 0.0;
        math::try_normalize(dir)
    }

    /// Eye position: object origin raised by the scaled eyes height.
    pub fn eye_position(&self) -> Vector3<f32> {
        self.position + WORLD_UP * (self.eyes_height * self.scale.y)
    }
}
