//! Camera rig
//!
//! Tracks which scene object supplies the viewpoint and how it is framed.
//! Exactly one role is active at any time: the free camera, or the subject
//! viewed in third or first person. Switching roles is an atomic
//! reassignment, never a blend.

use cgmath::{Deg, Vector3};

use crate::math::{self, WORLD_UP};
use crate::scene::{ObjectHandle, Scene};

/// Default distance behind and above the subject for third-person framing.
pub const FOLLOW_DISTANCE: f32 = 6.0;

/// How the active viewpoint is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Independent fly camera.
    Free,
    /// Behind and above the subject, looking ahead of it.
    ThirdPerson,
    /// From the subject's eyes; the subject itself is hidden.
    FirstPerson,
}

/// An eye position and look target for the renderer's view transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPose {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
}

/// The camera roles and the currently active one.
#[derive(Debug)]
pub struct CameraRig {
    free: ObjectHandle,
    subject: ObjectHandle,
    mode: CameraMode,
    pub follow_distance: f32,
}

impl CameraRig {
    /// Creates a rig starting on the free camera.
    pub fn new(free: ObjectHandle, subject: ObjectHandle) -> Self {
        Self {
            free,
            subject,
            mode: CameraMode::Free,
            follow_distance: FOLLOW_DISTANCE,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn subject(&self) -> ObjectHandle {
        self.subject
    }

    pub fn free(&self) -> ObjectHandle {
        self.free
    }

    /// Handle of the object currently supplying the viewpoint.
    pub fn active_handle(&self) -> ObjectHandle {
        match self.mode {
            CameraMode::Free => self.free,
            CameraMode::ThirdPerson | CameraMode::FirstPerson => self.subject,
        }
    }

    /// Whether the active role walks on the ground.
    ///
    /// The subject moves on the ground plane regardless of where it looks;
    /// only the free camera flies along its pitch.
    pub fn active_is_ground_bound(&self) -> bool {
        self.mode != CameraMode::Free
    }

    /// Advances free -> third-person -> first-person -> free.
    ///
    /// The subject is shown in third person and hidden in first person.
    /// Handing back to the free camera copies the prior role's eye position
    /// and yaw/pitch into it, so the viewpoint does not jump.
    pub fn cycle(&mut self, scene: &mut Scene) {
        match self.mode {
            CameraMode::Free => {
                self.mode = CameraMode::ThirdPerson;
                scene.get_mut(self.subject).hidden = false;
            }
            CameraMode::ThirdPerson => {
                self.mode = CameraMode::FirstPerson;
                scene.get_mut(self.subject).hidden = true;
            }
            CameraMode::FirstPerson => {
                let (eye, yaw, pitch) = {
                    let subject = scene.get(self.subject);
                    (subject.eye_position(), subject.yaw, subject.pitch)
                };
                let free = scene.get_mut(self.free);
                free.position = eye;
                free.yaw = yaw;
                free.pitch = pitch;
                scene.get_mut(self.subject).hidden = false;
                self.mode = CameraMode::Free;
            }
        }
    }

    /// Eye position and look target for the active role.
    pub fn compute_view(&self, scene: &Scene) -> ViewPose {
        match self.mode {
            CameraMode::Free | CameraMode::FirstPerson => {
                let role = scene.get(self.active_handle());
                let eye = role.eye_position();
                ViewPose {
                    eye,
                    target: eye + role.direction(),
                }
            }
            CameraMode::ThirdPerson => {
                let subject = scene.get(self.subject);
                // facing direction on the ground plane; pitch is look-only
                let dir = math::direction_from_angles(subject.yaw, Deg(0.0));
                ViewPose {
                    eye: subject.position - dir * self.follow_distance
                        + WORLD_UP * self.follow_distance,
                    target: subject.position + dir * self.follow_distance,
                }
            }
        }
    }
}
