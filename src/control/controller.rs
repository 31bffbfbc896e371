//! Movement controller
//!
//! Consumes [`ControlEvent`]s and mutates the active camera role: mouse
//! deltas turn into yaw/pitch, held movement keys turn into position changes
//! on each fixed tick. Opposing keys held on one axis cancel outright rather
//! than averaging.

use std::time::Duration;

use cgmath::Deg;

use crate::math::{self, WORLD_UP};
use crate::scene::Scene;

use super::event::{ControlEvent, KeyAction, MoveKey};
use super::rig::{CameraMode, CameraRig};

/// Degrees of yaw/pitch per pixel of mouse travel.
pub const LOOK_SENSITIVITY: f32 = 0.2;

/// Pitch is clamped to +-89 degrees so the view never flips over the pole.
pub const PITCH_LIMIT: Deg<f32> = Deg(89.0);

/// World units moved per tick at speed 1.0.
pub const MOVE_STEP: f32 = 0.5;

/// Period of the movement tick the embedding loop should schedule.
pub const TICK_INTERVAL: Duration = Duration::from_millis(40);

/// Held-key state plus the event-consuming step function.
#[derive(Debug, Default)]
pub struct Controller {
    forward: bool,
    back: bool,
    left: bool,
    right: bool,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event to the scene and rig.
    pub fn step(&mut self, scene: &mut Scene, rig: &mut CameraRig, event: ControlEvent) {
        match event {
            ControlEvent::KeyDown(KeyAction::Move(key)) => self.set_held(key, true),
            ControlEvent::KeyUp(key) => self.set_held(key, false),
            ControlEvent::KeyDown(KeyAction::CycleCamera) => rig.cycle(scene),
            ControlEvent::KeyDown(KeyAction::ToggleHidden) => {
                // never blind the active viewpoint
                if rig.mode() == CameraMode::Free {
                    let subject = scene.get_mut(rig.subject());
                    subject.hidden = !subject.hidden;
                }
            }
            ControlEvent::MouseLook { dx, dy } => self.apply_look_delta(scene, rig, dx, dy),
            ControlEvent::Tick => self.apply_movement(scene, rig),
        }
    }

    fn set_held(&mut self, key: MoveKey, held: bool) {
        match key {
            MoveKey::Forward => self.forward = held,
            MoveKey::Back => self.back = held,
            MoveKey::Left => self.left = held,
            MoveKey::Right => self.right = held,
        }
    }

    /// Turns a mouse delta into yaw/pitch on the active role.
    fn apply_look_delta(&self, scene: &mut Scene, rig: &CameraRig, dx: f32, dy: f32) {
        let role = scene.get_mut(rig.active_handle());
        role.yaw += Deg(dx * LOOK_SENSITIVITY);
        let pitch = role.pitch - Deg(dy * LOOK_SENSITIVITY);
        role.pitch = Deg(pitch.0.clamp(-PITCH_LIMIT.0, PITCH_LIMIT.0));
    }

    /// Moves the active role along its view direction from the held keys.
    fn apply_movement(&self, scene: &mut Scene, rig: &CameraRig) {
        let ground_bound = rig.active_is_ground_bound();
        let role = scene.get_mut(rig.active_handle());

        let direction = if ground_bound {
            role.ground_direction()
        } else {
            Some(role.direction())
        };
        let direction = match direction {
            Some(dir) => dir,
            None => return,
        };

        let step = MOVE_STEP * role.speed;

        // opposing keys cancel, axis by axis
        let forward_sign = match (self.forward, self.back) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        };
        if forward_sign != 0.0 {
            role.position += direction * (step * forward_sign);
        }

        let strafe_sign = match (self.right, self.left) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        };
        if strafe_sign != 0.0 {
            if let Some(right) = math::try_normalize(direction.cross(WORLD_UP)) {
                role.position += right * (step * strafe_sign);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Mesh;
    use crate::scene::SceneObject;
    use cgmath::Vector3;

    fn setup() -> (Scene, CameraRig, Controller) {
        let mut scene = Scene::new();
        let free = scene.add(
            SceneObject::new("free_camera", Mesh::default()).with_hidden(true),
        );
        let subject = scene.add(
            SceneObject::new("elephant", Mesh::default())
                .with_speed(2.0)
                .with_eyes_height(1.5),
        );
        (scene, CameraRig::new(free, subject), Controller::new())
    }

    fn position(scene: &Scene, rig: &CameraRig) -> Vector3<f32> {
        scene.get(rig.active_handle()).position
    }

    #[test]
    fn test_forward_moves_along_view() {
        let (mut scene, mut rig, mut controller) = setup();
        controller.step(&mut scene, &mut rig, ControlEvent::KeyDown(KeyAction::Move(MoveKey::Forward)));
        controller.step(&mut scene, &mut rig, ControlEvent::Tick);
        // free camera faces -Z at speed 1.0
        assert_eq!(position(&scene, &rig), Vector3::new(0.0, 0.0, -MOVE_STEP));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let (mut scene, mut rig, mut controller) = setup();
        for action in [
            KeyAction::Move(MoveKey::Forward),
            KeyAction::Move(MoveKey::Back),
            KeyAction::Move(MoveKey::Left),
            KeyAction::Move(MoveKey::Right),
        ] {
            controller.step(&mut scene, &mut rig, ControlEvent::KeyDown(action));
        }
        controller.step(&mut scene, &mut rig, ControlEvent::Tick);
        assert_eq!(position(&scene, &rig), Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_release_restores_movement() {
        let (mut scene, mut rig, mut controller) = setup();
        controller.step(&mut scene, &mut rig, ControlEvent::KeyDown(KeyAction::Move(MoveKey::Forward)));
        controller.step(&mut scene, &mut rig, ControlEvent::KeyDown(KeyAction::Move(MoveKey::Back)));
        controller.step(&mut scene, &mut rig, ControlEvent::Tick);
        assert_eq!(position(&scene, &rig), Vector3::new(0.0, 0.0, 0.0));

        controller.step(&mut scene, &mut rig, ControlEvent::KeyUp(MoveKey::Back));
        controller.step(&mut scene, &mut rig, ControlEvent::Tick);
        assert_eq!(position(&scene, &rig), Vector3::new(0.0, 0.0, -MOVE_STEP));
    }

    #[test]
    fn test_strafe_is_perpendicular() {
        let (mut scene, mut rig, mut controller) = setup();
        controller.step(&mut scene, &mut rig, ControlEvent::KeyDown(KeyAction::Move(MoveKey::Right)));
        controller.step(&mut scene, &mut rig, ControlEvent::Tick);
        // facing -Z, right is +X
        assert_eq!(position(&scene, &rig), Vector3::new(MOVE_STEP, 0.0, 0.0));
    }

    #[test]
    fn test_pitch_clamped_after_large_deltas() {
        let (mut scene, mut rig, mut controller) = setup();
        controller.step(&mut scene, &mut rig, ControlEvent::MouseLook { dx: 0.0, dy: -10000.0 });
        assert_eq!(scene.get(rig.active_handle()).pitch, PITCH_LIMIT);
        controller.step(&mut scene, &mut rig, ControlEvent::MouseLook { dx: 0.0, dy: 25000.0 });
        assert_eq!(scene.get(rig.active_handle()).pitch, Deg(-PITCH_LIMIT.0));
    }

    #[test]
    fn test_free_camera_flies_along_pitch() {
        let (mut scene, mut rig, mut controller) = setup();
        scene.get_mut(rig.active_handle()).pitch = Deg(90.0);
        controller.step(&mut scene, &mut rig, ControlEvent::KeyDown(KeyAction::Move(MoveKey::Forward)));
        controller.step(&mut scene, &mut rig, ControlEvent::Tick);
        let pos = position(&scene, &rig);
        assert!((pos.y - MOVE_STEP).abs() < 1e-5);
    }

    #[test]
    fn test_subject_stays_on_ground() {
        let (mut scene, mut rig, mut controller) = setup();
        controller.step(&mut scene, &mut rig, ControlEvent::KeyDown(KeyAction::CycleCamera));
        scene.get_mut(rig.active_handle()).pitch = Deg(45.0);
        controller.step(&mut scene, &mut rig, ControlEvent::KeyDown(KeyAction::Move(MoveKey::Forward)));
        controller.step(&mut scene, &mut rig, ControlEvent::Tick);
        let pos = position(&scene, &rig);
        assert_eq!(pos.y, 0.0);
        // subject speed 2.0, full step on the flattened direction
        assert!((pos.z + MOVE_STEP * 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_direction_means_no_movement() {
        let (mut scene, mut rig, mut controller) = setup();
        controller.step(&mut scene, &mut rig, ControlEvent::KeyDown(KeyAction::CycleCamera));
        // ground-bound subject looking straight up has no flattened direction
        scene.get_mut(rig.active_handle()).pitch = Deg(90.0);
        scene.get_mut(rig.active_handle()).yaw = Deg(0.0);
        controller.step(&mut scene, &mut rig, ControlEvent::KeyDown(KeyAction::Move(MoveKey::Forward)));
        controller.step(&mut scene, &mut rig, ControlEvent::Tick);
        assert_eq!(position(&scene, &rig), Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_toggle_hidden_only_in_free_mode() {
        let (mut scene, mut rig, mut controller) = setup();
        controller.step(&mut scene, &mut rig, ControlEvent::KeyDown(KeyAction::ToggleHidden));
        assert!(scene.get(rig.subject()).hidden);
        controller.step(&mut scene, &mut rig, ControlEvent::KeyDown(KeyAction::ToggleHidden));
        assert!(!scene.get(rig.subject()).hidden);

        controller.step(&mut scene, &mut rig, ControlEvent::KeyDown(KeyAction::CycleCamera));
        controller.step(&mut scene, &mut rig, ControlEvent::KeyDown(KeyAction::ToggleHidden));
        // third person keeps the subject visible
        assert!(!scene.get(rig.subject()).hidden);
    }

    #[test]
    fn test_mouse_look_turns_yaw() {
        let (mut scene, mut rig, mut controller) = setup();
        controller.step(&mut scene, &mut rig, ControlEvent::MouseLook { dx: 10.0, dy: 0.0 });
        assert_eq!(
            scene.get(rig.active_handle()).yaw,
            Deg(10.0 * LOOK_SENSITIVITY)
        );
    }
}
