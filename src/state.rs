//! Simulation state
//!
//! One struct owns everything the input, console, and renderer collaborators
//! touch: the scene, the camera rig, the controller, and the ambient light
//! level. All mutation flows through `step` and `apply_console` on the
//! simulation thread; collaborators never reach shared globals.

use crate::console::ConsoleCommand;
use crate::control::{CameraRig, ControlEvent, Controller, ViewPose};
use crate::scene::Scene;

/// Default ambient light intensity.
pub const DEFAULT_AMBIENT: f32 = 0.2;

/// The scene plus everything that drives it.
#[derive(Debug)]
pub struct SceneState {
    pub scene: Scene,
    pub rig: CameraRig,
    pub controller: Controller,
    /// Ambient light intensity in [0, 1], settable from the console.
    pub ambient: f32,
}

impl SceneState {
    pub fn new(scene: Scene, rig: CameraRig) -> Self {
        Self {
            scene,
            rig,
            controller: Controller::new(),
            ambient: DEFAULT_AMBIENT,
        }
    }

    /// Applies one input or timer event.
    pub fn step(&mut self, event: ControlEvent) {
        self.controller.step(&mut self.scene, &mut self.rig, event);
    }

    /// Applies one console command; returns `false` on `Quit`.
    pub fn apply_console(&mut self, command: ConsoleCommand) -> bool {
        match command {
            ConsoleCommand::Help => {}
            ConsoleCommand::Ambience(value) => self.ambient = value,
            ConsoleCommand::Quit => return false,
        }
        true
    }

    /// Eye position and look target for the active camera role.
    pub fn view(&self) -> ViewPose {
        self.rig.compute_view(&self.scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Mesh;
    use crate::scene::SceneObject;

    fn state() -> SceneState {
        let mut scene = Scene::new();
        let free = scene.add(SceneObject::new("free_camera", Mesh::default()).with_hidden(true));
        let subject = scene.add(SceneObject::new("elephant", Mesh::default()));
        let rig = CameraRig::new(free, subject);
        SceneState::new(scene, rig)
    }

    #[test]
    fn test_console_sets_ambient() {
        let mut state = state();
        assert_eq!(state.ambient, DEFAULT_AMBIENT);
        assert!(state.apply_console(ConsoleCommand::Ambience(0.8)));
        assert_eq!(state.ambient, 0.8);
    }

    #[test]
    fn test_console_quit() {
        let mut state = state();
        assert!(!state.apply_console(ConsoleCommand::Quit));
    }

    #[test]
    fn test_step_routes_to_controller() {
        use crate::control::{KeyAction, MoveKey, MOVE_STEP};
        let mut state = state();
        state.step(ControlEvent::KeyDown(KeyAction::Move(MoveKey::Forward)));
        state.step(ControlEvent::Tick);
        let free = state.scene.get(state.rig.free());
        assert_eq!(free.position.z, -MOVE_STEP);
    }
}
