//! winit event translation
//!
//! Maps winit keyboard and device events onto [`ControlEvent`]s so a
//! windowed front-end stays a thin forwarding loop. The engine itself never
//! touches the windowing system; everything behind this module is testable
//! without one.
//!
//! Bindings: WASD moves, mouse looks, `C` cycles the camera roles, `H`
//! toggles the subject's visibility.

use winit::event::{DeviceEvent, ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::event::{ControlEvent, KeyAction, MoveKey};

/// Translates a window keyboard event, if it is bound.
///
/// Key repeats are ignored; held state is tracked from the down/up pair.
pub fn key_event(event: &KeyEvent) -> Option<ControlEvent> {
    if event.repeat {
        return None;
    }

    let code = match event.physical_key {
        PhysicalKey::Code(code) => code,
        _ => return None,
    };

    let move_key = match code {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(MoveKey::Forward),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(MoveKey::Back),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(MoveKey::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(MoveKey::Right),
        _ => None,
    };

    if let Some(key) = move_key {
        return Some(match event.state {
            ElementState::Pressed => ControlEvent::KeyDown(KeyAction::Move(key)),
            ElementState::Released => ControlEvent::KeyUp(key),
        });
    }

    // discrete commands fire on press only
    if event.state != ElementState::Pressed {
        return None;
    }
    match code {
        KeyCode::KeyC => Some(ControlEvent::KeyDown(KeyAction::CycleCamera)),
        KeyCode::KeyH => Some(ControlEvent::KeyDown(KeyAction::ToggleHidden)),
        _ => None,
    }
}

/// Translates a device event; only mouse motion is of interest.
pub fn device_event(event: &DeviceEvent) -> Option<ControlEvent> {
    match event {
        DeviceEvent::MouseMotion { delta } => Some(ControlEvent::MouseLook {
            dx: delta.0 as f32,
            dy: delta.1 as f32,
        }),
        _ => None,
    }
}
