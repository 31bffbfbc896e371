//! Control events
//!
//! The engine consumes one flat event stream instead of windowing-system
//! callbacks: discrete key transitions, mouse-look deltas, and the fixed
//! tick that applies continuous movement. Anything that can feed these
//! events (a winit loop, a replay file, a test) can drive the simulation.

/// Continuous movement keys, tracked as held/released state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
}

/// What a key press means to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Starts holding a movement key.
    Move(MoveKey),
    /// Cycles free -> third-person -> first-person -> free.
    CycleCamera,
    /// Toggles the subject's visibility (free camera mode only).
    ToggleHidden,
}

/// One input or timer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    KeyDown(KeyAction),
    KeyUp(MoveKey),
    /// Mouse delta relative to the recentred pointer, in pixels.
    MouseLook { dx: f32, dy: f32 },
    /// Fixed-period movement tick.
    Tick,
}
