use std::fmt;

/// Keyboard keys the game binds actions to.
///
/// Hosts map anything else to `Key::Unknown` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Phase of an action callback, matching how bindings report
/// start/continue/end of an interaction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ActionPhase {
    Started,
    Performed,
    Canceled,
}

/// Mouse wheel delta.
///
/// `Line` counts wheel notches; `Pixel` comes from high-precision touchpads.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

/// Host-agnostic input events.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True for auto-repeat; repeats never count as a fresh press.
        repeat: bool,
    },

    /// Pointer position in screen pixels.
    PointerMoved { x: f32, y: f32 },
    PointerLeft,

    MouseWheel(MouseWheelDelta),

    Focused(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
