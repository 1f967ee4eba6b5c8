//! Input events and state tracking
//!
//! GLFW events are converted into [`InputEvent`] values so the host and the
//! examples never see windowing-library types, and so input handling can be
//! exercised without a window.

mod state;

pub use state::InputState;

/// Key codes
///
/// Keys the examples care about get a named variant; anything else keeps its
/// GLFW key number in [`KeyCode::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// E key
    E,
    /// Q key
    Q,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Any other key, by GLFW key number
    Other(i32),
}

impl KeyCode {
    /// Key that requests the window to close
    pub const CANCEL: Self = Self::Escape;
}

impl From<glfw::Key> for KeyCode {
    fn from(key: glfw::Key) -> Self {
        match key {
            glfw::Key::A => Self::A,
            glfw::Key::D => Self::D,
            glfw::Key::E => Self::E,
            glfw::Key::Q => Self::Q,
            glfw::Key::S => Self::S,
            glfw::Key::W => Self::W,
            glfw::Key::Space => Self::Space,
            glfw::Key::Enter => Self::Enter,
            glfw::Key::Escape => Self::Escape,
            glfw::Key::Up => Self::Up,
            glfw::Key::Down => Self::Down,
            glfw::Key::Left => Self::Left,
            glfw::Key::Right => Self::Right,
            other => Self::Other(other as i32),
        }
    }
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
    /// Extra buttons, by GLFW button number
    Other(i32),
}

impl From<glfw::MouseButton> for MouseButton {
    fn from(button: glfw::MouseButton) -> Self {
        match button {
            glfw::MouseButton::Button1 => Self::Left,
            glfw::MouseButton::Button2 => Self::Right,
            glfw::MouseButton::Button3 => Self::Middle,
            other => Self::Other(other as i32),
        }
    }
}

/// Press state change reported for keys and mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Went down
    Press,
    /// Went up
    Release,
    /// Held long enough to auto-repeat
    Repeat,
}

impl From<glfw::Action> for KeyAction {
    fn from(action: glfw::Action) -> Self {
        match action {
            glfw::Action::Press => Self::Press,
            glfw::Action::Release => Self::Release,
            glfw::Action::Repeat => Self::Repeat,
        }
    }
}

/// Input and window events routed from the host to the active example
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Framebuffer was resized
    FramebufferResized {
        /// New framebuffer width
        width: u32,
        /// New framebuffer height
        height: u32,
    },

    /// Cursor moved
    CursorMoved {
        /// New X coordinate
        x: f64,
        /// New Y coordinate
        y: f64,
    },

    /// Mouse button event
    MouseButton {
        /// The button
        button: MouseButton,
        /// What happened to it
        action: KeyAction,
    },

    /// Mouse wheel
    Scroll {
        /// Horizontal scroll delta
        delta_x: f64,
        /// Vertical scroll delta
        delta_y: f64,
    },

    /// Key event
    Key {
        /// The key
        key: KeyCode,
        /// Platform scancode
        scancode: i32,
        /// What happened to it
        action: KeyAction,
    },
}

impl InputEvent {
    /// Convert a GLFW window event, dropping the kinds the host does not poll for
    pub fn from_glfw(event: &glfw::WindowEvent) -> Option<Self> {
        match *event {
            glfw::WindowEvent::FramebufferSize(width, height) => Some(Self::FramebufferResized {
                width: width.max(0) as u32,
                height: height.max(0) as u32,
            }),
            glfw::WindowEvent::CursorPos(x, y) => Some(Self::CursorMoved { x, y }),
            glfw::WindowEvent::MouseButton(button, action, _) => Some(Self::MouseButton {
                button: button.into(),
                action: action.into(),
            }),
            glfw::WindowEvent::Scroll(delta_x, delta_y) => Some(Self::Scroll { delta_x, delta_y }),
            glfw::WindowEvent::Key(key, scancode, action, _) => Some(Self::Key {
                key: key.into(),
                scancode,
                action: action.into(),
            }),
            _ => None,
        }
    }
}
