//! Keyboard, mouse and scroll state accumulated from input events

use std::collections::HashMap;

use super::{InputEvent, KeyAction, KeyCode, MouseButton};

/// Current input state
///
/// The scroll offset accumulates across events until the consumer calls
/// [`InputState::reset_scroll_offset`], typically once per frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    keys: HashMap<KeyCode, bool>,
    mouse_buttons: HashMap<MouseButton, bool>,
    cursor_position: (f32, f32),
    scroll_offset: (f32, f32),
}

impl InputState {
    /// Create an empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event
    ///
    /// Resize events carry no input and are ignored here.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Key { key, action, .. } => match action {
                KeyAction::Press => {
                    self.keys.insert(key, true);
                }
                KeyAction::Release => {
                    self.keys.insert(key, false);
                }
                KeyAction::Repeat => {}
            },
            InputEvent::MouseButton { button, action } => match action {
                KeyAction::Press => {
                    self.mouse_buttons.insert(button, true);
                }
                KeyAction::Release => {
                    self.mouse_buttons.insert(button, false);
                }
                KeyAction::Repeat => {}
            },
            InputEvent::CursorMoved { x, y } => {
                self.cursor_position = (x as f32, y as f32);
            }
            InputEvent::Scroll { delta_x, delta_y } => {
                self.scroll_offset.0 += delta_x as f32;
                self.scroll_offset.1 += delta_y as f32;
            }
            InputEvent::FramebufferResized { .. } => {}
        }
    }

    /// Whether `key` is currently held
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.get(&key).copied().unwrap_or(false)
    }

    /// Whether `button` is currently held
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons.get(&button).copied().unwrap_or(false)
    }

    /// Last reported cursor position in window coordinates
    pub fn cursor_position(&self) -> (f32, f32) {
        self.cursor_position
    }

    /// Scroll accumulated since the last reset
    pub fn scroll_offset(&self) -> (f32, f32) {
        self.scroll_offset
    }

    /// Clear the accumulated scroll offset
    pub fn reset_scroll_offset(&mut self) {
        self.scroll_offset = (0.0, 0.0);
    }
}
