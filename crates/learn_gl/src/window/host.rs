//! GLFW window with a current OpenGL context

use glfw::Context;

use super::main_loop::{run_example, FrameSurface, LoopSettings};
use super::{HostError, HostPhase, WindowError, WindowParams, WindowState};
use crate::application::RenderableExample;
use crate::config::WindowConfig;
use crate::input::{InputEvent, InputState, KeyCode};
use crate::render::OpenGl;

/// GLFW window, its library handle and event channel
struct GlfwSurface {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl FrameSurface for GlfwSurface {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, close: bool) {
        self.window.set_should_close(close);
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self, handler: &mut dyn FnMut(InputEvent)) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            if let Some(event) = InputEvent::from_glfw(&event) {
                handler(event);
            }
        }
    }
}

/// Owns the window, its context and the example lifecycle
///
/// One host runs one example. [`WindowHost::run`] consumes the host; the
/// window closes and GLFW terminates when it returns.
pub struct WindowHost {
    surface: GlfwSurface,
    gl: OpenGl,
    state: WindowState,
    phase: HostPhase,
    settings: LoopSettings,
}

impl WindowHost {
    /// Initialize GLFW, open a window and make its OpenGL context current
    pub fn create(config: &WindowConfig, title: &str) -> Result<Self, WindowError> {
        let mut phase = HostPhase::Uninitialized;

        let mut glfw = glfw::init(glfw::log_errors).map_err(|_| WindowError::InitializationFailed)?;

        let (major, minor) = config.context_version();
        glfw.window_hint(glfw::WindowHint::ContextVersion(major, minor));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        if cfg!(target_os = "macos") {
            glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        }

        let (mut window, events) = glfw
            .create_window(config.width, config.height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();
        glfw.set_swap_interval(if config.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        window.set_framebuffer_size_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_mouse_button_polling(true);
        window.set_scroll_polling(true);
        window.set_key_polling(true);

        let gl = OpenGl::load_with(|symbol| window.get_proc_address(symbol) as *const _)
            .ok_or(WindowError::GlLoadFailed)?;

        let (fb_width, fb_height) = window.get_framebuffer_size();
        let params = WindowParams::new(fb_width.max(0) as u32, fb_height.max(0) as u32, title);
        phase.transition(HostPhase::WindowCreated)?;
        log::info!(
            "Created window '{}' {}x{} (OpenGL {}.{} core)",
            title,
            params.width,
            params.height,
            major,
            minor
        );

        let mut host = Self {
            surface: GlfwSurface { glfw, window, events },
            gl,
            state: WindowState::new(params),
            phase,
            settings: LoopSettings {
                clear_color: config.clear_color,
                frame_rate: config.frame_rate,
            },
        };
        host.set_cursor_visible(config.cursor_visible);
        Ok(host)
    }

    /// Run `example` until the window closes
    ///
    /// `clean_up` is called exactly once, also when `initialize` fails, in
    /// which case that error is returned after shutdown.
    pub fn run(mut self, example: &mut dyn RenderableExample) -> Result<(), HostError> {
        run_example(
            &mut self.surface,
            &mut self.gl,
            &mut self.state,
            &mut self.phase,
            self.settings,
            example,
        )
    }

    /// Show the cursor, or hide and capture it
    pub fn set_cursor_visible(&mut self, visible: bool) {
        let mode = if visible {
            glfw::CursorMode::Normal
        } else {
            glfw::CursorMode::Disabled
        };
        self.surface.window.set_cursor_mode(mode);
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> HostPhase {
        self.phase
    }

    /// Current window dimensions and title
    pub fn window_params(&self) -> &WindowParams {
        &self.state.params
    }

    /// Current input state
    pub fn input(&self) -> &InputState {
        &self.state.input
    }

    /// Whether `key` is held
    pub fn key_state(&self, key: KeyCode) -> bool {
        self.state.input.is_key_pressed(key)
    }

    /// Scroll accumulated since the last reset
    pub fn mouse_wheel_offset(&self) -> (f32, f32) {
        self.state.input.scroll_offset()
    }

    /// Zero the accumulated scroll
    pub fn reset_mouse_wheel_offset(&mut self) {
        self.state.input.reset_scroll_offset();
    }

    /// Last reported cursor position in window coordinates
    pub fn cursor_position(&self) -> (f32, f32) {
        self.state.input.cursor_position()
    }
}
