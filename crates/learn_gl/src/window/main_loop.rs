//! Example lifecycle and per-frame loop, independent of the windowing library

use super::{HostError, HostPhase, StateChange, WindowError, WindowState};
use crate::application::{FrameContext, RenderableExample};
use crate::foundation::time::{FramePacer, Timer};
use crate::input::InputEvent;
use crate::render::GraphicsApi;

/// The presentation side of a window
pub trait FrameSurface {
    /// Whether the loop should stop before the next frame
    fn should_close(&self) -> bool;

    /// Raise or clear the close flag
    fn set_should_close(&mut self, close: bool);

    /// Present the frame just rendered
    fn swap_buffers(&mut self);

    /// Process pending window-system events and pass each one to `handler`
    fn poll_events(&mut self, handler: &mut dyn FnMut(InputEvent));
}

/// Per-loop settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSettings {
    /// RGBA the framebuffer is cleared to every frame
    pub clear_color: [f32; 4],
    /// Iterations per second, zero to disable pacing
    pub frame_rate: u32,
}

/// Drives one example from `initialize` to `clean_up`
///
/// Expects `phase` to be [`HostPhase::WindowCreated`] and leaves it at
/// [`HostPhase::Terminated`]. `clean_up` runs exactly once, also when
/// `initialize` fails, whose error is then returned.
pub fn run_example<S: FrameSurface>(
    surface: &mut S,
    gl: &mut dyn GraphicsApi,
    state: &mut WindowState,
    phase: &mut HostPhase,
    settings: LoopSettings,
    example: &mut dyn RenderableExample,
) -> Result<(), HostError> {
    log::info!("Initializing {}", example.title());
    if let Err(e) = example.initialize(gl) {
        log::error!("Failed to initialize {}: {}", example.title(), e);
        shut_down(gl, phase, example)?;
        return Err(e.into());
    }

    phase.transition(HostPhase::Running)?;
    gl.viewport(0, 0, state.params.width, state.params.height);

    let mut timer = Timer::new();
    let mut pacer = FramePacer::new(settings.frame_rate);

    while !surface.should_close() {
        pacer.begin_frame();
        gl.clear(settings.clear_color);

        timer.update();
        let mut frame = FrameContext {
            delta_time: timer.delta_time(),
            frame_index: timer.frame_count() - 1,
            window: &state.params,
            input: &mut state.input,
        };
        example.render(gl, &mut frame);

        surface.swap_buffers();
        surface.poll_events(&mut |event| {
            if let StateChange::Resized { width, height } = state.handle_event(&event) {
                gl.viewport(0, 0, width, height);
            }
            example.handle_input(&event);
        });
        if state.close_requested() {
            surface.set_should_close(true);
        }

        pacer.wait();
    }

    log::info!(
        "{} closed after {} frames ({:.1} fps average)",
        example.title(),
        timer.frame_count(),
        timer.average_fps()
    );
    shut_down(gl, phase, example)?;
    Ok(())
}

fn shut_down(
    gl: &mut dyn GraphicsApi,
    phase: &mut HostPhase,
    example: &mut dyn RenderableExample,
) -> Result<(), WindowError> {
    phase.transition(HostPhase::ShuttingDown)?;
    example.clean_up(gl);
    phase.transition(HostPhase::Terminated)?;
    log::info!("{} shut down", example.title());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::application::ExampleError;
    use crate::demos::TriangleExample;
    use crate::input::{KeyAction, KeyCode};
    use crate::render::recording::{Call, RecordingApi};
    use crate::render::ShaderStage;
    use crate::window::WindowParams;

    /// Surface that replays one batch of events per frame and closes itself
    /// once the batches run out
    #[derive(Default)]
    struct ScriptedSurface {
        batches: VecDeque<Vec<InputEvent>>,
        closed: bool,
        swaps: usize,
    }

    impl ScriptedSurface {
        fn new(batches: Vec<Vec<InputEvent>>) -> Self {
            Self { batches: batches.into(), ..Self::default() }
        }
    }

    impl FrameSurface for ScriptedSurface {
        fn should_close(&self) -> bool {
            self.closed
        }

        fn set_should_close(&mut self, close: bool) {
            self.closed = close;
        }

        fn swap_buffers(&mut self) {
            self.swaps += 1;
        }

        fn poll_events(&mut self, handler: &mut dyn FnMut(InputEvent)) {
            match self.batches.pop_front() {
                Some(batch) => batch.into_iter().for_each(handler),
                None => self.closed = true,
            }
        }
    }

    /// Triangle example that counts lifecycle calls
    #[derive(Default)]
    struct CountingExample {
        inner: TriangleExample,
        renders: usize,
        clean_ups: usize,
        inputs: Vec<InputEvent>,
    }

    impl RenderableExample for CountingExample {
        fn title(&self) -> &str {
            self.inner.title()
        }

        fn initialize(&mut self, gl: &mut dyn GraphicsApi) -> Result<(), ExampleError> {
            self.inner.initialize(gl)
        }

        fn render(&mut self, gl: &mut dyn GraphicsApi, frame: &mut FrameContext<'_>) {
            assert_eq!(frame.frame_index, self.renders as u64);
            self.renders += 1;
            self.inner.render(gl, frame);
        }

        fn clean_up(&mut self, gl: &mut dyn GraphicsApi) {
            self.clean_ups += 1;
            self.inner.clean_up(gl);
        }

        fn handle_input(&mut self, event: &InputEvent) {
            self.inputs.push(*event);
        }
    }

    const SETTINGS: LoopSettings = LoopSettings {
        clear_color: [0.2, 0.3, 0.3, 1.0],
        frame_rate: 0,
    };

    fn window_state() -> WindowState {
        WindowState::new(WindowParams::new(800, 800, "Example02_Triangle"))
    }

    fn escape(action: KeyAction) -> InputEvent {
        InputEvent::Key { key: KeyCode::Escape, scancode: 1, action }
    }

    fn run(
        gl: &mut RecordingApi,
        surface: &mut ScriptedSurface,
        state: &mut WindowState,
        example: &mut CountingExample,
    ) -> (HostPhase, Result<(), HostError>) {
        let mut phase = HostPhase::WindowCreated;
        let result = run_example(surface, gl, state, &mut phase, SETTINGS, example);
        (phase, result)
    }

    #[test]
    fn test_failed_initialize_still_cleans_up() {
        let mut gl = RecordingApi::failing_compile(ShaderStage::Vertex);
        let mut surface = ScriptedSurface::new(vec![vec![]]);
        let mut state = window_state();
        let mut example = CountingExample::default();

        let (phase, result) = run(&mut gl, &mut surface, &mut state, &mut example);

        assert!(matches!(result, Err(HostError::Example(ExampleError::Shader(_)))));
        assert_eq!(phase, HostPhase::Terminated);
        assert_eq!(example.clean_ups, 1);
        assert_eq!(example.renders, 0);
        assert_eq!(surface.swaps, 0);
        assert_eq!(gl.count(|c| matches!(c, Call::Clear(_))), 0);
        gl.assert_all_released();
    }

    #[test]
    fn test_normal_run_terminates_and_releases() {
        let mut gl = RecordingApi::new();
        let mut surface = ScriptedSurface::new(vec![vec![], vec![]]);
        let mut state = window_state();
        let mut example = CountingExample::default();

        let (phase, result) = run(&mut gl, &mut surface, &mut state, &mut example);

        result.unwrap();
        assert_eq!(phase, HostPhase::Terminated);
        assert_eq!(example.clean_ups, 1);
        // Two scripted frames plus the one whose poll finds nothing left
        assert_eq!(example.renders, 3);
        assert_eq!(surface.swaps, 3);
        gl.assert_all_released();
    }

    #[test]
    fn test_clear_precedes_draw_every_frame() {
        let mut gl = RecordingApi::new();
        let mut surface = ScriptedSurface::new(vec![vec![], vec![], vec![]]);
        let mut state = window_state();
        let mut example = CountingExample::default();

        run(&mut gl, &mut surface, &mut state, &mut example).1.unwrap();

        let frames: Vec<&Call> = gl
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Clear(_) | Call::DrawIndexed(_)))
            .collect();
        assert_eq!(frames.len(), 2 * example.renders);
        for pair in frames.chunks(2) {
            assert_eq!(pair[0], &Call::Clear(SETTINGS.clear_color));
            assert_eq!(pair[1], &Call::DrawIndexed(3));
        }
    }

    #[test]
    fn test_escape_stops_after_current_frame() {
        let mut gl = RecordingApi::new();
        let mut surface = ScriptedSurface::new(vec![
            vec![],
            vec![escape(KeyAction::Press)],
            vec![],
            vec![],
        ]);
        let mut state = window_state();
        let mut example = CountingExample::default();

        run(&mut gl, &mut surface, &mut state, &mut example).1.unwrap();

        assert_eq!(example.renders, 2);
        assert_eq!(surface.swaps, 2);
        assert!(state.close_requested());
        assert_eq!(surface.batches.len(), 2, "no frame after the escape press was polled");
        assert_eq!(example.clean_ups, 1);
    }

    #[test]
    fn test_escape_release_does_not_stop_loop() {
        let mut gl = RecordingApi::new();
        let mut surface = ScriptedSurface::new(vec![vec![escape(KeyAction::Release)], vec![]]);
        let mut state = window_state();
        let mut example = CountingExample::default();

        run(&mut gl, &mut surface, &mut state, &mut example).1.unwrap();
        assert_eq!(example.renders, 3);
    }

    #[test]
    fn test_resize_updates_viewport_and_params() {
        let mut gl = RecordingApi::new();
        let mut surface = ScriptedSurface::new(vec![vec![InputEvent::FramebufferResized {
            width: 1024,
            height: 600,
        }]]);
        let mut state = window_state();
        let mut example = CountingExample::default();

        run(&mut gl, &mut surface, &mut state, &mut example).1.unwrap();

        let viewports: Vec<&Call> = gl.calls.iter().filter(|c| matches!(c, Call::Viewport(..))).collect();
        assert_eq!(
            viewports,
            vec![&Call::Viewport(0, 0, 800, 800), &Call::Viewport(0, 0, 1024, 600)]
        );
        assert_eq!((state.params.width, state.params.height), (1024, 600));
    }

    #[test]
    fn test_events_forwarded_to_example() {
        let mut gl = RecordingApi::new();
        let scroll = InputEvent::Scroll { delta_x: 0.0, delta_y: 1.5 };
        let cursor = InputEvent::CursorMoved { x: 10.0, y: 20.0 };
        let mut surface = ScriptedSurface::new(vec![vec![scroll, cursor]]);
        let mut state = window_state();
        let mut example = CountingExample::default();

        run(&mut gl, &mut surface, &mut state, &mut example).1.unwrap();

        assert_eq!(example.inputs, vec![scroll, cursor]);
        assert_eq!(state.input.scroll_offset(), (0.0, 1.5));
    }

    #[test]
    fn test_run_requires_created_window() {
        let mut gl = RecordingApi::new();
        let mut surface = ScriptedSurface::new(vec![]);
        let mut state = window_state();
        let mut example = CountingExample::default();
        let mut phase = HostPhase::Uninitialized;

        let result = run_example(&mut surface, &mut gl, &mut state, &mut phase, SETTINGS, &mut example);

        assert!(matches!(result, Err(HostError::Window(WindowError::InvalidTransition { .. }))));
        example.clean_up(&mut gl);
    }
}
