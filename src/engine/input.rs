use winit::{
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    keyboard::{Key, NamedKey},
};

/// Input as seen by a game during one update. The cursor is in world
/// coordinates, the left button is level state.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    cursor: [f32; 2],
    left_pressed: bool,
    quit_requested: bool,
}

impl InputState {
    pub fn cursor(&self) -> [f32; 2] {
        self.cursor
    }

    pub fn left_pressed(&self) -> bool {
        self.left_pressed
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn set_cursor(&mut self, cursor: [f32; 2]) {
        self.cursor = cursor;
    }

    pub fn set_left_pressed(&mut self, pressed: bool) {
        self.left_pressed = pressed;
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        surface: PhysicalSize<u32>,
        world: [f32; 2],
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!(target: "engine", "window close requested");
                self.request_quit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                tracing::info!(target: "engine", "escape pressed");
                self.request_quit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = surface_to_world([position.x, position.y], surface, world);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.left_pressed = *state == ElementState::Pressed;
            }
            WindowEvent::Focused(false) => {
                // Releases that happen outside the window never arrive.
                self.left_pressed = false;
            }
            _ => {}
        }
    }
}

pub fn surface_to_world(pixel: [f64; 2], surface: PhysicalSize<u32>, world: [f32; 2]) -> [f32; 2] {
    if surface.width == 0 || surface.height == 0 {
        return [pixel[0] as f32, pixel[1] as f32];
    }
    [
        (pixel[0] / surface.width as f64) as f32 * world[0],
        (pixel[1] / surface.height as f64) as f32 * world[1],
    ]
}
