use macroquad::prelude::*;
use crate::application::InputEvent;

/// Route the close box through the event queue instead of quitting outright
pub fn capture_close() {
    prevent_quit();
}

/// Collect this frame's input as game events
pub fn poll_events() -> Vec<InputEvent> {
    let mut events = Vec::new();

    if is_quit_requested() {
        events.push(InputEvent::CloseRequested);
    }

    if is_mouse_button_released(MouseButton::Left) {
        let (x, y) = mouse_position();
        events.push(InputEvent::PointerReleased(vec2(x, y)));
    }

    events
}
