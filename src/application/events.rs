use macroquad::math::Vec2;

/// Input the game loop reacts to, already pulled from the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// The window close box was pressed
    CloseRequested,
    /// Primary pointer button released at a window position
    PointerReleased(Vec2),
}
