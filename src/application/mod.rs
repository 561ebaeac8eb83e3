mod events;
mod frame_limiter;
mod game_state;

pub use events::InputEvent;
pub use frame_limiter::FrameLimiter;
pub use game_state::{GameState, Phase, Resolution, ResolutionPause};
