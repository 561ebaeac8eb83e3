// Domain layer - tiles, board and turn bookkeeping
pub mod domain;

// Application layer - game controller and frame pacing
pub mod application;

// Settings and layout constants
pub mod config;

// Infrastructure layer - window input and drawing
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Board, ContentId, GameError, Tile};
pub use application::{GameState, InputEvent, Phase};
pub use config::GameConfig;
