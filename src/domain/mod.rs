mod board;
mod error;
mod selection;
mod tile;

pub use board::Board;
pub use error::GameError;
pub use selection::{MatchedSet, Selection};
pub use tile::{ContentId, Tile};
