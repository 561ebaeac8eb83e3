use macroquad::math::{Rect, Vec2};

/// Identifies which content image a tile shows when face-up.
/// Two tiles match when their ids are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ContentId(pub usize);

/// One grid cell: a face-down placeholder or a content image.
#[derive(Clone, Debug)]
pub struct Tile {
    rect: Rect,
    content: ContentId,
    revealed: bool,
    matched: bool,
}

impl Tile {
    /// Create a face-down, unmatched tile
    pub const fn new(rect: Rect, content: ContentId) -> Self {
        Self {
            rect,
            content,
            revealed: false,
            matched: false,
        }
    }

    pub const fn rect(&self) -> Rect {
        self.rect
    }

    pub const fn content(&self) -> ContentId {
        self.content
    }

    /// Face-up state
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_matched(&self) -> bool {
        self.matched
    }

    /// A click at `point` selects this tile only if it lands inside the
    /// tile while the tile is face-down and not yet paired.
    pub fn is_selectable(&self, point: Vec2) -> bool {
        !self.revealed && !self.matched && self.rect.contains(point)
    }

    /// Flip between face-down and face-up.
    /// Matched tiles are kept out of play by `is_selectable`, not here.
    pub fn toggle_face(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Both tiles must be face-up and show the same content.
    pub fn matches_content(&self, other: &Tile) -> bool {
        self.revealed && other.revealed && self.content == other.content
    }

    /// Settle the tile as paired. Never undone.
    pub fn mark_matched(&mut self) {
        self.matched = true;
    }
}
