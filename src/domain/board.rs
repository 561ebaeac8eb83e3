use super::{ContentId, GameError, Tile};
use macroquad::math::{Rect, Vec2};
use rand::{Rng, seq::SliceRandom};

/// Board owns the square grid of tiles, stored row-major.
/// Its size is fixed once built.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    tile_size: Vec2,
    tiles: Vec<Tile>,
}

impl Board {
    /// Build a shuffled board using the thread-local generator
    pub fn new(contents: &[ContentId], size: usize, tile_size: Vec2) -> Result<Self, GameError> {
        Self::with_rng(contents, size, tile_size, &mut rand::rng())
    }

    /// Build a board from `size² / 2` distinct contents, each placed twice.
    /// Cells get contents in row-major order after a uniform shuffle.
    pub fn with_rng<R: Rng + ?Sized>(
        contents: &[ContentId],
        size: usize,
        tile_size: Vec2,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let cells = size * size;
        if size == 0 || cells % 2 != 0 {
            return Err(GameError::InvalidBoardSize { size });
        }
        if contents.len() != cells / 2 {
            return Err(GameError::ImageCount {
                expected: cells / 2,
                found: contents.len(),
            });
        }
        if let Some((_, dup)) = contents
            .iter()
            .enumerate()
            .find(|&(i, c)| contents[..i].contains(c))
        {
            return Err(GameError::DuplicateContent {
                name: format!("content #{}", dup.0),
            });
        }

        let mut deck: Vec<ContentId> = contents.iter().chain(contents).copied().collect();
        deck.shuffle(rng);

        let tiles = deck
            .into_iter()
            .enumerate()
            .map(|(index, content)| {
                let (row, col) = (index / size, index % size);
                let rect = Rect::new(
                    col as f32 * tile_size.x,
                    row as f32 * tile_size.y,
                    tile_size.x,
                    tile_size.y,
                );
                Tile::new(rect, content)
            })
            .collect();

        Ok(Self {
            size,
            tile_size,
            tiles,
        })
    }

    /// Tiles per side
    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn tile_size(&self) -> Vec2 {
        self.tile_size
    }

    /// Total tile count
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Convert (row, col) to a tile index
    pub const fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Convert a tile index back to (row, col)
    pub const fn position_of(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Pixel size of the whole grid
    pub fn extent(&self) -> Vec2 {
        self.tile_size * self.size as f32
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn tile_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        (row < self.size && col < self.size)
            .then(|| &self.tiles[self.index_of(row, col)])
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Index of the first tile that a click at `point` would select
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.is_selectable(point))
    }

    /// Center of a cell in window coordinates
    pub fn cell_center(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.tile_size.x,
            (row as f32 + 0.5) * self.tile_size.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashMap;

    fn contents(n: usize) -> Vec<ContentId> {
        (0..n).map(ContentId).collect()
    }

    fn seeded(seed: u64) -> Board {
        let mut rng = StdRng::seed_from_u64(seed);
        Board::with_rng(&contents(8), 4, vec2(100.0, 100.0), &mut rng).unwrap()
    }

    #[test]
    fn test_every_content_appears_twice() {
        for seed in 0..20 {
            let board = seeded(seed);
            let mut counts: HashMap<ContentId, usize> = HashMap::new();
            for tile in board.tiles() {
                *counts.entry(tile.content()).or_default() += 1;
            }
            assert_eq!(counts.len(), 8);
            assert!(counts.values().all(|&n| n == 2));
        }
    }

    #[test]
    fn test_fresh_board_is_face_down() {
        let board = seeded(1);
        assert_eq!(board.len(), 16);
        assert!(board.tiles().iter().all(|t| !t.is_revealed() && !t.is_matched()));
    }

    #[test]
    fn test_layout_is_row_major() {
        let board = seeded(2);
        let rect = board.tile_at(1, 2).unwrap().rect();
        assert_eq!((rect.x, rect.y, rect.w, rect.h), (200.0, 100.0, 100.0, 100.0));
        assert_eq!(board.index_of(1, 2), 6);
        assert_eq!(board.position_of(6), (1, 2));
        assert!(board.tile_at(4, 0).is_none());
        assert_eq!(board.extent(), vec2(400.0, 400.0));
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        let a: Vec<_> = seeded(7).tiles().iter().map(Tile::content).collect();
        let b: Vec<_> = seeded(7).tiles().iter().map(Tile::content).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hit_test() {
        let mut board = seeded(3);
        let center = board.cell_center(2, 3);
        assert_eq!(board.hit_test(center), Some(board.index_of(2, 3)));

        // outside every tile
        assert_eq!(board.hit_test(vec2(450.0, 50.0)), None);
        assert_eq!(board.hit_test(vec2(-1.0, 10.0)), None);

        // face-up tiles are skipped
        board.tile_mut(board.index_of(2, 3)).unwrap().toggle_face();
        assert_eq!(board.hit_test(center), None);
    }

    #[test]
    fn test_wrong_content_count_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = Board::with_rng(&contents(7), 4, vec2(100.0, 100.0), &mut rng).unwrap_err();
        assert_eq!(err, GameError::ImageCount { expected: 8, found: 7 });
    }

    #[test]
    fn test_duplicate_content_rejected() {
        let mut ids = contents(7);
        ids.push(ContentId(3));
        let err = Board::new(&ids, 4, vec2(100.0, 100.0)).unwrap_err();
        assert!(matches!(err, GameError::DuplicateContent { .. }));
    }

    #[test]
    fn test_odd_board_rejected() {
        let err = Board::new(&contents(4), 3, vec2(100.0, 100.0)).unwrap_err();
        assert_eq!(err, GameError::InvalidBoardSize { size: 3 });
    }

    #[test]
    fn test_smaller_board() {
        let board = Board::new(&contents(2), 2, vec2(50.0, 50.0)).unwrap();
        assert_eq!(board.len(), 4);
        assert_eq!(board.size(), 2);
    }
}
