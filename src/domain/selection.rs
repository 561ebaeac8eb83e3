use std::collections::BTreeSet;

/// Tiles flipped during the turn in progress, in click order.
/// Holds at most two tile indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    tiles: Vec<usize>,
}

impl Selection {
    pub const CAPACITY: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile to the turn. Returns false when the turn is already full.
    pub fn push(&mut self, index: usize) -> bool {
        if self.is_full() {
            return false;
        }
        self.tiles.push(index);
        true
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tiles.len() == Self::CAPACITY
    }

    pub fn contains(&self, index: usize) -> bool {
        self.tiles.contains(&index)
    }

    /// Both tiles of a complete turn
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self.tiles.as_slice() {
            &[first, second] => Some((first, second)),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.tiles
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}

/// Tiles settled as pairs. Only ever grows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchedSet {
    tiles: BTreeSet<usize>,
}

impl MatchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a matched pair
    pub fn insert_pair(&mut self, first: usize, second: usize) {
        self.tiles.insert(first);
        self.tiles.insert(second);
    }

    pub fn contains(&self, index: usize) -> bool {
        self.tiles.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.tiles.iter().copied()
    }
}
