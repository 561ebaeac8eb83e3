use super::InputEvent;
use crate::domain::{Board, MatchedSet, Selection};
use std::time::Duration;

/// Whether the player can still act
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// Every tile is matched. Terminal.
    Ended,
}

/// Outcome of comparing the two tiles of a turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Matched(usize, usize),
    Mismatched(usize, usize),
}

/// A full selection waiting to be resolved once `deadline` passes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolutionPause {
    pub deadline: f64,
}

/// GameState drives one game: it routes clicks to the board, resolves
/// turns and keeps the score. Times are seconds on the window clock.
pub struct GameState {
    board: Board,
    selection: Selection,
    matched: MatchedSet,
    phase: Phase,
    pause: Option<ResolutionPause>,
    resolution_pause: Duration,
    started_at: f64,
    score: u64,
    close_requested: bool,
}

impl GameState {
    pub fn new(board: Board, started_at: f64, resolution_pause: Duration) -> Self {
        Self {
            board,
            selection: Selection::new(),
            matched: MatchedSet::new(),
            phase: Phase::Running,
            pause: None,
            resolution_pause,
            started_at,
            score: 0,
            close_requested: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn matched(&self) -> &MatchedSet {
        &self.matched
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Whole seconds since the game started, frozen once it ends
    pub const fn score(&self) -> u64 {
        self.score
    }

    pub const fn close_requested(&self) -> bool {
        self.close_requested
    }

    pub const fn pause_pending(&self) -> Option<ResolutionPause> {
        self.pause
    }

    /// Apply every event polled this frame
    pub fn handle_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.handle_event(event);
        }
    }

    /// Close requests always register. Clicks only count while the game
    /// runs and the turn still has room; they reveal the tile under the pointer.
    /// Returns the index of the revealed tile, if any.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<usize> {
        match event {
            InputEvent::CloseRequested => {
                self.close_requested = true;
                None
            }
            InputEvent::PointerReleased(point) => {
                if !self.is_running() || self.selection.is_full() {
                    log::trace!("click at {point:?} ignored: turn closed");
                    return None;
                }
                let Some(index) = self.board.hit_test(point) else {
                    log::trace!("click at {point:?} hit no selectable tile");
                    return None;
                };
                let tile = self.board.tile_mut(index)?;
                tile.toggle_face();
                self.selection.push(index);
                let (row, col) = self.board.position_of(index);
                log::debug!("revealed tile {index} at ({row}, {col})");
                Some(index)
            }
        }
    }

    /// Per-frame update: refresh the score, then arm or finish the
    /// resolution pause. Does nothing once the game has ended.
    pub fn update(&mut self, now: f64) -> Option<Resolution> {
        if !self.is_running() {
            return None;
        }

        let elapsed = (now - self.started_at).max(0.0) as u64;
        self.score = self.score.max(elapsed);

        match self.pause {
            Some(pause) if now >= pause.deadline => {
                self.pause = None;
                self.resolve()
            }
            Some(_) => None,
            None if self.selection.is_full() => {
                self.pause = Some(ResolutionPause {
                    deadline: now + self.resolution_pause.as_secs_f64(),
                });
                None
            }
            None => None,
        }
    }

    /// Compare the two selected tiles right away. A pair stays face-up and
    /// joins the matched set; anything else flips back. The selection is
    /// emptied either way.
    pub fn resolve(&mut self) -> Option<Resolution> {
        let (first, second) = self.selection.pair()?;
        self.selection.clear();
        self.pause = None;

        let is_match = match (self.board.tile(first), self.board.tile(second)) {
            (Some(a), Some(b)) => a.matches_content(b),
            _ => return None,
        };

        let resolution = if is_match {
            for index in [first, second] {
                if let Some(tile) = self.board.tile_mut(index) {
                    tile.mark_matched();
                }
            }
            self.matched.insert_pair(first, second);
            Resolution::Matched(first, second)
        } else {
            for index in [first, second] {
                if let Some(tile) = self.board.tile_mut(index) {
                    tile.toggle_face();
                }
            }
            Resolution::Mismatched(first, second)
        };

        log::debug!(
            "turn resolved: {resolution:?}, {}/{} tiles matched",
            self.matched.len(),
            self.board.len()
        );
        Some(resolution)
    }

    /// Move to `Ended` once every tile is matched. Returns true on the
    /// tick the game ends.
    pub fn decide_continue(&mut self) -> bool {
        if self.is_running() && self.matched.len() == self.board.len() {
            self.phase = Phase::Ended;
            log::info!("all pairs found in {} seconds", self.score);
            return true;
        }
        false
    }
}
