mod images;

pub use images::ImageSet;

use macroquad::prelude::*;
use crate::application::GameState;
use crate::config::{
    BACKGROUND, BORDER_COLOR, FINAL_SCORE_COLOR, SCORE_COLOR, SCORE_FONT_SIZE, TILE_BORDER,
};
use crate::domain::{Board, Tile};

/// Draw one tile: its face image, then the frame on top
pub fn draw_tile(tile: &Tile, images: &ImageSet) {
    let rect = tile.rect();
    let texture = if tile.is_revealed() {
        images.content(tile.content())
    } else {
        Some(images.hidden())
    };

    if let Some(texture) = texture {
        draw_texture_ex(
            texture,
            rect.x,
            rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                ..Default::default()
            },
        );
    }

    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, TILE_BORDER, BORDER_COLOR);
}

/// Draw every tile in row-major order
pub fn draw_board(board: &Board, images: &ImageSet) {
    board.tiles().iter().for_each(|tile| draw_tile(tile, images));
}

/// Score in the top-right corner, on a background-colored box
pub fn draw_score(score: u64, finished: bool) {
    let text = score.to_string();
    let size = measure_text(&text, None, SCORE_FONT_SIZE, 1.0);
    let x = screen_width() - size.width;

    draw_rectangle(x, 0.0, size.width, size.height, BACKGROUND);
    draw_text(
        &text,
        x,
        size.offset_y,
        SCORE_FONT_SIZE as f32,
        if finished { FINAL_SCORE_COLOR } else { SCORE_COLOR },
    );
}

/// Draw a whole frame. Runs every tick, including after the game ends.
pub fn draw_frame(state: &GameState, images: &ImageSet) {
    clear_background(BACKGROUND);
    draw_board(state.board(), images);
    draw_score(state.score(), !state.is_running());
}
