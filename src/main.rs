use anyhow::{Context, Result};
use macroquad::prelude::*;
use memory::{
    Board, GameConfig, GameState,
    application::FrameLimiter,
    config::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH},
    input, rendering::{self, ImageSet},
};

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    input::capture_close();

    let config = GameConfig::default();
    let images = ImageSet::load(&config)
        .await
        .context("could not load tile images")?;
    let board = Board::new(&images.content_ids(), config.board_size, images.tile_size())
        .context("could not build the board")?;
    log::info!(
        "starting {0}x{0} game with {1}x{2} tiles",
        board.size(),
        board.tile_size().x,
        board.tile_size().y
    );

    let mut state = GameState::new(board, get_time(), config.resolution_pause);
    let mut limiter = FrameLimiter::new(config.fps);

    while !state.close_requested() {
        state.handle_events(input::poll_events());

        rendering::draw_frame(&state, &images);

        if state.is_running() {
            state.update(get_time());
            state.decide_continue();
        }

        limiter.wait();
        next_frame().await;
    }

    log::info!("window closed, final score {}", state.score());
    Ok(())
}
