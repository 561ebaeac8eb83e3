use crate::domain::GameError;
use macroquad::color::Color;
use std::path::PathBuf;
use std::time::Duration;

pub const WINDOW_TITLE: &str = "Memory";
pub const WINDOW_WIDTH: i32 = 500;
pub const WINDOW_HEIGHT: i32 = 400;

pub const SCORE_FONT_SIZE: u16 = 72;
pub const TILE_BORDER: f32 = 4.0;

pub const BACKGROUND: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const BORDER_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const SCORE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const FINAL_SCORE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);

/// Compile-time game settings. Nothing here is read from disk or the environment.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Tiles per side
    pub board_size: usize,
    pub fps: u32,
    /// How long both tiles of a turn stay visible before resolution
    pub resolution_pause: Duration,
    pub asset_dir: PathBuf,
    /// Face-down placeholder
    pub hidden_image: String,
    pub content_images: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 4,
            fps: 60,
            resolution_pause: Duration::from_millis(500),
            asset_dir: PathBuf::from("assets"),
            hidden_image: "image0.png".to_owned(),
            content_images: (1..=8).map(|n| format!("image{n}.png")).collect(),
        }
    }
}

impl GameConfig {
    /// Distinct contents the board needs
    pub fn pairs(&self) -> usize {
        self.board_size * self.board_size / 2
    }

    /// Reject an image list that cannot fill the board, before anything is loaded
    pub fn validate(&self) -> Result<(), GameError> {
        let cells = self.board_size * self.board_size;
        if cells == 0 || cells % 2 != 0 {
            return Err(GameError::InvalidBoardSize {
                size: self.board_size,
            });
        }
        if self.content_images.len() != self.pairs() {
            return Err(GameError::ImageCount {
                expected: self.pairs(),
                found: self.content_images.len(),
            });
        }
        for (i, name) in self.content_images.iter().enumerate() {
            if self.content_images[..i].contains(name) || *name == self.hidden_image {
                return Err(GameError::DuplicateContent { name: name.clone() });
            }
        }
        Ok(())
    }

    pub fn hidden_path(&self) -> PathBuf {
        self.asset_dir.join(&self.hidden_image)
    }

    pub fn content_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.content_images.iter().map(|name| self.asset_dir.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.pairs(), 8);
        assert!(config.validate().is_ok());
        assert_eq!(config.content_paths().count(), 8);
        assert_eq!(config.hidden_path(), PathBuf::from("assets/image0.png"));
    }

    #[test]
    fn test_missing_image_rejected() {
        let mut config = GameConfig::default();
        config.content_images.pop();
        assert_eq!(
            config.validate(),
            Err(GameError::ImageCount { expected: 8, found: 7 })
        );
    }

    #[test]
    fn test_repeated_image_rejected() {
        let mut config = GameConfig::default();
        config.content_images[7] = "image1.png".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(err, GameError::DuplicateContent { .. }));
    }

    #[test]
    fn test_placeholder_as_content_rejected() {
        let mut config = GameConfig::default();
        config.content_images[0] = "image0.png".to_owned();
        assert!(config.validate().is_err());
    }
}
