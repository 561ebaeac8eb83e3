use std::fmt;

/// Fatal startup failures. Nothing during play produces one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// An image file could not be read or decoded
    AssetLoad { path: String, reason: String },
    /// Content image count does not fit the board
    ImageCount { expected: usize, found: usize },
    /// The same content image was listed twice
    DuplicateContent { name: String },
    /// Every tile image must share one size
    ImageSizeMismatch {
        path: String,
        expected: (f32, f32),
        found: (f32, f32),
    },
    /// Board side must be even and non-zero so tiles pair up
    InvalidBoardSize { size: usize },
}

impl GameError {
    /// True for errors caused by the game setup rather than by a file on disk
    pub const fn is_configuration(&self) -> bool {
        !matches!(self, GameError::AssetLoad { .. })
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::AssetLoad { path, reason } => {
                write!(f, "failed to load image {path}: {reason}")
            }
            GameError::ImageCount { expected, found } => {
                write!(f, "expected {expected} distinct content images, found {found}")
            }
            GameError::DuplicateContent { name } => {
                write!(f, "content image {name} is listed more than once")
            }
            GameError::ImageSizeMismatch { path, expected, found } => write!(
                f,
                "image {path} is {}x{}, expected {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            GameError::InvalidBoardSize { size } => {
                write!(f, "board size {size} cannot be split into pairs")
            }
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy() {
        let load = GameError::AssetLoad {
            path: "assets/image1.png".into(),
            reason: "not found".into(),
        };
        assert!(!load.is_configuration());
        assert!(GameError::ImageCount { expected: 8, found: 7 }.is_configuration());
        assert!(GameError::InvalidBoardSize { size: 3 }.is_configuration());
    }

    #[test]
    fn test_messages_name_the_problem() {
        let err = GameError::ImageCount { expected: 8, found: 9 };
        assert_eq!(err.to_string(), "expected 8 distinct content images, found 9");

        let err = GameError::ImageSizeMismatch {
            path: "assets/image3.png".into(),
            expected: (100.0, 100.0),
            found: (64.0, 64.0),
        };
        assert!(err.to_string().contains("assets/image3.png"));
    }
}
