use macroquad::prelude::*;
use crate::config::GameConfig;
use crate::domain::{ContentId, GameError};
use std::path::Path;

/// Textures for the face-down placeholder and every content image.
/// `ContentId(n)` names `contents[n]`.
pub struct ImageSet {
    hidden: Texture2D,
    contents: Vec<Texture2D>,
    tile_size: Vec2,
}

impl ImageSet {
    /// Load all images named by `config`. The list is validated first so a
    /// bad configuration fails before touching the disk.
    pub async fn load(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let hidden_path = config.hidden_path();
        let hidden = load_image_file(&hidden_path).await?;
        let tile_size = vec2(hidden.width(), hidden.height());

        let mut contents = Vec::with_capacity(config.pairs());
        for path in config.content_paths() {
            let texture = load_image_file(&path).await?;
            check_size(&path, tile_size, vec2(texture.width(), texture.height()))?;
            contents.push(texture);
        }

        log::info!(
            "loaded {} content images of {}x{} from {}",
            contents.len(),
            tile_size.x,
            tile_size.y,
            config.asset_dir.display()
        );

        Ok(Self {
            hidden,
            contents,
            tile_size,
        })
    }

    /// Ids for every content image, in load order
    pub fn content_ids(&self) -> Vec<ContentId> {
        (0..self.contents.len()).map(ContentId).collect()
    }

    pub const fn tile_size(&self) -> Vec2 {
        self.tile_size
    }

    pub fn hidden(&self) -> &Texture2D {
        &self.hidden
    }

    pub fn content(&self, id: ContentId) -> Option<&Texture2D> {
        self.contents.get(id.0)
    }
}

async fn load_image_file(path: &Path) -> Result<Texture2D, GameError> {
    let display = path.display().to_string();
    let texture = load_texture(&display)
        .await
        .map_err(|err| GameError::AssetLoad {
            path: display.clone(),
            reason: format!("{err:?}"),
        })?;
    texture.set_filter(FilterMode::Nearest);
    log::debug!("loaded {display}");
    Ok(texture)
}

/// All tiles share one size, taken from the placeholder
fn check_size(path: &Path, expected: Vec2, found: Vec2) -> Result<(), GameError> {
    if expected == found {
        return Ok(());
    }
    Err(GameError::ImageSizeMismatch {
        path: path.display().to_string(),
        expected: (expected.x, expected.y),
        found: (found.x, found.y),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_check() {
        let path = Path::new("assets/image4.png");
        assert!(check_size(path, vec2(100.0, 100.0), vec2(100.0, 100.0)).is_ok());

        let err = check_size(path, vec2(100.0, 100.0), vec2(100.0, 90.0)).unwrap_err();
        assert_eq!(
            err,
            GameError::ImageSizeMismatch {
                path: "assets/image4.png".into(),
                expected: (100.0, 100.0),
                found: (100.0, 90.0),
            }
        );
        assert!(err.is_configuration());
    }
}
