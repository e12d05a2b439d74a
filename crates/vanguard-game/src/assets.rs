//! Image lookup for entity and background sprites

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use vanguard_core::{Result, VanguardError};
use vanguard_particles::SpriteImage;

/// Resolves an image name to a renderable handle with its pixel size
pub trait AssetProvider {
    fn image(&self, name: &str) -> Result<SpriteImage>;
}

/// Images on disk under a root directory. Only the header is read.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetProvider for DirectoryAssets {
    fn image(&self, name: &str) -> Result<SpriteImage> {
        let path = self.root.join(name);
        let (width, height) = image::image_dimensions(&path).map_err(|e| {
            VanguardError::AssetError(format!("can't open image {}: {e}", path.display()))
        })?;
        Ok(SpriteImage::new(name, width as f32, height as f32))
    }
}

/// In-memory table, for hosts that load images themselves
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    images: HashMap<String, SpriteImage>,
}

impl StaticAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, width: f32, height: f32) {
        let name = name.into();
        self.images
            .insert(name.clone(), SpriteImage::new(name, width, height));
    }
}

impl AssetProvider for StaticAssets {
    fn image(&self, name: &str) -> Result<SpriteImage> {
        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| VanguardError::AssetError(format!("no image named {name}")))
    }
}

/// Look up `name`, logging a warning and returning `None` when it can't be loaded
pub fn load_or_warn(assets: &dyn AssetProvider, name: &str) -> Option<SpriteImage> {
    match assets.image(name) {
        Ok(image) => Some(image),
        Err(e) => {
            log::warn!("{e}; falling back to the default shape");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_reads_dimensions() {
        let dir = std::env::temp_dir().join(format!("vanguard-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        image::RgbaImage::new(12, 34)
            .save(dir.join("Missile2.png"))
            .unwrap();

        let assets = DirectoryAssets::new(&dir);
        let sprite = assets.image("Missile2.png").unwrap();
        assert_eq!((sprite.width, sprite.height), (12.0, 34.0));
        assert_eq!(sprite.key, "Missile2.png");

        assert!(matches!(
            assets.image("Beam.png"),
            Err(VanguardError::AssetError(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_image_falls_back() {
        let mut assets = StaticAssets::new();
        assets.insert("Beam.png", 8.0, 40.0);
        assert!(load_or_warn(&assets, "Beam.png").is_some());
        assert!(load_or_warn(&assets, "Missile2.png").is_none());
    }
}
