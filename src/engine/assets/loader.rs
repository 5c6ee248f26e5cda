// Asset loading functionality

use super::AssetError;
use std::path::{Path, PathBuf};

/// Image file extensions the texture loader accepts
pub const TEXTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Asset loader responsible for finding and reading asset files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Asset loader rooted at the working directory
    pub fn working_dir() -> Self {
        Self::new(".")
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Load asset bytes from disk
    pub fn load_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve_path(name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        std::fs::read(&path)
            .map_err(|e| AssetError::LoadError(format!("Failed to read {}: {}", name, e)))
    }

    /// Load and decode an image asset
    pub fn load_image(&self, name: &str) -> Result<image::DynamicImage, AssetError> {
        if !Self::is_texture_name(name) {
            return Err(AssetError::InvalidType {
                expected: TEXTURE_EXTENSIONS.join("/"),
                actual: name.to_string(),
            });
        }

        let bytes = self.load_bytes(name)?;
        image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            name: name.to_string(),
            source,
        })
    }

    fn is_texture_name(name: &str) -> bool {
        Path::new(name)
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                TEXTURE_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::working_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game");
        let path = loader.resolve_path("sprites/ship_idle.png");

        assert_eq!(path, PathBuf::from("/game/sprites/ship_idle.png"));
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        let loader = AssetLoader::new("/nonexistent");
        let err = loader.load_bytes("sprites/ship_idle.png").unwrap_err();

        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn test_non_image_extension_rejected() {
        let loader = AssetLoader::working_dir();
        let err = loader.load_image("shaders/sprite.wgsl").unwrap_err();

        assert!(matches!(err, AssetError::InvalidType { .. }));
    }

    #[test]
    fn test_texture_extension_case_insensitive() {
        assert!(AssetLoader::is_texture_name("ship.PNG"));
        assert!(AssetLoader::is_texture_name("ship.jpeg"));
        assert!(!AssetLoader::is_texture_name("ship"));
    }

    #[test]
    fn test_corrupt_image_fails_to_decode() {
        let temp_dir = std::env::temp_dir();
        let name = "lunar_lander_corrupt_test.png";
        {
            let mut file = std::fs::File::create(temp_dir.join(name)).unwrap();
            file.write_all(b"definitely not a png").unwrap();
        }

        let loader = AssetLoader::new(&temp_dir);
        let err = loader.load_image(name).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));

        let _ = std::fs::remove_file(temp_dir.join(name));
    }

    #[test]
    fn test_real_image_decodes() {
        let temp_dir = std::env::temp_dir();
        let name = "lunar_lander_decode_test.png";
        image::RgbaImage::from_pixel(12, 2, image::Rgba([255, 0, 0, 255]))
            .save(temp_dir.join(name))
            .unwrap();

        let loader = AssetLoader::new(&temp_dir);
        let img = loader.load_image(name).unwrap();
        assert_eq!((img.width(), img.height()), (12, 2));

        let _ = std::fs::remove_file(temp_dir.join(name));
    }
}
