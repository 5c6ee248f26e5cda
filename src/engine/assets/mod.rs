// Asset management
//
// Resolves asset paths, reads and decodes image files, and addresses
// frames inside grid-packed sprite sheets.

mod atlas;
mod loader;

pub use atlas::{AtlasGrid, UvRect};
pub use loader::{AssetLoader, TEXTURE_EXTENSIONS};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Invalid asset type: expected {expected}, got {actual}")]
    InvalidType { expected: String, actual: String },

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("Failed to decode image {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
}
