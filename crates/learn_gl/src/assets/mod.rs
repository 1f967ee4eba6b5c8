//! Asset loading

pub mod image_loader;

pub use image_loader::ImageData;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load or decode an asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// Decoded image has a channel count the renderer cannot upload
    #[error("Unsupported number of channels: {0}")]
    UnsupportedChannels(u8),
}
