//! Image loading utilities for texture data
//!
//! Decoded pixels keep the source image's channel count so the texture code
//! can pick a matching pixel format instead of always expanding to RGBA.

use std::path::Path;

use image::DynamicImage;

use crate::assets::AssetError;

/// Decoded 8-bit image data ready for GPU upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Tightly packed pixel rows, `channels` bytes per pixel
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path
    ///
    /// With `flip_vertically` the first row of `data` is the bottom row of the
    /// image, matching OpenGL's texture origin.
    pub fn from_file<P: AsRef<Path>>(path: P, flip_vertically: bool) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let bytes = std::fs::read(path_ref).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AssetError::NotFound(path_ref.display().to_string()),
            _ => AssetError::LoadFailed(format!("Failed to read image {:?}: {}", path_ref, e)),
        })?;
        let image = Self::from_bytes(&bytes, flip_vertically)?;

        log::info!(
            "Loaded image {}x{} ({} channels) from {:?}",
            image.width, image.height, image.channels, path_ref
        );
        Ok(image)
    }

    /// Decode an encoded image, detecting the format from its contents
    pub fn from_bytes(bytes: &[u8], flip_vertically: bool) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image from bytes: {}", e)))?;
        Ok(Self::from_dynamic(img, flip_vertically))
    }

    /// Convert a decoded image to 8 bits per channel, keeping its channel count
    pub fn from_dynamic(img: DynamicImage, flip_vertically: bool) -> Self {
        let img = if flip_vertically { img.flipv() } else { img };
        let (width, height) = (img.width(), img.height());
        let channels = img.color().channel_count();

        // Every `ColorType` has between one and four channels
        let data = match channels {
            1 => img.into_luma8().into_raw(),
            2 => img.into_luma_alpha8().into_raw(),
            3 => img.into_rgb8().into_raw(),
            _ => img.into_rgba8().into_raw(),
        };

        Self {
            data,
            width,
            height,
            channels,
        }
    }
}
