//! 2D textures loaded from image files

use std::path::Path;

use super::api::{GraphicsApi, PixelFormat, TextureFilter, TextureId, TextureWrap};
use crate::assets::{AssetError, ImageData};

/// Border color used with [`TextureWrap::ClampToBorder`]
pub const BORDER_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

/// Sampling parameters applied when a texture is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureParams {
    /// Wrap mode for S and T
    pub wrap: TextureWrap,
    /// Min and mag filter
    pub filter: TextureFilter,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            wrap: TextureWrap::Repeat,
            filter: TextureFilter::Linear,
        }
    }
}

/// A 2D texture object
#[derive(Debug, PartialEq, Eq)]
pub struct Texture {
    id: TextureId,
    uploaded: bool,
}

impl Texture {
    /// Create a texture and load `path` into it
    ///
    /// Decode failures and unsupported channel counts are logged and leave an
    /// empty texture behind; the handle is valid either way and must still be
    /// destroyed. Nothing is cached, each call decodes the file again.
    pub fn load(gl: &mut dyn GraphicsApi, path: &Path, params: TextureParams) -> Self {
        let mut texture = Self::create(gl, params);

        match ImageData::from_file(path, true) {
            Ok(image) => {
                if let Err(e) = texture.upload(gl, &image) {
                    log::warn!("Texture {:?} not uploaded: {}", path, e);
                }
            }
            Err(e) => log::warn!("Failed to load texture at path {:?}: {}", path, e),
        }

        texture
    }

    /// Create and bind an empty texture with the given sampling parameters
    pub fn create(gl: &mut dyn GraphicsApi, params: TextureParams) -> Self {
        let id = gl.create_texture();
        gl.bind_texture(Some(id));

        if params.wrap == TextureWrap::ClampToBorder {
            gl.set_texture_border_color(BORDER_COLOR);
        }
        gl.set_texture_wrap(params.wrap);
        gl.set_texture_filter(params.filter);

        Self { id, uploaded: false }
    }

    /// Upload `image` as level 0 and build its mipmaps
    ///
    /// Binds the texture first. Images whose channel count has no matching
    /// pixel format are rejected without touching the texture.
    pub fn upload(&mut self, gl: &mut dyn GraphicsApi, image: &ImageData) -> Result<(), AssetError> {
        let format = PixelFormat::from_channels(image.channels)
            .ok_or(AssetError::UnsupportedChannels(image.channels))?;

        gl.bind_texture(Some(self.id));
        gl.tex_image_2d(format, image.width, image.height, &image.data);
        gl.generate_mipmap();
        self.uploaded = true;
        Ok(())
    }

    /// Texture handle
    pub fn id(&self) -> TextureId {
        self.id
    }

    /// Whether image data was uploaded
    pub fn is_uploaded(&self) -> bool {
        self.uploaded
    }

    /// Bind to texture unit `unit`
    pub fn bind(&self, gl: &mut dyn GraphicsApi, unit: u32) {
        gl.active_texture(unit);
        gl.bind_texture(Some(self.id));
    }

    /// Delete the texture
    pub fn destroy(self, gl: &mut dyn GraphicsApi) {
        gl.delete_texture(self.id);
    }
}
