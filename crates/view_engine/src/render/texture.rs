//! Texture upload from decoded image data

use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Texture, TextureCreator};

use crate::assets::ImageData;

/// Upload a decoded image as a streaming texture bound to `creator`'s
/// drawing context.
///
/// The pixel buffer is copied into the texture; the image may be dropped
/// afterwards. The texture borrows the creator and must be dropped before
/// the drawing context goes away.
pub fn upload<'r, C>(
    creator: &'r TextureCreator<C>,
    image: &ImageData,
) -> Result<Texture<'r>, String> {
    let mut texture = creator
        .create_texture_streaming(PixelFormatEnum::RGBA32, image.width, image.height)
        .map_err(|e| e.to_string())?;

    texture
        .update(None, &image.data, image.pitch())
        .map_err(|e| e.to_string())?;

    log::debug!(
        "Uploaded {}x{} texture ({} bytes)",
        image.width,
        image.height,
        image.size_bytes()
    );

    Ok(texture)
}
