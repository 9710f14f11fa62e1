//! Decoding of corpus images and PNG export of synthesized images

use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::image::Image;
use image::{ColorType, ImageFormat};
use std::path::Path;

/// Decode an image file into a corpus buffer
///
/// The native channel count is kept: gray, gray with alpha, RGB or RGBA.
/// Higher bit depths are reduced to 8 bits per channel.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The decoded image does not have 1 to 4 channels
pub fn load_corpus(path: &Path) -> Result<Image> {
    let img = image::open(path).map_err(|e| AlgorithmError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let channels = img.color().channel_count();
    let (width, height) = (img.width() as usize, img.height() as usize);

    let data = match channels {
        1 => img.into_luma8().into_raw(),
        2 => img.into_luma_alpha8().into_raw(),
        3 => img.into_rgb8().into_raw(),
        4 => img.into_rgba8().into_raw(),
        _ => {
            return Err(AlgorithmError::UnsupportedLayout {
                path: path.to_path_buf(),
                channels,
            });
        }
    };

    Image::new(width, height, usize::from(channels), data)
}

/// Write an image as PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The image dimensions do not fit the encoder
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(img: &Image, output_path: &Path) -> Result<()> {
    let color = match img.depth() {
        1 => ColorType::L8,
        2 => ColorType::La8,
        3 => ColorType::Rgb8,
        _ => ColorType::Rgba8,
    };
    let width =
        u32::try_from(img.width()).map_err(|e| invalid_parameter("width", &img.width(), &e))?;
    let height =
        u32::try_from(img.height()).map_err(|e| invalid_parameter("height", &img.height(), &e))?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image::save_buffer_with_format(
        output_path,
        img.as_bytes(),
        width,
        height,
        color,
        ImageFormat::Png,
    )
    .map_err(|e| AlgorithmError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
