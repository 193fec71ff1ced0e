use std::fs;
use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::error::{Error, Result};

const SUPPORTED: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

// --- EXIF orientation, 1 (upright) when absent or unreadable ---
pub fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Not fatal: draw the image as stored.
            warn!(path = %image_path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

fn extension_of(image_path: &Path) -> Result<String> {
    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if SUPPORTED.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(Error::image(image_path, format!("unsupported image type {extension:?}")))
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let extension = extension_of(image_path)?;
    let file_bytes = fs::read(image_path).map_err(|e| Error::image(image_path, e))?;

    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| Error::image(image_path, e))?;

    // 1 upright, 3 upside down, 6 rotated 90 CW, 8 rotated 90 CCW; flips are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    debug!(path = %image_path.display(), orientation, "image loaded");

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| Error::image(image_path, e))?;

    // Free the CPU copy now that the GPU has it.
    drop(image);

    Ok(texture)
}
