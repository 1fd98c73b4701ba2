//! In-place crop transform for PUT /files.
//!
//! Bounds are validated against the decoded image before anything is
//! written, so a rejected crop leaves the file untouched.

use std::path::Path;

use image::GenericImageView;

use crate::error::{AppError, Result};
use crate::models::CropBounds;

pub fn crop_in_place(path: &Path, bounds: CropBounds) -> Result<()> {
    let img = image::open(path)?;

    if bounds.width == 0 || bounds.height == 0 {
        return Err(AppError::InvalidBounds(
            "crop dimensions must be non-zero".to_string(),
        ));
    }

    let (img_w, img_h) = img.dimensions();
    if bounds.x + bounds.width > img_w || bounds.y + bounds.height > img_h {
        return Err(AppError::InvalidBounds(format!(
            "crop area ({},{} {}x{}) exceeds image bounds ({}x{})",
            bounds.x, bounds.y, bounds.width, bounds.height, img_w, img_h
        )));
    }

    img.crop_imm(bounds.x, bounds.y, bounds.width, bounds.height)
        .save(path)?;

    Ok(())
}
