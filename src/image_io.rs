use image::{DynamicImage, GrayImage};
use std::path::Path;

use crate::error::ToneCurveError;

pub fn load_image(path: &Path) -> Result<DynamicImage, ToneCurveError> {
    Ok(image::open(path)?)
}

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ToneCurveError> {
    Ok(image::load_from_memory(bytes)?)
}

pub fn save_image(img: &GrayImage, path: &Path) -> Result<(), ToneCurveError> {
    img.save(path).map_err(ToneCurveError::Save)
}
