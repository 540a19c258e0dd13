use image::{DynamicImage, GrayImage};
use rayon::prelude::*;

use crate::curve::LookupTable;
use crate::error::ToneCurveError;
use crate::image_io;

/// Owns the loaded source image and the grayscale result of mapping it
/// through a lookup table.
///
/// The source keeps its original color data; grayscale conversion
/// happens on every apply so the source can be re-mapped through any
/// number of tables without accumulating error.
#[derive(Default)]
pub struct ImageProcessor {
    source: Option<DynamicImage>,
    processed: Option<GrayImage>,
}

impl ImageProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the source image. Any previous source is discarded and
    /// the processed buffer is cleared until the next apply.
    pub fn load(&mut self, image: DynamicImage) {
        self.source = Some(image);
        self.processed = None;
    }

    /// Decode raw file bytes and load the result. On decode failure the
    /// previously loaded image and its processed buffer stay intact.
    pub fn load_from_memory(&mut self, bytes: &[u8]) -> Result<(), ToneCurveError> {
        let decoded = image_io::decode_image(bytes)?;
        self.load(decoded);
        Ok(())
    }

    /// Convert the source to grayscale and map every pixel through the
    /// table. O(width x height), parallelized over the pixel buffer.
    pub fn apply_table(&mut self, table: &LookupTable) -> Result<(), ToneCurveError> {
        let source = self.source.as_ref().ok_or(ToneCurveError::NotLoaded)?;
        let gray = source.to_luma8();
        let (width, height) = gray.dimensions();

        let mut buf = gray.into_raw();
        buf.par_iter_mut().for_each(|p| *p = table.get(*p));

        self.processed = GrayImage::from_raw(width, height, buf);
        Ok(())
    }

    pub fn processed(&self) -> Option<&GrayImage> {
        self.processed.as_ref()
    }

    pub fn original(&self) -> Option<&DynamicImage> {
        self.source.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    fn gray_source(intensity: u8) -> DynamicImage {
        let img = GrayImage::from_pixel(1, 1, Luma([intensity]));
        DynamicImage::ImageLuma8(img)
    }

    #[test]
    fn identity_table_matches_grayscale_conversion() {
        let mut proc = ImageProcessor::new();
        proc.load(gray_source(128));
        proc.apply_table(&LookupTable::identity()).unwrap();
        assert_eq!(proc.processed().unwrap().get_pixel(0, 0)[0], 128);
    }

    #[test]
    fn identity_table_on_color_image_equals_luma() {
        let img = RgbImage::from_pixel(3, 2, Rgb([200, 60, 10]));
        let source = DynamicImage::ImageRgb8(img);
        let expected = source.to_luma8();

        let mut proc = ImageProcessor::new();
        proc.load(source);
        proc.apply_table(&LookupTable::identity()).unwrap();
        assert_eq!(*proc.processed().unwrap(), expected);
    }

    #[test]
    fn table_is_applied_per_pixel() {
        let mut proc = ImageProcessor::new();
        proc.load(gray_source(100));
        proc.apply_table(&LookupTable::from_fn(|i| 255 - i)).unwrap();
        assert_eq!(proc.processed().unwrap().get_pixel(0, 0)[0], 155);
    }

    #[test]
    fn processed_keeps_source_dimensions() {
        let img = RgbImage::new(7, 5);
        let mut proc = ImageProcessor::new();
        proc.load(DynamicImage::ImageRgb8(img));
        proc.apply_table(&LookupTable::identity()).unwrap();
        assert_eq!(proc.processed().unwrap().dimensions(), (7, 5));
    }

    #[test]
    fn apply_without_image_reports_not_loaded() {
        let mut proc = ImageProcessor::new();
        assert!(matches!(
            proc.apply_table(&LookupTable::identity()),
            Err(ToneCurveError::NotLoaded)
        ));
        assert!(proc.processed().is_none());
        assert!(proc.original().is_none());
    }

    #[test]
    fn decode_failure_preserves_previous_state() {
        let mut proc = ImageProcessor::new();
        proc.load(gray_source(42));
        proc.apply_table(&LookupTable::identity()).unwrap();

        let err = proc.load_from_memory(b"definitely not an image");
        assert!(matches!(err, Err(ToneCurveError::Decode(_))));
        assert_eq!(proc.processed().unwrap().get_pixel(0, 0)[0], 42);
        assert!(proc.original().is_some());
    }

    #[test]
    fn load_from_memory_decodes_png() {
        let img = GrayImage::from_pixel(2, 2, Luma([7]));
        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(img)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let mut proc = ImageProcessor::new();
        proc.load_from_memory(&bytes).unwrap();
        assert_eq!(proc.original().unwrap().to_luma8().get_pixel(0, 0)[0], 7);
        // Processed output exists only after an explicit apply.
        assert!(proc.processed().is_none());
    }

    #[test]
    fn new_image_replaces_prior_image() {
        let mut proc = ImageProcessor::new();
        proc.load(gray_source(10));
        proc.apply_table(&LookupTable::identity()).unwrap();
        proc.load(gray_source(20));
        assert!(proc.processed().is_none());
        proc.apply_table(&LookupTable::identity()).unwrap();
        assert_eq!(proc.processed().unwrap().get_pixel(0, 0)[0], 20);
    }
}
