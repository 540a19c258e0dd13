use thiserror::Error;

/// Failures the core reports to the shell.
///
/// None of these are fatal: every one leaves the editor, store, and
/// processor in their previous valid state, and any subsequent valid
/// operation proceeds normally.
#[derive(Debug, Error)]
pub enum ToneCurveError {
    /// The file could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The processed image could not be written out.
    #[error("failed to save image: {0}")]
    Save(#[source] image::ImageError),

    /// A lookup-table application was requested with no image loaded.
    #[error("no image loaded")]
    NotLoaded,

    /// A saved-curve index past the end of the store.
    #[error("saved curve {index} does not exist ({len} saved)")]
    IndexOutOfRange { index: usize, len: usize },
}
