//! Interactive tone-curve editor - library crate.
//!
//! Provides the curve editing core and the grayscale lookup pipeline
//! for use by the main application.

pub mod curve;
pub mod error;
pub mod image_io;
pub mod processor;
pub mod store;
