use image::ImageError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{0} is not a valid converter (should be rgb332 or rgb565)")]
    UnknownFormat(String),
    #[error("error opening image file: {0}")]
    OpenImage(#[source] io::Error),
    #[error("error decoding image: {0}")]
    DecodeImage(#[source] ImageError),
    #[error("error creating output file: {0}")]
    CreateOutput(#[source] io::Error),
    #[error("error writing to output file: {0}")]
    WriteOutput(#[source] io::Error),
    #[error("error replacing output file: {0}")]
    ReplaceOutput(#[source] io::Error),
    #[error("error saving preview image: {0}")]
    SavePreview(#[source] ImageError),
    #[error("packed stream is shorter than the {0}-byte header")]
    MissingHeader(usize),
    #[error("packed stream holds {actual} pixel bytes, expected {expected}")]
    TruncatedStream { expected: usize, actual: usize },
}
