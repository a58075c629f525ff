//! Bounded image decoding for PlaceBook.
//!
//! Turns arbitrarily large photo files and streams into images no larger
//! than the caller's requested bounds, without ever decoding the full
//! source at its intrinsic size. A cheap header probe yields the intrinsic
//! dimensions, a power-of-two inverse sample size is computed from them,
//! and only then are pixels decoded and reduced.
//!
//! Failure is never fatal here: any I/O or decode problem produces `None`
//! and one warning event, and callers treat a missing image as a normal
//! state.

use std::io::{Cursor, Read};
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use tracing::warn;

use crate::types::errors::ImageError;

/// A source of image bytes that can be opened more than once.
///
/// Streams are not seekable, and bounded decoding needs two passes (one
/// for the header probe, one for the pixels), so the source must hand out
/// a fresh stream per pass. `open` is called exactly once per pass.
pub trait StreamSource {
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>>;
}

/// In-memory stream source backed by a byte buffer.
pub struct MemoryStreamSource {
    bytes: Vec<u8>,
}

impl MemoryStreamSource {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl StreamSource for MemoryStreamSource {
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.bytes.clone())))
    }
}

/// Computes the power-of-two factor by which to shrink an image of
/// `width` x `height` so that it still covers `req_width` x `req_height`.
///
/// Returns the largest power of two `s` such that `height / s >= req_height`
/// and `width / s >= req_width` (integer division). Sources that already
/// fit within the requested bounds return 1, as do zero bounds.
pub fn calculate_in_sample_size(width: u32, height: u32, req_width: u32, req_height: u32) -> u32 {
    if req_width == 0 || req_height == 0 {
        return 1;
    }

    let mut in_sample_size = 1;
    if height > req_height || width > req_width {
        let half_height = height / 2;
        let half_width = width / 2;
        while half_height / in_sample_size >= req_height && half_width / in_sample_size >= req_width
        {
            in_sample_size *= 2;
        }
    }
    in_sample_size
}

/// Decodes the image file at `path` reduced to fit the requested bounds.
///
/// The file is read twice: once for the dimension probe, once for the
/// pixel decode. Returns `None` (with one warning event) on any failure.
pub fn decode_file_to_size(path: &Path, req_width: u32, req_height: u32) -> Option<DynamicImage> {
    match decode_file_inner(path, req_width, req_height) {
        Ok(image) => Some(image),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to decode image file");
            None
        }
    }
}

/// Decodes a reopenable stream reduced to fit the requested bounds.
///
/// The source is opened once for the dimension probe and once more for
/// the pixel decode. Returns `None` (with one warning event) on any
/// failure, including a source that cannot be reopened.
pub fn decode_stream_to_size(
    source: &dyn StreamSource,
    req_width: u32,
    req_height: u32,
) -> Option<DynamicImage> {
    match decode_stream_inner(source, req_width, req_height) {
        Ok(image) => Some(image),
        Err(e) => {
            warn!(error = %e, "failed to decode image stream");
            None
        }
    }
}

fn decode_file_inner(
    path: &Path,
    req_width: u32,
    req_height: u32,
) -> Result<DynamicImage, ImageError> {
    // Pass 1: header-only probe for the intrinsic dimensions.
    let (width, height) = ImageReader::open(path)
        .map_err(|e| ImageError::Io(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| ImageError::Io(e.to_string()))?
        .into_dimensions()
        .map_err(|e| ImageError::Decode(e.to_string()))?;

    let sample = calculate_in_sample_size(width, height, req_width, req_height);

    // Pass 2: real decode, reduced by the computed factor.
    let image = ImageReader::open(path)
        .map_err(|e| ImageError::Io(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| ImageError::Io(e.to_string()))?
        .decode()
        .map_err(|e| ImageError::Decode(e.to_string()))?;

    Ok(downsample(image, width, height, sample))
}

fn decode_stream_inner(
    source: &dyn StreamSource,
    req_width: u32,
    req_height: u32,
) -> Result<DynamicImage, ImageError> {
    let bytes = read_stream(source)?;
    let (width, height) = ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .map_err(|e| ImageError::Io(e.to_string()))?
        .into_dimensions()
        .map_err(|e| ImageError::Decode(e.to_string()))?;

    let sample = calculate_in_sample_size(width, height, req_width, req_height);

    // Streams cannot seek back, so the second pass reopens the source.
    let bytes = read_stream(source)?;
    let image = ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .map_err(|e| ImageError::Io(e.to_string()))?
        .decode()
        .map_err(|e| ImageError::Decode(e.to_string()))?;

    Ok(downsample(image, width, height, sample))
}

fn read_stream(source: &dyn StreamSource) -> Result<Vec<u8>, ImageError> {
    let mut reader = source.open().map_err(|e| ImageError::Io(e.to_string()))?;
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| ImageError::Io(e.to_string()))?;
    Ok(bytes)
}

fn downsample(image: DynamicImage, width: u32, height: u32, sample: u32) -> DynamicImage {
    if sample <= 1 {
        return image;
    }
    image.resize_exact(width / sample, height / sample, FilterType::Triangle)
}
