//! QR image generation.
//!
//! One PNG per record, encoding the public URL of that record's profile page
//! (never arbitrary content — the QR is a pointer into the published site).
//! Pure-Rust pipeline: `qrcode` produces the module matrix, rendered to
//! grayscale pixels and encoded as PNG by the `image` crate. No system
//! dependencies, and fixed rendering parameters keep rebuilds byte-identical.

use crate::config::QrConfig;
use image::Luma;
use qrcode::{EcLevel, QrCode};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("QR encode error: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("image write error: {0}")]
    Write(#[from] image::ImageError),
}

/// Render `data` as a QR code and write it as a PNG at `path`.
///
/// Error-correction level Q: profile URLs are short, and the codes end up on
/// printed membership cards where scuffing is expected.
pub fn write_png(data: &str, path: &Path, config: &QrConfig) -> Result<(), QrError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::Q)?;
    let pixels = code
        .render::<Luma<u8>>()
        .module_dimensions(config.module_size, config.module_size)
        .quiet_zone(config.quiet_zone)
        .build();
    pixels.save(path)?;
    Ok(())
}
