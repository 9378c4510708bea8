use rml_amf0::Amf0SerializationError;
use thiserror::Error;

use std::io;

/// Enumeration that represents the various errors that may occur while trying to
/// build a metadata frame from a stream descriptor.  No bytes are produced when any of
/// these are returned.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// A video width or height was supplied that was zero or negative
    #[error(
        "Video dimensions must be greater than zero, received width {width:?} and height {height:?}"
    )]
    InvalidDimension {
        width: Option<i32>,
        height: Option<i32>,
    },

    /// Audio sample sizes are only defined for 8 and 16 bit samples
    #[error("Audio sample size must be 8 or 16 bits, received {0}")]
    InvalidSampleBits(u8),

    /// A numeric property was negative, infinite or not a number
    #[error("The value {value} for '{key}' is not a finite, non-negative number")]
    InvalidNumber { key: &'static str, value: f64 },

    /// The values provided could not be serialized into valid AMF0 encoded data
    #[error("The values provided could not be serialized into valid AMF0 encoded data: {0}")]
    Amf0SerializationError(#[from] Amf0SerializationError),

    /// Failed to write the encoded values to the output buffer
    #[error("An IO error occurred while writing the output: {0}")]
    Io(#[from] io::Error),
}
