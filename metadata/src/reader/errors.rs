use rml_amf0::Amf0DeserializationError;
use thiserror::Error;

/// Enumeration that represents the various errors that may occur while trying to read a
/// received metadata frame
#[derive(Debug, Error)]
pub enum MetadataReadError {
    /// The data did not start with an `onMetaData` event, optionally preceded by
    /// `@setDataFrame`
    #[error("The data message is not an onMetaData event")]
    NotMetadataFrame,

    /// The `onMetaData` event name was not followed by an object of properties
    #[error("The onMetaData event did not contain an object of properties")]
    MissingProperties,

    /// The bytes were not properly encoded AMF0 values
    #[error("The message did not contain valid Amf0 encoded values: {0}")]
    Amf0DeserializationError(#[from] Amf0DeserializationError),
}
