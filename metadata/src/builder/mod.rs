//! Turns a `StreamDescriptor` into the AMF0 metadata frame a publisher sends before any
//! media.
//!
//! The frame consists of the `@setDataFrame` and `onMetaData` command names followed by an
//! ECMA array holding every present descriptor field.  Properties are always written in
//! the order of `keys::CANONICAL_ORDER` so the same descriptor produces the same bytes.

mod config;
mod ecma_array;
mod errors;


pub use self::config::MetadataFrameConfig;
pub use self::errors::EncodingError;

use bytes::Bytes;
use rml_amf0::Amf0Value;
use tracing::debug;

use crate::descriptor::StreamDescriptor;
use crate::keys;
use crate::message::MetadataMessage;

/// Builds metadata frames for streams being published.
///
/// The builder holds no state besides its configuration, so a single instance can be
/// shared between any number of publish sessions.
#[derive(Clone, Debug)]
pub struct MetadataFrameBuilder {
    config: MetadataFrameConfig,
}

impl MetadataFrameBuilder {
    pub fn new(config: MetadataFrameConfig) -> MetadataFrameBuilder {
        MetadataFrameBuilder { config }
    }

    pub fn config(&self) -> &MetadataFrameConfig {
        &self.config
    }

    /// Encodes the descriptor into the bytes of an AMF0 data message body
    pub fn build(&self, descriptor: &StreamDescriptor) -> Result<Bytes, EncodingError> {
        let properties = self.properties(descriptor)?;
        let property_count = properties.len();

        let mut command_names = Vec::with_capacity(2);
        if self.config.include_set_data_frame {
            command_names.push(Amf0Value::Utf8String(keys::SET_DATA_FRAME.to_string()));
        }

        command_names.push(Amf0Value::Utf8String(keys::ON_META_DATA.to_string()));

        let mut bytes = rml_amf0::serialize(&command_names)?;
        ecma_array::serialize(properties, &mut bytes)?;

        debug!(
            property_count,
            frame_length = bytes.len(),
            has_video = descriptor.has_video(),
            has_audio = descriptor.has_audio(),
            "Built stream metadata frame"
        );

        Ok(Bytes::from(bytes))
    }

    /// Builds the frame and wraps it in the data message that should be sent on the given
    /// message stream before any audio or video
    pub fn build_message(
        &self,
        descriptor: &StreamDescriptor,
        message_stream_id: u32,
    ) -> Result<MetadataMessage, EncodingError> {
        let data = self.build(descriptor)?;
        Ok(MetadataMessage::new(message_stream_id, data))
    }

    /// Validates the descriptor and returns the properties that will be written into the
    /// frame, in the order they will be written.
    pub fn properties(
        &self,
        descriptor: &StreamDescriptor,
    ) -> Result<Vec<(&'static str, Amf0Value)>, EncodingError> {
        validate(descriptor)?;

        let mut properties = Vec::with_capacity(keys::CANONICAL_ORDER.len());
        properties.push((keys::DURATION, Amf0Value::Number(descriptor.duration_seconds)));

        if let Some(width) = descriptor.video_width {
            properties.push((keys::WIDTH, Amf0Value::Number(width as f64)));
        }

        if let Some(height) = descriptor.video_height {
            properties.push((keys::HEIGHT, Amf0Value::Number(height as f64)));
        }

        if let Some(ref codec) = descriptor.video_codec_id {
            properties.push((keys::VIDEO_CODEC_ID, Amf0Value::Utf8String(codec.clone())));
        }

        if let Some(bitrate) = descriptor.video_bitrate_kbps {
            properties.push((keys::VIDEO_DATA_RATE, Amf0Value::Number(bitrate)));
        }

        if let Some(frame_rate) = descriptor.frame_rate {
            properties.push((keys::FRAME_RATE, Amf0Value::Number(frame_rate)));
        }

        if let Some(ref codec) = descriptor.audio_codec_id {
            properties.push((keys::AUDIO_CODEC_ID, Amf0Value::Utf8String(codec.clone())));
        }

        if let Some(bitrate) = descriptor.audio_bitrate_kbps {
            properties.push((keys::AUDIO_DATA_RATE, Amf0Value::Number(bitrate)));
        }

        if let Some(sample_rate) = descriptor.audio_sample_rate_hz {
            properties.push((keys::AUDIO_SAMPLE_RATE, Amf0Value::Number(sample_rate as f64)));
        }

        if let Some(sample_bits) = descriptor.audio_sample_bits {
            properties.push((keys::AUDIO_SAMPLE_SIZE, Amf0Value::Number(sample_bits as f64)));
        }

        if let Some(stereo) = descriptor.stereo {
            properties.push((keys::STEREO, Amf0Value::Boolean(stereo)));
        }

        let encoder = match descriptor.encoder_tag {
            Some(ref tag) if !tag.is_empty() => tag.clone(),
            _ => self.config.default_encoder_tag.clone(),
        };

        properties.push((keys::ENCODER, Amf0Value::Utf8String(encoder)));

        if let Some(file_size) = descriptor.file_size_bytes {
            properties.push((keys::FILE_SIZE, Amf0Value::Number(file_size as f64)));
        }

        Ok(properties)
    }
}

fn validate(descriptor: &StreamDescriptor) -> Result<(), EncodingError> {
    let is_invalid_dimension = |value: Option<i32>| value.map_or(false, |x| x <= 0);
    if is_invalid_dimension(descriptor.video_width) || is_invalid_dimension(descriptor.video_height)
    {
        return Err(EncodingError::InvalidDimension {
            width: descriptor.video_width,
            height: descriptor.video_height,
        });
    }

    match descriptor.audio_sample_bits {
        None | Some(8) | Some(16) => (),
        Some(bits) => return Err(EncodingError::InvalidSampleBits(bits)),
    }

    validate_number(keys::DURATION, Some(descriptor.duration_seconds))?;
    validate_number(keys::VIDEO_DATA_RATE, descriptor.video_bitrate_kbps)?;
    validate_number(keys::FRAME_RATE, descriptor.frame_rate)?;
    validate_number(keys::AUDIO_DATA_RATE, descriptor.audio_bitrate_kbps)?;

    Ok(())
}

fn validate_number(key: &'static str, value: Option<f64>) -> Result<(), EncodingError> {
    match value {
        Some(value) if !value.is_finite() || value < 0.0 => {
            Err(EncodingError::InvalidNumber { key, value })
        }

        _ => Ok(()),
    }
}
