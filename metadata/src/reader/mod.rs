//! Reads metadata frames sent by a publisher back into a `StreamDescriptor`.
//!
//! Frames are accepted whether or not they carry the leading `@setDataFrame` command name,
//! since servers strip it when relaying metadata on to players.  Properties this crate
//! doesn't know about, or that carry an unexpected AMF0 type, are skipped.

mod errors;

pub use self::errors::MetadataReadError;

use rml_amf0::Amf0Value;
use std::collections::HashMap;
use std::io::Cursor;
use tracing::trace;

use crate::descriptor::StreamDescriptor;
use crate::keys;

/// Decodes the body of an AMF0 data message carrying stream metadata
pub fn read_metadata_frame(data: &[u8]) -> Result<StreamDescriptor, MetadataReadError> {
    let mut cursor = Cursor::new(data);
    let mut values = rml_amf0::deserialize(&mut cursor)?.into_iter();

    let mut event_name = values.next();
    if is_string(&event_name, keys::SET_DATA_FRAME) {
        event_name = values.next();
    }

    if !is_string(&event_name, keys::ON_META_DATA) {
        return Err(MetadataReadError::NotMetadataFrame);
    }

    // ECMA arrays are decoded as objects by rml_amf0
    let properties = match values.next().and_then(|x| x.get_object_properties()) {
        Some(properties) => properties,
        None => return Err(MetadataReadError::MissingProperties),
    };

    let mut descriptor = StreamDescriptor::new();
    apply_metadata_values(&mut descriptor, properties);
    Ok(descriptor)
}

fn is_string(value: &Option<Amf0Value>, expected: &str) -> bool {
    match value {
        Some(Amf0Value::Utf8String(string)) => string.as_str() == expected,
        _ => false,
    }
}

fn apply_metadata_values(descriptor: &mut StreamDescriptor, properties: HashMap<String, Amf0Value>) {
    for (key, value) in properties {
        let applied = match key.as_str() {
            keys::DURATION => value.get_number().map(|x| descriptor.duration_seconds = x),
            keys::WIDTH => value.get_number().map(|x| descriptor.video_width = Some(x as i32)),
            keys::HEIGHT => value.get_number().map(|x| descriptor.video_height = Some(x as i32)),
            keys::VIDEO_CODEC_ID => value.get_string().map(|x| descriptor.video_codec_id = Some(x)),
            keys::VIDEO_DATA_RATE => value
                .get_number()
                .map(|x| descriptor.video_bitrate_kbps = Some(x)),
            keys::FRAME_RATE => value.get_number().map(|x| descriptor.frame_rate = Some(x)),
            keys::AUDIO_CODEC_ID => value.get_string().map(|x| descriptor.audio_codec_id = Some(x)),
            keys::AUDIO_DATA_RATE => value
                .get_number()
                .map(|x| descriptor.audio_bitrate_kbps = Some(x)),
            keys::AUDIO_SAMPLE_RATE => value
                .get_number()
                .map(|x| descriptor.audio_sample_rate_hz = Some(x as u32)),
            keys::AUDIO_SAMPLE_SIZE => value
                .get_number()
                .map(|x| descriptor.audio_sample_bits = Some(x as u8)),
            keys::STEREO => value.get_boolean().map(|x| descriptor.stereo = Some(x)),
            keys::ENCODER => value.get_string().map(|x| descriptor.encoder_tag = Some(x)),
            keys::FILE_SIZE => value
                .get_number()
                .map(|x| descriptor.file_size_bytes = Some(x as u64)),
            _ => {
                trace!(key = %key, "Ignoring unknown metadata property");
                continue;
            }
        };

        if applied.is_none() {
            trace!(key = %key, "Ignoring metadata property with an unexpected value type");
        }
    }
}
