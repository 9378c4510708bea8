use bytes::Bytes;

/// RTMP message type id for data messages encoded with AMF0
pub const AMF0_DATA_MESSAGE_TYPE_ID: u8 = 18;

/// A built metadata frame along with the message header values the RTMP transport needs
/// to chunk it onto the right message stream
#[derive(PartialEq, Debug, Clone)]
pub struct MetadataMessage {
    pub timestamp: u32,
    pub type_id: u8,
    pub message_stream_id: u32,
    pub data: Bytes,
}

impl MetadataMessage {
    /// Metadata always goes out before the first media message, so it is stamped at zero
    pub fn new(message_stream_id: u32, data: Bytes) -> MetadataMessage {
        MetadataMessage {
            timestamp: 0,
            type_id: AMF0_DATA_MESSAGE_TYPE_ID,
            message_stream_id,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MetadataMessage, AMF0_DATA_MESSAGE_TYPE_ID};
    use crate::{MetadataFrameBuilder, MetadataFrameConfig, StreamDescriptor};

    #[test]
    fn can_get_message_from_descriptor() {
        let stream_id = 52;
        let builder = MetadataFrameBuilder::new(MetadataFrameConfig::new());
        let descriptor = StreamDescriptor::new();

        let message = builder.build_message(&descriptor, stream_id).unwrap();
        let frame = builder.build(&descriptor).unwrap();

        assert_eq!(message.type_id, AMF0_DATA_MESSAGE_TYPE_ID, "Incorrect type id");
        assert_eq!(message.message_stream_id, stream_id, "Incorrect message stream id");
        assert_eq!(message.timestamp, 0, "Incorrect timestamp");
        assert_eq!(message.data, frame, "Message data did not match the built frame");
    }

    #[test]
    fn invalid_descriptor_produces_no_message() {
        let builder = MetadataFrameBuilder::new(MetadataFrameConfig::new());
        let mut descriptor = StreamDescriptor::new();
        descriptor.audio_sample_bits = Some(24);

        let result = builder.build_message(&descriptor, 1);
        assert!(result.is_err(), "Expected an error but received {:?}", result);
    }

    #[test]
    fn new_message_uses_amf0_data_type() {
        let message = MetadataMessage::new(3, Default::default());

        assert_eq!(message.type_id, 18, "Incorrect type id");
        assert_eq!(message.message_stream_id, 3, "Incorrect message stream id");
        assert!(message.data.is_empty(), "Expected empty data");
    }
}
