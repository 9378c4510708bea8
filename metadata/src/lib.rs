//! This crate builds the AMF0 `@setDataFrame`/`onMetaData` data message an RTMP publisher
//! sends at the start of a publish session to describe the technical parameters of its
//! media stream, and reads such messages back into a `StreamDescriptor`.
//!
//! Handshaking, chunking and socket handling are left to whatever RTMP transport the
//! produced bytes are handed to.  The frame must be sent before the first audio or video
//! message on the stream.
//!
//! # Examples
//! ```
//! use rtmp_metadata::{MetadataFrameBuilder, MetadataFrameConfig, StreamDescriptor};
//! use rtmp_metadata::{AVC_CODEC_ID, read_metadata_frame};
//!
//! let mut descriptor = StreamDescriptor::new();
//! descriptor.video_width = Some(1280);
//! descriptor.video_height = Some(720);
//! descriptor.video_codec_id = Some(AVC_CODEC_ID.to_string());
//! descriptor.frame_rate = Some(30.0);
//! descriptor.encoder_tag = Some("My Encoder 1.0".to_string());
//!
//! let builder = MetadataFrameBuilder::new(MetadataFrameConfig::new());
//! let frame = builder.build(&descriptor).unwrap();
//!
//! let decoded = read_metadata_frame(&frame[..]).unwrap();
//! assert_eq!(decoded, descriptor);
//! ```

mod builder;
mod descriptor;
pub mod keys;
mod message;
mod reader;

pub use builder::{EncodingError, MetadataFrameBuilder, MetadataFrameConfig};
pub use descriptor::StreamDescriptor;
pub use keys::{AAC_CODEC_ID, AVC_CODEC_ID, DEFAULT_ENCODER_TAG};
pub use message::{MetadataMessage, AMF0_DATA_MESSAGE_TYPE_ID};
pub use reader::{read_metadata_frame, MetadataReadError};
