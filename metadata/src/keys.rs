//! Literal names used on the wire for RTMP stream metadata.
//!
//! Players and servers match these by exact spelling, so none of them may change.

/// Command name that tells a server to cache the following data event for late joiners
pub const SET_DATA_FRAME: &str = "@setDataFrame";

/// Data event name announcing stream metadata
pub const ON_META_DATA: &str = "onMetaData";

pub const DURATION: &str = "duration";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const VIDEO_CODEC_ID: &str = "videocodecid";
pub const VIDEO_DATA_RATE: &str = "videodatarate";
pub const FRAME_RATE: &str = "framerate";
pub const AUDIO_CODEC_ID: &str = "audiocodecid";
pub const AUDIO_DATA_RATE: &str = "audiodatarate";
pub const AUDIO_SAMPLE_RATE: &str = "audiosamplerate";
pub const AUDIO_SAMPLE_SIZE: &str = "audiosamplesize";
pub const STEREO: &str = "stereo";
pub const ENCODER: &str = "encoder";
pub const FILE_SIZE: &str = "fileSize";

/// Order in which present properties are written into the metadata array
pub const CANONICAL_ORDER: [&str; 13] = [
    DURATION,
    WIDTH,
    HEIGHT,
    VIDEO_CODEC_ID,
    VIDEO_DATA_RATE,
    FRAME_RATE,
    AUDIO_CODEC_ID,
    AUDIO_DATA_RATE,
    AUDIO_SAMPLE_RATE,
    AUDIO_SAMPLE_SIZE,
    STEREO,
    ENCODER,
    FILE_SIZE,
];

/// Keys that only exist when the stream carries video
pub const VIDEO_KEYS: [&str; 5] = [WIDTH, HEIGHT, VIDEO_CODEC_ID, VIDEO_DATA_RATE, FRAME_RATE];

/// Keys that only exist when the stream carries audio
pub const AUDIO_KEYS: [&str; 5] = [
    AUDIO_CODEC_ID,
    AUDIO_DATA_RATE,
    AUDIO_SAMPLE_RATE,
    AUDIO_SAMPLE_SIZE,
    STEREO,
];

/// Codec id advertised for H.264 video
pub const AVC_CODEC_ID: &str = "avc1";

/// Codec id advertised for AAC audio
pub const AAC_CODEC_ID: &str = "mp4a";

/// Encoder tag used when a descriptor does not carry one
pub const DEFAULT_ENCODER_TAG: &str = concat!("rtmp_metadata ", env!("CARGO_PKG_VERSION"));
