/// Describes the technical parameters of a stream about to be published.
///
/// A field that is `None` is left out of the metadata frame entirely.  Video fields should
/// only be set when the stream carries a video track, and audio fields only when it carries
/// an audio track, so players are never told about a track that doesn't exist.
#[derive(PartialEq, Debug, Clone)]
pub struct StreamDescriptor {
    pub duration_seconds: f64,
    pub video_width: Option<i32>,
    pub video_height: Option<i32>,
    pub video_codec_id: Option<String>,
    pub video_bitrate_kbps: Option<f64>,
    pub frame_rate: Option<f64>,
    pub audio_codec_id: Option<String>,
    pub audio_bitrate_kbps: Option<f64>,
    pub audio_sample_rate_hz: Option<u32>,
    pub audio_sample_bits: Option<u8>,
    pub stereo: Option<bool>,

    /// Identifies the software producing the stream.  When absent or empty the builder's
    /// configured default tag is sent instead.
    pub encoder_tag: Option<String>,

    /// Only meaningful for recorded content, live streams leave this as `None`
    pub file_size_bytes: Option<u64>,
}

impl StreamDescriptor {
    /// Creates a descriptor for a live stream with no tracks described yet
    pub fn new() -> StreamDescriptor {
        StreamDescriptor {
            duration_seconds: 0.0,
            video_width: None,
            video_height: None,
            video_codec_id: None,
            video_bitrate_kbps: None,
            frame_rate: None,
            audio_codec_id: None,
            audio_bitrate_kbps: None,
            audio_sample_rate_hz: None,
            audio_sample_bits: None,
            stereo: None,
            encoder_tag: None,
            file_size_bytes: None,
        }
    }

    pub fn has_video(&self) -> bool {
        self.video_width.is_some()
            || self.video_height.is_some()
            || self.video_codec_id.is_some()
            || self.video_bitrate_kbps.is_some()
            || self.frame_rate.is_some()
    }

    pub fn has_audio(&self) -> bool {
        self.audio_codec_id.is_some()
            || self.audio_bitrate_kbps.is_some()
            || self.audio_sample_rate_hz.is_some()
            || self.audio_sample_bits.is_some()
            || self.stereo.is_some()
    }
}

impl Default for StreamDescriptor {
    fn default() -> Self {
        StreamDescriptor::new()
    }
}

#[cfg(test)]
mod tests {
    use super::StreamDescriptor;

    #[test]
    fn new_descriptor_has_no_tracks() {
        let descriptor = StreamDescriptor::new();

        assert_eq!(descriptor.duration_seconds, 0.0, "Unexpected default duration");
        assert!(!descriptor.has_video(), "New descriptor reported a video track");
        assert!(!descriptor.has_audio(), "New descriptor reported an audio track");
    }

    #[test]
    fn any_video_field_marks_video_track_present() {
        let mut descriptor = StreamDescriptor::new();
        descriptor.frame_rate = Some(25.0);

        assert!(descriptor.has_video(), "Frame rate alone should indicate a video track");
        assert!(!descriptor.has_audio(), "Video field should not indicate an audio track");
    }

    #[test]
    fn any_audio_field_marks_audio_track_present() {
        let mut descriptor = StreamDescriptor::new();
        descriptor.stereo = Some(false);

        assert!(descriptor.has_audio(), "Stereo flag alone should indicate an audio track");
        assert!(!descriptor.has_video(), "Audio field should not indicate a video track");
    }
}
