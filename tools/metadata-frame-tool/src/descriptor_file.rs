use anyhow::{Context, Result};
use rtmp_metadata::StreamDescriptor;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk form of a stream descriptor.  Every field is optional, and fields left out of
/// the file stay out of the metadata frame.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct DescriptorFile {
    pub duration_seconds: Option<f64>,
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
    pub encoder_tag: Option<String>,
    pub file_size_bytes: Option<u64>,
}

impl DescriptorFile {
    pub fn load(path: &Path) -> Result<DescriptorFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read descriptor file {}", path.display()))?;

        DescriptorFile::parse(&contents)
            .with_context(|| format!("Failed to parse descriptor file {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<DescriptorFile> {
        let file = toml::from_str(contents)?;
        Ok(file)
    }

    pub fn into_descriptor(self) -> StreamDescriptor {
        StreamDescriptor {
            duration_seconds: self.duration_seconds.unwrap_or(0.0),
            video_width: self.video_width,
            video_height: self.video_height,
            video_codec_id: self.video_codec_id,
            video_bitrate_kbps: self.video_bitrate_kbps,
            frame_rate: self.frame_rate,
            audio_codec_id: self.audio_codec_id,
            audio_bitrate_kbps: self.audio_bitrate_kbps,
            audio_sample_rate_hz: self.audio_sample_rate_hz,
            audio_sample_bits: self.audio_sample_bits,
            stereo: self.stereo,
            encoder_tag: self.encoder_tag,
            file_size_bytes: self.file_size_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DescriptorFile;
    use rtmp_metadata::StreamDescriptor;

    #[test]
    fn can_parse_full_descriptor() {
        let contents = r#"
            video_width = 720
            video_height = 1280
            video_codec_id = "avc1"
            video_bitrate_kbps = 1200.0
            frame_rate = 30.0
            audio_codec_id = "mp4a"
            audio_bitrate_kbps = 128.0
            audio_sample_rate_hz = 44100
            audio_sample_bits = 16
            stereo = true
            encoder_tag = "X 1.0"
        "#;

        let descriptor = DescriptorFile::parse(contents).unwrap().into_descriptor();

        assert_eq!(descriptor.duration_seconds, 0.0, "Unexpected duration");
        assert_eq!(descriptor.video_width, Some(720), "Unexpected video width");
        assert_eq!(descriptor.video_codec_id, Some("avc1".to_string()), "Unexpected video codec");
        assert_eq!(descriptor.audio_sample_bits, Some(16), "Unexpected audio sample size");
        assert_eq!(descriptor.stereo, Some(true), "Unexpected stereo value");
        assert_eq!(descriptor.file_size_bytes, None, "Unexpected file size");
    }

    #[test]
    fn empty_file_gives_empty_descriptor() {
        let descriptor = DescriptorFile::parse("").unwrap().into_descriptor();

        assert_eq!(descriptor, StreamDescriptor::new());
    }

    #[test]
    fn negative_dimensions_are_parsed_for_validation() {
        let descriptor = DescriptorFile::parse("video_width = -1\nvideo_height = 1280")
            .unwrap()
            .into_descriptor();

        assert_eq!(descriptor.video_width, Some(-1), "Unexpected video width");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = DescriptorFile::parse("audio_channels = 2");

        assert!(result.is_err(), "Expected unknown field to be rejected");
    }
}
