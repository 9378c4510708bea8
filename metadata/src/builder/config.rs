use crate::keys::DEFAULT_ENCODER_TAG;

/// Configuration options that govern how metadata frames are built
#[derive(Clone, Debug)]
pub struct MetadataFrameConfig {
    /// Encoder tag sent for descriptors that don't specify their own
    pub default_encoder_tag: String,

    /// When false the leading `@setDataFrame` command name is left off, producing the bare
    /// `onMetaData` event servers send on to players
    pub include_set_data_frame: bool,
}

impl MetadataFrameConfig {
    /// Creates a new configuration object with default values
    pub fn new() -> MetadataFrameConfig {
        MetadataFrameConfig {
            default_encoder_tag: DEFAULT_ENCODER_TAG.to_string(),
            include_set_data_frame: true,
        }
    }
}

impl Default for MetadataFrameConfig {
    fn default() -> Self {
        MetadataFrameConfig::new()
    }
}
