use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "metadata-frame-tool",
    about = "Encodes RTMP onMetaData frames from a descriptor file and decodes captured frames",
    version
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a metadata frame from a TOML stream descriptor
    Encode {
        /// Path to the TOML file describing the stream
        descriptor: PathBuf,

        /// Write the raw frame to this file instead of printing it as hex
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave off the leading @setDataFrame command name
        #[arg(long)]
        no_set_data_frame: bool,

        /// Message stream id the frame will be sent on
        #[arg(long, default_value = "1")]
        stream_id: u32,

        /// Encoder tag used when the descriptor file doesn't set one
        #[arg(long)]
        default_encoder_tag: Option<String>,
    },

    /// Decode a raw metadata frame captured from an RTMP stream
    Decode {
        /// Path to the file holding the frame bytes
        frame: PathBuf,
    },
}
