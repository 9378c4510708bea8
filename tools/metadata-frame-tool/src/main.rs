use anyhow::{Context, Result};
use clap::Parser;
use rtmp_metadata::{read_metadata_frame, MetadataFrameBuilder, MetadataFrameConfig};
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod descriptor_file;

use cli::{Args, Commands};
use descriptor_file::DescriptorFile;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    match args.command {
        Commands::Encode {
            descriptor,
            output,
            no_set_data_frame,
            stream_id,
            default_encoder_tag,
        } => {
            let mut config = MetadataFrameConfig::new();
            config.include_set_data_frame = !no_set_data_frame;
            if let Some(tag) = default_encoder_tag {
                config.default_encoder_tag = tag;
            }

            encode(&descriptor, output.as_deref(), config, stream_id)
        }

        Commands::Decode { frame } => decode(&frame),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn encode(
    descriptor_path: &Path,
    output: Option<&Path>,
    config: MetadataFrameConfig,
    stream_id: u32,
) -> Result<()> {
    let descriptor = DescriptorFile::load(descriptor_path)?.into_descriptor();
    let builder = MetadataFrameBuilder::new(config);
    let message = builder
        .build_message(&descriptor, stream_id)
        .context("Failed to build metadata frame")?;

    info!(
        type_id = message.type_id,
        stream_id = message.message_stream_id,
        length = message.data.len(),
        "Built metadata message"
    );

    match output {
        Some(path) => {
            fs::write(path, &message.data[..])
                .with_context(|| format!("Failed to write frame to {}", path.display()))?;

            info!(path = %path.display(), "Wrote metadata frame");
        }

        None => {
            let hex: String = message.data.iter().map(|x| format!("{:02x}", x)).collect();
            println!("{}", hex);
        }
    }

    Ok(())
}

fn decode(frame_path: &Path) -> Result<()> {
    let bytes = fs::read(frame_path)
        .with_context(|| format!("Failed to read frame file {}", frame_path.display()))?;

    info!(length = bytes.len(), "Decoding metadata frame");

    let descriptor = read_metadata_frame(&bytes[..]).context("Failed to decode metadata frame")?;
    println!("{:#?}", descriptor);
    Ok(())
}
