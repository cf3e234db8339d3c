//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::upload::UploadArgs;

/// Upload images as blobs to an AT Protocol PDS.
#[derive(Parser, Debug)]
#[command(name = "blobup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Re-encode a PNG and upload it as a blob
    Upload(UploadArgs),
}
