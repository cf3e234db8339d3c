//! Upload command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use blobup::{png, Credentials, PdsUrl, Session};
use tracing::debug;

use crate::output;

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Path to the PNG file to upload
    pub file: PathBuf,

    /// Handle or DID to authenticate with
    #[arg(long, env = "BLOBUP_IDENTIFIER")]
    pub identifier: String,

    /// Account password or app password
    #[arg(long, env = "BLOBUP_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// PDS base URL
    #[arg(long, default_value = "https://bsky.social")]
    pub pds: String,

    /// Print the raw upload response envelope to stdout
    #[arg(long)]
    pub print_response: bool,
}

pub async fn run(args: UploadArgs) -> Result<()> {
    let pds_url = PdsUrl::new(&args.pds).context("Invalid PDS URL")?;
    let credentials =
        Credentials::new(&args.identifier, &args.password).context("Invalid credentials")?;

    // Load the payload before touching the network; a bad file must
    // fail without any request being made.
    let payload = png::load_and_reencode(&args.file).context("Failed to load image")?;
    debug!(len = payload.len(), "payload re-encoded");

    eprintln!("{}", "Logging in...".dimmed());
    let session = Session::login(&pds_url, credentials)
        .await
        .context("Failed to login")?;

    eprintln!("{}", "Uploading...".dimmed());
    let uploaded = session
        .upload_blob(payload, png::MIME_TYPE)
        .await
        .context("Failed to upload blob")?;

    if args.print_response {
        println!("{}", serde_json::to_string(&uploaded.envelope)?);
    }

    output::success("Blob uploaded");
    println!();
    output::field("CID", uploaded.blob.cid());
    output::field("Mime type", uploaded.blob.mime_type());
    if let Some(size) = uploaded.blob.size() {
        output::field("Size", &size.to_string());
    }
    output::field("Account", session.handle().as_str());
    output::field("DID", session.did().as_str());

    Ok(())
}
