//! Recording command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hansa_rest::TubeClient;

use crate::output;

#[derive(Args, Debug)]
pub struct FetchRecordingArgs {
    /// Flick identity
    pub identity: i64,

    /// Destination file
    #[arg(long)]
    pub out: PathBuf,
}

pub async fn fetch(tube: &TubeClient, args: FetchRecordingArgs) -> Result<()> {
    let content = tube
        .find_flick_recording(args.identity)
        .await
        .context("Failed to fetch recording")?;

    std::fs::write(&args.out, &content)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    output::success(&format!(
        "Wrote {} bytes to {}",
        content.len(),
        args.out.display()
    ));
    Ok(())
}

#[derive(Args, Debug)]
pub struct UploadRecordingArgs {
    /// Flick identity
    pub identity: i64,

    /// Video file to upload
    pub file: PathBuf,

    /// Media type of the file (e.g. video/mp4)
    #[arg(long = "type")]
    pub media_type: String,
}

pub async fn upload(tube: &TubeClient, args: UploadRecordingArgs) -> Result<()> {
    let upload = crate::commands::read_upload(&args.file, &args.media_type)?;
    let uri = tube
        .update_flick_recording(args.identity, &upload)
        .await
        .context("Failed to upload recording")?;

    output::success(&format!("Recording stored at {}", uri));
    Ok(())
}

#[derive(Args, Debug)]
pub struct DeleteRecordingArgs {
    /// Flick identity
    pub identity: i64,
}

pub async fn delete(tube: &TubeClient, args: DeleteRecordingArgs) -> Result<()> {
    let uri = tube
        .delete_flick_recording(args.identity)
        .await
        .context("Failed to delete recording")?;

    output::success(&format!("Recording {} removed", uri));
    Ok(())
}
