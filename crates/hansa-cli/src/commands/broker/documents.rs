//! Document command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hansa_rest::BrokerClient;

use super::SignOn;
use crate::output;

#[derive(Args, Debug)]
pub struct UploadDocumentArgs {
    #[command(flatten)]
    pub sign_on: SignOn,

    /// File to upload
    pub file: PathBuf,

    /// Media type of the file (e.g. image/png)
    #[arg(long = "type")]
    pub media_type: String,
}

pub async fn upload(broker: &BrokerClient, args: UploadDocumentArgs) -> Result<()> {
    args.sign_on.establish(broker).await?;

    let upload = crate::commands::read_upload(&args.file, &args.media_type)?;
    let identity = broker
        .insert_or_update_document(&upload)
        .await
        .context("Failed to upload document")?;

    output::success(&format!("Document {} stored", identity));
    Ok(())
}

#[derive(Args, Debug)]
pub struct FetchDocumentArgs {
    /// Document identity
    pub identity: i64,

    /// Destination file
    #[arg(long)]
    pub out: PathBuf,
}

pub async fn fetch(broker: &BrokerClient, args: FetchDocumentArgs) -> Result<()> {
    let content = broker
        .find_document_content(args.identity)
        .await
        .context("Failed to fetch document")?;

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
pub struct DeleteDocumentArgs {
    #[command(flatten)]
    pub sign_on: SignOn,

    /// Document identity
    pub identity: i64,
}

pub async fn delete(broker: &BrokerClient, args: DeleteDocumentArgs) -> Result<()> {
    args.sign_on.establish(broker).await?;

    let identity = broker
        .delete_document(args.identity)
        .await
        .context("Failed to delete document")?;

    output::success(&format!("Document {} deleted", identity));
    Ok(())
}
