//! Command implementations.

pub mod broker;
pub mod tube;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Read an entity as JSON from a file, or from stdin when no file is given.
pub(crate) fn read_entity<T: DeserializeOwned>(file: Option<&Path>) -> Result<T> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };
    serde_json::from_str(&text).context("Invalid entity JSON")
}

/// Read a file into an upload, naming it after the file itself.
pub(crate) fn read_upload(path: &Path, media_type: &str) -> Result<hansa_core::Upload> {
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("File name is not valid UTF-8")?;
    Ok(hansa_core::Upload::new(name, media_type, content))
}
