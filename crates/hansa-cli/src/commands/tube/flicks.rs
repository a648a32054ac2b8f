//! Flick command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use hansa_core::model::Flick;
use hansa_rest::{FlickFilter, Paging, TubeClient};

use crate::output;

#[derive(Args, Debug)]
pub struct QueryFlicksArgs {
    /// Title fragment to match
    #[arg(long)]
    pub title: Option<String>,

    /// Genre fragment to match
    #[arg(long)]
    pub genre: Option<String>,

    /// Restrict to flicks with (or without) a recording
    #[arg(long)]
    pub recorded: Option<bool>,

    /// Offset of the first result
    #[arg(long)]
    pub offset: Option<u32>,

    /// Maximum number of results
    #[arg(long)]
    pub limit: Option<u32>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn query(tube: &TubeClient, args: QueryFlicksArgs) -> Result<()> {
    let filter = FlickFilter {
        paging: Paging {
            paging_offset: args.offset,
            paging_limit: args.limit,
        },
        title_fragment: args.title,
        genre_fragment: args.genre,
        recorded: args.recorded,
        ..FlickFilter::default()
    };

    let flicks = tube
        .query_flicks(&filter)
        .await
        .context("Failed to query flicks")?;

    if flicks.is_empty() {
        eprintln!("{}", "No flicks found.".dimmed());
        return Ok(());
    }

    for flick in &flicks {
        if args.pretty {
            output::json_pretty(flick)?;
        } else {
            output::json(flick)?;
        }
    }

    Ok(())
}

#[derive(Args, Debug)]
pub struct ShowFlickArgs {
    /// Flick identity
    pub identity: i64,
}

pub async fn show(tube: &TubeClient, args: ShowFlickArgs) -> Result<()> {
    let flick = tube
        .find_flick(args.identity)
        .await
        .context("Failed to find flick")?;

    output::json_pretty(&flick)?;
    output::field("Recorded", if flick.recorded() { "yes" } else { "no" });
    Ok(())
}

#[derive(Args, Debug)]
pub struct SubmitFlickArgs {
    /// JSON file describing the flick (stdin when omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn submit(tube: &TubeClient, args: SubmitFlickArgs) -> Result<()> {
    let flick: Flick = crate::commands::read_entity(args.file.as_deref())?;
    let identity = tube
        .insert_or_update_flick(&flick)
        .await
        .context("Failed to submit flick")?;

    output::success(&format!("Flick {} submitted", identity));
    Ok(())
}

#[derive(Args, Debug)]
pub struct DeleteFlickArgs {
    /// Flick identity
    pub identity: i64,
}

pub async fn delete(tube: &TubeClient, args: DeleteFlickArgs) -> Result<()> {
    let identity = tube
        .delete_flick(args.identity)
        .await
        .context("Failed to delete flick")?;

    output::success(&format!("Flick {} deleted", identity));
    Ok(())
}
