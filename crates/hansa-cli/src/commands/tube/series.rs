//! Series command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use hansa_core::model::Series;
use hansa_rest::{Paging, SeriesFilter, TubeClient};

use crate::output;

#[derive(Args, Debug)]
pub struct QuerySeriesArgs {
    /// Title fragment to match
    #[arg(long)]
    pub title: Option<String>,

    /// Earliest release year
    #[arg(long)]
    pub min_year: Option<i32>,

    /// Latest release year
    #[arg(long)]
    pub max_year: Option<i32>,

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

pub async fn query(tube: &TubeClient, args: QuerySeriesArgs) -> Result<()> {
    let filter = SeriesFilter {
        paging: Paging {
            paging_offset: args.offset,
            paging_limit: args.limit,
        },
        title_fragment: args.title,
        min_release_year: args.min_year,
        max_release_year: args.max_year,
        ..SeriesFilter::default()
    };

    let series = tube
        .query_series(&filter)
        .await
        .context("Failed to query series")?;

    if series.is_empty() {
        eprintln!("{}", "No series found.".dimmed());
        return Ok(());
    }

    for entry in &series {
        if args.pretty {
            output::json_pretty(entry)?;
        } else {
            output::json(entry)?;
        }
    }

    Ok(())
}

#[derive(Args, Debug)]
pub struct ShowSeriesArgs {
    /// Series identity
    pub identity: i64,
}

pub async fn show(tube: &TubeClient, args: ShowSeriesArgs) -> Result<()> {
    let series = tube
        .find_series(args.identity)
        .await
        .context("Failed to find series")?;

    output::json_pretty(&series)
}

#[derive(Args, Debug)]
pub struct SubmitSeriesArgs {
    /// JSON file describing the series (stdin when omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn submit(tube: &TubeClient, args: SubmitSeriesArgs) -> Result<()> {
    let series: Series = crate::commands::read_entity(args.file.as_deref())?;
    let identity = tube
        .insert_or_update_series(&series)
        .await
        .context("Failed to submit series")?;

    output::success(&format!("Series {} submitted", identity));
    Ok(())
}

#[derive(Args, Debug)]
pub struct DeleteSeriesArgs {
    /// Series identity
    pub identity: i64,
}

pub async fn delete(tube: &TubeClient, args: DeleteSeriesArgs) -> Result<()> {
    let identity = tube
        .delete_series(args.identity)
        .await
        .context("Failed to delete series")?;

    output::success(&format!("Series {} deleted", identity));
    Ok(())
}

#[derive(Args, Debug)]
pub struct SeriesSeasonsArgs {
    /// Series identity
    pub identity: i64,

    /// Offset of the first result
    #[arg(long)]
    pub offset: Option<u32>,

    /// Maximum number of results
    #[arg(long)]
    pub limit: Option<u32>,
}

pub async fn seasons(tube: &TubeClient, args: SeriesSeasonsArgs) -> Result<()> {
    let paging = Paging {
        paging_offset: args.offset,
        paging_limit: args.limit,
    };
    let seasons = tube
        .query_series_seasons(args.identity, &paging)
        .await
        .context("Failed to list seasons")?;

    for season in &seasons {
        output::json(season)?;
    }
    Ok(())
}
