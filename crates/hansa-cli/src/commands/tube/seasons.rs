//! Season command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use hansa_core::model::Season;
use hansa_rest::{Paging, SeasonFilter, TubeClient};

use crate::output;

#[derive(Args, Debug)]
pub struct QuerySeasonsArgs {
    /// Lowest season ordinal
    #[arg(long)]
    pub min_ordinal: Option<i32>,

    /// Highest season ordinal
    #[arg(long)]
    pub max_ordinal: Option<i32>,

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

pub async fn query(tube: &TubeClient, args: QuerySeasonsArgs) -> Result<()> {
    let filter = SeasonFilter {
        paging: Paging {
            paging_offset: args.offset,
            paging_limit: args.limit,
        },
        min_ordinal: args.min_ordinal,
        max_ordinal: args.max_ordinal,
        ..SeasonFilter::default()
    };

    let seasons = tube
        .query_seasons(&filter)
        .await
        .context("Failed to query seasons")?;

    if seasons.is_empty() {
        eprintln!("{}", "No seasons found.".dimmed());
        return Ok(());
    }

    for season in &seasons {
        if args.pretty {
            output::json_pretty(season)?;
        } else {
            output::json(season)?;
        }
    }

    Ok(())
}

#[derive(Args, Debug)]
pub struct ShowSeasonArgs {
    /// Season identity
    pub identity: i64,
}

pub async fn show(tube: &TubeClient, args: ShowSeasonArgs) -> Result<()> {
    let season = tube
        .find_season(args.identity)
        .await
        .context("Failed to find season")?;

    output::json_pretty(&season)
}

#[derive(Args, Debug)]
pub struct SubmitSeasonArgs {
    /// JSON file describing the season (stdin when omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn submit(tube: &TubeClient, args: SubmitSeasonArgs) -> Result<()> {
    let season: Season = crate::commands::read_entity(args.file.as_deref())?;
    let identity = tube
        .insert_or_update_season(&season)
        .await
        .context("Failed to submit season")?;

    output::success(&format!("Season {} submitted", identity));
    Ok(())
}

#[derive(Args, Debug)]
pub struct DeleteSeasonArgs {
    /// Season identity
    pub identity: i64,
}

pub async fn delete(tube: &TubeClient, args: DeleteSeasonArgs) -> Result<()> {
    let identity = tube
        .delete_season(args.identity)
        .await
        .context("Failed to delete season")?;

    output::success(&format!("Season {} deleted", identity));
    Ok(())
}

#[derive(Args, Debug)]
pub struct SeasonEpisodesArgs {
    /// Season identity
    pub identity: i64,

    /// Offset of the first result
    #[arg(long)]
    pub offset: Option<u32>,

    /// Maximum number of results
    #[arg(long)]
    pub limit: Option<u32>,
}

pub async fn episodes(tube: &TubeClient, args: SeasonEpisodesArgs) -> Result<()> {
    let paging = Paging {
        paging_offset: args.offset,
        paging_limit: args.limit,
    };
    let episodes = tube
        .query_season_episodes(args.identity, &paging)
        .await
        .context("Failed to list episodes")?;

    for episode in &episodes {
        output::json(episode)?;
    }
    Ok(())
}
