//! Tube subcommand implementations.

mod access_plans;
mod flicks;
mod recordings;
mod seasons;
mod series;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use hansa_core::{AccessKey, ServiceUrl};
use hansa_rest::TubeClient;

#[derive(Args, Debug)]
pub struct TubeCommand {
    /// Tube service origin (e.g. https://tube.example.com:8050)
    #[arg(long, env = "HANSA_ORIGIN", global = true)]
    pub origin: Option<String>,

    /// Deployment access key (64 hex digits)
    #[arg(long, env = "HANSA_ACCESS_KEY", global = true)]
    pub access_key: Option<String>,

    #[command(subcommand)]
    pub command: TubeSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TubeSubcommand {
    /// Query series
    QuerySeries(series::QuerySeriesArgs),

    /// Display a series
    ShowSeries(series::ShowSeriesArgs),

    /// Insert or update a series from JSON
    SubmitSeries(series::SubmitSeriesArgs),

    /// Delete a series
    DeleteSeries(series::DeleteSeriesArgs),

    /// List a series' seasons
    SeriesSeasons(series::SeriesSeasonsArgs),

    /// Query seasons
    QuerySeasons(seasons::QuerySeasonsArgs),

    /// Display a season
    ShowSeason(seasons::ShowSeasonArgs),

    /// Insert or update a season from JSON
    SubmitSeason(seasons::SubmitSeasonArgs),

    /// Delete a season
    DeleteSeason(seasons::DeleteSeasonArgs),

    /// List a season's episodes
    SeasonEpisodes(seasons::SeasonEpisodesArgs),

    /// Query flicks
    QueryFlicks(flicks::QueryFlicksArgs),

    /// Display a flick
    ShowFlick(flicks::ShowFlickArgs),

    /// Insert or update a flick from JSON
    SubmitFlick(flicks::SubmitFlickArgs),

    /// Delete a flick
    DeleteFlick(flicks::DeleteFlickArgs),

    /// Fetch a flick's recording into a file
    FetchRecording(recordings::FetchRecordingArgs),

    /// Upload a flick's recording
    UploadRecording(recordings::UploadRecordingArgs),

    /// Delete a flick's recording
    DeleteRecording(recordings::DeleteRecordingArgs),

    /// List a person's access plans
    AccessPlans(access_plans::AccessPlansArgs),

    /// Insert or update an access plan from JSON
    SubmitAccessPlan(access_plans::SubmitAccessPlanArgs),
}

pub async fn handle(cmd: TubeCommand) -> Result<()> {
    let tube = client(cmd.origin.as_deref(), cmd.access_key.as_deref())?;

    match cmd.command {
        TubeSubcommand::QuerySeries(args) => series::query(&tube, args).await,
        TubeSubcommand::ShowSeries(args) => series::show(&tube, args).await,
        TubeSubcommand::SubmitSeries(args) => series::submit(&tube, args).await,
        TubeSubcommand::DeleteSeries(args) => series::delete(&tube, args).await,
        TubeSubcommand::SeriesSeasons(args) => series::seasons(&tube, args).await,
        TubeSubcommand::QuerySeasons(args) => seasons::query(&tube, args).await,
        TubeSubcommand::ShowSeason(args) => seasons::show(&tube, args).await,
        TubeSubcommand::SubmitSeason(args) => seasons::submit(&tube, args).await,
        TubeSubcommand::DeleteSeason(args) => seasons::delete(&tube, args).await,
        TubeSubcommand::SeasonEpisodes(args) => seasons::episodes(&tube, args).await,
        TubeSubcommand::QueryFlicks(args) => flicks::query(&tube, args).await,
        TubeSubcommand::ShowFlick(args) => flicks::show(&tube, args).await,
        TubeSubcommand::SubmitFlick(args) => flicks::submit(&tube, args).await,
        TubeSubcommand::DeleteFlick(args) => flicks::delete(&tube, args).await,
        TubeSubcommand::FetchRecording(args) => recordings::fetch(&tube, args).await,
        TubeSubcommand::UploadRecording(args) => recordings::upload(&tube, args).await,
        TubeSubcommand::DeleteRecording(args) => recordings::delete(&tube, args).await,
        TubeSubcommand::AccessPlans(args) => access_plans::query(&tube, args).await,
        TubeSubcommand::SubmitAccessPlan(args) => access_plans::submit(&tube, args).await,
    }
}

fn client(origin: Option<&str>, access_key: Option<&str>) -> Result<TubeClient> {
    let origin = origin.context("No service origin. Pass --origin or set HANSA_ORIGIN.")?;
    let origin = ServiceUrl::new(origin).context("Invalid service origin")?;

    let access_key =
        access_key.context("No access key. Pass --access-key or set HANSA_ACCESS_KEY.")?;
    let access_key = AccessKey::new(access_key).context("Invalid access key")?;

    Ok(TubeClient::new(origin, access_key))
}
