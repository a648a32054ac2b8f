//! Access plan command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use hansa_core::model::AccessPlan;
use hansa_rest::TubeClient;

use crate::output;

#[derive(Args, Debug)]
pub struct AccessPlansArgs {
    /// Person identity
    pub person: i64,
}

pub async fn query(tube: &TubeClient, args: AccessPlansArgs) -> Result<()> {
    let plans = tube
        .query_access_plans(args.person)
        .await
        .context("Failed to list access plans")?;

    if plans.is_empty() {
        eprintln!("{}", "No access plans found.".dimmed());
        return Ok(());
    }

    for plan in &plans {
        output::json_pretty(plan)?;
    }
    Ok(())
}

#[derive(Args, Debug)]
pub struct SubmitAccessPlanArgs {
    /// JSON file describing the access plan (stdin when omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn submit(tube: &TubeClient, args: SubmitAccessPlanArgs) -> Result<()> {
    let plan: AccessPlan = crate::commands::read_entity(args.file.as_deref())?;
    let identity = tube
        .insert_or_update_access_plan(&plan)
        .await
        .context("Failed to submit access plan")?;

    output::success(&format!("Access plan {} submitted", identity));
    Ok(())
}
