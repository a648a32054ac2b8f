//! Offer command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use hansa_core::model::Offer;
use hansa_rest::{BrokerClient, OfferFilter, Paging};

use super::SignOn;
use crate::output;

#[derive(Args, Debug)]
pub struct QueryOffersArgs {
    /// Category (e.g. ART, FURNITURE)
    #[arg(long)]
    pub category: Option<String>,

    /// Restrict to offers that are (or are not) still available
    #[arg(long)]
    pub available: Option<bool>,

    /// Name fragment to match
    #[arg(long)]
    pub name: Option<String>,

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

pub async fn query(broker: &BrokerClient, args: QueryOffersArgs) -> Result<()> {
    let filter = OfferFilter {
        paging: Paging {
            paging_offset: args.offset,
            paging_limit: args.limit,
        },
        category: args.category,
        available: args.available,
        name_fragment: args.name,
        ..OfferFilter::default()
    };

    let offers = broker
        .query_offers(&filter)
        .await
        .context("Failed to query offers")?;

    if offers.is_empty() {
        eprintln!("{}", "No offers found.".dimmed());
        return Ok(());
    }

    for offer in &offers {
        if args.pretty {
            output::json_pretty(offer)?;
        } else {
            output::json(offer)?;
        }
    }

    Ok(())
}

#[derive(Args, Debug)]
pub struct ShowOfferArgs {
    /// Offer identity
    pub identity: i64,
}

pub async fn show(broker: &BrokerClient, args: ShowOfferArgs) -> Result<()> {
    let offer = broker
        .find_offer(args.identity)
        .await
        .context("Failed to find offer")?;

    output::json_pretty(&offer)
}

#[derive(Args, Debug)]
pub struct SubmitOfferArgs {
    #[command(flatten)]
    pub sign_on: SignOn,

    /// JSON file describing the offer (stdin when omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn submit(broker: &BrokerClient, args: SubmitOfferArgs) -> Result<()> {
    args.sign_on.establish(broker).await?;

    let offer: Offer = crate::commands::read_entity(args.file.as_deref())?;
    let identity = broker
        .insert_or_update_offer(&offer)
        .await
        .context("Failed to submit offer")?;

    output::success(&format!("Offer {} submitted", identity));
    Ok(())
}

#[derive(Args, Debug)]
pub struct DeleteOfferArgs {
    #[command(flatten)]
    pub sign_on: SignOn,

    /// Offer identity
    pub identity: i64,
}

pub async fn delete(broker: &BrokerClient, args: DeleteOfferArgs) -> Result<()> {
    args.sign_on.establish(broker).await?;

    let identity = broker
        .delete_offer(args.identity)
        .await
        .context("Failed to delete offer")?;

    output::success(&format!("Offer {} deleted", identity));
    Ok(())
}
