//! Auction command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use hansa_core::model::{Auction, AuctionStatus};
use hansa_rest::{AuctionFilter, BrokerClient, Paging};

use super::SignOn;
use crate::output;

#[derive(Args, Debug)]
pub struct QueryAuctionsArgs {
    /// Category (e.g. ART, FURNITURE)
    #[arg(long)]
    pub category: Option<String>,

    /// Condition rating
    #[arg(long)]
    pub rating: Option<String>,

    /// Name fragment to match
    #[arg(long)]
    pub name: Option<String>,

    /// Restrict to the given states (OPEN, SEALED, CLOSED); repeatable
    #[arg(long = "status")]
    pub states: Vec<String>,

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

pub async fn query(broker: &BrokerClient, args: QueryAuctionsArgs) -> Result<()> {
    let states = args
        .states
        .iter()
        .map(|state| parse_status(state))
        .collect::<Result<Vec<_>>>()?;

    let filter = AuctionFilter {
        paging: Paging {
            paging_offset: args.offset,
            paging_limit: args.limit,
        },
        category: args.category,
        rating: args.rating,
        name_fragment: args.name,
        states,
        ..AuctionFilter::default()
    };

    let auctions = broker
        .query_auctions(&filter)
        .await
        .context("Failed to query auctions")?;

    if auctions.is_empty() {
        eprintln!("{}", "No auctions found.".dimmed());
        return Ok(());
    }

    for auction in &auctions {
        if args.pretty {
            output::json_pretty(auction)?;
        } else {
            output::json(auction)?;
        }
    }

    Ok(())
}

#[derive(Args, Debug)]
pub struct ShowAuctionArgs {
    /// Auction identity
    pub identity: i64,
}

pub async fn show(broker: &BrokerClient, args: ShowAuctionArgs) -> Result<()> {
    let auction = broker
        .find_auction(args.identity)
        .await
        .context("Failed to find auction")?;

    output::json_pretty(&auction)?;
    if let Some(status) = auction.status() {
        output::field("Status", &status.to_string());
    }
    if let Some(bids) = auction.bid_count() {
        output::field("Bids", &bids.to_string());
    }

    Ok(())
}

#[derive(Args, Debug)]
pub struct SubmitAuctionArgs {
    #[command(flatten)]
    pub sign_on: SignOn,

    /// JSON file describing the auction (stdin when omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn submit(broker: &BrokerClient, args: SubmitAuctionArgs) -> Result<()> {
    args.sign_on.establish(broker).await?;

    let auction: Auction = crate::commands::read_entity(args.file.as_deref())?;
    let identity = broker
        .insert_or_update_auction(&auction)
        .await
        .context("Failed to submit auction")?;

    output::success(&format!("Auction {} submitted", identity));
    Ok(())
}

#[derive(Args, Debug)]
pub struct BidArgs {
    #[command(flatten)]
    pub sign_on: SignOn,

    /// Auction identity
    pub identity: i64,

    /// Bid amount in cents; zero retracts the bid
    pub amount: i64,
}

pub async fn bid(broker: &BrokerClient, args: BidArgs) -> Result<()> {
    args.sign_on.establish(broker).await?;

    let identity = broker
        .insert_or_update_or_delete_auction_bid(args.identity, args.amount)
        .await
        .context("Failed to place bid")?;

    if args.amount == 0 {
        output::success(&format!("Bid on auction {} retracted", identity));
    } else {
        output::success(&format!("Bid of {} placed on auction {}", args.amount, identity));
    }
    Ok(())
}

#[derive(Args, Debug)]
pub struct DeleteAuctionArgs {
    #[command(flatten)]
    pub sign_on: SignOn,

    /// Auction identity
    pub identity: i64,
}

pub async fn delete(broker: &BrokerClient, args: DeleteAuctionArgs) -> Result<()> {
    args.sign_on.establish(broker).await?;

    let identity = broker
        .delete_auction(args.identity)
        .await
        .context("Failed to delete auction")?;

    output::success(&format!("Auction {} deleted", identity));
    Ok(())
}

fn parse_status(state: &str) -> Result<AuctionStatus> {
    match state.to_ascii_uppercase().as_str() {
        "OPEN" => Ok(AuctionStatus::Open),
        "SEALED" => Ok(AuctionStatus::Sealed),
        "CLOSED" => Ok(AuctionStatus::Closed),
        other => anyhow::bail!("Unknown auction state: {other}"),
    }
}
