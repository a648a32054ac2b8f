//! Order command implementations.

use anyhow::{Context, Result};
use clap::Args;

use hansa_rest::BrokerClient;

use super::SignOn;
use crate::output;

#[derive(Args, Debug)]
pub struct PlaceOrderArgs {
    #[command(flatten)]
    pub sign_on: SignOn,

    /// Offer identity to order
    pub offer: i64,
}

pub async fn place(broker: &BrokerClient, args: PlaceOrderArgs) -> Result<()> {
    args.sign_on.establish(broker).await?;

    let identity = broker
        .insert_order(args.offer)
        .await
        .context("Failed to place order")?;

    output::success(&format!("Order {} placed for offer {}", identity, args.offer));
    Ok(())
}

#[derive(Args, Debug)]
pub struct ShowOrderArgs {
    #[command(flatten)]
    pub sign_on: SignOn,

    /// Order identity
    pub identity: i64,
}

pub async fn show(broker: &BrokerClient, args: ShowOrderArgs) -> Result<()> {
    args.sign_on.establish(broker).await?;

    let order = broker
        .find_order(args.identity)
        .await
        .context("Failed to find order")?;

    output::json_pretty(&order)
}

#[derive(Args, Debug)]
pub struct TrackOrderArgs {
    #[command(flatten)]
    pub sign_on: SignOn,

    /// Order identity
    pub identity: i64,

    /// Carrier tracking reference
    pub tracking: String,
}

pub async fn track(broker: &BrokerClient, args: TrackOrderArgs) -> Result<()> {
    args.sign_on.establish(broker).await?;

    let identity = broker
        .update_order(args.identity, Some(&args.tracking))
        .await
        .context("Failed to update order")?;

    output::success(&format!("Order {} marked as departed", identity));
    Ok(())
}

#[derive(Args, Debug)]
pub struct DeleteOrderArgs {
    #[command(flatten)]
    pub sign_on: SignOn,

    /// Order identity
    pub identity: i64,
}

pub async fn delete(broker: &BrokerClient, args: DeleteOrderArgs) -> Result<()> {
    args.sign_on.establish(broker).await?;

    let identity = broker
        .delete_order(args.identity)
        .await
        .context("Failed to delete order")?;

    output::success(&format!("Order {} deleted", identity));
    Ok(())
}
