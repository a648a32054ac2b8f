//! People command implementations.

use anyhow::{Context, Result};
use clap::Args;

use hansa_rest::BrokerClient;

use super::SignOn;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    #[command(flatten)]
    pub sign_on: SignOn,

    /// Pretty-print the whole requester record
    #[arg(long)]
    pub pretty: bool,
}

pub async fn whoami(broker: &BrokerClient, args: WhoamiArgs) -> Result<()> {
    let requester = args.sign_on.establish(broker).await?;

    if args.pretty {
        return output::json_pretty(&requester);
    }

    if let Some(identity) = requester.identity {
        output::field("Identity", &identity.to_string());
    }
    if let Some(email) = &requester.email {
        output::field("Email", email);
    }
    if let Some(group) = requester.group {
        output::field("Group", &group.to_string());
    }

    Ok(())
}

#[derive(Args, Debug)]
pub struct ShowPersonArgs {
    #[command(flatten)]
    pub sign_on: SignOn,

    /// Person identity
    pub identity: i64,
}

pub async fn show(broker: &BrokerClient, args: ShowPersonArgs) -> Result<()> {
    args.sign_on.establish(broker).await?;

    let person = broker
        .find_person(args.identity)
        .await
        .context("Failed to find person")?;

    output::json_pretty(&person)
}
