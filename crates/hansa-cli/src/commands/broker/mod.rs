//! Broker subcommand implementations.

mod auctions;
mod documents;
mod offers;
mod orders;
mod people;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use hansa_core::ServiceUrl;
use hansa_rest::BrokerClient;

#[derive(Args, Debug)]
pub struct BrokerCommand {
    /// Broker service origin (e.g. https://broker.example.com:8040)
    #[arg(long, env = "HANSA_ORIGIN", global = true)]
    pub origin: Option<String>,

    #[command(subcommand)]
    pub command: BrokerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BrokerSubcommand {
    /// Sign on and display the requester
    Whoami(people::WhoamiArgs),

    /// Display a person
    ShowPerson(people::ShowPersonArgs),

    /// Query auctions
    QueryAuctions(auctions::QueryAuctionsArgs),

    /// Display an auction with its derived state
    ShowAuction(auctions::ShowAuctionArgs),

    /// Insert or update an auction from JSON
    SubmitAuction(auctions::SubmitAuctionArgs),

    /// Place, raise, or retract a bid on an auction
    Bid(auctions::BidArgs),

    /// Delete an auction
    DeleteAuction(auctions::DeleteAuctionArgs),

    /// Query offers
    QueryOffers(offers::QueryOffersArgs),

    /// Display an offer
    ShowOffer(offers::ShowOfferArgs),

    /// Insert or update an offer from JSON
    SubmitOffer(offers::SubmitOfferArgs),

    /// Delete an offer
    DeleteOffer(offers::DeleteOfferArgs),

    /// Order an offer
    PlaceOrder(orders::PlaceOrderArgs),

    /// Display an order
    ShowOrder(orders::ShowOrderArgs),

    /// Set an order's tracking reference
    TrackOrder(orders::TrackOrderArgs),

    /// Delete an order
    DeleteOrder(orders::DeleteOrderArgs),

    /// Upload a document
    UploadDocument(documents::UploadDocumentArgs),

    /// Fetch a document's content into a file
    FetchDocument(documents::FetchDocumentArgs),

    /// Delete a document
    DeleteDocument(documents::DeleteDocumentArgs),
}

pub async fn handle(cmd: BrokerCommand) -> Result<()> {
    let broker = client(cmd.origin.as_deref())?;

    match cmd.command {
        BrokerSubcommand::Whoami(args) => people::whoami(&broker, args).await,
        BrokerSubcommand::ShowPerson(args) => people::show(&broker, args).await,
        BrokerSubcommand::QueryAuctions(args) => auctions::query(&broker, args).await,
        BrokerSubcommand::ShowAuction(args) => auctions::show(&broker, args).await,
        BrokerSubcommand::SubmitAuction(args) => auctions::submit(&broker, args).await,
        BrokerSubcommand::Bid(args) => auctions::bid(&broker, args).await,
        BrokerSubcommand::DeleteAuction(args) => auctions::delete(&broker, args).await,
        BrokerSubcommand::QueryOffers(args) => offers::query(&broker, args).await,
        BrokerSubcommand::ShowOffer(args) => offers::show(&broker, args).await,
        BrokerSubcommand::SubmitOffer(args) => offers::submit(&broker, args).await,
        BrokerSubcommand::DeleteOffer(args) => offers::delete(&broker, args).await,
        BrokerSubcommand::PlaceOrder(args) => orders::place(&broker, args).await,
        BrokerSubcommand::ShowOrder(args) => orders::show(&broker, args).await,
        BrokerSubcommand::TrackOrder(args) => orders::track(&broker, args).await,
        BrokerSubcommand::DeleteOrder(args) => orders::delete(&broker, args).await,
        BrokerSubcommand::UploadDocument(args) => documents::upload(&broker, args).await,
        BrokerSubcommand::FetchDocument(args) => documents::fetch(&broker, args).await,
        BrokerSubcommand::DeleteDocument(args) => documents::delete(&broker, args).await,
    }
}

fn client(origin: Option<&str>) -> Result<BrokerClient> {
    let origin = origin.context("No service origin. Pass --origin or set HANSA_ORIGIN.")?;
    let origin = ServiceUrl::new(origin).context("Invalid service origin")?;
    Ok(BrokerClient::new(origin))
}

/// Sign-on credentials for operations that require a session.
#[derive(Args, Debug)]
pub struct SignOn {
    /// Sign-on email
    #[arg(long, env = "HANSA_EMAIL")]
    pub email: String,

    /// Sign-on password
    #[arg(long, env = "HANSA_PASSWORD")]
    pub password: String,
}

impl SignOn {
    /// Establish a session cookie, returning the requester.
    pub async fn establish(&self, broker: &BrokerClient) -> Result<hansa_core::model::Person> {
        broker
            .find_requester(&self.email, &self.password)
            .await
            .context("Sign-on failed")
    }
}
