//! Client for the broker (marketplace) web-service.

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, instrument};

use hansa_core::error::{Error, InvalidInputError};
use hansa_core::model::{Auction, Bid, Document, Offer, Order, Person};
use hansa_core::{ServiceUrl, Upload};

use crate::client::{Authorization, RestClient};
use crate::filter::{
    AuctionFilter, DetailQuery, DocumentFilter, OfferFilter, Paging, PersonAuctionFilter,
    PersonFilter, PersonOfferFilter,
};

/// Header setting a person's password on insert or update.
/// Lowercase because it is inserted into a `HeaderMap` as a static name.
const SET_PASSWORD_HEADER: &str = "x-set-password";

/// Client for the broker web-service (auctions, offers, orders).
///
/// This deployment variant relies on session cookies for authorization: the
/// cookie established by [`find_requester`](Self::find_requester) is carried
/// on subsequent requests automatically.
///
/// # Example
///
/// ```no_run
/// use hansa_core::ServiceUrl;
/// use hansa_rest::{AuctionFilter, BrokerClient};
///
/// # async fn example() -> Result<(), hansa_core::Error> {
/// let origin = ServiceUrl::new("https://broker.example.com:8040")?;
/// let broker = BrokerClient::new(origin);
///
/// let filter = AuctionFilter { category: Some("ART".into()), ..AuctionFilter::default() };
/// for auction in broker.query_auctions(&filter).await? {
///     println!("{:?}: {:?}", auction.identity, auction.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BrokerClient {
    rest: RestClient,
}

impl BrokerClient {
    /// Create a new broker client for the given service origin, using
    /// session-cookie authorization.
    pub fn new(origin: ServiceUrl) -> Self {
        Self {
            rest: RestClient::new(origin, Authorization::SessionCookie),
        }
    }

    /// Returns the service origin this client is configured for.
    pub fn origin(&self) -> &ServiceUrl {
        self.rest.origin()
    }

    // ========================================================================
    // Documents
    // ========================================================================

    /// GET /services/documents - the matching document metadata records.
    #[instrument(skip(self, filter), fields(origin = %self.rest.origin()))]
    pub async fn query_documents(&self, filter: &DocumentFilter) -> Result<Vec<Document>, Error> {
        self.rest.get_json(&["documents"], filter).await
    }

    /// GET /services/documents/{id} - the matching document's metadata.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn find_document(&self, document_identity: i64) -> Result<Document, Error> {
        self.rest
            .get_json_plain(&["documents", &document_identity.to_string()])
            .await
    }

    /// GET /services/documents/{id} - the matching document's binary content.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn find_document_content(&self, document_identity: i64) -> Result<Vec<u8>, Error> {
        self.rest
            .get_bytes(&["documents", &document_identity.to_string()], "*/*")
            .await
    }

    /// POST /services/documents - upload a file, returning the resulting
    /// document's identity.
    #[instrument(skip(self, upload), fields(origin = %self.rest.origin(), name = upload.name()))]
    pub async fn insert_or_update_document(&self, upload: &Upload) -> Result<i64, Error> {
        self.rest
            .post_upload_returning_identity(&["documents"], upload)
            .await
    }

    /// DELETE /services/documents/{id} - returns the deleted document's
    /// identity.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn delete_document(&self, document_identity: i64) -> Result<i64, Error> {
        self.rest
            .delete_returning_identity(&["documents", &document_identity.to_string()])
            .await
    }

    // ========================================================================
    // People
    // ========================================================================

    /// GET /services/people - the matching people.
    #[instrument(skip(self, filter), fields(origin = %self.rest.origin()))]
    pub async fn query_people(&self, filter: &PersonFilter) -> Result<Vec<Person>, Error> {
        self.rest.get_json(&["people"], filter).await
    }

    /// GET /services/people/requester - authenticates with the given email
    /// and password, establishing the session cookie, and returns the
    /// requester.
    #[instrument(skip(self, password), fields(origin = %self.rest.origin(), email))]
    pub async fn find_requester(&self, email: &str, password: &str) -> Result<Person, Error> {
        debug!("requester lookup");
        let response = self
            .rest
            .request(Method::GET, &["people", "requester"])
            .basic_auth(email, Some(password))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        RestClient::handle_json(response).await
    }

    /// GET /services/people/{id} - the matching person.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn find_person(&self, person_identity: i64) -> Result<Person, Error> {
        self.rest
            .get_json_plain(&["people", &person_identity.to_string()])
            .await
    }

    /// POST /services/people - insert or update a person, optionally setting
    /// a new password, and return the person's identity.
    #[instrument(skip(self, person, password), fields(origin = %self.rest.origin()))]
    pub async fn insert_or_update_person(
        &self,
        person: &Person,
        password: Option<&str>,
    ) -> Result<i64, Error> {
        let headers = set_password_headers(password)?;
        self.rest
            .send_json_returning_identity(Method::POST, &["people"], person, headers)
            .await
    }

    /// DELETE /services/people/{id} - returns the deleted person's identity.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn delete_person(&self, person_identity: i64) -> Result<i64, Error> {
        self.rest
            .delete_returning_identity(&["people", &person_identity.to_string()])
            .await
    }

    /// GET /services/people/{id}/auctions - the auctions the given person is
    /// involved in, as seller or bidder.
    #[instrument(skip(self, filter), fields(origin = %self.rest.origin()))]
    pub async fn query_person_auctions(
        &self,
        person_identity: i64,
        filter: &PersonAuctionFilter,
    ) -> Result<Vec<Auction>, Error> {
        self.rest
            .get_json(&["people", &person_identity.to_string(), "auctions"], filter)
            .await
    }

    /// GET /services/people/{id}/offers - the given person's offers.
    #[instrument(skip(self, filter), fields(origin = %self.rest.origin()))]
    pub async fn query_person_offers(
        &self,
        person_identity: i64,
        filter: &PersonOfferFilter,
    ) -> Result<Vec<Offer>, Error> {
        self.rest
            .get_json(&["people", &person_identity.to_string(), "offers"], filter)
            .await
    }

    /// GET /services/people/{id}/orders - the given person's orders.
    #[instrument(skip(self, paging), fields(origin = %self.rest.origin()))]
    pub async fn query_person_orders(
        &self,
        person_identity: i64,
        paging: &Paging,
    ) -> Result<Vec<Order>, Error> {
        self.rest
            .get_json(&["people", &person_identity.to_string(), "orders"], paging)
            .await
    }

    // ========================================================================
    // Auctions
    // ========================================================================

    /// GET /services/auctions - the matching auctions.
    #[instrument(skip(self, filter), fields(origin = %self.rest.origin()))]
    pub async fn query_auctions(&self, filter: &AuctionFilter) -> Result<Vec<Auction>, Error> {
        self.rest.get_json(&["auctions"], filter).await
    }

    /// GET /services/auctions/{id}?detailed=true - the matching auction.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn find_auction(&self, auction_identity: i64) -> Result<Auction, Error> {
        self.rest
            .get_json(
                &["auctions", &auction_identity.to_string()],
                &DetailQuery { detailed: true },
            )
            .await
    }

    /// POST /services/auctions - insert or update an auction, returning its
    /// identity. Absence of the payload's identity field signals creation.
    #[instrument(skip(self, auction), fields(origin = %self.rest.origin()))]
    pub async fn insert_or_update_auction(&self, auction: &Auction) -> Result<i64, Error> {
        self.rest
            .send_json_returning_identity(Method::POST, &["auctions"], auction, HeaderMap::new())
            .await
    }

    /// DELETE /services/auctions/{id} - returns the deleted auction's
    /// identity.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn delete_auction(&self, auction_identity: i64) -> Result<i64, Error> {
        self.rest
            .delete_returning_identity(&["auctions", &auction_identity.to_string()])
            .await
    }

    // ========================================================================
    // Bids
    // ========================================================================

    /// GET /services/auctions/{id}/bids - the given auction's visible bids.
    #[instrument(skip(self, paging), fields(origin = %self.rest.origin()))]
    pub async fn query_auction_bids(
        &self,
        auction_identity: i64,
        paging: &Paging,
    ) -> Result<Vec<Bid>, Error> {
        self.rest
            .get_json(&["auctions", &auction_identity.to_string(), "bids"], paging)
            .await
    }

    /// PATCH /services/auctions/{id}/bids - upsert or remove the requester's
    /// bid, returning the auction's identity.
    ///
    /// A positive amount (in cents) inserts or updates the bid; the sentinel
    /// amount zero removes it. Negative amounts fail validation before any
    /// request is issued.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn insert_or_update_or_delete_auction_bid(
        &self,
        auction_identity: i64,
        bid_amount: i64,
    ) -> Result<i64, Error> {
        if bid_amount < 0 {
            return Err(InvalidInputError::Amount {
                value: bid_amount,
                reason: "bid amount must not be negative".to_string(),
            }
            .into());
        }

        self.rest
            .patch_text_returning_identity(
                &["auctions", &auction_identity.to_string(), "bids"],
                bid_amount.to_string(),
            )
            .await
    }

    // ========================================================================
    // Offers
    // ========================================================================

    /// GET /services/offers - the matching offers.
    #[instrument(skip(self, filter), fields(origin = %self.rest.origin()))]
    pub async fn query_offers(&self, filter: &OfferFilter) -> Result<Vec<Offer>, Error> {
        self.rest.get_json(&["offers"], filter).await
    }

    /// GET /services/offers/{id} - the matching offer.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn find_offer(&self, offer_identity: i64) -> Result<Offer, Error> {
        self.rest
            .get_json_plain(&["offers", &offer_identity.to_string()])
            .await
    }

    /// POST /services/offers - insert or update an offer, returning its
    /// identity.
    #[instrument(skip(self, offer), fields(origin = %self.rest.origin()))]
    pub async fn insert_or_update_offer(&self, offer: &Offer) -> Result<i64, Error> {
        self.rest
            .send_json_returning_identity(Method::POST, &["offers"], offer, HeaderMap::new())
            .await
    }

    /// DELETE /services/offers/{id} - returns the deleted offer's identity.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn delete_offer(&self, offer_identity: i64) -> Result<i64, Error> {
        self.rest
            .delete_returning_identity(&["offers", &offer_identity.to_string()])
            .await
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// GET /services/orders/{id} - the matching order.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn find_order(&self, order_identity: i64) -> Result<Order, Error> {
        self.rest
            .get_json_plain(&["orders", &order_identity.to_string()])
            .await
    }

    /// PATCH /services/offers/{id} - order the given offer, returning the
    /// newly created order's identity.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn insert_order(&self, offer_identity: i64) -> Result<i64, Error> {
        self.rest
            .patch_returning_identity(&["offers", &offer_identity.to_string()])
            .await
    }

    /// PATCH /services/orders/{id} - advance the given order, returning its
    /// identity. A tracking reference marks departure; `None` sends an empty
    /// body, confirming arrival.
    #[instrument(skip(self, tracking_reference), fields(origin = %self.rest.origin()))]
    pub async fn update_order(
        &self,
        order_identity: i64,
        tracking_reference: Option<&str>,
    ) -> Result<i64, Error> {
        self.rest
            .patch_text_returning_identity(
                &["orders", &order_identity.to_string()],
                tracking_reference.unwrap_or_default().to_string(),
            )
            .await
    }

    /// DELETE /services/orders/{id} - returns the deleted order's identity.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn delete_order(&self, order_identity: i64) -> Result<i64, Error> {
        self.rest
            .delete_returning_identity(&["orders", &order_identity.to_string()])
            .await
    }
}

/// Builds the optional `X-Set-Password` header map for person mutations.
pub(crate) fn set_password_headers(password: Option<&str>) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    if let Some(password) = password {
        let value =
            HeaderValue::from_str(password).map_err(|_| InvalidInputError::Other {
                message: "password is not a valid header value".to_string(),
            })?;
        headers.insert(SET_PASSWORD_HEADER, value);
    }
    Ok(headers)
}
