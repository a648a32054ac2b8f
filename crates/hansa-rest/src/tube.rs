//! Client for the tube (media catalogue) web-service.

use reqwest::Method;
use reqwest::header::HeaderMap;
use tracing::{debug, instrument};

use hansa_core::error::{Error, InvalidInputError};
use hansa_core::model::{AccessPlan, Document, Flick, Person, Season, Series};
use hansa_core::{AccessKey, ServiceUrl, Upload};

use crate::broker::set_password_headers;
use crate::client::{Authorization, RestClient};
use crate::filter::{
    DocumentFilter, FlickFilter, Paging, PersonFilter, SeasonFilter, SeriesFilter,
};

/// Client for the tube web-service (series, seasons, flicks, recordings).
///
/// This deployment variant authorizes every request with a fixed
/// per-deployment access key carried in the `X-Access-Key` header.
///
/// # Example
///
/// ```no_run
/// use hansa_core::{AccessKey, ServiceUrl};
/// use hansa_rest::{SeriesFilter, TubeClient};
///
/// # async fn example() -> Result<(), hansa_core::Error> {
/// let origin = ServiceUrl::new("https://tube.example.com:8050")?;
/// let key = AccessKey::new("0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef")?;
/// let tube = TubeClient::new(origin, key);
///
/// let filter = SeriesFilter { title_fragment: Some("wire".into()), ..SeriesFilter::default() };
/// for series in tube.query_series(&filter).await? {
///     println!("{:?}: {:?}", series.identity, series.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TubeClient {
    rest: RestClient,
}

impl TubeClient {
    /// Create a new tube client for the given service origin and access key.
    pub fn new(origin: ServiceUrl, access_key: AccessKey) -> Self {
        Self {
            rest: RestClient::new(origin, Authorization::AccessKey(access_key)),
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

    /// GET /services/people - the matching people, with their phone numbers
    /// sorted.
    #[instrument(skip(self, filter), fields(origin = %self.rest.origin()))]
    pub async fn query_people(&self, filter: &PersonFilter) -> Result<Vec<Person>, Error> {
        let mut people: Vec<Person> = self.rest.get_json(&["people"], filter).await?;
        for person in &mut people {
            sort_phones(person);
        }
        Ok(people)
    }

    /// GET /services/people/requester - authenticates with the given email
    /// and password and returns the requester, with sorted phone numbers.
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

        let mut person: Person = RestClient::handle_json(response).await?;
        sort_phones(&mut person);
        Ok(person)
    }

    /// GET /services/people/{id} - the matching person, with sorted phone
    /// numbers.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn find_person(&self, person_identity: i64) -> Result<Person, Error> {
        let mut person: Person = self
            .rest
            .get_json_plain(&["people", &person_identity.to_string()])
            .await?;
        sort_phones(&mut person);
        Ok(person)
    }

    /// POST /services/people - insert a person, optionally setting a
    /// password, and return the new person's identity.
    #[instrument(skip(self, person, password), fields(origin = %self.rest.origin()))]
    pub async fn insert_person(
        &self,
        person: &Person,
        password: Option<&str>,
    ) -> Result<i64, Error> {
        let headers = set_password_headers(password)?;
        self.rest
            .send_json_returning_identity(Method::POST, &["people"], person, headers)
            .await
    }

    /// PUT /services/people/{id} - update a person, optionally setting a new
    /// password, and return the person's identity. The person must already
    /// carry its identity.
    #[instrument(skip(self, person, password), fields(origin = %self.rest.origin()))]
    pub async fn update_person(
        &self,
        person: &Person,
        password: Option<&str>,
    ) -> Result<i64, Error> {
        let identity = person
            .identity
            .ok_or(InvalidInputError::MissingField { field: "identity" })?;

        let headers = set_password_headers(password)?;
        self.rest
            .send_json_returning_identity(
                Method::PUT,
                &["people", &identity.to_string()],
                person,
                headers,
            )
            .await
    }

    /// DELETE /services/people/{id} - returns the deleted person's identity.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn delete_person(&self, person_identity: i64) -> Result<i64, Error> {
        self.rest
            .delete_returning_identity(&["people", &person_identity.to_string()])
            .await
    }

    // ========================================================================
    // Access plans
    // ========================================================================

    /// GET /services/people/{id}/access-plans - the access plans rented by
    /// the given person.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn query_access_plans(&self, person_identity: i64) -> Result<Vec<AccessPlan>, Error> {
        self.rest
            .get_json_plain(&["people", &person_identity.to_string(), "access-plans"])
            .await
    }

    /// POST /services/people/{id}/access-plans - insert or update an access
    /// plan under its tenant, returning the plan's identity. The plan must
    /// carry a "tenant-reference" attribute.
    #[instrument(skip(self, access_plan), fields(origin = %self.rest.origin()))]
    pub async fn insert_or_update_access_plan(&self, access_plan: &AccessPlan) -> Result<i64, Error> {
        let tenant = access_plan
            .tenant_reference()
            .ok_or(InvalidInputError::MissingField {
                field: "attributes.tenant-reference",
            })?;

        self.rest
            .send_json_returning_identity(
                Method::POST,
                &["people", &tenant.to_string(), "access-plans"],
                access_plan,
                HeaderMap::new(),
            )
            .await
    }

    // ========================================================================
    // Series
    // ========================================================================

    /// GET /services/series (ADMIN) or /services/people/{id}/series - the
    /// series editable by the given person.
    #[instrument(skip(self, person, paging), fields(origin = %self.rest.origin()))]
    pub async fn query_editable_series(
        &self,
        person: &Person,
        paging: &Paging,
    ) -> Result<Vec<Series>, Error> {
        if person.is_admin() {
            self.rest.get_json(&["series"], paging).await
        } else {
            let identity = person
                .identity
                .ok_or(InvalidInputError::MissingField { field: "identity" })?;
            self.rest
                .get_json(&["people", &identity.to_string(), "series"], paging)
                .await
        }
    }

    /// GET /services/flicks (ADMIN) or /services/people/{id}/flicks - the
    /// flicks editable by the given person.
    #[instrument(skip(self, person, paging), fields(origin = %self.rest.origin()))]
    pub async fn query_editable_flicks(
        &self,
        person: &Person,
        paging: &Paging,
    ) -> Result<Vec<Flick>, Error> {
        if person.is_admin() {
            self.rest.get_json(&["flicks"], paging).await
        } else {
            let identity = person
                .identity
                .ok_or(InvalidInputError::MissingField { field: "identity" })?;
            self.rest
                .get_json(&["people", &identity.to_string(), "flicks"], paging)
                .await
        }
    }

    /// GET /services/series - the matching series.
    #[instrument(skip(self, filter), fields(origin = %self.rest.origin()))]
    pub async fn query_series(&self, filter: &SeriesFilter) -> Result<Vec<Series>, Error> {
        self.rest.get_json(&["series"], filter).await
    }

    /// GET /services/series/{id} - the matching series.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn find_series(&self, series_identity: i64) -> Result<Series, Error> {
        self.rest
            .get_json_plain(&["series", &series_identity.to_string()])
            .await
    }

    /// POST /services/series - insert or update a series, returning its
    /// identity.
    #[instrument(skip(self, series), fields(origin = %self.rest.origin()))]
    pub async fn insert_or_update_series(&self, series: &Series) -> Result<i64, Error> {
        self.rest
            .send_json_returning_identity(Method::POST, &["series"], series, HeaderMap::new())
            .await
    }

    /// DELETE /services/series/{id} - returns the deleted series' identity.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn delete_series(&self, series_identity: i64) -> Result<i64, Error> {
        self.rest
            .delete_returning_identity(&["series", &series_identity.to_string()])
            .await
    }

    /// GET /services/series/{id}/seasons - the given series' seasons, by
    /// ascending ordinal.
    #[instrument(skip(self, paging), fields(origin = %self.rest.origin()))]
    pub async fn query_series_seasons(
        &self,
        series_identity: i64,
        paging: &Paging,
    ) -> Result<Vec<Season>, Error> {
        self.rest
            .get_json(&["series", &series_identity.to_string(), "seasons"], paging)
            .await
    }

    // ========================================================================
    // Seasons
    // ========================================================================

    /// GET /services/seasons - the matching seasons, ordered by ascending
    /// series identity and ordinal.
    #[instrument(skip(self, filter), fields(origin = %self.rest.origin()))]
    pub async fn query_seasons(&self, filter: &SeasonFilter) -> Result<Vec<Season>, Error> {
        self.rest.get_json(&["seasons"], filter).await
    }

    /// GET /services/seasons/{id} - the matching season.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn find_season(&self, season_identity: i64) -> Result<Season, Error> {
        self.rest
            .get_json_plain(&["seasons", &season_identity.to_string()])
            .await
    }

    /// POST /services/seasons - insert or update a season, returning its
    /// identity.
    #[instrument(skip(self, season), fields(origin = %self.rest.origin()))]
    pub async fn insert_or_update_season(&self, season: &Season) -> Result<i64, Error> {
        self.rest
            .send_json_returning_identity(Method::POST, &["seasons"], season, HeaderMap::new())
            .await
    }

    /// DELETE /services/seasons/{id} - returns the deleted season's identity.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn delete_season(&self, season_identity: i64) -> Result<i64, Error> {
        self.rest
            .delete_returning_identity(&["seasons", &season_identity.to_string()])
            .await
    }

    /// GET /services/seasons/{id}/episodes - the given season's episodes, by
    /// ascending ordinal.
    #[instrument(skip(self, paging), fields(origin = %self.rest.origin()))]
    pub async fn query_season_episodes(
        &self,
        season_identity: i64,
        paging: &Paging,
    ) -> Result<Vec<Flick>, Error> {
        self.rest
            .get_json(&["seasons", &season_identity.to_string(), "episodes"], paging)
            .await
    }

    // ========================================================================
    // Flicks
    // ========================================================================

    /// GET /services/flicks - the matching flicks.
    #[instrument(skip(self, filter), fields(origin = %self.rest.origin()))]
    pub async fn query_flicks(&self, filter: &FlickFilter) -> Result<Vec<Flick>, Error> {
        self.rest.get_json(&["flicks"], filter).await
    }

    /// GET /services/flicks/{id} - the matching flick.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn find_flick(&self, flick_identity: i64) -> Result<Flick, Error> {
        self.rest
            .get_json_plain(&["flicks", &flick_identity.to_string()])
            .await
    }

    /// POST /services/flicks - insert or update a flick, returning its
    /// identity.
    #[instrument(skip(self, flick), fields(origin = %self.rest.origin()))]
    pub async fn insert_or_update_flick(&self, flick: &Flick) -> Result<i64, Error> {
        self.rest
            .send_json_returning_identity(Method::POST, &["flicks"], flick, HeaderMap::new())
            .await
    }

    /// DELETE /services/flicks/{id} - returns the deleted flick's identity.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn delete_flick(&self, flick_identity: i64) -> Result<i64, Error> {
        self.rest
            .delete_returning_identity(&["flicks", &flick_identity.to_string()])
            .await
    }

    // ========================================================================
    // Recordings
    // ========================================================================

    /// GET /services/flicks/{id}/recording - the flick's recording content.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn find_flick_recording(&self, flick_identity: i64) -> Result<Vec<u8>, Error> {
        self.rest
            .get_bytes(
                &["flicks", &flick_identity.to_string(), "recording"],
                "video/*",
            )
            .await
    }

    /// PUT /services/flicks/{id}/recording - upload the flick's recording,
    /// returning the recording URI.
    #[instrument(skip(self, upload), fields(origin = %self.rest.origin(), name = upload.name()))]
    pub async fn update_flick_recording(
        &self,
        flick_identity: i64,
        upload: &Upload,
    ) -> Result<String, Error> {
        self.rest
            .put_upload_returning_text(
                &["flicks", &flick_identity.to_string(), "recording"],
                upload,
            )
            .await
    }

    /// DELETE /services/flicks/{id}/recording - remove the flick's
    /// recording, returning the removed recording URI.
    #[instrument(skip(self), fields(origin = %self.rest.origin()))]
    pub async fn delete_flick_recording(&self, flick_identity: i64) -> Result<String, Error> {
        self.rest
            .delete_returning_text(&["flicks", &flick_identity.to_string(), "recording"])
            .await
    }
}

/// Orders a person's phone records by number, matching the view layer's
/// display convention.
fn sort_phones(person: &mut Person) {
    person.phones.sort_by(|left, right| left.number.cmp(&right.number));
}
