//! Catalog queries: event search, event tickets and autocomplete.
//!
//! Results are returned as raw response bodies. Event search always asks for
//! the first page of ten results.

use aurora_core::EventId;
use tracing::instrument;
use url::form_urlencoded;

use crate::client::AuroraClient;
use crate::error::ApiError;

/// Results requested per event search.
pub const EVENTS_PER_PAGE: u32 = 10;

/// Catalogs searched by autocomplete, in request order.
pub const AUTOCOMPLETE_CATALOGS: [&str; 4] = ["event", "performer", "venue", "category"];

impl AuroraClient {
    /// Search events by free text.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API answers with status >= 400.
    #[instrument(skip(self))]
    pub async fn query_events(&self, search: &str) -> Result<String, ApiError> {
        self.get(&events_path(search)).await
    }

    /// List tickets for an event.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API answers with status >= 400.
    #[instrument(skip(self), fields(event_id = %event_id))]
    pub async fn query_tickets(&self, event_id: &EventId) -> Result<String, ApiError> {
        self.get(&tickets_path(event_id)).await
    }

    /// Autocomplete across events, performers, venues and categories.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API answers with status >= 400.
    #[instrument(skip(self))]
    pub async fn query_autocomplete(&self, search: &str) -> Result<String, ApiError> {
        self.get(&autocomplete_path(search)).await
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Path and query for an event search.
#[must_use]
pub fn events_path(search: &str) -> String {
    format!(
        "/Catalog/Events?query={}&perPage={EVENTS_PER_PAGE}&page=1",
        encode(search)
    )
}

/// Path for an event's tickets.
#[must_use]
pub fn tickets_path(event_id: &EventId) -> String {
    format!("/Catalog/Events/{event_id}/Tickets")
}

/// Path and query for an autocomplete search.
#[must_use]
pub fn autocomplete_path(search: &str) -> String {
    let catalogs: String = AUTOCOMPLETE_CATALOGS
        .iter()
        .map(|catalog| format!("&catalogs={catalog}"))
        .collect();
    format!("/Catalog/Autocomplete?searchText={}{catalogs}", encode(search))
}
