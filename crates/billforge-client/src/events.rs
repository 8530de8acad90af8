//! Event stream operations.

use billforge_core::{Event, EventTypeInfo, EventTypeName, Page};

use crate::client::Client;
use crate::error::Result;
use crate::params::QueryParams;

/// Query parameters for [`Client::list_events`].
#[derive(Debug, Clone, Default)]
pub struct EventListParams {
    /// Return entities after the given cursor.
    pub after: Option<String>,
    /// Page size; server default is 50, maximum 200.
    pub per_page: Option<u32>,
    /// Restrict to the given event types.
    pub event_type: Vec<EventTypeName>,
}

impl EventListParams {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("after", self.after.as_deref());
        query.push_opt("per_page", self.per_page);
        query.push_csv("event_type", &self.event_type);
        query
    }
}

impl Client {
    /// List events that happened to this seller's entities, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_events(&self, params: &EventListParams) -> Result<Page<Event>> {
        self.get_page("list_events", "/events", &params.to_query())
            .await
    }

    /// List the event types the platform can emit.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_event_types(&self) -> Result<Page<EventTypeInfo>> {
        self.get_page("list_event_types", "/event-types", &QueryParams::new())
            .await
    }
}
