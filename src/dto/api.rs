//! DTOs received from the CRM API endpoints.

use serde::Deserialize;

use crate::domain::client::Client;

/// Body returned by the `/api/v1/clients` listing.
#[derive(Debug, Deserialize)]
pub struct ClientsResponse {
    /// Total number of clients matching the filter.
    pub total: usize,
    /// Page of clients requested by the caller.
    pub clients: Vec<Client>,
}
