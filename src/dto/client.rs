//! DTOs shaped for the client list and its create/edit modal.

use serde::Serialize;

use crate::domain::client::{Client, ClientPayload};
use crate::domain::types::ClientId;
use crate::dto::api::ClientsResponse;
use crate::models::config::UiConfig;
use crate::pagination::{Paginated, total_pages};

/// Whether the client modal creates a new record or edits an existing one.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "client_id", rename_all = "snake_case")]
pub enum ClientModalMode {
    Create,
    Edit(ClientId),
}

/// Data displayed inside the client modal.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ClientModalData {
    pub mode: ClientModalMode,
    pub payload: ClientPayload,
}

impl ClientModalData {
    /// Blank form for a new client.
    pub fn create() -> Self {
        Self {
            mode: ClientModalMode::Create,
            payload: ClientPayload::default(),
        }
    }

    /// Form prefilled from an existing client.
    pub fn edit(client: &Client) -> Self {
        Self {
            mode: ClientModalMode::Edit(client.id()),
            payload: client.to_payload(),
        }
    }
}

/// Data required to render the client list page.
#[derive(Debug, Serialize)]
pub struct ClientsPageData {
    pub clients: Paginated<Client>,
    pub total: usize,
}

impl ClientsPageData {
    /// Places a listing response at `page`, sized and shaped by `config`.
    pub fn from_response(response: ClientsResponse, page: usize, config: &UiConfig) -> Self {
        let pages = total_pages(response.total, config.items_per_page);
        Self {
            clients: Paginated::new(response.clients, page, pages, config.page_window()),
            total: response.total,
        }
    }
}
