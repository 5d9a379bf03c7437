use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, ResponsiblePerson, TypeConstraintError};

/// Client record as returned by the CRM API.
///
/// The identifier and both timestamps are server-managed, so they are only
/// readable. Deserialization rejects records whose `updated_at` precedes
/// `created_at`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "ClientRecord")]
pub struct Client {
    id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    pub responsible_person: Vec<ResponsiblePerson>,
}

/// Unchecked wire shape of [`Client`].
#[derive(Deserialize)]
struct ClientRecord {
    id: ClientId,
    name: String,
    email: String,
    phone: String,
    address: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    #[serde(default)]
    responsible_person: Vec<ResponsiblePerson>,
}

impl TryFrom<ClientRecord> for Client {
    type Error = TypeConstraintError;

    fn try_from(record: ClientRecord) -> Result<Self, Self::Error> {
        if record.updated_at < record.created_at {
            return Err(TypeConstraintError::UpdatedBeforeCreated);
        }
        Ok(Self {
            id: record.id,
            name: record.name,
            email: record.email,
            phone: record.phone,
            address: record.address,
            created_at: record.created_at,
            updated_at: record.updated_at,
            responsible_person: record.responsible_person,
        })
    }
}

impl Client {
    /// Builds a client from a submitted payload and the server-assigned parts.
    pub fn new(
        id: ClientId,
        payload: ClientPayload,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        ClientRecord {
            id,
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
            created_at,
            updated_at,
            responsible_person: payload.responsible_person.unwrap_or_default(),
        }
        .try_into()
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    /// Copies the editable fields into a payload, e.g. to prefill an edit form.
    #[must_use]
    pub fn to_payload(&self) -> ClientPayload {
        ClientPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            responsible_person: Some(self.responsible_person.clone())
                .filter(|persons| !persons.is_empty()),
        }
    }
}

/// Data submitted to the API to create or edit a client.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ClientPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<Vec<ResponsiblePerson>>,
}

impl ClientPayload {
    /// Normalizes whitespace and email casing. Nothing is validated here.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        responsible_person: Option<Vec<ResponsiblePerson>>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            email: email.into().trim().to_lowercase(),
            phone: phone.into().trim().to_string(),
            address: address.into().trim().to_string(),
            responsible_person: responsible_person.filter(|persons| !persons.is_empty()),
        }
    }
}
