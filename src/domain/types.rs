//! Strongly-typed value objects used by the client shapes.
//!
//! Once a value reaches the domain layer it can be treated as trusted: an
//! identifier is positive and a responsible person is a named wrapper rather
//! than a bare string.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when a value does not satisfy its constraints.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// The last-update timestamp precedes the creation timestamp.
    #[error("updated_at must not be earlier than created_at")]
    UpdatedBeforeCreated,
}

/// Unique, server-assigned identifier of a client.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i32", into = "i32")]
pub struct ClientId(i32);

impl ClientId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for ClientId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for ClientId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClientId> for i32 {
    fn from(value: ClientId) -> Self {
        value.0
    }
}

/// Name of a person responsible for a client.
///
/// The API currently sends a plain string per person. Keeping it behind a
/// transparent wrapper lets the shape grow (contact details, manager id)
/// without changing the field type on [`crate::domain::client::Client`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ResponsiblePerson(String);

impl ResponsiblePerson {
    /// Wraps a responsible person's name as sent by the API.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned name.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for ResponsiblePerson {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ResponsiblePerson {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ResponsiblePerson {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ResponsiblePerson {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<ResponsiblePerson> for String {
    fn from(value: ResponsiblePerson) -> Self {
        value.0
    }
}
