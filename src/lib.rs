//! Client-side state for the CRM client pages.
//!
//! [`domain`] holds the client read and write shapes exchanged with the API,
//! [`ui`] the modal and portal state page components drive, and [`dto`] the
//! page-level compositions of both.

pub mod domain;
pub mod dto;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod ui;
