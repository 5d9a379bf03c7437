//! Client shapes exchanged with the CRM API.

pub mod client;
pub mod types;
