//! DTOs that bridge API responses with page state.

pub mod api;
pub mod client;
