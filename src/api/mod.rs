//! API Module
//!
//! Cached HTTP client for the remote catalog API.
//!
//! # Endpoints
//! - `GET /location/` - Paginated location listing
//! - `GET /location/{name}` - Single location detail
//! - `GET /pokemon/{name}` - Single pokemon detail

pub mod client;

pub use client::PokeApiClient;
