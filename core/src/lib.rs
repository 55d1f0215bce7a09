//! API client core for the arguments service.
//!
//! # Overview
//! Fetches, creates and updates arguments (a conclusion plus at least two
//! distinct premises) over HTTP with JSON payloads. Payloads are validated
//! locally, so a malformed argument never reaches the network.
//!
//! # Design
//! - `ArgumentsClient` is stateless: it holds only `base_url`. Each operation
//!   is split into `build_*` (produces request) and `parse_*` (consumes
//!   response), so the I/O boundary is explicit and the client is testable
//!   without a server.
//! - `ArgumentsApi` pairs a client with an injected `Transport` and exposes
//!   the four async operations `get_one`, `get_all`, `save` and `update`.
//! - A 404 on a lookup is an empty result, not an error.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod validate;

pub use api::ArgumentsApi;
pub use client::ArgumentsClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, TransportError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestMode};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Argument, ArgumentList, ArgumentWithId, Location};
pub use validate::{validate_argument, validate_conclusion_query, validate_premises};
