//! Stateless HTTP request builder and response parser for the arguments API.
//!
//! # Design
//! `ArgumentsClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Payload validation happens inside `build_*`, so an invalid
//! argument never becomes a request.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, RequestMode};
use crate::types::{Argument, ArgumentBody, ArgumentList, ArgumentListBody, Location};
use crate::validate::{validate_argument, validate_conclusion_query};

/// Synchronous, stateless client for the arguments API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. `ArgumentsApi` wires the two halves to a `Transport`.
#[derive(Debug, Clone)]
pub struct ArgumentsClient {
    base_url: String,
}

impl ArgumentsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Latest version when `version` is `None`, otherwise that exact version.
    pub fn build_get_one(&self, id: u64, version: Option<u16>) -> HttpRequest {
        let path = match version {
            Some(version) => format!("{}/arguments/{id}/version/{version}", self.base_url),
            None => format!("{}/arguments/{id}", self.base_url),
        };
        HttpRequest {
            method: HttpMethod::Get,
            path,
            mode: RequestMode::Default,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_all(&self, conclusion: &str) -> Result<HttpRequest, ApiError> {
        validate_conclusion_query(conclusion)?;
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: format!(
                "{}/arguments?conclusion={}",
                self.base_url,
                urlencoding::encode(conclusion)
            ),
            mode: RequestMode::Cors,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_save(&self, argument: &Argument) -> Result<HttpRequest, ApiError> {
        validate_argument(argument)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/arguments", self.base_url),
            mode: RequestMode::Cors,
            headers: json_headers(),
            body: Some(to_json(argument)?),
        })
    }

    pub fn build_update(&self, id: u64, argument: &Argument) -> Result<HttpRequest, ApiError> {
        validate_argument(argument)?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/arguments/{id}", self.base_url),
            mode: RequestMode::Cors,
            headers: json_headers(),
            body: Some(to_json(argument)?),
        })
    }

    /// 404 is `Ok(None)`: a missing argument is not an error for lookups.
    pub fn parse_get_one(&self, response: HttpResponse) -> Result<Option<Argument>, ApiError> {
        if response.status == 404 {
            return Ok(None);
        }
        check_status(&response, 200)?;
        from_json::<ArgumentBody>(&response.body).map(|body| Some(body.into()))
    }

    /// 404 is an empty listing.
    pub fn parse_get_all(&self, response: HttpResponse) -> Result<ArgumentList, ApiError> {
        if response.status == 404 {
            return Ok(ArgumentList::default());
        }
        check_status(&response, 200)?;
        from_json::<ArgumentListBody>(&response.body).map(Into::into)
    }

    pub fn parse_save(&self, response: HttpResponse) -> Result<Location, ApiError> {
        check_status(&response, 201)?;
        location(&response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Location, ApiError> {
        if response.status == 404 {
            return Err(ApiError::NotFound(response.body));
        }
        check_status(&response, 204)?;
        location(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(argument: &Argument) -> Result<String, ApiError> {
    serde_json::to_string(argument).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn location(response: &HttpResponse) -> Result<Location, ApiError> {
    response
        .header("location")
        .map(|location| Location {
            location: location.to_string(),
        })
        .ok_or(ApiError::MissingLocation(response.status))
}

/// Map a status other than `expected` to `Server` (500) or `UnexpectedStatus`.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 500 {
        return Err(ApiError::Server(response.body.clone()));
    }
    Err(ApiError::UnexpectedStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
