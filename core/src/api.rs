//! Asynchronous façade: build, execute through a `Transport`, parse.
//!
//! Every operation validates while building, so a rejected payload or query
//! returns before the transport is called.

use tracing::{debug, warn};

use crate::client::ArgumentsClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Argument, ArgumentList, Location};

#[derive(Debug, Clone)]
pub struct ArgumentsApi<T> {
    client: ArgumentsClient,
    transport: T,
}

impl<T: Transport> ArgumentsApi<T> {
    pub fn new(client: ArgumentsClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &ArgumentsClient {
        &self.client
    }

    /// `Ok(None)` when the argument (or that version of it) does not exist.
    pub async fn get_one(&self, id: u64, version: Option<u16>) -> Result<Option<Argument>, ApiError> {
        let response = self.send(self.client.build_get_one(id, version)).await?;
        self.client.parse_get_one(response)
    }

    pub async fn get_all(&self, conclusion: &str) -> Result<ArgumentList, ApiError> {
        let response = self.send(self.client.build_get_all(conclusion)?).await?;
        self.client.parse_get_all(response)
    }

    pub async fn save(&self, argument: &Argument) -> Result<Location, ApiError> {
        let response = self.send(self.client.build_save(argument)?).await?;
        self.client.parse_save(response)
    }

    pub async fn update(&self, id: u64, argument: &Argument) -> Result<Location, ApiError> {
        let response = self.send(self.client.build_update(id, argument)?).await?;
        self.client.parse_update(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        debug!(%method, %path, "sending request");
        let response = self.transport.execute(request).await?;
        if response.status >= 500 {
            warn!(%method, %path, status = response.status, body = %response.body, "server error");
        } else {
            debug!(%method, %path, status = response.status, "received response");
        }
        Ok(response)
    }
}
