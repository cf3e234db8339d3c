//! XRPC HTTP client implementation.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, trace};

use crate::error::{Error, ProtocolError};
use crate::types::PdsUrl;

use super::endpoints::XrpcErrorResponse;

/// HTTP client for XRPC requests.
#[derive(Debug, Clone)]
pub struct XrpcClient {
    client: reqwest::Client,
    pds: PdsUrl,
}

impl XrpcClient {
    /// Create a new XRPC client for the given PDS.
    pub fn new(pds: PdsUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("blobup/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, pds }
    }

    /// Returns the PDS URL this client is configured for.
    pub fn pds(&self) -> &PdsUrl {
        &self.pds
    }

    /// Make an unauthenticated XRPC procedure (JSON POST request).
    #[instrument(skip(self, body), fields(pds = %self.pds))]
    pub async fn procedure<B, R>(&self, method: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.pds.xrpc_url(method);
        debug!(method, %url, "XRPC procedure");

        let response = self.client.post(&url).json(body).send().await?;

        self.handle_response(response).await
    }

    /// Make an authenticated XRPC procedure with a raw binary body and
    /// explicit content type, returning the raw response body.
    ///
    /// Used for uploadBlob, whose request body is the blob bytes rather
    /// than JSON and whose response the caller wants verbatim.
    #[instrument(skip(self, body, token), fields(pds = %self.pds, len = body.len()))]
    pub async fn procedure_authed_bytes(
        &self,
        method: &str,
        body: Vec<u8>,
        content_type: &str,
        token: &str,
    ) -> Result<Vec<u8>, Error> {
        let url = self.pds.xrpc_url(method);
        debug!(method, content_type, "XRPC authenticated binary procedure");

        let response = self
            .client
            .post(&url)
            .headers(self.binary_headers(content_type, token))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        trace!(status = %status, "XRPC response");

        if status.is_success() {
            let body = response.bytes().await?;
            Ok(body.to_vec())
        } else {
            let error = self.parse_error_response(response).await;
            Err(Error::Protocol(error))
        }
    }

    /// Create headers for an authenticated binary request.
    fn binary_headers(&self, content_type: &str, token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).expect("invalid token characters"),
        );
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(content_type).expect("invalid content type"),
        );
        headers
    }

    /// Handle an XRPC response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "XRPC response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            Ok(body)
        } else {
            let error = self.parse_error_response(response).await;
            Err(Error::Protocol(error))
        }
    }

    /// Parse an XRPC error response.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        // Try to parse as XRPC error format
        match response.json::<XrpcErrorResponse>().await {
            Ok(error_body) => ProtocolError::new(status, error_body.error, error_body.message),
            Err(_) => ProtocolError::new(status, None, None),
        }
    }
}
