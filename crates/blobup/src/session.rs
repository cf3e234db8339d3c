//! Authenticated PDS session.

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::auth::{AccessToken, Credentials, RefreshToken};
use crate::blob::BlobRef;
use crate::error::{Error, ProtocolError};
use crate::types::{Did, Handle, PdsUrl};
use crate::xrpc::client::XrpcClient;
use crate::xrpc::endpoints::{
    CreateSessionRequest, CreateSessionResponse, CREATE_SESSION, UPLOAD_BLOB,
};

/// The result of a blob upload.
///
/// Carries the decoded descriptor plus the full response envelope so a
/// caller can reproduce the server's exact acknowledgment (the CLI
/// does this behind `--print-response`).
#[derive(Debug, Clone)]
pub struct UploadedBlob {
    /// The decoded blob descriptor from the envelope's `blob` key.
    pub blob: BlobRef,
    /// The complete parsed response body.
    pub envelope: Value,
}

/// An authenticated session against a PDS.
///
/// Created once by [`Session::login`], held in memory for the life of
/// the process, never refreshed. Dropping the session is the only
/// invalidation.
pub struct Session {
    did: Did,
    handle: Handle,
    access_token: AccessToken,
    refresh_token: RefreshToken,
    client: XrpcClient,
}

impl Session {
    /// Exchange credentials for a session via createSession.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses and malformed response
    /// bodies are all returned as typed errors; invalid credentials
    /// surface as a [`ProtocolError`] with the server's 401.
    #[instrument(skip(credentials), fields(pds = %pds, identifier = credentials.identifier()))]
    pub async fn login(pds: &PdsUrl, credentials: Credentials) -> Result<Self, Error> {
        info!("creating session");

        let client = XrpcClient::new(pds.clone());
        let request = CreateSessionRequest {
            identifier: credentials.identifier(),
            password: credentials.password(),
        };

        let response: CreateSessionResponse = client.procedure(CREATE_SESSION, &request).await?;

        let did = Did::new(&response.did)?;
        let handle = Handle::new(&response.handle)?;
        debug!(did = %did, handle = %handle, "session created");

        Ok(Self {
            did,
            handle,
            access_token: AccessToken::new(response.access_jwt),
            refresh_token: RefreshToken::new(response.refresh_jwt),
            client,
        })
    }

    /// Returns the DID of the authenticated account.
    pub fn did(&self) -> &Did {
        &self.did
    }

    /// Returns the handle of the authenticated account.
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Returns the PDS this session was created against.
    pub fn pds(&self) -> &PdsUrl {
        self.client.pds()
    }

    /// Returns the access token.
    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the refresh token issued at login.
    pub fn refresh_token(&self) -> &RefreshToken {
        &self.refresh_token
    }

    /// Upload a blob via uploadBlob.
    ///
    /// The payload is sent verbatim as the request body with the given
    /// content type and the session's bearer token. On a success status
    /// the body is parsed as a JSON envelope and the descriptor under
    /// its `blob` key is decoded.
    ///
    /// # Errors
    ///
    /// Distinct failures for transport errors, non-success statuses, an
    /// unparseable body, a missing `blob` key, and an undecodable
    /// descriptor.
    #[instrument(skip(self, bytes), fields(did = %self.did, len = bytes.len(), content_type))]
    pub async fn upload_blob(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadedBlob, Error> {
        info!("uploading blob");

        let body = self
            .client
            .procedure_authed_bytes(UPLOAD_BLOB, bytes, content_type, self.access_token.as_str())
            .await?;

        let envelope: Value = serde_json::from_slice(&body).map_err(|e| {
            ProtocolError::malformed_body(format!("response body is not valid JSON: {}", e))
        })?;

        let blob_value = envelope
            .get("blob")
            .ok_or_else(|| ProtocolError::malformed_body("response has no 'blob' field"))?;

        let blob: BlobRef = serde_json::from_value(blob_value.clone()).map_err(|e| {
            ProtocolError::malformed_body(format!("undecodable blob descriptor: {}", e))
        })?;

        debug!(cid = blob.cid(), "blob stored");

        Ok(UploadedBlob { blob, envelope })
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("did", &self.did)
            .field("handle", &self.handle)
            .field("pds", self.client.pds())
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
