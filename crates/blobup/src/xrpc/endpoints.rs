//! XRPC endpoint definitions and request/response types.

use serde::{Deserialize, Serialize};

/// com.atproto.server.createSession
pub const CREATE_SESSION: &str = "com.atproto.server.createSession";

/// com.atproto.repo.uploadBlob
pub const UPLOAD_BLOB: &str = "com.atproto.repo.uploadBlob";

/// Request body for createSession.
#[derive(Debug, Serialize)]
pub struct CreateSessionRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

/// Response from createSession.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub did: String,
    pub handle: String,
    pub access_jwt: String,
    pub refresh_jwt: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_confirmed: Option<bool>,
}

/// XRPC error response format.
#[derive(Debug, Deserialize)]
pub struct XrpcErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
}
