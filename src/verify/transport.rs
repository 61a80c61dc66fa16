// src/verify/transport.rs

use super::contract::{RawResponse, VerificationRequest};
use crate::errors::AppResult;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, info};

/// Delivers a verification request and hands back the raw answer.
///
/// Implementations only move bytes; status handling lives in
/// [`super::contract::interpret_response`].
pub trait VerifyTransport {
    fn post(&self, request: &VerificationRequest) -> AppResult<RawResponse>;
}

/// JSON over HTTP to the configured endpoint.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> AppResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl VerifyTransport for HttpTransport {
    fn post(&self, request: &VerificationRequest) -> AppResult<RawResponse> {
        info!(
            endpoint = %self.endpoint,
            rows = request.table_data.len(),
            "sending verification request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(request)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(status, bytes = body.len(), "verification response received");

        Ok(RawResponse { status, body })
    }
}
