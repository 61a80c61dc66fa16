// src/verify/contract.rs

use crate::errors::{AppError, AppResult};
use crate::models::{TableRow, TimesheetEntry, VerificationReport};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Body of `POST /verify`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationRequest {
    pub email: String,
    #[serde(rename = "tableData")]
    pub table_data: Vec<TimesheetEntry>,
}

impl VerificationRequest {
    /// Check the submission preconditions and strip UI-only row state.
    /// The email is checked first.
    pub fn build(email: &str, rows: &[TableRow]) -> AppResult<Self> {
        if email.trim().is_empty() {
            return Err(AppError::EmailRequired);
        }
        if rows.is_empty() {
            return Err(AppError::RowsRequired);
        }

        Ok(Self {
            email: email.to_string(),
            table_data: rows.iter().map(|r| r.entry.clone()).collect(),
        })
    }
}

/// Status and raw body as received from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct SuccessBody {
    report: VerificationReport,
}

#[derive(Deserialize)]
struct FailureBody {
    message: Option<String>,
}

/// Fallback text for a non-2xx status without a server message.
pub fn fallback_message(status: u16) -> String {
    match status {
        404 => "Resource not found".to_string(),
        400 => "Bad Request".to_string(),
        422 => "Unprocessable Entity".to_string(),
        500 => "Internal Server Error".to_string(),
        other => format!("Unexpected error: {other}"),
    }
}

/// Map a raw response to a report or to the error the user should see.
///
/// 2xx bodies must carry a `report`. Failures prefer a non-empty `message`
/// from the body and fall back to [`fallback_message`].
pub fn interpret_response(response: &RawResponse) -> AppResult<VerificationReport> {
    if (200..300).contains(&response.status) {
        return serde_json::from_str::<SuccessBody>(&response.body)
            .map(|b| b.report)
            .map_err(|e| {
                warn!(error = %e, "verification response has no usable report");
                AppError::Transport(e.to_string())
            });
    }

    let message = serde_json::from_str::<FailureBody>(&response.body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback_message(response.status));

    Err(AppError::Verification {
        status: response.status,
        message,
    })
}
