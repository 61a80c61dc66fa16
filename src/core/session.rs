//! Editing session: row list, email, current report, busy flag and the
//! notification slot. Every operation replaces state as a whole value.

use super::notification::{Notification, NotificationKind};
use super::row::{create_row, update_field};
use crate::errors::{AppError, AppResult};
use crate::import::ImportLogic;
use crate::models::{EntryField, TableRow, VerificationReport};
use crate::verify::{RawResponse, VerificationRequest, VerifyTransport, interpret_response};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const MSG_IMPORT_OK: &str = "File data loaded successfully";
pub const MSG_VERIFY_OK: &str = "Data verified successfully";

#[derive(Debug, Clone)]
pub struct Session {
    email: String,
    rows: Vec<TableRow>,
    report: Option<VerificationReport>,
    is_submitting: bool,
    notification: Option<Notification>,
    notification_ttl: TimeDelta,
}

impl Session {
    pub fn new(notification_ttl: TimeDelta) -> Self {
        Self::restore(String::new(), Vec::new(), notification_ttl)
    }

    /// Session rebuilt from persisted email and rows.
    pub fn restore(email: String, rows: Vec<TableRow>, notification_ttl: TimeDelta) -> Self {
        Self {
            email,
            rows,
            report: None,
            is_submitting: false,
            notification: None,
            notification_ttl,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn report(&self) -> Option<&VerificationReport> {
        self.report.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    // ---------------------------
    // Rows
    // ---------------------------

    /// Append a blank row in editing state and return its id.
    pub fn add_row(&mut self) -> Uuid {
        let row = TableRow::new(create_row(), true);
        let id = row.id;

        let mut rows = self.rows.clone();
        rows.push(row);
        self.rows = rows;

        id
    }

    /// Id of the row shown at 1-based position `number`.
    pub fn row_id_at(&self, number: usize) -> AppResult<Uuid> {
        number
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(|r| r.id)
            .ok_or_else(|| AppError::RowNotFound(number.to_string()))
    }

    pub fn update_row(&mut self, id: Uuid, field: EntryField, value: &str) -> AppResult<()> {
        let current = self.find(id)?;
        let updated = update_field(&current.entry, field, value)?;

        self.rows = self
            .rows
            .iter()
            .map(|r| {
                if r.id == id {
                    TableRow {
                        entry: updated.clone(),
                        ..r.clone()
                    }
                } else {
                    r.clone()
                }
            })
            .collect();

        debug!(%id, %field, "row updated");
        Ok(())
    }

    /// Flip the editing flag of a row, returning the new state.
    pub fn toggle_edit(&mut self, id: Uuid) -> AppResult<bool> {
        let editing = !self.find(id)?.is_editing;

        self.rows = self
            .rows
            .iter()
            .map(|r| TableRow {
                is_editing: if r.id == id { editing } else { r.is_editing },
                ..r.clone()
            })
            .collect();

        Ok(editing)
    }

    pub fn delete_row(&mut self, id: Uuid) -> AppResult<()> {
        self.find(id)?;
        self.rows = self.rows.iter().filter(|r| r.id != id).cloned().collect();
        Ok(())
    }

    fn find(&self, id: Uuid) -> AppResult<&TableRow> {
        self.rows
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::RowNotFound(id.to_string()))
    }

    // ---------------------------
    // Import
    // ---------------------------

    /// Replace all rows with the content of a workbook.
    /// On any error the current rows are kept.
    pub fn import_workbook(&mut self, file_name: &str, bytes: &[u8]) -> AppResult<usize> {
        match ImportLogic::ingest_file(file_name, bytes) {
            Ok(rows) => {
                let count = rows.len();
                info!(file = file_name, rows = count, "rows replaced from workbook");
                self.rows = rows;
                self.notify(NotificationKind::Success, MSG_IMPORT_OK);
                Ok(count)
            }
            Err(e) => {
                warn!(file = file_name, error = %e, "workbook import failed");
                self.notify(NotificationKind::Error, &e.to_string());
                Err(e)
            }
        }
    }

    // ---------------------------
    // Submission
    // ---------------------------

    /// Check preconditions, raise the busy flag and build the payload.
    /// Nothing is sent when this fails.
    pub fn begin_submission(&mut self) -> AppResult<VerificationRequest> {
        if self.is_submitting {
            return Err(AppError::SubmissionInFlight);
        }

        match VerificationRequest::build(&self.email, &self.rows) {
            Ok(request) => {
                self.is_submitting = true;
                debug!(rows = request.table_data.len(), "submission started");
                Ok(request)
            }
            Err(e) => {
                self.notify(NotificationKind::Error, &e.to_string());
                Err(e)
            }
        }
    }

    /// Lower the busy flag and install the report on success.
    /// On failure the previous report stays in place.
    pub fn finish_submission(
        &mut self,
        outcome: AppResult<RawResponse>,
    ) -> AppResult<&VerificationReport> {
        self.is_submitting = false;

        match outcome.and_then(|raw| interpret_response(&raw)) {
            Ok(report) => {
                self.notify(NotificationKind::Success, MSG_VERIFY_OK);
                Ok(self.report.insert(report))
            }
            Err(e) => {
                if let AppError::Transport(detail) = &e {
                    warn!(detail = %detail, "error sending data to the backend");
                }
                self.notify(NotificationKind::Error, &e.to_string());
                Err(e)
            }
        }
    }

    pub fn submit<T: VerifyTransport + ?Sized>(
        &mut self,
        transport: &T,
    ) -> AppResult<&VerificationReport> {
        let request = self.begin_submission()?;
        let outcome = transport.post(&request);
        self.finish_submission(outcome)
    }

    // ---------------------------
    // Notifications
    // ---------------------------

    pub fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.notify_at(kind, message, Utc::now());
    }

    pub fn notify_at(&mut self, kind: NotificationKind, message: &str, now: DateTime<Utc>) {
        self.notification = Some(Notification::new(kind, message, now, self.notification_ttl));
    }

    /// The current notification, unless it has expired.
    pub fn active_notification(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| n.is_visible_at(now))
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}
