use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Reconciliation report produced by the verification service.
///
/// Immutable once received; a new submission replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub email_found: bool,
    #[serde(default)]
    pub database_hours: BTreeMap<String, f64>,
    #[serde(default)]
    pub timesheet_hours: BTreeMap<String, f64>,
    #[serde(deserialize_with = "whole_count")]
    pub number_of_database_entries: u64,
    #[serde(deserialize_with = "whole_count")]
    pub number_of_timesheet_entries: u64,
    #[serde(default)]
    pub invalid_entries: Vec<InvalidEntry>,
}

/// Per-field validity of one submitted row (`true` = valid).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidEntry {
    pub date: String,
    pub hours: bool,
    pub location: bool,
    pub position: bool,
}

impl InvalidEntry {
    pub fn is_fully_valid(&self) -> bool {
        self.hours && self.location && self.position
    }
}

/// Entry counts arrive as JSON numbers; `5` and `5.0` are the same count.
fn whole_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let n = f64::deserialize(deserializer)?;
    if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64 {
        Ok(n as u64)
    } else {
        Err(<D::Error as serde::de::Error>::custom(format!("invalid entry count: {n}")))
    }
}
