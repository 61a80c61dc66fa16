// src/export/mod.rs

pub mod template;

use crate::ui::messages::success;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}
