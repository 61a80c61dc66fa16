pub mod evaluator;
pub mod log;
pub mod notification;
pub mod row;
pub mod session;

pub use evaluator::{ReportEvaluation, evaluate};
pub use notification::{Notification, NotificationKind};
pub use session::Session;
