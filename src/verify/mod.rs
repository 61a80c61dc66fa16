// src/verify/mod.rs

pub mod contract;
pub mod transport;

pub use contract::{RawResponse, VerificationRequest, fallback_message, interpret_response};
pub use transport::{HttpTransport, VerifyTransport};
