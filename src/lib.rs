// src/lib.rs

//! Client side of a remote domain scanning service: domain validation and
//! the scan request/response contract.

pub mod config;
pub mod core;
pub mod logging;

pub use crate::core::client::{ScanClient, parse_scan_payload};
pub use crate::core::error::{ScanError, ValidationError};
pub use crate::core::models::{HealthStatus, ScanResult, ScanType};
pub use crate::core::validator::{
    has_recognized_public_suffix, is_syntactically_valid_domain, validate_domain,
};
