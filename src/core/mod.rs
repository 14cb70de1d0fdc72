// src/core/mod.rs

/// Data exchanged with the scanning service: `ScanResult`, `ScanType`,
/// `HealthStatus`.
pub mod models;

/// Error types for domain validation and scan requests.
pub mod error;

/// Offline checks deciding whether a domain may be submitted.
pub mod validator;

/// HTTP client for the remote scanning service.
pub mod client;
