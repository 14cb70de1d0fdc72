// src/core/models.rs

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

// --- Scan Categories ---

/// The kind of check requested from the scanning service.
///
/// The lowercase form (`"dns"`, `"ssl"`, ...) is what travels in the request
/// path, untouched. `All` asks the service for every scanner at once.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ScanType {
    #[default]
    All,
    Dns,
    Ssl,
    Header,
    Subdomain,
    Sensitive,
}

impl ScanType {
    /// Returns the category following this one, wrapping around at the end.
    pub fn next(self) -> Self {
        match self {
            ScanType::All => ScanType::Dns,
            ScanType::Dns => ScanType::Ssl,
            ScanType::Ssl => ScanType::Header,
            ScanType::Header => ScanType::Subdomain,
            ScanType::Subdomain => ScanType::Sensitive,
            ScanType::Sensitive => ScanType::All,
        }
    }

    /// Returns the category preceding this one, wrapping around at the start.
    pub fn previous(self) -> Self {
        match self {
            ScanType::All => ScanType::Sensitive,
            ScanType::Dns => ScanType::All,
            ScanType::Ssl => ScanType::Dns,
            ScanType::Header => ScanType::Ssl,
            ScanType::Subdomain => ScanType::Header,
            ScanType::Sensitive => ScanType::Subdomain,
        }
    }
}

// --- Scan Results ---

/// One scanner's finding against one domain, as reported by the scanning service.
///
/// Values only come out of the scan client, by deserializing the service's
/// response. Every field is required; a payload missing one is rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanResult {
    scanner: String,
    domain: String,
    result: String,
}

impl ScanResult {
    /// Name of the scanner that produced this entry (e.g. "dns").
    pub fn scanner(&self) -> &str {
        &self.scanner
    }

    /// The domain that was scanned.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The scanner's free-form textual output.
    pub fn result(&self) -> &str {
        &self.result
    }
}

// Wire shape of a successful scan response: the service sends a bare object
// for single-scanner requests and an array for `all`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ScanPayload {
    Many(Vec<ScanResult>),
    One(ScanResult),
}

impl ScanPayload {
    pub(crate) fn into_results(self) -> Vec<ScanResult> {
        match self {
            ScanPayload::Many(results) => results,
            ScanPayload::One(result) => vec![result],
        }
    }
}

// --- Health Probe ---

/// Body of the scanning service's `/health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn scan_type_uses_lowercase_wire_names() {
        let names: Vec<String> = ScanType::iter().map(|t| t.to_string()).collect();
        assert_eq!(names, ["all", "dns", "ssl", "header", "subdomain", "sensitive"]);
        assert_eq!(ScanType::Subdomain.as_ref(), "subdomain");
    }

    #[test]
    fn scan_type_parses_known_names_only() {
        assert_eq!(ScanType::from_str("sensitive").unwrap(), ScanType::Sensitive);
        assert!(ScanType::from_str("ports").is_err());
    }

    #[test]
    fn scan_type_cycles_in_both_directions() {
        assert_eq!(ScanType::All.next(), ScanType::Dns);
        assert_eq!(ScanType::Sensitive.next(), ScanType::All);
        assert_eq!(ScanType::All.previous(), ScanType::Sensitive);
        assert_eq!(ScanType::Ssl.previous(), ScanType::Dns);
    }

    #[test]
    fn scan_type_cycle_follows_declaration_order() {
        let order: Vec<ScanType> = ScanType::iter().collect();
        for (i, t) in order.iter().enumerate() {
            assert_eq!(t.next(), order[(i + 1) % order.len()]);
            assert_eq!(t.next().previous(), *t);
        }
    }

    #[test]
    fn scan_result_requires_every_field() {
        let missing = r#"{"scanner":"dns","domain":"daviani.dev"}"#;
        assert!(serde_json::from_str::<ScanResult>(missing).is_err());
    }

    #[test]
    fn health_status_reports_ok() {
        let health: HealthStatus = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(health.is_ok());
        let degraded = HealthStatus { status: "degraded".into() };
        assert!(!degraded.is_ok());
    }
}
