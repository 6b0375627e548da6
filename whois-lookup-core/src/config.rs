//! Lookup endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default lookup endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5001/api/whois";

/// Default name of the query parameter carrying the domain.
pub const DEFAULT_QUERY_PARAM: &str = "domainName";

/// Where and how the lookup request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LookupConfig {
    /// Full URL of the lookup endpoint.
    pub endpoint: String,
    /// Query parameter that carries the domain name.
    pub query_param: String,
    /// Request timeout in seconds. `None` leaves the call unbounded.
    pub timeout_secs: Option<u64>,
}

impl LookupConfig {
    /// Configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            timeout_secs: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LookupConfig::default();
        assert_eq!(config.endpoint, "http://localhost:5001/api/whois");
        assert_eq!(config.query_param, "domainName");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: LookupConfig =
            serde_json::from_str(r#"{"endpoint": "https://whois.internal/api", "timeoutSecs": 5}"#)
                .unwrap();
        assert_eq!(config.endpoint, "https://whois.internal/api");
        assert_eq!(config.query_param, DEFAULT_QUERY_PARAM);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }
}
