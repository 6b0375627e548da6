//! Outbound lookup call.
//!
//! [`WhoisSource`] is the seam between the controller and the network; the
//! front end holds an `Arc<dyn WhoisSource>` and tests substitute their own.

use async_trait::async_trait;

use crate::config::LookupConfig;
use crate::error::{LookupError, LookupResult};
use crate::types::{WhoisEnvelope, WhoisRecord};

/// Anything able to resolve a domain name into a [`WhoisRecord`].
#[async_trait]
pub trait WhoisSource: Send + Sync {
    /// Perform exactly one lookup. No retries.
    async fn lookup(&self, domain: &str) -> LookupResult<WhoisRecord>;
}

/// `GET {endpoint}?{query_param}={domain}` against the configured lookup endpoint.
pub struct HttpWhoisClient {
    client: reqwest::Client,
    config: LookupConfig,
}

impl HttpWhoisClient {
    /// Build a client for the given endpoint configuration.
    pub fn new(config: LookupConfig) -> LookupResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LookupError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }
}

#[async_trait]
impl WhoisSource for HttpWhoisClient {
    async fn lookup(&self, domain: &str) -> LookupResult<WhoisRecord> {
        log::debug!("[whois] GET {} {}={domain}", self.config.endpoint, self.config.query_param);

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[(self.config.query_param.as_str(), domain)])
            .send()
            .await
            .map_err(|e| LookupError::Network(format!("Request failed: {e}")))?;

        let status = response.status();
        log::debug!("[whois] Response Status: {}", status.as_u16());
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let envelope = response.json::<WhoisEnvelope>().await.map_err(|e| {
            if e.is_decode() {
                LookupError::MalformedResponse(format!("Failed to parse response: {e}"))
            } else {
                LookupError::Network(format!("Failed to read response body: {e}"))
            }
        })?;

        extract_record(envelope)
    }
}

/// Extract the record from a response body.
///
/// Bodies that are not JSON, or that lack the top-level `WhoisRecord`, are rejected.
pub fn parse_lookup_body(body: &str) -> LookupResult<WhoisRecord> {
    let envelope: WhoisEnvelope = serde_json::from_str(body)
        .map_err(|e| LookupError::MalformedResponse(format!("Failed to parse response: {e}")))?;

    extract_record(envelope)
}

fn extract_record(envelope: WhoisEnvelope) -> LookupResult<WhoisRecord> {
    envelope
        .whois_record
        .ok_or_else(|| LookupError::MalformedResponse("Missing WhoisRecord field".to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup_body_ok() {
        let record = parse_lookup_body(
            r#"{"WhoisRecord": {"registryData": {"domainName": "example.com"}, "contactEmail": "a@b.c"}}"#,
        )
        .unwrap();
        assert_eq!(record.registry_data.domain_name, "example.com");
        assert_eq!(record.contact_email, "a@b.c");
    }

    #[test]
    fn test_parse_lookup_body_accepts_null_nested_values() {
        let record = parse_lookup_body(
            r#"{"WhoisRecord": {"registryData": {"domainName": "example.com", "nameServers": null}, "contactEmail": null}}"#,
        )
        .unwrap();
        assert_eq!(record.registry_data.domain_name, "example.com");
        assert!(record.registry_data.name_servers.host_names.is_empty());
        assert!(record.contact_email.is_empty());
    }

    #[test]
    fn test_parse_lookup_body_missing_field() {
        let err = parse_lookup_body(r#"{"record": {}}"#).unwrap_err();
        assert_eq!(
            err,
            LookupError::MalformedResponse("Missing WhoisRecord field".to_string())
        );
    }

    #[test]
    fn test_parse_lookup_body_null_field() {
        let err = parse_lookup_body(r#"{"WhoisRecord": null}"#).unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_lookup_body_not_json() {
        let err = parse_lookup_body("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_lookup_body_not_an_object() {
        let err = parse_lookup_body("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse(_)));
    }

    #[test]
    fn test_client_keeps_config() {
        let config = LookupConfig {
            timeout_secs: Some(3),
            ..LookupConfig::default()
        };
        let client = HttpWhoisClient::new(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
    }
}
