//! Public types exchanged with the lookup endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Registry-level facts of a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistryData {
    /// The registered domain name.
    #[serde(deserialize_with = "null_as_default")]
    pub domain_name: String,
    /// Registrar (e.g. "MarkMonitor Inc.").
    #[serde(deserialize_with = "null_as_default")]
    pub registrar_name: String,
    /// Registration creation date, as sent by the endpoint.
    #[serde(deserialize_with = "null_as_default")]
    pub created_date: String,
    /// Registration expiration date, as sent by the endpoint.
    #[serde(deserialize_with = "null_as_default")]
    pub expires_date: String,
    /// Authoritative name servers.
    #[serde(deserialize_with = "null_as_default")]
    pub name_servers: NameServers,
}

/// Name server block of [`RegistryData`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NameServers {
    /// Host names, in the order the registry lists them.
    #[serde(deserialize_with = "null_as_default")]
    pub host_names: Vec<String>,
}

/// A named party attached to the domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Snapshot of one successful lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhoisRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub registry_data: RegistryData,
    #[serde(deserialize_with = "null_as_default")]
    pub registrant: Contact,
    #[serde(deserialize_with = "null_as_default")]
    pub technical_contact: Contact,
    #[serde(deserialize_with = "null_as_default")]
    pub administrative_contact: Contact,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_email: String,
}

/// Top-level body returned by the lookup endpoint.
///
/// A body without `WhoisRecord` deserializes to `None` and is rejected by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WhoisEnvelope {
    #[serde(rename = "WhoisRecord")]
    pub whois_record: Option<WhoisRecord>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let body = r#"{
            "WhoisRecord": {
                "registryData": {
                    "domainName": "example.com",
                    "registrarName": "RESERVED-Internet Assigned Numbers Authority",
                    "createdDate": "1995-08-14T04:00:00Z",
                    "expiresDate": "2025-08-13T04:00:00Z",
                    "nameServers": { "hostNames": ["A.IANA-SERVERS.NET", "B.IANA-SERVERS.NET"] }
                },
                "registrant": { "name": "Internet Assigned Numbers Authority" },
                "technicalContact": { "name": "NOC" },
                "administrativeContact": { "name": "Domain Administrator" },
                "contactEmail": "iana@iana.org"
            }
        }"#;

        let envelope: WhoisEnvelope = serde_json::from_str(body).unwrap();
        let record = envelope.whois_record.unwrap();
        assert_eq!(record.registry_data.domain_name, "example.com");
        assert_eq!(record.registry_data.name_servers.host_names.len(), 2);
        assert_eq!(record.technical_contact.name, "NOC");
        assert_eq!(record.contact_email, "iana@iana.org");
    }

    #[test]
    fn test_missing_top_level_field_is_none() {
        let envelope: WhoisEnvelope = serde_json::from_str(r#"{"ErrorMessage": "x"}"#).unwrap();
        assert!(envelope.whois_record.is_none());
    }

    #[test]
    fn test_partial_record_defaults_nested_fields() {
        let body = r#"{"WhoisRecord": {"registryData": {"domainName": "example.org"}}}"#;
        let record = serde_json::from_str::<WhoisEnvelope>(body)
            .unwrap()
            .whois_record
            .unwrap();
        assert_eq!(record.registry_data.domain_name, "example.org");
        assert!(record.registry_data.registrar_name.is_empty());
        assert!(record.registry_data.name_servers.host_names.is_empty());
        assert!(record.registrant.name.is_empty());
    }

    #[test]
    fn test_null_nested_values_default() {
        let body = r#"{
            "WhoisRecord": {
                "registryData": {
                    "domainName": "example.com",
                    "registrarName": null,
                    "nameServers": null
                },
                "registrant": null,
                "technicalContact": { "name": null },
                "contactEmail": null
            }
        }"#;
        let record = serde_json::from_str::<WhoisEnvelope>(body)
            .unwrap()
            .whois_record
            .unwrap();
        assert_eq!(record.registry_data.domain_name, "example.com");
        assert!(record.registry_data.registrar_name.is_empty());
        assert!(record.registry_data.name_servers.host_names.is_empty());
        assert_eq!(record.registrant, Contact::default());
        assert!(record.technical_contact.name.is_empty());
        assert!(record.contact_email.is_empty());
    }

    #[test]
    fn test_null_host_names_default() {
        let body = r#"{"WhoisRecord": {"registryData": {"nameServers": {"hostNames": null}}}}"#;
        let record = serde_json::from_str::<WhoisEnvelope>(body)
            .unwrap()
            .whois_record
            .unwrap();
        assert!(record.registry_data.name_servers.host_names.is_empty());
    }

    #[test]
    fn test_null_registry_data_default() {
        let body = r#"{"WhoisRecord": {"registryData": null, "contactEmail": "a@b.c"}}"#;
        let record = serde_json::from_str::<WhoisEnvelope>(body)
            .unwrap()
            .whois_record
            .unwrap();
        assert_eq!(record.registry_data, RegistryData::default());
        assert_eq!(record.contact_email, "a@b.c");
    }
}
