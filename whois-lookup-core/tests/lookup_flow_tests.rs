#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the submit → lookup → notify → render flow.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_test::{assert_err, assert_ok};
use whois_lookup_core::{
    render, HttpWhoisClient, LookupConfig, LookupController, LookupError, LookupResult,
    NotificationKind, RecordView, RecordingNotifier, VisibilityFlags, WhoisRecord, WhoisSource,
    FAILURE_MESSAGE, SUCCESS_MESSAGE,
};

const EXAMPLE_BODY: &str = r#"{
    "WhoisRecord": {
        "registryData": {
            "domainName": "example.com",
            "registrarName": "RESERVED-Internet Assigned Numbers Authority",
            "createdDate": "1995-08-14T04:00:00Z",
            "expiresDate": "2025-08-13T04:00:00Z",
            "nameServers": { "hostNames": ["a.iana-servers.net", "b.iana-servers.net"] }
        },
        "registrant": { "name": "Internet Assigned Numbers Authority" },
        "technicalContact": { "name": "NOC" },
        "administrativeContact": { "name": "Domain Administrator" },
        "contactEmail": "iana@iana.org"
    }
}"#;

// ===== Mock Implementations =====

/// Replays scripted results and counts calls.
struct ScriptedSource {
    results: Mutex<VecDeque<LookupResult<WhoisRecord>>>,
    calls: AtomicUsize,
    domains: Mutex<Vec<String>>,
}

impl ScriptedSource {
    fn new(results: Vec<LookupResult<WhoisRecord>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            calls: AtomicUsize::new(0),
            domains: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WhoisSource for ScriptedSource {
    async fn lookup(&self, domain: &str) -> LookupResult<WhoisRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.domains.lock().unwrap().push(domain.to_string());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected lookup call")
    }
}

fn record(domain: &str, registrar: &str) -> WhoisRecord {
    let mut record = WhoisRecord::default();
    record.registry_data.domain_name = domain.to_string();
    record.registry_data.registrar_name = registrar.to_string();
    record.registry_data.created_date = "2020-01-01".to_string();
    record.registry_data.expires_date = "2020-01-11".to_string();
    record
}

/// One-shot HTTP server answering a single request with `status` and `body`.
///
/// The join handle yields the raw request head.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        String::from_utf8_lossy(&head).into_owned()
    });

    (format!("http://{addr}/api/whois"), handle)
}

fn client_for(endpoint: String) -> HttpWhoisClient {
    HttpWhoisClient::new(LookupConfig {
        endpoint,
        ..LookupConfig::default()
    })
    .unwrap()
}

// ===== Controller + mock source =====

#[tokio::test]
async fn test_each_submission_fires_exactly_one_notification() {
    let source = ScriptedSource::new(vec![
        Ok(record("a.com", "A")),
        Err(LookupError::Network("reset".to_string())),
        Err(LookupError::Status(500)),
        Ok(record("b.com", "B")),
    ]);
    let mut controller = LookupController::new();
    let mut notifier = RecordingNotifier::new();
    controller.set_query("example.com");

    for expected in 1..=4 {
        assert_ok!(controller.submit(&source, &mut notifier).await);
        assert_eq!(notifier.notifications.len(), expected);
    }

    assert_eq!(notifier.count(NotificationKind::Success), 2);
    assert_eq!(notifier.count(NotificationKind::Failure), 2);
    assert_eq!(notifier.notifications[0].message, SUCCESS_MESSAGE);
    assert_eq!(notifier.notifications[1].message, FAILURE_MESSAGE);
    assert_eq!(source.calls(), 4);
}

#[tokio::test]
async fn test_failed_fetch_keeps_displayed_record() {
    let source = ScriptedSource::new(vec![
        Ok(record("kept.com", "Keeper")),
        Err(LookupError::MalformedResponse("Missing WhoisRecord field".to_string())),
    ]);
    let mut controller = LookupController::new();
    let mut notifier = RecordingNotifier::new();
    controller.set_query("kept.com");

    assert_ok!(controller.submit(&source, &mut notifier).await);
    let before = controller.record().cloned();

    controller.set_query("other.com");
    assert_ok!(controller.submit(&source, &mut notifier).await);

    assert_eq!(controller.record().cloned(), before);
    assert!(matches!(
        controller.last_error(),
        Some(LookupError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_empty_query_never_reaches_the_source() {
    let source = ScriptedSource::new(Vec::new());
    let mut controller = LookupController::new();
    let mut notifier = RecordingNotifier::new();

    let err = assert_err!(controller.submit(&source, &mut notifier).await);
    assert_eq!(err, LookupError::EmptyInput);
    assert_eq!(source.calls(), 0);
    assert!(notifier.notifications.is_empty());
}

#[tokio::test]
async fn test_whitespace_query_is_sent_and_notifies_once() {
    let source = ScriptedSource::new(vec![Err(LookupError::Status(400))]);
    let mut controller = LookupController::new();
    let mut notifier = RecordingNotifier::new();
    controller.set_query("   ");

    assert_ok!(controller.submit(&source, &mut notifier).await);
    assert_eq!(*source.domains.lock().unwrap(), vec!["   ".to_string()]);
    assert_eq!(notifier.notifications.len(), 1);
    assert_eq!(notifier.notifications[0].message, FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_query_is_sent_as_typed() {
    let source = ScriptedSource::new(vec![Ok(record("example.com", "X"))]);
    let mut controller = LookupController::new();
    let mut notifier = RecordingNotifier::new();
    controller.set_query("  example.com\t");

    assert_ok!(controller.submit(&source, &mut notifier).await);
    assert_eq!(
        *source.domains.lock().unwrap(),
        vec!["  example.com\t".to_string()]
    );
}

#[tokio::test]
async fn test_toggling_visibility_does_not_refetch() {
    let source = ScriptedSource::new(vec![Ok(record("example.com", "Registrar"))]);
    let mut controller = LookupController::new();
    let mut notifier = RecordingNotifier::new();
    controller.set_query("example.com");
    assert_ok!(controller.submit(&source, &mut notifier).await);

    let mut flags = VisibilityFlags::default();
    let before = controller.record().cloned();
    flags.toggle_registry();
    flags.toggle_contact();
    flags.toggle_contact();
    let _ = render(controller.record(), flags);

    assert_eq!(source.calls(), 1);
    assert_eq!(controller.record().cloned(), before);
}

// ===== HTTP client against a local server =====

#[tokio::test]
async fn test_http_lookup_end_to_end_scenario() {
    let (endpoint, server) = serve_once("200 OK", EXAMPLE_BODY).await;
    let client = client_for(endpoint);
    let mut controller = LookupController::new();
    let mut notifier = RecordingNotifier::new();
    controller.set_query("example.com");

    assert_ok!(controller.submit(&client, &mut notifier).await);

    let request_head = server.await.unwrap();
    assert!(
        request_head.starts_with("GET /api/whois?domainName=example.com HTTP/1.1"),
        "unexpected request: {request_head}"
    );
    assert_eq!(notifier.count(NotificationKind::Success), 1);

    let mut flags = VisibilityFlags::default();
    let RecordView::Record { domain, contact } = render(controller.record(), flags) else {
        panic!("expected both sections");
    };
    let domain = domain.table().unwrap();
    assert_eq!(
        domain.registrar,
        "RESERVED-Internet Assigned Numbers Authority"
    );
    assert_eq!(domain.registration_date, "August 14, 1995");
    assert_eq!(domain.expiration_date, "August 13, 2025");
    assert_eq!(domain.estimated_age, "10957 Days");
    assert_eq!(contact.table().unwrap().contact_email, "iana@iana.org");

    flags.toggle_registry();
    let RecordView::Record { domain, contact } = render(controller.record(), flags) else {
        panic!("expected both sections");
    };
    assert!(domain.is_hidden());
    assert_eq!(
        contact.table().unwrap().registrant_name,
        "Internet Assigned Numbers Authority"
    );
}

#[tokio::test]
async fn test_http_missing_record_field_is_malformed() {
    let (endpoint, server) = serve_once("200 OK", r#"{"ErrorMessage": {"msg": "quota"}}"#).await;
    let client = client_for(endpoint);

    let err = assert_err!(client.lookup("example.com").await);
    server.await.unwrap();
    assert!(matches!(err, LookupError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_http_null_nested_values_are_success() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"WhoisRecord": {"registryData": {"domainName": "example.com", "nameServers": null}, "contactEmail": null}}"#,
    )
    .await;
    let client = client_for(endpoint);
    let mut controller = LookupController::new();
    let mut notifier = RecordingNotifier::new();
    controller.set_query("example.com");

    assert_ok!(controller.submit(&client, &mut notifier).await);
    server.await.unwrap();
    assert_eq!(notifier.count(NotificationKind::Success), 1);
    assert_eq!(notifier.count(NotificationKind::Failure), 0);

    let RecordView::Record { domain, contact } =
        render(controller.record(), VisibilityFlags::default())
    else {
        panic!("expected both sections");
    };
    assert_eq!(domain.table().unwrap().host_names, "");
    assert_eq!(contact.table().unwrap().contact_email, "");
}

#[tokio::test]
async fn test_http_non_json_body_is_malformed() {
    let (endpoint, server) = serve_once("200 OK", "<html>maintenance</html>").await;
    let client = client_for(endpoint);

    let err = assert_err!(client.lookup("example.com").await);
    server.await.unwrap();
    assert!(matches!(err, LookupError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_http_non_success_status() {
    let (endpoint, server) = serve_once("503 Service Unavailable", "{}").await;
    let client = client_for(endpoint);

    let err = assert_err!(client.lookup("example.com").await);
    server.await.unwrap();
    assert_eq!(err, LookupError::Status(503));
}

#[tokio::test]
async fn test_http_connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{addr}/api/whois"));
    let err = assert_err!(client.lookup("example.com").await);
    assert!(matches!(err, LookupError::Network(_)));
}

#[tokio::test]
async fn test_custom_query_param() {
    let (endpoint, server) = serve_once("200 OK", EXAMPLE_BODY).await;
    let client = HttpWhoisClient::new(LookupConfig {
        endpoint,
        query_param: "domain".to_string(),
        timeout_secs: Some(10),
    })
    .unwrap();

    assert_ok!(client.lookup("iana.org").await);
    let request_head = server.await.unwrap();
    assert!(request_head.starts_with("GET /api/whois?domain=iana.org "));
}
