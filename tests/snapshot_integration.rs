//! Integration tests driving the API client and extraction engine against a
//! mocked Zabbix server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zbx_report::api::Client;
use zbx_report::extract::{MetricSpec, extract};
use zbx_report::reports::{ReportTable, generate_xlsx};

async fn mock_zabbix_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api_jsonrpc.php"))
        .and(body_partial_json(json!({"method": "apiinfo.version"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "result": "7.0.0",
            "id": 1
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api_jsonrpc.php"))
        .and(body_partial_json(json!({"method": "user.login"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "result": "0424bd59b807674191e7d77572075f33",
            "id": 2
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api_jsonrpc.php"))
        .and(body_partial_json(json!({"method": "host.get"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "result": [
                {
                    "hostid": "10084",
                    "name": "web-01",
                    "status": "0",
                    "available": "1",
                    "interfaces": [
                        {"interfaceid": "1", "ip": "10.0.0.5", "type": "1"}
                    ],
                    "items": [
                        {"itemid": "1", "key_": "system.cpu.load", "lastvalue": "0.155", "state": "0", "error": ""},
                        {"itemid": "2", "key_": "vm.memory.size[total]", "lastvalue": "8589934592", "state": "0", "error": ""},
                        {"itemid": "3", "key_": "system.uptime", "lastvalue": "172800", "state": "0", "error": ""}
                    ]
                },
                {
                    "hostid": "10085",
                    "name": "printer-01",
                    "status": "0",
                    "available": "2",
                    "interfaces": [
                        {"interfaceid": "2", "ip": "10.0.0.77", "type": "2"}
                    ]
                }
            ],
            "id": 3
        })))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn test_snapshot_against_mock_server() {
    let server = mock_zabbix_server().await;

    let mut client = Client::new(&server.uri()).expect("client should build from mock URI");

    let version = client.api_version().await.expect("version call should succeed");
    assert_eq!(version, "7.0.0");

    client.login("reporter", "secret").await.expect("login should succeed");

    let hosts = client.get_hosts().await.expect("host fetch should succeed");
    assert_eq!(hosts.len(), 2);

    let spec = MetricSpec::system_defaults();
    let rows: Vec<_> = hosts.iter().map(|host| extract(host, &spec)).collect();

    // Output row order equals inventory order.
    assert_eq!(rows[0].get("Hostname"), Some("web-01"));
    assert_eq!(rows[1].get("Hostname"), Some("printer-01"));

    // Normalized metric values for the fully-populated host.
    assert_eq!(rows[0].get("IP Address"), Some("10.0.0.5"));
    assert_eq!(rows[0].get("CPU Usage"), Some("0.15%"));
    assert_eq!(rows[0].get("Total Memory"), Some("8.00 GB"));
    assert_eq!(rows[0].get("System Uptime"), Some("2.00 days"));
    assert_eq!(rows[0].get("Free Memory"), Some("N/A"));

    // The host without an agent interface has no IP column at all, and every
    // metric degrades to the placeholder.
    assert!(rows[1].get("IP Address").is_none());
    assert_eq!(rows[1].get("CPU Usage"), Some("N/A"));
    assert_eq!(rows[1].len(), 1 + spec.len());
}

#[tokio::test]
async fn test_excel_report_written_to_disk() {
    let server = mock_zabbix_server().await;

    let mut client = Client::new(&server.uri()).expect("client should build from mock URI");
    client.login("reporter", "secret").await.expect("login should succeed");
    let hosts = client.get_hosts().await.expect("host fetch should succeed");

    let spec = MetricSpec::system_defaults();
    let table = ReportTable::from_rows(hosts.iter().map(|host| extract(host, &spec)).collect());

    let dir = tempfile::tempdir().expect("temp dir should be created");
    let report_path = dir.path().join("zabbix_system_metrics_test.xlsx");
    let mut file = std::fs::File::create(&report_path).expect("report file should be created");
    generate_xlsx(&table, &mut file).expect("report generation should succeed");

    let bytes = std::fs::read(&report_path).expect("report file should be readable");
    assert!(bytes.len() > 1000, "Excel output should be substantial");
    assert_eq!(&bytes[0..2], b"PK", "Excel file should be a valid ZIP archive");
}

#[tokio::test]
async fn test_login_rejection_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api_jsonrpc.php"))
        .and(body_partial_json(json!({"method": "user.login"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "error": {
                "code": -32602,
                "message": "Invalid params.",
                "data": "Incorrect user name or password or account is temporarily blocked."
            },
            "id": 1
        })))
        .mount(&server)
        .await;

    let mut client = Client::new(&server.uri()).expect("client should build from mock URI");

    let error = client.login("reporter", "wrong").await.expect_err("login should be rejected");
    let message = error.to_string();
    assert!(message.contains("user.login"));
    assert!(message.contains("-32602"));
}

#[tokio::test]
async fn test_host_fetch_requires_login() {
    let server = mock_zabbix_server().await;

    let client = Client::new(&server.uri()).expect("client should build from mock URI");
    assert!(client.get_hosts().await.is_err());
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api_jsonrpc.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).expect("client should build from mock URI");
    assert!(client.api_version().await.is_err());
}
