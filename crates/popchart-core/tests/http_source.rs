// File: crates/popchart-core/tests/http_source.rs
// Purpose: `HttpSource` against a local tiny_http server: request shape, status and body handling.

use std::thread;
use std::time::Duration;

use popchart_core::fetch::FetchError;
use popchart_core::{BarchartQuery, HttpSource, PopulationSource, Region};

/// Serve exactly one request with `status`/`body`; the join handle yields the requested URL.
fn serve_once(status: u16, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test server");
    let addr = server.server_addr().to_ip().expect("tcp listener");
    let handle = thread::spawn(move || {
        let request = server.recv().expect("one request");
        let url = request.url().to_string();
        let response = tiny_http::Response::from_string(body).with_status_code(status);
        request.respond(response).expect("respond");
        url
    });
    (format!("http://{addr}/testapi"), handle)
}

fn source(base: &str) -> HttpSource {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    HttpSource::with_client(base, client)
}

#[test]
fn sends_expected_query_and_decodes_rows() {
    let (base, server) = serve_once(
        200,
        r#"[{"Country name":"China","Population":1153704252,"Region":"Asia"},
            {"Country name":"United States","Population":248083732,"Region":"North America"}]"#,
    );
    let query = BarchartQuery::from_filters(1990, &[Region::Europe, Region::SouthAmerica], 12);
    let rows = source(&base).fetch(&query).expect("rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].region, "North America");

    let url = server.join().unwrap();
    let parsed = reqwest::Url::parse(&format!("http://localhost{url}")).unwrap();
    assert_eq!(parsed.path(), "/testapi/api/barchart");
    let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    let expect = [
        ("limit", "12"),
        ("sort", "Population"),
        ("sort_type", "-1"),
        ("filter", "Year"),
        ("filter_value", "1990"),
        ("disabled_regions", "Europe,South America"),
    ];
    let expect: Vec<(String, String)> = expect.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    assert_eq!(pairs, expect);
}

#[test]
fn non_success_status_is_an_error() {
    let (base, server) = serve_once(500, "boom");
    let err = source(&base).fetch(&BarchartQuery::from_filters(1950, &[], 12)).unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500, .. }), "{err}");
    server.join().unwrap();
}

#[test]
fn empty_array_is_reported_as_empty() {
    let (base, server) = serve_once(200, "[]");
    let err = source(&base).fetch(&BarchartQuery::from_filters(1950, &[], 12)).unwrap_err();
    assert!(matches!(err, FetchError::Empty { .. }));
    server.join().unwrap();
}

#[test]
fn unreachable_host_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let err = source(&format!("http://127.0.0.1:{port}")).fetch(&BarchartQuery::from_filters(1950, &[], 12)).unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}

#[test]
fn malformed_base_is_an_invalid_url_error() {
    let err = source("no scheme here").fetch(&BarchartQuery::from_filters(1950, &[], 12)).unwrap_err();
    match err {
        FetchError::InvalidUrl(inner) => assert_eq!(inner.base, "no scheme here"),
        other => panic!("expected InvalidUrl, got {other}"),
    }
}
