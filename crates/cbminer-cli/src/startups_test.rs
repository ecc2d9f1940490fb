use super::*;

use std::fs;
use std::path::PathBuf;

use cbminer_crunchbase::CrunchbaseClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a config rooted at a fresh per-test temp directory and writes
/// the given name list into it.
fn test_config(test_name: &str, base_names: &str) -> cbminer_core::AppConfig {
    let root = std::env::temp_dir().join(format!("cbminer-{}-{test_name}", std::process::id()));
    let input_dir = root.join("input");
    let output_dir = root.join("output");
    fs::create_dir_all(&input_dir).expect("create input dir");
    fs::create_dir_all(&output_dir).expect("create output dir");
    fs::write(input_dir.join("company_names.txt"), base_names).expect("write name list");

    cbminer_core::AppConfig {
        api_key: "test-key".to_string(),
        input_dir,
        output_dir,
        company_names_file: "company_names.txt".to_string(),
        vc_names_file: "vc_permalinks.txt".to_string(),
        startup_output_file: "startups.csv".to_string(),
        investor_output_file: "investors.csv".to_string(),
        start_year: 2011,
        round_types: vec!["seed".to_string(), "angel".to_string()],
        request_timeout_secs: 30,
        log_level: "info".to_string(),
    }
}

async fn mock_search(server: &MockServer, query: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/search.js"))
        .and(query_param("query", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn pipeline_writes_rows_for_qualified_companies_only() {
    let server = MockServer::start().await;

    // "Acme" qualifies with one seed round; "Nobody" has no search hits.
    mock_search(
        &server,
        "Acme",
        serde_json::json!({
            "total": 1,
            "results": [{ "name": "Acme", "namespace": "company", "permalink": "acme" }]
        }),
    )
    .await;
    mock_search(&server, "Nobody", serde_json::json!({ "total": 0, "results": [] })).await;

    Mock::given(method("GET"))
        .and(path("/company/acme.js"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Acme",
            "crunchbase_url": "http://www.crunchbase.com/company/acme",
            "permalink": "acme",
            "category_code": "web",
            "funding_rounds": [
                { "round_code": "seed", "funded_year": 2012, "raised_amount": 500000.0,
                  "investments": [{ "financial_org": { "permalink": "fund-x" } }] },
                { "round_code": "series-a", "funded_year": 2009 }
            ]
        })))
        .mount(&server)
        .await;

    let config = test_config("startups-qualified", "Acme\nNobody\n");
    let client = CrunchbaseClient::with_base_url("test-key", 30, &server.uri())
        .expect("client construction should not fail");

    run_with_client(&config, &client)
        .await
        .expect("pipeline should succeed");

    let report: PathBuf = config.output_path(&config.startup_output_file);
    let rendered = fs::read_to_string(report).expect("report should exist");
    let lines: Vec<&str> = rendered.lines().collect();

    // One row: Acme's 2012 seed round. The 2009 series-a is re-filtered
    // out, and Nobody produced no rows at all.
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("\"Acme\""));
    assert!(lines[0].contains("\"2012\""));
    assert!(lines[0].contains("\"seed\""));
    assert!(lines[0].contains("\"fund-x\""));
    assert!(!rendered.contains("series-a"));
}

#[tokio::test]
async fn pipeline_fails_when_name_list_is_missing() {
    let server = MockServer::start().await;

    let mut config = test_config("startups-missing-list", "");
    config.company_names_file = "does_not_exist.txt".to_string();
    let client = CrunchbaseClient::with_base_url("test-key", 30, &server.uri())
        .expect("client construction should not fail");

    let result = run_with_client(&config, &client).await;

    assert!(result.is_err(), "missing name list must be fatal");
}

#[tokio::test]
async fn pipeline_survives_provider_errors_per_name() {
    let server = MockServer::start().await;

    // Search blows up for every name; the run still completes and writes
    // an empty report.
    Mock::given(method("GET"))
        .and(path("/search.js"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = test_config("startups-provider-error", "Acme\n");
    let client = CrunchbaseClient::with_base_url("test-key", 30, &server.uri())
        .expect("client construction should not fail");

    run_with_client(&config, &client)
        .await
        .expect("per-name provider errors must not abort the run");

    let rendered = fs::read_to_string(config.output_path(&config.startup_output_file))
        .expect("report should exist");
    assert!(rendered.is_empty());
}
