//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and either an expected result or an expected error message. A case whose
//! `expected_request` is null must be rejected while building. Comparing
//! parsed JSON (not raw strings) avoids false negatives from field-ordering
//! differences.

use arguments_core::{
    ApiError, Argument, ArgumentsClient, HttpMethod, HttpRequest, HttpResponse, RequestMode,
};
use serde::Serialize;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

fn client() -> ArgumentsClient {
    ArgumentsClient::new(BASE_URL)
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PATCH" => HttpMethod::Patch,
        other => panic!("unknown method: {other}"),
    }
}

fn parse_mode(s: &str) -> RequestMode {
    match s {
        "default" => RequestMode::Default,
        "cors" => RequestMode::Cors,
        other => panic!("unknown mode: {other}"),
    }
}

fn string_pairs(value: &Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");
    assert_eq!(req.mode, parse_mode(expected["mode"].as_str().unwrap()), "{name}: mode");
    assert_eq!(req.headers, string_pairs(&expected["headers"]), "{name}: headers");

    match req.body.as_deref() {
        Some(body) => {
            let body: Value = serde_json::from_str(body).unwrap();
            assert_eq!(body, expected["body"], "{name}: body");
        }
        None => assert!(expected["body"].is_null(), "{name}: request has no body"),
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: string_pairs(&sim["headers"]),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn check_outcome<T: Serialize>(name: &str, case: &Value, outcome: Result<T, ApiError>) {
    match (outcome, case.get("expected_error")) {
        (Err(err), Some(expected)) => {
            assert_eq!(err.to_string(), expected.as_str().unwrap(), "{name}: error");
        }
        (Ok(result), None) => {
            let result = serde_json::to_value(result).unwrap();
            assert_eq!(result, case["expected_result"], "{name}: parsed result");
        }
        (Err(err), None) => panic!("{name}: unexpected error {err}"),
        (Ok(_), Some(expected)) => panic!("{name}: expected error {expected}"),
    }
}

/// Drives one case: build (which may fail), then check the request and parse
/// the simulated response.
fn run_case<T: Serialize>(
    case: &Value,
    build: impl FnOnce() -> Result<HttpRequest, ApiError>,
    parse: impl FnOnce(HttpResponse) -> Result<T, ApiError>,
) {
    let name = case["name"].as_str().unwrap();
    let expected_req = &case["expected_request"];

    let req = match build() {
        Ok(req) => req,
        Err(err) => {
            assert!(expected_req.is_null(), "{name}: build failed: {err}");
            check_outcome::<T>(name, case, Err(err));
            return;
        }
    };
    assert!(!expected_req.is_null(), "{name}: build should have failed");
    check_request(name, &req, expected_req);
    check_outcome(name, case, parse(simulated_response(case)));
}

// ---------------------------------------------------------------------------
// Get one
// ---------------------------------------------------------------------------

#[test]
fn get_one_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/get_one.json")) {
        let id = case["input"]["id"].as_u64().unwrap();
        let version = case["input"]["version"].as_u64().map(|v| v as u16);
        run_case(
            &case,
            || Ok(c.build_get_one(id, version)),
            |response| c.parse_get_one(response),
        );
    }
}

// ---------------------------------------------------------------------------
// Get all
// ---------------------------------------------------------------------------

#[test]
fn get_all_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/get_all.json")) {
        let conclusion = case["input"]["conclusion"].as_str().unwrap().to_string();
        run_case(
            &case,
            || c.build_get_all(&conclusion),
            |response| c.parse_get_all(response),
        );
    }
}

// ---------------------------------------------------------------------------
// Save
// ---------------------------------------------------------------------------

#[test]
fn save_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/save.json")) {
        let input: Argument = serde_json::from_value(case["input"].clone()).unwrap();
        run_case(&case, || c.build_save(&input), |response| c.parse_save(response));
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let id = case["input_id"].as_u64().unwrap();
        let input: Argument = serde_json::from_value(case["input"].clone()).unwrap();
        run_case(
            &case,
            || c.build_update(id, &input),
            |response| c.parse_update(response),
        );
    }
}
