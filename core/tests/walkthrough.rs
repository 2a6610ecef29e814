//! Walkthrough behavior tests against a scripted transport.
//!
//! # Design
//! `ScriptedTransport` replays canned responses in order and records every
//! request it is handed, so step ordering, target URLs, request bodies, the
//! exact report text, and the short-circuit behavior are all assertable
//! without any network involved.

use std::collections::VecDeque;
use std::io::{self, Write};

use especies_core::{
    walkthrough, ApiError, HttpMethod, HttpRequest, HttpResponse, HttpTransport, SpeciesClient,
    WalkthroughError, SAMPLE_NAME, UPDATED_NAME,
};

const BASE_URL: &str = "http://localhost:7011";

struct ScriptedTransport {
    responses: VecDeque<Result<HttpResponse, ApiError>>,
    requests: Vec<HttpRequest>,
}

impl ScriptedTransport {
    fn new(script: Vec<Result<HttpResponse, ApiError>>) -> Self {
        Self {
            responses: script.into(),
            requests: Vec::new(),
        }
    }
}

impl HttpTransport for ScriptedTransport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.push(request.clone());
        self.responses
            .pop_front()
            .expect("walkthrough issued more requests than the script expected")
    }
}

fn ok(status: u16, body: &str) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse {
        status,
        body: body.to_string(),
    })
}

fn run_script(
    script: Vec<Result<HttpResponse, ApiError>>,
) -> (ScriptedTransport, String, Result<(), WalkthroughError>) {
    let client = SpeciesClient::new(BASE_URL, "api/Especies");
    let mut transport = ScriptedTransport::new(script);
    let mut out = Vec::new();
    let result = walkthrough::run(&client, &mut transport, &mut out);
    (transport, String::from_utf8(out).unwrap(), result)
}

#[test]
fn full_walkthrough_reports_every_step() {
    let (transport, report, result) = run_script(vec![
        ok(200, r#"{"success":true,"data":[]}"#),
        ok(
            200,
            r#"{"success":true,"message":"Especie creada","data":{"code":42,"commonName":"Lobo Gris"}}"#,
        ),
        ok(
            200,
            r#"{"success":true,"message":"Especie actualizada","data":{"code":42,"commonName":"Lobo Gris Actualizado"}}"#,
        ),
        ok(200, ""),
    ]);

    result.unwrap();

    let methods: Vec<HttpMethod> = transport.requests.iter().map(|r| r.method).collect();
    assert_eq!(
        methods,
        [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete
        ]
    );

    let urls: Vec<&str> = transport.requests.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        urls,
        [
            "http://localhost:7011/api/Especies",
            "http://localhost:7011/api/Especies",
            "http://localhost:7011/api/Especies/42",
            "http://localhost:7011/api/Especies/42",
        ]
    );

    let post_body: serde_json::Value =
        serde_json::from_str(transport.requests[1].body.as_deref().unwrap()).unwrap();
    assert_eq!(post_body["code"], 0);
    assert_eq!(post_body["commonName"], SAMPLE_NAME);

    let put_body: serde_json::Value =
        serde_json::from_str(transport.requests[2].body.as_deref().unwrap()).unwrap();
    assert_eq!(put_body["code"], 42);
    assert_eq!(put_body["commonName"], UPDATED_NAME);

    assert!(transport.requests[3].body.is_none());

    let expected = "\
--- 1. Obtener todas las especies (GET) ---
Especies obtenidas: 0

--- 2. Inserción de una nueva especie (POST) ---
Especie creada con Codigo: 42 y NombreComun: Lobo Gris

--- 3. Actualización de la especie (PUT) ---
Especie actualizada a NombreComun: Lobo Gris Actualizado

--- 4. Eliminación de la especie (DELETE) ---
Especie con Codigo: 42 eliminada.
";
    assert_eq!(report, expected);
}

#[test]
fn list_count_matches_returned_items() {
    let list_body = r#"{"success":true,"message":"ok","data":[
        {"code":1,"commonName":"Puma"},
        {"code":2,"commonName":"Jaguar"},
        {"code":3,"commonName":"Cóndor"}
    ]}"#;
    let (_, report, result) = run_script(vec![
        ok(200, list_body),
        ok(
            200,
            r#"{"success":true,"data":{"code":4,"commonName":"Lobo Gris"}}"#,
        ),
        ok(
            200,
            r#"{"success":true,"data":{"code":4,"commonName":"Lobo Gris Actualizado"}}"#,
        ),
        ok(200, ""),
    ]);

    result.unwrap();
    assert!(report.contains("Especies obtenidas: 3"));
}

#[test]
fn null_list_data_reports_zero() {
    let (_, report, result) = run_script(vec![
        ok(200, r#"{"success":true,"message":"sin registros","data":null}"#),
        ok(
            200,
            r#"{"success":true,"data":{"code":1,"commonName":"Lobo Gris"}}"#,
        ),
        ok(
            200,
            r#"{"success":true,"data":{"code":1,"commonName":"Lobo Gris Actualizado"}}"#,
        ),
        ok(200, ""),
    ]);

    result.unwrap();
    assert!(report.contains("Especies obtenidas: 0"));
}

#[test]
fn update_and_delete_target_created_code() {
    let (transport, _, result) = run_script(vec![
        ok(200, r#"{"success":true,"data":[]}"#),
        ok(
            200,
            r#"{"success":true,"data":{"code":99,"commonName":"Lobo Gris"}}"#,
        ),
        ok(
            200,
            r#"{"success":true,"data":{"code":99,"commonName":"Lobo Gris Actualizado"}}"#,
        ),
        ok(200, ""),
    ]);

    result.unwrap();
    assert!(transport.requests[2].url.ends_with("/api/Especies/99"));
    assert!(transport.requests[3].url.ends_with("/api/Especies/99"));
}

#[test]
fn failed_list_short_circuits() {
    let (transport, report, result) = run_script(vec![ok(500, "internal error")]);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("HTTP 500"));
    assert_eq!(transport.requests.len(), 1, "no request after the failed GET");
    assert!(report.contains("--- 1."));
    assert!(!report.contains("--- 2."));
}

#[test]
fn failed_create_short_circuits() {
    let (transport, report, result) = run_script(vec![
        ok(200, r#"{"success":true,"data":[]}"#),
        Err(ApiError::TransportError("connection refused".to_string())),
    ]);

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        WalkthroughError::Api(ApiError::TransportError(_))
    ));
    assert_eq!(transport.requests.len(), 2, "no request after the failed POST");
    assert!(report.contains("--- 2."));
    assert!(!report.contains("--- 3."));
    assert!(!report.contains("--- 4."));
}

#[test]
fn create_without_data_aborts() {
    let (transport, _, result) = run_script(vec![
        ok(200, r#"{"success":true,"data":[]}"#),
        ok(200, r#"{"success":true,"message":"creada","data":null}"#),
    ]);

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        WalkthroughError::Api(ApiError::MissingData(_))
    ));
    assert_eq!(transport.requests.len(), 2);
}

/// Writer that fails on the first byte, to exercise the output error path.
struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn report_write_failure_aborts_before_any_request() {
    let client = SpeciesClient::new(BASE_URL, "api/Especies");
    let mut transport = ScriptedTransport::new(vec![]);

    let err = walkthrough::run(&client, &mut transport, &mut BrokenWriter).unwrap_err();

    assert!(matches!(err, WalkthroughError::Output(_)));
    assert!(transport.requests.is_empty());
}
