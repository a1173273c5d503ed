use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::post,
};
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use base64::{Engine as _, engine::general_purpose};
use clap::Parser;
use labelsight_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

const API_KEY: &str = "test-key";

const SUGAR_AND_SALT: &str = "Sugar:\nHarm Scale: 8/10\nPotential Health Concerns: Diabetes, Obesity\n\nSalt:\nHarm Scale: 4/10\nPotential Health Concerns: Hypertension, \n";

#[derive(Clone)]
struct FakeGemini {
    status: StatusCode,
    body: Value,
    last_request: Arc<Mutex<Option<Value>>>,
}

impl FakeGemini {
    fn answering(text: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] }),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    fn failing(status: StatusCode) -> Self {
        Self {
            status,
            body: json!({ "error": { "message": "model overloaded" } }),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    fn last_request(&self) -> Value {
        self.last_request.lock().unwrap().clone().unwrap()
    }
}

async fn generate_content(
    State(fake): State<FakeGemini>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    *fake.last_request.lock().unwrap() = Some(body);

    if query.get("key").map(String::as_str) != Some(API_KEY) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "message": "API key not valid" } })),
        );
    }

    (fake.status, Json(fake.body.clone()))
}

async fn spawn_gemini(fake: FakeGemini) -> String {
    let app = Router::new()
        .route("/v1beta/models/{*model_action}", post(generate_content))
        .with_state(fake);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn labelsight(gemini_url: &str, api_key: &str, extra: &[&str]) -> TestServer {
    let mut argv = vec![
        "labelsight",
        "--gemini-base-url",
        gemini_url,
        "--gemini-api-key",
        api_key,
        "--allowed-origins",
        "*",
    ];
    argv.extend_from_slice(extra);

    let args = Arc::new(Args::parse_from(argv));
    let app = router(state(args).unwrap()).unwrap();

    TestServer::new(app).unwrap()
}

fn png_data_url(bytes: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(bytes)
    )
}

#[tokio::test]
async fn relay_returns_raw_model_text() {
    let fake = FakeGemini::answering(SUGAR_AND_SALT);
    let server = labelsight(&spawn_gemini(fake.clone()).await, API_KEY, &[]);

    let response = server
        .post("/analyze-image")
        .json(&json!({ "imageData": png_data_url(b"\x89PNG fake pixels") }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "text": SUGAR_AND_SALT }));

    let sent = fake.last_request();
    let parts = &sent["contents"][0]["parts"];
    assert!(
        parts[0]["text"]
            .as_str()
            .unwrap()
            .contains("Harm Scale: X/10")
    );
    assert_eq!(parts[1]["inline_data"]["mime_type"], "image/png");
    assert_eq!(
        parts[1]["inline_data"]["data"],
        general_purpose::STANDARD.encode(b"\x89PNG fake pixels")
    );
}

#[tokio::test]
async fn analysis_returns_records_in_source_order() {
    let server = labelsight(
        &spawn_gemini(FakeGemini::answering(SUGAR_AND_SALT)).await,
        API_KEY,
        &[],
    );

    let response = server
        .post("/analysis/image")
        .json(&json!({ "imageData": png_data_url(b"label") }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(
        body["data"]["records"],
        json!([
            {
                "name": "Sugar",
                "harm_scale": 8,
                "health_concerns": ["Diabetes", "Obesity"],
                "risk_band": "HIGH"
            },
            {
                "name": "Salt",
                "harm_scale": 4,
                "health_concerns": ["Hypertension"],
                "risk_band": "LOW"
            }
        ])
    );
    assert_eq!(body["data"]["raw_text"], SUGAR_AND_SALT);
}

#[tokio::test]
async fn unreadable_answer_is_an_empty_success() {
    let server = labelsight(
        &spawn_gemini(FakeGemini::answering("Sorry, I cannot read this label.")).await,
        API_KEY,
        &[],
    );

    let response = server
        .post("/analysis/image")
        .json(&json!({ "imageData": png_data_url(b"blurry") }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["data"]["records"], json!([]));
}

#[tokio::test]
async fn model_failure_maps_to_bad_gateway() {
    let server = labelsight(
        &spawn_gemini(FakeGemini::failing(StatusCode::SERVICE_UNAVAILABLE)).await,
        API_KEY,
        &[],
    );

    let response = server
        .post("/analysis/image")
        .json(&json!({ "imageData": png_data_url(b"label") }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "code": "E_ANALYSIS_FAILED",
            "status": 502,
            "message": "Could not analyze the image. Please try again."
        })
    );
}

#[tokio::test]
async fn missing_api_key_is_an_internal_error() {
    let server = labelsight(
        &spawn_gemini(FakeGemini::answering(SUGAR_AND_SALT)).await,
        "",
        &[],
    );

    let response = server
        .post("/analyze-image")
        .json(&json!({ "imageData": png_data_url(b"label") }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["message"],
        "Gemini API key not found"
    );
}

#[tokio::test]
async fn malformed_images_are_rejected_before_the_model() {
    let fake = FakeGemini::answering(SUGAR_AND_SALT);
    let server = labelsight(&spawn_gemini(fake.clone()).await, API_KEY, &[]);

    let not_a_data_url = server
        .post("/analysis/image")
        .json(&json!({ "imageData": "hello" }))
        .await;
    assert_eq!(not_a_data_url.status_code(), StatusCode::BAD_REQUEST);

    let empty = server
        .post("/analysis/image")
        .json(&json!({ "imageData": "" }))
        .await;
    assert_eq!(empty.status_code(), StatusCode::BAD_REQUEST);

    let gif = server
        .post("/analysis/image")
        .json(&json!({ "imageData": "data:image/gif;base64,R0lGODlh" }))
        .await;
    assert_eq!(gif.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    assert!(fake.last_request.lock().unwrap().is_none());
}

#[tokio::test]
async fn oversized_image_is_rejected() {
    let server = labelsight(
        &spawn_gemini(FakeGemini::answering(SUGAR_AND_SALT)).await,
        API_KEY,
        &["--max-image-bytes", "16"],
    );

    let response = server
        .post("/analysis/image")
        .json(&json!({ "imageData": png_data_url(&[7u8; 32]) }))
        .await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let fake = FakeGemini::answering(SUGAR_AND_SALT);
    let server = labelsight(
        &spawn_gemini(fake.clone()).await,
        API_KEY,
        &["--max-image-bytes", "16"],
    );

    for size in [32, 200_000] {
        let form = MultipartForm::new().add_part(
            "image",
            Part::bytes(vec![7u8; size])
                .file_name("label.jpg")
                .mime_type("image/jpeg"),
        );
        let response = server.post("/analysis/upload").multipart(form).await;

        assert_eq!(
            response.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE,
            "upload of {size} bytes"
        );
        assert_eq!(response.json::<Value>()["code"], "E_PAYLOAD_TOO_LARGE");
    }

    assert!(fake.last_request.lock().unwrap().is_none());
}

#[tokio::test]
async fn multipart_upload_is_analyzed() {
    let fake = FakeGemini::answering(SUGAR_AND_SALT);
    let server = labelsight(&spawn_gemini(fake.clone()).await, API_KEY, &[]);

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(b"webp bytes".to_vec())
            .file_name("label.webp")
            .mime_type("image/webp"),
    );
    let response = server.post("/analysis/upload").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["data"]["records"][0]["name"],
        "Sugar"
    );
    assert_eq!(
        fake.last_request()["contents"][0]["parts"][1]["inline_data"]["mime_type"],
        "image/webp"
    );
}

#[tokio::test]
async fn multipart_upload_without_image_is_rejected() {
    let server = labelsight(
        &spawn_gemini(FakeGemini::answering(SUGAR_AND_SALT)).await,
        API_KEY,
        &[],
    );

    let form = MultipartForm::new().add_text("note", "no picture here");
    let response = server.post("/analysis/upload").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn parse_endpoint_runs_without_model() {
    let server = labelsight("http://127.0.0.1:9", API_KEY, &[]);

    let response = server
        .post("/analysis/parse")
        .json(&json!({ "text": "Sugar:\nHarm Scale: unknown\n" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "records": [{
                "name": "Sugar",
                "harm_scale": 5,
                "health_concerns": [],
                "risk_band": "MODERATE"
            }]
        })
    );
}

#[tokio::test]
async fn capture_page_is_served_under_root_path() {
    let server = labelsight(
        "http://127.0.0.1:9",
        API_KEY,
        &["--server-root-path", "/labelsight"],
    );

    for path in ["/labelsight/", "/labelsight"] {
        let response = server.get(path).await;

        assert_eq!(response.status_code(), StatusCode::OK, "GET {path}");
        let page = response.text();
        assert!(page.contains("getUserMedia"));
        assert!(page.contains(r#"const ROOT_PATH = "/labelsight";"#));
    }
}

#[tokio::test]
async fn config_exposes_capture_settings() {
    let server = labelsight(
        "http://127.0.0.1:9",
        API_KEY,
        &["--default-facing-mode", "user", "--max-image-bytes", "4096"],
    );

    let response = server.get("/config").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["default_facing_mode"], "user");
    assert_eq!(body["max_image_bytes"], 4096);
    assert_eq!(body["model"], "gemini-1.5-flash");
}

#[tokio::test]
async fn readiness_depends_on_credential() {
    let ready = labelsight("http://127.0.0.1:9", API_KEY, &[]);
    let not_ready = labelsight("http://127.0.0.1:9", "", &[]);

    assert_eq!(ready.get("/health").await.status_code(), StatusCode::OK);
    assert_eq!(
        ready.get("/health/ready").await.json::<Value>(),
        json!({ "model": "gemini-1.5-flash", "credential_configured": true })
    );
    assert_eq!(
        not_ready.get("/health/ready").await.status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
}
