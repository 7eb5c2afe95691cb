//! End-to-end tests driving the full router over a temporary database

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use motoshop_server::db::schema;
use motoshop_server::{build_router, create_pool, AppState, PhotoStore};

const BOUNDARY: &str = "motoshop-test-boundary";

async fn test_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let pool = create_pool(dir.path().join("db.sqlite")).await.unwrap();
    schema::init(&pool).await.unwrap();
    let photos = PhotoStore::new(dir.path().join("uploads"));
    photos.ensure_dir().await.unwrap();

    (build_router(AppState::new(pool, photos)), dir)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_empty(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn multipart_project(client_name: &str, moto_info: &str, file: Option<(&str, &[u8])>) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in [("client_name", client_name), ("moto_info", moto_info)] {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/project")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn job_lifecycle_scenario() {
    let (app, _dir) = test_app().await;

    let (status, project) =
        post_form(&app, "/project", "client_name=Alice&moto_info=Honda+CB500").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        project,
        json!({"id": 1, "client_name": "Alice", "moto_info": "Honda CB500", "photo": null})
    );

    let (_, job) = post_form(&app, "/job", "project_id=1&description=Oil+change&cost=50").await;
    assert_eq!(job, json!({"id": 1}));

    let (_, jobs) = get_json(&app, "/jobs/1").await;
    assert_eq!(
        jobs,
        json!([{"id": 1, "project_id": 1, "description": "Oil change", "cost": 50, "is_done": false}])
    );

    let (status, ack) = post_empty(&app, "/job_done/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, json!({"ok": true}));

    let (_, jobs) = get_json(&app, "/jobs/1").await;
    assert_eq!(jobs[0]["is_done"], json!(true));
}

#[tokio::test]
async fn mark_done_on_missing_job_is_a_no_op() {
    let (app, _dir) = test_app().await;
    post_form(&app, "/job", "project_id=1&description=Chain&cost=20").await;

    let (status, ack) = post_empty(&app, "/job_done/999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, json!({"ok": true}));

    let (_, jobs) = get_json(&app, "/jobs/1").await;
    assert_eq!(jobs[0]["is_done"], json!(false));
}

#[tokio::test]
async fn jobs_for_project_without_jobs_is_empty() {
    let (app, _dir) = test_app().await;

    let (status, jobs) = get_json(&app, "/jobs/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(jobs, json!([]));
}

#[tokio::test]
async fn list_projects_returns_every_created_project() {
    let (app, _dir) = test_app().await;
    let inputs = [("Alice", "Honda CB500"), ("Bob", "BMW R1250GS"), ("Carol", "KTM 390")];

    for (client, moto) in inputs {
        let req = multipart_project(client, moto, None);
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, projects) = get_json(&app, "/projects").await;
    let projects = projects.as_array().unwrap();
    assert_eq!(projects.len(), inputs.len());

    for (project, (client, moto)) in projects.iter().zip(inputs) {
        assert_eq!(project["client_name"], client);
        assert_eq!(project["moto_info"], moto);
        assert_eq!(project["photo"], Value::Null);
        assert!(project["created_at"].as_str().is_some_and(|s| !s.is_empty()));
    }
}

#[tokio::test]
async fn uploaded_photo_round_trips() {
    let (app, _dir) = test_app().await;
    let bytes: &[u8] = b"\xff\xd8\xff\xe0fake-jpeg\x00\x01";

    let (status, body) = send(&app, multipart_project("Dan", "Triumph Bonneville", Some(("tank.JPG", bytes)))).await;
    assert_eq!(status, StatusCode::OK);
    let project: Value = serde_json::from_slice(&body).unwrap();

    let photo = project["photo"].as_str().expect("photo path");
    assert!(photo.starts_with("/uploads/"));
    assert!(photo.ends_with(".jpg"));
    let fname = photo.rsplit('/').next().unwrap();

    let req = Request::builder()
        .uri(format!("/photo/{fname}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
    let served = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&served[..], bytes);

    // the stored reference path is itself fetchable
    let req = Request::builder().uri(photo).body(Body::empty()).unwrap();
    let (status, served) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(served, bytes);

    let (_, projects) = get_json(&app, "/projects").await;
    assert_eq!(projects[0]["photo"], photo);
}

#[tokio::test]
async fn photo_upload_has_no_size_cap() {
    let (app, _dir) = test_app().await;
    // past axum's 2 MiB default body limit
    let bytes: Vec<u8> = (0..3 * 1024 * 1024 + 17).map(|i| (i * 31 % 256) as u8).collect();

    let (status, body) = send(
        &app,
        multipart_project("Eve", "Harley Sportster", Some(("bike.jpg", bytes.as_slice()))),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", String::from_utf8_lossy(&body));
    let project: Value = serde_json::from_slice(&body).unwrap();
    let fname = project["photo"].as_str().unwrap().rsplit('/').next().unwrap().to_owned();

    let req = Request::builder()
        .uri(format!("/photo/{fname}"))
        .body(Body::empty())
        .unwrap();
    let (status, served) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(served.len(), bytes.len());
    assert!(served == bytes);
}

#[tokio::test]
async fn missing_photo_reports_not_found() {
    let (app, _dir) = test_app().await;

    let (status, body) = get_json(&app, "/photo/missing.jpg").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn photo_lookup_cannot_escape_upload_dir() {
    let (app, _dir) = test_app().await;

    // db.sqlite sits next to the upload directory
    let (status, body) = get_json(&app, "/photo/..%2Fdb.sqlite").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn payments_are_listed_per_job() {
    let (app, _dir) = test_app().await;

    let (status, created) = post_form(&app, "/payment", "job_id=42&amount=120").await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();

    let (_, payments) = get_json(&app, "/payments/42").await;
    let payments = payments.as_array().unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0]["id"], id);
    assert_eq!(payments[0]["job_id"], 42);
    assert_eq!(payments[0]["amount"], 120);
    assert!(payments[0]["paid_at"].is_string());

    let (_, other) = get_json(&app, "/payments/43").await;
    assert_eq!(other, json!([]));
}

#[tokio::test]
async fn malformed_input_is_rejected() {
    let (app, _dir) = test_app().await;

    let (status, body) = post_form(&app, "/job", "project_id=1&description=Tyres").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = post_form(&app, "/payment", "job_id=abc&amount=10").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = get_json(&app, "/jobs/not-a-number").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // nothing was written by the rejected requests
    let (_, jobs) = get_json(&app, "/jobs/1").await;
    assert_eq!(jobs, json!([]));
}

#[tokio::test]
async fn cors_allows_any_origin_with_credentials() {
    let (app, _dir) = test_app().await;

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/projects")
        .header(header::ORIGIN, "http://shop.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    let headers = response.headers();

    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://shop.example");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn health_is_ok_once_initialized() {
    let (app, _dir) = test_app().await;

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
