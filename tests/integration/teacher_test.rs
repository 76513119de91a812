//! Teacher profile endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn health_reports_database_status() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "connected");
}

#[tokio::test]
async fn teacher_response_redacts_token() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذ أحمد", "TCH001", true).await;

    let response = app
        .request("GET", &format!("/api/teachers/{}", teacher.id), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "أستاذ أحمد");
    assert!(response.body["data"].get("access_token").is_none());
}

#[tokio::test]
async fn unknown_teacher_is_not_found() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/teachers/9999", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn drive_folder_accepts_full_url() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذة", "TCH002", false).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/teachers/{}/drive-folder", teacher.id),
            Some(json!({
                "folder": "https://drive.google.com/drive/folders/1AbCdEf?usp=sharing"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["drive_folder_id"], "1AbCdEf");

    let response = app
        .request(
            "PUT",
            &format!("/api/teachers/{}/drive-folder", teacher.id),
            Some(json!({ "folder": "   " })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stats_count_students_files_and_subjects() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذ إحصاء", "TCH003", false).await;
    app.seed_student(teacher.id, "Ahmed", "123", &[]).await;
    app.seed_student(teacher.id, "Sara", "456", &[]).await;
    app.request(
        "PUT",
        &format!("/api/teachers/{}", teacher.id),
        Some(json!({ "subjects": ["الرياضيات"] })),
    )
    .await;

    let response = app
        .request("GET", &format!("/api/teachers/{}/stats", teacher.id), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["students"], 2);
    assert_eq!(response.body["data"]["files"], 0);
    assert_eq!(response.body["data"]["subjects"], 1);
}

#[tokio::test]
async fn link_code_regeneration_replaces_the_code() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذ رمز", "TCH004", false).await;

    let response = app
        .request(
            "POST",
            &format!("/api/teachers/{}/link-code", teacher.id),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let code = response.body["data"]["link_code"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 6);
    assert_ne!(code, "TCH004");
}
