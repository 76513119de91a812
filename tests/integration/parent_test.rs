//! Parent access endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn captcha_withholds_the_answer() {
    let app = TestApp::new().await;

    // Empty rotation.
    let response = app.request("GET", "/api/captcha", None).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);

    app.seed_captcha("كم يساوي ٢ + ٣؟", "5").await;
    let response = app.request("GET", "/api/captcha", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["question"], "كم يساوي ٢ + ٣؟");
    assert!(response.body["data"].get("answer").is_none());
}

#[tokio::test]
async fn verified_parent_sees_grouped_files_and_folder_link() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذ أحمد", "PAR001", true).await;
    let student = app
        .seed_student(teacher.id, "محمد", "119050512345", &["الرياضيات"])
        .await;
    let captcha = app.seed_captcha("كم يساوي ١ + ١؟", "2").await;

    // Provision the folder and upload one file so the view has content.
    app.request(
        "POST",
        &format!("/api/students/{}/folder", student.id),
        None,
    )
    .await;
    app.upload(
        &format!(
            "/api/teachers/{}/students/{}/files",
            teacher.id, student.id
        ),
        "اختبار.pdf",
        b"data",
        &[("subject", "الرياضيات"), ("category", "اختبارات")],
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/parent/verify",
            Some(json!({
                "link_code": "PAR001",
                "civil_id": "119050512345",
                "captcha_id": captcha.id,
                "captcha_answer": "2"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let view = &response.body["data"];
    assert_eq!(view["student_name"], "محمد");
    assert_eq!(view["teacher_name"], "أستاذ أحمد");
    assert!(
        view["folder_url"]
            .as_str()
            .unwrap()
            .starts_with("https://drive.google.com/drive/folders/")
    );
    let grouped = &view["files"]["الرياضيات"]["اختبارات"];
    assert_eq!(grouped.as_array().unwrap().len(), 1);
    assert_eq!(grouped[0]["name"], "اختبار.pdf");
}

#[tokio::test]
async fn wrong_captcha_answer_is_unauthorized() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذ", "PAR002", false).await;
    app.seed_student(teacher.id, "سارة", "123", &[]).await;
    let captcha = app.seed_captcha("كم يساوي ٢ + ٢؟", "4").await;

    let response = app
        .request(
            "POST",
            "/api/parent/verify",
            Some(json!({
                "link_code": "PAR002",
                "civil_id": "123",
                "captcha_id": captcha.id,
                "captcha_answer": "5"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bad_link_code_is_unauthorized() {
    let app = TestApp::new().await;
    let captcha = app.seed_captcha("كم يساوي ٣ + ٣؟", "6").await;

    let response = app
        .request(
            "POST",
            "/api/parent/verify",
            Some(json!({
                "link_code": "NOPE99",
                "civil_id": "123",
                "captcha_id": captcha.id,
                "captcha_answer": "6"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_student_is_not_found() {
    let app = TestApp::new().await;
    app.seed_teacher("أستاذ", "PAR003", false).await;
    let captcha = app.seed_captcha("كم يساوي ٤ + ١؟", "5").await;

    let response = app
        .request(
            "POST",
            "/api/parent/verify",
            Some(json!({
                "link_code": "PAR003",
                "civil_id": "000000000",
                "captcha_id": captcha.id,
                "captcha_answer": "5"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
