//! Student roster endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn create_list_update_delete_student() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذ أحمد", "ROSTER1", false).await;
    let base = format!("/api/teachers/{}/students", teacher.id);

    let response = app
        .request(
            "POST",
            &base,
            Some(json!({
                "civil_id": "119050512345",
                "student_name": "محمد علي",
                "grade": "الخامس",
                "class_number": 2,
                "subjects": ["الرياضيات", "العلوم"]
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let student_id = response.body["data"]["id"].as_i64().unwrap();
    // Omitted academic year falls back to the default.
    assert_eq!(response.body["data"]["academic_year"], "2024-2025");

    let response = app.request("GET", &base, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);

    let response = app
        .request(
            "GET",
            &format!("/api/students/{student_id}/subjects"),
            None,
        )
        .await;
    let subjects: Vec<&str> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name_ar"].as_str().unwrap())
        .collect();
    assert_eq!(subjects, vec!["الرياضيات", "العلوم"]);

    let response = app
        .request(
            "PUT",
            &format!("/api/students/{student_id}"),
            Some(json!({ "student_name": "محمد علي الجديد", "subjects": ["اللغة العربية"] })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["student_name"], "محمد علي الجديد");

    let response = app
        .request("DELETE", &format!("{base}/{student_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &base, None).await;
    assert!(response.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_civil_id_conflicts() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذة", "ROSTER2", false).await;
    app.seed_student(teacher.id, "سارة", "123456789", &[]).await;

    let response = app
        .request(
            "POST",
            &format!("/api/teachers/{}/students", teacher.id),
            Some(json!({
                "civil_id": "123456789",
                "student_name": "سارة أخرى",
                "grade": "الرابع",
                "class_number": 1
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn blank_civil_id_is_rejected() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذ", "ROSTER3", false).await;

    let response = app
        .request(
            "POST",
            &format!("/api/teachers/{}/students", teacher.id),
            Some(json!({
                "civil_id": "   ",
                "student_name": "بدون هوية",
                "grade": "الخامس",
                "class_number": 1
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleted_student_is_gone_from_point_lookups() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذ أرشيف", "ROSTER5", true).await;
    let student = app.seed_student(teacher.id, "خالد", "987654321", &[]).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/teachers/{}/students/{}", teacher.id, student.id),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // No folder provisioning for a removed student.
    let response = app
        .request("POST", &format!("/api/students/{}/folder", student.id), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.drive.folders_created(), 0);

    // And no edits either.
    let response = app
        .request(
            "PUT",
            &format!("/api/students/{}", student.id),
            Some(json!({ "student_name": "خالد الجديد" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_all_reports_count_and_removes_drive_folders() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذ حذف", "ROSTER4", true).await;
    let student = app.seed_student(teacher.id, "Ahmed", "123", &[]).await;
    app.seed_student(teacher.id, "Sara", "456", &[]).await;

    // Provision one so a remote folder exists to clean up.
    app.request(
        "POST",
        &format!("/api/students/{}/folder", student.id),
        None,
    )
    .await;
    let folder = app.drive.folder_id("R1", "Ahmed - 123").unwrap();

    let response = app
        .request(
            "DELETE",
            &format!("/api/teachers/{}/students", teacher.id),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["count"], 2);
    assert!(app.drive.deleted.lock().unwrap().contains(&folder));
}
