//! Batch folder provisioning over the HTTP API.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn batch_provisions_two_students_then_does_nothing() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذ أحمد", "LINK01", true).await;
    let ahmed = app.seed_student(teacher.id, "Ahmed", "123", &[]).await;
    let sara = app.seed_student(teacher.id, "Sara", "456", &["Math"]).await;

    let path = format!("/api/teachers/{}/students/folders", teacher.id);
    let response = app.request("POST", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let report = &response.body["data"];
    assert_eq!(report["created"], 2);
    assert_eq!(report["failed"], 0);
    assert_eq!(report["total"], 2);

    // The exact folder shape: one folder per student under R1, one
    // subject subfolder each (default label for Ahmed).
    let ahmed_folder = app
        .drive
        .folder_id("R1", "Ahmed - 123")
        .expect("Ahmed folder missing");
    let sara_folder = app
        .drive
        .folder_id("R1", "Sara - 456")
        .expect("Sara folder missing");
    assert_ne!(ahmed_folder, sara_folder);
    assert!(app.drive.folder_id(&ahmed_folder, "عام").is_some());
    assert!(app.drive.folder_id(&sara_folder, "Math").is_some());
    assert_eq!(app.drive.folders_created(), 4);

    // Both flags persisted with distinct handles.
    let ahmed = app
        .state
        .student_repo
        .find_by_id(ahmed.id)
        .await
        .unwrap()
        .unwrap();
    let sara = app
        .state
        .student_repo
        .find_by_id(sara.id)
        .await
        .unwrap()
        .unwrap();
    assert!(ahmed.folder_created);
    assert!(sara.folder_created);
    assert_eq!(ahmed.drive_folder_id.as_deref(), Some(ahmed_folder.as_str()));
    assert_eq!(sara.drive_folder_id.as_deref(), Some(sara_folder.as_str()));

    // Second run: filtered out upstream, zero remote calls.
    let calls = app.drive.remote_calls();
    let response = app.request("POST", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["created"], 0);
    assert_eq!(response.body["data"]["failed"], 0);
    assert_eq!(response.body["data"]["total"], 0);
    assert_eq!(app.drive.remote_calls(), calls);
}

#[tokio::test]
async fn failed_students_are_reported_and_retried() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذة سارة", "LINK02", true).await;
    app.seed_student(teacher.id, "Ahmed", "123", &[]).await;
    app.seed_student(teacher.id, "Sara", "456", &[]).await;
    app.drive.fail_on("Ahmed - 123");

    let path = format!("/api/teachers/{}/students/folders", teacher.id);
    let response = app.request("POST", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let report = &response.body["data"];
    assert_eq!(report["created"], 1);
    assert_eq!(report["failed"], 1);
    assert_eq!(report["total"], 2);
    let errors = report["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().contains("Ahmed"));

    // The failed student reappears in the next run once Drive recovers.
    app.drive.heal();
    let response = app.request("POST", &path, None).await;
    assert_eq!(response.body["data"]["total"], 1);
    assert_eq!(response.body["data"]["created"], 1);
}

#[tokio::test]
async fn batch_without_drive_root_is_rejected() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("بدون تخزين", "LINK03", false).await;
    app.seed_student(teacher.id, "Ahmed", "123", &[]).await;

    let path = format!("/api/teachers/{}/students/folders", teacher.id);
    let response = app.request("POST", &path, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.drive.remote_calls(), 0);
}

#[tokio::test]
async fn single_student_endpoint_provisions_and_persists() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذ واحد", "LINK04", true).await;
    let student = app
        .seed_student(teacher.id, "Ahmed", "123", &["Math", "Science"])
        .await;

    let path = format!("/api/students/{}/folder", student.id);
    let response = app.request("POST", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["folder_created"], true);

    let folder = app.drive.folder_id("R1", "Ahmed - 123").unwrap();
    assert!(app.drive.folder_id(&folder, "Math").is_some());
    assert!(app.drive.folder_id(&folder, "Science").is_some());
    // No default-label folder when real subjects exist.
    assert!(app.drive.folder_id(&folder, "عام").is_none());
}
