//! File upload routing endpoints.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn upload_routes_into_subject_and_category_folders() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذ ملفات", "FIL001", true).await;
    let student = app
        .seed_student(teacher.id, "Ahmed", "123", &["الرياضيات"])
        .await;

    let path = format!(
        "/api/teachers/{}/students/{}/files",
        teacher.id, student.id
    );
    let response = app
        .upload(
            &path,
            "اختبار الفصل الأول.pdf",
            b"%PDF-1.4 test",
            &[
                ("subject", "الرياضيات"),
                ("category", "اختبارات"),
                ("description", "اختبار شهر أكتوبر"),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let record = &response.body["data"];
    assert_eq!(record["subject_name"], "الرياضيات");
    assert_eq!(record["file_category"], "اختبارات");
    assert_eq!(record["original_name"], "اختبار الفصل الأول.pdf");
    assert!(
        record["system_name"]
            .as_str()
            .unwrap()
            .ends_with("اختبار الفصل الأول.pdf")
    );
    assert!(
        record["file_url"]
            .as_str()
            .unwrap()
            .starts_with("https://drive.google.com/file/d/")
    );

    // The tree root/student/subject/category was materialized lazily.
    let student_folder = app.drive.folder_id("R1", "Ahmed - 123").unwrap();
    let subject_folder = app.drive.folder_id(&student_folder, "الرياضيات").unwrap();
    let category_folder = app.drive.folder_id(&subject_folder, "اختبارات").unwrap();
    let uploads = app.drive.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, category_folder);

    drop(uploads);
    let response = app.request("GET", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذ", "FIL002", true).await;
    let student = app.seed_student(teacher.id, "Sara", "456", &[]).await;

    let path = format!(
        "/api/teachers/{}/students/{}/files",
        teacher.id, student.id
    );
    let response = app
        .upload(
            &path,
            "doc.pdf",
            b"data",
            &[("subject", "العلوم"), ("category", "homework")],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.drive.remote_calls(), 0);
}

#[tokio::test]
async fn upload_without_drive_root_is_rejected() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("بدون تخزين", "FIL003", false).await;
    let student = app.seed_student(teacher.id, "Ahmed", "123", &[]).await;

    let path = format!(
        "/api/teachers/{}/students/{}/files",
        teacher.id, student.id
    );
    let response = app
        .upload(
            &path,
            "doc.pdf",
            b"data",
            &[("subject", "العلوم"), ("category", "واجبات")],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_removes_record_and_remote_file() {
    let app = TestApp::new().await;
    let teacher = app.seed_teacher("أستاذ حذف", "FIL004", true).await;
    let student = app.seed_student(teacher.id, "Ahmed", "123", &[]).await;

    let path = format!(
        "/api/teachers/{}/students/{}/files",
        teacher.id, student.id
    );
    let response = app
        .upload(
            &path,
            "doc.pdf",
            b"data",
            &[("subject", "العلوم"), ("category", "واجبات")],
        )
        .await;
    let file_id = response.body["data"]["id"].as_i64().unwrap();
    let drive_file_id = response.body["data"]["drive_file_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/teachers/{}/files/{file_id}", teacher.id),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(app.drive.deleted.lock().unwrap().contains(&drive_file_id));

    let response = app.request("GET", &path, None).await;
    assert!(response.body["data"].as_array().unwrap().is_empty());
}
