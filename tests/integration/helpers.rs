//! Shared test helpers: test app construction, seeding, request
//! plumbing, and the scripted fake Drive backend.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use bytes::Bytes;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use malaf_api::AppState;
use malaf_core::config::database::DatabaseConfig;
use malaf_core::config::provisioning::ProvisioningConfig;
use malaf_core::config::AppConfig;
use malaf_core::result::AppResult;
use malaf_core::traits::drive::{DriveApi, DriveFile, DriveFolder};
use malaf_entity::captcha::CaptchaQuestion;
use malaf_entity::student::{CreateStudent, Student};
use malaf_entity::teacher::{CreateTeacher, Teacher, UpdateTeacher};

/// In-memory fake Drive with call accounting and injectable failures.
#[derive(Debug, Default)]
pub struct FakeDrive {
    // (parent, name) -> folder id
    folders: Mutex<HashMap<(String, String), String>>,
    failing_names: Mutex<HashSet<String>>,
    /// File/folder IDs granted anyone-with-link access.
    pub shared: Mutex<Vec<String>>,
    /// Uploaded (parent, name, size) triples.
    pub uploads: Mutex<Vec<(String, String, usize)>>,
    /// IDs deleted remotely.
    pub deleted: Mutex<Vec<String>>,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

impl FakeDrive {
    /// Make `create_folder` fail for this folder name.
    pub fn fail_on(&self, name: &str) {
        self.failing_names.lock().unwrap().insert(name.to_string());
    }

    /// Clear injected failures.
    pub fn heal(&self) {
        self.failing_names.lock().unwrap().clear();
    }

    /// Total list + create calls so far.
    pub fn remote_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst) + self.create_calls.load(Ordering::SeqCst)
    }

    /// Folder creations so far.
    pub fn folders_created(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Look up a folder id by parent and name.
    pub fn folder_id(&self, parent: &str, name: &str) -> Option<String> {
        self.folders
            .lock()
            .unwrap()
            .get(&(parent.to_string(), name.to_string()))
            .cloned()
    }
}

#[async_trait]
impl DriveApi for FakeDrive {
    async fn list_folders(
        &self,
        _access_token: &str,
        name: &str,
        parent: Option<&str>,
    ) -> AppResult<Vec<DriveFolder>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let key = (parent.unwrap_or("root").to_string(), name.to_string());
        Ok(self
            .folders
            .lock()
            .unwrap()
            .get(&key)
            .map(|id| DriveFolder {
                id: id.clone(),
                name: name.to_string(),
            })
            .into_iter()
            .collect())
    }

    async fn create_folder(
        &self,
        _access_token: &str,
        name: &str,
        parent: Option<&str>,
    ) -> AppResult<DriveFolder> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_names.lock().unwrap().contains(name) {
            return Err(malaf_core::error::AppError::external(
                "User rate limit exceeded",
            ));
        }
        let id = format!("folder-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let key = (parent.unwrap_or("root").to_string(), name.to_string());
        self.folders.lock().unwrap().insert(key, id.clone());
        Ok(DriveFolder {
            id,
            name: name.to_string(),
        })
    }

    async fn grant_anyone_reader(&self, _access_token: &str, file_id: &str) -> AppResult<()> {
        self.shared.lock().unwrap().push(file_id.to_string());
        Ok(())
    }

    async fn upload_file(
        &self,
        _access_token: &str,
        parent: &str,
        name: &str,
        data: Bytes,
        _mime_type: &str,
    ) -> AppResult<DriveFile> {
        let id = format!("file-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.uploads
            .lock()
            .unwrap()
            .push((parent.to_string(), name.to_string(), data.len()));
        Ok(DriveFile {
            view_url: format!("https://drive.google.com/file/d/{id}/view"),
            id,
        })
    }

    async fn delete_file(&self, _access_token: &str, file_id: &str) -> AppResult<()> {
        self.deleted.lock().unwrap().push(file_id.to_string());
        Ok(())
    }
}

/// A decoded test response.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Test application context.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub drive: Arc<FakeDrive>,
}

impl TestApp {
    /// In-memory database, fast provisioning delays, scripted Drive.
    pub async fn new() -> Self {
        let config = AppConfig {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
                connect_timeout_seconds: 5,
                create_if_missing: true,
            },
            provisioning: ProvisioningConfig {
                chunk_size: 3,
                inter_chunk_delay_ms: 10,
                default_subject_label: "عام".to_string(),
            },
            ..default_config()
        };

        let db_pool = malaf_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to open in-memory database");
        malaf_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let drive = Arc::new(FakeDrive::default());
        let state = malaf_api::build_state(config, db_pool, drive.clone() as Arc<dyn DriveApi>);
        let router = malaf_api::build_app(state.clone());

        Self {
            router,
            state,
            drive,
        }
    }

    /// Seed a teacher. `with_drive` configures a root folder handle `R1`
    /// and an access token.
    pub async fn seed_teacher(&self, name: &str, link_code: &str, with_drive: bool) -> Teacher {
        let teacher = self
            .state
            .teacher_repo
            .create(&CreateTeacher {
                email: format!("{link_code}@example.com"),
                name: name.to_string(),
                school_name: Some("مدرسة النور".to_string()),
                link_code: Some(link_code.to_string()),
            })
            .await
            .expect("Failed to seed teacher");

        if with_drive {
            self.state
                .teacher_repo
                .update(
                    teacher.id,
                    &UpdateTeacher {
                        school_name: None,
                        drive_folder_id: Some("R1".to_string()),
                        access_token: Some("ya29.test-token".to_string()),
                    },
                )
                .await
                .expect("Failed to configure teacher Drive")
        } else {
            teacher
        }
    }

    /// Seed a student with subject associations by name.
    pub async fn seed_student(
        &self,
        teacher_id: i64,
        name: &str,
        civil_id: &str,
        subjects: &[&str],
    ) -> Student {
        let student = self
            .state
            .student_repo
            .create(&CreateStudent {
                civil_id: civil_id.to_string(),
                student_name: name.to_string(),
                grade: "الخامس".to_string(),
                class_number: 1,
                academic_year: "2024-2025".to_string(),
                teacher_id,
            })
            .await
            .expect("Failed to seed student");

        if !subjects.is_empty() {
            let mut ids = Vec::new();
            for subject in subjects {
                let subject = match self
                    .state
                    .subject_repo
                    .find_by_name(subject)
                    .await
                    .expect("Failed to look up subject")
                {
                    Some(existing) => existing,
                    None => self
                        .state
                        .subject_repo
                        .create(subject)
                        .await
                        .expect("Failed to seed subject"),
                };
                ids.push(subject.id);
            }
            self.state
                .subject_repo
                .set_student_subjects(student.id, &ids)
                .await
                .expect("Failed to associate subjects");
        }

        student
    }

    /// Seed a captcha question and return it (with the answer).
    pub async fn seed_captcha(&self, question: &str, answer: &str) -> CaptchaQuestion {
        self.state
            .captcha_repo
            .create(question, answer)
            .await
            .expect("Failed to seed captcha")
    }

    /// Issue a request with an optional JSON body.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("Failed to build request"),
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };
        self.send(request).await
    }

    /// Issue a multipart upload with a file part and text parts.
    pub async fn upload(
        &self,
        path: &str,
        file_name: &str,
        content: &[u8],
        fields: &[(&str, &str)],
    ) -> TestResponse {
        let boundary = "malaf-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"{file_name}\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .expect("Failed to build multipart request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router error");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        TestResponse { status, body }
    }
}

fn default_config() -> AppConfig {
    AppConfig {
        server: Default::default(),
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 1,
            connect_timeout_seconds: 5,
            create_if_missing: true,
        },
        drive: Default::default(),
        provisioning: Default::default(),
        logging: Default::default(),
    }
}
