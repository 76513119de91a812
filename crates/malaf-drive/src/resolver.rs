//! Folder path resolver.
//!
//! Walks a list of path segments under a root folder, reusing any folder
//! that already exists by exact name-under-parent match and creating the
//! missing ones. Calling it twice in sequence with the same segments and
//! root yields the same leaf handle, creating at most one folder per
//! segment level. The list-then-create pattern is not atomic, so callers
//! that may race the same path must serialize themselves (the batch
//! orchestrator holds a per-teacher lock for exactly this reason).

use tracing::debug;

use malaf_core::error::AppError;
use malaf_core::result::AppResult;
use malaf_core::traits::drive::DriveApi;

/// Resolve a folder path and return the handle of the deepest segment.
///
/// When several folders under the same parent carry the same name (e.g.
/// left over from a prior race), the first one returned by the listing is
/// used. Any listing or creation failure propagates as a single
/// resolution error without per-segment attribution.
pub async fn resolve_path(
    drive: &dyn DriveApi,
    access_token: &str,
    segments: &[String],
    root_parent: Option<&str>,
) -> AppResult<String> {
    if segments.is_empty() {
        return Err(AppError::validation("Folder path has no segments"));
    }

    let mut current: Option<String> = root_parent.map(str::to_string);

    for segment in segments {
        let name = segment.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder path segment is empty"));
        }

        let existing = drive
            .list_folders(access_token, name, current.as_deref())
            .await
            .map_err(|e| {
                AppError::new(e.kind, format!("Folder path resolution failed: {}", e.message))
            })?;

        let handle = match existing.into_iter().next() {
            Some(folder) => {
                debug!(name, id = %folder.id, "Reusing existing folder");
                folder.id
            }
            None => {
                let created = drive
                    .create_folder(access_token, name, current.as_deref())
                    .await
                    .map_err(|e| {
                        AppError::new(
                            e.kind,
                            format!("Folder path resolution failed: {}", e.message),
                        )
                    })?;
                debug!(name, id = %created.id, "Created missing folder");
                created.id
            }
        };

        current = Some(handle);
    }

    current.ok_or_else(|| AppError::internal("Folder path resolution produced no handle"))
}
