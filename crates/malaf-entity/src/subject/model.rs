//! Subject entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A school subject (Arabic name). Linked to teachers and students through
/// many-to-many join tables; a student's subjects become the subfolder
/// names under their Drive folder.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: i64,
    /// Arabic subject name (e.g. `الرياضيات`).
    pub name_ar: String,
}
