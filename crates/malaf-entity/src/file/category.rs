//! File categories — the fixed Arabic subfolder names under each subject.

use serde::{Deserialize, Serialize};

/// The fixed set of file categories. The Arabic label is both the
/// category value stored on file records and the Drive subfolder name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileCategory {
    /// اختبارات
    Exams,
    /// درجات
    Grades,
    /// واجبات
    Homework,
    /// ملاحظات
    Notes,
    /// إنذارات
    Alerts,
    /// مشاركات
    Participation,
    /// شهادات
    Certificates,
    /// حضور وغياب
    Attendance,
    /// سلوك
    Behavior,
    /// أخرى
    Other,
}

impl FileCategory {
    /// All categories in display order.
    pub const ALL: [FileCategory; 10] = [
        Self::Exams,
        Self::Grades,
        Self::Homework,
        Self::Notes,
        Self::Alerts,
        Self::Participation,
        Self::Certificates,
        Self::Attendance,
        Self::Behavior,
        Self::Other,
    ];

    /// The Arabic label used in the database and as the Drive folder name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Exams => "اختبارات",
            Self::Grades => "درجات",
            Self::Homework => "واجبات",
            Self::Notes => "ملاحظات",
            Self::Alerts => "إنذارات",
            Self::Participation => "مشاركات",
            Self::Certificates => "شهادات",
            Self::Attendance => "حضور وغياب",
            Self::Behavior => "سلوك",
            Self::Other => "أخرى",
        }
    }

    /// Parse a category from its Arabic label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
