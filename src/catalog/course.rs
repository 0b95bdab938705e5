//! Course records

use serde::Serialize;
use std::fmt;
use tabled::Tabled;

/// A single course in the catalog
///
/// Records are immutable once created. `course_id` is not required to be
/// unique and `course_type` is free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[tabled(rename = "Course ID")]
    course_id: String,

    #[tabled(rename = "Name")]
    course_name: String,

    #[tabled(rename = "Instructor")]
    instructor: String,

    #[tabled(rename = "Type")]
    course_type: String,
}

impl Course {
    pub fn new(
        course_id: impl Into<String>,
        course_name: impl Into<String>,
        instructor: impl Into<String>,
        course_type: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            course_name: course_name.into(),
            instructor: instructor.into(),
            course_type: course_type.into(),
        }
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn course_type(&self) -> &str {
        &self.course_type
    }

    /// Check whether the lowercased keyword occurs in the name, instructor or type
    pub(crate) fn matches_lowercase(&self, keyword_lower: &str) -> bool {
        self.course_name.to_lowercase().contains(keyword_lower)
            || self.instructor.to_lowercase().contains(keyword_lower)
            || self.course_type.to_lowercase().contains(keyword_lower)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course ID: {}, Name: {}, Instructor: {}, Type: {}",
            self.course_id, self.course_name, self.instructor, self.course_type
        )
    }
}
