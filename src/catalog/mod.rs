//! Course catalog
//!
//! An insertion-ordered list of course records. Courses are only ever
//! appended; the catalog is never reordered or deduplicated.

mod course;

pub use course::Course;

use tracing::debug;

/// The sample courses every session starts with
const SAMPLE_COURSES: [(&str, &str, &str, &str); 4] = [
    ("CS101", "Intro to Computer Science", "Dr. Smith", "Core"),
    ("MATH201", "Calculus II", "Dr. Johnson", "Elective"),
    ("PHYS101", "Physics I", "Dr. Lee", "Core"),
    ("HIST301", "World History", "Dr. Brown", "Humanities"),
];

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog seeded with the four sample courses
    pub fn with_sample_courses() -> Self {
        let mut catalog = Self::new();
        for (id, name, instructor, course_type) in SAMPLE_COURSES {
            catalog.add(id, name, instructor, course_type);
        }
        catalog
    }

    /// Append a course to the end of the catalog
    ///
    /// Any strings are accepted, including empty ones and ids that already
    /// exist in the catalog.
    pub fn add(
        &mut self,
        course_id: impl Into<String>,
        course_name: impl Into<String>,
        instructor: impl Into<String>,
        course_type: impl Into<String>,
    ) -> &Course {
        let index = self.courses.len();
        self.courses
            .push(Course::new(course_id, course_name, instructor, course_type));
        let course = &self.courses[index];
        debug!(course_id = course.course_id(), total = index + 1, "Course added");
        course
    }

    /// Search courses by keyword
    ///
    /// Matches against name, instructor and type (case-insensitive).
    /// Results keep insertion order. An empty keyword matches everything.
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<&Course> {
        let keyword_lower = keyword.to_lowercase();

        let results: Vec<&Course> = self
            .courses
            .iter()
            .filter(|course| course.matches_lowercase(&keyword_lower))
            .collect();

        debug!(keyword, matches = results.len(), "Catalog search");
        results
    }

    /// All courses in insertion order
    pub fn list_all(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(courses: impl IntoIterator<Item = &'a Course>) -> Vec<&'a str> {
        courses.into_iter().map(Course::course_id).collect()
    }

    #[test]
    fn test_sample_courses_in_order() {
        let catalog = Catalog::with_sample_courses();
        assert_eq!(
            ids(catalog.list_all()),
            vec!["CS101", "MATH201", "PHYS101", "HIST301"]
        );
    }

    #[test]
    fn test_add_appends_after_samples() {
        let mut catalog = Catalog::with_sample_courses();
        catalog.add("BIO110", "Biology", "Dr. Green", "Elective");
        catalog.add("ART100", "Drawing", "Ms. Gray", "Humanities");

        assert_eq!(catalog.len(), 6);
        assert_eq!(
            ids(catalog.list_all()),
            vec!["CS101", "MATH201", "PHYS101", "HIST301", "BIO110", "ART100"]
        );
    }

    #[test]
    fn test_add_keeps_duplicates_and_empty_fields() {
        let mut catalog = Catalog::new();
        catalog.add("CS101", "A", "B", "C");
        catalog.add("CS101", "A", "B", "C");
        catalog.add("", "", "", "");

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.list_all()[0], catalog.list_all()[1]);
        assert_eq!(catalog.list_all()[2].course_id(), "");
    }

    #[test]
    fn test_search_core_matches_type() {
        let catalog = Catalog::with_sample_courses();
        let results = catalog.search_by_keyword("core");
        assert_eq!(ids(results), vec!["CS101", "PHYS101"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::with_sample_courses();
        assert_eq!(ids(catalog.search_by_keyword("CALCULUS")), vec!["MATH201"]);
        assert_eq!(ids(catalog.search_by_keyword("dR. lEe")), vec!["PHYS101"]);
    }

    #[test]
    fn test_search_matches_substring_across_fields() {
        let catalog = Catalog::with_sample_courses();
        assert_eq!(ids(catalog.search_by_keyword("sci")), vec!["CS101"]);
        // "Dr." appears in every instructor
        assert_eq!(catalog.search_by_keyword("dr.").len(), 4);
    }

    #[test]
    fn test_search_empty_keyword_matches_everything() {
        let catalog = Catalog::with_sample_courses();
        assert_eq!(catalog.search_by_keyword("").len(), catalog.len());
    }

    #[test]
    fn test_search_without_matches_is_empty() {
        let catalog = Catalog::with_sample_courses();
        assert!(catalog.search_by_keyword("chemistry").is_empty());
    }

    #[test]
    fn test_search_ignores_course_id() {
        let catalog = Catalog::with_sample_courses();
        assert!(catalog.search_by_keyword("MATH201").is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.list_all().is_empty());
        assert!(catalog.search_by_keyword("").is_empty());
    }
}
