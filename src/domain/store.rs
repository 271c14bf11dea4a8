use log::{debug, warn};
use thiserror::Error;

use crate::provider::Lookup;

use super::{course::Course, grade::Grade, result::ExamResult, student::Student};

/// A record that can be looked up by its identifier.
pub(crate) trait Record {
    fn id(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum RecordError {
    #[error("Student '{0}' not found")]
    StudentNotFound(String),
    #[error("Course '{0}' not found")]
    CourseNotFound(String),
}

/// Append-only collection kept in insertion order.
///
/// Identifiers are not required to be unique. [Lookup::find] returns the first record that was
/// added with a matching id, later duplicates are only visible through [RecordStore::list].
#[derive(Debug)]
pub(crate) struct RecordStore<T> {
    records: Vec<T>,
}

pub(crate) type StudentStore = RecordStore<Student>;
pub(crate) type CourseStore = RecordStore<Course>;

impl<T> RecordStore<T>
where
    T: Record,
{
    pub fn new() -> Self {
        RecordStore {
            records: Vec::new(),
        }
    }

    pub fn add(&mut self, record: T) {
        debug!("Adding record '{}'", record.id());
        self.records.push(record);
    }

    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for RecordStore<T>
where
    T: Record,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Lookup for RecordStore<T>
where
    T: Record,
{
    type Record = T;

    fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }
}

#[derive(Debug, Default)]
pub(crate) struct ResultStore {
    results: Vec<ExamResult>,
}

impl ResultStore {
    /// Appends a result once both the student and the course resolve.
    ///
    /// The student is checked first. The grade itself is stored as given.
    pub fn add<S, C>(
        &mut self,
        student_id: &str,
        course_id: &str,
        grade: Grade,
        students: &S,
        courses: &C,
    ) -> Result<&ExamResult, RecordError>
    where
        S: Lookup<Record = Student>,
        C: Lookup<Record = Course>,
    {
        if students.find(student_id).is_none() {
            warn!("Rejected result: unknown student '{}'", student_id);
            return Err(RecordError::StudentNotFound(student_id.to_string()));
        }
        if courses.find(course_id).is_none() {
            warn!("Rejected result: unknown course '{}'", course_id);
            return Err(RecordError::CourseNotFound(course_id.to_string()));
        }

        debug!(
            "Adding result {} for '{}' in '{}'",
            grade, student_id, course_id
        );
        self.results
            .push(ExamResult::new(student_id, course_id, grade));
        Ok(&self.results[self.results.len() - 1])
    }

    pub fn list(&self) -> &[ExamResult] {
        &self.results
    }

    pub fn results_for<'a>(&'a self, student_id: &'a str) -> impl Iterator<Item = &'a ExamResult> {
        self.results
            .iter()
            .filter(move |result| result.student_id() == student_id)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// All records of a session.
#[derive(Debug, Default)]
pub(crate) struct Records {
    pub students: StudentStore,
    pub courses: CourseStore,
    pub results: ResultStore,
}

impl Records {
    pub fn new() -> Records {
        Records::default()
    }

    pub fn add_result(
        &mut self,
        student_id: &str,
        course_id: &str,
        grade: Grade,
    ) -> Result<&ExamResult, RecordError> {
        self.results
            .add(student_id, course_id, grade, &self.students, &self.courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Records {
        let mut records = Records::new();
        records.students.add(Student::new("S1", "Ada"));
        records.courses.add(Course::new("C1", "Algebra", 3.0));
        records
    }

    #[test]
    fn find_on_empty_store() {
        let students = StudentStore::new();
        assert!(students.find("S1").is_none());
        assert!(students.find("").is_none());
        assert!(students.is_empty());
    }

    #[test]
    fn find_returns_added_record() {
        let mut courses = CourseStore::new();
        let course = Course::new("C1", "Algebra", 3.0);
        courses.add(course.clone());
        assert_eq!(courses.find("C1"), Some(&course));
        assert!(courses.find("c1").is_none());
    }

    #[test]
    fn duplicate_ids_resolve_to_first() {
        let mut students = StudentStore::new();
        students.add(Student::new("S1", "Ada"));
        students.add(Student::new("S1", "Grace"));
        assert_eq!(students.find("S1").map(Student::name), Some("Ada"));
        assert_eq!(students.len(), 2);
    }

    #[test]
    fn list_keeps_insertion_order() {
        let mut students = StudentStore::new();
        for id in ["S3", "S1", "S2"] {
            students.add(Student::new(id, "x"));
        }
        let ids: Vec<&str> = students.list().iter().map(Student::id).collect();
        assert_eq!(ids, vec!["S3", "S1", "S2"]);
    }

    #[test]
    fn result_for_unknown_student_is_rejected() {
        let mut records = records();
        let err = records.add_result("S9", "C1", Grade::A).unwrap_err();
        assert_eq!(err, RecordError::StudentNotFound("S9".into()));
        assert!(records.results.is_empty());
    }

    #[test]
    fn result_for_unknown_course_is_rejected() {
        let mut records = records();
        let err = records.add_result("S1", "C9", Grade::A).unwrap_err();
        assert_eq!(err, RecordError::CourseNotFound("C9".into()));
        assert_eq!(err.to_string(), "Course 'C9' not found");
        assert!(records.results.is_empty());
    }

    #[test]
    fn result_grade_is_not_validated() {
        let mut records = records();
        let result = records
            .add_result("S1", "C1", Grade::parse("z"))
            .unwrap()
            .clone();
        assert_eq!(result.grade(), &Grade::Unknown("Z".into()));
        assert_eq!(records.results.list(), &[result]);
    }

    #[test]
    fn results_for_filters_by_student() {
        let mut records = records();
        records.students.add(Student::new("S2", "Grace"));
        records.add_result("S1", "C1", Grade::A).unwrap();
        records.add_result("S2", "C1", Grade::B).unwrap();
        records.add_result("S1", "C1", Grade::C).unwrap();
        let grades: Vec<&Grade> = records.results.results_for("S1").map(ExamResult::grade).collect();
        assert_eq!(grades, vec![&Grade::A, &Grade::C]);
    }
}
