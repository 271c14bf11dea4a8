use std::fmt;

use super::grade::Grade;

/// The grade a student obtained in a course.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExamResult {
    student_id: String,
    course_id: String,
    grade: Grade,
}

impl ExamResult {
    pub fn new(student_id: impl Into<String>, course_id: impl Into<String>, grade: Grade) -> Self {
        ExamResult {
            student_id: student_id.into(),
            course_id: course_id.into(),
            grade,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn grade(&self) -> &Grade {
        &self.grade
    }
}

impl fmt::Display for ExamResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student ID: {} | Course ID: {} | Grade: {}",
            self.student_id, self.course_id, self.grade
        )
    }
}
