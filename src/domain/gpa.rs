use log::debug;

use crate::provider::Lookup;

use super::{course::Course, result::ExamResult};

/// Credit-weighted grade point average over the resolvable results of one student.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GpaSummary {
    /// Rounded to two decimal places.
    pub gpa: f64,
    pub courses: usize,
    pub credits: f64,
}

pub(crate) struct GpaCalculator;

impl GpaCalculator {
    /// Returns the GPA rounded to two decimals, or `0.0` when nothing could be graded.
    ///
    /// A student without graded results and a student who failed every course both yield `0.0`.
    /// Use [GpaCalculator::summary] to tell the two apart.
    pub fn compute<C>(student_id: &str, results: &[ExamResult], courses: &C) -> f64
    where
        C: Lookup<Record = Course>,
    {
        Self::summary(student_id, results, courses)
            .map(|summary| summary.gpa)
            .unwrap_or(0.0)
    }

    /// Results whose course can not be resolved are skipped. Returns `None` if the total credit
    /// of the remaining results is zero.
    pub fn summary<C>(student_id: &str, results: &[ExamResult], courses: &C) -> Option<GpaSummary>
    where
        C: Lookup<Record = Course>,
    {
        let (points, credits, count) = results
            .iter()
            .filter(|result| result.student_id() == student_id)
            .filter_map(|result| {
                let course = courses.find(result.course_id());
                if course.is_none() {
                    debug!(
                        "Skipping result of '{}': course '{}' not found",
                        student_id,
                        result.course_id()
                    );
                }
                course.map(|course| (result.grade().points(), course.credit()))
            })
            .fold((0f64, 0f64, 0), |(sum, credits, count), (points, credit)| {
                (sum + points * credit, credits + credit, count + 1)
            });

        if credits == 0.0 {
            return None;
        }

        Some(GpaSummary {
            gpa: round2(points / credits),
            courses: count,
            credits,
        })
    }
}

/// Ties go to the even digit: 3.125 becomes 3.12.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{grade::Grade, store::CourseStore};

    fn catalog() -> CourseStore {
        let mut courses = CourseStore::new();
        courses.add(Course::new("C1", "Algebra", 3.0));
        courses.add(Course::new("C2", "Biology", 4.0));
        courses
    }

    fn result(student: &str, course: &str, grade: &str) -> ExamResult {
        ExamResult::new(student, course, Grade::parse(grade))
    }

    #[test]
    fn weighted_by_credit() {
        let results = vec![result("S1", "C1", "A"), result("S1", "C2", "B")];
        assert_eq!(GpaCalculator::compute("S1", &results, &catalog()), 3.43);
    }

    #[test]
    fn no_results_yields_zero() {
        assert_eq!(GpaCalculator::compute("S1", &[], &catalog()), 0.0);
        assert_eq!(GpaCalculator::summary("S1", &[], &catalog()), None);
    }

    #[test]
    fn unresolvable_courses_are_skipped() {
        let results = vec![result("S1", "C9", "A")];
        assert_eq!(GpaCalculator::compute("S1", &results, &catalog()), 0.0);

        let results = vec![result("S1", "C9", "F"), result("S1", "C1", "B")];
        assert_eq!(GpaCalculator::compute("S1", &results, &catalog()), 3.0);
    }

    #[test]
    fn other_students_are_ignored() {
        let results = vec![
            result("S2", "C1", "F"),
            result("S1", "C1", "A"),
            result("S2", "C2", "F"),
        ];
        assert_eq!(GpaCalculator::compute("S1", &results, &catalog()), 4.0);
    }

    #[test]
    fn order_does_not_matter() {
        let mut results = vec![
            result("S1", "C1", "A"),
            result("S2", "C1", "C"),
            result("S1", "C2", "B+"),
            result("S1", "C1", "D"),
        ];
        let forward = GpaCalculator::compute("S1", &results, &catalog());
        results.reverse();
        assert_eq!(GpaCalculator::compute("S1", &results, &catalog()), forward);
    }

    #[test]
    fn unknown_grade_lowers_gpa() {
        let results = vec![result("S1", "C1", "A"), result("S1", "C2", "Z")];
        // (4.0 * 3 + 0.0 * 4) / 7
        assert_eq!(GpaCalculator::compute("S1", &results, &catalog()), 1.71);
    }

    #[test]
    fn summary_separates_failing_from_missing() {
        let results = vec![result("S1", "C1", "F"), result("S1", "C2", "F")];
        let summary = GpaCalculator::summary("S1", &results, &catalog()).unwrap();
        assert_eq!(summary.gpa, 0.0);
        assert_eq!(summary.courses, 2);
        assert_eq!(summary.credits, 7.0);
    }

    #[test]
    fn halves_round_to_even() {
        let mut courses = CourseStore::new();
        courses.add(Course::new("C1", "Algebra", 1.0));
        courses.add(Course::new("C2", "Biology", 7.0));
        courses.add(Course::new("C3", "Chemistry", 3.0));
        courses.add(Course::new("C4", "Drawing", 5.0));

        // (4.0 * 1 + 3.0 * 7) / 8 = 3.125
        let results = vec![result("S1", "C1", "A"), result("S1", "C2", "B")];
        assert_eq!(GpaCalculator::compute("S1", &results, &courses), 3.12);

        // (4.0 * 3 + 1.0 * 5) / 8 = 2.125
        let results = vec![result("S2", "C3", "A"), result("S2", "C4", "D")];
        assert_eq!(GpaCalculator::compute("S2", &results, &courses), 2.12);
    }

    #[test]
    fn duplicate_course_ids_weigh_with_first_credit() {
        let mut courses = catalog();
        courses.add(Course::new("C1", "Algebra II", 10.0));
        let results = vec![result("S1", "C1", "A"), result("S1", "C2", "C")];
        // (4.0 * 3 + 2.0 * 4) / 7
        assert_eq!(GpaCalculator::compute("S1", &results, &courses), 2.86);
        let summary = GpaCalculator::summary("S1", &results, &courses).unwrap();
        assert_eq!(summary.credits, 7.0);
    }

    #[test]
    fn zero_credit_courses() {
        let mut courses = catalog();
        courses.add(Course::new("C0", "Seminar", 0.0));

        let results = vec![result("S1", "C0", "A")];
        assert_eq!(GpaCalculator::compute("S1", &results, &courses), 0.0);
        assert_eq!(GpaCalculator::summary("S1", &results, &courses), None);

        let results = vec![result("S1", "C0", "F"), result("S1", "C1", "B")];
        let summary = GpaCalculator::summary("S1", &results, &courses).unwrap();
        assert_eq!(summary.gpa, 3.0);
        assert_eq!(summary.courses, 2);
        assert_eq!(summary.credits, 3.0);
    }
}
