use std::io::BufRead;

use anyhow::anyhow;
use colored::Colorize;
use log::info;

use crate::{
    domain::{assessment, recommendations, GpaCalculator, Records, Standing},
    Lookup,
};

use super::{
    format::{DialogEntry, FormatService},
    Flow, Reportable, ServiceResult,
};

const OPTIONS: [(&str, &str); 3] = [
    ("1", "Calculate GPA"),
    ("2", "View Academic Standing"),
    ("0", "Return to Main Menu"),
];

pub(super) struct ReportService<'s, R>
where
    R: BufRead,
{
    records: &'s Records,
    input: &'s mut R,
}

impl<'s, R> ReportService<'s, R>
where
    R: BufRead,
{
    pub fn new(records: &'s Records, input: &'s mut R) -> Self {
        Self { records, input }
    }

    pub fn run(&mut self) -> Flow {
        loop {
            let Some(choice) = FormatService::choice(&mut *self.input, "GRADE REPORT", &OPTIONS)
            else {
                return Flow::Quit;
            };
            let res = match choice.as_str() {
                "0" => return Flow::Back,
                "1" => self.calculate(),
                "2" => self.standing(),
                _ => Err(anyhow!("Invalid choice! Please try again.")),
            };
            res.report();
        }
    }

    fn calculate(&mut self) -> ServiceResult {
        let dialog = vec![
            DialogEntry::Message("Enter the student ID to calculate GPA:".into()),
            DialogEntry::TextInput("Student ID".into()),
        ];
        let Some(student_id) = FormatService::dialog(&mut *self.input, dialog)
            .and_then(|answers| answers.into_iter().next())
        else {
            FormatService::info("Operation has been canceled");
            return Ok(());
        };

        let results = self.records.results.list();
        let Some(summary) = GpaCalculator::summary(&student_id, results, &self.records.courses)
        else {
            info!("No GPA computable for '{}'", student_id);
            FormatService::error(&format!(
                "No graded courses found for Student ID: {}",
                student_id
            ));
            println!("{}", "Possible reasons:".bright_black());
            println!("{}", "  • Student doesn't exist in the system".bright_black());
            println!("{}", "  • No results have been recorded yet".bright_black());
            println!("{}", "  • All courses are ungraded".bright_black());
            return Ok(());
        };

        FormatService::header("GPA CALCULATION RESULT");
        FormatService::field("Student ID", &student_id);
        if let Some(student) = self.records.students.find(&student_id) {
            FormatService::field("Name", &student.name());
        }
        for result in self.records.results.results_for(&student_id) {
            let title = self
                .records
                .courses
                .find(result.course_id())
                .map(|course| course.title().to_string())
                .unwrap_or_else(|| "[unknown course]".to_string());
            println!("    {:<10} {:<24} {}", result.course_id(), title, result.grade());
        }
        FormatService::field("Courses", &summary.courses);
        FormatService::field("Credits", &summary.credits);
        FormatService::field("GPA Score", &FormatService::gpa(summary.gpa));

        let standing = Standing::from_gpa(summary.gpa);
        FormatService::field("Academic Standing", &standing);
        if !standing.is_passing() {
            FormatService::warning("Below the minimum passing GPA");
        }
        let (headline, advice) = assessment(summary.gpa);
        println!("\n{}", headline.bright_white().bold());
        println!("{}", advice);
        println!("\n{}", "Recommendations:".cyan());
        for advice in recommendations(summary.gpa) {
            println!("  • {}", advice);
        }
        Ok(())
    }

    fn standing(&self) -> ServiceResult {
        FormatService::header("ACADEMIC STANDING");
        FormatService::standing_scale();
        Ok(())
    }
}
