use std::io::BufRead;

use anyhow::anyhow;

use crate::domain::{Grade, Records};

use super::{
    format::{DialogEntry, FormatService},
    Flow, Reportable, ServiceResult,
};

const OPTIONS: [(&str, &str); 3] = [
    ("1", "View All Results"),
    ("2", "Add New Result"),
    ("0", "Return to Main Menu"),
];

pub(super) struct ResultService<'s, R>
where
    R: BufRead,
{
    records: &'s mut Records,
    input: &'s mut R,
}

impl<'s, R> ResultService<'s, R>
where
    R: BufRead,
{
    pub fn new(records: &'s mut Records, input: &'s mut R) -> Self {
        Self { records, input }
    }

    pub fn run(&mut self) -> Flow {
        loop {
            let Some(choice) =
                FormatService::choice(&mut *self.input, "RESULTS MANAGEMENT", &OPTIONS)
            else {
                return Flow::Quit;
            };
            let res = match choice.as_str() {
                "0" => return Flow::Back,
                "1" => self.list(),
                "2" => self.add(),
                _ => Err(anyhow!("Invalid choice! Please try again.")),
            };
            res.report();
        }
    }

    fn list(&self) -> ServiceResult {
        FormatService::table(
            "All Results:",
            self.records.results.list(),
            "No results found.",
        );
        Ok(())
    }

    fn add(&mut self) -> ServiceResult {
        let letters = Grade::KNOWN
            .iter()
            .map(Grade::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let dialog = vec![
            DialogEntry::Message("Please fill in the result details:".into()),
            DialogEntry::TextInput("Enter Student ID".into()),
            DialogEntry::TextInput("Enter Course ID".into()),
            DialogEntry::TextInput(format!("Enter Letter Grade ({})", letters)),
        ];
        let Some([student_id, course_id, grade]) = FormatService::dialog(&mut *self.input, dialog)
            .and_then(|answers| <[String; 3]>::try_from(answers).ok())
        else {
            FormatService::info("Operation has been canceled");
            return Ok(());
        };

        let grade = Grade::parse(&grade);
        if !grade.is_known() {
            FormatService::warning(&format!(
                "Grade '{}' is not on the grade-point table and counts as 0.0",
                grade
            ));
        }
        self.records.add_result(&student_id, &course_id, grade)?;
        FormatService::success("Result added successfully.");
        Ok(())
    }
}
