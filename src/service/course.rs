use std::io::BufRead;

use anyhow::{anyhow, Context};

use crate::{
    domain::{Course, Records},
    Lookup,
};

use super::{
    format::{DialogEntry, FormatService},
    Flow, Reportable, ServiceResult,
};

const OPTIONS: [(&str, &str); 4] = [
    ("1", "View All Courses"),
    ("2", "Add New Course"),
    ("3", "Find Course"),
    ("0", "Return to Main Menu"),
];

pub(super) struct CourseService<'s, R>
where
    R: BufRead,
{
    records: &'s mut Records,
    input: &'s mut R,
}

impl<'s, R> CourseService<'s, R>
where
    R: BufRead,
{
    pub fn new(records: &'s mut Records, input: &'s mut R) -> Self {
        Self { records, input }
    }

    pub fn run(&mut self) -> Flow {
        loop {
            let Some(choice) =
                FormatService::choice(&mut *self.input, "COURSES MANAGEMENT", &OPTIONS)
            else {
                return Flow::Quit;
            };
            let res = match choice.as_str() {
                "0" => return Flow::Back,
                "1" => self.list(),
                "2" => self.add(),
                "3" => self.find(),
                _ => Err(anyhow!("Invalid choice! Please try again.")),
            };
            res.report();
        }
    }

    fn list(&self) -> ServiceResult {
        FormatService::table(
            "Available Courses:",
            self.records.courses.list(),
            "No courses registered.",
        );
        Ok(())
    }

    fn add(&mut self) -> ServiceResult {
        let dialog = vec![
            DialogEntry::Message("Please fill in the course details:".into()),
            DialogEntry::TextInput("Enter Course ID".into()),
            DialogEntry::TextInput("Enter Course Title".into()),
            DialogEntry::TextInput("Enter Credit Hour".into()),
        ];
        let Some([id, title, credit]) = FormatService::dialog(&mut *self.input, dialog)
            .and_then(|answers| <[String; 3]>::try_from(answers).ok())
        else {
            FormatService::info("Operation has been canceled");
            return Ok(());
        };

        let credit = credit
            .parse::<f64>()
            .with_context(|| anyhow!("Invalid credit hour '{}', course was not added", credit))?;

        if self.records.courses.find(&id).is_some() {
            FormatService::warning(&format!(
                "A course with ID '{}' already exists. Lookups by this ID keep returning the first one.",
                id
            ));
        }
        self.records.courses.add(Course::new(id, title, credit));
        FormatService::success("Course added successfully.");
        Ok(())
    }

    fn find(&mut self) -> ServiceResult {
        let dialog = vec![DialogEntry::TextInput("Enter Course ID to search".into())];
        let Some(id) = FormatService::dialog(&mut *self.input, dialog)
            .and_then(|answers| answers.into_iter().next())
        else {
            FormatService::info("Operation has been canceled");
            return Ok(());
        };

        match self.records.courses.find(&id) {
            Some(course) => {
                FormatService::success("Course Found!");
                FormatService::field("ID", &course.id());
                FormatService::field("Title", &course.title());
                FormatService::field("Credits", &course.credit());
            }
            None => FormatService::error(&format!("No course found with ID: {}", id)),
        }
        Ok(())
    }
}
