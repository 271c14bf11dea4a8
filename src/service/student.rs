use std::io::BufRead;

use anyhow::anyhow;

use crate::{
    domain::{Records, Student},
    Lookup,
};

use super::{
    format::{DialogEntry, FormatService},
    Flow, Reportable, ServiceResult,
};

const OPTIONS: [(&str, &str); 4] = [
    ("1", "View All Students"),
    ("2", "Add New Student"),
    ("3", "Find Student"),
    ("0", "Return to Main Menu"),
];

pub(super) struct StudentService<'s, R>
where
    R: BufRead,
{
    records: &'s mut Records,
    input: &'s mut R,
}

impl<'s, R> StudentService<'s, R>
where
    R: BufRead,
{
    pub fn new(records: &'s mut Records, input: &'s mut R) -> Self {
        Self { records, input }
    }

    pub fn run(&mut self) -> Flow {
        loop {
            let Some(choice) =
                FormatService::choice(&mut *self.input, "STUDENTS MANAGEMENT", &OPTIONS)
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
            "Registered Students:",
            self.records.students.list(),
            "No students registered.",
        );
        Ok(())
    }

    fn add(&mut self) -> ServiceResult {
        let dialog = vec![
            DialogEntry::Message("Please fill in the student details:".into()),
            DialogEntry::TextInput("Enter Student ID".into()),
            DialogEntry::TextInput("Enter Student Name".into()),
        ];
        let Some([id, name]) = FormatService::dialog(&mut *self.input, dialog)
            .and_then(|answers| <[String; 2]>::try_from(answers).ok())
        else {
            FormatService::info("Operation has been canceled");
            return Ok(());
        };

        if self.records.students.find(&id).is_some() {
            FormatService::warning(&format!(
                "A student with ID '{}' already exists. Lookups by this ID keep returning the first one.",
                id
            ));
        }
        self.records.students.add(Student::new(id, name));
        FormatService::success("Student registered successfully.");
        Ok(())
    }

    fn find(&mut self) -> ServiceResult {
        let dialog = vec![DialogEntry::TextInput("Enter Student ID to search".into())];
        let Some(id) = FormatService::dialog(&mut *self.input, dialog)
            .and_then(|answers| answers.into_iter().next())
        else {
            FormatService::info("Operation has been canceled");
            return Ok(());
        };

        match self.records.students.find(&id) {
            Some(student) => {
                FormatService::success("Student Found!");
                FormatService::field("ID", &student.id());
                FormatService::field("Name", &student.name());
            }
            None => FormatService::error(&format!("No student found with ID: {}", id)),
        }
        Ok(())
    }
}
