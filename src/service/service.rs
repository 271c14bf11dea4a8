use std::{io::BufRead, time::Instant};

use colored::Colorize;
use log::{debug, info};

use crate::domain::Records;

use super::{
    course::CourseService, format::FormatService, report::ReportService, result::ResultService,
    student::StudentService, Flow,
};

const OPTIONS: [(&str, &str); 5] = [
    ("1", "Students Management"),
    ("2", "Courses Management"),
    ("3", "Results Management"),
    ("4", "Grade Report"),
    ("5", "Exit System"),
];

/// The interactive menu loop. All records live in memory for the lifetime of the service.
pub struct Service<R>
where
    R: BufRead,
{
    records: Records,
    input: R,
    started: Instant,
}

impl<R> Service<R>
where
    R: BufRead,
{
    pub fn new(input: R) -> Service<R> {
        Service {
            records: Records::new(),
            input,
            started: Instant::now(),
        }
    }

    pub fn run(&mut self) {
        info!("Session started");
        loop {
            let Some(choice) =
                FormatService::choice(&mut self.input, "GPA CALCULATOR SYSTEM", &OPTIONS)
            else {
                debug!("Input closed");
                break;
            };
            let flow = match choice.as_str() {
                "1" => StudentService::new(&mut self.records, &mut self.input).run(),
                "2" => CourseService::new(&mut self.records, &mut self.input).run(),
                "3" => ResultService::new(&mut self.records, &mut self.input).run(),
                "4" => ReportService::new(&self.records, &mut self.input).run(),
                "5" => Flow::Quit,
                _ => {
                    FormatService::error("Invalid choice! Please select 1-5.");
                    Flow::Back
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        self.summary();
    }

    fn summary(&self) {
        let elapsed = self.started.elapsed().as_secs();
        let (hours, minutes, seconds) = (elapsed / 3600, (elapsed % 3600) / 60, elapsed % 60);
        FormatService::header("Thank you for using GPA Calculator System!");
        println!("{}", "Session Summary:".cyan());
        println!("  Duration: {:02}:{:02}:{:02}", hours, minutes, seconds);
        println!("  Students: {}", self.records.students.len());
        println!("  Courses:  {}", self.records.courses.len());
        println!("  Results:  {}", self.records.results.len());
        FormatService::warning("Records are kept in memory only and are discarded now.");
        info!(
            "Session ended after {}s with {} results",
            elapsed,
            self.records.results.len()
        );
    }
}
