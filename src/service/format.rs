use std::io::{BufRead, Write};

use colored::{ColoredString, Colorize};
use log::error;

use crate::domain::Standing;

pub(super) struct FormatService;

const HEADER_WIDTH: usize = 58;

impl FormatService {
    pub fn header(title: &str) {
        let border = "═".repeat(HEADER_WIDTH);
        println!();
        println!("{}", border.bright_cyan());
        println!(
            "{}{}{}",
            "║".bright_cyan(),
            format!("{:^width$}", title, width = HEADER_WIDTH - 2).bright_white(),
            "║".bright_cyan()
        );
        println!("{}", border.bright_cyan());
    }

    /// Prints a numbered menu. `options` are `(key, label)` pairs.
    pub fn menu(title: &str, options: &[(&str, &str)]) {
        Self::header(title);
        for (key, label) in options {
            println!("  {} {}", format!("[{}]", key).green(), label);
        }
    }

    /// Prints `title` with its options and reads the selection.
    pub fn choice<R>(input: &mut R, title: &str, options: &[(&str, &str)]) -> Option<String>
    where
        R: BufRead,
    {
        Self::menu(title, options);
        print!("\n{} ", "↳ Enter your choice:".bright_yellow());
        Self::read_line(input)
    }

    pub fn table<T>(title: &str, items: &[T], empty: &str)
    where
        T: std::fmt::Display,
    {
        if items.is_empty() {
            Self::info(empty);
            return;
        }
        println!("\n{}", title.bright_white().bold());
        for item in items {
            println!("  {}", item);
        }
    }

    pub fn field(name: &str, value: &dyn std::fmt::Display) {
        println!("  {} {}", format!("{}:", name).cyan(), value);
    }

    pub fn error(msg: &str) {
        println!("{} {}", "[ERROR]".red().bold(), msg.red());
    }
    pub fn success(msg: &str) {
        println!("{} {}", "[SUCCESS]".green().bold(), msg)
    }
    pub fn info(msg: &str) {
        println!("{} {}", "[INFO]".cyan(), msg)
    }
    pub fn warning(msg: &str) {
        println!("{} {}", "[WARNING]".yellow().bold(), msg)
    }

    pub fn gpa(gpa: f64) -> ColoredString {
        let standing = Standing::from_gpa(gpa);
        let text = format!("{:.2} ({})", gpa, standing.letter());
        match standing {
            Standing::FirstClass => text.bright_green(),
            Standing::UpperSecond => text.green(),
            Standing::LowerSecond => text.yellow(),
            Standing::Third => text.bright_yellow(),
            Standing::Pass => text.magenta(),
            Standing::ConditionalPass => text.red(),
            Standing::Fail => text.bright_red(),
        }
    }

    pub fn standing_scale() {
        println!(
            "{}",
            format!("{:^13} {:^7} {:^20}", "GPA Range", "Grade", "Standing").bright_white()
        );
        println!("{}", "─".repeat(42).bright_black());
        for standing in Standing::SCALE {
            let range = format!(
                "{:.2} - {:.2}",
                standing.lower_bound(),
                standing.upper_bound()
            );
            println!(
                "{:^13} {:^7} {:^20}",
                range,
                standing.letter(),
                standing.label()
            );
        }
        println!("{}", "─".repeat(42).bright_black());
        Self::info(&format!(
            "Minimum passing GPA is usually {:.2}",
            Standing::ConditionalPass.lower_bound()
        ));
        Self::info("GPA is the credit-weighted average of grade points.");
    }

    /// Returns false if the pending output could not be written.
    pub fn flush<W>(out: &mut W) -> bool
    where
        W: Write,
    {
        match out.flush() {
            Ok(()) => true,
            Err(err) => {
                error!("Failed to write to the terminal: {}", err);
                false
            }
        }
    }

    /// Reads one line from `input` with the trailing newline removed.
    /// Returns `None` on end of input or if reading fails.
    pub fn read_line<R>(input: &mut R) -> Option<String>
    where
        R: BufRead,
    {
        Self::flush(&mut std::io::stdout());
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                error!("Failed to read input: {}", err);
                None
            }
        }
    }

    /// returns either the answers to all [DialogEntry::TextInput] entries in order or None if the input ended
    pub fn dialog<R>(input: &mut R, dialog: Vec<DialogEntry>) -> Option<Vec<String>>
    where
        R: BufRead,
    {
        let mut output = Vec::new();
        for entry in dialog {
            match entry {
                DialogEntry::Message(msg) => {
                    println!("{}", msg.cyan());
                    continue;
                }
                DialogEntry::TextInput(msg) => {
                    let out = loop {
                        print!("{} ", format!("↳ {}:", msg).bright_yellow());
                        let line = Self::read_line(input)?;
                        if line.is_empty() {
                            Self::error("This field is required!");
                            continue;
                        }
                        break line;
                    };
                    output.push(out);
                }
            }
        }
        Some(output)
    }
}

pub(crate) enum DialogEntry {
    Message(String),
    TextInput(String),
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn required_text_is_prompted_again() {
        let mut input = Cursor::new("\n  \nAda\n");
        let out = FormatService::dialog(
            &mut input,
            vec![
                DialogEntry::Message("Student details".into()),
                DialogEntry::TextInput("Name".into()),
            ],
        );
        assert_eq!(out, Some(vec!["Ada".to_string()]));
    }

    #[test]
    fn end_of_input_cancels() {
        let mut input = Cursor::new("S1\n");
        let out = FormatService::dialog(
            &mut input,
            vec![
                DialogEntry::TextInput("ID".into()),
                DialogEntry::TextInput("Name".into()),
            ],
        );
        assert_eq!(out, None);
    }

    struct ClosedTerminal;

    impl Write for ClosedTerminal {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn flush_failure_is_reported() {
        assert!(!FormatService::flush(&mut ClosedTerminal));
        assert!(FormatService::flush(&mut Vec::<u8>::new()));
    }
}
