//! Input handler for the interactive form using rustyline
//!
//! Prompts for each of the five factors in turn. An empty answer keeps the
//! default shown in brackets; an unparsable answer re-prompts the field.

use crate::types::StudentInputs;
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::str::FromStr;

/// Input handler managing the readline interface
///
/// Answer history lives in memory for the current run only.
pub struct InputHandler {
    editor: DefaultEditor,
}

impl InputHandler {
    /// Create new input handler
    pub fn new() -> Result<Self> {
        Ok(InputHandler {
            editor: DefaultEditor::new()?,
        })
    }

    /// Read one raw line
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input
    /// - Ok(None) for EOF (Ctrl-D) or Ctrl-C
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }

    /// Prompt for one numeric field until it parses
    fn read_number<T>(&mut self, label: &str, default: T) -> Result<Option<T>>
    where
        T: FromStr + Copy + std::fmt::Display,
    {
        let prompt = format!("{} [{}]: ", label, default);
        loop {
            let Some(answer) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            match parse_number(&answer, default) {
                Some(value) => return Ok(Some(value)),
                None => println!("Please enter a number."),
            }
        }
    }

    /// Prompt for the part-time job answer until it parses
    fn read_yes_no(&mut self, label: &str, default: bool) -> Result<Option<bool>> {
        let prompt = format!("{} [{}]: ", label, if default { "Yes" } else { "No" });
        loop {
            let Some(answer) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            match parse_yes_no(&answer, default) {
                Some(value) => return Ok(Some(value)),
                None => println!("Please answer yes or no."),
            }
        }
    }

    /// Fill in the whole form; `None` when the user quits
    pub fn read_form(&mut self, defaults: &StudentInputs) -> Result<Option<StudentInputs>> {
        let Some(study_hours) = self.read_number("Study Hours per Day", defaults.study_hours)?
        else {
            return Ok(None);
        };
        let Some(attendance) =
            self.read_number("Attendance Percentage", defaults.attendance_percent)?
        else {
            return Ok(None);
        };
        let Some(mental_health) = self.read_number(
            "Mental Health Rating (1=Poor, 10=Excellent)",
            defaults.mental_health_rating,
        )?
        else {
            return Ok(None);
        };
        let Some(sleep_hours) = self.read_number("Sleep Hours per Night", defaults.sleep_hours)?
        else {
            return Ok(None);
        };
        let Some(part_time_job) = self.read_yes_no("Part-Time Job", defaults.part_time_job)?
        else {
            return Ok(None);
        };

        Ok(Some(StudentInputs::new(
            study_hours,
            attendance,
            mental_health,
            sleep_hours,
            part_time_job,
        )))
    }

    /// Ask whether to run another prediction
    pub fn confirm_again(&mut self) -> Result<bool> {
        Ok(self
            .read_yes_no("Predict again?", true)?
            .unwrap_or(false))
    }
}

/// Parse a numeric answer; empty keeps the default
pub fn parse_number<T: FromStr>(answer: &str, default: T) -> Option<T> {
    let answer = answer.trim().trim_end_matches('%');
    if answer.is_empty() {
        return Some(default);
    }
    answer.trim().parse().ok()
}

/// Parse a yes/no answer; empty keeps the default
pub fn parse_yes_no(answer: &str, default: bool) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" | "1" | "true" => Some(true),
        "n" | "no" | "0" | "false" => Some(false),
        _ => None,
    }
}
