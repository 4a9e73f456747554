//! Line-based prompts over any reader/writer pair.
//!
//! Invalid input re-prompts; end of input is reported as `None` or an error,
//! never as a default answer.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};

use omni_quiz::{Likert, Question};

use crate::catalogs::CatalogSource;

const SCALE_LABELS: [&str; 5] = [
    "Strongly disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly agree",
];

/// Prompt driver for the interactive quiz.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for free-form messages.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the prompter, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask how many questions to answer, until a value in `1..=pool_len`.
    ///
    /// # Errors
    ///
    /// Fails when input ends first.
    pub fn ask_question_count(&mut self, pool_len: usize) -> Result<usize> {
        writeln!(self.output, "Welcome to the Personality Quiz!")?;
        loop {
            write!(self.output, "\nChoose number of questions (1-{pool_len}): ")?;
            let Some(line) = self.read_line()? else {
                bail!("input closed before a question count was chosen");
            };
            match line.parse::<usize>() {
                Ok(count) if (1..=pool_len).contains(&count) => return Ok(count),
                _ => writeln!(
                    self.output,
                    "Please enter a whole number between 1 and {pool_len}."
                )?,
            }
        }
    }

    /// Show a question with the five-point scale and read a valid answer.
    ///
    /// # Errors
    ///
    /// Fails when input ends first.
    pub fn ask_answer(&mut self, question: &Question) -> Result<Likert> {
        writeln!(self.output, "\nHow much do you agree with this statement?")?;
        writeln!(self.output, "\"{}.\"\n", question.text())?;
        for (value, label) in (1..).zip(SCALE_LABELS) {
            writeln!(self.output, "{value}. {label}")?;
        }
        loop {
            write!(self.output, "\nEnter your answer here (1-5): ")?;
            let Some(line) = self.read_line()? else {
                bail!("input closed before question was answered");
            };
            match line.parse::<i64>().ok().map(Likert::new) {
                Some(Ok(answer)) => return Ok(answer),
                _ => writeln!(self.output, "Answers must be a number from 1 to 5.")?,
            }
        }
    }

    /// Show the catalog menu. `None` means the user is done (or input ended).
    ///
    /// # Errors
    ///
    /// IO errors only.
    pub fn choose_catalog(&mut self, catalogs: &[CatalogSource]) -> Result<Option<usize>> {
        loop {
            writeln!(self.output)?;
            for (idx, source) in catalogs.iter().enumerate() {
                writeln!(self.output, "{}. {}", idx + 1, source.name)?;
            }
            writeln!(self.output, "0. To end program.")?;
            write!(
                self.output,
                "\nChoose test number (1-{}, or 0 to end): ",
                catalogs.len()
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(0) => return Ok(None),
                Ok(choice) if choice <= catalogs.len() => return Ok(Some(choice - 1)),
                _ => writeln!(self.output, "No such test: {line:?}.")?,
            }
        }
    }
}
