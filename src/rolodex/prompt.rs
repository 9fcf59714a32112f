//! Repeat-until-valid input collection.
//!
//! [`Prompter`] is generic over its reader and writer, so the menu runs it on
//! stdin/stdout and tests run it on in-memory buffers. Lines are handed to validators
//! exactly as typed, minus the line terminator.

use crate::error::Result;
use crate::model::Attribute;
use std::io::{BufRead, Write};

/// `Enter birthday date (e.g., 2004 23 May): `
pub fn attribute_prompt(attribute: Attribute) -> String {
    let info = attribute.info();
    match info.example {
        Some(example) => format!("Enter {} (e.g., {}): ", info.label, example),
        None => format!("Enter {}: ", info.label),
    }
}

pub fn attribute_error(attribute: Attribute) -> String {
    format!(
        "You have entered invalid {}. Please recheck and try again. ",
        attribute.label()
    )
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `prompt` and reads one line. `None` means the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Asks until `accept` returns true and returns the accepted line.
    ///
    /// There is no retry limit. Each rejection prints `error` before asking again.
    pub fn prompt_until<F>(&mut self, accept: F, prompt: &str, error: &str) -> Result<Option<String>>
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            if accept(&line) {
                return Ok(Some(line));
            }
            tracing::debug!(prompt, "rejected input");
            writeln!(self.output, "{}", error)?;
        }
    }

    /// [`Prompter::prompt_until`] with the attribute's own rule and wording.
    pub fn prompt_attribute(&mut self, attribute: Attribute) -> Result<Option<String>> {
        self.prompt_until(
            |text| crate::validation::check(attribute, text),
            &attribute_prompt(attribute),
            &attribute_error(attribute),
        )
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::valid_as_name;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn retries_until_accepted() {
        let mut p = prompter("A\nA1\nAl\n");
        let value = p.prompt_until(valid_as_name, "Name: ", "bad name").unwrap();
        assert_eq!(value.as_deref(), Some("Al"));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("bad name").count(), 2);
        assert_eq!(out.matches("Name: ").count(), 3);
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let mut p = prompter("  spaced  \r\n");
        assert_eq!(p.ask("> ").unwrap().as_deref(), Some("  spaced  "));
    }

    #[test]
    fn exhausted_input_stops_the_loop() {
        let mut p = prompter("A\n");
        assert_eq!(p.prompt_until(valid_as_name, "Name: ", "bad").unwrap(), None);
    }

    #[test]
    fn last_line_without_newline() {
        let mut p = prompter("Bo");
        assert_eq!(p.ask("").unwrap().as_deref(), Some("Bo"));
    }

    #[test]
    fn attribute_wording() {
        assert_eq!(
            attribute_prompt(Attribute::Birthday),
            "Enter birthday date (e.g., 2004 23 May): "
        );
        assert_eq!(attribute_prompt(Attribute::Email), "Enter email address: ");
        assert_eq!(
            attribute_error(Attribute::PhoneNumber),
            "You have entered invalid phone number. Please recheck and try again. "
        );
    }

    #[test]
    fn prompt_attribute_accepts_empty_optional_field() {
        let mut p = prompter("\n");
        assert_eq!(
            p.prompt_attribute(Attribute::Email).unwrap().as_deref(),
            Some("")
        );
    }
}
