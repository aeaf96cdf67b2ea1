//! Line-oriented console prompts with re-prompting on bad input.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{RecordError, RecordResult};

const INVALID_INTEGER: &str = "Invalid input. Please enter a valid number.";
const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";
const NUMBER_OUT_OF_RANGE: &str = "Invalid input. Number is out of range.";

/// Reads trimmed answers from `input` after writing prompts to `output`.
///
/// End of input surfaces as [`RecordError::InputClosed`].
///
/// # Example
///
/// ```
/// use campus_records::shell::Prompter;
///
/// let mut prompter = Prompter::new("abc\n42\n".as_bytes(), Vec::new());
/// assert_eq!(prompter.ask_int("Enter ID: ").unwrap(), 42);
///
/// let (_, output) = prompter.into_inner();
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("Invalid input. Please enter a valid number."));
/// ```
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// The output stream, for writing non-prompt text.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Returns the wrapped streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes one line to the output.
    pub fn say(&mut self, text: &str) -> RecordResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Asks for non-empty text. Blank lines are skipped without re-printing the prompt.
    pub fn ask_text(&mut self, prompt: &str) -> RecordResult<String> {
        self.prompt(prompt)?;
        loop {
            let answer = self.read_line()?;
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
        }
    }

    /// Asks for a 32-bit integer until one parses.
    pub fn ask_int(&mut self, prompt: &str) -> RecordResult<i32> {
        self.ask_parsed(prompt, |s| s.parse::<i32>().map_err(|_| INVALID_INTEGER))
    }

    /// Asks for a floating-point number until one parses.
    pub fn ask_f64(&mut self, prompt: &str) -> RecordResult<f64> {
        self.ask_parsed(prompt, |s| s.parse::<f64>().map_err(|_| INVALID_NUMBER))
    }

    /// Asks for a decimal amount until one parses. Scientific notation is accepted.
    ///
    /// Well-formed numbers a [`Decimal`] cannot hold get a range complaint
    /// rather than a format one.
    pub fn ask_decimal(&mut self, prompt: &str) -> RecordResult<Decimal> {
        self.ask_parsed(prompt, |s| {
            Decimal::from_str(s)
                .or_else(|_| Decimal::from_scientific(s))
                .map_err(|_| match s.parse::<f64>() {
                    Ok(value) if value.is_finite() => NUMBER_OUT_OF_RANGE,
                    _ => INVALID_NUMBER,
                })
        })
    }

    /// Repeats `ask` until `check` accepts the value.
    ///
    /// Argument errors from `check` are shown as `Error: <message>`; any
    /// other error ends the prompt.
    pub fn ask_until<T, U>(
        &mut self,
        mut ask: impl FnMut(&mut Self) -> RecordResult<T>,
        check: impl Fn(T) -> RecordResult<U>,
    ) -> RecordResult<U> {
        loop {
            let value = ask(self)?;
            match check(value) {
                Ok(accepted) => return Ok(accepted),
                Err(RecordError::InvalidArgument { field, message }) => {
                    debug!(field = %field, "Value rejected, prompting again");
                    writeln!(self.output, "Error: {}", message)?;
                }
                Err(other) => return Err(other),
            }
        }
    }

    fn ask_parsed<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, &'static str>,
    ) -> RecordResult<T> {
        loop {
            self.prompt(prompt)?;
            let answer = self.read_line()?;
            match parse(answer) {
                Ok(value) => return Ok(value),
                Err(complaint) => {
                    warn!(prompt = prompt.trim_end(), complaint, "Rejected numeric input");
                    writeln!(self.output, "{}", complaint)?;
                }
            }
        }
    }

    fn prompt(&mut self, prompt: &str) -> RecordResult<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> RecordResult<&str> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(RecordError::InputClosed);
        }
        Ok(self.line.trim())
    }
}
