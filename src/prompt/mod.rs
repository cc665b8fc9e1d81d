//! Line-oriented prompting over any buffered reader and writer.
//!
//! The interactive binary wires this to the terminal; tests drive it with
//! in-memory buffers.


use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use tracing::{debug, warn};

use crate::{Result, SetupError};

/// Upper bound on re-prompts for a required field.
pub const MAX_REQUIRED_ATTEMPTS: usize = 10_000;

/// Asks questions on `output` and reads trimmed answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Creates a prompter bound to the process's standard streams.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: MAX_REQUIRED_ATTEMPTS,
        }
    }

    /// Overrides how many times a required field is asked before giving up.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Asks for one value.
    ///
    /// Shows `label [default]: ` when a non-empty default is given and
    /// returns the default on an empty answer. Without a default the field
    /// is required: shows `label: `, then `label (required): ` until a
    /// non-empty answer arrives.
    ///
    /// # Errors
    /// Returns `SetupError::InputClosed` if the input ends first,
    /// `SetupError::RequiredFieldUnanswered` once the attempt bound is hit,
    /// or `SetupError::Io` if the streams fail.
    pub fn prompt(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        match default.filter(|d| !d.is_empty()) {
            Some(default) => {
                write!(self.output, "{label} [{default}]: ")?;
                let answer = self.read_answer(label)?;
                if answer.is_empty() {
                    debug!(label, "Using default");
                    Ok(default.to_string())
                } else {
                    Ok(answer)
                }
            }
            None => self.prompt_required(label),
        }
    }

    /// Mutable access to the output stream, for section headers and echoes.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter, returning its streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn prompt_required(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}: ")?;

        for attempt in 1..=self.max_attempts {
            let answer = self.read_answer(label)?;
            if !answer.is_empty() {
                return Ok(answer);
            }

            debug!(label, attempt, "Empty answer for required field");
            if attempt < self.max_attempts {
                write!(self.output, "{label} (required): ")?;
            }
        }

        warn!(label, attempts = self.max_attempts, "Giving up on required field");
        Err(SetupError::RequiredFieldUnanswered {
            label: label.to_string(),
            attempts: self.max_attempts,
        })
    }

    fn read_answer(&mut self, label: &str) -> Result<String> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SetupError::InputClosed {
                label: label.to_string(),
            });
        }

        Ok(line.trim().to_string())
    }
}
