use anyhow::{Result, bail};
use std::io::{BufRead, Write};

/// Asks for values on a line-oriented terminal.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Returns `value` if one was given on the command line, otherwise asks for it.
    pub fn value_or_ask(&mut self, value: Option<String>, label: &str) -> Result<String> {
        match value {
            Some(value) => Ok(value),
            None => self.ask(label),
        }
    }

    /// Repeats the question until a non-blank answer is given.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        loop {
            write!(self.output, "{label}: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("No value given for {label}");
            }
            let answer = line.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
        }
    }
}
