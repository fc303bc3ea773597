//! Line-oriented prompting with blocking retry loops.
//!
//! Every question the CLI asks goes through [`Prompter`]. Validation loops
//! never give up on their own: they re-ask until the answer is valid or input
//! runs out, in which case an `UnexpectedEof` error ends the operation.

use phonebook::api::{Continuation, Pager};
use phonebook::error::Result;
use std::io::{self, BufRead, Write};

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

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Prints `prompt` and reads one line without its line ending.
    /// Returns `None` once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
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

    /// Like [`ask`](Self::ask), but running out of input is an error.
    pub fn ask_required(&mut self, prompt: &str) -> io::Result<String> {
        self.ask(prompt)?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    }

    /// Asks until `parse` accepts the answer, printing the message it returns
    /// for each rejected answer.
    pub fn ask_with<T, F>(&mut self, prompt: &str, mut parse: F) -> io::Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, String>,
    {
        loop {
            let answer = self.ask_required(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(message) => self.say(message)?,
            }
        }
    }

    /// Asks until `validate` accepts the answer, printing `error_message`
    /// after each rejected answer.
    pub fn ask_until<T, F>(
        &mut self,
        prompt: &str,
        error_message: &str,
        mut validate: F,
    ) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        self.ask_with(prompt, |answer| {
            validate(answer).ok_or_else(|| error_message.to_string())
        })
    }
}

pub const CONTINUE_PROMPT: &str = "Press Enter to see more records, or x to stop:\n";

impl<R: BufRead, W: Write> Pager for Prompter<R, W> {
    fn emit(&mut self, line: &str) -> Result<()> {
        self.say(line)?;
        Ok(())
    }

    fn next_page(&mut self) -> Result<Continuation> {
        let reply = self.ask_required(CONTINUE_PROMPT)?;
        Ok(Continuation::from_reply(&reply))
    }
}
