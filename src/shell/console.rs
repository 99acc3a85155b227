use std::io::{self, BufRead, Write};

/// Line oriented prompt over any reader/writer pair.
///
/// Every `ask_*` helper prints its prompt once, then keeps reading lines and
/// printing the retry message until a line parses. `Ok(None)` means the input
/// ended.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I, O> Console<I, O>
where
    I: BufRead,
    O: Write,
{
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn say(&mut self, line: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Read the next line without its trailing newline.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt until `parse` accepts a line.
    pub fn ask<T, F>(&mut self, prompt: &str, retry: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Option<T>,
    {
        self.say(prompt)?;
        self.read_valid(retry, parse)
    }

    /// Read lines until `parse` accepts one, without printing a prompt first.
    pub fn read_valid<T, F>(&mut self, retry: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Option<T>,
    {
        self.output.flush()?;
        while let Some(line) = self.read_line()? {
            if let Some(value) = parse(line.trim()) {
                return Ok(Some(value));
            }
            self.say(retry)?;
            self.output.flush()?;
        }
        Ok(None)
    }

    /// Prompt for an integer that is at least `min`.
    pub fn ask_number(&mut self, prompt: &str, retry: &str, min: i32) -> io::Result<Option<i32>> {
        self.ask(prompt, retry, |line| {
            line.parse::<i32>().ok().filter(|value| *value >= min)
        })
    }

    /// Prompt for a non-empty line.
    pub fn ask_text(&mut self, prompt: &str, retry: &str) -> io::Result<Option<String>> {
        self.ask(prompt, retry, |line| {
            (!line.is_empty()).then(|| line.to_string())
        })
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
