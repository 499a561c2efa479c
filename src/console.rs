//! Line-oriented terminal I/O.
//!
//! Prompts go to the output stream without a newline, answers are read one
//! line at a time, and error messages go to a separate error stream.

use std::io::{self, BufRead, Write};

pub struct Console<'a> {
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
    errors: Box<dyn Write + 'a>,
}

impl<'a> Console<'a> {
    pub fn new(
        input: impl BufRead + 'a,
        output: impl Write + 'a,
        errors: impl Write + 'a,
    ) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
            errors: Box::new(errors),
        }
    }

    /// Read one line without its terminator. `None` once input is exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Show `text` and read the answer.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Ask for a menu number until one parses. `None` once input is exhausted.
    pub fn read_choice(&mut self) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.prompt("Please make your choice: ")? else {
                return Ok(None);
            };
            match line.trim().parse() {
                Ok(choice) => return Ok(Some(choice)),
                Err(_) => self.say("Your input is invalid!")?,
            }
        }
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    pub fn report(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.errors, "{}", message)?;
        self.errors.flush()
    }

    /// The output stream, for printing result tables.
    pub fn out(&mut self) -> &mut (dyn Write + 'a) {
        &mut *self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_terminators_only() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut console = Console::new(Cursor::new(" 7 \r\nnext\n"), &mut out, &mut err);

        assert_eq!(console.read_line().unwrap(), Some(" 7 ".to_string()));
        assert_eq!(console.read_line().unwrap(), Some("next".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline_is_read() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut console = Console::new(Cursor::new("13"), &mut out, &mut err);
        assert_eq!(console.read_line().unwrap(), Some("13".to_string()));
    }

    #[test]
    fn test_read_choice_reprompts_on_garbage() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        {
            let mut console = Console::new(Cursor::new("abc\n\n4\n"), &mut out, &mut err);
            assert_eq!(console.read_choice().unwrap(), Some(4));
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Please make your choice: ").count(), 3);
        assert_eq!(text.matches("Your input is invalid!").count(), 2);
    }

    #[test]
    fn test_read_choice_ends_with_input() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut console = Console::new(Cursor::new("x\n"), &mut out, &mut err);
        assert_eq!(console.read_choice().unwrap(), None);
    }

    #[test]
    fn test_report_goes_to_error_stream() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        {
            let mut console = Console::new(Cursor::new(""), &mut out, &mut err);
            console.report("ERROR: boom").unwrap();
        }
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "ERROR: boom\n");
    }
}
