//! Line-oriented input source reading location tokens.

use std::io::{self, BufRead, Write};
use tictac_core::{InputError, InputSource, Move};
use tracing::{debug, instrument};

/// Prompts on `out` and reads one line per token from `reader`.
#[derive(Debug)]
pub struct LineInput<R, W> {
    reader: R,
    out: W,
}

impl LineInput<io::StdinLock<'static>, io::Stdout> {
    /// Input from standard input, prompting on standard output.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    /// Creates an input source over `reader`, prompting on `out`.
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    /// Returns the prompt writer.
    pub fn into_writer(self) -> W {
        self.out
    }
}

/// Formats the prompt listing the open locations.
pub fn prompt(available: &[Move]) -> String {
    let locations: Vec<String> = available.iter().map(Move::to_string).collect();
    format!("select location [{}]: ", locations.join(", "))
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    #[instrument(skip_all, fields(open = available.len()))]
    fn next_token(&mut self, available: &[Move]) -> Result<String, InputError> {
        write!(self.out, "{}", prompt(available))?;
        self.out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        debug!(line = line.trim_end(), "Read token");
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_lists_open_cells() {
        let available = [Move::new(0, 0), Move::new(2, 1)];
        assert_eq!(prompt(&available), "select location [a1, b3]: ");
    }

    #[test]
    fn test_reads_one_line_per_token() {
        let mut input = LineInput::new(Cursor::new("a1\nB2\n"), Vec::new());
        assert_eq!(input.next_token(&[]).unwrap(), "a1\n");
        assert_eq!(input.next_token(&[]).unwrap(), "B2\n");
        assert!(matches!(input.next_token(&[]), Err(InputError::Closed)));

        let prompts = String::from_utf8(input.into_writer()).unwrap();
        assert_eq!(prompts.matches("select location").count(), 3);
    }
}
