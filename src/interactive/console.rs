//! Line-based input/output port for human-driven play

use crate::output::formatters::ranking_style;
use indicatif::ProgressBar;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Read-line / write-line capability the human loop talks through
pub trait Console {
    /// Show `prompt` and read one line, without its line terminator
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    /// Any I/O error from the underlying stream.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write one line of output
    ///
    /// # Errors
    /// Any I/O error from the underlying stream.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Progress bar to tick while `pool_size` suggestions are ranked
    fn ranking_progress(&mut self, _pool_size: usize) -> ProgressBar {
        ProgressBar::hidden()
    }
}

/// Console over the process's stdin and stdout
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}: ")?;
        stdout.flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }

    fn ranking_progress(&mut self, pool_size: usize) -> ProgressBar {
        let pb = ProgressBar::new(pool_size as u64);
        pb.set_style(ranking_style());
        pb.set_message("ranking suggestions");
        pb
    }
}

/// Console fed from a fixed script, recording everything written
///
/// Prompts are recorded too, prefixed with `> `.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    /// # Examples
    /// ```
    /// use entropy_wordle::interactive::{Console, ScriptedConsole};
    ///
    /// let mut console = ScriptedConsole::new(["crane"]);
    /// assert_eq!(console.read_line("Guess").unwrap().as_deref(), Some("crane"));
    /// assert_eq!(console.read_line("Guess").unwrap(), None);
    /// ```
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything written or prompted so far, in order
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Inputs not consumed yet
    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Whether any written line contains `needle`
    #[must_use]
    pub fn printed(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.transcript.push(format!("> {prompt}"));
        Ok(self.inputs.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_console_replays_and_records() {
        let mut console = ScriptedConsole::new(["one", "two"]);

        console.write_line("hello").unwrap();
        assert_eq!(console.read_line("First").unwrap().as_deref(), Some("one"));
        assert_eq!(console.remaining_inputs(), 1);
        assert_eq!(console.read_line("Second").unwrap().as_deref(), Some("two"));
        assert_eq!(console.read_line("Third").unwrap(), None);

        assert_eq!(
            console.transcript(),
            ["hello", "> First", "> Second", "> Third"]
        );
        assert!(console.printed("hell"));
        assert!(!console.printed("bye"));
    }

    #[test]
    fn scripted_console_hides_ranking_progress() {
        let mut console = ScriptedConsole::default();
        assert!(console.ranking_progress(10).is_hidden());
    }
}
