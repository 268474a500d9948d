use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Where the game reads the player's lines from.
pub trait LineSource {
    /// Shows `prompt` and waits for one line, without its line ending.
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

impl<L: LineSource + ?Sized> LineSource for &mut L {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).read_line(prompt)
    }
}

/// Prompts on a writer and blocks on a reader, normally stdout and stdin.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> LineSource for ConsoleInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        // undecodable bytes become U+FFFD and are rejected like any other typo
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
    }
}

/// Replays prepared lines and remembers every prompt it was shown.
#[derive(Clone, Debug, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_owned());
        Ok(self.lines.pop_front())
    }
}
