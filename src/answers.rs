//! Answer sources for interactive prompts.
//!
//! Every prompt in a session pulls one raw line from an [`AnswerSource`].
//! Interactive runs read stdin, `--answers` runs read a file, and tests feed
//! a scripted queue. Validation and re-prompting happen in the callers; a
//! source only reports when it has nothing left to give.

use crate::errors::{ScopeError, ScopeResult};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub trait AnswerSource {
    /// Next raw answer line, without its trailing newline.
    fn next_answer(&mut self) -> ScopeResult<String>;
}

/// Line-oriented source over any buffered reader
pub struct ReaderAnswers<R> {
    reader: R,
    lines_read: usize,
}

impl<R: BufRead> ReaderAnswers<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            lines_read: 0,
        }
    }
}

impl ReaderAnswers<std::io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl ReaderAnswers<BufReader<File>> {
    pub fn from_file(path: &Path) -> ScopeResult<Self> {
        let file = File::open(path).map_err(|e| ScopeError::io(e, path.to_path_buf()))?;
        log::info!("Reading answers from {:?}", path);
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> AnswerSource for ReaderAnswers<R> {
    fn next_answer(&mut self) -> ScopeResult<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            log::debug!("Answer source exhausted after {} lines", self.lines_read);
            return Err(ScopeError::AnswersExhausted);
        }
        self.lines_read += 1;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Fixed, pre-scripted answer sequence
#[derive(Debug, Default)]
pub struct ScriptedAnswers {
    queue: VecDeque<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn next_answer(&mut self) -> ScopeResult<String> {
        self.queue.pop_front().ok_or(ScopeError::AnswersExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_reader_strips_line_endings() {
        let mut answers = ReaderAnswers::new(Cursor::new("1\r\n2\n3"));
        assert_eq!(answers.next_answer().unwrap(), "1");
        assert_eq!(answers.next_answer().unwrap(), "2");
        assert_eq!(answers.next_answer().unwrap(), "3");
        assert!(matches!(answers.next_answer(), Err(ScopeError::AnswersExhausted)));
    }

    #[test]
    fn test_reader_keeps_blank_lines() {
        let mut answers = ReaderAnswers::new(Cursor::new("\nno\n"));
        assert_eq!(answers.next_answer().unwrap(), "");
        assert_eq!(answers.next_answer().unwrap(), "no");
    }

    #[test]
    fn test_answers_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "4").unwrap();
        writeln!(temp_file, "yes").unwrap();
        temp_file.flush().unwrap();

        let mut answers = ReaderAnswers::from_file(temp_file.path()).unwrap();
        assert_eq!(answers.next_answer().unwrap(), "4");
        assert_eq!(answers.next_answer().unwrap(), "yes");
    }

    #[test]
    fn test_missing_answer_file() {
        let result = ReaderAnswers::from_file(Path::new("/nonexistent/answers.txt"));
        assert!(matches!(result, Err(ScopeError::Io { path: Some(_), .. })));
    }

    #[test]
    fn test_scripted_answers_drain() {
        let mut answers = ScriptedAnswers::new(["1", "x"]);
        assert_eq!(answers.remaining(), 2);
        assert_eq!(answers.next_answer().unwrap(), "1");
        assert_eq!(answers.next_answer().unwrap(), "x");
        assert!(matches!(answers.next_answer(), Err(ScopeError::AnswersExhausted)));
    }
}
