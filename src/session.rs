//! Interactive autocomplete session.
//!
//! Reads one prefix per line and answers with the words that complete it.
//! The session is generic over its input and output so it can be driven by
//! a terminal, a pipe or an in-memory buffer.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::debug;

use crate::config::{OutputFormat, SessionConfig};
use crate::data_structures::NiihauTrie;
use crate::error::NiihauResult;

/// One autocomplete answer.
///
/// `matches` is `None` when no stored word starts with `prefix`, which is
/// different from an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion<'p> {
    /// The prefix that was queried
    pub prefix: &'p str,
    /// Matching words, possibly truncated to the configured limit
    pub matches: Option<Vec<String>>,
}

impl<'p> Completion<'p> {
    /// Completes `prefix` against `trie`, keeping at most `limit` words.
    pub fn resolve(trie: &NiihauTrie, prefix: &'p str, limit: Option<usize>) -> Self {
        let matches: Option<Vec<String>> = trie.completions(prefix).map(|words| match limit {
            Some(limit) => words.take(limit).collect(),
            None => words.collect(),
        });

        Self { prefix, matches }
    }

    /// Whether the prefix exists in the trie.
    pub fn is_found(&self) -> bool {
        self.matches.is_some()
    }

    /// Renders the answer as a single line, without the trailing newline.
    pub fn render(&self, format: OutputFormat) -> NiihauResult<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Text => Ok(match &self.matches {
                Some(words) => format!(
                    "Prefix {} matched the following words: [{}]",
                    self.prefix,
                    words.join(", ")
                ),
                None => format!("Prefix {} matched no words", self.prefix),
            }),
        }
    }
}

/// A read-answer loop over a trie.
#[derive(Debug)]
pub struct Session<'t, R, W> {
    trie: &'t NiihauTrie,
    config: SessionConfig,
    input: R,
    output: W,
}

impl<'t, R, W> Session<'t, R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a session answering from `trie`.
    pub fn new(trie: &'t NiihauTrie, config: SessionConfig, input: R, output: W) -> Self {
        Self {
            trie,
            config,
            input,
            output,
        }
    }

    /// Runs until the input is exhausted.
    ///
    /// # Returns
    ///
    /// The number of prefixes answered.
    pub fn run(&mut self) -> NiihauResult<usize> {
        let mut answered = 0;
        let mut line = String::new();

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                // End of input: finish the prompt line
                writeln!(self.output)?;
                break;
            }

            let prefix = line.strip_suffix('\n').unwrap_or(&line);
            let prefix = prefix.strip_suffix('\r').unwrap_or(prefix);

            let rendered = self.answer(prefix)?;
            writeln!(self.output, "{rendered}")?;
            self.output.flush()?;
            answered += 1;
        }

        debug!(answered, "Session finished");
        Ok(answered)
    }

    /// Renders the answer for one prefix.
    pub fn answer(&self, prefix: &str) -> NiihauResult<String> {
        let completion = Completion::resolve(self.trie, prefix, self.config.result_limit());
        debug!(
            prefix,
            found = completion.is_found(),
            matches = completion.matches.as_ref().map_or(0, Vec::len),
            "Answered prefix"
        );
        completion.render(self.config.format)
    }

    /// Consumes the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
