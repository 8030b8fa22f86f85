// Reading documents from disk.
//
// The loader streams a source into the aggregator one '\n'-terminated chunk at
// a time. A line ends at "\r\n", "\n", or a lone "\r", so LF, CRLF, and old
// Mac-style CR files all count lines the same.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::frequency::Document;

/// Why a document could not be aggregated.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The source could not be opened at all.
    #[error("{} is not found!", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source opened but reading it failed part way through.
    #[error("{} could not be read: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocumentError {
    pub fn path(&self) -> &Path {
        match self {
            DocumentError::NotFound { path, .. } | DocumentError::Read { path, .. } => path,
        }
    }
}

/// Trait for anything that can turn a path into an aggregated document.
pub trait DocumentLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Document, DocumentError>;
}

/// Loads plain-text documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl DocumentLoader for FileLoader {
    fn load(&self, path: &Path) -> Result<Document, DocumentError> {
        let file = File::open(path).map_err(|source| DocumentError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let document = read_document(path.to_string_lossy(), BufReader::new(file)).map_err(
            |source| DocumentError::Read {
                path: path.to_path_buf(),
                source,
            },
        )?;

        debug!(
            path = %path.display(),
            lines = document.stats.lines,
            words = document.stats.words,
            distinct = document.stats.distinct_words,
            "Aggregated document"
        );
        Ok(document)
    }
}

/// Splits a byte stream into lines ended by `\r\n`, `\n`, or a lone `\r`.
///
/// A final line without a terminator is yielded only if it is non-empty.
struct Lines<R> {
    reader: R,
    pending: VecDeque<Vec<u8>>,
    done: bool,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Queue the lines in one `read_until(b'\n')` chunk. A "\r\n" pair can
    /// never straddle two chunks since each chunk ends at the '\n'.
    fn queue_chunk(&mut self, mut chunk: Vec<u8>) {
        let terminated = chunk.last() == Some(&b'\n');
        if terminated {
            chunk.pop();
            if chunk.last() == Some(&b'\r') {
                chunk.pop();
            }
        }

        let mut lines: Vec<Vec<u8>> = chunk.split(|&b| b == b'\r').map(<[u8]>::to_vec).collect();
        // Unterminated chunks only happen at EOF; text after the last '\r' is
        // a line only if there is some
        if !terminated && lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        self.pending.extend(lines);
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            if self.done {
                return None;
            }

            let mut chunk = Vec::new();
            match self.reader.read_until(b'\n', &mut chunk) {
                Ok(0) => self.done = true,
                Ok(_) => self.queue_chunk(chunk),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Aggregate every line available from `reader` into a document.
///
/// Stops at the first I/O error and returns it; a partially read document is
/// never handed back.
pub fn read_document<R: BufRead>(name: impl Into<String>, reader: R) -> io::Result<Document> {
    let mut failure = None;
    let lines = Lines::new(reader).map_while(|line| match line {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            failure = Some(e);
            None
        }
    });

    let document = Document::from_lines(name, lines);
    match failure {
        Some(e) => Err(e),
        None => Ok(document),
    }
}
