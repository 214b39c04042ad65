//! Line-by-line auction iterator.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::auction::Auction;
use crate::error::Result;
use crate::parser::AuctionParser;

/// Iterator over the auctions of a log, read one line at a time.
///
/// Applies the same skip/keep rules as
/// [`AuctionParser::parse_str`](crate::parser::AuctionParser::parse_str).
/// After an error has been yielded the iterator is finished.
pub struct AuctionIterator<R: BufRead> {
    reader: R,
    parser: AuctionParser,
    total_bytes: Option<u64>,
    bytes_read: u64,
    line_buffer: Vec<u8>,
    finished: bool,
}

impl AuctionIterator<BufReader<File>> {
    /// Opens a log file using the parser's configured buffer size.
    pub fn open(path: impl AsRef<Path>, parser: AuctionParser) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();
        let reader = BufReader::with_capacity(parser.config().buffer_size, file);
        debug!(path = %path.display(), file_size, "streaming log");
        Ok(Self::new(reader, Some(file_size), parser))
    }
}

impl<R: BufRead> AuctionIterator<R> {
    /// Wraps any buffered reader. `total_bytes` enables progress reporting.
    pub fn new(reader: R, total_bytes: Option<u64>, parser: AuctionParser) -> Self {
        Self {
            reader,
            parser,
            total_bytes,
            bytes_read: 0,
            line_buffer: Vec::with_capacity(4096),
            finished: false,
        }
    }

    /// Returns the number of bytes processed so far.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    /// Returns the total input size in bytes, if known.
    pub fn total_bytes(&self) -> Option<u64> {
        self.total_bytes
    }

    /// Returns approximate progress as a percentage (0.0 to 100.0).
    ///
    /// Returns `None` when the input size is unknown or zero.
    pub fn progress(&self) -> Option<f64> {
        match self.total_bytes {
            Some(0) | None => None,
            Some(total) => Some((self.bytes_read as f64 / total as f64 * 100.0).min(100.0)),
        }
    }

    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        self.line_buffer.clear();
        let bytes = self.reader.read_until(b'\n', &mut self.line_buffer)?;
        if bytes == 0 {
            return Ok(None);
        }
        self.bytes_read += bytes as u64;
        Ok(Some(String::from_utf8_lossy(&self.line_buffer).into_owned()))
    }
}

impl<R: BufRead> Iterator for AuctionIterator<R> {
    type Item = Result<Auction>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.finished = true;
                    return None;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            };

            match self.parser.process_line(line.trim_end_matches(['\r', '\n'])) {
                Ok(Some(auction)) => return Some(Ok(auction)),
                Ok(None) => {}
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
