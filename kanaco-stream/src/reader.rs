//! Converting line reader

use crate::error::{Result, StreamError};
use kanaco_core::Converter;
use log::{debug, trace};
use std::io::{self, BufRead, Read};

/// Reader that converts its input one line at a time
///
/// Converted bytes that have not been handed out yet are kept in an internal
/// pending buffer. All access methods drain that buffer before reading the
/// next line, so they can be mixed freely; a line rejected by
/// [`read_line_into`](Self::read_line_into) for lack of space is returned by
/// the next call.
pub struct KanaReader<R> {
    inner: R,
    converter: Converter,
    /// Raw bytes of the line being read
    line: Vec<u8>,
    /// Converted bytes not yet returned to the caller
    pending: Vec<u8>,
    /// Read position within `pending`
    position: usize,
    lines_read: u64,
}

impl<R: BufRead> KanaReader<R> {
    /// Wrap `inner`, converting with `mode` (unknown letters are ignored)
    pub fn new(inner: R, mode: &str) -> Self {
        Self::with_converter(inner, Converter::new(mode))
    }

    /// Wrap `inner` with an existing converter
    pub fn with_converter(inner: R, converter: Converter) -> Self {
        Self {
            inner,
            converter,
            line: Vec::new(),
            pending: Vec::new(),
            position: 0,
            lines_read: 0,
        }
    }

    /// The converter applied to each line
    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Number of lines read from the underlying reader so far
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Shared access to the underlying reader
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Mutable access to the underlying reader
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap, discarding any pending converted bytes
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read and convert the next line
    ///
    /// Returns `Ok(None)` once the underlying reader is exhausted.
    pub fn next_line(&mut self) -> Result<Option<Vec<u8>>> {
        if !self.fill_pending()? {
            return Ok(None);
        }

        let line = if self.position == 0 {
            std::mem::take(&mut self.pending)
        } else {
            self.pending[self.position..].to_vec()
        };
        self.clear_pending();
        Ok(Some(line))
    }

    /// Convert the next line into `buf`, returning its length
    ///
    /// Returns `Ok(0)` at end of input. If the converted line is longer than
    /// `buf`, nothing is copied and [`StreamError::BufferTooSmall`] reports
    /// the size needed; the line stays pending for the next call.
    pub fn read_line_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        if !self.fill_pending()? {
            return Ok(0);
        }

        let line = &self.pending[self.position..];
        if line.len() > buf.len() {
            debug!(
                "line {} needs {} bytes, buffer holds {}",
                self.lines_read,
                line.len(),
                buf.len()
            );
            return Err(StreamError::BufferTooSmall {
                needed: line.len(),
                available: buf.len(),
            });
        }

        let len = line.len();
        buf[..len].copy_from_slice(line);
        self.clear_pending();
        Ok(len)
    }

    /// Ensure converted bytes are pending; `false` at end of input
    fn fill_pending(&mut self) -> Result<bool> {
        if self.position < self.pending.len() {
            return Ok(true);
        }

        self.clear_pending();
        // Bytes read before a failed call stay in `line` for the retry
        self.inner.read_until(b'\n', &mut self.line)?;
        if self.line.is_empty() {
            debug!("end of input after {} lines", self.lines_read);
            return Ok(false);
        }

        self.lines_read += 1;
        trace!("line {}: {} bytes", self.lines_read, self.line.len());
        self.converter.convert_into(&self.line, &mut self.pending);
        self.line.clear();
        Ok(true)
    }

    fn clear_pending(&mut self) {
        self.pending.clear();
        self.position = 0;
    }
}

impl<R: BufRead> Iterator for KanaReader<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

impl<R: BufRead> Read for KanaReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() || !self.fill_pending()? {
            return Ok(0);
        }

        let available = &self.pending[self.position..];
        let len = available.len().min(buf.len());
        buf[..len].copy_from_slice(&available[..len]);
        self.position += len;
        Ok(len)
    }
}
