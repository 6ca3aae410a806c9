//! Chunked buffered reading over an arbitrary byte source

use std::io::{ErrorKind, Read};

use super::error::{Result, UffError};

/// Buffer refill size. A tuning constant only; correctness does not depend
/// on where chunk boundaries fall.
const CHUNK_SIZE: usize = 16 * 1024;

/// Buffers a byte source into fixed chunks and exposes the two read
/// primitives the tokenizer needs: one line, or exactly N raw bytes.
pub(super) struct ChunkReader<R> {
    source: R,
    buf: Vec<u8>,
    pos: usize,
    filled: usize,
}

impl<R: Read> ChunkReader<R> {
    pub(super) fn new(source: R) -> Self {
        Self {
            source,
            buf: vec![0; CHUNK_SIZE],
            pos: 0,
            filled: 0,
        }
    }

    pub(super) fn into_inner(self) -> R {
        self.source
    }

    /// Discard the consumed prefix and pull a fresh chunk. Returns false
    /// once the source is exhausted.
    fn refill(&mut self) -> Result<bool> {
        self.pos = 0;
        self.filled = 0;
        loop {
            match self.source.read(&mut self.buf) {
                Ok(0) => return Ok(false),
                Ok(n) => {
                    self.filled = n;
                    return Ok(true);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        if self.pos >= self.filled && !self.refill()? {
            return Ok(None);
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(Some(byte))
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        if self.pos >= self.filled && !self.refill()? {
            return Ok(None);
        }
        Ok(Some(self.buf[self.pos]))
    }

    /// Read one line of raw bytes, without its terminator.
    ///
    /// CR, LF, and CR-LF all terminate a line; the LF of a CR-LF pair is
    /// consumed together with the CR and never starts an empty line.
    /// Returns `None` once the source is exhausted with nothing pending; a
    /// final unterminated line is returned as-is.
    pub(super) fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let mut saw_any = false;
        loop {
            match self.next_byte()? {
                None => return Ok(saw_any.then_some(line)),
                Some(b'\n') => return Ok(Some(line)),
                Some(b'\r') => {
                    if self.peek_byte()? == Some(b'\n') {
                        self.pos += 1;
                    }
                    return Ok(Some(line));
                }
                Some(byte) => {
                    saw_any = true;
                    line.push(byte);
                }
            }
        }
    }

    /// Copy exactly `count` bytes, refilling from the source as needed.
    ///
    /// `count` comes from the file and is untrusted, so at most one chunk
    /// is reserved up front; a short source fails with `TruncatedPayload`
    /// before the vector outgrows what actually arrived.
    pub(super) fn read_exact(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(count.min(CHUNK_SIZE));
        while out.len() < count {
            if self.pos >= self.filled && !self.refill()? {
                return Err(UffError::TruncatedPayload {
                    needed: count,
                    got: out.len(),
                });
            }
            let take = (count - out.len()).min(self.filled - self.pos);
            out.extend_from_slice(&self.buf[self.pos..self.pos + take]);
            self.pos += take;
        }
        Ok(out)
    }
}
