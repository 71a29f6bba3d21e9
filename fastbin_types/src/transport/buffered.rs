use crate::transport::Transport;
use std::io::{self, BufRead, Read, Write};

pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Buffers an inner transport in both directions, `chunk_size` bytes at a time.
///
/// Each refill asks the inner transport for at most one chunk,
/// so a value larger than a chunk, or one that starts near the end of a chunk,
/// arrives over several underlying reads.
pub struct BufferedTransport<T> {
    inner: T,
    chunk_size: usize,
    r_buf: Vec<u8>,
    r_pos: usize,
    r_end: usize,
    w_buf: Vec<u8>,
}

impl<T: Transport> BufferedTransport<T> {
    pub fn new(inner: T) -> Self {
        Self::with_chunk_size(inner, DEFAULT_CHUNK_SIZE)
    }

    /// A `chunk_size` of zero is treated as one.
    pub fn with_chunk_size(inner: T, chunk_size: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            inner,
            chunk_size,
            r_buf: vec![0u8; chunk_size],
            r_pos: 0,
            r_end: 0,
            w_buf: Vec::with_capacity(chunk_size),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Unflushed writes are dropped.
    pub fn into_inner(self) -> T {
        self.inner
    }

    fn flush_w_buf(&mut self) -> io::Result<()> {
        for chunk in self.w_buf.chunks(self.chunk_size) {
            self.inner.write_all(chunk)?;
        }
        self.w_buf.clear();
        Ok(())
    }
}

impl<T: Transport> Read for BufferedTransport<T> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let avail = self.fill_buf()?;
        let n = avail.len().min(out.len());
        out[..n].copy_from_slice(&avail[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl<T: Transport> BufRead for BufferedTransport<T> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.r_pos == self.r_end {
            self.r_end = self.inner.read(&mut self.r_buf)?;
            self.r_pos = 0;
        }
        Ok(&self.r_buf[self.r_pos..self.r_end])
    }

    fn consume(&mut self, amt: usize) {
        self.r_pos = (self.r_pos + amt).min(self.r_end);
    }
}

impl<T: Transport> Write for BufferedTransport<T> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.w_buf.extend_from_slice(bytes);
        if self.w_buf.len() >= self.chunk_size {
            self.flush_w_buf()?;
        }
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_w_buf()?;
        self.inner.flush()
    }
}

impl<T: Transport> Transport for BufferedTransport<T> {
    fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    fn open(&mut self) -> io::Result<()> {
        self.inner.open()
    }

    fn close(&mut self) -> io::Result<()> {
        self.flush()?;
        self.r_pos = 0;
        self.r_end = 0;
        self.inner.close()
    }
}
