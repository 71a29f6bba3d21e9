use crate::transport::{not_open, Transport};
use std::io::{self, BufRead, Read, Write};

/// An in-memory transport. Writes append; reads consume from the front.
#[derive(Debug)]
pub struct MemoryBuffer {
    buf: Vec<u8>,
    r_pos: usize,
    is_open: bool,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::from(vec![])
    }

    /// Everything ever written, including what has already been read.
    pub fn written(&self) -> &[u8] {
        &self.buf
    }

    pub fn unread(&self) -> &[u8] {
        &self.buf[self.r_pos..]
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for MemoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for MemoryBuffer {
    fn from(buf: Vec<u8>) -> Self {
        Self {
            buf,
            r_pos: 0,
            is_open: true,
        }
    }
}

impl Read for MemoryBuffer {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let avail = self.fill_buf()?;
        let n = avail.len().min(out.len());
        out[..n].copy_from_slice(&avail[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for MemoryBuffer {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if !self.is_open {
            return Err(not_open());
        }
        Ok(&self.buf[self.r_pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.r_pos = (self.r_pos + amt).min(self.buf.len());
    }
}

impl Write for MemoryBuffer {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        if !self.is_open {
            return Err(not_open());
        }
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Transport for MemoryBuffer {
    fn is_open(&self) -> bool {
        self.is_open
    }

    fn open(&mut self) -> io::Result<()> {
        self.is_open = true;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.is_open = false;
        Ok(())
    }
}
