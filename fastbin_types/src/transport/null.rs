use crate::transport::Transport;
use std::io::{self, BufRead, Read, Write};

/// Discards writes and reads as empty. Used to time encoding alone.
#[derive(Default, Debug)]
pub struct NullTransport {
    w_len: u64,
}

impl NullTransport {
    pub fn bytes_written(&self) -> u64 {
        self.w_len
    }
}

impl Read for NullTransport {
    fn read(&mut self, _out: &mut [u8]) -> io::Result<usize> {
        Ok(0)
    }
}

impl BufRead for NullTransport {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(&[])
    }

    fn consume(&mut self, _amt: usize) {}
}

impl Write for NullTransport {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.w_len += bytes.len() as u64;
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Transport for NullTransport {
    fn is_open(&self) -> bool {
        true
    }

    fn open(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}
