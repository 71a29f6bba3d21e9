//! Byte sinks and sources the codecs run over.
//!
//! The codecs only ever see [`std::io::Write`] and [`std::io::BufRead`].
//! How bytes are chunked on the way is a property of the transport alone.

mod buffered;
mod memory;
mod null;


pub use buffered::*;
pub use memory::*;
pub use null::*;

use std::io::{self, Read, Write};
use std::ops::{Deref, DerefMut};

pub trait Transport: Read + Write {
    fn is_open(&self) -> bool;
    fn open(&mut self) -> io::Result<()>;
    /// Flushes pending writes, then refuses further I/O until reopened.
    fn close(&mut self) -> io::Result<()>;
}

pub(crate) fn not_open() -> io::Error {
    io::Error::new(io::ErrorKind::NotConnected, "Transport is closed.")
}

/// Keeps a transport open for as long as the guard lives.
pub struct OpenTransport<'t, T: Transport> {
    t: &'t mut T,
    closed: bool,
}

impl<'t, T: Transport> OpenTransport<'t, T> {
    pub fn open(t: &'t mut T) -> io::Result<Self> {
        if !t.is_open() {
            t.open()?;
        }
        Ok(Self { t, closed: false })
    }

    /// Closes now, surfacing the error that dropping the guard would swallow.
    pub fn close(mut self) -> io::Result<()> {
        self.closed = true;
        self.t.close()
    }
}

impl<'t, T: Transport> Deref for OpenTransport<'t, T> {
    type Target = T;
    fn deref(&self) -> &T {
        self.t
    }
}
impl<'t, T: Transport> DerefMut for OpenTransport<'t, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.t
    }
}

impl<'t, T: Transport> Drop for OpenTransport<'t, T> {
    fn drop(&mut self) {
        if !self.closed {
            self.t.close().ok();
        }
    }
}
