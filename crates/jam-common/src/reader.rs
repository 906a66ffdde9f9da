//! Exact-length reading from a seekable stream.
//!
//! [`StreamReader`] is the single place where a short stream turns into an
//! error. Every read either fills its destination completely or fails with
//! [`Error::TruncatedRead`]; nothing is ever silently truncated.

use std::io::{self, Read, Seek, SeekFrom};

use byteorder::{ByteOrder, LittleEndian};
use zerocopy::{FromBytes, IntoBytes};

use crate::{Error, Result};

/// A reader over a seekable stream with strict length checking.
///
/// The stream length is measured once on construction and used to reject
/// out-of-range reads before any buffer is allocated for them.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use jam_common::StreamReader;
///
/// let data = [0x01, 0x00, 0x00, 0x00, 0xFF];
/// let mut reader = StreamReader::new(Cursor::new(&data[..])).unwrap();
///
/// assert_eq!(reader.read_u32_le().unwrap(), 1);
/// assert!(reader.read_u32_le().is_err());
/// ```
#[derive(Debug)]
pub struct StreamReader<R> {
    inner: R,
    len: u64,
}

impl<R: Read + Seek> StreamReader<R> {
    /// Wrap a stream, measuring its length and rewinding to the start.
    pub fn new(mut inner: R) -> Result<Self> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self { inner, len })
    }

    /// Total length of the stream in bytes.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Check if the stream holds no bytes at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current cursor position.
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }

    /// Seek to an absolute offset.
    pub fn seek_to(&mut self, offset: u64) -> Result<()> {
        self.inner.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    /// Fill `buf` completely from the current position.
    pub fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<()> {
        let offset = self.position()?;
        match self.inner.read_exact(buf) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(Error::TruncatedRead {
                offset,
                needed: buf.len() as u64,
                available: self.len.saturating_sub(offset),
            }),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Read a little-endian u32 and convert it to host order.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        let mut bytes = [0u8; 4];
        self.read_exact_into(&mut bytes)?;
        Ok(LittleEndian::read_u32(&bytes))
    }

    /// Read a fixed-size record using zerocopy.
    ///
    /// The record is filled in place, so a short stream reports
    /// [`Error::TruncatedRead`] at the record's start offset.
    pub fn read_record<T: FromBytes + IntoBytes>(&mut self) -> Result<T> {
        let mut record = T::new_zeroed();
        self.read_exact_into(record.as_mut_bytes())?;
        Ok(record)
    }

    /// Read `len` bytes starting at `offset`.
    ///
    /// The range is checked against the stream length before the buffer is
    /// allocated, so a hostile length cannot force a huge allocation.
    pub fn read_blob(&mut self, offset: u64, len: u64) -> Result<Vec<u8>> {
        let available = self.len.saturating_sub(offset);
        let in_bounds = offset
            .checked_add(len)
            .is_some_and(|end| end <= self.len);
        if !in_bounds {
            return Err(Error::TruncatedRead {
                offset,
                needed: len,
                available,
            });
        }

        let size = usize::try_from(len).map_err(|_| Error::TruncatedRead {
            offset,
            needed: len,
            available,
        })?;

        self.seek_to(offset)?;
        let mut data = vec![0u8; size];
        self.read_exact_into(&mut data)?;
        Ok(data)
    }

    /// Read and compare a signature at the current position.
    pub fn expect_magic(&mut self, expected: &[u8]) -> Result<()> {
        let mut actual = vec![0u8; expected.len()];
        self.read_exact_into(&mut actual)?;
        if actual != expected {
            return Err(Error::InvalidMagic {
                expected: expected.to_vec(),
                actual,
            });
        }
        Ok(())
    }

    /// Unwrap the underlying stream.
    pub fn into_inner(self) -> R {
        self.inner
    }
}
