//! # Read Cursor
//!
//! Bounds-checked sequential decoding over a borrowed byte buffer.
//!
//! ## Guarantees
//! - Every operation is checked against the remaining length before it
//!   touches the buffer.
//! - A failed operation returns [`CodecError::InputExhausted`] and leaves the
//!   cursor exactly where it was; no partial value is ever produced.
//! - The cursor never allocates, except for the owned result of
//!   [`read_bytes`](ReadCursor::read_bytes).

use crate::addr::HwAddr;
use crate::core::endian::{self, Endian};
use crate::core::mem::{copy_bytes, FixedWidth};
use crate::error::{CodecError, Result};
use bytes::Bytes;
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::trace;

/// A read cursor over a borrowed, immutable byte buffer.
///
/// The cursor advances monotonically with every successful read and holds no
/// state beyond its position, so it is cheap to copy for look-ahead.
///
/// ```rust
/// use packet_codec::ReadCursor;
///
/// let data = [0x08, 0x00, 0xC0, 0xA8, 0x00, 0x01];
/// let mut cursor = ReadCursor::new(&data);
///
/// let ethertype = cursor.read_be::<u16>()?;
/// let source = cursor.read_ipv4()?;
///
/// assert_eq!(ethertype, 0x0800);
/// assert_eq!(source.to_string(), "192.168.0.1");
/// assert!(cursor.is_empty());
/// # Ok::<(), packet_codec::CodecError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReadCursor<'a> {
    buffer: &'a [u8],
}

impl<'a> ReadCursor<'a> {
    /// Binds a cursor to the start of `buffer`.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer }
    }

    /// True if at least `byte_count` bytes remain.
    ///
    /// This is a non-destructive probe; it never fails and never advances.
    pub fn can_read(&self, byte_count: usize) -> bool {
        byte_count <= self.buffer.len()
    }

    fn check(&self, needed: usize) -> Result<()> {
        if needed > self.buffer.len() {
            trace!(needed, remaining = self.buffer.len(), "input exhausted");
            return Err(CodecError::InputExhausted {
                needed,
                remaining: self.buffer.len(),
            });
        }
        Ok(())
    }

    /// Advances the cursor by `count` bytes without producing a value.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.check(count)?;
        self.buffer = &self.buffer[count..];
        Ok(())
    }

    /// Reads a fixed-width value with no byte-order transformation.
    ///
    /// The result is the raw byte reinterpretation of the next
    /// `T::WIRE_SIZE` bytes. Use [`read_be`](Self::read_be) or
    /// [`read_le`](Self::read_le) for fields with a declared wire order.
    pub fn read<T: FixedWidth>(&mut self) -> Result<T> {
        self.check(T::WIRE_SIZE)?;
        let value = T::decode(self.buffer);
        self.buffer = &self.buffer[T::WIRE_SIZE..];
        Ok(value)
    }

    /// Reads a big-endian wire value and normalizes it to host order.
    pub fn read_be<T: FixedWidth + Endian>(&mut self) -> Result<T> {
        Ok(endian::be_to_host(self.read()?))
    }

    /// Reads a little-endian wire value and normalizes it to host order.
    pub fn read_le<T: FixedWidth + Endian>(&mut self) -> Result<T> {
        Ok(endian::le_to_host(self.read()?))
    }

    /// Reads the next `count` bytes into an owned sequence.
    pub fn read_bytes(&mut self, count: usize) -> Result<Bytes> {
        self.check(count)?;
        let value = Bytes::copy_from_slice(&self.buffer[..count]);
        self.buffer = &self.buffer[count..];
        Ok(value)
    }

    /// Reads exactly `dst.len()` bytes into a caller-supplied buffer.
    pub fn read_into(&mut self, dst: &mut [u8]) -> Result<()> {
        self.check(dst.len())?;
        copy_bytes(self.buffer, dst, dst.len());
        self.buffer = &self.buffer[dst.len()..];
        Ok(())
    }

    /// Reads an IPv4 address from its 4-byte network-order integer form.
    pub fn read_ipv4(&mut self) -> Result<Ipv4Addr> {
        Ok(Ipv4Addr::from(self.read_be::<u32>()?))
    }

    /// Reads an IPv6 address from its next 16 raw bytes.
    ///
    /// The address is a byte vector, not an integer; no byte-order
    /// transformation applies.
    pub fn read_ipv6(&mut self) -> Result<Ipv6Addr> {
        let mut octets = [0u8; 16];
        self.read_into(&mut octets)?;
        Ok(Ipv6Addr::from(octets))
    }

    /// Reads an `N`-octet hardware address from its next `N` raw bytes.
    pub fn read_hw_addr<const N: usize>(&mut self) -> Result<HwAddr<N>> {
        let mut octets = [0u8; N];
        self.read_into(&mut octets)?;
        Ok(HwAddr::from_octets(octets))
    }

    /// The unread region, without the cursor around it.
    ///
    /// Hands the current position to a consumer that manages its own bounds,
    /// such as the decoder of a nested length-prefixed structure. The
    /// returned slice borrows the underlying buffer, not the cursor, so it
    /// may outlive this `ReadCursor`.
    pub fn as_slice(&self) -> &'a [u8] {
        self.buffer
    }

    /// Bytes left to read.
    pub fn remaining_len(&self) -> usize {
        self.buffer.len()
    }

    /// Shrinks the apparent remaining length to `len` bytes.
    ///
    /// Used when a length-prefixed field declares fewer bytes than physically
    /// follow in the buffer; subsequent reads then stop at the declared
    /// boundary. `len` must not exceed [`remaining_len`](Self::remaining_len).
    pub fn set_remaining_len(&mut self, len: usize) {
        self.buffer = &self.buffer[..len];
    }

    /// True if any bytes remain; loop predicate for repeated-field decoders.
    pub fn has_more(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// True if the input is fully consumed.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl<'a> From<&'a [u8]> for ReadCursor<'a> {
    fn from(buffer: &'a [u8]) -> Self {
        Self::new(buffer)
    }
}
