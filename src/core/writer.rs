//! # Write Cursor
//!
//! Bounds-checked sequential encoding into a borrowed byte buffer.
//!
//! ## Guarantees
//! - Every operation is checked against the remaining capacity before it
//!   touches the buffer.
//! - A failed operation returns [`CodecError::OutputExhausted`]. It commits
//!   nothing, but the in-progress encode is a lost cause at that point — the
//!   destination was sized too small — so callers should abandon it rather
//!   than continue writing.
//! - The write position never regresses; the cursor holds no heap state.

use crate::addr::HwAddr;
use crate::core::endian::{self, Endian};
use crate::core::mem::{copy_bytes, FixedWidth};
use crate::error::{CodecError, Result};
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::trace;

/// A write cursor over a borrowed, mutable byte buffer.
///
/// ```rust
/// use packet_codec::WriteCursor;
///
/// let mut buf = [0u8; 6];
/// let mut cursor = WriteCursor::new(&mut buf);
///
/// cursor.write_be::<u16>(0x0800)?;
/// cursor.write_be::<u32>(0xC0A8_0001)?;
///
/// assert_eq!(cursor.written_size(), 6);
/// assert_eq!(buf, [0x08, 0x00, 0xC0, 0xA8, 0x00, 0x01]);
/// # Ok::<(), packet_codec::CodecError>(())
/// ```
#[derive(Debug)]
pub struct WriteCursor<'a> {
    buffer: &'a mut [u8],
    written: usize,
}

impl<'a> WriteCursor<'a> {
    /// Binds a cursor to the start of `buffer`.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, written: 0 }
    }

    fn check(&self, needed: usize) -> Result<()> {
        let remaining = self.buffer.len() - self.written;
        if needed > remaining {
            trace!(needed, remaining, "output exhausted");
            return Err(CodecError::OutputExhausted { needed, remaining });
        }
        Ok(())
    }

    /// Advances the write position by `count` bytes without writing.
    ///
    /// Reserves space for a field whose value is only known later — encode
    /// the rest, then patch the reserved range through the buffer once the
    /// cursor is done.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.check(count)?;
        self.written += count;
        Ok(())
    }

    /// Writes a fixed-width value with no byte-order transformation.
    ///
    /// Use [`write_be`](Self::write_be) or [`write_le`](Self::write_le) for
    /// fields with a declared wire order.
    pub fn write<T: FixedWidth>(&mut self, value: T) -> Result<()> {
        self.check(T::WIRE_SIZE)?;
        value.encode(&mut self.buffer[self.written..]);
        self.written += T::WIRE_SIZE;
        Ok(())
    }

    /// Converts `value` to big-endian wire order and writes it.
    pub fn write_be<T: FixedWidth + Endian>(&mut self, value: T) -> Result<()> {
        self.write(endian::host_to_be(value))
    }

    /// Converts `value` to little-endian wire order and writes it.
    pub fn write_le<T: FixedWidth + Endian>(&mut self, value: T) -> Result<()> {
        self.write(endian::host_to_le(value))
    }

    /// Writes an arbitrary-length byte slice.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.check(bytes.len())?;
        copy_bytes(bytes, &mut self.buffer[self.written..], bytes.len());
        self.written += bytes.len();
        Ok(())
    }

    /// Writes an IPv4 address as its 4-byte network-order integer form.
    pub fn write_ipv4(&mut self, address: Ipv4Addr) -> Result<()> {
        self.write_be(u32::from(address))
    }

    /// Writes an IPv6 address as its 16 raw bytes, unchanged.
    pub fn write_ipv6(&mut self, address: Ipv6Addr) -> Result<()> {
        self.write_bytes(&address.octets())
    }

    /// Writes an `N`-octet hardware address as its raw bytes, unchanged.
    pub fn write_hw_addr<const N: usize>(&mut self, address: HwAddr<N>) -> Result<()> {
        self.write_bytes(address.as_bytes())
    }

    /// Writes `count` repetitions of `value`, e.g. to zero a reserved field.
    pub fn fill(&mut self, count: usize, value: u8) -> Result<()> {
        self.check(count)?;
        self.buffer[self.written..self.written + count].fill(value);
        self.written += count;
        Ok(())
    }

    /// The unwritten region, for producers that bypass the checked API.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buffer[self.written..]
    }

    /// Capacity left in the buffer.
    pub fn remaining_capacity(&self) -> usize {
        self.buffer.len() - self.written
    }

    /// Total bytes committed so far.
    ///
    /// Reports the final encoded length, or the offset a later length-field
    /// patch needs.
    pub fn written_size(&self) -> usize {
        self.written
    }
}
