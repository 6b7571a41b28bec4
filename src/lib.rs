//! # Packet Codec
//!
//! Bounds-checked cursor primitives for encoding and decoding binary packet
//! fields.
//!
//! This crate is the codec layer a packet construction/parsing library is
//! built on: cursor-based views over caller-owned byte buffers, used by
//! protocol-header encoders and decoders to move fixed-width fields
//! (integers, network addresses) with explicit byte-order control.
//!
//! ## Components
//! - **[`ReadCursor`]**: sequential, bounds-checked consumption of an
//!   immutable buffer, producing typed values
//! - **[`WriteCursor`]**: sequential, bounds-checked production into a
//!   mutable buffer from typed values
//! - **[`FixedWidth`]** / **[`Endian`]**: the raw copy and byte-order layers
//!   underneath the cursors
//! - **[`HwAddr`]**: fixed-width link-layer address type
//!
//! ## Design
//! - Buffers are always caller-owned and fixed-size; cursors borrow, never
//!   allocate or resize.
//! - Every operation either fully succeeds and advances the cursor, or fails
//!   with [`CodecError`] and leaves it untouched.
//! - Fixed-width values move through explicit byte-wise copies — never
//!   pointer reinterpretation — so unaligned field offsets are safe.
//! - Fully synchronous: pointer arithmetic plus bounded copies, no I/O, no
//!   suspension points.
//!
//! ## Usage
//! ```rust
//! use packet_codec::{MacAddr, ReadCursor, WriteCursor};
//!
//! // Encode a toy header: destination MAC, ethertype, 2 bytes of padding.
//! let mut buf = [0u8; 10];
//! let mut writer = WriteCursor::new(&mut buf);
//! writer.write_hw_addr("ff:ff:ff:ff:ff:ff".parse::<MacAddr>().unwrap())?;
//! writer.write_be::<u16>(0x0806)?;
//! writer.fill(2, 0)?;
//! assert_eq!(writer.written_size(), 10);
//!
//! // Decode it back.
//! let mut reader = ReadCursor::new(&buf);
//! let destination = reader.read_hw_addr::<6>()?;
//! let ethertype = reader.read_be::<u16>()?;
//! reader.skip(2)?;
//!
//! assert!(destination.is_broadcast());
//! assert_eq!(ethertype, 0x0806);
//! assert!(reader.is_empty());
//! # Ok::<(), packet_codec::CodecError>(())
//! ```
//!
//! ## Error Handling
//! Exactly two codec conditions exist: [`CodecError::InputExhausted`]
//! (truncated or malformed input — propagate as a decode failure) and
//! [`CodecError::OutputExhausted`] (destination sized too small — a bug on
//! the encoding path). Both carry the requested and remaining sizes.

pub mod addr;
pub mod core;
pub mod error;

pub use crate::addr::{HwAddr, MacAddr};
pub use crate::core::endian::Endian;
pub use crate::core::mem::FixedWidth;
pub use crate::core::{ReadCursor, WriteCursor};
pub use crate::error::{CodecError, ParseHwAddrError, Result};
