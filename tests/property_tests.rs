//! Property-based tests using proptest
//!
//! These tests validate cursor invariants across a wide range of randomly
//! generated buffers, values, and access patterns.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use packet_codec::{CodecError, MacAddr, ReadCursor, WriteCursor};
use proptest::prelude::*;

// Property: for any buffer and any read segmentation that fits, the final
// remaining length is the buffer length minus the total consumed, and every
// returned chunk equals the corresponding sub-range in declaration order.
proptest! {
    #[test]
    fn prop_read_sequence_accounting(
        buffer in prop::collection::vec(any::<u8>(), 0..512),
        segments in prop::collection::vec(0usize..64, 0..16),
    ) {
        let mut cursor = ReadCursor::new(&buffer);
        let mut offset = 0;

        for &size in &segments {
            if offset + size > buffer.len() {
                break;
            }
            let chunk = cursor.read_bytes(size).expect("segment fits");
            prop_assert_eq!(&chunk[..], &buffer[offset..offset + size]);
            offset += size;
        }

        prop_assert_eq!(cursor.remaining_len(), buffer.len() - offset);
    }
}

// Property: write then read from the same start position recovers the value,
// in both wire orders, for every integer width.
macro_rules! prop_int_roundtrip {
    ($name:ident, $ty:ty) => {
        proptest! {
            #[test]
            fn $name(value in any::<$ty>()) {
                let mut buf = [0u8; 16];
                {
                    let mut writer = WriteCursor::new(&mut buf);
                    writer.write_be::<$ty>(value).unwrap();
                    writer.write_le::<$ty>(value).unwrap();
                }
                let mut reader = ReadCursor::new(&buf);
                prop_assert_eq!(reader.read_be::<$ty>().unwrap(), value);
                prop_assert_eq!(reader.read_le::<$ty>().unwrap(), value);
            }
        }
    };
}

prop_int_roundtrip!(prop_u16_roundtrip, u16);
prop_int_roundtrip!(prop_u32_roundtrip, u32);
prop_int_roundtrip!(prop_u64_roundtrip, u64);
prop_int_roundtrip!(prop_i32_roundtrip, i32);
prop_int_roundtrip!(prop_i64_roundtrip, i64);

// Property: write_be produces exactly the big-endian byte representation,
// write_le the little-endian one.
proptest! {
    #[test]
    fn prop_wire_order_byte_exact(value in any::<u64>()) {
        let mut buf = [0u8; 16];
        {
            let mut writer = WriteCursor::new(&mut buf);
            writer.write_be::<u64>(value).unwrap();
            writer.write_le::<u64>(value).unwrap();
        }
        prop_assert_eq!(&buf[..8], &value.to_be_bytes()[..]);
        prop_assert_eq!(&buf[8..], &value.to_le_bytes()[..]);
    }
}

// Property: written_size equals the total of all successful writes, no
// matter how many calls produced it.
proptest! {
    #[test]
    fn prop_written_size_accumulates(chunks in prop::collection::vec(
        prop::collection::vec(any::<u8>(), 0..32), 0..8,
    )) {
        let total: usize = chunks.iter().map(Vec::len).sum();
        let mut buf = vec![0u8; total];
        let mut writer = WriteCursor::new(&mut buf);

        for chunk in &chunks {
            writer.write_bytes(chunk).expect("buffer sized to fit");
        }
        prop_assert_eq!(writer.written_size(), total);
        prop_assert_eq!(writer.remaining_capacity(), 0);
    }
}

// Property: fill writes exactly n contiguous copies and advances by n.
proptest! {
    #[test]
    fn prop_fill_contiguous(n in 0usize..64, value in any::<u8>()) {
        let mut buf = [0x5Au8; 64];
        let mut writer = WriteCursor::new(&mut buf);
        writer.fill(n, value).unwrap();

        prop_assert_eq!(writer.written_size(), n);
        prop_assert!(buf[..n].iter().all(|&b| b == value));
        prop_assert!(buf[n..].iter().all(|&b| b == 0x5A));
    }
}

// Property: can_read(n) is false exactly when an n-byte read fails, and the
// failure carries the requested and remaining sizes.
proptest! {
    #[test]
    fn prop_can_read_matches_read_outcome(
        len in 0usize..64,
        n in 0usize..128,
    ) {
        let buffer = vec![0u8; len];
        let cursor = ReadCursor::new(&buffer);
        let mut probe = cursor;

        match probe.read_bytes(n) {
            Ok(_) => prop_assert!(cursor.can_read(n)),
            Err(CodecError::InputExhausted { needed, remaining }) => {
                prop_assert!(!cursor.can_read(n));
                prop_assert_eq!(needed, n);
                prop_assert_eq!(remaining, len);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }
}

// Property: hardware addresses survive display/parse and wire round trips.
proptest! {
    #[test]
    fn prop_mac_roundtrips(octets in any::<[u8; 6]>()) {
        let address = MacAddr::from_octets(octets);

        let reparsed: MacAddr = address.to_string().parse().expect("own display form");
        prop_assert_eq!(reparsed, address);

        let mut buf = [0u8; 6];
        WriteCursor::new(&mut buf).write_hw_addr(address).unwrap();
        prop_assert_eq!(buf, octets);
        prop_assert_eq!(
            ReadCursor::new(&buf).read_hw_addr::<6>().unwrap(),
            address
        );
    }
}
