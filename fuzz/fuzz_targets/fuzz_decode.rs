#![no_main]

use libfuzzer_sys::fuzz_target;
use packet_codec::ReadCursor;

fuzz_target!(|data: &[u8]| {
    // Fuzz the decode path - mixed typed reads over arbitrary input must
    // never panic, only return InputExhausted.
    let mut cursor = ReadCursor::new(data);
    loop {
        let ok = cursor.read_be::<u32>().is_ok()
            && cursor.read_le::<u16>().is_ok()
            && cursor.read::<u8>().is_ok()
            && cursor.read_ipv4().is_ok()
            && cursor.read_hw_addr::<6>().is_ok()
            && cursor.skip(1).is_ok();
        if !ok {
            break;
        }
    }
    let _ = cursor.read_ipv6();
    let _ = cursor.read_bytes(cursor.remaining_len());
});
