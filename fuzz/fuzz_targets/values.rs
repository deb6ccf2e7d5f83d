#![no_main]

use binvalue::prelude::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for endianness in [LITTLE_ENDIAN, BIG_ENDIAN] {
        if let Ok(dword) = UnsignedDword::new(data, endianness) {
            assert_eq!(
                dword.to_int(),
                (dword.high_word().to_int() << 16) | dword.low_word().to_int()
            );
            match dword.to_signed() {
                Ok(signed) => assert_eq!(signed.to_int(), dword.to_int()),
                Err(_) => assert!(dword.as_signed().to_int() < 0),
            }
        }

        let mut offset = 0;
        while let Ok(word) = read_value_at::<2, false>(data, &mut offset, endianness) {
            let _ = word.to_signed();
        }
    }
});
