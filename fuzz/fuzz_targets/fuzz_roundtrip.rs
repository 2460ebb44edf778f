#![no_main]
use libfuzzer_sys::fuzz_target;
use kltbitmaps::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical rows
    let (decoded, reencoded) = if let Ok(d) = decode_pgm(data) {
        let Ok(e) = encode_pgm(&d.image) else { return };
        (d, decode_pgm(&e))
    } else if let Ok(d) = decode_bmp_gray(data) {
        let Ok(e) = encode_bmp_gray(&d.image) else { return };
        (d, decode_bmp_gray(&e))
    } else {
        return;
    };

    let Ok(decoded2) = reencoded else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.image.width(), decoded2.image.width());
    assert_eq!(decoded.image.height(), decoded2.image.height());
    assert_eq!(decoded.image.to_packed(), decoded2.image.to_packed(), "roundtrip pixel mismatch");
});
