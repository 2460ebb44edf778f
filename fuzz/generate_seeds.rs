#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PGM 3x2
    let pgm = b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64";
    fs::write(format!("{dir}/pgm_3x2.pgm"), pgm).unwrap();

    // PGM with comments and maxval 200
    let pgm = b"P5\n# comment\n2 1 # trailing\n200\n\x10\x20";
    fs::write(format!("{dir}/pgm_comment_maxval.pgm"), pgm).unwrap();

    // PPM 2x2
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/ppm_2x2.ppm"), ppm).unwrap();

    // Minimal BMP 1x1 8-bit with identity palette
    let mut bmp = vec![0u8; 54 + 1024 + 4]; // headers + palette + 1 pixel (1 + 3 padding)
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(54u32 + 1024 + 4).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&(54u32 + 1024).to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&1i32.to_le_bytes()); // width
    bmp[22..26].copy_from_slice(&1i32.to_le_bytes()); // height
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&8u16.to_le_bytes()); // bpp
    bmp[34..38].copy_from_slice(&4u32.to_le_bytes()); // image size
    for i in 0..256 {
        let off = 54 + i * 4;
        bmp[off] = i as u8; bmp[off + 1] = i as u8; bmp[off + 2] = i as u8;
    }
    bmp[54 + 1024] = 0x7f;
    fs::write(format!("{dir}/bmp_gray_1x1.bmp"), bmp).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p5.bin"), b"P5").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/p5_huge.bin"), b"P5\n10001 1\n255\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
