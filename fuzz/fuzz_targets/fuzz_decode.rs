#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Every decoder and header reader must reject garbage without panicking
    let _ = kltbitmaps::ImageInfo::from_bytes(data);
    let _ = kltbitmaps::decode_pgm(data);
    let _ = kltbitmaps::decode_bmp_gray(data);
    let _ = kltbitmaps::pnm::read_ppm_header(data);
    let _ = kltbitmaps::bmp::read_headers(data);

    let mut buf = [0u8; 4096];
    let _ = kltbitmaps::DecodeRequest::new(data).decode_pgm_into(&mut buf);
    let _ = kltbitmaps::DecodeRequest::new(data).decode_bmp_gray_into(&mut buf);
});
