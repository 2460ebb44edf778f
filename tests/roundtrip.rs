use kltbitmaps::*;

#[test]
fn pgm_roundtrip_gray8() {
    let w = 3;
    let h = 2;
    let pixels = vec![0, 64, 128, 192, 255, 100];
    let image = GrayImage::from_pixels(w, h, pixels.clone()).unwrap();

    let encoded = encode_pgm(&image).unwrap();
    assert!(encoded.starts_with(b"P5\n3 2\n255\n"));

    let decoded = decode_pgm(&encoded).unwrap();
    assert_eq!(decoded.image.width(), w);
    assert_eq!(decoded.image.height(), h);
    assert_eq!(decoded.image.pixels(), &pixels[..]);
    assert!(decoded.warnings.is_empty());
}

#[test]
fn bmp_gray_roundtrip_width_multiple_of_four() {
    let w = 4;
    let h = 3;
    let pixels: Vec<u8> = (0..12).map(|i| i * 20).collect();
    let image = GrayImage::from_pixels(w, h, pixels.clone()).unwrap();

    let encoded = encode_bmp_gray(&image).unwrap();
    assert_eq!(&encoded[0..2], b"BM");

    let decoded = decode_bmp_gray(&encoded).unwrap();
    assert_eq!(decoded.image, image);
    assert!(decoded.image.is_packed());
}

#[test]
fn two_by_two_scenario() {
    let image = GrayImage::from_pixels(2, 2, vec![10, 20, 30, 40]).unwrap();

    let pgm = encode_pgm(&image).unwrap();
    assert_eq!(decode_pgm(&pgm).unwrap().image, image);

    let bmp = encode_bmp_gray(&image).unwrap();
    let decoded = decode_bmp_gray(&bmp).unwrap().image;
    assert_eq!(decoded.width(), 2);
    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded.stride(), 4);
    assert_eq!(decoded.row(0), &[10, 20]);
    assert_eq!(decoded.row(1), &[30, 40]);
    assert_eq!(&decoded.pixels()[..2], &[10, 20]);
    assert_eq!(&decoded.pixels()[4..6], &[30, 40]);
}

#[test]
fn bmp_rgb_layout() {
    let r = [255u8, 0, 0, 10, 20, 30];
    let g = [0u8, 255, 0, 40, 50, 60];
    let b = [0u8, 0, 255, 70, 80, 90];
    let planes = RgbPlanes::new(&r, &g, &b, 3, 2).unwrap();

    let encoded = encode_bmp_rgb(&planes).unwrap();
    let headers = bmp::read_headers(&encoded).unwrap();
    assert_eq!(headers.info.bits_per_pixel, 24);
    assert_eq!(headers.file.data_offset, 54);
    // 3 px * 3 bytes = 9, padded to 12
    assert_eq!(headers.info.image_size, 24);
    assert_eq!(headers.file.file_size as usize, encoded.len());

    // bottom row first, each pixel B,G,R
    assert_eq!(&encoded[54..63], &[70, 40, 10, 80, 50, 20, 90, 60, 30]);
    assert_eq!(&encoded[63..66], &[0, 0, 0]);
    assert_eq!(&encoded[66..75], &[0, 0, 255, 0, 255, 0, 255, 0, 0]);
}

#[test]
fn ppm_header_only_read() {
    let plane = [7u8; 6];
    let planes = RgbPlanes::new(&plane, &plane, &plane, 2, 3).unwrap();
    let encoded = encode_ppm(&planes).unwrap();

    let header = pnm::read_ppm_header(&encoded).unwrap();
    assert_eq!(header.magic, 6);
    assert_eq!((header.width, header.height, header.maxval), (2, 3, 255));
    assert_eq!(header.data_offset, b"P6\n2 3\n255\n".len());
    assert_eq!(encoded.len(), header.data_offset + 18);

    assert!(matches!(
        pnm::read_pgm_header(&encoded),
        Err(BitmapError::MagicMismatch {
            expected: 5,
            found: 6
        })
    ));
}

#[test]
fn image_info_probe() {
    let image = GrayImage::new(5, 7).unwrap();

    let info = ImageInfo::from_bytes(&encode_pgm(&image).unwrap()).unwrap();
    assert_eq!((info.width, info.height), (5, 7));
    assert_eq!(info.format, BitmapFormat::Pgm);

    let info = ImageInfo::from_bytes(&encode_bmp_gray(&image).unwrap()).unwrap();
    assert_eq!((info.width, info.height), (5, 7));
    assert_eq!(info.format, BitmapFormat::Bmp);
    assert_eq!(info.bits_per_pixel, 8);
}

#[test]
fn limits_reject_large() {
    let image = GrayImage::new(1, 2).unwrap();
    let encoded = encode_pgm(&image).unwrap();

    let limits = Limits {
        max_pixels: Some(1), // only 1 pixel allowed
        ..Default::default()
    };

    let result = DecodeRequest::new(&encoded).with_limits(&limits).decode_pgm();
    match result.unwrap_err() {
        BitmapError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn decode_into_reuses_caller_buffer() {
    let image = GrayImage::from_pixels(3, 1, vec![1, 2, 3]).unwrap();
    let encoded = encode_pgm(&image).unwrap();

    let mut buf = [0xAAu8; 5];
    let info = DecodeRequest::new(&encoded).decode_pgm_into(&mut buf).unwrap();
    assert_eq!((info.width, info.height, info.stride), (3, 1, 3));
    assert_eq!(buf, [1, 2, 3, 0xAA, 0xAA]);

    let mut small = [0u8; 2];
    assert!(matches!(
        DecodeRequest::new(&encoded).decode_pgm_into(&mut small),
        Err(BitmapError::BufferTooSmall {
            needed: 3,
            actual: 2
        })
    ));
}

#[test]
fn bmp_decode_into_uses_stride() {
    let image = GrayImage::from_pixels(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let encoded = encode_bmp_gray(&image).unwrap();

    let mut buf = vec![0u8; 8];
    let info = DecodeRequest::new(&encoded)
        .decode_bmp_gray_into(&mut buf)
        .unwrap();
    assert_eq!((info.width, info.height, info.stride), (3, 2, 4));
    assert_eq!(buf, [1, 2, 3, 0, 4, 5, 6, 0]);
}

#[test]
fn float_image_export_pair() {
    let level = FloatImage::from_vec(4, 1, vec![-1.0, 0.0, 1.0, 3.0]).unwrap();
    let gray = level.to_gray_normalized().unwrap();
    assert_eq!(gray.pixels(), &[0, 64, 128, 255]);

    let pgm = decode_pgm(&encode_pgm(&gray).unwrap()).unwrap().image;
    let bmp = decode_bmp_gray(&encode_bmp_gray(&gray).unwrap())
        .unwrap()
        .image;
    assert_eq!(pgm, gray);
    assert_eq!(bmp, gray);
}
