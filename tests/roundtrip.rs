use bmprotate::*;
use enough::Unstoppable;
use proptest::prelude::*;

fn noise_pattern(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

#[test]
fn bmp_roundtrip_bgr8() {
    let pixels = vec![
        255, 0, 0, 0, 255, 0, 0, 0, 255, // row 0
        128, 128, 128, 64, 64, 64, 0, 0, 0, // row 1
    ];
    let image = ImageBuffer::from_pixels(pixels.clone(), 3, 2, 3).unwrap();

    let encoded = encode_bmp(&image, Unstoppable).unwrap();
    assert_eq!(&encoded[0..2], b"BM");

    let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded.bytes_per_pixel(), 3);
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn bmp_roundtrip_bgra8() {
    let pixels = noise_pattern(7 * 5 * 4, 0xDEAD_BEEF);
    let image = ImageBuffer::from_pixels(pixels, 7, 5, 4).unwrap();
    let encoded = encode_bmp(&image, Unstoppable).unwrap();
    let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded, image);
}

#[test]
fn bmp_roundtrip_gray8_and_16bit() {
    for bpp in [1, 2] {
        let pixels = noise_pattern(5 * 3 * bpp as usize, 42);
        let image = ImageBuffer::from_pixels(pixels, 5, 3, bpp).unwrap();
        let encoded = encode_bmp(&image, Unstoppable).unwrap();
        let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
        assert_eq!(decoded, image, "bpp {bpp}");
    }
}

#[test]
fn rotate_then_roundtrip() {
    let pixels = noise_pattern(6 * 4 * 3, 7);
    let mut image = ImageBuffer::from_pixels(pixels, 6, 4, 3).unwrap();
    rotate_right(&mut image);
    let decoded = decode_bmp(&encode_bmp(&image, Unstoppable).unwrap(), Unstoppable).unwrap();
    assert_eq!(decoded, image);
}

#[test]
fn encoded_length_matches_header() {
    let image = ImageBuffer::allocate(5, 3, 3).unwrap();
    let encoded = encode_bmp(&image, Unstoppable).unwrap();
    // 24 bytes per padded row
    assert_eq!(encoded.len(), 54 + 24 * 3);
    assert_eq!(&encoded[2..6], &(encoded.len() as u32).to_le_bytes());
}

#[test]
fn limits_reject_large() {
    let image = ImageBuffer::allocate(4, 4, 3).unwrap();
    let encoded = encode_bmp(&image, Unstoppable).unwrap();

    let limits = Limits {
        max_pixels: Some(15),
        ..Default::default()
    };
    let result = DecodeRequest::new(&encoded)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result.unwrap_err() {
        BitmapError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let roomy = Limits {
        max_width: Some(4),
        max_height: Some(4),
        max_memory_bytes: Some(48),
        ..Default::default()
    };
    assert!(
        DecodeRequest::new(&encoded)
            .with_limits(&roomy)
            .decode(Unstoppable)
            .is_ok()
    );
}

#[test]
fn limits_max_memory() {
    let image = ImageBuffer::allocate(4, 4, 4).unwrap();
    let encoded = encode_bmp(&image, Unstoppable).unwrap();
    let limits = Limits {
        max_memory_bytes: Some(63),
        ..Default::default()
    };
    let err = DecodeRequest::new(&encoded)
        .with_limits(&limits)
        .decode(Unstoppable)
        .unwrap_err();
    assert!(matches!(err, BitmapError::LimitExceeded(_)));
}

proptest! {
    #[test]
    fn decode_inverts_encode(
        width in 0u32..24,
        height in 0u32..24,
        bpp in 1u32..=4,
        seed in any::<u32>(),
    ) {
        let len = (width * height * bpp) as usize;
        let image = ImageBuffer::from_pixels(noise_pattern(len, seed), width, height, bpp).unwrap();
        let encoded = encode_bmp(&image, Unstoppable).unwrap();

        let padded = padded_row_size(width, bpp).unwrap();
        prop_assert_eq!(encoded.len(), 54 + padded * height as usize);

        let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
        prop_assert_eq!(decoded, image);
    }
}
