#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: u32, height: u32, bpp: u16, pixel_bytes: usize) -> Vec<u8> {
    let mut bmp = vec![0u8; 54 + pixel_bytes];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(bmp.len() as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // info header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&bpp.to_le_bytes());
    for (i, b) in bmp[54..].iter_mut().enumerate() {
        *b = (i * 37) as u8;
    }
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Rows padded to 4 * ceil(width / 4) pixels
    fs::write(format!("{dir}/bmp_1x1_24.bmp"), bmp(1, 1, 24, 12)).unwrap();
    fs::write(format!("{dir}/bmp_5x3_24.bmp"), bmp(5, 3, 24, 72)).unwrap();
    fs::write(format!("{dir}/bmp_4x4_32.bmp"), bmp(4, 4, 32, 64)).unwrap();
    fs::write(format!("{dir}/bmp_3x2_8.bmp"), bmp(3, 2, 8, 8)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/bmp_1bpp.bmp"), bmp(8, 1, 1, 4)).unwrap();
    fs::write(format!("{dir}/bmp_missing_rows.bmp"), bmp(4, 4, 24, 20)).unwrap();

    println!("Generated seed corpus in {dir}/");
}
