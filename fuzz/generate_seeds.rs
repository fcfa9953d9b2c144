#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn headers(width: i32, height: i32, depth: u16, colors: u32, file_size: u32) -> Vec<u8> {
    let offset = 54 + 4 * colors;
    let mut h = vec![0u8; 54];
    h[0] = b'B'; h[1] = b'M';
    h[2..6].copy_from_slice(&file_size.to_be_bytes()); // file size
    h[10..14].copy_from_slice(&offset.to_be_bytes()); // pixel array offset
    h[14..18].copy_from_slice(&40u32.to_be_bytes()); // DIB header size
    h[18..22].copy_from_slice(&width.to_be_bytes());
    h[22..26].copy_from_slice(&height.to_be_bytes());
    h[26..28].copy_from_slice(&1u16.to_be_bytes()); // planes
    h[28..30].copy_from_slice(&depth.to_be_bytes());
    h[46..50].copy_from_slice(&colors.to_be_bytes());
    h
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 2x2 24-bit, 2 padding bytes per row
    let mut rgb = headers(2, 2, 24, 0, 70);
    rgb.extend_from_slice(&[255, 0, 0, 0, 255, 0, 0, 0, 0, 0, 255, 128, 128, 128, 0, 0]);
    fs::write(format!("{dir}/rgb24_2x2.bmp"), rgb).unwrap();

    // 3x1 8-bit, two palette entries keyed 0 and 7, 1 padding byte
    let mut indexed = headers(3, 1, 8, 2, 66);
    indexed.extend_from_slice(&[10, 20, 30, 0, 40, 50, 60, 7]);
    indexed.extend_from_slice(&[0, 7, 0, 0]);
    fs::write(format!("{dir}/indexed8_3x1.bmp"), indexed).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/headers_only.bin"), headers(4, 4, 8, 0, 0)).unwrap();

    println!("Generated seed corpus in {dir}/");
}
