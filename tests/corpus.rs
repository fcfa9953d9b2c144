//! Test corpus: decode sweeps over sizes, patterns, and both pixel formats.

mod common;

use common::{Fixture, checkerboard, gradient_palette, noise_pattern};
use zenplanes::*;

fn assert_planes_match(image: &BmpImage, width: usize, height: usize, rgb: &[u8]) {
    for plane in [image.red(), image.green(), image.blue()] {
        assert_eq!((plane.width(), plane.height()), (width, height));
    }
    for row in 0..height {
        for col in 0..width {
            let off = (row * width + col) * 3;
            assert_eq!(
                image.pixel(row, col),
                Some(Color::new(rgb[off], rgb[off + 1], rgb[off + 2])),
                "pixel ({row}, {col}) of {width}x{height}"
            );
        }
    }
}

// ── 24-bit ───────────────────────────────────────────────────────────

#[test]
fn rgb24_size_sweep() {
    for width in 1..=9 {
        for height in 1..=4 {
            let pixels = noise_pattern(width * height * 3, 0xCAFE_BABE ^ (width * 31 + height) as u32);
            let data = Fixture::rgb24(width as i32, height as i32, pixels.clone()).build();
            let image = decode(&data).unwrap();
            assert!(image.palette().is_empty());
            assert_planes_match(&image, width, height, &pixels);
        }
    }
}

#[test]
fn rgb24_checkerboard() {
    let pixels = checkerboard(10, 8, 3);
    let image = decode(&Fixture::rgb24(10, 8, pixels.clone()).build()).unwrap();
    assert_planes_match(&image, 10, 8, &pixels);
    assert_eq!(image.red().get(0, 0), Some(200));
    assert_eq!(image.blue().get(0, 1), Some(70));
}

#[test]
fn rgb24_without_trailing_padding() {
    for width in 1..=5 {
        let pixels = checkerboard(width, 3, 3);
        let mut fixture = Fixture::rgb24(width as i32, 3, pixels.clone());
        fixture.pad_last_row = false;
        let image = decode(&fixture.build()).unwrap();
        assert_planes_match(&image, width, 3, &pixels);
    }
}

// ── 8-bit indexed ───────────────────────────────────────────────────

#[test]
fn indexed8_size_sweep() {
    let palette = gradient_palette(256);
    for width in 1..=9 {
        for height in 1..=4 {
            let keys = noise_pattern(width * height, 0x1234_5678 ^ (width * 17 + height) as u32);
            let data = Fixture::indexed8(width as i32, height as i32, palette.clone(), keys.clone())
                .build();
            let image = decode(&data).unwrap();
            assert_eq!(image.palette().len(), 256);

            let expected: Vec<u8> = keys
                .iter()
                .flat_map(|&k| {
                    let [r, g, b, _] = palette[usize::from(k)];
                    [r, g, b]
                })
                .collect();
            assert_planes_match(&image, width, height, &expected);
        }
    }
}

#[test]
fn indexed8_small_palette_sweep() {
    // declared count smaller than 2^8, keys scattered over the byte range
    let palette: Vec<[u8; 4]> = (0..16u8).map(|i| [i * 16, i, 255 - i, i * 15]).collect();
    for width in 1..=8 {
        let keys: Vec<u8> = (0..width * 2).map(|i| (i % 16) as u8 * 15).collect();
        let data = Fixture::indexed8(width as i32, 2, palette.clone(), keys.clone()).build();
        let image = decode(&data).unwrap();
        assert_eq!(image.color_count(), 16);
        assert_eq!(image.palette().len(), 16);
        for (i, &key) in keys.iter().enumerate() {
            let idx = usize::from(key / 15);
            let [r, g, b, _] = palette[idx];
            assert_eq!(image.pixel(i / width, i % width), Some(Color::new(r, g, b)));
        }
    }
}

// ── Row padding rules ───────────────────────────────────────────────

#[test]
fn aligned_padding_sweep() {
    let palette = gradient_palette(256);
    for width in 1..=9 {
        let pixels = checkerboard(width, 3, 3);
        let mut fixture = Fixture::rgb24(width as i32, 3, pixels.clone());
        fixture.padding = RowPadding::Aligned;
        let data = fixture.build();
        let image = DecodeRequest::new(&data)
            .with_row_padding(RowPadding::Aligned)
            .decode(Unstoppable)
            .unwrap();
        assert_planes_match(&image, width, 3, &pixels);

        let keys = noise_pattern(width * 3, 0x0BAD_F00D);
        let mut fixture = Fixture::indexed8(width as i32, 3, palette.clone(), keys.clone());
        fixture.padding = RowPadding::Aligned;
        let data = fixture.build();
        let image = DecodeRequest::new(&data)
            .with_row_padding(RowPadding::Aligned)
            .decode(Unstoppable)
            .unwrap();
        for (i, &key) in keys.iter().enumerate() {
            assert_eq!(image.red().get(i / width, i % width), Some(key));
        }
    }
}

#[test]
fn padding_bytes_never_reach_planes() {
    // every pixel byte is 0 or 1 and padding is 0xEE
    for width in 1..=8 {
        let pixels: Vec<u8> = (0..width * 4 * 3).map(|i| (i % 2) as u8).collect();
        let image = decode(&Fixture::rgb24(width as i32, 4, pixels).build()).unwrap();
        for plane in image.into_planes() {
            assert!(plane.as_slice().iter().all(|&v| v <= 1), "width {width}");
        }
    }
}
