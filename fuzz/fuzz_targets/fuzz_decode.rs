#![no_main]
use libfuzzer_sys::fuzz_target;
use zenplanes::{DecodeRequest, Limits, RowPadding};

fuzz_target!(|data: &[u8]| {
    // Every input must yield Ok or an error — never a panic
    let _ = zenplanes::probe(data);

    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    for padding in [RowPadding::Legacy, RowPadding::Aligned] {
        if let Ok(image) = DecodeRequest::new(data)
            .with_limits(&limits)
            .with_row_padding(padding)
            .decode(enough::Unstoppable)
        {
            let (w, h) = (image.width() as usize, image.height() as usize);
            for plane in [image.red(), image.green(), image.blue()] {
                assert_eq!((plane.width(), plane.height()), (w, h));
            }
            assert_eq!(image.palette().is_empty(), image.bits_per_pixel() == 24);
        }
    }
});
