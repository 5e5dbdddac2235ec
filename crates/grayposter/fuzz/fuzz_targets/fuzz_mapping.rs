#![no_main]

use arbitrary::Arbitrary;
use grayposter::image::{GrayImage, Luma};
use grayposter::{BucketMap, Levels, Mapping, ValueList};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    levels: u16,
    values: Vec<u8>,
    breakpoints: Option<Vec<u8>>,
    values_text: String,
    width: u8,
    height: u8,
}

fuzz_target!(|input: FuzzInput| {
    // Parsing free-form text should never panic
    let _ = input.values_text.parse::<ValueList>();

    let width = (input.width as u32).clamp(1, 64);
    let height = (input.height as u32).clamp(1, 64);
    let img = GrayImage::from_fn(width, height, |x, y| Luma([(x * 7 + y * 13) as u8]));

    if let Ok(levels) = Levels::new(input.levels) {
        let lut = Mapping::Levels(levels).lut();
        assert!((0..255u8).all(|v| lut.get(v) <= lut.get(v + 1)));
        assert_eq!(lut.distinct_outputs().len(), levels.count() as usize);
        let _ = lut.apply(&img);
    }

    if let Ok(buckets) = BucketMap::new(&input.values, input.breakpoints.as_deref()) {
        let lut = Mapping::Buckets(buckets.clone()).lut();
        for v in 0..=255u8 {
            assert!(buckets.values().contains(&lut.get(v)));
        }
        let _ = lut.apply(&img);
    }
});
