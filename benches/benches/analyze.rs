use criterion::{criterion_group, criterion_main, Criterion};
use unicode_ucd_properties::{Config, Ucd};

mod group;

group!(ascii, test_ascii, "analyze", "ascii", 0 .. 0x80u32);

group!(bmp, test_bmp, "analyze", "bmp", (0 .. 0x10000u32).step_by(17));

group!(all, test_all, "analyze", "all", (0 ..= 0x10FFFFu32).step_by(257));

criterion_group!(benches, ascii, bmp, all);
criterion_main!(benches);
