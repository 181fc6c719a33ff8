#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate hxm;

use hxm::image::{self, ImageOptions};

fuzz_target!(|data: &[u8]| {
    let _ = image::read(data, &ImageOptions::default());
    let _ = image::read(data, &ImageOptions { legacy_version_field: false });
});
