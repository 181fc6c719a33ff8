#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate hxm;

use hxm::asm::{self, Config};
use hxm::image::{self, ImageOptions};

fuzz_target!(|data: &[u8]| {
    let source = match std::str::from_utf8(data) {
        Ok(source) => source,
        Err(_) => return,
    };

    // Anything that compiles must serialize and read back, unless a field overflows
    let config = Config { ignore_errors: true, ..Config::default() };
    if let Ok(compiled) = asm::compile_str(source, &config) {
        let options = ImageOptions { legacy_version_field: false };
        if let Ok(bytes) = image::build_with(&compiled.program, &options) {
            let read = image::read(&bytes, &options).expect("image written by build must read back");
            assert_eq!(read, compiled.program);
        }
    }
});
