#[macro_use]
extern crate criterion;
extern crate hxm;

use criterion::Criterion;
use criterion::black_box;

use hxm::asm::{self, Config};
use hxm::image;


// Repeat a source body so the pass spends its time on instructions, not setup
fn repeated(body: &str, times: usize) -> String {
    let mut source = String::with_capacity(body.len() * times);
    for _ in 0..times {
        source.push_str(body);
    }
    source
}

fn compile(source: &str) -> hxm::Program {
    match asm::compile_str(source, &Config::default()) {
        Ok(compiled) => compiled.program,
        Err(err) => panic!("benchmark source failed to compile: {}", err),
    }
}


fn criterion_benchmark(c: &mut Criterion) {
    let hello = include_str!("../test-hxm/hello.hxmasm");
    c.bench_function("compile-hello", |b| b.iter(|| compile(black_box(hello)) ));

    let body = r#"
        setvar 0
        addvar 1
        jmpequ 0, 1
        jmpequvar 0, 1, 2
        syscallret 7, 8
        setaccbyte 1, 2
        fjmplevar 0, 0, 0   // floating point
        noop
    "#;
    let source = repeated(body, 512);
    c.bench_function("compile-4k-inst", |b| b.iter(|| compile(black_box(&source)) ));

    let program = compile(&source);
    c.bench_function("build-4k-inst", |b| b.iter(|| image::build(black_box(&program)) ));

    let bytes = match image::build(&program) {
        Ok(bytes) => bytes,
        Err(err) => panic!("benchmark image failed to build: {}", err),
    };
    let options = image::ImageOptions::default();
    c.bench_function("read-4k-inst", |b| b.iter(|| image::read(black_box(&bytes), &options) ));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
