use std::{ffi::OsStr, fs, path::Path};

use brace_fmt::{format_source, options::Options};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn mega_source() -> String {
    let root_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata");
    let files = fs::read_dir(&root_path).unwrap();

    let mut source = String::new();
    for entry in files {
        let entry = entry.unwrap();
        if entry.path().extension() == Some(OsStr::new("src")) {
            source += &fs::read_to_string(entry.path()).unwrap();
            source += "\n";
        }
    }
    source
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let source = mega_source();

    let mut group = c.benchmark_group("fmt-throughput");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("format_source", |b| b.iter(|| format_source(black_box(&source), Options::default())));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
