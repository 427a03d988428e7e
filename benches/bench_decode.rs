use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mapdec::MappingsDocument;

fn benchmark_decode(c: &mut Criterion) {
    // synthetic document: 256 lines of 64 four-field segments
    let source = vec![vec!["CACC"; 64].join(","); 256].join(";");

    c.bench_function("tokenize", |b| {
        b.iter(|| black_box(MappingsDocument::tokenize(black_box(&source))))
    });

    let document = MappingsDocument::tokenize(&source);
    c.bench_function("decode", |b| {
        b.iter(|| black_box(document.decode().unwrap()))
    });

    let decoded = document.decode().unwrap();
    c.bench_function("resolve", |b| b.iter(|| black_box(decoded.resolve())));
}

criterion_group!(decode, benchmark_decode);
criterion_main!(decode);
