use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mztoken::codec::{delta, LossyQuantizer};
use mztoken::pipeline::PipelineConfig;
use mztoken::spectrum::SpectrumArrays;

/// Sorted m/z and varied intensities, like a centroided spectrum
fn make_spectrum(peaks: usize) -> SpectrumArrays {
    let mz = (0..peaks)
        .map(|i| 150.0 + i as f32 * 1.7 + ((i as f32) * 0.11).sin() * 0.3)
        .collect();
    let intensity = (0..peaks)
        .map(|i| 500.0 + ((i as f32) * 0.73).sin().abs() * 1.0e5)
        .collect();
    SpectrumArrays::new(mz, intensity)
}

/// Benchmark the delta codec alone
fn bench_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta");

    for peaks in [100, 1_000, 10_000] {
        let spectrum = make_spectrum(peaks);
        let encoded = delta::encode(&spectrum.mz).unwrap();
        group.throughput(Throughput::Elements(peaks as u64));

        group.bench_with_input(BenchmarkId::new("encode", peaks), &spectrum, |b, s| {
            b.iter(|| delta::encode(black_box(&s.mz)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", peaks), &encoded, |b, e| {
            b.iter(|| delta::decode::<f32>(black_box(e)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark log quantization of intensities
fn bench_quantizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantizer");
    let spectrum = make_spectrum(1_000);
    group.throughput(Throughput::Elements(1_000));

    for bits in [8, 12, 16] {
        let quantizer = LossyQuantizer::new(bits).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(bits), &spectrum, |b, s| {
            b.iter(|| quantizer.encode(black_box(&s.intensity)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark full compress/decompress for the presets
fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let spectrum = make_spectrum(500);
    group.throughput(Throughput::Elements(500));

    for (name, config) in [
        ("url", PipelineConfig::url()),
        ("b85", PipelineConfig::b85()),
        ("lzstring-uri", PipelineConfig::lzstring_uri()),
    ] {
        let pipeline = config.build().unwrap();
        let token = pipeline.compress_spectrum(&spectrum).unwrap();

        group.bench_with_input(BenchmarkId::new("compress", name), &spectrum, |b, s| {
            b.iter(|| pipeline.compress_spectrum(black_box(s)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decompress", name), &token, |b, t| {
            b.iter(|| pipeline.decompress(black_box(t)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_delta, bench_quantizer, bench_presets);
criterion_main!(benches);
