use criterion::{black_box, criterion_group, criterion_main, Criterion};
use voice_pitch::{
    estimator::{autocorrelation::AutocorrelationEstimator, PitchEstimator},
    frame::AudioFrame,
    spectrum::SpectrumAnalyzer,
    utils::peak::strongest_local_maximum,
    PitchEngine,
};

// One capture callback: 2048 samples at 44.1 kHz leave about 46 ms per frame.
const SAMPLE_RATE: usize = 44100;
const SIZE: usize = 2048;

fn voice(freq: f32) -> Vec<f32> {
    let dt = 1.0 / SAMPLE_RATE as f32;
    (0..SIZE)
        .map(|x| 0.5 * (2.0 * std::f32::consts::PI * x as f32 * dt * freq).sin())
        .collect()
}

pub fn utils_benchmark(c: &mut Criterion) {
    let v = (0..1024)
        .map(|v| ((v as f64) / std::f64::consts::PI / 30.).sin())
        .collect::<Vec<f64>>();
    let vv = v.as_slice();

    c.bench_function("strongest_local_maximum", |b| {
        b.iter(|| strongest_local_maximum(black_box(vv), 1..vv.len()))
    });
}

pub fn pitch_estimate_benchmark(c: &mut Criterion) {
    // Low voices need the longest lags and are the worst case.
    let low = voice(80.0);
    let high = voice(600.0);
    let silence = vec![0.0f32; SIZE];

    let estimator = AutocorrelationEstimator::default();

    c.bench_function("Autocorrelation estimate 80 Hz", |b| {
        let frame = AudioFrame::new(&low, SAMPLE_RATE).unwrap();
        b.iter(|| estimator.estimate(black_box(&frame)).unwrap());
    });

    c.bench_function("Autocorrelation estimate 600 Hz", |b| {
        let frame = AudioFrame::new(&high, SAMPLE_RATE).unwrap();
        b.iter(|| estimator.estimate(black_box(&frame)).unwrap());
    });

    c.bench_function("Autocorrelation estimate silence", |b| {
        let frame = AudioFrame::new(&silence, SAMPLE_RATE).unwrap();
        b.iter(|| estimator.estimate(black_box(&frame)));
    });
}

pub fn fallback_benchmark(c: &mut Criterion) {
    let whisper: Vec<f32> = voice(300.0).into_iter().map(|s| s * 0.01).collect();
    let engine: PitchEngine<f32> = PitchEngine::default();
    let mut analyzer = SpectrumAnalyzer::new(SIZE, SAMPLE_RATE).unwrap();

    c.bench_function("Spectrum analyze", |b| {
        b.iter(|| {
            analyzer.analyze(black_box(&whisper));
        })
    });

    c.bench_function("Engine estimate with spectral fallback", |b| {
        let frame = AudioFrame::new(&whisper, SAMPLE_RATE).unwrap();
        b.iter(|| {
            engine
                .estimate_with(black_box(&frame), || Some(analyzer.analyze(&whisper)))
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    pitch_estimate_benchmark,
    fallback_benchmark,
    utils_benchmark
);
criterion_main!(benches);
