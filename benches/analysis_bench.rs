use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use forensix::domain::entities::Seed;
use forensix::infrastructure::FixedClock;
use forensix::{BatchAnalysisUseCase, FileDescriptor, RunAnalysisUseCase};

fn bench_single(c: &mut Criterion) {
    let use_case = RunAnalysisUseCase::new(FixedClock::epoch());
    let file = FileDescriptor::new("report.pdf", 102400, "application/pdf");

    c.bench_function("derive_seed", |b| {
        b.iter(|| Seed::derive(black_box("report.pdf"), black_box(102400), "application/pdf"))
    });
    c.bench_function("run_analysis", |b| b.iter(|| use_case.execute(black_box(&file))));
}

fn bench_batch(c: &mut Criterion) {
    let use_case = BatchAnalysisUseCase::new(FixedClock::epoch());
    let mut group = c.benchmark_group("batch_analysis");

    for size in [16usize, 256, 4096] {
        let files: Vec<FileDescriptor> = (0..size)
            .map(|i| {
                FileDescriptor::new(
                    format!("document-{i}.pdf"),
                    1024 * i as u64,
                    "application/pdf",
                )
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("parallel", size), &files, |b, files| {
            b.iter(|| use_case.execute(files, None))
        });
        group.bench_with_input(BenchmarkId::new("sequential", size), &files, |b, files| {
            b.iter(|| use_case.execute_sequential(files))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
