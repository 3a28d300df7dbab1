use std::{hint::black_box, rc::Rc};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use stepwise_sched::{
    initial_task,
    workload::sink::{shared, WriterSink},
    ExecutionMode, Scheduler,
};

fn drain(mode: ExecutionMode, items: Rc<[u64]>, chains: usize) -> usize {
    let sink = shared(WriterSink::new(std::io::sink()));
    let mut scheduler = Scheduler::new();
    for _ in 0..chains {
        scheduler.add_task(initial_task(mode, Rc::clone(&items), Rc::clone(&sink)));
    }
    scheduler.run().map(|report| report.turns).unwrap_or(0)
}

fn bench_modes(c: &mut Criterion) {
    let items: Rc<[u64]> = (0..1_000).collect::<Vec<_>>().into();
    let mut group = c.benchmark_group("scheduler_turns");
    for mode in ExecutionMode::ALL {
        for chains in [1usize, 16] {
            group.bench_with_input(
                BenchmarkId::new(mode.as_str(), chains),
                &chains,
                |b, &chains| b.iter(|| drain(mode, Rc::clone(&items), black_box(chains))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_modes);
criterion_main!(benches);
