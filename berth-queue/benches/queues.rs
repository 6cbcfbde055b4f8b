//! Benchmarks comparing the adapter queue against the ring queue.
//!
//! Run with: cargo bench
//!
//! The interesting number is the fill-then-drain cycle: the ring queue
//! never moves an element, while the array-backed adapter shifts the
//! remaining suffix on every head removal.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use berth_collections::{ArrayList, LinkedList};
use berth_queue::{Queue, RingQueue};

const CAPACITY: usize = 1_024;

fn bench_fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_drain");
    group.throughput(Throughput::Elements(CAPACITY as u64));

    group.bench_function("queue/linked_list", |b| {
        let mut queue: Queue<u64, LinkedList<u64>> = Queue::with_capacity(CAPACITY).unwrap();
        b.iter(|| {
            for i in 0..CAPACITY as u64 {
                queue.try_push(i).unwrap();
            }
            while let Some(value) = queue.pop_front() {
                black_box(value);
            }
        });
    });

    group.bench_function("queue/array_list", |b| {
        let mut queue: Queue<u64, ArrayList<u64>> = Queue::with_capacity(CAPACITY).unwrap();
        b.iter(|| {
            for i in 0..CAPACITY as u64 {
                queue.try_push(i).unwrap();
            }
            while let Some(value) = queue.pop_front() {
                black_box(value);
            }
        });
    });

    group.bench_function("ring_queue", |b| {
        let mut queue: RingQueue<u64> = RingQueue::with_capacity(CAPACITY).unwrap();
        b.iter(|| {
            for i in 0..CAPACITY as u64 {
                queue.try_push(i).unwrap();
            }
            while let Some(value) = queue.pop_front() {
                black_box(value);
            }
        });
    });

    group.finish();
}

fn bench_steady_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("steady_state_push_pop");
    group.throughput(Throughput::Elements(1));

    // Half-full queues, one push + one pop per iteration: the admission
    // pattern the cluster simulator runs.
    group.bench_function("queue/linked_list", |b| {
        let mut queue: Queue<u64, LinkedList<u64>> = Queue::with_capacity(CAPACITY).unwrap();
        for i in 0..(CAPACITY / 2) as u64 {
            queue.try_push(i).unwrap();
        }
        b.iter(|| {
            queue.try_push(black_box(1)).unwrap();
            black_box(queue.pop_front());
        });
    });

    group.bench_function("ring_queue", |b| {
        let mut queue: RingQueue<u64> = RingQueue::with_capacity(CAPACITY).unwrap();
        for i in 0..(CAPACITY / 2) as u64 {
            queue.try_push(i).unwrap();
        }
        b.iter(|| {
            queue.try_push(black_box(1)).unwrap();
            black_box(queue.pop_front());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fill_drain, bench_steady_state);
criterion_main!(benches);
