use blocklist::{BlockList, MemoryBlock};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::collections::LinkedList;

fn make_blocks(count: usize) -> Vec<MemoryBlock> {
  (0..count).map(|i| MemoryBlock::new(i * 64, 64)).collect()
}

/// Appending at either end should stay flat as the list grows
fn bench_insert_ends(c: &mut Criterion) {
  let mut group = c.benchmark_group("insert_ends");

  for size in [100, 1_000, 10_000].iter() {
    let blocks = make_blocks(*size);
    let extra = MemoryBlock::new(usize::MAX - 64, 64);

    group.bench_with_input(BenchmarkId::new("BlockList_last", size), size, |b, _| {
      let mut list: BlockList<&MemoryBlock> = blocks.iter().collect();

      b.iter(|| {
        list.insert_last(black_box(&extra));
        list.remove_at(list.size() - 1).ok();
      });
    });

    group.bench_with_input(BenchmarkId::new("BlockList_first", size), size, |b, _| {
      let mut list: BlockList<&MemoryBlock> = blocks.iter().collect();

      b.iter(|| {
        list.insert_first(black_box(&extra));
        list.remove_at(0).ok();
      });
    });

    group.bench_with_input(BenchmarkId::new("LinkedList_first", size), size, |b, _| {
      let mut list: LinkedList<&MemoryBlock> = blocks.iter().collect();

      b.iter(|| {
        list.push_front(black_box(&extra));
        list.pop_front();
      });
    });
  }

  group.finish();
}

/// Middle insertion walks half the chain
fn bench_insert_middle(c: &mut Criterion) {
  let mut group = c.benchmark_group("insert_middle");

  for size in [100, 1_000, 10_000].iter() {
    let blocks = make_blocks(*size);
    let extra = MemoryBlock::new(usize::MAX - 64, 64);

    group.bench_with_input(BenchmarkId::new("BlockList", size), size, |b, &size| {
      let mut list: BlockList<&MemoryBlock> = blocks.iter().collect();

      b.iter(|| {
        list.insert_at(size / 2, black_box(&extra)).ok();
        list.remove_at(size / 2).ok();
      });
    });

    group.bench_with_input(BenchmarkId::new("Vec", size), size, |b, &size| {
      let mut vec: Vec<&MemoryBlock> = blocks.iter().collect();

      b.iter(|| {
        vec.insert(size / 2, black_box(&extra));
        vec.remove(size / 2);
      });
    });
  }

  group.finish();
}

/// Value lookup: hit at the tail and a miss
fn bench_index_of(c: &mut Criterion) {
  let mut group = c.benchmark_group("index_of");

  for size in [100, 1_000, 10_000].iter() {
    let blocks = make_blocks(*size);
    let list: BlockList<&MemoryBlock> = blocks.iter().collect();
    let tail = blocks[size - 1];
    let missing = MemoryBlock::new(1, 1);

    group.bench_with_input(BenchmarkId::new("hit_tail", size), size, |b, _| {
      b.iter(|| black_box(list.index_of(&&tail)));
    });

    group.bench_with_input(BenchmarkId::new("miss", size), size, |b, _| {
      b.iter(|| black_box(list.index_of(&&missing)));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_insert_ends, bench_insert_middle, bench_index_of);
criterion_main!(benches);
