use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use std::fmt;
use uintset::{And, BitSet, BoolSet, Enumerable, HashedSet, Or, RangeSet, Set};

struct Duplex(Vec<u64>, Vec<u64>);

impl fmt::Display for Duplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.0.len(), self.1.len())
    }
}

struct Triplex(Vec<u64>, Vec<u64>, Vec<u64>);

impl fmt::Display for Triplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} -- {}", self.0.len(), self.1.len(), self.2.len())
    }
}

fn sum(e: &dyn Enumerable<u64>) -> u64 {
    e.enumerate().0.sum()
}

// =========

fn do_bench_insert(c: &mut Criterion, label: &str, v: Vec<u64>) {
    let mut group = c.benchmark_group(&format!("{}_insert", label));
    let n = v.len();

    group.bench_with_input(BenchmarkId::new("Bits", n), &v, |t, v| {
        t.iter(|| {
            let mut s = BitSet::<u64>::new();
            s.insert_all(v);
            s
        })
    });
    group.bench_with_input(BenchmarkId::new("Bools", n), &v, |t, v| {
        t.iter(|| {
            let mut s = BoolSet::<u64>::new();
            s.insert_all(v);
            s
        })
    });
    group.bench_with_input(BenchmarkId::new("Hashed", n), &v, |t, v| {
        t.iter(|| {
            let mut s = HashedSet::<u64>::new();
            s.insert_all(v);
            s
        })
    });
    group.bench_with_input(BenchmarkId::new("Ranges", n), &v, |t, v| {
        t.iter(|| {
            let mut s = RangeSet::<u64>::new();
            s.insert_all(v);
            s
        })
    });
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    do_bench_insert(c, "1_dense", Vec::from_iter(1..10240));
    do_bench_insert(c, "2_dense_rev", (1..10240).rev().collect());

    let mut sparse = Vec::new();
    for i in 1..2000 {
        sparse.push(64 * i + 5);
        sparse.push(64 * i + 15);
    }
    do_bench_insert(c, "3_sparse", sparse);
}

fn do_bench_duplex(c: &mut Criterion, label: &str, i: Duplex) {
    let ba = BitSet::<u64>::from_iter(i.0.clone());
    let bb = BitSet::<u64>::from_iter(i.1.clone());
    let oa = BoolSet::<u64>::from_iter(i.0.clone());
    let ob = BoolSet::<u64>::from_iter(i.1.clone());
    let ha = HashedSet::<u64>::from_iter(i.0.clone());
    let hb = HashedSet::<u64>::from_iter(i.1.clone());
    let ra = RangeSet::<u64>::from_iter(i.0.clone());
    let rb = RangeSet::<u64>::from_iter(i.1.clone());

    let mut group = c.benchmark_group(&format!("{}_union", label));
    group.bench_function(BenchmarkId::new("Bits", &i), |t| t.iter(|| sum(&(&ba | &bb))));
    group.bench_function(BenchmarkId::new("Bools", &i), |t| t.iter(|| sum(&(&oa | &ob))));
    group.bench_function(BenchmarkId::new("Hashed", &i), |t| t.iter(|| sum(&(&ha | &hb))));
    group.bench_function(BenchmarkId::new("Ranges", &i), |t| t.iter(|| sum(&(&ra | &rb))));
    group.bench_function(BenchmarkId::new("Merge Bits", &i), |t| {
        t.iter(|| sum(&Or::new(&[&ba, &bb])))
    });
    group.bench_function(BenchmarkId::new("Merge Ranges", &i), |t| {
        t.iter(|| sum(&Or::new(&[&ra, &rb])))
    });
    group.bench_function(BenchmarkId::new("Merge Mixed", &i), |t| {
        t.iter(|| sum(&Or::new(&[&ra, &hb])))
    });
    group.finish();

    let mut group = c.benchmark_group(&format!("{}_intersection", label));
    group.bench_function(BenchmarkId::new("Bits", &i), |t| t.iter(|| sum(&(&ba & &bb))));
    group.bench_function(BenchmarkId::new("Bools", &i), |t| t.iter(|| sum(&(&oa & &ob))));
    group.bench_function(BenchmarkId::new("Hashed", &i), |t| t.iter(|| sum(&(&ha & &hb))));
    group.bench_function(BenchmarkId::new("Ranges", &i), |t| t.iter(|| sum(&(&ra & &rb))));
    group.bench_function(BenchmarkId::new("Merge Bits", &i), |t| {
        t.iter(|| sum(&And::new(&[&ba, &bb])))
    });
    group.bench_function(BenchmarkId::new("Merge Ranges", &i), |t| {
        t.iter(|| sum(&And::new(&[&ra, &rb])))
    });
    group.bench_function(BenchmarkId::new("Merge Mixed", &i), |t| {
        t.iter(|| sum(&And::new(&[&ra, &hb])))
    });
    group.finish();
}

fn bench_duplex(c: &mut Criterion) {
    let i = Duplex(
        vec![2, 3, 8, 35, 64, 128, 130, 150, 152, 180, 256, 800, 900],
        Vec::from_iter(1..1024),
    );
    do_bench_duplex(c, "1_small", i);

    let i = Duplex(vec![1], Vec::from_iter(1..102400));
    do_bench_duplex(c, "2_large_early", i);

    let i = Duplex(vec![102399], Vec::from_iter(1..102400));
    do_bench_duplex(c, "3_large_deep", i);

    let i = Duplex(Vec::from_iter(1..102400), Vec::from_iter(1..102400));
    do_bench_duplex(c, "4_large_eq", i);

    let mut vec1 = Vec::new();
    for i in 1..300 {
        vec1.push(64 * i + 5);
        vec1.push(64 * i + 15)
    }
    let mut vec2 = Vec::new();
    for i in 200..500 {
        vec2.push(64 * i + 5);
        vec2.push(64 * i + 15)
    }
    do_bench_duplex(c, "5_sparse", Duplex(vec1, vec2));
}

fn do_bench_triplex(c: &mut Criterion, label: &str, i: Triplex) {
    let a = RangeSet::<u64>::from_iter(i.0.clone());
    let b = BitSet::<u64>::from_iter(i.1.clone());
    let h = HashedSet::<u64>::from_iter(i.2.clone());

    let mut group = c.benchmark_group(&format!("{}_mixed", label));
    group.bench_function(BenchmarkId::new("Union", &i), |t| {
        t.iter(|| sum(&Or::new(&[&a, &b, &h])))
    });
    group.bench_function(BenchmarkId::new("Intersection", &i), |t| {
        t.iter(|| sum(&And::new(&[&a, &b, &h])))
    });
    group.bench_function(BenchmarkId::new("Intersection Union", &i), |t| {
        t.iter(|| {
            let ab = And::new(&[&a, &b]);
            let x = sum(&Or::new(&[&ab, &h])); x
        })
    });
    group.finish();
}

fn bench_triplex(c: &mut Criterion) {
    do_bench_triplex(
        c,
        "1_trip_small",
        Triplex(
            vec![2, 3, 8, 35, 64, 128, 130, 150, 152, 180, 256, 800, 900],
            Vec::from_iter(1..1024),
            vec![2, 3, 35, 64, 128, 150, 152, 180, 256, 900, 1024, 1500, 1600],
        ),
    );

    do_bench_triplex(
        c,
        "2_trip_large_overlap",
        Triplex(
            Vec::from_iter(1..102400),
            Vec::from_iter(81920..184320),
            Vec::from_iter(160240..242160),
        ),
    );
}

criterion_group!(benches, bench_insert, bench_duplex, bench_triplex);
criterion_main!(benches);
