#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use kvec::KVec;

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: usize = 100;
    const LARGE_COUNT: usize = 1000;

    for count in [SMALL_COUNT, LARGE_COUNT] {
        c.bench_function(&format!("kvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = KVec::<usize>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(&format!("kvec empty push {} values", count), |b| {
            b.iter(|| {
                let mut buf = KVec::<usize>::empty();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("kvec with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = KVec::<usize>::with_capacity(count);
                    for value in 0..count {
                        buf.push(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("stdvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(&format!("kvec insert front {} values", count), |b| {
            b.iter(|| {
                let mut buf = KVec::<usize>::new();
                for value in 0..count {
                    buf.insert_at(0, black_box(value));
                }
            });
        });

        c.bench_function(&format!("stdvec insert front {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.insert(0, black_box(value));
                }
            });
        });

        c.bench_function(&format!("kvec remove front {} values", count), |b| {
            let base: KVec<usize> = (0..count).collect();
            b.iter(|| {
                let mut buf = base.clone();
                while !buf.is_empty() {
                    black_box(buf.remove(0));
                }
            });
        });

        c.bench_function(&format!("stdvec remove front {} values", count), |b| {
            let base: Vec<usize> = (0..count).collect();
            b.iter(|| {
                let mut buf = base.clone();
                while !buf.is_empty() {
                    black_box(buf.remove(0));
                }
            });
        });

        c.bench_function(&format!("kvec extend {} values", count), |b| {
            b.iter(|| {
                let mut buf = KVec::<usize>::new();
                buf.extend(black_box(0..count));
            });
        });

        c.bench_function(&format!("stdvec extend {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                buf.extend(black_box(0..count));
            });
        });

        c.bench_function(&format!("kvec clone {} strings", count), |b| {
            let base: KVec<String> = (0..count).map(|i| i.to_string()).collect();
            b.iter(|| black_box(base.clone()));
        });

        c.bench_function(&format!("stdvec clone {} strings", count), |b| {
            let base: Vec<String> = (0..count).map(|i| i.to_string()).collect();
            b.iter(|| black_box(base.clone()));
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
