// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Benchmarks for the verbalizer.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Hundred-group conversion
//! - Integer conversion across magnitudes
//! - Full currency verbalization, single-threaded and parallel

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use extenso_rs::{Amount, CurrencyVerbalizer, convert_group, convert_integer};
use rayon::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Single-Threaded Benchmarks
// =============================================================================

fn bench_convert_group(c: &mut Criterion) {
    c.bench_function("convert_group_all", |b| {
        b.iter(|| {
            for n in 0..=999u64 {
                black_box(convert_group(black_box(n)).unwrap());
            }
        })
    });
}

fn bench_convert_integer(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_integer");

    for n in [7u64, 1_001, 123_456, 999_999_999] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| convert_integer(black_box(n)).unwrap())
        });
    }

    group.finish();
}

fn bench_verbalize(c: &mut Criterion) {
    let verbalizer = CurrencyVerbalizer::default();

    c.bench_function("verbalize_decimal", |b| {
        let amount = Decimal::new(123_456_789_01, 2);
        b.iter(|| verbalizer.verbalize(black_box(amount)).unwrap())
    });

    c.bench_function("verbalize_localized", |b| {
        b.iter(|| {
            let amount = Amount::parse_localized(black_box("R$ 1.234.567,89")).unwrap();
            verbalizer.verbalize_amount(amount).unwrap()
        })
    });
}

// =============================================================================
// Multi-Threaded Benchmarks
// =============================================================================

fn bench_parallel_batch(c: &mut Criterion) {
    let verbalizer = CurrencyVerbalizer::default();
    let mut group = c.benchmark_group("parallel_batch");

    for size in [1_000usize, 10_000] {
        let amounts: Vec<Decimal> = (0..size as i64)
            .map(|i| Decimal::new(i * 7_919_113, 2))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &amounts, |b, amounts| {
            b.iter(|| {
                amounts
                    .par_iter()
                    .map(|a| verbalizer.verbalize(*a).unwrap())
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_convert_group,
    bench_convert_integer,
    bench_verbalize,
    bench_parallel_batch
);
criterion_main!(benches);
