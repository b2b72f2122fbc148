// Copyright (c) 2021 Thomas J. Otterson
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use c64_pla::{chips::Ic82S100, evaluate, InputVector, TruthTable};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sweep_equations(c: &mut Criterion) {
    c.bench_function("equations 64k sweep", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for value in 0..=u16::MAX {
                acc += evaluate(black_box(InputVector::new(value))).value() as u32;
            }
            acc
        })
    });
}

fn sweep_array(c: &mut Criterion) {
    let chip = Ic82S100::new();
    c.bench_function("82S100 array 64k sweep", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for value in 0..=u16::MAX {
                if let Some(output) = chip.drive(black_box(InputVector::new(value))) {
                    acc += output.value() as u32;
                }
            }
            acc
        })
    });
}

fn table_lookup(c: &mut Criterion) {
    let table = TruthTable::generate();
    c.bench_function("truth table 64k lookup", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for value in 0..=u16::MAX {
                acc += table.get(black_box(InputVector::new(value))).value() as u32;
            }
            acc
        })
    });
}

criterion_group!(benches, sweep_equations, sweep_array, table_lookup);
criterion_main!(benches);
