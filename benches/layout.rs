// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use boughs::layout::{layout_tree, GridPoint};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

mod fixtures;
mod profiler;

// Group `layout.tree`; case IDs come from `fixtures::Case::id` and stay stable across refactors.
fn benches_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout.tree");
    for case in fixtures::Case::ALL {
        let tree = fixtures::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let layout =
                    layout_tree(black_box(&tree), GridPoint::new(0, 0)).expect("layout_tree");
                black_box(layout.bounds().height())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_layout
}
criterion_main!(benches);
