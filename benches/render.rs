// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use boughs::layout::{layout_tree, GridPoint};
use boughs::render::{paint_tree, render_tree_unicode, Canvas};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

mod fixtures;
mod profiler;

// Groups `render.unicode` (layout + paint + to_string) and `render.paint` (paint only, reused
// canvas). Case IDs come from `fixtures::Case::id`.
fn benches_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render.unicode");
    for case in fixtures::Case::ALL {
        let tree = fixtures::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let rendered =
                    render_tree_unicode(black_box(&tree), None).expect("render_tree_unicode");
                black_box(rendered.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.paint");
    for case in fixtures::Case::ALL {
        let tree = fixtures::fixture(case);
        let probe = layout_tree(&tree, GridPoint::new(0, 0)).expect("layout_tree").bounds();
        let layout = layout_tree(&tree, GridPoint::new(-probe.min_column, -probe.min_row))
            .expect("layout_tree");
        let mut canvas = Canvas::new(probe.width(), probe.height()).expect("canvas");
        let selected = Some(tree.root());
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                canvas.fill(' ');
                paint_tree(&mut canvas, black_box(&tree), black_box(&layout), selected)
                    .expect("paint_tree");
                black_box(canvas.width())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
