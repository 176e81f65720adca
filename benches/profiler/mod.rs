// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Criterion config shared by every bench, with a flamegraph profiler attached.
///
/// Tune with `BOUGHS_PROFILE_FREQ`, `BOUGHS_BENCH_SAMPLE_SIZE`, `BOUGHS_BENCH_WARMUP_SECS` and
/// `BOUGHS_BENCH_MEASUREMENT_SECS`.
pub fn criterion() -> Criterion {
    let frequency = env_or("BOUGHS_PROFILE_FREQ", 100_i32).clamp(1, 1000);
    let sample_size = env_or("BOUGHS_BENCH_SAMPLE_SIZE", 50_usize).clamp(10, 200);
    let warmup_secs = env_or("BOUGHS_BENCH_WARMUP_SECS", 2_u64).clamp(1, 60);
    let measurement_secs = env_or("BOUGHS_BENCH_MEASUREMENT_SECS", 4_u64).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
