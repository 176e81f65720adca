// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic benchmark trees (no RNG).

use boughs::model::fixtures::{balanced_tree, demo_tree, growing_chain};
use boughs::model::Tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Demo,
    WideFlat,
    Balanced,
    DeepBalanced,
    TallChain,
}

impl Case {
    pub const ALL: [Case; 5] = [
        Case::Demo,
        Case::WideFlat,
        Case::Balanced,
        Case::DeepBalanced,
        Case::TallChain,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Case::Demo => "demo",
            Case::WideFlat => "wide_flat",
            Case::Balanced => "balanced",
            Case::DeepBalanced => "deep_balanced",
            Case::TallChain => "tall_chain",
        }
    }
}

pub fn fixture(case: Case) -> Tree {
    match case {
        Case::Demo => demo_tree(),
        // 200 leaves under one spine.
        Case::WideFlat => balanced_tree(200, 1),
        // 1 + 4 + 16 + 64 + 256 nodes.
        Case::Balanced => balanced_tree(4, 4),
        // 2^11 - 1 nodes, eleven columns.
        Case::DeepBalanced => balanced_tree(2, 10),
        Case::TallChain => growing_chain(40),
    }
}
