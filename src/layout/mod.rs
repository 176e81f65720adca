// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms.
//!
//! Sizes every subtree bottom-up, aligns boxes into one column per depth, and assigns each node
//! its grid position for a single paint pass.

pub mod tree;

pub use tree::{
    box_size, layout_tree, GridBounds, GridPoint, NodeMetrics, NodePlacement, TreeLayout,
    TreeLayoutError,
};
