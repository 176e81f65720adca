// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A [`Tree`] is an arena of labeled [`Node`]s keyed by [`NodeId`]; the root is created with the
//! tree and lives for as long as the tree does.

pub mod fixtures;
pub mod ids;
pub mod tree;

pub use ids::{NodeId, NodeIdError};
pub use tree::{Node, Tree, TreeError};
