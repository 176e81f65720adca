// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Edit operations on the tree.
//!
//! Every op acts relative to the current selection and updates it in the same step, so a removal
//! can never leave the selection pointing at a node that no longer exists. Ops that make no sense
//! in the current state (editing around the root, nothing selected) are absorbed as
//! [`OpOutcome::Ignored`].

use crate::model::{NodeId, Tree};
use crate::ui::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Appends an empty child to the selection and selects it.
    AddChild,
    /// Appends an empty node at the end of the selection's siblings and selects it.
    AppendSibling,
    InsertSiblingBefore,
    InsertSiblingAfter,
    /// Removes the selection with its subtree, reselecting next sibling, then previous sibling,
    /// then parent.
    RemoveSelected,
    /// Replaces the selection's label.
    SetText(String),
}

impl EditOp {
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::SetText(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpOutcome {
    Added(NodeId),
    Removed { removed: NodeId, reselected: NodeId },
    TextChanged(NodeId),
    Ignored,
}

impl OpOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    /// The node selected after the op, when the op moved the selection.
    pub fn new_selection(&self) -> Option<NodeId> {
        match self {
            Self::Added(id) => Some(*id),
            Self::Removed { reselected, .. } => Some(*reselected),
            Self::TextChanged(_) | Self::Ignored => None,
        }
    }
}

/// Applies `op` to `tree` around the current selection.
pub fn apply_op(tree: &mut Tree, selection: &mut Selection, op: &EditOp) -> OpOutcome {
    let Some(selected) = selection.selected() else {
        return OpOutcome::Ignored;
    };
    if !tree.is_reachable(selected) {
        return OpOutcome::Ignored;
    }

    let outcome = match op {
        EditOp::AddChild => add_child(tree, selected),
        EditOp::AppendSibling => add_sibling(tree, selected, SiblingSlot::Last),
        EditOp::InsertSiblingBefore => add_sibling(tree, selected, SiblingSlot::Before),
        EditOp::InsertSiblingAfter => add_sibling(tree, selected, SiblingSlot::After),
        EditOp::RemoveSelected => remove_selected(tree, selected),
        EditOp::SetText(text) => set_text(tree, selected, text),
    };

    if let Some(next) = outcome.new_selection() {
        selection.set(Some(next));
    }

    if outcome.is_ignored() {
        tracing::trace!(?op, node = %selected, "edit ignored");
    } else {
        tracing::debug!(?op, ?outcome, nodes = tree.len(), "edit applied");
    }
    outcome
}

// Per-op tree surgery used by `apply_op`.
include!("ops_impl.rs");
