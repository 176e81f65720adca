// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SiblingSlot {
    Before,
    After,
    Last,
}

fn add_child(tree: &mut Tree, parent: NodeId) -> OpOutcome {
    let child = tree.new_node();
    if !tree.append_child(parent, child) {
        return OpOutcome::Ignored;
    }
    OpOutcome::Added(child)
}

fn add_sibling(tree: &mut Tree, selected: NodeId, slot: SiblingSlot) -> OpOutcome {
    let Some(parent) = tree.parent(selected) else {
        return OpOutcome::Ignored;
    };
    let Some(index) = tree.child_index(parent, selected) else {
        return OpOutcome::Ignored;
    };

    let position = match slot {
        SiblingSlot::Before => index,
        SiblingSlot::After => index + 1,
        SiblingSlot::Last => usize::MAX,
    };

    let sibling = tree.new_node();
    if !tree.insert_child(parent, sibling, position) {
        return OpOutcome::Ignored;
    }
    OpOutcome::Added(sibling)
}

fn remove_selected(tree: &mut Tree, selected: NodeId) -> OpOutcome {
    let Some(parent) = tree.parent(selected) else {
        return OpOutcome::Ignored;
    };

    let reselected = tree
        .next_sibling(selected)
        .or_else(|| tree.previous_sibling(selected))
        .unwrap_or(parent);

    if !tree.remove_child(parent, selected) {
        return OpOutcome::Ignored;
    }
    OpOutcome::Removed {
        removed: selected,
        reselected,
    }
}

fn set_text(tree: &mut Tree, selected: NodeId, text: &str) -> OpOutcome {
    if !tree.set_text(selected, text) {
        return OpOutcome::Ignored;
    }
    OpOutcome::TextChanged(selected)
}
