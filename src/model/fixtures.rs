// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in trees for startup, tests, and benches.

use super::ids::NodeId;
use super::tree::Tree;

pub const DEFAULT_ROOT_TEXT: &str = "Topic";

fn add(tree: &mut Tree, parent: NodeId, text: &str) -> NodeId {
    let id = tree.new_node_with_text(text);
    tree.append_child(parent, id);
    id
}

/// The tree the editor opens with: a root and a single two-line child.
pub fn default_tree(root_text: &str) -> Tree {
    let mut tree = Tree::new(root_text);
    let root = tree.root();
    add(&mut tree, root, "hallo\nwelt");
    tree
}

/// A small mind map with uneven fan-out and multi-line labels.
pub fn demo_tree() -> Tree {
    let mut tree = Tree::new("boughs");
    let root = tree.root();

    let layout = add(&mut tree, root, "layout");
    add(&mut tree, layout, "subtree\nheights");
    add(&mut tree, layout, "column\nwidths");

    let connectors = add(&mut tree, root, "connectors");
    add(&mut tree, connectors, "spine");
    add(&mut tree, connectors, "tees &\ncorners");
    add(&mut tree, connectors, "junctions");

    let editing = add(&mut tree, root, "editing");
    let keys = add(&mut tree, editing, "keys");
    add(&mut tree, keys, "Tab: child");
    add(&mut tree, keys, "Enter: sibling");
    add(&mut tree, keys, "Del: remove");
    add(&mut tree, editing, "labels\nspan\nlines");

    tree
}

/// A complete tree with `fan_out` children per node, `depth` levels below the root.
pub fn balanced_tree(fan_out: usize, depth: usize) -> Tree {
    let mut tree = Tree::new("root");
    let mut level = vec![tree.root()];
    for d in 0..depth {
        let mut next = Vec::with_capacity(level.len() * fan_out);
        for &parent in &level {
            for i in 0..fan_out {
                next.push(add(&mut tree, parent, &format!("d{}-{i}", d + 1)));
            }
        }
        level = next;
    }
    tree
}

/// A chain of `len` nodes below the root, each label one line longer than the last.
pub fn growing_chain(len: usize) -> Tree {
    let mut tree = Tree::new("chain");
    let mut parent = tree.root();
    let mut label = String::new();
    for i in 0..len {
        if i > 0 {
            label.push('\n');
        }
        label.push_str(&format!("line {i}"));
        parent = add(&mut tree, parent, &label);
    }
    tree
}

#[cfg(test)]
pub(crate) fn three_children(labels: [&str; 3]) -> (Tree, [NodeId; 3]) {
    let mut tree = Tree::new("R");
    let root = tree.root();
    let ids = labels.map(|label| add(&mut tree, root, label));
    (tree, ids)
}
