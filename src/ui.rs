// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navigation and selection state.
//!
//! The selection is a single node reference into the tree. Once a tree is loaded it always names a
//! node reachable from the root; structural edits that remove the selected node reselect in the
//! same step (see [`crate::ops::apply_op`]).

use crate::model::{NodeId, Tree};

/// Directional moves, named by where they go in the tree rather than by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDirection {
    Parent,
    /// The lower-middle child, at index `(len - 1) / 2`.
    Child,
    PreviousSibling,
    NextSibling,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<NodeId>,
    rev: u64,
}

impl Selection {
    /// A selection with nothing loaded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection starting at the tree's root.
    pub fn for_tree(tree: &Tree) -> Self {
        Self {
            selected: Some(tree.root()),
            rev: 0,
        }
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Bumped every time the selected node changes.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    /// Selects the root if nothing is selected yet.
    pub fn ensure_loaded(&mut self, tree: &Tree) {
        if self.selected.is_none() {
            self.set(Some(tree.root()));
        }
    }

    /// Selects `node_id` if it is reachable from the root. Returns whether it was accepted.
    pub fn select(&mut self, tree: &Tree, node_id: NodeId) -> bool {
        if !tree.is_reachable(node_id) {
            return false;
        }
        self.set(Some(node_id));
        true
    }

    /// Moves the selection one step. Returns `true` when the selection changed; moves past a
    /// boundary of the tree are no-ops.
    pub fn navigate(&mut self, tree: &Tree, direction: NavDirection) -> bool {
        let Some(current) = self.selected else {
            return false;
        };

        let target = match direction {
            NavDirection::Parent => tree.parent(current),
            NavDirection::Child => favored_child(tree.children(current)),
            NavDirection::PreviousSibling => tree.previous_sibling(current),
            NavDirection::NextSibling => tree.next_sibling(current),
        };

        match target {
            Some(next) if next != current => {
                tracing::debug!(?direction, from = %current, to = %next, "selection moved");
                self.set(Some(next));
                true
            }
            _ => false,
        }
    }

    /// Falls back to the root when the selection no longer names a reachable node.
    ///
    /// Edits that go through [`crate::ops::apply_op`] never need this; it covers raw `children`
    /// surgery followed by [`Tree::propagate_parent_links`].
    pub fn repair(&mut self, tree: &Tree) -> bool {
        match self.selected {
            Some(id) if tree.is_reachable(id) => false,
            _ => {
                self.set(Some(tree.root()));
                true
            }
        }
    }

    pub(crate) fn set(&mut self, selected: Option<NodeId>) {
        if self.selected == selected {
            return;
        }
        self.selected = selected;
        self.rev = self.rev.wrapping_add(1);
    }
}

fn favored_child(children: &[NodeId]) -> Option<NodeId> {
    if children.is_empty() {
        return None;
    }
    children.get((children.len() - 1) / 2).copied()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{favored_child, NavDirection, Selection};
    use crate::model::fixtures::{default_tree, three_children};
    use crate::model::{NodeId, Tree};

    fn fan(count: usize) -> (Tree, Vec<NodeId>) {
        let mut tree = Tree::new("R");
        let root = tree.root();
        let ids = (0..count)
            .map(|i| {
                let id = tree.new_node_with_text(format!("c{i}"));
                tree.append_child(root, id);
                id
            })
            .collect();
        (tree, ids)
    }

    #[rstest]
    #[case(1, 0)]
    #[case(2, 0)]
    #[case(3, 1)]
    #[case(4, 1)]
    #[case(5, 2)]
    fn child_move_picks_the_lower_middle_child(#[case] count: usize, #[case] expected: usize) {
        let (tree, ids) = fan(count);
        let mut selection = Selection::for_tree(&tree);
        assert!(selection.navigate(&tree, NavDirection::Child));
        assert_eq!(selection.selected(), Some(ids[expected]));
    }

    #[test]
    fn favored_child_of_no_children_is_none() {
        assert_eq!(favored_child(&[]), None);
    }

    #[test]
    fn starts_empty_until_loaded() {
        let tree = default_tree("Topic");
        let mut selection = Selection::new();
        assert_eq!(selection.selected(), None);
        assert!(!selection.navigate(&tree, NavDirection::Child));

        selection.ensure_loaded(&tree);
        assert_eq!(selection.selected(), Some(tree.root()));
        assert_eq!(selection.rev(), 1);

        selection.ensure_loaded(&tree);
        assert_eq!(selection.rev(), 1);
    }

    #[test]
    fn boundary_moves_are_no_ops() {
        let (tree, [a, _, c]) = three_children(["a", "b", "c"]);
        let mut selection = Selection::for_tree(&tree);

        assert!(!selection.navigate(&tree, NavDirection::Parent));
        assert!(!selection.navigate(&tree, NavDirection::PreviousSibling));
        assert!(!selection.navigate(&tree, NavDirection::NextSibling));
        assert_eq!(selection.selected(), Some(tree.root()));
        assert_eq!(selection.rev(), 0);

        assert!(selection.select(&tree, a));
        assert!(!selection.navigate(&tree, NavDirection::PreviousSibling));
        assert!(!selection.navigate(&tree, NavDirection::Child));
        assert_eq!(selection.selected(), Some(a));

        assert!(selection.select(&tree, c));
        assert!(!selection.navigate(&tree, NavDirection::NextSibling));
        assert_eq!(selection.selected(), Some(c));
    }

    #[test]
    fn walks_siblings_and_back_to_parent() {
        let (tree, [a, b, c]) = three_children(["a", "b", "c"]);
        let mut selection = Selection::for_tree(&tree);

        assert!(selection.navigate(&tree, NavDirection::Child));
        assert_eq!(selection.selected(), Some(b));
        assert!(selection.navigate(&tree, NavDirection::PreviousSibling));
        assert_eq!(selection.selected(), Some(a));
        assert!(selection.navigate(&tree, NavDirection::NextSibling));
        assert!(selection.navigate(&tree, NavDirection::NextSibling));
        assert_eq!(selection.selected(), Some(c));
        assert!(selection.navigate(&tree, NavDirection::Parent));
        assert_eq!(selection.selected(), Some(tree.root()));
        assert_eq!(selection.rev(), 5);
    }

    #[test]
    fn select_rejects_detached_nodes() {
        let mut tree = default_tree("Topic");
        let detached = tree.new_node();
        let mut selection = Selection::for_tree(&tree);

        assert!(!selection.select(&tree, detached));
        assert_eq!(selection.selected(), Some(tree.root()));
    }

    #[test]
    fn repair_falls_back_to_the_root_after_raw_surgery() {
        let (mut tree, [a, b, _]) = three_children(["a", "b", "c"]);
        let root = tree.root();
        let mut selection = Selection::for_tree(&tree);
        assert!(selection.select(&tree, b));

        tree.children_mut(root).expect("root").retain(|&id| id != b);
        tree.propagate_parent_links().expect("tree");

        assert!(selection.repair(&tree));
        assert_eq!(selection.selected(), Some(root));
        assert!(!selection.repair(&tree));

        assert!(selection.select(&tree, a));
        assert!(!selection.repair(&tree));
    }
}
