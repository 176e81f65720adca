// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::ids::NodeId;

/// One labeled box of the diagram.
///
/// `children` is the owning, ordered relation (display order). `parent` is a
/// lookup-only back reference kept consistent by the [`Tree`] operations, or
/// re-derived with [`Tree::propagate_parent_links`] after raw surgery on
/// `children`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Node {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns `(width, height)` of the label in character cells: the longest
    /// line and the number of `\n`-separated lines. An empty label is one
    /// empty line.
    pub fn inner_size(&self) -> (usize, usize) {
        let mut width = 0usize;
        let mut height = 0usize;
        for line in self.text.split('\n') {
            width = width.max(line.chars().count());
            height += 1;
        }
        (width, height)
    }
}

/// A rooted, ordered tree of [`Node`]s stored in an arena keyed by [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: NodeId,
    nodes: BTreeMap<NodeId, Node>,
    next_id: u32,
}

impl Tree {
    pub fn new(root_text: impl Into<String>) -> Self {
        let root = NodeId::from_raw(0);
        let mut nodes = BTreeMap::new();
        nodes.insert(root, Node::new(root_text));
        Self {
            root,
            nodes,
            next_id: 1,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of nodes in the arena, including detached ones not yet attached.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(Node::text)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    /// Creates a detached node with an empty label.
    pub fn new_node(&mut self) -> NodeId {
        self.new_node_with_text(String::new())
    }

    pub fn new_node_with_text(&mut self, text: impl Into<String>) -> NodeId {
        let id = NodeId::from_raw(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.nodes.insert(id, Node::new(text));
        id
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        self.insert_child(parent, child, usize::MAX)
    }

    /// Splices `child` into `parent`'s children at `position`, appending when
    /// `position` is past the end.
    ///
    /// Returns `false` without touching the tree when either node is unknown,
    /// `child` is the root or already attached, or the insert would make
    /// `parent` a descendant of `child`.
    pub fn insert_child(&mut self, parent: NodeId, child: NodeId, position: usize) -> bool {
        if !self.can_attach(parent, child) {
            return false;
        }

        let Some(parent_node) = self.nodes.get_mut(&parent) else {
            return false;
        };
        let position = position.min(parent_node.children.len());
        parent_node.children.insert(position, child);

        if let Some(child_node) = self.nodes.get_mut(&child) {
            child_node.parent = Some(parent);
        }
        true
    }

    fn can_attach(&self, parent: NodeId, child: NodeId) -> bool {
        if child == self.root || !self.contains(parent) {
            return false;
        }
        let Some(child_node) = self.node(child) else {
            return false;
        };
        if child_node.parent.is_some() {
            return false;
        }
        // A detached node may still own children; refuse to hang it below one of them.
        !self.is_ancestor_or_self(child, parent)
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        let mut steps = 0usize;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            steps += 1;
            if steps > self.nodes.len() {
                return false;
            }
            current = self.parent(id);
        }
        false
    }

    /// Splices `child` out of `parent` and drops it together with its subtree.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let Some(index) = self.child_index(parent, child) else {
            return false;
        };
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.remove(index);
        }

        for id in self.descendants(child) {
            self.nodes.remove(&id);
        }
        true
    }

    pub fn child_index(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).iter().position(|&id| id == child)
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let index = self.child_index(parent, id)?;
        let previous = index.checked_sub(1)?;
        self.children(parent).get(previous).copied()
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let index = self.child_index(parent, id)?;
        self.children(parent).get(index + 1).copied()
    }

    /// Raw access to a node's children for bulk surgery.
    ///
    /// Parent links are not maintained here; run
    /// [`Tree::propagate_parent_links`] once the surgery is complete.
    pub fn children_mut(&mut self, id: NodeId) -> Option<&mut Vec<NodeId>> {
        self.nodes.get_mut(&id).map(|node| &mut node.children)
    }

    /// Re-derives every `parent` from the `children` vectors reachable from the
    /// root. Nodes the surgery cut loose end up detached.
    ///
    /// Surgery that made a node reachable twice (a cycle or a shared child) is
    /// reported as [`TreeError::NotATree`]; parent links are left partial then.
    pub fn propagate_parent_links(&mut self) -> Result<(), TreeError> {
        for node in self.nodes.values_mut() {
            node.parent = None;
        }

        let mut visited = BTreeSet::<NodeId>::new();
        let mut stack = vec![(self.root, None::<NodeId>)];
        while let Some((id, parent)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(&id) else {
                continue;
            };
            if !visited.insert(id) {
                return Err(TreeError::NotATree { node_id: id });
            }
            node.parent = parent;
            for &child in node.children.iter().rev() {
                stack.push((child, Some(id)));
            }
        }
        Ok(())
    }

    /// Returns `id` and all of its descendants in pre-order (display order).
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if !self.contains(id) {
            return out;
        }

        let mut visited = BTreeSet::<NodeId>::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            out.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// Number of edges between `id` and the root, or `None` when `id` is not
    /// reachable from the root.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut depth = 0usize;
        let mut current = id;
        loop {
            if !self.contains(current) {
                return None;
            }
            if current == self.root {
                return Some(depth);
            }
            current = self.parent(current)?;
            depth += 1;
            if depth > self.nodes.len() {
                return None;
            }
        }
    }

    pub fn is_reachable(&self, id: NodeId) -> bool {
        self.depth(id).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// `node_id` was reached a second time while walking down from the root.
    NotATree { node_id: NodeId },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotATree { node_id } => {
                write!(f, "node {node_id} is reachable twice from the root")
            }
        }
    }
}

impl std::error::Error for TreeError {}
