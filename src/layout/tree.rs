// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::model::{Node, NodeId, Tree};

/// Border plus one padding column on each side of the label.
pub const BOX_PADDING_X: usize = 4;
/// Top and bottom border rows.
pub const BOX_BORDER_Y: usize = 2;
/// Blank rows between the bands of two adjacent siblings.
pub const SIBLING_SPACING: usize = 1;
/// Columns between the right edge of a depth column and the left edge of the next one.
pub const COLUMN_GAP: i32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPoint {
    column: i32,
    row: i32,
}

impl GridPoint {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn row(&self) -> i32 {
        self.row
    }
}

/// Sizes derived bottom-up for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeMetrics {
    box_width: usize,
    box_height: usize,
    subtree_height: usize,
    depth: usize,
}

impl NodeMetrics {
    /// Width of the node's own box, before column alignment.
    pub fn box_width(&self) -> usize {
        self.box_width
    }

    pub fn box_height(&self) -> usize {
        self.box_height
    }

    /// Rows the node and its descendants occupy.
    pub fn subtree_height(&self) -> usize {
        self.subtree_height
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Where a node's box is painted.
///
/// `column` is the left border, `row` the vertical center. `width` is the
/// shared column width of the node's depth, not its own box width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodePlacement {
    column: i32,
    row: i32,
    width: usize,
    height: usize,
}

impl NodePlacement {
    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn top(&self) -> i32 {
        self.row - (self.height / 2) as i32
    }

    pub fn bottom(&self) -> i32 {
        self.top() + self.height as i32 - 1
    }

    pub fn right(&self) -> i32 {
        self.column + self.width as i32 - 1
    }

    /// Connector start: the cell just right of the box on its center row.
    pub fn out_anchor(&self) -> GridPoint {
        GridPoint::new(self.column + self.width as i32, self.row)
    }

    /// Connector end: the left border on the center row.
    pub fn in_anchor(&self) -> GridPoint {
        GridPoint::new(self.column, self.row)
    }
}

/// Inclusive bounding box of all painted boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub min_column: i32,
    pub max_column: i32,
    pub min_row: i32,
    pub max_row: i32,
}

impl GridBounds {
    pub fn width(&self) -> usize {
        (self.max_column - self.min_column + 1).max(0) as usize
    }

    pub fn height(&self) -> usize {
        (self.max_row - self.min_row + 1).max(0) as usize
    }

    fn include(&mut self, placement: &NodePlacement) {
        self.min_column = self.min_column.min(placement.column);
        self.max_column = self.max_column.max(placement.right());
        self.min_row = self.min_row.min(placement.top());
        self.max_row = self.max_row.max(placement.bottom());
    }
}

/// One full layout pass over a tree. Rebuilt from scratch for every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLayout {
    root: NodeId,
    origin: GridPoint,
    metrics: BTreeMap<NodeId, NodeMetrics>,
    placements: BTreeMap<NodeId, NodePlacement>,
    column_widths: Vec<usize>,
}

impl TreeLayout {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn origin(&self) -> GridPoint {
        self.origin
    }

    pub fn node_count(&self) -> usize {
        self.metrics.len()
    }

    pub fn metrics(&self, node_id: NodeId) -> Result<&NodeMetrics, TreeLayoutError> {
        self.metrics
            .get(&node_id)
            .ok_or(TreeLayoutError::UnknownNode { node_id })
    }

    pub fn placement(&self, node_id: NodeId) -> Result<&NodePlacement, TreeLayoutError> {
        self.placements
            .get(&node_id)
            .ok_or(TreeLayoutError::UnknownNode { node_id })
    }

    pub fn subtree_height(&self, node_id: NodeId) -> Result<usize, TreeLayoutError> {
        self.metrics(node_id).map(NodeMetrics::subtree_height)
    }

    /// Shared box width per depth; index 0 is the root's column.
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    pub fn column_width(&self, depth: usize) -> Option<usize> {
        self.column_widths.get(depth).copied()
    }

    pub fn bounds(&self) -> GridBounds {
        let mut bounds = GridBounds {
            min_column: self.origin.column,
            max_column: self.origin.column,
            min_row: self.origin.row,
            max_row: self.origin.row,
        };
        for placement in self.placements.values() {
            bounds.include(placement);
        }
        bounds
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeLayoutError {
    UnknownNode { node_id: NodeId },
    /// The `children` vectors reach `node_id` twice, so there is no tree to lay out.
    NotATree { node_id: NodeId },
}

impl fmt::Display for TreeLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode { node_id } => {
                write!(f, "node {node_id} is not part of the current layout pass")
            }
            Self::NotATree { node_id } => {
                write!(f, "node {node_id} is reachable twice from the root")
            }
        }
    }
}

impl std::error::Error for TreeLayoutError {}

/// Returns `(width, height)` of a node's own box.
pub fn box_size(node: &Node) -> (usize, usize) {
    let (width, height) = node.inner_size();
    (width + BOX_PADDING_X, height + BOX_BORDER_Y)
}

fn pre_order_with_depth(tree: &Tree) -> Result<Vec<(NodeId, usize)>, TreeLayoutError> {
    let mut order = Vec::with_capacity(tree.len());
    let mut visited = BTreeSet::<NodeId>::new();
    let mut stack = vec![(tree.root(), 0usize)];
    while let Some((id, depth)) = stack.pop() {
        if !tree.contains(id) {
            continue;
        }
        if !visited.insert(id) {
            return Err(TreeLayoutError::NotATree { node_id: id });
        }
        order.push((id, depth));
        for &child in tree.children(id).iter().rev() {
            stack.push((child, depth + 1));
        }
    }
    Ok(order)
}

/// Lays out every node reachable from the root, placing the root's box with
/// its left border at `origin.column` and its center row at `origin.row`.
///
/// Sizing runs children-before-parent: a node's subtree height is the larger
/// of its own box height and the stacked subtree heights of its children
/// (plus one spacing row between neighbours). Each child is then centered in
/// its own band, bands stacked top-down from `row - subtree_height / 2`.
///
/// Fails with [`TreeLayoutError::NotATree`] when raw `children` surgery left a
/// cycle or a shared child behind.
pub fn layout_tree(tree: &Tree, origin: GridPoint) -> Result<TreeLayout, TreeLayoutError> {
    let order = pre_order_with_depth(tree)?;

    let mut metrics = BTreeMap::<NodeId, NodeMetrics>::new();
    let mut column_widths = Vec::<usize>::new();

    for &(id, depth) in order.iter().rev() {
        let Some(node) = tree.node(id) else {
            continue;
        };
        let (box_width, box_height) = box_size(node);

        let mut stacked = 0usize;
        let mut child_count = 0usize;
        for child in node.children() {
            if let Some(child_metrics) = metrics.get(child) {
                stacked += child_metrics.subtree_height;
                child_count += 1;
            }
        }
        if child_count > 1 {
            stacked += (child_count - 1) * SIBLING_SPACING;
        }

        if column_widths.len() <= depth {
            column_widths.resize(depth + 1, 0);
        }
        column_widths[depth] = column_widths[depth].max(box_width);

        metrics.insert(
            id,
            NodeMetrics {
                box_width,
                box_height,
                subtree_height: stacked.max(box_height),
                depth,
            },
        );
    }

    let mut placements = BTreeMap::<NodeId, NodePlacement>::new();
    let root = tree.root();
    if let Some(root_metrics) = metrics.get(&root) {
        placements.insert(
            root,
            NodePlacement {
                column: origin.column,
                row: origin.row,
                width: column_widths[0],
                height: root_metrics.box_height,
            },
        );
    }

    for &(id, depth) in &order {
        let (Some(placement), Some(node_metrics)) =
            (placements.get(&id).copied(), metrics.get(&id).copied())
        else {
            continue;
        };

        let child_column = placement.column + placement.width as i32 + COLUMN_GAP;
        let child_width = column_widths.get(depth + 1).copied().unwrap_or(0);
        let mut band_top = placement.row - (node_metrics.subtree_height / 2) as i32;

        for child in tree.children(id) {
            let Some(child_metrics) = metrics.get(child) else {
                continue;
            };
            placements.insert(
                *child,
                NodePlacement {
                    column: child_column,
                    row: band_top + (child_metrics.subtree_height / 2) as i32,
                    width: child_width,
                    height: child_metrics.box_height,
                },
            );
            band_top += (child_metrics.subtree_height + SIBLING_SPACING) as i32;
        }
    }

    tracing::trace!(
        nodes = metrics.len(),
        depths = column_widths.len(),
        "tree layout computed"
    );

    Ok(TreeLayout {
        root,
        origin,
        metrics,
        placements,
        column_widths,
    })
}
