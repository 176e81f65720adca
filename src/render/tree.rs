// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::layout::tree::BOX_PADDING_X;
use crate::layout::{layout_tree, GridPoint, TreeLayout, TreeLayoutError};
use crate::model::{NodeId, Tree};

use super::connector::{route_connectors, ConnectorError};
use super::text::{canvas_to_string_trimmed, label_lines};
use super::{Canvas, CanvasError, CellStyle, Surface};

/// Columns from a box's left border to the first label character.
const LABEL_INSET_X: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeRenderError {
    Layout(TreeLayoutError),
    Connector(ConnectorError),
    Canvas(CanvasError),
}

impl fmt::Display for TreeRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "layout error: {err}"),
            Self::Connector(err) => write!(f, "connector error: {err}"),
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
        }
    }
}

impl std::error::Error for TreeRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Connector(err) => Some(err),
            Self::Canvas(err) => Some(err),
        }
    }
}

impl From<TreeLayoutError> for TreeRenderError {
    fn from(value: TreeLayoutError) -> Self {
        Self::Layout(value)
    }
}

impl From<ConnectorError> for TreeRenderError {
    fn from(value: ConnectorError) -> Self {
        Self::Connector(value)
    }
}

impl From<CanvasError> for TreeRenderError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

/// Paints every node reachable from the root using a layout computed for the
/// tree's current shape.
///
/// Each node paints its box and label, then its children, then the connector
/// fan into them, so the fan's `┤` lands on top of the children's borders.
/// The selected node's border uses [`CellStyle::Selected`].
pub fn paint_tree<S: Surface + ?Sized>(
    surface: &mut S,
    tree: &Tree,
    layout: &TreeLayout,
    selected: Option<NodeId>,
) -> Result<(), TreeRenderError> {
    paint_node(surface, tree, layout, tree.root(), 0, selected)
}

fn paint_node<S: Surface + ?Sized>(
    surface: &mut S,
    tree: &Tree,
    layout: &TreeLayout,
    node_id: NodeId,
    depth: usize,
    selected: Option<NodeId>,
) -> Result<(), TreeRenderError> {
    // A node met at another depth than it was laid out at means the tree grew
    // a cycle or a shared child since the layout pass.
    if layout.metrics(node_id)?.depth() != depth {
        return Err(TreeLayoutError::NotATree { node_id }.into());
    }
    let placement = *layout.placement(node_id)?;
    let Some(node) = tree.node(node_id) else {
        return Err(TreeLayoutError::UnknownNode { node_id }.into());
    };

    let border_style = if selected == Some(node_id) {
        CellStyle::Selected
    } else {
        CellStyle::Plain
    };
    surface.draw_box(
        placement.column(),
        placement.top(),
        placement.width(),
        placement.height(),
        border_style,
    );

    let label_width = placement.width().saturating_sub(BOX_PADDING_X);
    for (offset, line) in label_lines(node.text()).enumerate() {
        surface.write_str(
            placement.column() + LABEL_INSET_X,
            placement.top() + 1 + offset as i32,
            line,
            label_width,
            CellStyle::Plain,
        );
    }

    let mut anchors = Vec::<GridPoint>::with_capacity(node.children().len());
    for &child in node.children() {
        paint_node(surface, tree, layout, child, depth + 1, selected)?;
        anchors.push(layout.placement(child)?.in_anchor());
    }

    route_connectors(surface, placement.out_anchor(), &anchors)?;
    Ok(())
}

/// Renders the whole tree to Unicode text, cropped to the painted area.
pub fn render_tree_unicode(tree: &Tree, selected: Option<NodeId>) -> Result<String, TreeRenderError> {
    let canvas = render_tree_canvas(tree, selected)?;
    Ok(canvas_to_string_trimmed(&canvas))
}

pub(crate) fn render_tree_canvas(
    tree: &Tree,
    selected: Option<NodeId>,
) -> Result<Canvas, TreeRenderError> {
    let probe = layout_tree(tree, GridPoint::new(0, 0))?;
    let bounds = probe.bounds();
    let layout = layout_tree(tree, GridPoint::new(-bounds.min_column, -bounds.min_row))?;

    let mut canvas = Canvas::new(bounds.width(), bounds.height())?;
    paint_tree(&mut canvas, tree, &layout, selected)?;
    Ok(canvas)
}

#[cfg(test)]
mod tests;
