// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Orthogonal parent-to-children wiring.
//!
//! A fan is a horizontal run from the parent's out anchor to a vertical spine halfway between the
//! parent and its children, the spine itself, and one horizontal run per child ending in `┤` on
//! the child's left border.

use std::fmt;

use crate::layout::GridPoint;

use super::{
    CellStyle, Surface, UNICODE_BOX_BOTTOM_LEFT, UNICODE_BOX_BOTTOM_RIGHT, UNICODE_BOX_CROSS,
    UNICODE_BOX_HORIZONTAL, UNICODE_BOX_TEE_DOWN, UNICODE_BOX_TEE_LEFT, UNICODE_BOX_TEE_RIGHT,
    UNICODE_BOX_TEE_UP, UNICODE_BOX_TOP_LEFT, UNICODE_BOX_TOP_RIGHT, UNICODE_BOX_VERTICAL,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorError {
    /// A child anchor lies left of the parent's out anchor.
    AnchorBehindParent { out: GridPoint, anchor: GridPoint },
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnchorBehindParent { out, anchor } => write!(
                f,
                "child anchor ({},{}) is left of parent anchor ({},{})",
                anchor.column(),
                anchor.row(),
                out.column(),
                out.row()
            ),
        }
    }
}

impl std::error::Error for ConnectorError {}

#[derive(Debug, Clone, Copy)]
struct FanBounds {
    min_column: i32,
    min_row: i32,
    max_row: i32,
}

impl FanBounds {
    /// Row bounds include the out anchor so the spine always reaches it.
    fn of(out: GridPoint, ins: &[GridPoint]) -> Self {
        let mut bounds = Self {
            min_column: i32::MAX,
            min_row: out.row(),
            max_row: out.row(),
        };
        for p in ins {
            bounds.min_column = bounds.min_column.min(p.column());
            bounds.min_row = bounds.min_row.min(p.row());
            bounds.max_row = bounds.max_row.max(p.row());
        }
        bounds
    }
}

/// Cells that visually continue a line coming in from the left.
fn has_left_arm(ch: char) -> bool {
    matches!(
        ch,
        UNICODE_BOX_HORIZONTAL
            | UNICODE_BOX_TEE_LEFT
            | UNICODE_BOX_TOP_RIGHT
            | UNICODE_BOX_BOTTOM_RIGHT
            | UNICODE_BOX_TEE_DOWN
            | UNICODE_BOX_TEE_UP
            | UNICODE_BOX_CROSS
    )
}

fn spine_junction(up: bool, down: bool, right: bool) -> char {
    match (up, down, right) {
        (true, true, true) => UNICODE_BOX_CROSS,
        (true, true, false) => UNICODE_BOX_TEE_LEFT,
        (true, false, true) => UNICODE_BOX_TEE_UP,
        (true, false, false) => UNICODE_BOX_BOTTOM_RIGHT,
        (false, true, true) => UNICODE_BOX_TEE_DOWN,
        (false, true, false) => UNICODE_BOX_TOP_RIGHT,
        (false, false, _) => UNICODE_BOX_HORIZONTAL,
    }
}

/// Wires `out` (a parent's right-edge anchor) to every anchor in `ins` (its
/// children's left-edge anchors, in display order).
///
/// Every child anchor must be at or right of `out`; otherwise nothing is drawn
/// and [`ConnectorError::AnchorBehindParent`] is returned. An empty `ins` draws
/// nothing.
pub fn route_connectors<S: Surface + ?Sized>(
    surface: &mut S,
    out: GridPoint,
    ins: &[GridPoint],
) -> Result<(), ConnectorError> {
    if ins.is_empty() {
        return Ok(());
    }
    if let Some(anchor) = ins.iter().find(|p| p.column() < out.column()) {
        return Err(ConnectorError::AnchorBehindParent {
            out,
            anchor: *anchor,
        });
    }

    let style = CellStyle::Plain;
    let bounds = FanBounds::of(out, ins);
    let spine = (bounds.min_column + out.column()).div_euclid(2);

    for column in out.column()..spine {
        surface.set_cell(column, out.row(), UNICODE_BOX_HORIZONTAL, style);
    }

    for row in bounds.min_row..=bounds.max_row {
        surface.set_cell(spine, row, UNICODE_BOX_VERTICAL, style);
    }

    for p in ins {
        for column in (spine + 1)..p.column() {
            surface.set_cell(column, p.row(), UNICODE_BOX_HORIZONTAL, style);
        }
        surface.set_cell(p.column(), p.row(), UNICODE_BOX_TEE_LEFT, style);

        let junction = if p.row() == bounds.min_row {
            UNICODE_BOX_TOP_LEFT
        } else if p.row() == bounds.max_row {
            UNICODE_BOX_BOTTOM_LEFT
        } else {
            UNICODE_BOX_TEE_RIGHT
        };
        surface.set_cell(spine, p.row(), junction, style);
    }

    let right = surface
        .get_cell(spine + 1, out.row())
        .is_some_and(has_left_arm);
    let junction = spine_junction(
        bounds.min_row < out.row(),
        bounds.max_row > out.row(),
        right,
    );
    surface.set_cell(spine, out.row(), junction, style);

    Ok(())
}
