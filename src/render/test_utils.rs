// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Canvas, Surface};

pub(super) fn glyph(canvas: &Canvas, column: i32, row: i32) -> char {
    canvas
        .get_cell(column, row)
        .unwrap_or_else(|| panic!("({column}, {row}) outside {}x{}", canvas.width(), canvas.height()))
}

/// The glyphs of one column between `top` and `bottom` (inclusive), top-down.
pub(super) fn column_glyphs(canvas: &Canvas, column: i32, top: i32, bottom: i32) -> String {
    (top..=bottom).map(|row| glyph(canvas, column, row)).collect()
}

pub(super) fn row_glyphs(canvas: &Canvas, row: i32, left: i32, right: i32) -> String {
    (left..=right).map(|column| glyph(canvas, column, row)).collect()
}
