// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering of laid-out trees onto character grids.
//!
//! Everything draws through the [`Surface`] trait: the interactive TUI implements it over the
//! ratatui frame buffer, tests and `--print` use the in-memory [`Canvas`].

use std::fmt;

pub mod connector;
#[cfg(test)]
mod test_utils;
pub(crate) mod text;
pub mod tree;

pub use connector::{route_connectors, ConnectorError};
pub use tree::{paint_tree, render_tree_unicode, TreeRenderError};

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';
pub const UNICODE_BOX_TEE_RIGHT: char = '├';
pub const UNICODE_BOX_TEE_LEFT: char = '┤';
pub const UNICODE_BOX_TEE_DOWN: char = '┬';
pub const UNICODE_BOX_TEE_UP: char = '┴';
pub const UNICODE_BOX_CROSS: char = '┼';

/// The only styling the core knows about; surfaces map it to real colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStyle {
    #[default]
    Plain,
    Selected,
}

/// A character grid the painter and connector router draw onto.
///
/// Coordinates are signed so that layouts larger than the visible area can be
/// painted as-is: writes outside the surface are dropped and reads outside it
/// return `None`.
pub trait Surface {
    /// Returns `(columns, rows)`.
    fn size(&self) -> (usize, usize);

    fn set_cell(&mut self, column: i32, row: i32, glyph: char, style: CellStyle);

    fn get_cell(&self, column: i32, row: i32) -> Option<char>;

    /// Resets every cell to a blank.
    fn clear(&mut self);

    /// Draws `─` over `x0..=x1` on `row`.
    fn draw_hline(&mut self, x0: i32, x1: i32, row: i32, style: CellStyle) {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in min_x..=max_x {
            self.set_cell(x, row, UNICODE_BOX_HORIZONTAL, style);
        }
    }

    /// Draws `│` over `y0..=y1` in `column`.
    fn draw_vline(&mut self, column: i32, y0: i32, y1: i32, style: CellStyle) {
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in min_y..=max_y {
            self.set_cell(column, y, UNICODE_BOX_VERTICAL, style);
        }
    }

    /// Draws a single-line frame whose top-left corner is `(column, top)`.
    fn draw_box(&mut self, column: i32, top: i32, width: usize, height: usize, style: CellStyle) {
        if width < 2 || height < 2 {
            return;
        }
        let right = column + width as i32 - 1;
        let bottom = top + height as i32 - 1;

        for x in (column + 1)..right {
            self.set_cell(x, top, UNICODE_BOX_HORIZONTAL, style);
            self.set_cell(x, bottom, UNICODE_BOX_HORIZONTAL, style);
        }
        for y in (top + 1)..bottom {
            self.set_cell(column, y, UNICODE_BOX_VERTICAL, style);
            self.set_cell(right, y, UNICODE_BOX_VERTICAL, style);
        }

        self.set_cell(column, top, UNICODE_BOX_TOP_LEFT, style);
        self.set_cell(right, top, UNICODE_BOX_TOP_RIGHT, style);
        self.set_cell(column, bottom, UNICODE_BOX_BOTTOM_LEFT, style);
        self.set_cell(right, bottom, UNICODE_BOX_BOTTOM_RIGHT, style);
    }

    /// Writes `text` left-to-right from `(column, row)`, stopping after `max_len` chars.
    fn write_str(&mut self, column: i32, row: i32, text: &str, max_len: usize, style: CellStyle) {
        for (offset, ch) in text.chars().take(max_len).enumerate() {
            self.set_cell(column + offset as i32, row, ch, style);
        }
    }
}

/// A fixed-size, bounds-checked character grid.
///
/// Writes overwrite (last writer wins); junction glyphs are chosen by the
/// caller, not merged by the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    styles: Vec<CellStyle>,
}

impl Canvas {
    /// Creates a new canvas filled with spaces (`' '`).
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::new_filled(width, height, ' ')
    }

    /// Creates a new canvas filled with `fill`.
    pub fn new_filled(width: usize, height: usize, fill: char) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
            styles: vec![CellStyle::Plain; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the character at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn style(&self, x: usize, y: usize) -> Result<CellStyle, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.styles[idx])
    }

    /// Sets the character at `(x, y)` with the plain style.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        self.set_styled(x, y, ch, CellStyle::Plain)
    }

    pub fn set_styled(
        &mut self,
        x: usize,
        y: usize,
        ch: char,
        style: CellStyle,
    ) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = ch;
        self.styles[idx] = style;
        Ok(())
    }

    /// Fills the entire canvas with `ch`.
    pub fn fill(&mut self, ch: char) {
        self.cells.fill(ch);
        self.styles.fill(CellStyle::Plain);
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y * self.width) + x)
    }

    fn signed_index(&self, column: i32, row: i32) -> Option<usize> {
        let x = usize::try_from(column).ok()?;
        let y = usize::try_from(row).ok()?;
        self.index_of(x, y).ok()
    }
}

impl Surface for Canvas {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, column: i32, row: i32, glyph: char, style: CellStyle) {
        if let Some(idx) = self.signed_index(column, row) {
            self.cells[idx] = glyph;
            self.styles[idx] = style;
        }
    }

    fn get_cell(&self, column: i32, row: i32) -> Option<char> {
        self.signed_index(column, row).map(|idx| self.cells[idx])
    }

    fn clear(&mut self) {
        self.fill(' ');
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for x in 0..self.width {
                f.write_char(self.cells[(y * self.width) + x])?;
            }

            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow {
        width: usize,
        height: usize,
    },
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
