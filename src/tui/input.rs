// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Label editor shown at the top of the screen while a node's text is being edited.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::render::UNICODE_BOX_HORIZONTAL;

pub(crate) const MIN_INPUT_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputStatus {
    Editing,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InputField {
    initial: String,
    buffer: String,
    anchor: (u16, u16),
    status: InputStatus,
}

impl InputField {
    /// Opens an editor over `initial`. With `clear` the buffer starts empty, but cancelling still
    /// restores `initial`.
    pub(crate) fn new(initial: impl Into<String>, anchor: (u16, u16), clear: bool) -> Self {
        let initial = initial.into();
        let buffer = if clear {
            String::new()
        } else {
            initial.clone()
        };
        Self {
            initial,
            buffer,
            anchor,
            status: InputStatus::Editing,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.buffer
    }

    pub(crate) fn status(&self) -> InputStatus {
        self.status
    }

    pub(crate) fn is_done(&self) -> bool {
        self.status != InputStatus::Editing
    }

    /// Feeds one key press. Returns whether the buffer changed.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.is_done() {
            return false;
        }

        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                self.buffer.push('\n');
                true
            }
            KeyCode::Enter => {
                self.status = InputStatus::Confirmed;
                false
            }
            KeyCode::Esc => {
                self.status = InputStatus::Cancelled;
                let changed = self.buffer != self.initial;
                self.buffer.clone_from(&self.initial);
                changed
            }
            KeyCode::Backspace => self.buffer.pop().is_some(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer.push(ch);
                true
            }
            _ => false,
        }
    }

    fn lines(&self) -> impl Iterator<Item = &str> {
        self.buffer.split('\n')
    }

    /// Inner width: grows with the longest line, never below [`MIN_INPUT_WIDTH`].
    pub(crate) fn width(&self) -> usize {
        self.lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_INPUT_WIDTH)
    }

    /// Paints the strip clipped to `area` and returns the cursor cell, just past the last character.
    pub(crate) fn render(
        &self,
        buf: &mut Buffer,
        area: Rect,
        text_style: Style,
        frame_style: Style,
    ) -> (u16, u16) {
        let (x0, y0) = self.anchor;
        let width = self.width();
        let line_count = self.lines().count();

        let mut put = |dx: usize, dy: usize, ch: char, style: Style| {
            let (Ok(dx), Ok(dy)) = (u16::try_from(dx), u16::try_from(dy)) else {
                return;
            };
            let x = x0.saturating_add(dx);
            let y = y0.saturating_add(dy);
            if x < area.left() || x >= area.right() || y < area.top() || y >= area.bottom() {
                return;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(ch).set_style(style);
            }
        };

        for dx in 0..width {
            put(dx, 0, UNICODE_BOX_HORIZONTAL, frame_style);
            put(dx, line_count + 1, UNICODE_BOX_HORIZONTAL, frame_style);
        }
        for (dy, line) in self.lines().enumerate() {
            let mut chars = line.chars();
            for dx in 0..width {
                put(dx, dy + 1, chars.next().unwrap_or(' '), text_style);
            }
        }

        let last_len = self
            .lines()
            .last()
            .map_or(0, |line| line.chars().count());
        let cursor_x = x0.saturating_add(u16::try_from(last_len).unwrap_or(u16::MAX));
        let cursor_y = y0.saturating_add(u16::try_from(line_count).unwrap_or(u16::MAX));
        (
            cursor_x.min(area.right().saturating_sub(1)),
            cursor_y.min(area.bottom().saturating_sub(1)),
        )
    }
}
