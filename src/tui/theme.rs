// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fixed terminal styles. The only highlight the diagram knows is the selection.

use ratatui::style::{Color, Modifier, Style};

use crate::render::CellStyle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TuiTheme;

impl TuiTheme {
    /// The terminal's own colors.
    pub(crate) fn base_style(&self) -> Style {
        Style::default()
    }

    /// Style of a diagram cell painted with `style`.
    pub(crate) fn cell_style(&self, style: CellStyle) -> Style {
        match style {
            CellStyle::Plain => self.base_style(),
            CellStyle::Selected => self.selection_style(),
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn editor_style(&self) -> Style {
        self.base_style().fg(Color::White)
    }

    pub(crate) fn editor_frame_style(&self) -> Style {
        self.base_style().fg(Color::Cyan)
    }

    pub(crate) fn footer_label_style(&self) -> Style {
        self.base_style().fg(Color::Gray)
    }

    pub(crate) fn footer_key_style(&self) -> Style {
        self.base_style().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn help_header_style(&self) -> Style {
        self.base_style().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn dim_style(&self) -> Style {
        self.base_style().fg(Color::DarkGray)
    }
}
