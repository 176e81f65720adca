// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive editor shell (ratatui + crossterm). The loop blocks on one input event,
//! applies it, then lays out and paints the whole tree again.

use std::{error::Error, io};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::layout::{layout_tree, GridPoint};
use crate::model::Tree;
use crate::ops::{apply_op, EditOp, OpOutcome};
use crate::render::{paint_tree, CellStyle, Surface, TreeRenderError};
use crate::ui::{NavDirection, Selection};

mod input;
mod theme;

use input::{InputField, InputStatus};
use theme::TuiTheme;

const FOOTER_BRAND: &str = "boughs";
const COMPACT_FOOTER_WIDTH: u16 = 90;
/// Columns between the diagram area's left edge and the root box.
const DIAGRAM_MARGIN_X: i32 = 1;
/// The label editor sits this many columns left of the screen's center.
const EDITOR_OFFSET_X: u16 = 20;

/// Runs the interactive terminal UI until the user quits.
pub fn run(tree: Tree) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(tree, theme);
    tracing::info!(nodes = app.tree.len(), "editor started");

    while !app.should_quit {
        terminal.draw(&mut app)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Resize(columns, rows) => {
                tracing::debug!(columns, rows, "terminal resized");
            }
            _ => {}
        }
    }

    tracing::info!(nodes = app.tree.len(), "editor stopped");
    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) -> Result<(), TreeRenderError> {
    let area = frame.area();
    app.screen_width = area.width;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let diagram_area = layout[0];
    let status_area = layout[1];

    frame.buffer_mut().set_style(area, app.theme.base_style());

    let origin = GridPoint::new(DIAGRAM_MARGIN_X, i32::from(diagram_area.height / 2));
    let tree_layout = layout_tree(&app.tree, origin)?;
    let bounds = tree_layout.bounds();
    tracing::trace!(
        width = bounds.width(),
        height = bounds.height(),
        area_width = diagram_area.width,
        area_height = diagram_area.height,
        "frame bounds"
    );
    {
        let mut surface = FrameSurface::new(frame.buffer_mut(), diagram_area, &app.theme);
        surface.clear();
        paint_tree(&mut surface, &app.tree, &tree_layout, app.selection.selected())?;
    }

    let compact = footer_uses_compact_mode(status_area);
    frame.render_widget(Paragraph::new(footer_help_line(app, compact)), status_area);
    if !compact {
        let brand = Paragraph::new(footer_brand_line(app)).alignment(Alignment::Right);
        frame.render_widget(brand, status_area);
    }

    if let Some(editor) = &app.editor {
        let cursor = editor.render(
            frame.buffer_mut(),
            area,
            app.theme.editor_style(),
            app.theme.editor_frame_style(),
        );
        frame.set_cursor_position(cursor);
    }

    if app.show_help {
        render_help(frame, app, diagram_area);
    }

    Ok(())
}

// Extracted footer/help rendering helpers.
include!("chrome.rs");

/// Adapts a ratatui buffer region to the painter's [`Surface`].
///
/// Surface coordinates are relative to `area`; anything outside it is dropped.
struct FrameSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    plain: Style,
    selected: Style,
}

impl<'a> FrameSurface<'a> {
    fn new(buf: &'a mut Buffer, area: Rect, theme: &TuiTheme) -> Self {
        Self {
            buf,
            area,
            plain: theme.cell_style(CellStyle::Plain),
            selected: theme.cell_style(CellStyle::Selected),
        }
    }

    fn position(&self, column: i32, row: i32) -> Option<(u16, u16)> {
        let column = u16::try_from(column).ok()?;
        let row = u16::try_from(row).ok()?;
        if column >= self.area.width || row >= self.area.height {
            return None;
        }
        Some((self.area.x + column, self.area.y + row))
    }
}

impl Surface for FrameSurface<'_> {
    fn size(&self) -> (usize, usize) {
        (usize::from(self.area.width), usize::from(self.area.height))
    }

    fn set_cell(&mut self, column: i32, row: i32, glyph: char, style: CellStyle) {
        let Some(position) = self.position(column, row) else {
            return;
        };
        let style = match style {
            CellStyle::Plain => self.plain,
            CellStyle::Selected => self.selected,
        };
        if let Some(cell) = self.buf.cell_mut(position) {
            cell.set_char(glyph).set_style(style);
        }
    }

    fn get_cell(&self, column: i32, row: i32) -> Option<char> {
        let position = self.position(column, row)?;
        self.buf.cell(position)?.symbol().chars().next()
    }

    fn clear(&mut self) {
        for y in self.area.top()..self.area.bottom() {
            for x in self.area.left()..self.area.right() {
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_style(self.plain);
                }
            }
        }
    }
}

struct App {
    tree: Tree,
    selection: Selection,
    editor: Option<InputField>,
    theme: TuiTheme,
    show_help: bool,
    should_quit: bool,
    screen_width: u16,
}

impl App {
    fn new(tree: Tree, theme: TuiTheme) -> Self {
        let selection = Selection::for_tree(&tree);
        Self {
            tree,
            selection,
            editor: None,
            theme,
            show_help: false,
            should_quit: false,
            screen_width: 0,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_event(key) {
            self.should_quit = true;
        }
    }

    /// Returns `true` when the key asks to quit.
    fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        if self.editor.is_some() {
            self.handle_editor_key(key);
            return false;
        }

        if self.show_help {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Left => self.navigate(NavDirection::Parent),
            KeyCode::Right => self.navigate(NavDirection::Child),
            KeyCode::Up => self.navigate(NavDirection::PreviousSibling),
            KeyCode::Down => self.navigate(NavDirection::NextSibling),
            KeyCode::Tab => self.add_and_edit(EditOp::AddChild),
            KeyCode::Enter => self.add_and_edit(EditOp::AppendSibling),
            KeyCode::Char('O') => self.add_and_edit(EditOp::InsertSiblingBefore),
            KeyCode::Char('o') => self.add_and_edit(EditOp::InsertSiblingAfter),
            KeyCode::Delete => {
                self.apply(EditOp::RemoveSelected);
            }
            KeyCode::Char('a') => self.open_editor(false),
            KeyCode::Char('c') => self.open_editor(true),
            _ => {}
        }
        false
    }

    fn navigate(&mut self, direction: NavDirection) {
        self.selection.navigate(&self.tree, direction);
    }

    fn apply(&mut self, op: EditOp) -> OpOutcome {
        apply_op(&mut self.tree, &mut self.selection, &op)
    }

    fn add_and_edit(&mut self, op: EditOp) {
        if let OpOutcome::Added(_) = self.apply(op) {
            self.open_editor(true);
        }
    }

    fn editor_anchor(&self) -> (u16, u16) {
        ((self.screen_width / 2).saturating_sub(EDITOR_OFFSET_X), 0)
    }

    fn open_editor(&mut self, clear: bool) {
        let Some(selected) = self.selection.selected() else {
            return;
        };
        let initial = self.tree.text(selected).unwrap_or_default().to_owned();
        let editor = InputField::new(initial, self.editor_anchor(), clear);
        let text = editor.text().to_owned();
        self.editor = Some(editor);
        self.apply(EditOp::SetText(text));
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        editor.handle_key(key);
        let text = editor.text().to_owned();
        let status = editor.status();

        self.apply(EditOp::SetText(text));

        if status != InputStatus::Editing {
            tracing::debug!(?status, "label editor closed");
            self.editor = None;
        }
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    /// Draws one frame. A frame that fails to paint ends the loop with that error.
    fn draw(&mut self, app: &mut App) -> Result<(), Box<dyn Error>> {
        let mut frame_result = Ok(());
        self.terminal
            .draw(|frame| frame_result = draw(frame, app))?;
        frame_result?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
