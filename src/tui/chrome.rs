// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Footer and help overlay helpers used by TUI rendering.
fn footer_uses_compact_mode(area: Rect) -> bool {
    area.width < COMPACT_FOOTER_WIDTH
}

fn footer_help_line(app: &App, compact: bool) -> Line<'static> {
    let theme = &app.theme;
    let mut spans = Vec::<Span<'static>>::new();

    if app.editor.is_some() {
        push_footer_entry(&mut spans, theme, "Confirm", "Enter");
        push_footer_entry(&mut spans, theme, "Newline", "Alt+Enter");
        push_footer_entry(&mut spans, theme, "Cancel", "Esc");
        return Line::from(spans);
    }

    if compact {
        push_footer_entry(&mut spans, theme, "Move", "←→↑↓");
        push_footer_entry(&mut spans, theme, "Help", "?");
        push_footer_entry(&mut spans, theme, "Quit", "q");
        return Line::from(spans);
    }

    push_footer_entry(&mut spans, theme, "Move", "←→↑↓");
    push_footer_entry(&mut spans, theme, "Child", "Tab");
    push_footer_entry(&mut spans, theme, "Sibling", "Enter/O/o");
    push_footer_entry(&mut spans, theme, "Delete", "Del");
    push_footer_entry(&mut spans, theme, "Edit", "a/c");
    push_footer_entry(&mut spans, theme, "Help", "?");
    push_footer_entry(&mut spans, theme, "Quit", "q");
    Line::from(spans)
}

fn footer_brand_line(app: &App) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} nodes ", app.tree.len()), app.theme.dim_style()),
        Span::styled(FOOTER_BRAND.to_owned(), app.theme.help_header_style()),
    ])
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, theme: &TuiTheme, label: &str, value: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", theme.footer_label_style()));
    }
    spans.push(Span::styled(format!("{label}:"), theme.footer_label_style()));
    spans.push(Span::styled(value.to_owned(), theme.footer_key_style()));
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>key_width$}"), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigate",
        &[
            ("←", "Parent"),
            ("→", "Middle child"),
            ("↑/↓", "Previous/next sibling"),
        ],
    ),
    (
        "Edit",
        &[
            ("Tab", "Add child"),
            ("Enter", "Add sibling at the end"),
            ("O/o", "Insert sibling before/after"),
            ("Del", "Delete node and subtree"),
            ("a", "Edit label"),
            ("c", "Change label (start empty)"),
        ],
    ),
    (
        "Label editor",
        &[
            ("Enter", "Confirm"),
            ("Alt+Enter", "New line"),
            ("Esc", "Cancel and restore"),
        ],
    ),
    ("Global", &[("?", "Help (toggle)"), ("q/Ctrl-C", "Quit")]),
];

fn help_lines(theme: &TuiTheme) -> Vec<Line<'static>> {
    let key_width = HELP_SECTIONS
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::<Line<'static>>::new();
    for (index, (title, entries)) in HELP_SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            format!("--- {title} ---"),
            theme.help_header_style(),
        )));
        for (key, desc) in entries.iter() {
            lines.push(help_kv(key, desc, key_width, theme.footer_key_style()));
        }
    }
    lines
}

fn render_help(frame: &mut Frame<'_>, app: &App, main_area: Rect) {
    let lines = help_lines(&app.theme);
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(content_width + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(width, height, main_area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(app.theme.editor_frame_style());
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
