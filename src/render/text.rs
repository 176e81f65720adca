// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Canvas;

/// Splits a label into display lines; an empty label still yields one line.
pub(crate) fn label_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

pub(crate) fn canvas_to_string_trimmed(canvas: &Canvas) -> String {
    let mut lines = Vec::<String>::with_capacity(canvas.height());
    for y in 0..canvas.height() {
        let mut line = String::with_capacity(canvas.width());
        for x in 0..canvas.width() {
            // (x, y) is in bounds by construction.
            let ch = canvas.get(x, y).unwrap_or(' ');
            line.push(ch);
        }

        lines.push(line.trim_end_matches(' ').to_owned());
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
