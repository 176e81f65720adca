// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{paint_tree, render_tree_canvas, render_tree_unicode, TreeRenderError};
use crate::layout::{layout_tree, GridPoint, TreeLayoutError};
use crate::model::fixtures::{default_tree, demo_tree, three_children};
use crate::model::Tree;
use crate::render::test_utils::{column_glyphs, glyph};
use crate::render::{Canvas, CellStyle};

fn lines(rows: &[&str]) -> String {
    rows.join("\n")
}

#[test]
fn default_tree_snapshot() {
    let tree = default_tree("Topic");
    let out = render_tree_unicode(&tree, None).expect("render");
    assert_eq!(
        out,
        lines(&[
            "                  ┌───────┐",
            "┌───────┐         │ hallo │",
            "│ Topic │─────────┤ welt  │",
            "└───────┘         └───────┘",
        ])
    );
}

#[test]
fn three_children_fan_crosses_on_the_parent_row() {
    let (tree, _) = three_children(["a", "b", "c"]);
    let out = render_tree_unicode(&tree, None).expect("render");
    assert_eq!(
        out,
        lines(&[
            "              ┌───┐",
            "         ┌────┤ a │",
            "         │    └───┘",
            "         │",
            "┌───┐    │    ┌───┐",
            "│ R │────┼────┤ b │",
            "└───┘    │    └───┘",
            "         │",
            "         │    ┌───┐",
            "         └────┤ c │",
            "              └───┘",
        ])
    );
}

#[test]
fn tall_parent_between_two_children_gets_a_left_tee() {
    let mut tree = Tree::new("a\nb\nc\nd\ne");
    let root = tree.root();
    for label in ["x", "y"] {
        let id = tree.new_node_with_text(label);
        assert!(tree.append_child(root, id));
    }

    let out = render_tree_unicode(&tree, None).expect("render");
    assert_eq!(
        out,
        lines(&[
            "┌───┐         ┌───┐",
            "│ a │    ┌────┤ x │",
            "│ b │    │    └───┘",
            "│ c │────┤",
            "│ d │    │    ┌───┐",
            "│ e │    └────┤ y │",
            "└───┘         └───┘",
        ])
    );
}

#[test]
fn nested_fans_share_column_widths() {
    let mut tree = Tree::new("R");
    let root = tree.root();
    let a = tree.new_node_with_text("a");
    tree.append_child(root, a);
    for label in ["a1", "a2"] {
        let id = tree.new_node_with_text(label);
        tree.append_child(a, id);
    }
    let b = tree.new_node_with_text("b");
    tree.append_child(root, b);

    let out = render_tree_unicode(&tree, None).expect("render");
    assert_eq!(
        out,
        lines(&[
            "                            ┌────┐",
            "                       ┌────┤ a1 │",
            "              ┌───┐    │    └────┘",
            "         ┌────┤ a │────┤",
            "┌───┐    │    └───┘    │    ┌────┐",
            "│ R │────┤             └────┤ a2 │",
            "└───┘    │                  └────┘",
            "         │",
            "         │    ┌───┐",
            "         └────┤ b │",
            "              └───┘",
        ])
    );
}

#[test]
fn demo_tree_shows_every_label_line_once() {
    let tree = demo_tree();
    let out = render_tree_unicode(&tree, None).expect("render");

    for id in tree.descendants(tree.root()) {
        let text = tree.text(id).expect("text");
        for line in text.split('\n') {
            let needle = format!("│ {line} ");
            assert!(out.contains(&needle), "missing {line:?} in\n{out}");
        }
    }

    let layout = layout_tree(&tree, GridPoint::new(0, 0)).expect("layout");
    let root_height = layout.subtree_height(tree.root()).expect("root");
    assert_eq!(out.lines().count(), root_height);
}

#[test]
fn selected_node_border_uses_the_selected_style() {
    let tree = default_tree("Topic");
    let child = tree.children(tree.root())[0];
    let canvas = render_tree_canvas(&tree, Some(child)).expect("render");

    // Child box spans columns 18..=26, rows 0..=3.
    assert_eq!(canvas.style(18, 0).expect("style"), CellStyle::Selected);
    assert_eq!(canvas.style(26, 3).expect("style"), CellStyle::Selected);
    assert_eq!(canvas.style(20, 1).expect("style"), CellStyle::Plain);
    assert_eq!(canvas.style(0, 1).expect("style"), CellStyle::Plain);

    // The fan's left tee overwrites the child's border with a plain glyph.
    assert_eq!(glyph(&canvas, 18, 2), '┤');
    assert_eq!(canvas.style(18, 2).expect("style"), CellStyle::Plain);
}

#[test]
fn painting_with_a_stale_layout_fails_loudly() {
    let mut tree = default_tree("Topic");
    let layout = layout_tree(&tree, GridPoint::new(0, 2)).expect("layout");

    let root = tree.root();
    let late = tree.new_node_with_text("late");
    tree.append_child(root, late);

    let mut canvas = Canvas::new(40, 10).expect("canvas");
    let err = paint_tree(&mut canvas, &tree, &layout, None).unwrap_err();
    assert_eq!(
        err,
        TreeRenderError::Layout(TreeLayoutError::UnknownNode { node_id: late })
    );
}

#[test]
fn painting_a_tree_that_grew_a_cycle_fails_instead_of_recursing() {
    let mut tree = default_tree("Topic");
    let layout = layout_tree(&tree, GridPoint::new(0, 2)).expect("layout");

    let root = tree.root();
    let child = tree.children(root)[0];
    tree.children_mut(child).expect("child").push(root);

    let mut canvas = Canvas::new(40, 10).expect("canvas");
    let err = paint_tree(&mut canvas, &tree, &layout, None).unwrap_err();
    assert_eq!(
        err,
        TreeRenderError::Layout(TreeLayoutError::NotATree { node_id: root })
    );
    assert!(matches!(
        render_tree_unicode(&tree, None),
        Err(TreeRenderError::Layout(TreeLayoutError::NotATree { .. }))
    ));
}

#[test]
fn painting_past_the_surface_edge_clips() {
    let (tree, _) = three_children(["a", "b", "c"]);
    let layout = layout_tree(&tree, GridPoint::new(0, 1)).expect("layout");

    let mut canvas = Canvas::new(12, 3).expect("canvas");
    paint_tree(&mut canvas, &tree, &layout, None).expect("paint");
    assert_eq!(column_glyphs(&canvas, 9, 0, 2), "│┼│");
    assert_eq!(
        canvas.to_string(),
        lines(&["┌───┐    │  ", "│ R │────┼──", "└───┘    │  "])
    );
}
