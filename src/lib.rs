// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boughs: a terminal tree and mind-map editor.
//!
//! The tree lives in [`model`], is sized and placed by [`layout`], painted with box-drawn
//! connectors by [`render`], and edited through [`ops`] and the [`ui`] selection. [`tui`] wires
//! everything to a crossterm terminal.

pub mod layout;
pub mod logging;
pub mod model;
pub mod ops;
pub mod render;
pub mod tui;
pub mod ui;
