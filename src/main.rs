// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boughs CLI entrypoint.
//!
//! By default this takes over the terminal and runs the interactive editor.
//!
//! Use `--print` to render the starting tree to stdout instead.

use std::error::Error;
use std::path::PathBuf;

use boughs::model::fixtures::{default_tree, demo_tree, DEFAULT_ROOT_TEXT};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--root <text>] [--log-file <path>]\n  {program} --demo [--log-file <path>]\n  {program} [--demo | --root <text>] --print\n\n--root sets the label of the starting root node (default \"{DEFAULT_ROOT_TEXT}\").\n--demo starts from a built-in demo tree and cannot be combined with --root.\n--print renders the starting tree to stdout and exits without opening the editor.\n\n--log-file writes tracing output to <path>; filter it with BOUGHS_LOG (default \"info\")."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    root_text: Option<String>,
    print: bool,
    log_file: Option<PathBuf>,
}

enum CliRequest {
    Run(CliOptions),
    Help,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliRequest, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliRequest::Help),
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--root" => {
                if options.root_text.is_some() {
                    return Err(());
                }
                let text = args.next().ok_or(())?;
                options.root_text = Some(text.replace("\\n", "\n"));
            }
            "--print" => {
                if options.print {
                    return Err(());
                }
                options.print = true;
            }
            "--log-file" => {
                if options.log_file.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.log_file = Some(PathBuf::from(path));
            }
            _ => return Err(()),
        }
    }

    if options.demo && options.root_text.is_some() {
        return Err(());
    }

    Ok(CliRequest::Run(options))
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "boughs".to_owned());

        let options = match parse_options(args) {
            Ok(CliRequest::Run(options)) => options,
            Ok(CliRequest::Help) => {
                print_usage(&program);
                return Ok(());
            }
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if let Some(path) = &options.log_file {
            boughs::logging::init_file_logging(path)?;
        }

        let tree = if options.demo {
            demo_tree()
        } else {
            default_tree(options.root_text.as_deref().unwrap_or(DEFAULT_ROOT_TEXT))
        };

        if options.print {
            println!("{}", boughs::render::render_tree_unicode(&tree, None)?);
            return Ok(());
        }

        boughs::tui::run(tree)
    })();

    if let Err(err) = result {
        eprintln!("boughs: {err}");
        std::process::exit(1);
    }
}
