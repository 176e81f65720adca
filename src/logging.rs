// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! File logging.
//!
//! The terminal belongs to the editor, so log output only ever goes to a file. Without an explicit
//! log file no subscriber is installed and every `tracing` call is a no-op.

use std::env;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt as tracing_fmt, EnvFilter};

/// `EnvFilter` directives, e.g. `BOUGHS_LOG=boughs::ops=debug`.
pub const LOG_ENV_VAR: &str = "BOUGHS_LOG";
const DEFAULT_DIRECTIVES: &str = "info";

#[derive(Debug)]
pub enum LoggingError {
    Open { path: PathBuf, source: io::Error },
    Filter { directives: String, reason: String },
    AlreadyInstalled { reason: String },
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Self::Filter { directives, reason } => {
                write!(f, "invalid {LOG_ENV_VAR} directives '{directives}': {reason}")
            }
            Self::AlreadyInstalled { reason } => write!(f, "logging already initialized: {reason}"),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Filter { .. } | Self::AlreadyInstalled { .. } => None,
        }
    }
}

/// Installs the global subscriber, truncating `path` and filtering with [`LOG_ENV_VAR`].
pub fn init_file_logging(path: &Path) -> Result<(), LoggingError> {
    let directives = env::var(LOG_ENV_VAR).ok();
    let file = File::create(path).map_err(|source| LoggingError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let subscriber = build_subscriber(file, directives.as_deref())?;
    tracing::subscriber::set_global_default(subscriber).map_err(|err| {
        LoggingError::AlreadyInstalled {
            reason: err.to_string(),
        }
    })?;

    tracing::debug!(path = %path.display(), "file logging enabled");
    Ok(())
}

/// Builds the subscriber without installing it. Blank or missing directives mean `info`.
pub fn build_subscriber(
    log_file: File,
    directives: Option<&str>,
) -> Result<impl tracing::Subscriber + Send + Sync, LoggingError> {
    let env_filter = env_filter(directives)?;
    let fmt_layer = tracing_fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    Ok(tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter))
}

fn env_filter(directives: Option<&str>) -> Result<EnvFilter, LoggingError> {
    let directives = directives
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVES);
    EnvFilter::try_new(directives).map_err(|err| LoggingError::Filter {
        directives: directives.to_owned(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::path::PathBuf;

    use super::{build_subscriber, env_filter, LoggingError};

    fn log_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("boughs-{}-{name}.log", std::process::id()))
    }

    fn capture(name: &str, directives: Option<&str>, emit: impl FnOnce()) -> String {
        let path = log_path(name);
        let file = File::create(&path).expect("create log");
        let subscriber = build_subscriber(file, directives).expect("subscriber");
        tracing::subscriber::with_default(subscriber, emit);
        let contents = fs::read_to_string(&path).expect("read log");
        let _ = fs::remove_file(&path);
        contents
    }

    #[test]
    fn default_filter_keeps_info_and_drops_debug() {
        let contents = capture("default", None, || {
            tracing::info!(nodes = 3, "editor started");
            tracing::debug!("selection moved");
        });
        assert!(contents.contains("editor started"), "{contents}");
        assert!(contents.contains("nodes=3"), "{contents}");
        assert!(!contents.contains("selection moved"), "{contents}");
    }

    #[test]
    fn directives_raise_the_level() {
        let contents = capture("debug", Some("debug"), || {
            tracing::debug!("selection moved");
            tracing::trace!("tree layout computed");
        });
        assert!(contents.contains("selection moved"), "{contents}");
        assert!(!contents.contains("tree layout computed"), "{contents}");
    }

    #[test]
    fn invalid_directives_are_reported() {
        let err = env_filter(Some("boughs=loud")).unwrap_err();
        assert!(matches!(err, LoggingError::Filter { .. }));
        assert!(err.to_string().starts_with("invalid BOUGHS_LOG directives 'boughs=loud'"));
        assert!(env_filter(Some("   ")).is_ok());
    }
}
