// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boughs-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boughs and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// Arena key identifying one node of a [`crate::model::Tree`].
///
/// Ids are handed out by the tree in increasing order and are never reused
/// within the same tree, so a stale id simply stops resolving after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n:{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = NodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(NodeIdError::Empty);
        }
        let Some(digits) = s.strip_prefix("n:") else {
            return Err(NodeIdError::MissingPrefix);
        };
        let raw = digits
            .parse::<u32>()
            .map_err(|_| NodeIdError::InvalidNumber)?;
        Ok(Self(raw))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeIdError {
    Empty,
    MissingPrefix,
    InvalidNumber,
}

impl fmt::Display for NodeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("node id must not be empty"),
            Self::MissingPrefix => f.write_str("node id must start with 'n:'"),
            Self::InvalidNumber => f.write_str("node id must end in an unsigned number"),
        }
    }
}

impl std::error::Error for NodeIdError {}

#[cfg(test)]
mod tests {
    use super::{NodeId, NodeIdError};

    #[test]
    fn display_and_parse_agree() {
        let id = NodeId::from_raw(42);
        assert_eq!(id.to_string(), "n:42");
        assert_eq!("n:42".parse::<NodeId>(), Ok(id));
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        assert_eq!("".parse::<NodeId>(), Err(NodeIdError::Empty));
        assert_eq!("42".parse::<NodeId>(), Err(NodeIdError::MissingPrefix));
        assert_eq!("n:x".parse::<NodeId>(), Err(NodeIdError::InvalidNumber));
    }
}
