//! Domain value object: ArtifactKind.
//!
//! # Design
//!
//! A pure value type — `Copy`, equality-by-value, no identity. It holds the
//! per-kind facts the rest of the domain keys off: which target directory
//! convention applies, whether the name must be identifier-shaped, and how
//! many files a render produces. This file's only job is to define the type,
//! its string representations, and its `FromStr` parser.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of artifact to scaffold.
///
/// Determines the target subdirectory convention and which file roles are
/// generated. See `planner` for the path mapping and `templates` for the
/// file roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Project,
    Component,
    Hook,
}

impl ArtifactKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Component => "component",
            Self::Hook => "hook",
        }
    }

    /// Whether the artifact name is embedded into generated symbol text.
    ///
    /// `Component` builds `<Name>` / `<Name>Props`; `Hook` builds `use<Name>`.
    /// A `Project` name only becomes a directory, so identifier rules do not
    /// apply to it.
    pub const fn requires_identifier(self) -> bool {
        matches!(self, Self::Component | Self::Hook)
    }

    /// Number of files one render of this kind produces.
    ///
    /// Hooks generate no test file — preserved behavior from the original
    /// tool, see DESIGN.md.
    pub const fn file_count(self) -> usize {
        match self {
            Self::Project => 3,
            Self::Component => 2,
            Self::Hook => 1,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "project" | "crp" => Ok(Self::Project),
            "component" | "crc" => Ok(Self::Component),
            "hook" | "crh" => Ok(Self::Hook),
            other => Err(DomainError::UnknownKind(other.to_string())),
        }
    }
}
