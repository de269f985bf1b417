//! Build target labels
//!
//! A [`TargetLabel`] names one buildable unit in the dependency graph,
//! rendered in the `//package/path:name` form. Labels are plain immutable
//! values; resolving a label against the loaded build graph is the query
//! evaluator's job, not this crate's.

use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fully qualified label of a build target (e.g., `//lib/zlib:zlib`)
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetLabel {
    /// Package path relative to the workspace root (no leading `//`)
    package: String,

    /// Target name within the package
    name: String,
}

impl TargetLabel {
    /// Create a label from its package path and target name
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Package path of this label (empty for the workspace root package)
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Target name of this label
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TargetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "//{}:{}", self.package, self.name)
    }
}

impl FromStr for TargetLabel {
    type Err = QueryError;

    /// Parse a label of the form `//package:name` or `//package`.
    ///
    /// When the name is omitted it defaults to the last package path
    /// segment, matching the shorthand build tools in this family accept
    /// (`//lib/zlib` means `//lib/zlib:zlib`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(rest) = s.strip_prefix("//") else {
            return Err(QueryError::InvalidLabel(s.to_string()));
        };

        let (package, name) = match rest.split_once(':') {
            Some((package, name)) => (package, name),
            None => match rest.rsplit_once('/') {
                Some((_, last)) => (rest, last),
                None => (rest, rest),
            },
        };

        if name.is_empty() || name.contains(':') || name.contains('/') {
            return Err(QueryError::InvalidLabel(s.to_string()));
        }

        // Empty path segments (leading, trailing, or doubled slashes)
        if !package.is_empty() && package.split('/').any(str::is_empty) {
            return Err(QueryError::InvalidLabel(s.to_string()));
        }

        Ok(TargetLabel::new(package, name))
    }
}
