//! Polymorphic query result values
//!
//! Evaluating a query expression produces a set of results, and not every
//! result is a build target: operators in the `inputs()`/`outputs()` family
//! yield files. [`QueryValue`] is the closed union of everything a query can
//! return, with one wrapper type per variant. Callers that only make sense
//! for one variant recover it through the `TryFrom`/`as_*` conversions here
//! or through the set-level operations in [`crate::set`].

use crate::error::{QueryError, QueryValueResult};
use crate::label::TargetLabel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// One item in a query result set
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryValue {
    /// A resolved build target
    BuildTarget(QueryBuildTarget),

    /// A file consumed or produced by the build graph
    File(QueryFileTarget),
}

impl QueryValue {
    /// Human-readable variant name, used in mismatch diagnostics
    pub fn variant_name(&self) -> &'static str {
        match self {
            QueryValue::BuildTarget(_) => "build target",
            QueryValue::File(_) => "file",
        }
    }

    /// Borrow this result as a build target.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::TypeMismatch`] if the result is any other
    /// variant.
    pub fn as_build_target(&self) -> QueryValueResult<&QueryBuildTarget> {
        match self {
            QueryValue::BuildTarget(target) => Ok(target),
            other => Err(QueryError::TypeMismatch {
                value: other.to_string(),
                expected: "build target",
                actual: other.variant_name(),
            }),
        }
    }

    /// Borrow this result as a file.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::TypeMismatch`] if the result is any other
    /// variant.
    pub fn as_file_target(&self) -> QueryValueResult<&QueryFileTarget> {
        match self {
            QueryValue::File(file) => Ok(file),
            other => Err(QueryError::TypeMismatch {
                value: other.to_string(),
                expected: "file",
                actual: other.variant_name(),
            }),
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::BuildTarget(target) => write!(f, "{target}"),
            QueryValue::File(file) => write!(f, "{file}"),
        }
    }
}

impl From<QueryBuildTarget> for QueryValue {
    fn from(target: QueryBuildTarget) -> Self {
        QueryValue::BuildTarget(target)
    }
}

impl From<QueryFileTarget> for QueryValue {
    fn from(file: QueryFileTarget) -> Self {
        QueryValue::File(file)
    }
}

impl TryFrom<QueryValue> for QueryBuildTarget {
    type Error = QueryError;

    /// Recover the build target wrapped by a result, moving it out without
    /// a copy.
    fn try_from(value: QueryValue) -> QueryValueResult<Self> {
        match value {
            QueryValue::BuildTarget(target) => Ok(target),
            other => Err(QueryError::TypeMismatch {
                value: other.to_string(),
                expected: "build target",
                actual: other.variant_name(),
            }),
        }
    }
}

impl TryFrom<QueryValue> for QueryFileTarget {
    type Error = QueryError;

    fn try_from(value: QueryValue) -> QueryValueResult<Self> {
        match value {
            QueryValue::File(file) => Ok(file),
            other => Err(QueryError::TypeMismatch {
                value: other.to_string(),
                expected: "file",
                actual: other.variant_name(),
            }),
        }
    }
}

/// Query result wrapping a resolved build target label.
///
/// Immutable once constructed; equality and hashing delegate to the label.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryBuildTarget {
    label: TargetLabel,
}

impl QueryBuildTarget {
    /// Wrap a resolved target label.
    ///
    /// The label is taken as-is; resolving and validating labels is the
    /// query evaluator's responsibility.
    pub fn new(label: TargetLabel) -> Self {
        Self { label }
    }

    /// The wrapped target label
    pub fn label(&self) -> &TargetLabel {
        &self.label
    }

    /// Consume the result and return the wrapped label
    pub fn into_label(self) -> TargetLabel {
        self.label
    }
}

impl fmt::Display for QueryBuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Query result wrapping a file path known to the build graph
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFileTarget {
    path: PathBuf,
}

impl QueryFileTarget {
    /// Wrap a workspace-relative file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The wrapped file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for QueryFileTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn build_target(label: &str) -> QueryBuildTarget {
        QueryBuildTarget::new(TargetLabel::from_str(label).unwrap())
    }

    #[test]
    fn test_construction_round_trip() {
        let label = TargetLabel::from_str("//lib/zlib:zlib").unwrap();
        let target = QueryBuildTarget::new(label.clone());
        assert_eq!(target.label(), &label);
        assert_eq!(target.into_label(), label);
    }

    #[test]
    fn test_equality_follows_labels() {
        assert_eq!(build_target("//pkg:lib"), build_target("//pkg:lib"));
        assert_ne!(build_target("//pkg:lib"), build_target("//pkg:bin"));
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |t: &QueryBuildTarget| {
            let mut hasher = DefaultHasher::new();
            t.hash(&mut hasher);
            hasher.finish()
        };

        assert_eq!(
            hash(&build_target("//pkg:lib")),
            hash(&build_target("//pkg:lib"))
        );
    }

    #[test]
    fn test_display_matches_label() {
        let target = build_target("//pkg:lib");
        assert_eq!(target.to_string(), "//pkg:lib");
        assert_eq!(
            QueryValue::from(target).to_string(),
            "//pkg:lib"
        );
    }

    #[test]
    fn test_try_from_build_target() {
        let target = build_target("//pkg:lib");
        let value = QueryValue::from(target.clone());

        assert_eq!(QueryBuildTarget::try_from(value).unwrap(), target);
    }

    #[test]
    fn test_try_from_rejects_other_variants() {
        let value = QueryValue::from(QueryFileTarget::new("src/main.c"));

        let err = QueryBuildTarget::try_from(value).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("src/main.c"));
        assert!(message.contains("file"));
    }

    #[test]
    fn test_as_build_target() {
        let value = QueryValue::from(build_target("//pkg:lib"));
        assert_eq!(
            value.as_build_target().unwrap(),
            &build_target("//pkg:lib")
        );
        assert!(value.as_file_target().is_err());
    }

    #[test]
    fn test_variant_names() {
        let target = QueryValue::from(build_target("//pkg:lib"));
        let file = QueryValue::from(QueryFileTarget::new("a.txt"));
        assert_eq!(target.variant_name(), "build target");
        assert_eq!(file.variant_name(), "file");
    }
}
