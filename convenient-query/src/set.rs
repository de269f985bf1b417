//! Result sets and bulk variant conversion
//!
//! Query operators exchange [`ResultSet`]s: unique collections that keep
//! insertion order so query output stays deterministic. Two families of
//! conversion exist for recovering concrete variants from a mixed set:
//!
//! - `into_*_targets` asserts the whole set is one variant and fails on the
//!   first stray element, returning no partial result
//! - `filter_*_targets` keeps the matching subset and silently drops the
//!   rest
//!
//! Callers that mix variants on purpose filter; callers that expect a
//! uniform set assert and get a diagnostic naming the offender.

use crate::error::{QueryError, QueryValueResult};
use crate::value::{QueryBuildTarget, QueryFileTarget, QueryValue};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// Unique, insertion-ordered set of query results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet<T: Hash + Eq> {
    items: IndexSet<T>,
}

impl<T: Hash + Eq> ResultSet<T> {
    /// Create an empty result set
    pub fn new() -> Self {
        Self {
            items: IndexSet::new(),
        }
    }

    /// Insert a result, keeping the first occurrence on duplicates.
    ///
    /// Returns `true` if the result was not already present.
    pub fn insert(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    /// Number of results in the set
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set holds no results
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the set contains the given result
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Iterate results in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Hash + Eq> Default for ResultSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for ResultSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq> Extend<T> for ResultSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Hash + Eq> IntoIterator for ResultSet<T> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Hash + Eq> IntoIterator for &'a ResultSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Hash + Eq + fmt::Display> fmt::Display for ResultSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}

impl ResultSet<QueryValue> {
    /// Convert a whole result set into build targets, all-or-nothing.
    ///
    /// Preserves size and insertion order. Most result sets are uniform, so
    /// the stray-element scan up front keeps the common path to a single
    /// pass over an already-valid set.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MixedResultSet`] naming the whole set if any
    /// element is not a build target; no partial set is produced.
    pub fn into_build_targets(self) -> QueryValueResult<ResultSet<QueryBuildTarget>> {
        if self
            .iter()
            .any(|value| !matches!(value, QueryValue::BuildTarget(_)))
        {
            return Err(QueryError::MixedResultSet {
                set: self.to_string(),
                expected: "build target",
            });
        }

        Ok(self
            .into_iter()
            .filter_map(|value| match value {
                QueryValue::BuildTarget(target) => Some(target),
                QueryValue::File(_) => None,
            })
            .collect())
    }

    /// Convert a whole result set into file targets, all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MixedResultSet`] if any element is not a file.
    pub fn into_file_targets(self) -> QueryValueResult<ResultSet<QueryFileTarget>> {
        if self
            .iter()
            .any(|value| !matches!(value, QueryValue::File(_)))
        {
            return Err(QueryError::MixedResultSet {
                set: self.to_string(),
                expected: "file",
            });
        }

        Ok(self
            .into_iter()
            .filter_map(|value| match value {
                QueryValue::File(file) => Some(file),
                QueryValue::BuildTarget(_) => None,
            })
            .collect())
    }

    /// The subset of results that are build targets, in insertion order.
    ///
    /// Never fails; non-matching elements are dropped.
    pub fn filter_build_targets(&self) -> ResultSet<QueryBuildTarget> {
        let targets: ResultSet<QueryBuildTarget> = self
            .iter()
            .filter_map(|value| match value {
                QueryValue::BuildTarget(target) => Some(target.clone()),
                QueryValue::File(_) => None,
            })
            .collect();

        if targets.len() < self.len() {
            debug!(
                dropped = self.len() - targets.len(),
                kept = targets.len(),
                "dropped non-build-target results while filtering"
            );
        }

        targets
    }

    /// The subset of results that are files, in insertion order.
    ///
    /// Never fails; non-matching elements are dropped.
    pub fn filter_file_targets(&self) -> ResultSet<QueryFileTarget> {
        let files: ResultSet<QueryFileTarget> = self
            .iter()
            .filter_map(|value| match value {
                QueryValue::File(file) => Some(file.clone()),
                QueryValue::BuildTarget(_) => None,
            })
            .collect();

        if files.len() < self.len() {
            debug!(
                dropped = self.len() - files.len(),
                kept = files.len(),
                "dropped non-file results while filtering"
            );
        }

        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::TargetLabel;
    use std::str::FromStr;

    fn build_value(label: &str) -> QueryValue {
        QueryValue::from(QueryBuildTarget::new(
            TargetLabel::from_str(label).unwrap(),
        ))
    }

    fn file_value(path: &str) -> QueryValue {
        QueryValue::from(QueryFileTarget::new(path))
    }

    #[test]
    fn test_insertion_order_and_dedup() {
        let mut set = ResultSet::new();
        assert!(set.insert(build_value("//pkg:b")));
        assert!(set.insert(build_value("//pkg:a")));
        assert!(!set.insert(build_value("//pkg:b")));

        let rendered: Vec<String> = set.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["//pkg:b", "//pkg:a"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_into_build_targets_uniform_set() {
        let set: ResultSet<QueryValue> =
            [build_value("//pkg:lib"), build_value("//pkg:bin")]
                .into_iter()
                .collect();

        let targets = set.into_build_targets().unwrap();
        assert_eq!(targets.len(), 2);

        let rendered: Vec<String> = targets.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["//pkg:lib", "//pkg:bin"]);
    }

    #[test]
    fn test_into_build_targets_rejects_mixed_set() {
        let set: ResultSet<QueryValue> = [
            build_value("//pkg:lib"),
            build_value("//pkg:bin"),
            build_value("//core:tool"),
            file_value("file.txt"),
        ]
        .into_iter()
        .collect();

        let err = set.into_build_targets().unwrap_err();
        let message = err.to_string();
        // The diagnostic names the whole set, not just the offender
        assert!(message.contains("//pkg:lib"));
        assert!(message.contains("file.txt"));
    }

    #[test]
    fn test_into_build_targets_empty_set() {
        let set: ResultSet<QueryValue> = ResultSet::new();
        assert!(set.into_build_targets().unwrap().is_empty());
    }

    #[test]
    fn test_filter_build_targets_keeps_matching_subset() {
        let set: ResultSet<QueryValue> = [
            build_value("//pkg:lib"),
            file_value("file.txt"),
            build_value("//pkg:bin"),
        ]
        .into_iter()
        .collect();

        let targets = set.filter_build_targets();
        assert_eq!(targets.len(), 2);

        let rendered: Vec<String> = targets.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["//pkg:lib", "//pkg:bin"]);
    }

    #[test]
    fn test_filter_build_targets_empty_when_no_match() {
        let set: ResultSet<QueryValue> =
            [file_value("a.txt"), file_value("b.txt")].into_iter().collect();

        assert!(set.filter_build_targets().is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let set: ResultSet<QueryValue> = [
            build_value("//pkg:lib"),
            file_value("file.txt"),
            build_value("//pkg:bin"),
        ]
        .into_iter()
        .collect();

        let once = set.filter_build_targets();
        let twice = once
            .iter()
            .cloned()
            .map(QueryValue::from)
            .collect::<ResultSet<QueryValue>>()
            .filter_build_targets();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_into_file_targets() {
        let files: ResultSet<QueryValue> =
            [file_value("a.txt"), file_value("b.txt")].into_iter().collect();
        assert_eq!(files.into_file_targets().unwrap().len(), 2);

        let mixed: ResultSet<QueryValue> =
            [file_value("a.txt"), build_value("//pkg:lib")].into_iter().collect();
        assert!(mixed.into_file_targets().is_err());
    }

    #[test]
    fn test_display_renders_braced_list() {
        let set: ResultSet<QueryValue> =
            [build_value("//pkg:lib"), file_value("file.txt")].into_iter().collect();
        assert_eq!(set.to_string(), "{//pkg:lib, file.txt}");
    }
}
