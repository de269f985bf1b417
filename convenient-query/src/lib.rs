//! Typed result values for the bitzel build-graph query language
//!
//! Inspired by Bazel's query command, bitzel-style queries answer questions
//! like "what does `//core/busybox:busybox` depend on". Evaluating such an
//! expression yields a set of results, and not all of them are build
//! targets: some operators return files. This crate is the value layer the
//! evaluator exchanges those results through:
//!
//! - [`TargetLabel`] - a `//package:name` build target identifier
//! - [`QueryValue`] - the closed union of everything a query can return,
//!   with [`QueryBuildTarget`] and [`QueryFileTarget`] as its variants
//! - [`ResultSet`] - unique, insertion-ordered result collections with
//!   all-or-nothing and filtering conversions down to one variant
//! - [`format_results`] - text/json/label/dot rendering of result sets
//!
//! Parsing query expressions, evaluating operators, and walking the
//! dependency graph live in the evaluator that consumes this crate.
//!
//! # Example
//!
//! ```
//! use convenient_query::{QueryBuildTarget, QueryFileTarget, QueryValue, ResultSet, TargetLabel};
//! use std::str::FromStr;
//!
//! let lib = TargetLabel::from_str("//pkg:lib")?;
//! let results: ResultSet<QueryValue> = [
//!     QueryValue::from(QueryBuildTarget::new(lib)),
//!     QueryValue::from(QueryFileTarget::new("pkg/gen.h")),
//! ]
//! .into_iter()
//! .collect();
//!
//! // Keep only the build targets
//! let targets = results.filter_build_targets();
//! assert_eq!(targets.len(), 1);
//!
//! // Asserting a uniform set on mixed input fails instead
//! assert!(results.into_build_targets().is_err());
//! # Ok::<(), convenient_query::QueryError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod label;
pub mod output;
pub mod set;
pub mod value;

pub use error::{QueryError, QueryValueResult};
pub use label::TargetLabel;
pub use output::{OutputFormat, QueryMetadata, QueryReport, ReportEntry, format_results};
pub use set::ResultSet;
pub use value::{QueryBuildTarget, QueryFileTarget, QueryValue};
