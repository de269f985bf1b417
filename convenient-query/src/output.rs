//! Query result output formatting
//!
//! Formats result sets in the output formats the query CLI exposes.

use crate::error::{QueryError, QueryValueResult};
use crate::set::ResultSet;
use crate::value::QueryValue;
use serde::{Deserialize, Serialize};

/// Output format for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text (default)
    Text,
    /// JSON output
    Json,
    /// GraphViz dot format
    Graph,
    /// List of labels only
    Label,
}

impl std::str::FromStr for OutputFormat {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "graph" => Ok(OutputFormat::Graph),
            "label" => Ok(OutputFormat::Label),
            _ => Err(QueryError::UnknownFormat(s.to_string())),
        }
    }
}

/// Serialized form of a query run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryReport {
    /// One entry per result, in result-set order
    pub results: Vec<ReportEntry>,
    /// Optional run metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<QueryMetadata>,
}

/// One result in a [`QueryReport`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Variant of the result ("build target" or "file")
    pub kind: String,
    /// Rendered label or path
    pub value: String,
}

/// Query run metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryMetadata {
    /// The query expression that produced the results
    pub query: String,
    /// Number of results
    pub result_count: usize,
    /// Wall-clock execution time, if measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

/// Format a result set in the requested output format.
///
/// # Errors
///
/// Returns [`QueryError::Serialization`] if JSON encoding fails.
pub fn format_results(
    results: &ResultSet<QueryValue>,
    format: OutputFormat,
    metadata: Option<QueryMetadata>,
) -> QueryValueResult<String> {
    match format {
        OutputFormat::Text => Ok(format_text(results, metadata)),
        OutputFormat::Json => format_json(results, metadata),
        OutputFormat::Graph => Ok(format_graph(results)),
        OutputFormat::Label => Ok(format_label(results)),
    }
}

fn format_text(results: &ResultSet<QueryValue>, metadata: Option<QueryMetadata>) -> String {
    let mut output = String::new();

    if let Some(meta) = metadata {
        output.push_str(&format!("# Query: {}\n", meta.query));
        output.push_str(&format!("# Results: {}\n", meta.result_count));
        if let Some(time) = meta.execution_time_ms {
            output.push_str(&format!("# Execution time: {time}ms\n"));
        }
        output.push('\n');
    }

    for result in results {
        output.push_str(&format!("{result}\n"));
    }

    output
}

fn format_json(
    results: &ResultSet<QueryValue>,
    metadata: Option<QueryMetadata>,
) -> QueryValueResult<String> {
    let report = QueryReport {
        results: results
            .iter()
            .map(|result| ReportEntry {
                kind: result.variant_name().to_string(),
                value: result.to_string(),
            })
            .collect(),
        metadata,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

fn format_graph(results: &ResultSet<QueryValue>) -> String {
    // Nodes only; edges belong to the graph side of the evaluator
    let mut output = String::new();

    output.push_str("digraph dependencies {\n");
    output.push_str("  rankdir=LR;\n");
    output.push_str("  node [shape=box];\n\n");

    for result in results {
        output.push_str(&format!("  \"{result}\";\n"));
    }

    output.push_str("}\n");

    output
}

fn format_label(results: &ResultSet<QueryValue>) -> String {
    let mut output = String::new();

    for result in results {
        output.push_str(&format!("{result}\n"));
    }

    output
}
