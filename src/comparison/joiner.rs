//! Full outer join of baseline and candidate size tables

use crate::collector::SizeTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One example's size under both build variants
///
/// Serialized as `[name, [baseline, candidate]]`, with `null` for a side the
/// example does not exist on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "JoinedRowRepr", into = "JoinedRowRepr")]
pub struct JoinedRow {
    /// Example name
    pub name: String,
    /// Size on the baseline build, if the example exists there
    pub baseline: Option<u64>,
    /// Size on the candidate build, if the example exists there
    pub candidate: Option<u64>,
}

type JoinedRowRepr = (String, (Option<u64>, Option<u64>));

impl From<JoinedRowRepr> for JoinedRow {
    fn from((name, (baseline, candidate)): JoinedRowRepr) -> Self {
        Self {
            name,
            baseline,
            candidate,
        }
    }
}

impl From<JoinedRow> for JoinedRowRepr {
    fn from(row: JoinedRow) -> Self {
        (row.name, (row.baseline, row.candidate))
    }
}

impl JoinedRow {
    /// True if the example only exists on the candidate build
    pub fn is_added(&self) -> bool {
        self.baseline.is_none() && self.candidate.is_some()
    }

    /// True if the example only exists on the baseline build
    pub fn is_removed(&self) -> bool {
        self.baseline.is_some() && self.candidate.is_none()
    }
}

/// Join two tables over the union of their example names
///
/// Rows come back sorted by name. An example missing from one table keeps that
/// side as `None`.
pub fn join_tables(baseline: &SizeTable, candidate: &SizeTable) -> Vec<JoinedRow> {
    let names: BTreeSet<&str> = baseline.names().chain(candidate.names()).collect();

    names
        .into_iter()
        .map(|name| JoinedRow {
            name: name.to_string(),
            baseline: baseline.get(name),
            candidate: candidate.get(name),
        })
        .collect()
}
