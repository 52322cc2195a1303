// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::SearchFieldPath;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub struct AggregationSpec {
    pub name: &'static str,
    pub kind: AggregationKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AggregationKind {
    /// Most frequent values with their document counts
    Terms { field: SearchFieldPath, size: usize },

    Avg { field: SearchFieldPath },

    Range {
        field: SearchFieldPath,
        ranges: Vec<RangeBound>,
    },
}

/// Numeric bucket, `from` is inclusive and `to` is exclusive
#[derive(Debug, Clone, PartialEq)]
pub struct RangeBound {
    pub key: &'static str,
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl RangeBound {
    pub fn contains(&self, value: f64) -> bool {
        self.from.is_none_or(|from| value >= from) && self.to.is_none_or(|to| value < to)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub enum AggregationResult {
    Terms(Vec<TermsBucket>),
    /// `None` when no document had a value
    Avg(Option<f64>),
    Range(Vec<RangeBucket>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsBucket {
    pub key: String,
    pub doc_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeBucket {
    pub key: String,
    pub doc_count: u64,
}

pub type AggregationResults = BTreeMap<String, AggregationResult>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
