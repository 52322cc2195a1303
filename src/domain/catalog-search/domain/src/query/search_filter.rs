// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use rust_decimal::Decimal;

use crate::SearchFieldPath;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub enum SearchFilterExpr {
    /// Matches every document
    MatchAll,

    Field {
        field: SearchFieldPath,
        op: SearchFilterOp,
    },

    And(Vec<SearchFilterExpr>),

    Or(Vec<SearchFilterExpr>),

    Not(Box<SearchFilterExpr>),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl SearchFilterExpr {
    pub fn and_clauses(clauses: Vec<SearchFilterExpr>) -> Self {
        match clauses.len() {
            0 => SearchFilterExpr::MatchAll,
            1 => clauses.into_iter().next().unwrap_or(SearchFilterExpr::MatchAll),
            _ => SearchFilterExpr::And(clauses),
        }
    }

    pub fn or_clauses(clauses: Vec<SearchFilterExpr>) -> Self {
        match clauses.len() {
            0 => SearchFilterExpr::MatchAll,
            1 => clauses.into_iter().next().unwrap_or(SearchFilterExpr::MatchAll),
            _ => SearchFilterExpr::Or(clauses),
        }
    }

    /// Lets documents that lack the field pass the condition
    pub fn or_missing(self, field: SearchFieldPath) -> Self {
        crate::filter_or!(self, field_missing(field))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

// AND: variable number of arguments
#[macro_export]
macro_rules! filter_and {
    () => {
        compile_error!("filter_and!() requires at least one argument")
    };

    ($single:expr) => {
        $single
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::SearchFilterExpr::And(vec![$first, $($rest),+])
    };
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

// OR: variable number of arguments
#[macro_export]
macro_rules! filter_or {
    () => {
        compile_error!("filter_or!() requires at least one argument")
    };

    ($single:expr) => {
        $single
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::SearchFilterExpr::Or(vec![$first, $($rest),+])
    };
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[macro_export]
macro_rules! filter_not {
    ($expr:expr) => {
        $crate::SearchFilterExpr::Not(Box::new($expr))
    };
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Operands are JSON values in the same representation the documents use,
/// so decimal amounts travel as strings
#[derive(Debug, Clone, PartialEq)]
pub enum SearchFilterOp {
    Eq(serde_json::Value),
    Ne(serde_json::Value),
    Lt(serde_json::Value),
    Lte(serde_json::Value),
    Gt(serde_json::Value),
    Gte(serde_json::Value),
    In(Vec<serde_json::Value>),
    Prefix(String),
    Exists,
}

#[inline]
pub fn field_eq_bool(field: SearchFieldPath, value: bool) -> SearchFilterExpr {
    SearchFilterExpr::Field {
        field,
        op: SearchFilterOp::Eq(serde_json::Value::Bool(value)),
    }
}

#[inline]
pub fn field_eq_str(field: SearchFieldPath, value: &str) -> SearchFilterExpr {
    SearchFilterExpr::Field {
        field,
        op: SearchFilterOp::Eq(serde_json::json!(value)),
    }
}

#[inline]
pub fn field_ne_str(field: SearchFieldPath, value: &str) -> SearchFilterExpr {
    SearchFilterExpr::Field {
        field,
        op: SearchFilterOp::Ne(serde_json::json!(value)),
    }
}

#[inline]
pub fn field_in_str<S>(
    field: SearchFieldPath,
    values: impl IntoIterator<Item = S>,
) -> SearchFilterExpr
where
    S: Into<String>,
{
    SearchFilterExpr::Field {
        field,
        op: SearchFilterOp::In(
            values
                .into_iter()
                .map(|v| serde_json::Value::String(v.into()))
                .collect(),
        ),
    }
}

#[inline]
pub fn field_gte_decimal(field: SearchFieldPath, value: Decimal) -> SearchFilterExpr {
    SearchFilterExpr::Field {
        field,
        op: SearchFilterOp::Gte(serde_json::Value::String(value.to_string())),
    }
}

#[inline]
pub fn field_lte_decimal(field: SearchFieldPath, value: Decimal) -> SearchFilterExpr {
    SearchFilterExpr::Field {
        field,
        op: SearchFilterOp::Lte(serde_json::Value::String(value.to_string())),
    }
}

#[inline]
pub fn field_gte_num(field: SearchFieldPath, value: f64) -> SearchFilterExpr {
    SearchFilterExpr::Field {
        field,
        op: SearchFilterOp::Gte(serde_json::json!(value)),
    }
}

#[inline]
pub fn field_gte_int(field: SearchFieldPath, value: i64) -> SearchFilterExpr {
    SearchFilterExpr::Field {
        field,
        op: SearchFilterOp::Gte(serde_json::json!(value)),
    }
}

#[inline]
pub fn field_prefix(field: SearchFieldPath, prefix: &str) -> SearchFilterExpr {
    SearchFilterExpr::Field {
        field,
        op: SearchFilterOp::Prefix(prefix.to_string()),
    }
}

#[inline]
pub fn field_exists(field: SearchFieldPath) -> SearchFilterExpr {
    SearchFilterExpr::Field {
        field,
        op: SearchFilterOp::Exists,
    }
}

#[inline]
pub fn field_missing(field: SearchFieldPath) -> SearchFilterExpr {
    crate::filter_not!(field_exists(field))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
