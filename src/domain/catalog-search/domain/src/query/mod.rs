// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod catalog_query_builder;
mod search_aggregations;
mod search_filter;
mod search_query;
mod search_requests;
mod search_results;

pub use catalog_query_builder::*;
pub use search_aggregations::*;
pub use search_filter::*;
pub use search_query::*;
pub use search_requests::*;
pub use search_results::*;
