// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod catalog_search_service_impl;
mod dependencies;
mod document_mapper;
mod search_suggestions_service_impl;
mod search_synchronization_service_impl;

pub use catalog_search_service_impl::*;
pub use dependencies::*;
pub use document_mapper::*;
pub use search_suggestions_service_impl::*;
pub use search_synchronization_service_impl::*;
