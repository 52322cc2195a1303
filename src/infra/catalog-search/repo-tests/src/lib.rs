// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod catalog_brand_repository_test_suite;
mod catalog_fixture;
mod catalog_product_repository_test_suite;

pub use catalog_brand_repository_test_suite::*;
pub use catalog_fixture::*;
pub use catalog_product_repository_test_suite::*;
