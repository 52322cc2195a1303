// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod brand_document;
mod catalog_document;
mod product_document;

pub use brand_document::*;
pub use catalog_document::*;
pub use product_document::*;
