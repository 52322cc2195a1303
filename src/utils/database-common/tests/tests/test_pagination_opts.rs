// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use database_common::PaginationOpts;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_from_page() {
    pretty_assertions::assert_eq!(
        PaginationOpts {
            limit: 50,
            offset: 100
        },
        PaginationOpts::from_page(2, 50)
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_safe_limit() {
    for (page, per_page, total, expected_limit) in [
        (0, 50, 130, 50),
        (1, 50, 130, 50),
        (2, 50, 130, 30),
        (3, 50, 130, 0),
        (0, 10, 0, 0),
    ] {
        pretty_assertions::assert_eq!(
            expected_limit,
            PaginationOpts::from_page(page, per_page).safe_limit(total),
            "page={page} per_page={per_page} total={total}"
        );
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_next_page_keeps_limit() {
    let pagination = PaginationOpts::from_page(0, 50).next_page().next_page();

    pretty_assertions::assert_eq!(
        PaginationOpts {
            limit: 50,
            offset: 100
        },
        pagination
    );
    pretty_assertions::assert_eq!((50, 100), (pagination.limit_i64(), pagination.offset_i64()));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
