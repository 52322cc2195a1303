// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search::*;
use dill::Catalog;

use crate::cli::{self, SearchSubCommand};
use crate::commands::*;
use crate::CLIError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn get_command(catalog: &Catalog, command: cli::Command) -> Result<Box<dyn Command>, CLIError> {
    let command: Box<dyn Command> = match command {
        cli::Command::Health => Box::new(HealthCommand::new(catalog.get_one()?)),

        cli::Command::Sync(sc) => {
            let target = match sc {
                cli::SyncSubCommand::Brands => SyncTarget::AllBrands,
                cli::SyncSubCommand::Products => SyncTarget::AllProducts,
                cli::SyncSubCommand::All => SyncTarget::Everything,
                cli::SyncSubCommand::Batch { batch_size } => {
                    SyncTarget::ProductsInBatches { batch_size }
                }
                cli::SyncSubCommand::Brand { id } => SyncTarget::Brand(id),
                cli::SyncSubCommand::Product { id } => SyncTarget::Product(id),
            };
            Box::new(SyncCommand::new(catalog.get_one()?, target))
        }

        cli::Command::Delete(sc) => match sc {
            cli::DeleteSubCommand::Brand { id } => {
                Box::new(DeleteBrandCommand::new(catalog.get_one()?, id))
            }
            cli::DeleteSubCommand::Product { id } => {
                Box::new(DeleteProductCommand::new(catalog.get_one()?, id))
            }
        },

        cli::Command::Rebuild => Box::new(RebuildCommand::new(catalog.get_one()?)),

        cli::Command::Search(sc) => Box::new(SearchCommand::new(
            catalog.get_one()?,
            search_query(sc),
        )),

        cli::Command::Suggest(c) => {
            let mut request = SuggestionsRequest::new(c.query, c.suggestion_type.into(), c.limit);
            request.include_products = !c.no_products;
            request.include_brands = !c.no_brands;

            Box::new(SuggestCommand::new(catalog.get_one()?, request))
        }

        cli::Command::Analytics(c) => Box::new(AnalyticsCommand::new(
            catalog.get_one()?,
            c.query,
            c.brand_ids,
            c.categories,
        )),
    };

    Ok(command)
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() { None } else { Some(values) }
}

fn search_query(sc: SearchSubCommand) -> SearchQuery {
    match sc {
        SearchSubCommand::Products(c) => SearchQuery::Products(ProductSearchRequest {
            query: c.query,
            brand_ids: non_empty(c.brand_ids),
            categories: non_empty(c.categories),
            tags: non_empty(c.tags),
            min_price: c.min_price,
            max_price: c.max_price,
            min_rating: c.min_rating,
            page: c.page.page,
            size: c.page.size,
            sort_by: c.sort.sort_by,
            sort_direction: c.sort.sort_direction,
            fuzzy: !c.exact,
        }),
        SearchSubCommand::Brands(c) => SearchQuery::Brands(BrandSearchRequest {
            query: c.query,
            is_active: c.is_active,
            min_product_count: c.min_product_count,
            page: c.page.page,
            size: c.page.size,
            sort_by: c.sort.sort_by,
            sort_direction: c.sort.sort_direction,
        }),
        SearchSubCommand::Global(c) => SearchQuery::Global {
            query: c.query,
            page: c.page.page,
            size: c.page.size,
            scope: if c.include_inactive {
                ActivityScope::IncludeInactive
            } else {
                ActivityScope::ActiveOnly
            },
        },
        SearchSubCommand::Similar(c) => SearchQuery::Similar {
            product_id: c.product_id,
            product_name: c.name,
            brand_name: c.brand,
            limit: c.limit,
        },
        SearchSubCommand::Popular(page) => SearchQuery::Popular {
            page: page.page,
            size: page.size,
        },
        SearchSubCommand::TopRated(c) => SearchQuery::TopRated {
            min_rating: c.min_rating,
            page: c.page.page,
            size: c.page.size,
        },
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
