// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use catalog_search::{BrandId, ProductId, SuggestionType};
use rust_decimal::Decimal;

use crate::CONFIG_PATH_ENV_VAR;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Administration of the catalog search index
#[derive(Debug, clap::Parser)]
#[command(name = crate::BINARY_NAME, version)]
pub struct Cli {
    /// Path to the YAML config file
    #[arg(long, global = true, env = CONFIG_PATH_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Sets the level of verbosity (repeat for more)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Cluster health and document counts
    Health,

    /// Copy catalog entities into the search index
    #[command(subcommand)]
    Sync(SyncSubCommand),

    /// Remove documents from the search index
    #[command(subcommand)]
    Delete(DeleteSubCommand),

    /// Clear both indices and synchronize everything again
    Rebuild,

    /// Query the search index
    #[command(subcommand)]
    Search(SearchSubCommand),

    /// Search-as-you-type suggestions
    Suggest(Suggest),

    /// Facet counts and averages over matching products
    Analytics(Analytics),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, clap::Subcommand)]
pub enum SyncSubCommand {
    /// Every brand
    Brands,

    /// Every product
    Products,

    /// Brands, then products
    All,

    /// Every product, one page at a time
    Batch {
        /// Products per page, zero selects the configured default
        #[arg(long, default_value_t = 0)]
        batch_size: usize,
    },

    /// A single brand
    Brand { id: BrandId },

    /// A single product
    Product { id: ProductId },
}

#[derive(Debug, clap::Subcommand)]
pub enum DeleteSubCommand {
    /// A brand along with its products
    Brand { id: BrandId },

    /// A single product
    Product { id: ProductId },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, clap::Subcommand)]
pub enum SearchSubCommand {
    /// Full-text product search with filters
    Products(SearchProducts),

    /// Full-text brand search
    Brands(SearchBrands),

    /// Products and brands at once
    Global(SearchGlobal),

    /// Products similar to the given one
    Similar(SearchSimilar),

    /// Most viewed and ordered products
    Popular(PageArgs),

    /// Best rated products
    TopRated(SearchTopRated),
}

#[derive(Debug, Clone, Copy, clap::Args)]
pub struct PageArgs {
    /// Zero-based page number
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Page size, zero selects the default
    #[arg(long, default_value_t = 0)]
    pub size: usize,
}

#[derive(Debug, clap::Args)]
pub struct SortArgs {
    /// Field to sort by, relevance when omitted
    #[arg(long)]
    pub sort_by: Option<String>,

    /// `asc` or `desc`
    #[arg(long)]
    pub sort_direction: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct SearchProducts {
    /// Free-text query
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    #[arg(long = "brand-id")]
    pub brand_ids: Vec<BrandId>,

    #[arg(long = "category")]
    pub categories: Vec<String>,

    #[arg(long = "tag")]
    pub tags: Vec<String>,

    #[arg(long)]
    pub min_price: Option<Decimal>,

    #[arg(long)]
    pub max_price: Option<Decimal>,

    #[arg(long)]
    pub min_rating: Option<f32>,

    /// Disables typo tolerance
    #[arg(long)]
    pub exact: bool,

    #[command(flatten)]
    pub page: PageArgs,

    #[command(flatten)]
    pub sort: SortArgs,
}

#[derive(Debug, clap::Args)]
pub struct SearchBrands {
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Only active brands when omitted
    #[arg(long)]
    pub is_active: Option<bool>,

    #[arg(long)]
    pub min_product_count: Option<i64>,

    #[command(flatten)]
    pub page: PageArgs,

    #[command(flatten)]
    pub sort: SortArgs,
}

#[derive(Debug, clap::Args)]
pub struct SearchGlobal {
    pub query: String,

    /// Also match inactive products and brands
    #[arg(long)]
    pub include_inactive: bool,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Debug, clap::Args)]
pub struct SearchSimilar {
    pub product_id: ProductId,

    /// Name of the product to find look-alikes for
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Debug, clap::Args)]
pub struct SearchTopRated {
    #[arg(long, default_value_t = 4.0)]
    pub min_rating: f32,

    #[command(flatten)]
    pub page: PageArgs,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, clap::Args)]
pub struct Suggest {
    pub query: String,

    #[arg(long = "type", value_enum, default_value_t = SuggestionTypeArg::All)]
    pub suggestion_type: SuggestionTypeArg,

    /// Zero selects the configured default
    #[arg(long, default_value_t = 0)]
    pub limit: usize,

    #[arg(long)]
    pub no_products: bool,

    #[arg(long)]
    pub no_brands: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SuggestionTypeArg {
    All,
    Products,
    Brands,
    Autocomplete,
}

impl From<SuggestionTypeArg> for SuggestionType {
    fn from(value: SuggestionTypeArg) -> Self {
        match value {
            SuggestionTypeArg::All => Self::All,
            SuggestionTypeArg::Products => Self::Products,
            SuggestionTypeArg::Brands => Self::Brands,
            SuggestionTypeArg::Autocomplete => Self::Autocomplete,
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct Analytics {
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    #[arg(long = "brand-id")]
    pub brand_ids: Vec<BrandId>,

    #[arg(long = "category")]
    pub categories: Vec<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
