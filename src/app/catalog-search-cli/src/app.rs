// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search::SearchIndexAdmin;
use catalog_search_elasticsearch::{ElasticsearchCatalogIndex, ElasticsearchConfig};
use catalog_search_inmem::{
    InMemoryCatalogBrandRepository,
    InMemoryCatalogIndex,
    InMemoryCatalogProductRepository,
};
use catalog_search_postgres::{PostgresCatalogBrandRepository, PostgresCatalogProductRepository};
use database_common::DatabaseConnectionSettings;
use dill::{Catalog, CatalogBuilder};
use internal_error::{InternalError, ResultIntoInternal};

use crate::{CLIConfig, CLIError, CommandOutput, cli, cli_commands};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const BINARY_NAME: &str = "catalog-search-admin";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LOGGING_CONFIG: &str = "info";
const VERBOSE_LOGGING_CONFIG: &str = "debug";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn run(args: cli::Cli) -> Result<(), CLIError> {
    let config = CLIConfig::load(args.config.as_deref())?;

    configure_logging(args.verbose)?;
    tracing::info!(
        version = VERSION,
        args = ?std::env::args().collect::<Vec<_>>(),
        config_path = ?args.config,
        "Initializing {BINARY_NAME}"
    );

    let catalog = configure_catalog(&config)?.build();

    let result = run_command(&catalog, args.command).await;

    match &result {
        Ok(output) => {
            tracing::info!("Command successful");
            output.write_to(std::io::stdout().lock())?;
        }
        Err(err) => {
            tracing::error!(
                error_dbg = ?err,
                error = %err,
                "Command failed",
            );
        }
    }

    result.map(|_| ())
}

pub async fn run_command(
    catalog: &Catalog,
    command: cli::Command,
) -> Result<CommandOutput, CLIError> {
    let mut command = cli_commands::get_command(catalog, command)?;

    if command.needs_indices() {
        catalog
            .get_one::<dyn SearchIndexAdmin>()?
            .ensure_indices()
            .await?;
    }

    command.run().await
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Catalog
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn configure_catalog(config: &CLIConfig) -> Result<CatalogBuilder, CLIError> {
    let mut catalog_builder = CatalogBuilder::new();

    catalog_builder.add_value(config.search.clone());
    catalog_search_services::register_dependencies(&mut catalog_builder);

    if let Some(db_settings) = &config.database {
        configure_database_components(&mut catalog_builder, db_settings)?;
    } else {
        configure_in_memory_components(&mut catalog_builder);
    }

    if let Some(es_config) = &config.elasticsearch {
        configure_elasticsearch_components(&mut catalog_builder, es_config);
    } else {
        tracing::warn!("No elasticsearch section in config, using an in-memory search index");
        catalog_builder.add::<InMemoryCatalogIndex>();
    }

    Ok(catalog_builder)
}

pub fn configure_database_components(
    catalog_builder: &mut CatalogBuilder,
    db_settings: &DatabaseConnectionSettings,
) -> Result<(), CLIError> {
    let pg_pool = database_common::open_pg_pool(db_settings)?;

    catalog_builder.add_value(pg_pool);
    catalog_builder.add::<PostgresCatalogBrandRepository>();
    catalog_builder.add::<PostgresCatalogProductRepository>();

    Ok(())
}

pub fn configure_in_memory_components(catalog_builder: &mut CatalogBuilder) {
    catalog_builder.add::<InMemoryCatalogBrandRepository>();
    catalog_builder.add::<InMemoryCatalogProductRepository>();
}

pub fn configure_elasticsearch_components(
    catalog_builder: &mut CatalogBuilder,
    es_config: &ElasticsearchConfig,
) {
    catalog_builder.add_value(es_config.clone());
    catalog_builder.add::<ElasticsearchCatalogIndex>();
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Logging
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn configure_logging(verbosity_level: u8) -> Result<(), InternalError> {
    use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
    use tracing_log::LogTracer;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::layer::SubscriberExt;

    // Logging may be already initialized when running under tests
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    // Use configuration from RUST_LOG env var if provided
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match verbosity_level {
            0 | 1 => EnvFilter::new(DEFAULT_LOGGING_CONFIG),
            _ => EnvFilter::new(VERBOSE_LOGGING_CONFIG),
        },
    };

    if verbosity_level > 0 {
        return tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .pretty()
            .try_init()
            .map_err(InternalError::new);
    }

    // Stdout carries command output, so JSON logs go to stderr
    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(
            BINARY_NAME.to_owned(),
            std::io::stderr,
        ));

    // Redirect all standard logging to tracing events
    LogTracer::init().int_err()?;

    tracing::subscriber::set_global_default(subscriber).int_err()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
