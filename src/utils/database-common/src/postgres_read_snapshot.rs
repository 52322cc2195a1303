// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::{InternalError, ResultIntoInternal};
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Transaction};

use crate::DatabaseConnectionSettings;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Opens a lazily connecting pool, so that startup does not require the
/// database to be reachable
pub fn open_pg_pool(settings: &DatabaseConnectionSettings) -> Result<PgPool, InternalError> {
    tracing::debug!(
        host = %settings.host,
        port = settings.port(),
        database_name = %settings.database_name,
        "Opening Postgres connection pool"
    );

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_lazy(settings.connection_string().expose_secret())
        .int_err()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A read-only repeatable-read transaction: every query issued through it
/// observes the same committed state of the database.
///
/// Dropping the snapshot rolls the transaction back, which is the intended
/// way to release it.
pub struct PgReadSnapshot {
    transaction: Transaction<'static, Postgres>,
}

impl PgReadSnapshot {
    pub async fn begin(pool: &PgPool) -> Result<Self, InternalError> {
        let mut transaction = pool.begin().await.int_err()?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *transaction)
            .await
            .int_err()?;

        Ok(Self { transaction })
    }

    pub fn connection(&mut self) -> &mut sqlx::PgConnection {
        &mut *self.transaction
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
