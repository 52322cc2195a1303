// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const POSTGRES_DEFAULT_PORT: u16 = 5432;

const fn default_max_connections() -> u32 {
    10
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Connection parameters of the Postgres catalog store
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConnectionSettings {
    pub host: String,
    pub port: Option<u16>,
    pub database_name: String,
    pub user: Option<String>,
    pub password: Option<SecretString>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConnectionSettings {
    pub fn new(host: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
            database_name: database_name.into(),
            user: None,
            password: None,
            max_connections: default_max_connections(),
        }
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(POSTGRES_DEFAULT_PORT)
    }

    pub fn connection_string(&self) -> SecretString {
        let credentials = match (&self.user, &self.password) {
            (Some(user), Some(password)) => format!("{user}:{}@", password.expose_secret()),
            (Some(user), None) => format!("{user}@"),
            (None, _) => String::new(),
        };

        SecretString::from(format!(
            "postgres://{credentials}{}:{}/{}",
            self.host,
            self.port(),
            self.database_name
        ))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
