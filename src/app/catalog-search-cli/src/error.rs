// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search::{CatalogSearchError, SearchSuggestionsError, SyncError};
use internal_error::{BoxedError, InternalError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum CLIError {
    /// Invalid arguments or configuration
    #[error("{source}")]
    UsageError { source: BoxedError },

    /// The command ran but could not complete
    #[error(transparent)]
    Failure(BoxedError),

    /// Unexpected failure of the tool or its environment
    #[error(transparent)]
    CriticalFailure(BoxedError),
}

impl CLIError {
    pub fn usage_error(msg: impl Into<String>) -> Self {
        Self::UsageError {
            source: msg.into().into(),
        }
    }

    pub fn usage_error_from(e: impl Into<BoxedError>) -> Self {
        Self::UsageError { source: e.into() }
    }

    pub fn failure(e: impl Into<BoxedError>) -> Self {
        Self::Failure(e.into())
    }

    pub fn critical(e: impl Into<BoxedError>) -> Self {
        Self::CriticalFailure(e.into())
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UsageError { .. } => 2,
            Self::Failure(_) | Self::CriticalFailure(_) => 1,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl From<InternalError> for CLIError {
    fn from(e: InternalError) -> Self {
        Self::critical(e)
    }
}

impl From<dill::InjectionError> for CLIError {
    fn from(e: dill::InjectionError) -> Self {
        Self::critical(e)
    }
}

impl From<CatalogSearchError> for CLIError {
    fn from(e: CatalogSearchError) -> Self {
        match e {
            CatalogSearchError::Validation(e) => Self::usage_error_from(e),
            CatalogSearchError::Internal(e) => Self::critical(e),
        }
    }
}

impl From<SearchSuggestionsError> for CLIError {
    fn from(e: SearchSuggestionsError) -> Self {
        match e {
            SearchSuggestionsError::Validation(e) => Self::usage_error_from(e),
            SearchSuggestionsError::Internal(e) => Self::critical(e),
        }
    }
}

impl From<SyncError> for CLIError {
    fn from(e: SyncError) -> Self {
        match e {
            e @ SyncError::RebuildInProgress => Self::failure(e),
            SyncError::Internal(e) => Self::critical(e),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
