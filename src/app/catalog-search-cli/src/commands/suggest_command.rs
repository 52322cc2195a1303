// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use catalog_search::{SearchSuggestionsService, SuggestionsRequest};

use super::Command;
use crate::{CLIError, CommandOutput};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct SuggestCommand {
    suggestions_svc: Arc<dyn SearchSuggestionsService>,
    request: SuggestionsRequest,
}

impl SuggestCommand {
    pub fn new(
        suggestions_svc: Arc<dyn SearchSuggestionsService>,
        request: SuggestionsRequest,
    ) -> Self {
        Self {
            suggestions_svc,
            request,
        }
    }
}

#[async_trait::async_trait]
impl Command for SuggestCommand {
    async fn run(&mut self) -> Result<CommandOutput, CLIError> {
        let response = self
            .suggestions_svc
            .get_suggestions(self.request.clone())
            .await?;

        tracing::debug!(
            total_suggestions = response.total_suggestions,
            execution_time_ms = response.execution_time_ms,
            "Suggestions ready"
        );

        CommandOutput::from_serializable(&response)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
